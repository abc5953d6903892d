//! Codec for the equation-group terms consumed and produced by the
//! pattern-matching equation compiler.
//!
//! An equation group encodes a set of mutually-recursive, pattern-matching
//! function definitions as a single opaque term. The encoding is a leftover
//! from the previous equation compiler and carries an awkward legacy
//! indirection (every clause re-binds all of the group's functions); this
//! crate hides it behind a structured, mutable in-memory form that
//! compilation passes can rewrite freely, then re-encodes a term
//! structurally indistinguishable from the encoder's output, ready for
//! kernel type-checking.
//!
//! # Pieces
//!
//! - [`TmpLocals`] - LIFO stack of fresh placeholders standing for nested
//!   binders; the capture-safety backbone of every decode and repack.
//! - [`UnpackEqns`] / [`UnpackEqn`] - group-level and clause-level codecs:
//!   decode, in-place lhs/rhs rewriting, `add_var`, `update_fn_type`,
//!   repack.
//! - [`EqnsEnvInterface`] - narrow read-only facade over the inductive-type
//!   registry, for pattern-splitting passes.
//! - [`is_recursive_eqns`] - detects self/mutual references in clause
//!   bodies, steering the structural vs. well-founded strategy choice
//!   downstream.
//! - [`EqnsError`] - the single fatal signal raised when a term does not
//!   match the shape the encoder produces.
//!
//! # Example
//!
//! ```
//! use eqns_repr::{ElabCtx, Term, TmpLocals, UnpackEqns};
//!
//! let ctx = ElabCtx::new();
//! let nat = Term::Const(ctx.intern("Nat"));
//!
//! // id : Nat -> Nat, one clause: id x = x
//! let mut build = TmpLocals::new();
//! let id_ty = Term::pi(ctx.intern("a"), nat.clone(), nat.clone());
//! let f = build.push(&ctx, ctx.intern("id"), id_ty);
//! let x = build.push(&ctx, ctx.intern("x"), nat);
//! let clause = build.mk_lambda(Term::equation(Term::app(f, x.clone()), x));
//! let group = Term::equations(1, vec![clause]);
//!
//! let unpacked = UnpackEqns::new(&ctx, &group).expect("well-formed group");
//! assert_eq!(unpacked.num_fns(), 1);
//! assert_eq!(unpacked.arity_of(0), 1);
//! assert_eq!(unpacked.repack(), group);
//! ```

pub mod codec;
pub mod env;
pub mod locals;
pub mod term;

mod ctx;
mod error;
mod recursion;

pub use codec::{UnpackEqn, UnpackEqns};
pub use ctx::{ElabCtx, FVarIdCounter};
pub use env::{Environment, EqnsEnvInterface, InductiveDecl};
pub use error::{EqnsError, EqnsResult};
pub use locals::{LocalEntry, TmpLocals};
pub use recursion::is_recursive_eqns;
pub use term::{FVarId, Name, Term};

#[cfg(test)]
mod tests;

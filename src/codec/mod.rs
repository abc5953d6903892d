//! Decode/edit/repack machinery for equation-group terms.
//!
//! The equations encoder wraps a group of mutually-defined pattern-matching
//! functions into one opaque [`crate::term::Term::Equations`] node, and
//! every clause inside it carries a legacy wrapping indirection: the clause
//! re-binds all the group's functions as leading lambdas before its own
//! pattern variables. That encoding is a leftover from the previous
//! equation compiler and is awkward for every pass that wants to rewrite a
//! group.
//!
//! This module hides it completely. [`UnpackEqns`] decodes a whole group
//! into function slots with stable placeholders; [`UnpackEqn`] decodes one
//! clause into pattern variables, a left-hand pattern, and a body. Passes
//! edit the decoded form and repack; the output is structurally
//! indistinguishable from what the encoder produces.

mod eqn;
mod eqns;

pub use eqn::UnpackEqn;
pub use eqns::UnpackEqns;

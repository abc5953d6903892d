//! Term language of the equation compiler.
//!
//! Locally nameless representation: variables bound by a binder in the same
//! term are de Bruijn indices ([`Term::BVar`]), variables under edit are
//! free placeholders ([`Term::FVar`]) allocated through the binder stack in
//! [`crate::locals`]. Because placeholders are globally fresh, no binder
//! encountered during a traversal can ever re-capture one.
//!
//! The [`Term::Equations`] and [`Term::Equation`] nodes are the opaque tags
//! the equations encoder wraps groups and clauses in. Their internal shape
//! is a legacy of the old equation compiler; the codec in [`crate::codec`]
//! is the only module that takes them apart or puts them back together.

use std::fmt;

use lasso::Spur;
use serde::{Deserialize, Serialize};

pub mod subst;

/// Interned identifier (binder names, constant names).
pub type Name = Spur;

// ============================================================================
// FVarId
// ============================================================================

/// Free-variable identifier.
///
/// Wraps a u32 for efficient storage and comparison. Fresh ids come from
/// [`crate::ctx::FVarIdCounter`]; two placeholders never share an id within
/// one elaboration context.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct FVarId(pub u32);

impl FVarId {
    /// Create a free-variable id from a raw value.
    #[must_use]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    /// Get the raw id value.
    #[must_use]
    pub const fn raw(self) -> u32 {
        self.0
    }
}

impl fmt::Display for FVarId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "fvar#{}", self.0)
    }
}

// ============================================================================
// Term
// ============================================================================

/// Term underlying the equation compiler.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Term {
    /// Bound variable (de Bruijn index, innermost binder is 0).
    BVar(u32),

    /// Free variable: a placeholder standing for a binder site during
    /// editing, later re-abstracted into a proper nested binder.
    FVar(FVarId),

    /// Global constant reference (constructors and inductive heads included).
    Const(Name),

    /// Universe `Sort u`.
    Sort(u32),

    /// Application `f a`.
    App(Box<Term>, Box<Term>),

    /// Lambda abstraction `fun (name : ty) => body`.
    Lam {
        name: Name,
        ty: Box<Term>,
        body: Box<Term>,
    },

    /// Dependent function type `(name : ty) -> body`.
    Pi {
        name: Name,
        ty: Box<Term>,
        body: Box<Term>,
    },

    /// Equation-group tag produced by the equations encoder.
    ///
    /// Every element of `eqns` re-binds all `num_fns` functions as leading
    /// lambdas before its own pattern-variable binders. That per-clause
    /// indirection is awkward to work with directly; use
    /// [`crate::codec::UnpackEqns`] instead.
    Equations { num_fns: u32, eqns: Vec<Term> },

    /// Per-clause marker separating a left-hand pattern from its body.
    Equation { lhs: Box<Term>, rhs: Box<Term> },
}

impl Term {
    /// Create an application node.
    #[must_use]
    pub fn app(f: Term, arg: Term) -> Self {
        Self::App(Box::new(f), Box::new(arg))
    }

    /// Apply `f` to every argument in order: `apps(f, [a, b])` is `(f a) b`.
    #[must_use]
    pub fn apps(f: Term, args: impl IntoIterator<Item = Term>) -> Self {
        args.into_iter().fold(f, Self::app)
    }

    /// Create a lambda abstraction.
    #[must_use]
    pub fn lam(name: Name, ty: Term, body: Term) -> Self {
        Self::Lam {
            name,
            ty: Box::new(ty),
            body: Box::new(body),
        }
    }

    /// Create a dependent function type.
    #[must_use]
    pub fn pi(name: Name, ty: Term, body: Term) -> Self {
        Self::Pi {
            name,
            ty: Box::new(ty),
            body: Box::new(body),
        }
    }

    /// Create an equation-group tag.
    #[must_use]
    pub fn equations(num_fns: u32, eqns: Vec<Term>) -> Self {
        Self::Equations { num_fns, eqns }
    }

    /// Create a per-clause equation marker.
    #[must_use]
    pub fn equation(lhs: Term, rhs: Term) -> Self {
        Self::Equation {
            lhs: Box::new(lhs),
            rhs: Box::new(rhs),
        }
    }

    /// Check if this term is a lambda abstraction.
    #[must_use]
    pub const fn is_lambda(&self) -> bool {
        matches!(self, Self::Lam { .. })
    }

    /// Check if this term is a dependent function type.
    #[must_use]
    pub const fn is_pi(&self) -> bool {
        matches!(self, Self::Pi { .. })
    }

    /// Check if this term carries the equation-group tag.
    #[must_use]
    pub const fn is_equations(&self) -> bool {
        matches!(self, Self::Equations { .. })
    }

    /// Check if this term is a per-clause equation marker.
    #[must_use]
    pub const fn is_equation(&self) -> bool {
        matches!(self, Self::Equation { .. })
    }

    /// Extract the free-variable id if this term is an `FVar`.
    #[must_use]
    pub const fn fvar_id(&self) -> Option<FVarId> {
        match self {
            Self::FVar(id) => Some(*id),
            _ => None,
        }
    }

    /// Head of the application spine: `get_app_fn((f a) b)` is `f`.
    #[must_use]
    pub fn get_app_fn(&self) -> &Term {
        let mut it = self;
        while let Self::App(f, _) = it {
            it = f;
        }
        it
    }

    /// Arguments of the application spine, in application order.
    #[must_use]
    pub fn get_app_args(&self) -> Vec<&Term> {
        let mut args = Vec::new();
        let mut it = self;
        while let Self::App(f, a) = it {
            args.push(a.as_ref());
            it = f;
        }
        args.reverse();
        args
    }

    /// Number of arguments in the application spine.
    #[must_use]
    pub fn get_app_num_args(&self) -> u32 {
        let mut n = 0;
        let mut it = self;
        while let Self::App(f, _) = it {
            n += 1;
            it = f;
        }
        n
    }

    /// Number of leading `Pi` binders. For a declared function signature
    /// this is the count of explicit arguments every clause must supply.
    #[must_use]
    pub fn pi_telescope_len(&self) -> u32 {
        let mut n = 0;
        let mut it = self;
        while let Self::Pi { body, .. } = it {
            n += 1;
            it = body;
        }
        n
    }
}

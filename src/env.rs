//! Inductive-type registry and the capability facade over it.
//!
//! Pattern splitting needs to ask a handful of questions about inductive
//! families (is this a constructor? how many parameters does the family
//! take?) without depending on how inductives are actually represented.
//! [`EqnsEnvInterface`] is that narrow read-only port: constructed once per
//! compilation pass, substitutable with a hand-built [`Environment`] in
//! tests. If new forms of inductive datatype are added, this is the one
//! place that changes.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use crate::ctx::ElabCtx;
use crate::term::{Name, Term};

/// Declaration of one inductive family.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InductiveDecl {
    /// Family name.
    pub name: Name,
    /// Leading parameters, uniform across the whole family.
    pub num_params: u32,
    /// Index arguments, varying per constructor.
    pub num_indices: u32,
    /// Constructor names, in declaration order.
    pub constructors: Vec<Name>,
}

/// Registry of inductive declarations.
#[derive(Debug, Clone, Default)]
pub struct Environment {
    inductives: FxHashMap<Name, InductiveDecl>,
    constructor_families: FxHashMap<Name, Name>,
}

impl Environment {
    /// Create an empty environment.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register an inductive family and index its constructors.
    pub fn add_inductive(&mut self, decl: InductiveDecl) {
        for ctor in &decl.constructors {
            self.constructor_families.insert(*ctor, decl.name);
        }
        self.inductives.insert(decl.name, decl);
    }

    /// Look up an inductive declaration by family name.
    #[must_use]
    pub fn inductive(&self, name: Name) -> Option<&InductiveDecl> {
        self.inductives.get(&name)
    }

    /// Check whether `name` declares an inductive family.
    #[must_use]
    pub fn is_inductive(&self, name: Name) -> bool {
        self.inductives.contains_key(&name)
    }

    /// Family a constructor belongs to, if `name` is a constructor.
    #[must_use]
    pub fn constructor_family(&self, name: Name) -> Option<Name> {
        self.constructor_families.get(&name).copied()
    }
}

/// Read-only facade the equation compiler queries the environment through.
pub struct EqnsEnvInterface<'a> {
    env: &'a Environment,
}

impl<'a> EqnsEnvInterface<'a> {
    /// Build the facade over an environment snapshot.
    #[must_use]
    pub fn new(env: &'a Environment) -> Self {
        Self { env }
    }

    /// Build the facade from the ambient elaboration context.
    #[must_use]
    pub fn from_ctx(ctx: &'a ElabCtx) -> Self {
        Self::new(ctx.env())
    }

    /// Check whether `name` declares an inductive family.
    #[must_use]
    pub fn is_inductive_name(&self, name: Name) -> bool {
        self.env.is_inductive(name)
    }

    /// Check whether the head of `e` is an inductive family, possibly
    /// applied to parameters and indices.
    #[must_use]
    pub fn is_inductive(&self, e: &Term) -> bool {
        match head_const(e) {
            Some(name) => self.env.is_inductive(name),
            None => false,
        }
    }

    /// If the head of `e` is a constructor, the family it constructs.
    #[must_use]
    pub fn is_constructor(&self, e: &Term) -> Option<Name> {
        self.env.constructor_family(head_const(e)?)
    }

    /// Number of leading parameters of the inductive family `name`.
    ///
    /// # Panics
    ///
    /// Panics if `name` is not an inductive family. Check
    /// [`Self::is_inductive_name`] first; calling this on anything else is
    /// a programming error, not a recoverable condition.
    #[must_use]
    pub fn num_params(&self, name: Name) -> u32 {
        self.env
            .inductive(name)
            .expect("num_params: not an inductive family")
            .num_params
    }

    /// Number of index arguments of the inductive family `name`.
    ///
    /// # Panics
    ///
    /// Panics if `name` is not an inductive family, as with
    /// [`Self::num_params`].
    #[must_use]
    pub fn num_indices(&self, name: Name) -> u32 {
        self.env
            .inductive(name)
            .expect("num_indices: not an inductive family")
            .num_indices
    }
}

/// Constant at the head of the application spine, if any.
fn head_const(e: &Term) -> Option<Name> {
    match e.get_app_fn() {
        Term::Const(name) => Some(*name),
        _ => None,
    }
}

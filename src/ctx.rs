//! Ambient elaboration context threaded through every codec operation.

use lasso::ThreadedRodeo;

use crate::env::Environment;
use crate::term::{FVarId, Name};

// ============================================================================
// FVarIdCounter
// ============================================================================

/// Counter for generating fresh free-variable ids.
///
/// Monotonically increasing; two placeholders allocated through the same
/// context never collide.
#[derive(Debug)]
pub struct FVarIdCounter {
    next: std::sync::atomic::AtomicU32,
}

impl FVarIdCounter {
    /// Create a new counter starting at 0.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            next: std::sync::atomic::AtomicU32::new(0),
        }
    }

    /// Generate the next fresh free-variable id.
    pub fn fresh(&self) -> FVarId {
        let id = self.next.fetch_add(1, std::sync::atomic::Ordering::Relaxed);
        FVarId(id)
    }

    /// Get the current counter value without incrementing.
    #[must_use]
    pub fn current(&self) -> u32 {
        self.next.load(std::sync::atomic::Ordering::Relaxed)
    }
}

impl Default for FVarIdCounter {
    fn default() -> Self {
        Self::new()
    }
}

// ============================================================================
// ElabCtx
// ============================================================================

/// Elaboration context: the environment snapshot, the name interner, and
/// the fresh-id source.
///
/// One context serves one compilation-pass invocation. Every decode, edit,
/// and repack of an equation group happens against a single context; the
/// placeholders it hands out are only meaningful for that cycle.
#[derive(Debug)]
pub struct ElabCtx {
    env: Environment,
    names: ThreadedRodeo,
    fvars: FVarIdCounter,
}

impl ElabCtx {
    /// Create a context over an empty environment.
    #[must_use]
    pub fn new() -> Self {
        Self::with_env(Environment::new())
    }

    /// Create a context over an existing environment snapshot.
    #[must_use]
    pub fn with_env(env: Environment) -> Self {
        Self {
            env,
            names: ThreadedRodeo::new(),
            fvars: FVarIdCounter::new(),
        }
    }

    /// Intern a name.
    pub fn intern(&self, s: &str) -> Name {
        self.names.get_or_intern(s)
    }

    /// Resolve an interned name back to its string.
    #[must_use]
    pub fn resolve(&self, name: Name) -> &str {
        self.names.resolve(&name)
    }

    /// The environment this context reads declarations from.
    #[must_use]
    pub fn env(&self) -> &Environment {
        &self.env
    }

    /// Mutable access to the environment, for registering declarations.
    pub fn env_mut(&mut self) -> &mut Environment {
        &mut self.env
    }

    /// Allocate a fresh free-variable id.
    pub fn fresh_fvar(&self) -> FVarId {
        self.fvars.fresh()
    }
}

impl Default for ElabCtx {
    fn default() -> Self {
        Self::new()
    }
}

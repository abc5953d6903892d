//! Binder abstraction stack.
//!
//! An ordered, growable sequence of live placeholders with LIFO open/close
//! discipline. Decoding pushes one placeholder per binder stripped;
//! repacking closes a contiguous top segment back into nested binders, in
//! strict reverse-of-push order. Closing in any other order would leave a
//! dangling index in the output, which is the signature of a broken repack.

use crate::ctx::ElabCtx;
use crate::term::{subst, FVarId, Name, Term};

/// One live placeholder: its id, declared name, and declared type.
#[derive(Debug, Clone)]
pub struct LocalEntry {
    pub id: FVarId,
    pub name: Name,
    pub ty: Term,
}

/// Stack of placeholders standing in for binder sites during editing.
///
/// Owned exclusively by one codec instance for one decode/edit/repack
/// cycle; entries never outlive it.
#[derive(Debug, Default)]
pub struct TmpLocals {
    entries: Vec<LocalEntry>,
}

impl TmpLocals {
    /// Create an empty stack.
    #[must_use]
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Declare a fresh placeholder on top of the stack and return it as a
    /// term, ready for use in patterns and bodies.
    pub fn push(&mut self, ctx: &ElabCtx, name: Name, ty: Term) -> Term {
        let id = ctx.fresh_fvar();
        self.entries.push(LocalEntry { id, name, ty });
        Term::FVar(id)
    }

    /// Number of live placeholders.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if the stack is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Mark the current open point, for a later [`Self::mk_lambda_from`].
    #[must_use]
    pub fn mark(&self) -> usize {
        self.entries.len()
    }

    /// The live entries, bottom of stack first.
    #[must_use]
    pub fn entries(&self) -> &[LocalEntry] {
        &self.entries
    }

    /// Rebind the declared type of the entry at `idx`, preserving its id.
    ///
    /// Terms already referencing the placeholder keep referencing it; only
    /// the binder domain emitted on close changes.
    pub fn update_type(&mut self, idx: usize, ty: Term) {
        self.entries[idx].ty = ty;
    }

    /// Close every placeholder pushed since `mark` out of `body`, in
    /// reverse-of-push order, and pop those entries.
    ///
    /// The result wraps `body` in one lambda per closed entry, the last
    /// pushed innermost. Entries below `mark` stay live and may still occur
    /// free in the result.
    ///
    /// Precondition: `body` mentions no tracked placeholder other than the
    /// ones being closed here or ones still below `mark`. Violations are
    /// caller error and surface as dangling references in the output.
    pub fn mk_lambda_from(&mut self, mark: usize, body: Term) -> Term {
        let closed = close_lambdas(&self.entries[mark..], body);
        self.entries.truncate(mark);
        closed
    }

    /// Close the entire stack out of `body`.
    pub fn mk_lambda(&mut self, body: Term) -> Term {
        self.mk_lambda_from(0, body)
    }
}

/// Abstract `entries` out of `body` into nested lambdas without touching
/// any stack.
///
/// The declared type of each entry may depend on earlier entries; it is
/// abstracted over exactly the entries below it, so the emitted telescope
/// nests correctly.
#[must_use]
pub fn close_lambdas(entries: &[LocalEntry], body: Term) -> Term {
    if entries.is_empty() {
        return body;
    }
    let ids: Vec<FVarId> = entries.iter().map(|e| e.id).collect();
    let mut result = subst::abstract_fvars(&body, &ids);
    for i in (0..entries.len()).rev() {
        let ty = subst::abstract_fvars(&entries[i].ty, &ids[..i]);
        result = Term::lam(entries[i].name, ty, result);
    }
    result
}

//! Whole-group codec.

use tracing::{debug, trace};

use super::UnpackEqn;
use crate::ctx::ElabCtx;
use crate::error::{ill_formed, EqnsResult};
use crate::locals::{close_lambdas, TmpLocals};
use crate::term::{subst, Term};

/// Decoded form of an equations expression: the functions being defined,
/// their arities, and their clause lists.
///
/// One placeholder per function slot stands in for it across the whole
/// group, so clause bodies referencing other functions of the group resolve
/// to stable placeholders instead of raw binder indices. `fns`, `arity`,
/// and `eqs` are indexed in lock-step.
///
/// Lives for one decode/edit/repack cycle within one compilation pass;
/// nothing here survives the cycle.
#[derive(Debug)]
pub struct UnpackEqns {
    locals: TmpLocals,
    num_fns: u32,
    fns: Vec<Term>,
    /// `arity[i]` is the number of arguments every clause lhs of `fns[i]`
    /// supplies, read off the slot's declared signature. Ignored by repack.
    arity: Vec<u32>,
    /// `eqs[i]` are the clauses of `fns[i]`, stored with their function
    /// binders already stripped and replaced by the shared placeholders.
    eqs: Vec<Vec<Term>>,
}

impl UnpackEqns {
    /// Decode an equations expression.
    ///
    /// The shared function placeholders are derived from the first clause's
    /// leading binder telescope; every clause is then stripped of the same
    /// telescope by instantiation and assigned to a slot by the head of its
    /// left-hand side. Any shape deviation raises the malformed signal.
    pub fn new(ctx: &ElabCtx, e: &Term) -> EqnsResult<Self> {
        let Term::Equations { num_fns, eqns: src_eqns } = e else {
            return ill_formed("expected an equations expression");
        };
        let num_fns = *num_fns;
        let n = num_fns as usize;
        let mut locals = TmpLocals::new();
        let mut fns = Vec::with_capacity(n);

        if n == 0 {
            if !src_eqns.is_empty() {
                return ill_formed("clause outside any function slot");
            }
            debug!("decoded empty equations expression");
            return Ok(Self {
                locals,
                num_fns,
                fns,
                arity: Vec::new(),
                eqs: Vec::new(),
            });
        }
        if src_eqns.is_empty() {
            return ill_formed("equations expression without any clause");
        }

        // The first clause's telescope names and types the function slots.
        let mut it = src_eqns[0].clone();
        for _ in 0..n {
            match it {
                Term::Lam { name, ty, body } => {
                    if subst::has_loose_bvars(&ty) {
                        return ill_formed("function binder domain must be closed");
                    }
                    let fv = locals.push(ctx, name, *ty);
                    it = subst::instantiate(&body, &fv);
                    fns.push(fv);
                }
                _ => return ill_formed("clause is missing a function binder"),
            }
        }

        let arity: Vec<u32> = locals
            .entries()
            .iter()
            .map(|entry| entry.ty.pi_telescope_len())
            .collect();

        let mut eqs: Vec<Vec<Term>> = vec![Vec::new(); n];
        for src in src_eqns {
            let mut eq = src.clone();
            for fv in &fns {
                match eq {
                    Term::Lam { body, .. } => eq = subst::instantiate(&body, fv),
                    _ => return ill_formed("clause is missing a function binder"),
                }
            }
            let fidx = owner_of(ctx, &fns, &arity, &eq)?;
            eqs[fidx].push(eq);
        }

        debug!(
            "decoded equations expression: {} function slots, {} clauses",
            n,
            src_eqns.len()
        );
        Ok(Self {
            locals,
            num_fns,
            fns,
            arity,
            eqs,
        })
    }

    /// Re-encode the group.
    ///
    /// Every clause of every slot is re-wrapped in the full function-binder
    /// telescope (the legacy per-clause indirection), closing the slot
    /// placeholders out of it in reverse creation order, and the results
    /// are re-tagged as an equations expression. Exact inverse of decode
    /// when no mutation happened in between.
    #[must_use]
    pub fn repack(self) -> Term {
        let Self {
            locals,
            num_fns,
            eqs,
            ..
        } = self;
        let mut eqns = Vec::new();
        for fn_eqs in &eqs {
            for eq in fn_eqs {
                eqns.push(close_lambdas(locals.entries(), eq.clone()));
            }
        }
        trace!("repacked equations expression with {} clauses", eqns.len());
        Term::Equations { num_fns, eqns }
    }

    /// Rebind the declared type of function slot `fidx`, preserving its
    /// placeholder, and return the placeholder.
    ///
    /// The clauses are not updated; they keep referencing the slot through
    /// the same placeholder. Dependent clauses must be brought in line by
    /// the caller before [`Self::repack`], which otherwise still succeeds
    /// syntactically even though the kernel may later reject the result.
    pub fn update_fn_type(&mut self, fidx: usize, ty: Term) -> Term {
        self.locals.update_type(fidx, ty);
        self.fns[fidx].clone()
    }

    /// Number of function slots.
    #[must_use]
    pub fn num_fns(&self) -> usize {
        self.fns.len()
    }

    /// Placeholder standing for function slot `fidx`.
    #[must_use]
    pub fn fn_placeholder(&self, fidx: usize) -> &Term {
        &self.fns[fidx]
    }

    /// All slot placeholders, in slot order.
    #[must_use]
    pub fn fn_placeholders(&self) -> &[Term] {
        &self.fns
    }

    /// Arity of function slot `fidx`.
    #[must_use]
    pub fn arity_of(&self, fidx: usize) -> u32 {
        self.arity[fidx]
    }

    /// Clauses of function slot `fidx`.
    #[must_use]
    pub fn eqns_of(&self, fidx: usize) -> &[Term] {
        &self.eqs[fidx]
    }

    /// Mutable clause list of function slot `fidx`, for passes that rewrite
    /// or replace clauses.
    pub fn eqns_of_mut(&mut self, fidx: usize) -> &mut Vec<Term> {
        &mut self.eqs[fidx]
    }
}

/// Slot owning a stripped clause, determined by its lhs head.
fn owner_of(ctx: &ElabCtx, fns: &[Term], arity: &[u32], eq: &Term) -> EqnsResult<usize> {
    let ue = UnpackEqn::new(ctx, eq)?;
    let head = ue.lhs().get_app_fn();
    let Some(fidx) = fns.iter().position(|f| f == head) else {
        return ill_formed("clause lhs head is not a function placeholder");
    };
    if ue.lhs().get_app_num_args() != arity[fidx] {
        return ill_formed("clause lhs argument count does not match the function arity");
    }
    Ok(fidx)
}

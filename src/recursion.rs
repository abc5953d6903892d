//! Recursion detection over equation groups.

use tracing::debug;

use crate::codec::{UnpackEqn, UnpackEqns};
use crate::ctx::ElabCtx;
use crate::error::EqnsResult;
use crate::term::{subst, Term};

/// Check whether any clause body refers back to a function being defined by
/// the same equations expression, directly or mutually.
///
/// Decodes the group with the ordinary codec machinery and scans every
/// clause's right-hand side for a slot placeholder. Placeholders are
/// globally fresh, so binders met during the scan cannot re-capture one;
/// the free/bound discipline needs no extra bookkeeping. Left-hand sides
/// are not scanned: the pattern head naming its own function is definition,
/// not recursion.
///
/// An empty group is trivially non-recursive. Read-only: the decoded state
/// is dropped, never repacked.
///
/// Downstream compilation selects structural recursion when this returns
/// `false` and a well-founded/fixpoint strategy when `true`.
pub fn is_recursive_eqns(ctx: &ElabCtx, e: &Term) -> EqnsResult<bool> {
    let unpacked = UnpackEqns::new(ctx, e)?;
    for fidx in 0..unpacked.num_fns() {
        for eqn in unpacked.eqns_of(fidx) {
            let clause = UnpackEqn::new(ctx, eqn)?;
            for fn_placeholder in unpacked.fn_placeholders() {
                if let Term::FVar(id) = fn_placeholder {
                    if subst::has_fvar(clause.rhs(), *id) {
                        debug!("equations expression is recursive");
                        return Ok(true);
                    }
                }
            }
        }
    }
    Ok(false)
}

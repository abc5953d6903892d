//! Single-clause codec.

use tracing::trace;

use crate::ctx::ElabCtx;
use crate::error::{ill_formed, EqnsResult};
use crate::locals::TmpLocals;
use crate::term::{subst, Name, Term};

/// Decoded form of one clause nested in an equations expression.
///
/// Expects the clause with its function binders already stripped (that is
/// [`super::UnpackEqns`]' job): a chain of pattern-variable lambdas around
/// an equation marker. Decoding opens every binder into a placeholder;
/// [`Self::repack`] re-wraps the (possibly rewritten) lhs/rhs in the same
/// indirection it was unwrapped from.
#[derive(Debug)]
pub struct UnpackEqn {
    src: Term,
    locals: TmpLocals,
    modified_vars: bool,
    vars: Vec<Term>,
    orig_lhs: Term,
    orig_rhs: Term,
    lhs: Term,
    rhs: Term,
}

impl UnpackEqn {
    /// Decode one clause.
    ///
    /// Fails with the malformed signal if the chain of pattern binders does
    /// not terminate in an equation marker.
    pub fn new(ctx: &ElabCtx, eqn: &Term) -> EqnsResult<Self> {
        let mut locals = TmpLocals::new();
        let mut vars = Vec::new();
        let mut it = eqn.clone();
        loop {
            match it {
                Term::Lam { name, ty, body } => {
                    let fv = locals.push(ctx, name, *ty);
                    it = subst::instantiate(&body, &fv);
                    vars.push(fv);
                }
                Term::Equation { lhs, rhs } => {
                    let lhs = *lhs;
                    let rhs = *rhs;
                    trace!("decoded clause with {} pattern variables", vars.len());
                    return Ok(Self {
                        src: eqn.clone(),
                        locals,
                        modified_vars: false,
                        vars,
                        orig_lhs: lhs.clone(),
                        orig_rhs: rhs.clone(),
                        lhs,
                        rhs,
                    });
                }
                _ => return ill_formed("clause body is not wrapped in an equation marker"),
            }
        }
    }

    /// Declare an additional pattern variable mid-transformation, e.g. when
    /// a pass splits a pattern into sub-patterns. The new variable closes
    /// innermost on repack.
    pub fn add_var(&mut self, ctx: &ElabCtx, name: Name, ty: Term) -> Term {
        self.modified_vars = true;
        let fv = self.locals.push(ctx, name, ty);
        self.vars.push(fv.clone());
        fv
    }

    /// Pattern-variable placeholders, in binder order.
    #[must_use]
    pub fn vars(&self) -> &[Term] {
        &self.vars
    }

    /// The left-hand pattern: the owning function's placeholder applied to
    /// the clause's argument patterns.
    #[must_use]
    pub fn lhs(&self) -> &Term {
        &self.lhs
    }

    /// Mutable access to the left-hand pattern, for in-place rewriting.
    pub fn lhs_mut(&mut self) -> &mut Term {
        &mut self.lhs
    }

    /// The right-hand body.
    #[must_use]
    pub fn rhs(&self) -> &Term {
        &self.rhs
    }

    /// Mutable access to the right-hand body, for in-place rewriting.
    pub fn rhs_mut(&mut self) -> &mut Term {
        &mut self.rhs
    }

    /// Re-encode the clause, closing its placeholders in reverse push order
    /// over a fresh equation marker.
    ///
    /// Returns the source term untouched when nothing was modified, so an
    /// unedited decode/repack cycle is exact.
    #[must_use]
    pub fn repack(self) -> Term {
        if !self.modified_vars && self.lhs == self.orig_lhs && self.rhs == self.orig_rhs {
            return self.src;
        }
        let Self {
            mut locals,
            lhs,
            rhs,
            ..
        } = self;
        locals.mk_lambda(Term::equation(lhs, rhs))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::EqnsError;

    /// Clause `fun (x : Nat) => f x = x` with `f` a free placeholder.
    fn sample_clause(ctx: &ElabCtx) -> (Term, Term) {
        let nat = Term::Const(ctx.intern("Nat"));
        let f = Term::FVar(ctx.fresh_fvar());
        let mut build = TmpLocals::new();
        let x = build.push(ctx, ctx.intern("x"), nat);
        let clause = build.mk_lambda(Term::equation(Term::app(f.clone(), x.clone()), x));
        (clause, f)
    }

    #[test]
    fn test_decode_opens_pattern_binders() {
        let ctx = ElabCtx::new();
        let (clause, f) = sample_clause(&ctx);
        let ue = UnpackEqn::new(&ctx, &clause).unwrap();
        assert_eq!(ue.vars().len(), 1);
        let x = ue.vars()[0].clone();
        assert_eq!(ue.lhs(), &Term::app(f, x.clone()));
        assert_eq!(ue.rhs(), &x);
    }

    #[test]
    fn test_unmodified_repack_returns_source() {
        let ctx = ElabCtx::new();
        let (clause, _) = sample_clause(&ctx);
        let ue = UnpackEqn::new(&ctx, &clause).unwrap();
        assert_eq!(ue.repack(), clause);
    }

    #[test]
    fn test_missing_marker_is_ill_formed() {
        let ctx = ElabCtx::new();
        let bare = Term::Const(ctx.intern("Nat"));
        let err = UnpackEqn::new(&ctx, &bare).unwrap_err();
        assert!(matches!(err, EqnsError::IllFormed(_)));
    }
}

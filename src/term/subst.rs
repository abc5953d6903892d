//! Binder algebra: lifting, instantiation, abstraction.
//!
//! These are the capture-correct primitives the codec is built on. The
//! representation keeps them simple: bound variables are indices, free
//! placeholders are globally fresh ids, so abstraction never captures and
//! instantiation only has to renumber indices.

use super::{FVarId, Term};

/// Shift every bound variable at or above `cutoff` up by `amount`.
#[must_use]
pub fn lift(e: &Term, amount: u32, cutoff: u32) -> Term {
    if amount == 0 {
        return e.clone();
    }
    match e {
        Term::BVar(i) if *i >= cutoff => Term::BVar(i + amount),
        Term::BVar(_) | Term::FVar(_) | Term::Const(_) | Term::Sort(_) => e.clone(),
        Term::App(f, a) => Term::app(lift(f, amount, cutoff), lift(a, amount, cutoff)),
        Term::Lam { name, ty, body } => Term::lam(
            *name,
            lift(ty, amount, cutoff),
            lift(body, amount, cutoff + 1),
        ),
        Term::Pi { name, ty, body } => Term::pi(
            *name,
            lift(ty, amount, cutoff),
            lift(body, amount, cutoff + 1),
        ),
        Term::Equations { num_fns, eqns } => Term::Equations {
            num_fns: *num_fns,
            eqns: eqns.iter().map(|t| lift(t, amount, cutoff)).collect(),
        },
        Term::Equation { lhs, rhs } => {
            Term::equation(lift(lhs, amount, cutoff), lift(rhs, amount, cutoff))
        }
    }
}

/// Substitute the outermost bound variable of a binder body.
///
/// `instantiate(body, s)` replaces `BVar(0)` (at depth) with `s` and
/// renumbers the remaining indices, exactly what stripping one binder
/// requires. `s` is lifted past any binders it is substituted under.
#[must_use]
pub fn instantiate(e: &Term, subst: &Term) -> Term {
    inst(e, subst, 0)
}

fn inst(e: &Term, subst: &Term, depth: u32) -> Term {
    match e {
        Term::BVar(i) => {
            if *i == depth {
                lift(subst, depth, 0)
            } else if *i > depth {
                Term::BVar(i - 1)
            } else {
                Term::BVar(*i)
            }
        }
        Term::FVar(_) | Term::Const(_) | Term::Sort(_) => e.clone(),
        Term::App(f, a) => Term::app(inst(f, subst, depth), inst(a, subst, depth)),
        Term::Lam { name, ty, body } => Term::lam(
            *name,
            inst(ty, subst, depth),
            inst(body, subst, depth + 1),
        ),
        Term::Pi { name, ty, body } => Term::pi(
            *name,
            inst(ty, subst, depth),
            inst(body, subst, depth + 1),
        ),
        Term::Equations { num_fns, eqns } => Term::Equations {
            num_fns: *num_fns,
            eqns: eqns.iter().map(|t| inst(t, subst, depth)).collect(),
        },
        Term::Equation { lhs, rhs } => {
            Term::equation(inst(lhs, subst, depth), inst(rhs, subst, depth))
        }
    }
}

/// Turn free placeholders back into bound variables.
///
/// `ids[i]` maps to index `n - 1 - i` at the top level (the last id is the
/// innermost binder), adjusted for every binder crossed on the way down.
/// The caller wraps the result in `n` binders; [`crate::locals`] does this
/// in reverse-of-push order.
///
/// Precondition: `e` has no loose bound variables of its own.
#[must_use]
pub fn abstract_fvars(e: &Term, ids: &[FVarId]) -> Term {
    if ids.is_empty() {
        return e.clone();
    }
    abst(e, ids, 0)
}

fn abst(e: &Term, ids: &[FVarId], depth: u32) -> Term {
    match e {
        Term::FVar(id) => match ids.iter().position(|x| x == id) {
            Some(pos) => Term::BVar(depth + (ids.len() - 1 - pos) as u32),
            None => e.clone(),
        },
        Term::BVar(_) | Term::Const(_) | Term::Sort(_) => e.clone(),
        Term::App(f, a) => Term::app(abst(f, ids, depth), abst(a, ids, depth)),
        Term::Lam { name, ty, body } => {
            Term::lam(*name, abst(ty, ids, depth), abst(body, ids, depth + 1))
        }
        Term::Pi { name, ty, body } => {
            Term::pi(*name, abst(ty, ids, depth), abst(body, ids, depth + 1))
        }
        Term::Equations { num_fns, eqns } => Term::Equations {
            num_fns: *num_fns,
            eqns: eqns.iter().map(|t| abst(t, ids, depth)).collect(),
        },
        Term::Equation { lhs, rhs } => {
            Term::equation(abst(lhs, ids, depth), abst(rhs, ids, depth))
        }
    }
}

/// Check whether the placeholder `id` occurs anywhere in `e`.
///
/// Placeholders are globally fresh, so an occurrence is always a free
/// occurrence; nested binders cannot shadow it.
#[must_use]
pub fn has_fvar(e: &Term, id: FVarId) -> bool {
    match e {
        Term::FVar(x) => *x == id,
        Term::BVar(_) | Term::Const(_) | Term::Sort(_) => false,
        Term::App(f, a) => has_fvar(f, id) || has_fvar(a, id),
        Term::Lam { ty, body, .. } | Term::Pi { ty, body, .. } => {
            has_fvar(ty, id) || has_fvar(body, id)
        }
        Term::Equations { eqns, .. } => eqns.iter().any(|t| has_fvar(t, id)),
        Term::Equation { lhs, rhs } => has_fvar(lhs, id) || has_fvar(rhs, id),
    }
}

/// Check whether `e` contains a bound variable not captured by a binder
/// inside `e` itself.
#[must_use]
pub fn has_loose_bvars(e: &Term) -> bool {
    loose(e, 0)
}

fn loose(e: &Term, depth: u32) -> bool {
    match e {
        Term::BVar(i) => *i >= depth,
        Term::FVar(_) | Term::Const(_) | Term::Sort(_) => false,
        Term::App(f, a) => loose(f, depth) || loose(a, depth),
        Term::Lam { ty, body, .. } | Term::Pi { ty, body, .. } => {
            loose(ty, depth) || loose(body, depth + 1)
        }
        Term::Equations { eqns, .. } => eqns.iter().any(|t| loose(t, depth)),
        Term::Equation { lhs, rhs } => loose(lhs, depth) || loose(rhs, depth),
    }
}

//! Per-parameter, per-position variance classification.
//!
//! Variance is inferred by dual-probe substitution: substitute the probed
//! type parameter by `never` and by its upper bound (every other parameter
//! by `any`), project the type at the position under both probes, and
//! classify by directional assignability.

use tylam_ir::{LambdaIdx, TyIdx};

use crate::ctx::TypeCtx;
use crate::data::TParamDecl;
use crate::subst::{substitute, TParamSubst};
use crate::subtype::{equals, is_subtype};

/// How a type parameter's substitution affects one position's type.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum Variance {
    /// The position's type grows with the parameter.
    Covariant,
    /// The position's type shrinks as the parameter grows.
    Contravariant,
    /// The position's type changes but in neither direction.
    Invariant,
    /// The parameter does not affect the position at all.
    Irrelevant,
}

/// A position in an entity's signature.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum Position {
    /// A declared parameter slot.
    Param(usize),
    /// The return type.
    Ret,
}

/// Classify the variance of `tparam` at `position` in entity `l`.
///
/// An out-of-range parameter position is `Irrelevant`.
pub fn variance_at(ctx: &TypeCtx, l: LambdaIdx, tparam: TParamDecl, position: Position) -> Variance {
    let lam = ctx.lambdas.get(l);
    let pos_ty = match position {
        Position::Param(i) => match lam.params.get(i) {
            Some(p) => p.ty,
            None => return Variance::Irrelevant,
        },
        Position::Ret => lam.ret,
    };

    let mut lower_map = TParamSubst::default();
    let mut upper_map = TParamSubst::default();
    for tp in lam.tparams.iter() {
        if tp.name == tparam.name {
            lower_map.insert(tp.name, TyIdx::NEVER);
            upper_map.insert(tp.name, tparam.bound);
        } else {
            lower_map.insert(tp.name, TyIdx::ANY);
            upper_map.insert(tp.name, TyIdx::ANY);
        }
    }

    let lower = substitute(ctx, pos_ty, &lower_map);
    let upper = substitute(ctx, pos_ty, &upper_map);

    let classified = if equals(lower, upper) {
        Variance::Irrelevant
    } else if is_subtype(ctx, lower, upper) {
        Variance::Covariant
    } else if is_subtype(ctx, upper, lower) {
        Variance::Contravariant
    } else {
        Variance::Invariant
    };
    tracing::trace!(?position, variance = ?classified, "classified type parameter");
    classified
}

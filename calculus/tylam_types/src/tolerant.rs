//! Tolerant parameter and return shapes.
//!
//! The maximally permissive concrete signature of an entity when nothing
//! is known at the call site. Per position, each type parameter is
//! replaced according to its variance there:
//!
//! - contravariant: `never` (the most permissive argument-position
//!   substitute)
//! - invariant: `any` (the widest safe default)
//! - covariant or irrelevant: the parameter's declared upper bound
//!
//! Checked invocation constrains arguments against these shapes, and
//! signature rendering falls back to them.

use tylam_ir::{LambdaIdx, TyIdx};

use crate::ctx::TypeCtx;
use crate::data::{Param, TyData};
use crate::subst::{substitute, TParamSubst};
use crate::variance::{variance_at, Position, Variance};

fn tolerant_subst_at(ctx: &TypeCtx, l: LambdaIdx, position: Position) -> TParamSubst {
    let lam = ctx.lambdas.get(l);
    let mut map = TParamSubst::default();
    for tp in lam.tparams.iter() {
        let replacement = match variance_at(ctx, l, *tp, position) {
            Variance::Contravariant => TyIdx::NEVER,
            Variance::Invariant => TyIdx::ANY,
            Variance::Covariant | Variance::Irrelevant => tp.bound,
        };
        map.insert(tp.name, replacement);
    }
    map
}

/// Tolerant parameter tuple of an entity.
///
/// For a plain entity this is just the declared parameter tuple.
pub fn tolerant_params(ctx: &TypeCtx, l: LambdaIdx) -> Box<[Param]> {
    let lam = ctx.lambdas.get(l);
    if !lam.is_generic() {
        return lam.params;
    }
    lam.params
        .iter()
        .enumerate()
        .map(|(i, p)| {
            let map = tolerant_subst_at(ctx, l, Position::Param(i));
            Param {
                label: p.label,
                ty: substitute(ctx, p.ty, &map),
            }
        })
        .collect()
}

/// Tolerant parameter at one position; out of range is `never`.
pub fn tolerant_param_at(ctx: &TypeCtx, l: LambdaIdx, index: usize) -> TyIdx {
    let lam = ctx.lambdas.get(l);
    let Some(p) = lam.params.get(index) else {
        return TyIdx::NEVER;
    };
    if !lam.is_generic() {
        return p.ty;
    }
    let map = tolerant_subst_at(ctx, l, Position::Param(index));
    substitute(ctx, p.ty, &map)
}

/// Tolerant return type of an entity.
pub fn tolerant_ret(ctx: &TypeCtx, l: LambdaIdx) -> TyIdx {
    let lam = ctx.lambdas.get(l);
    if !lam.is_generic() {
        return lam.ret;
    }
    let map = tolerant_subst_at(ctx, l, Position::Ret);
    substitute(ctx, lam.ret, &map)
}

/// Tolerant return of an arbitrary entity-shaped type; `never` for
/// anything else (fails closed).
pub fn tolerant_ret_of(ctx: &TypeCtx, ty: TyIdx) -> TyIdx {
    match ctx.pool.lookup(ty) {
        TyData::Lambda(l) => tolerant_ret(ctx, l),
        TyData::LambdaSig { ret, .. } => ret,
        _ => TyIdx::NEVER,
    }
}

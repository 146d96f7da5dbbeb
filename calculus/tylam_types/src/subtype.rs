//! Assignability and equality.
//!
//! Directed structural subtyping over interned types. Strict equality is
//! index identity (interning is canonical); assignability follows the
//! rules of the emulated type discipline:
//!
//! - `never` is assignable to everything; everything to `unknown`
//! - `any` is assignable in both directions, except into `never`
//! - literals are assignable to their base types
//! - tuples are covariant element-wise and assignable to lists
//! - functions are contravariant in parameters (with arity widening) and
//!   covariant in the return type
//! - a concrete entity is assignable to an abstract `LambdaSig` whenever
//!   its signature fits
//!
//! Recursion is bounded by an explicit depth budget; exceeding it fails
//! closed (not assignable), mirroring a host checker's instantiation-depth
//! limit.

use tylam_ir::TyIdx;

use crate::ctx::TypeCtx;
use crate::data::{Param, TyData};
use crate::lambda::{params, ret_type, KnownArgs};

/// Depth budget for structural comparison.
const MAX_DEPTH: usize = 64;

/// Strict equality: exact structural identity, including tuple labels.
#[inline]
pub fn equals(a: TyIdx, b: TyIdx) -> bool {
    a == b
}

/// Whether `a` is assignable to `b`.
pub fn is_subtype(ctx: &TypeCtx, a: TyIdx, b: TyIdx) -> bool {
    subtype_rec(ctx, a, b, 0)
}

/// Whether `a` and `b` are assignable in both directions.
///
/// Weaker than [`equals`]: `any` is mutually assignable with everything
/// but equal only to itself.
pub fn mutual_subtype(ctx: &TypeCtx, a: TyIdx, b: TyIdx) -> bool {
    is_subtype(ctx, a, b) && is_subtype(ctx, b, a)
}

fn subtype_rec(ctx: &TypeCtx, a: TyIdx, b: TyIdx, depth: usize) -> bool {
    if a == b {
        return true;
    }
    if depth > MAX_DEPTH {
        // Fail closed rather than overflow
        return false;
    }
    if a.is_never() {
        return true;
    }
    if a.is_any() {
        return !b.is_never();
    }
    if b.is_any() || b.is_unknown() {
        return true;
    }
    if b.is_never() || a.is_unknown() {
        return false;
    }

    let da = ctx.pool.lookup(a);
    let db = ctx.pool.lookup(b);

    // Unions first: a union source must fit member-wise, a union target
    // needs any one member to fit.
    if let TyData::Union(members) = &da {
        return members
            .iter()
            .all(|&m| subtype_rec(ctx, m, b, depth + 1));
    }
    if let TyData::Union(members) = &db {
        return members
            .iter()
            .any(|&m| subtype_rec(ctx, a, m, depth + 1));
    }

    match (&da, &db) {
        // Literals widen to their base types
        (TyData::StrLit(_), TyData::Str)
        | (TyData::NumLit(_), TyData::Num)
        | (TyData::BoolLit(_), TyData::Bool) => true,

        // Tuples: same length, covariant element-wise (labels ignored)
        (TyData::Tuple(xs), TyData::Tuple(ys)) => {
            xs.len() == ys.len()
                && xs
                    .iter()
                    .zip(ys.iter())
                    .all(|(x, y)| subtype_rec(ctx, x.ty, y.ty, depth + 1))
        }

        // A tuple fits a list when every element fits the element type
        (TyData::Tuple(xs), TyData::List(elem)) => {
            xs.iter().all(|x| subtype_rec(ctx, x.ty, *elem, depth + 1))
        }

        (TyData::List(x), TyData::List(y)) => subtype_rec(ctx, *x, *y, depth + 1),

        (
            TyData::Fn { params: sp, ret: sr },
            TyData::Fn { params: tp, ret: tr },
        ) => fn_subtype(ctx, sp, *sr, tp, *tr, depth),

        // Abstract entity types relate like their signatures
        (
            TyData::LambdaSig { params: sp, ret: sr },
            TyData::LambdaSig { params: tp, ret: tr },
        ) => fn_subtype(ctx, sp, *sr, tp, *tr, depth),

        // A concrete entity fits an abstract entity type (or another
        // concrete entity) when its resolved signature fits
        (TyData::Lambda(l), TyData::LambdaSig { params: tp, ret: tr }) => {
            let sp = params(ctx, *l, &KnownArgs::none());
            let sr = ret_type(ctx, *l, &KnownArgs::none());
            fn_subtype(ctx, &sp, sr, tp, *tr, depth)
        }
        (TyData::Lambda(l), TyData::Lambda(m)) => {
            let sp = params(ctx, *l, &KnownArgs::none());
            let sr = ret_type(ctx, *l, &KnownArgs::none());
            let tp = params(ctx, *m, &KnownArgs::none());
            let tr = ret_type(ctx, *m, &KnownArgs::none());
            fn_subtype(ctx, &sp, sr, &tp, tr, depth)
        }

        _ => false,
    }
}

/// Function-shaped subtyping: contravariant parameters with arity
/// widening (a source taking fewer arguments still fits), covariant
/// return.
fn fn_subtype(
    ctx: &TypeCtx,
    src_params: &[Param],
    src_ret: TyIdx,
    dst_params: &[Param],
    dst_ret: TyIdx,
    depth: usize,
) -> bool {
    src_params.len() <= dst_params.len()
        && src_params
            .iter()
            .zip(dst_params.iter())
            .all(|(s, d)| subtype_rec(ctx, d.ty, s.ty, depth + 1))
        && subtype_rec(ctx, src_ret, dst_ret, depth + 1)
}

//! Generic type-argument resolution.
//!
//! Given sparse call-site knowledge (some parameter types and/or the
//! return type), infer as many declared type-parameter bindings as the
//! information determines, and skip the rest.
//!
//! Only known entries are matched: an unknown parameter slot constrains
//! nothing and infers nothing (as if it held `any`), and an unknown return
//! infers nothing (as if it held `never`). The two defaults are not
//! interchangeable; keep them as they are.

use rustc_hash::FxHashMap;
use tylam_ir::{LambdaIdx, Name, TyIdx};

use crate::ctx::TypeCtx;
use crate::data::{Param, TyData};
use crate::lambda::{params, ret_type, KnownArgs};
use crate::subst::TParamSubst;
use crate::subtype::is_subtype;
use crate::tolerant::{tolerant_param_at, tolerant_ret};
use crate::variance::{variance_at, Position, Variance};

/// Inferred bindings from type-parameter identifiers to types.
///
/// Partial: parameters the call site does not determine are absent.
pub type TypeArgBindings = TParamSubst;

/// Matching direction while walking a declared type against a known type.
#[derive(Copy, Clone, Eq, PartialEq, Debug)]
enum Polarity {
    Co,
    Contra,
}

impl Polarity {
    fn flip(self) -> Self {
        match self {
            Polarity::Co => Polarity::Contra,
            Polarity::Contra => Polarity::Co,
        }
    }
}

/// Candidate types collected for one type parameter.
#[derive(Default, Debug)]
struct Candidates {
    co: Vec<TyIdx>,
    contra: Vec<TyIdx>,
}

/// Resolve type arguments for entity `l` from call-site knowledge.
#[tracing::instrument(level = "trace", skip(ctx, known))]
pub fn type_args(ctx: &TypeCtx, l: LambdaIdx, known: &KnownArgs) -> TypeArgBindings {
    let lam = ctx.lambdas.get(l);
    if !lam.is_generic() || known.is_empty() {
        return TypeArgBindings::default();
    }

    // Drop entries at positions that do not exist, or that are
    // individually incompatible with the tolerant shape there.
    let arity = lam.arity();
    let kept = known.retain(
        |i, ty| i < arity && is_subtype(ctx, ty, tolerant_param_at(ctx, l, i)),
        |ty| is_subtype(ctx, ty, tolerant_ret(ctx, l)),
    );
    if kept.is_empty() {
        return TypeArgBindings::default();
    }

    let mut positions: Vec<Position> = kept.param_entries().map(|(i, _)| Position::Param(i)).collect();
    if kept.ret().is_some() {
        positions.push(Position::Ret);
    }

    let mut candidates: FxHashMap<Name, Candidates> = FxHashMap::default();
    for (i, ty) in kept.param_entries() {
        collect(ctx, lam.params[i].ty, ty, Polarity::Co, &mut candidates);
    }
    if let Some(ret) = kept.ret() {
        collect(ctx, lam.ret, ret, Polarity::Co, &mut candidates);
    }

    let mut bindings = TypeArgBindings::default();
    for tp in lam.tparams.iter() {
        // A parameter irrelevant at every known position cannot be
        // inferred and contributes nothing; omit it entirely.
        let relevant = positions
            .iter()
            .any(|&pos| variance_at(ctx, l, *tp, pos) != Variance::Irrelevant);
        if !relevant {
            continue;
        }
        let resolved = resolve(ctx, candidates.get(&tp.name), tp.bound);
        tracing::trace!(tparam = ?tp.name, ?resolved, "resolved type argument");
        bindings.insert(tp.name, resolved);
    }
    bindings
}

/// Combine collected candidates into one binding.
///
/// Contravariant candidates take priority and resolve to the most specific
/// one; covariant candidates union. A relevant parameter with no candidate
/// at all resolves to its declared bound, and every binding is capped at
/// the bound.
fn resolve(ctx: &TypeCtx, candidates: Option<&Candidates>, bound: TyIdx) -> TyIdx {
    let resolved = match candidates {
        Some(c) if !c.contra.is_empty() => most_specific(ctx, &c.contra),
        Some(c) if !c.co.is_empty() => ctx.pool.union(&c.co),
        _ => return bound,
    };
    if is_subtype(ctx, resolved, bound) {
        resolved
    } else {
        bound
    }
}

/// Resolve type arguments by matching the declared return type against a
/// caller-built shape, bypassing the known-entry filter.
///
/// Combinators that re-derive a step entity use this when the shape they
/// match against is not itself a producible return value — the flipped
/// curried chain pins the inner parameter contravariantly through an
/// entity shape whose own return carries no information (`any`).
pub fn type_args_from_ret_shape(ctx: &TypeCtx, l: LambdaIdx, shape: TyIdx) -> TypeArgBindings {
    let lam = ctx.lambdas.get(l);
    if !lam.is_generic() {
        return TypeArgBindings::default();
    }
    let mut candidates: FxHashMap<Name, Candidates> = FxHashMap::default();
    collect(ctx, lam.ret, shape, Polarity::Co, &mut candidates);

    let mut bindings = TypeArgBindings::default();
    for tp in lam.tparams.iter() {
        if variance_at(ctx, l, *tp, Position::Ret) == Variance::Irrelevant {
            continue;
        }
        bindings.insert(tp.name, resolve(ctx, candidates.get(&tp.name), tp.bound));
    }
    bindings
}

/// The candidate assignable to all others; incomparable candidates
/// collapse to `never`.
fn most_specific(ctx: &TypeCtx, candidates: &[TyIdx]) -> TyIdx {
    for &c in candidates {
        if candidates.iter().all(|&other| is_subtype(ctx, c, other)) {
            return c;
        }
    }
    TyIdx::NEVER
}

/// Walk `declared` against `actual`, recording a candidate every time a
/// type-parameter reference lines up with a concrete type. Polarity flips
/// under function/entity parameter positions.
fn collect(
    ctx: &TypeCtx,
    declared: TyIdx,
    actual: TyIdx,
    polarity: Polarity,
    out: &mut FxHashMap<Name, Candidates>,
) {
    let d = ctx.pool.lookup(declared);

    if let TyData::TParam(name) = &d {
        let entry = out.entry(*name).or_default();
        match polarity {
            Polarity::Co => entry.co.push(actual),
            Polarity::Contra => entry.contra.push(actual),
        }
        return;
    }

    match (d, ctx.pool.lookup(actual)) {
        (TyData::Tuple(ds), TyData::Tuple(xs)) => {
            for (d, x) in ds.iter().zip(xs.iter()) {
                collect(ctx, d.ty, x.ty, polarity, out);
            }
        }
        (TyData::List(d), TyData::List(x)) => collect(ctx, d, x, polarity, out),
        // A tuple pins a list's element type to the union of its
        // elements, as one candidate (per-element candidates would
        // collapse incomparable literals under contravariant resolution).
        (TyData::List(d), TyData::Tuple(xs)) => {
            let elems: Vec<TyIdx> = xs.iter().map(|x| x.ty).collect();
            let united = ctx.pool.union(&elems);
            collect(ctx, d, united, polarity, out);
        }
        (TyData::Fn { params: dp, ret: dr }, _) | (TyData::LambdaSig { params: dp, ret: dr }, _) => {
            if let Some((ap, ar)) = fn_view(ctx, actual) {
                for (d, a) in dp.iter().zip(ap.iter()) {
                    collect(ctx, d.ty, a.ty, polarity.flip(), out);
                }
                collect(ctx, dr, ar, polarity, out);
            }
        }
        _ => {}
    }
}

/// The function-shaped view of a type: its parameter slots and return.
///
/// Concrete entities resolve through their accessors (unresolved type
/// parameters close at their bounds).
fn fn_view(ctx: &TypeCtx, ty: TyIdx) -> Option<(Box<[Param]>, TyIdx)> {
    match ctx.pool.lookup(ty) {
        TyData::Fn { params, ret } | TyData::LambdaSig { params, ret } => Some((params, ret)),
        TyData::Lambda(l) => Some((
            params(ctx, l, &KnownArgs::none()),
            ret_type(ctx, l, &KnownArgs::none()),
        )),
        _ => None,
    }
}

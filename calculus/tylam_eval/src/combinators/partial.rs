//! Partial application.
//!
//! A subset of arguments — a prefix or a sparse index mapping — is fixed,
//! producing an entity over the remaining parameters only. Type
//! parameters pinned by the provided arguments are substituted into the
//! remaining slots; the rest stay free. At invocation time the remaining
//! arguments are interleaved back into their original positions before
//! delegating to the base entity.
//!
//! Provided arguments are not themselves checked against the base entity
//! (only invocation is); incompatible fixings surface as `never` results.

use tylam_ir::{DerivedRule, LambdaIdx, Rule, TyIdx};
use tylam_types::{
    substitute, type_args, KnownArgs, LambdaData, Param, TParamDecl, TypeCtx,
};

/// Partially apply `f` by fixing a prefix of its arguments.
pub fn partial_apply_prefix(ctx: &TypeCtx, f: LambdaIdx, args: &[TyIdx]) -> LambdaIdx {
    let entries: Vec<(usize, TyIdx)> = args.iter().copied().enumerate().collect();
    partial_apply(ctx, f, &entries)
}

/// Partially apply `f` by fixing arguments at scattered positions.
///
/// Entries at positions past the declared arity are ignored.
pub fn partial_apply(ctx: &TypeCtx, f: LambdaIdx, provided: &[(usize, TyIdx)]) -> LambdaIdx {
    let lam = ctx.lambdas.get(f);
    let arity = lam.arity();
    let provided: Vec<(usize, TyIdx)> = provided
        .iter()
        .copied()
        .filter(|&(i, _)| i < arity)
        .collect();

    // Pin whatever type parameters the provided arguments determine; the
    // rest stay free on the result.
    let bindings = type_args(ctx, f, &KnownArgs::from_sparse(&provided));
    let remaining: Box<[TParamDecl]> = lam
        .tparams
        .iter()
        .filter(|tp| !bindings.contains_key(&tp.name))
        .copied()
        .collect();

    let kept: Box<[Param]> = lam
        .params
        .iter()
        .enumerate()
        .filter(|(i, _)| !provided.iter().any(|&(j, _)| j == *i))
        .map(|(_, p)| Param {
            label: p.label,
            ty: substitute(ctx, p.ty, &bindings),
        })
        .collect();
    let ret = substitute(ctx, lam.ret, &bindings);

    #[expect(
        clippy::cast_possible_truncation,
        reason = "positions are bounded by declared arity, far below u8::MAX"
    )]
    let provided_packed: Box<[(u8, TyIdx)]> = provided
        .iter()
        .map(|&(i, ty)| (i as u8, ty))
        .collect();
    let body = Rule::Derived(DerivedRule::Partial {
        base: f,
        provided: provided_packed,
    });

    let data = if remaining.is_empty() {
        LambdaData::new(kept, ret, body)
    } else {
        LambdaData::generic(remaining, kept, ret, body)
    };
    ctx.lambdas.declare(data)
}

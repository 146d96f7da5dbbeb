//! Argument flipping.
//!
//! Two shapes are supported: a binary entity (parameters swapped,
//! labels preserved) and a unary entity returning a unary entity (outer
//! and inner argument order reversed).

use tylam_ir::{DerivedRule, LambdaIdx, Rule, TyIdx};
use tylam_types::{
    params_of, ret_of, substitute, type_args_from_ret_shape, LambdaData, Param, TParamSubst,
    TypeCtx, TypeError,
};

/// Flip an entity's arguments.
pub fn flip(ctx: &TypeCtx, f: LambdaIdx) -> Result<LambdaIdx, TypeError> {
    let lam = ctx.lambdas.get(f);

    if lam.arity() == 2 {
        let swapped = [lam.params[1], lam.params[0]];
        let body = Rule::Derived(DerivedRule::FlipArgs { base: f });
        let data = if lam.is_generic() {
            LambdaData::generic(lam.tparams, swapped, lam.ret, body)
        } else {
            LambdaData::new(swapped, lam.ret, body)
        };
        return Ok(ctx.lambdas.declare(data));
    }

    // Curried shape: unary, returning a unary entity
    if lam.arity() == 1 {
        if let Some(inner_params) = params_of(ctx, lam.ret) {
            if inner_params.len() == 1 {
                let inner_ret = ret_of(ctx, lam.ret);
                let outer_param = [inner_params[0]];
                let new_ret = ctx.pool.lambda_sig(lam.params.clone(), inner_ret);
                let body = Rule::Derived(DerivedRule::FlipCurried { base: f });
                let data = if lam.is_generic() {
                    LambdaData::generic(lam.tparams, outer_param, new_ret, body)
                } else {
                    LambdaData::new(outer_param, new_ret, body)
                };
                return Ok(ctx.lambdas.declare(data));
            }
        }
    }

    Err(TypeError::UnsupportedFlip(f))
}

/// The inner step of a flipped curried chain, with the original inner
/// argument `second` already supplied.
///
/// For a generic base, type arguments are re-derived by matching the
/// declared (curried) return shape against an entity shape that pins the
/// inner parameter contravariantly and reveals nothing about the result.
pub(crate) fn flip_curried_step(ctx: &TypeCtx, base: LambdaIdx, second: TyIdx) -> LambdaIdx {
    let lam = ctx.lambdas.get(base);
    let body = Rule::Derived(DerivedRule::FlipCurriedStep { base, second });

    let map = if lam.is_generic() {
        let probe = ctx.pool.lambda_sig([Param::unlabeled(second)], TyIdx::ANY);
        let bindings = type_args_from_ret_shape(ctx, base, probe);
        let mut map = TParamSubst::default();
        for tp in lam.tparams.iter() {
            map.insert(
                tp.name,
                bindings.get(&tp.name).copied().unwrap_or(tp.bound),
            );
        }
        map
    } else {
        TParamSubst::default()
    };

    let step_params: Box<[Param]> = lam
        .params
        .iter()
        .map(|p| Param {
            label: p.label,
            ty: substitute(ctx, p.ty, &map),
        })
        .collect();
    let step_ret = ret_of(ctx, substitute(ctx, lam.ret, &map));
    ctx.lambdas.declare(LambdaData::new(step_params, step_ret, body))
}

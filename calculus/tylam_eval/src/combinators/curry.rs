//! Currying: an N-ary entity into a chain of unary entities.
//!
//! Each step closes over the arguments taken so far and re-derives the
//! narrowed remaining signature from them, so a generic base resolves
//! progressively as arguments arrive.

use tylam_ir::{DerivedRule, LambdaIdx, Rule, TyIdx};
use tylam_types::{params, params_len, ret_type, KnownArgs, LambdaData, Param, TypeCtx};

/// Curry an entity. Nullary and unary entities are returned unchanged.
pub fn curry(ctx: &TypeCtx, f: LambdaIdx) -> LambdaIdx {
    if params_len(ctx, f) <= 1 {
        return f;
    }
    curry_step(ctx, f, &[])
}

/// One step of the curried chain, closing over `taken` arguments.
///
/// The outer step of a generic base keeps the signature symbolic and stays
/// generic; every later step resolves against the arguments taken so far
/// (unresolved type parameters close at their bounds).
pub(crate) fn curry_step(ctx: &TypeCtx, base: LambdaIdx, taken: &[TyIdx]) -> LambdaIdx {
    let lam = ctx.lambdas.get(base);
    let k = taken.len();
    debug_assert!(k < lam.arity());
    let body = Rule::Derived(DerivedRule::CurryStep {
        base,
        taken: taken.into(),
    });

    if k == 0 && lam.is_generic() {
        let first = [lam.params[0]];
        let ret = nested_chain(ctx, &lam.params[1..], lam.ret);
        return ctx
            .lambdas
            .declare(LambdaData::generic(lam.tparams, first, ret, body));
    }

    let known = KnownArgs::from_args(taken);
    let slots = params(ctx, base, &known);
    let ret_final = ret_type(ctx, base, &known);
    let step_param = [slots[k]];
    let ret = nested_chain(ctx, &slots[k + 1..], ret_final);
    ctx.lambdas.declare(LambdaData::new(step_param, ret, body))
}

/// `Fn<(s0) -> Fn<(s1) -> ... -> ret>>` over the remaining slots.
fn nested_chain(ctx: &TypeCtx, slots: &[Param], final_ret: TyIdx) -> TyIdx {
    let mut ret = final_ret;
    for slot in slots.iter().rev() {
        ret = ctx.pool.lambda_sig([*slot], ret);
    }
    ret
}

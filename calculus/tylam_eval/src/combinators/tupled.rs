//! Tupling and untupling: N-ary ⇄ unary-over-an-N-tuple.
//!
//! Generic metadata is carried over unchanged; only the outer parameter
//! shape changes.

use tylam_ir::{DerivedRule, LambdaIdx, Rule};
use tylam_types::{LambdaData, Param, TyData, TypeCtx, TypeError};

/// Convert an N-ary entity into a unary entity taking one N-tuple.
pub fn tupled(ctx: &TypeCtx, f: LambdaIdx) -> LambdaIdx {
    let lam = ctx.lambdas.get(f);
    // Parameter labels survive inside the tuple type
    let packed = ctx.pool.tuple(lam.params.clone());
    let args = [Param::labeled(ctx.name("args"), packed)];
    let body = Rule::Derived(DerivedRule::Tupled { base: f });
    let data = if lam.is_generic() {
        LambdaData::generic(lam.tparams, args, lam.ret, body)
    } else {
        LambdaData::new(args, lam.ret, body)
    };
    ctx.lambdas.declare(data)
}

/// Convert a unary entity over a tuple back into a variadic entity.
pub fn untupled(ctx: &TypeCtx, f: LambdaIdx) -> Result<LambdaIdx, TypeError> {
    let lam = ctx.lambdas.get(f);
    let first = lam
        .params
        .first()
        .map_or(tylam_ir::TyIdx::NEVER, |p| p.ty);
    if lam.arity() != 1 {
        return Err(TypeError::UntupledNeedsTuple(first));
    }
    let TyData::Tuple(slots) = ctx.pool.lookup(first) else {
        return Err(TypeError::UntupledNeedsTuple(first));
    };
    let body = Rule::Derived(DerivedRule::Untupled { base: f });
    let data = if lam.is_generic() {
        LambdaData::generic(lam.tparams, slots, lam.ret, body)
    } else {
        LambdaData::new(slots, lam.ret, body)
    };
    Ok(ctx.lambdas.declare(data))
}

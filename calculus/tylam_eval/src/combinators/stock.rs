//! Stock entities.

use tylam_ir::{LambdaIdx, Rule, TyIdx};
use tylam_types::{LambdaData, Param, TParamDecl, TypeCtx};

/// `() -> t`, always producing the same type.
pub fn always(ctx: &TypeCtx, t: TyIdx) -> LambdaIdx {
    ctx.lambdas
        .declare(LambdaData::new([], t, Rule::Const(t)).named(ctx.name("Always")))
}

/// `<T>(value: T) -> T`.
pub fn identity(ctx: &TypeCtx) -> LambdaIdx {
    let t = TParamDecl::unbounded(ctx.name("T"));
    let tp = ctx.pool.tparam(t.name);
    ctx.lambdas.declare(
        LambdaData::generic([t], [Param::labeled(ctx.name("value"), tp)], tp, Rule::Arg(0))
            .named(ctx.name("Identity")),
    )
}

/// `(value: t) -> t`, fixing the value type. The inference anchor when
/// composing generic chains.
pub fn ask(ctx: &TypeCtx, t: TyIdx) -> LambdaIdx {
    ctx.lambdas.declare(
        LambdaData::new([Param::labeled(ctx.name("value"), t)], t, Rule::Arg(0))
            .named(ctx.name("Ask")),
    )
}

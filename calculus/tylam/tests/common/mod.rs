//! Shared entity fixtures for the integration suite.

// Not every test binary uses every fixture.
#![allow(dead_code)]

use tylam::prelude::*;

/// `Concat: (s1: str, s2: str) -> str`
pub fn concat(ctx: &TypeCtx) -> LambdaIdx {
    ctx.lambdas.declare(
        LambdaData::new(
            [
                Param::labeled(ctx.name("s1"), TyIdx::STR),
                Param::labeled(ctx.name("s2"), TyIdx::STR),
            ],
            TyIdx::STR,
            Rule::ConcatStr(Box::new([Rule::Arg(0), Rule::Arg(1)])),
        )
        .named(ctx.name("Concat")),
    )
}

/// `Append<suffix>: (s: str) -> str`
pub fn append(ctx: &TypeCtx, suffix: &str) -> LambdaIdx {
    let lit = ctx.str_lit(suffix);
    ctx.lambdas.declare(
        LambdaData::new(
            [Param::labeled(ctx.name("s"), TyIdx::STR)],
            TyIdx::STR,
            Rule::ConcatStr(Box::new([Rule::Arg(0), Rule::Const(lit)])),
        )
        .named(ctx.name("Append")),
    )
}

/// `ParseNumber: (s: str) -> num`
pub fn parse_number(ctx: &TypeCtx) -> LambdaIdx {
    ctx.lambdas.declare(
        LambdaData::new(
            [Param::labeled(ctx.name("s"), TyIdx::STR)],
            TyIdx::NUM,
            Rule::ParseNum(Rule::Arg(0).boxed()),
        )
        .named(ctx.name("ParseNumber")),
    )
}

/// `Add1: (n: num) -> num`
pub fn add1(ctx: &TypeCtx) -> LambdaIdx {
    let one = ctx.pool.num_lit(1);
    ctx.lambdas.declare(
        LambdaData::new(
            [Param::labeled(ctx.name("n"), TyIdx::NUM)],
            TyIdx::NUM,
            Rule::AddNum(Box::new([Rule::Arg(0), Rule::Const(one)])),
        )
        .named(ctx.name("Add1")),
    )
}

/// `Map: <T, U>(f: Fn<(x: T) -> U>, xs: [T]) -> [U]`
pub fn map_entity(ctx: &TypeCtx) -> LambdaIdx {
    let t = TParamDecl::unbounded(ctx.name("T"));
    let u = TParamDecl::unbounded(ctx.name("U"));
    let tp_t = ctx.pool.tparam(t.name);
    let tp_u = ctx.pool.tparam(u.name);
    let f_ty = ctx
        .pool
        .lambda_sig([Param::labeled(ctx.name("x"), tp_t)], tp_u);
    ctx.lambdas.declare(
        LambdaData::generic(
            [t, u],
            [
                Param::labeled(ctx.name("f"), f_ty),
                Param::labeled(ctx.name("xs"), ctx.pool.list(tp_t)),
            ],
            ctx.pool.list(tp_u),
            Rule::Map {
                f: Rule::Arg(0).boxed(),
                over: Rule::Arg(1).boxed(),
            },
        )
        .named(ctx.name("Map")),
    )
}

/// `Reduce: <T, U>(f: Fn<(acc: U, x: T) -> U>, init: U, xs: [T]) -> U`
pub fn reduce_entity(ctx: &TypeCtx) -> LambdaIdx {
    let t = TParamDecl::unbounded(ctx.name("T"));
    let u = TParamDecl::unbounded(ctx.name("U"));
    let tp_t = ctx.pool.tparam(t.name);
    let tp_u = ctx.pool.tparam(u.name);
    let f_ty = ctx.pool.lambda_sig(
        [
            Param::labeled(ctx.name("acc"), tp_u),
            Param::labeled(ctx.name("x"), tp_t),
        ],
        tp_u,
    );
    ctx.lambdas.declare(
        LambdaData::generic(
            [t, u],
            [
                Param::labeled(ctx.name("f"), f_ty),
                Param::labeled(ctx.name("init"), tp_u),
                Param::labeled(ctx.name("xs"), ctx.pool.list(tp_t)),
            ],
            tp_u,
            Rule::Fold {
                f: Rule::Arg(0).boxed(),
                init: Rule::Arg(1).boxed(),
                over: Rule::Arg(2).boxed(),
            },
        )
        .named(ctx.name("Reduce")),
    )
}

/// `MakeTuple: <T>(value: T) -> (T)`
pub fn make_tuple(ctx: &TypeCtx) -> LambdaIdx {
    let t = TParamDecl::unbounded(ctx.name("T"));
    let tp = ctx.pool.tparam(t.name);
    ctx.lambdas.declare(
        LambdaData::generic(
            [t],
            [Param::labeled(ctx.name("value"), tp)],
            ctx.pool.tuple_of(&[tp]),
            Rule::Tuple(Box::new([Rule::Arg(0)])),
        )
        .named(ctx.name("MakeTuple")),
    )
}

//! End-to-end invocation behavior: casting laws, the two safety levels,
//! and bottom-type contagion.

mod common;

use common::{concat, parse_number};
use pretty_assertions::assert_eq;
use tylam::prelude::*;
use tylam::{apply_ty_unchecked, cast_args, kind, LambdaIdx};

/// `PrintArgs: (a: str, b: str) -> (str, str)` returning its own cast
/// argument tuple.
fn print_args(ctx: &TypeCtx) -> LambdaIdx {
    ctx.lambdas.declare(LambdaData::new(
        [
            Param::labeled(ctx.name("a"), TyIdx::STR),
            Param::labeled(ctx.name("b"), TyIdx::STR),
        ],
        ctx.pool.tuple_of(&[TyIdx::STR, TyIdx::STR]),
        Rule::Args,
    ))
}

#[test]
fn casting_follows_all_three_rules() {
    let ctx = TypeCtx::new();
    let l = print_args(&ctx);
    let foo = ctx.str_lit("foo");
    let bar = ctx.str_lit("bar");
    let baz = ctx.str_lit("baz");
    let n42 = ctx.pool.num_lit(42);

    // Incompatible arguments cast to never
    assert_eq!(
        apply_unchecked(&ctx, l, &[foo, n42]),
        ctx.pool.tuple_of(&[foo, TyIdx::NEVER])
    );
    // Redundant arguments truncate
    assert_eq!(
        apply_unchecked(&ctx, l, &[foo, bar, baz]),
        ctx.pool.tuple_of(&[foo, bar])
    );
    // Missing arguments pad with never
    assert_eq!(
        apply_unchecked(&ctx, l, &[foo]),
        ctx.pool.tuple_of(&[foo, TyIdx::NEVER])
    );
    // All rules combine
    assert_eq!(
        apply_unchecked(&ctx, l, &[n42]),
        ctx.pool.tuple_of(&[TyIdx::NEVER, TyIdx::NEVER])
    );
    // The casting function agrees with what the body observed
    assert_eq!(*cast_args(&ctx, l, &[foo, n42]), [foo, TyIdx::NEVER]);
}

#[test]
fn checked_invocation_is_sound() {
    let ctx = TypeCtx::new();
    // Declared to return str, but the body always computes the literal 42
    let lying = ctx.lambdas.declare(LambdaData::new(
        [
            Param::labeled(ctx.name("s1"), TyIdx::STR),
            Param::labeled(ctx.name("s2"), TyIdx::STR),
        ],
        TyIdx::STR,
        Rule::Const(ctx.pool.num_lit(42)),
    ));
    let foo = ctx.str_lit("foo");
    let bar = ctx.str_lit("bar");

    // Checked: collapses to never. Unchecked: the real computed value.
    assert_eq!(apply(&ctx, lying, &[foo, bar]), Ok(TyIdx::NEVER));
    assert_eq!(apply_unchecked(&ctx, lying, &[foo, bar]), ctx.pool.num_lit(42));
}

#[test]
fn checked_invocation_rejects_at_the_boundary() {
    let ctx = TypeCtx::new();
    let l = concat(&ctx);
    let foo = ctx.str_lit("foo");
    let n42 = ctx.pool.num_lit(42);

    match apply(&ctx, l, &[foo, n42]) {
        Err(TypeError::ArgMismatch { index, .. }) => assert_eq!(index, 1),
        other => panic!("expected an argument mismatch, got {other:?}"),
    }
    match apply(&ctx, l, &[foo]) {
        Err(TypeError::ArityMismatch { expected, found }) => {
            assert_eq!((expected, found), (2, 1));
        }
        other => panic!("expected an arity mismatch, got {other:?}"),
    }
}

#[test]
fn bottom_type_is_contagious() {
    let ctx = TypeCtx::new();
    let parse = parse_number(&ctx);
    // "nope" is not numeric: the body reduces to never
    assert_eq!(apply(&ctx, parse, &[ctx.str_lit("nope")]), Ok(TyIdx::NEVER));

    // and never stays never through further application
    let l = concat(&ctx);
    assert_eq!(
        apply_unchecked(&ctx, l, &[TyIdx::NEVER, ctx.str_lit("x")]),
        TyIdx::NEVER
    );
}

#[test]
fn kind_provides_the_tolerant_fallback() {
    let ctx = TypeCtx::new();
    let abstract_ctor = ctx
        .pool
        .lambda_sig([Param::unlabeled(TyIdx::UNKNOWN)], ctx.pool.list(TyIdx::NUM));
    let foo = ctx.str_lit("foo");

    // A non-concrete callee answers its return type instead of never
    assert_eq!(kind(&ctx, abstract_ctor, &[foo]), ctx.pool.list(TyIdx::NUM));
    assert_eq!(apply_ty_unchecked(&ctx, abstract_ctor, &[foo]), TyIdx::NEVER);

    // A concrete callee reduces normally
    let l = concat(&ctx);
    let bar = ctx.str_lit("bar");
    assert_eq!(
        kind(&ctx, ctx.pool.lambda(l), &[foo, bar]),
        ctx.str_lit("foobar")
    );
}

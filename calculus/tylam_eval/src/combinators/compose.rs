//! Composition and left-to-right chains are built on one primitive:
//! "apply f, then feed the result to g".

use tylam_ir::{DerivedRule, LambdaIdx, Rule};
use tylam_types::{
    is_subtype, param_at, params, ret_type, KnownArgs, LambdaData, TypeCtx, TypeError,
};

/// Compose two unary entities: `compose(g, f)` applies `f` first.
///
/// Checked: the return type of `f` must be assignable to the sole
/// parameter of `g`.
pub fn compose(ctx: &TypeCtx, g: LambdaIdx, f: LambdaIdx) -> Result<LambdaIdx, TypeError> {
    let f_ret = ret_type(ctx, f, &KnownArgs::none());
    let g_param = param_at(ctx, g, 0, &KnownArgs::none());
    if !is_subtype(ctx, f_ret, g_param) {
        return Err(TypeError::NotComposable {
            ret: f_ret,
            param: g_param,
        });
    }
    Ok(compose_unchecked(ctx, g, f))
}

/// Compose without the boundary check.
pub fn compose_unchecked(ctx: &TypeCtx, g: LambdaIdx, f: LambdaIdx) -> LambdaIdx {
    let f_lam = ctx.lambdas.get(f);
    let g_lam = ctx.lambdas.get(g);
    let body = Rule::Derived(DerivedRule::Compose { g, f });

    if f_lam.is_generic() && g_lam.is_generic() {
        // The composed entity stays generic over f's type parameters;
        // g's resolve against f's symbolic return (leftovers close at
        // their bounds).
        let ret = ret_type(ctx, g, &KnownArgs::from_args(&[f_lam.ret]));
        return ctx
            .lambdas
            .declare(LambdaData::generic(f_lam.tparams, f_lam.params, ret, body));
    }

    // At most one side is generic: resolve eagerly, using the concrete
    // side as known information for the other.
    let f_params = params(ctx, f, &KnownArgs::from_ret(param_at(ctx, g, 0, &KnownArgs::none())));
    let ret = ret_type(ctx, g, &KnownArgs::from_args(&[ret_type(ctx, f, &KnownArgs::none())]));
    ctx.lambdas.declare(LambdaData::new(f_params, ret, body))
}

#[cfg(test)]
#[expect(clippy::expect_used, reason = "Tests use expect for brevity")]
mod tests {
    use super::*;
    use crate::invoke::{apply, apply_unchecked};
    use pretty_assertions::assert_eq;
    use tylam_ir::TyIdx;
    use tylam_types::{sig, Param, TParamDecl};

    /// `(s: str) -> num` parsing a numeric string.
    fn parse_number(ctx: &TypeCtx) -> LambdaIdx {
        ctx.lambdas.declare(LambdaData::new(
            [Param::labeled(ctx.name("s"), TyIdx::STR)],
            TyIdx::NUM,
            Rule::ParseNum(Rule::Arg(0).boxed()),
        ))
    }

    /// `(n: num) -> num` adding one.
    fn add1(ctx: &TypeCtx) -> LambdaIdx {
        ctx.lambdas.declare(LambdaData::new(
            [Param::labeled(ctx.name("n"), TyIdx::NUM)],
            TyIdx::NUM,
            Rule::AddNum(Box::new([Rule::Arg(0), Rule::Const(ctx.pool.num_lit(1))])),
        ))
    }

    /// `<T>(value: T) -> (T)` wrapping its argument in a 1-tuple.
    fn make_tuple(ctx: &TypeCtx) -> LambdaIdx {
        let t = TParamDecl::unbounded(ctx.name("T"));
        let tp = ctx.pool.tparam(t.name);
        ctx.lambdas.declare(LambdaData::generic(
            [t],
            [Param::labeled(ctx.name("value"), tp)],
            ctx.pool.tuple_of(&[tp]),
            Rule::Tuple(Box::new([Rule::Arg(0)])),
        ))
    }

    /// `(value: t) -> t` fixing the inference anchor type.
    fn ask(ctx: &TypeCtx, t: TyIdx) -> LambdaIdx {
        ctx.lambdas.declare(LambdaData::new(
            [Param::labeled(ctx.name("value"), t)],
            t,
            Rule::Arg(0),
        ))
    }

    #[test]
    fn compose_parses_then_adds() {
        let ctx = TypeCtx::new();
        let composed = compose(&ctx, add1(&ctx), parse_number(&ctx)).expect("composable");

        // Signature round-trip: (s: str) -> num
        let expected_sig = ctx
            .pool
            .fn_ty([Param::labeled(ctx.name("s"), TyIdx::STR)], TyIdx::NUM);
        assert_eq!(sig(&ctx, composed, &KnownArgs::none()), expected_sig);

        let s42 = ctx.str_lit("42");
        assert_eq!(apply(&ctx, composed, &[s42]), Ok(ctx.pool.num_lit(43)));
    }

    #[test]
    fn incompatible_stages_are_rejected() {
        let ctx = TypeCtx::new();
        // add1 returns num; parse_number wants str
        let err = compose(&ctx, parse_number(&ctx), add1(&ctx));
        assert_eq!(
            err,
            Err(TypeError::NotComposable {
                ret: TyIdx::NUM,
                param: TyIdx::STR,
            })
        );
    }

    #[test]
    fn concrete_into_generic_resolves_eagerly() {
        let ctx = TypeCtx::new();
        // make_tuple after ask(str): (value: str) -> (str)
        let composed =
            compose(&ctx, make_tuple(&ctx), ask(&ctx, TyIdx::STR)).expect("composable");
        let expected_sig = ctx.pool.fn_ty(
            [Param::labeled(ctx.name("value"), TyIdx::STR)],
            ctx.pool.tuple_of(&[TyIdx::STR]),
        );
        assert_eq!(sig(&ctx, composed, &KnownArgs::none()), expected_sig);

        let foo = ctx.str_lit("foo");
        assert_eq!(
            apply(&ctx, composed, &[foo]),
            Ok(ctx.pool.tuple_of(&[foo]))
        );
    }

    #[test]
    fn generic_with_generic_stays_generic() {
        let ctx = TypeCtx::new();
        let mt = make_tuple(&ctx);
        let composed = compose(&ctx, mt, mt).expect("composable");

        // <T>(value: T) -> ((T))
        let t = ctx.pool.tparam(ctx.name("T"));
        let expected_sig = ctx.pool.forall(
            [TParamDecl::unbounded(ctx.name("T"))],
            ctx.pool.fn_ty(
                [Param::labeled(ctx.name("value"), t)],
                ctx.pool.tuple_of(&[ctx.pool.tuple_of(&[t])]),
            ),
        );
        assert_eq!(sig(&ctx, composed, &KnownArgs::none()), expected_sig);

        let n42 = ctx.pool.num_lit(42);
        let expected = ctx.pool.tuple_of(&[ctx.pool.tuple_of(&[n42])]);
        assert_eq!(apply_unchecked(&ctx, composed, &[n42]), expected);
    }

    #[test]
    fn composing_with_a_bottomed_stage_stays_bottom() {
        let ctx = TypeCtx::new();
        let composed = compose(&ctx, add1(&ctx), parse_number(&ctx)).expect("composable");
        // "nope" parses to never, and never is contagious through add1
        let nope = ctx.str_lit("nope");
        assert_eq!(apply_unchecked(&ctx, composed, &[nope]), TyIdx::NEVER);
    }
}

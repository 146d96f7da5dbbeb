//! Left-to-right chains.
//!
//! `flow` chains entities by repeated composition; `pipe` threads a value
//! through repeated checked invocation. Both iterate over a slice of any
//! length; deep chains stay bounded by the engine's reduction budget.

use tylam_ir::{LambdaIdx, TyIdx};
use tylam_types::{TypeCtx, TypeError};

use super::compose::compose;
use crate::invoke::apply;

/// Compose a chain of unary entities left to right: the first stage runs
/// first.
pub fn flow(ctx: &TypeCtx, stages: &[LambdaIdx]) -> Result<LambdaIdx, TypeError> {
    let Some((&first, rest)) = stages.split_first() else {
        return Err(TypeError::EmptyChain);
    };
    let mut acc = first;
    for &next in rest {
        acc = compose(ctx, next, acc)?;
    }
    Ok(acc)
}

/// Pipe a value through unary entities left to right, checked at every
/// stage.
pub fn pipe(ctx: &TypeCtx, value: TyIdx, stages: &[LambdaIdx]) -> Result<TyIdx, TypeError> {
    if stages.is_empty() {
        return Err(TypeError::EmptyChain);
    }
    let mut acc = value;
    for &stage in stages {
        acc = apply(ctx, stage, &[acc])?;
    }
    Ok(acc)
}

#[cfg(test)]
#[expect(clippy::expect_used, reason = "Tests use expect for brevity")]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use tylam_ir::Rule;
    use tylam_types::{sig, KnownArgs, LambdaData, Param};

    /// `(s: str) -> str` appending a suffix.
    fn append(ctx: &TypeCtx, suffix: &str) -> LambdaIdx {
        let lit = ctx.str_lit(suffix);
        ctx.lambdas.declare(LambdaData::new(
            [Param::labeled(ctx.name("s"), TyIdx::STR)],
            TyIdx::STR,
            Rule::ConcatStr(Box::new([Rule::Arg(0), Rule::Const(lit)])),
        ))
    }

    #[test]
    fn flow_runs_left_to_right() {
        let ctx = TypeCtx::new();
        let stages = [append(&ctx, "b"), append(&ctx, "c"), append(&ctx, "d")];
        let chain = flow(&ctx, &stages).expect("chain composes");

        let expected_sig = ctx
            .pool
            .fn_ty([Param::labeled(ctx.name("s"), TyIdx::STR)], TyIdx::STR);
        assert_eq!(sig(&ctx, chain, &KnownArgs::none()), expected_sig);

        let a = ctx.str_lit("a");
        assert_eq!(
            crate::invoke::apply(&ctx, chain, &[a]),
            Ok(ctx.str_lit("abcd"))
        );
    }

    #[test]
    fn single_stage_flow_is_that_stage() {
        let ctx = TypeCtx::new();
        let only = append(&ctx, "!");
        assert_eq!(flow(&ctx, &[only]), Ok(only));
    }

    #[test]
    fn pipe_threads_a_value() {
        let ctx = TypeCtx::new();
        let stages = [append(&ctx, "b"), append(&ctx, "c")];
        let a = ctx.str_lit("a");
        assert_eq!(pipe(&ctx, a, &stages), Ok(ctx.str_lit("abc")));
    }

    #[test]
    fn pipe_rejects_an_incompatible_value() {
        let ctx = TypeCtx::new();
        let stages = [append(&ctx, "b")];
        let n42 = ctx.pool.num_lit(42);
        assert_eq!(
            pipe(&ctx, n42, &stages),
            Err(TypeError::ArgMismatch {
                index: 0,
                expected: TyIdx::STR,
                found: n42,
            })
        );
    }

    #[test]
    fn empty_chains_are_errors() {
        let ctx = TypeCtx::new();
        assert_eq!(flow(&ctx, &[]), Err(TypeError::EmptyChain));
        assert_eq!(
            pipe(&ctx, TyIdx::STR, &[]),
            Err(TypeError::EmptyChain)
        );
    }

    #[test]
    fn long_chains_iterate() {
        let ctx = TypeCtx::new();
        let stages: Vec<LambdaIdx> = (0..24).map(|_| append(&ctx, "x")).collect();
        let start = ctx.str_lit("");
        let result = pipe(&ctx, start, &stages).expect("pipe succeeds");
        assert_eq!(result, ctx.str_lit(&"x".repeat(24)));
    }
}

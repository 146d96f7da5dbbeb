//! A type-level function calculus.
//!
//! Tylam models "type-level functions": named entities mapping a tuple of
//! type arguments to a result type, reduced by a deterministic engine the
//! way a type checker reduces nested conditional types. The library
//! provides the entity model, argument binding and casting, checked and
//! unchecked invocation, signature introspection, per-parameter variance
//! inference with tolerant fallback shapes, generic resolution from sparse
//! call-site knowledge, and a combinator algebra (compose, flow, pipe,
//! curry, flip, tupled/untupled, partial application).
//!
//! # Example
//!
//! ```
//! use tylam::prelude::*;
//!
//! let ctx = TypeCtx::new();
//!
//! // Concat: (s1: str, s2: str) -> str
//! let concat = ctx.lambdas.declare(LambdaData::new(
//!     [
//!         Param::labeled(ctx.name("s1"), TyIdx::STR),
//!         Param::labeled(ctx.name("s2"), TyIdx::STR),
//!     ],
//!     TyIdx::STR,
//!     Rule::ConcatStr(Box::new([Rule::Arg(0), Rule::Arg(1)])),
//! ));
//!
//! let foo = ctx.str_lit("foo");
//! let bar = ctx.str_lit("bar");
//! assert_eq!(apply(&ctx, concat, &[foo, bar]), Ok(ctx.str_lit("foobar")));
//!
//! // Incompatible arguments are rejected at the call boundary
//! let n42 = ctx.pool.num_lit(42);
//! assert!(apply(&ctx, concat, &[foo, n42]).is_err());
//! ```

pub use tylam_ir::{
    DerivedRule, InternError, LambdaIdx, Name, Rule, SharedInterner, StringInterner, TyIdx,
};
pub use tylam_types::{
    equals, format_ty, format_ty_into, is_subtype, mutual_subtype, param_at, params, params_len,
    params_of, ret_of, ret_type, sig, substitute, tolerant_param_at, tolerant_params,
    tolerant_ret, tolerant_ret_of, type_args, type_args_from_ret_shape, variance_at, KnownArgs,
    LambdaData, LambdaStore, Param, Position, TParamDecl, TParamSubst, TyData, TyPool,
    TypeArgBindings, TypeCtx, TypeError, Variance, LAMBDA_VERSION,
};
pub use tylam_eval::{
    always, apply, apply_ty, apply_ty_unchecked, apply_unchecked, ask, cast_arg, cast_args,
    compose, compose_unchecked, curry, flip, flow, identity, kind, partial_apply,
    partial_apply_prefix, pipe, raw_arg, tupled, untupled,
};

/// The commonly used surface in one import.
pub mod prelude {
    pub use tylam_eval::{
        apply, apply_ty, apply_unchecked, compose, curry, flip, flow, kind, partial_apply,
        partial_apply_prefix, pipe, tupled, untupled,
    };
    pub use tylam_ir::{LambdaIdx, Name, Rule, TyIdx};
    pub use tylam_types::{
        equals, format_ty, is_subtype, mutual_subtype, sig, KnownArgs, LambdaData, Param,
        TParamDecl, TyData, TypeCtx, TypeError,
    };
}

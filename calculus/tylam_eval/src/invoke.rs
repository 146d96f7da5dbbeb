//! Invocation with two safety levels.
//!
//! Checked invocation enforces the argument/parameter contract at the call
//! boundary (the hard error channel) and the return contract after
//! reduction (the soft `never` collapse). Unchecked invocation binds and
//! reduces with no upfront checks; incompatibilities surface as `never`
//! through casting.

use tylam_ir::{LambdaIdx, TyIdx};
use tylam_types::{
    is_subtype, params_len, ret_type, tolerant_param_at, tolerant_ret_of, KnownArgs, TyData,
    TypeCtx, TypeError,
};

use crate::interp::{eval_callee, eval_lambda};

/// Invoke entity `l` with `args`, unchecked.
pub fn apply_unchecked(ctx: &TypeCtx, l: LambdaIdx, args: &[TyIdx]) -> TyIdx {
    eval_lambda(ctx, l, args, 0)
}

/// Invoke entity `l` with `args`, checked.
///
/// The argument tuple must have the declared arity and each argument must
/// be assignable to the tolerant parameter at its slot; violations are
/// errors at the call boundary. The reduced result must additionally be
/// assignable to the return type resolved from the arguments, or the
/// invocation collapses to `never`.
#[tracing::instrument(level = "trace", skip(ctx, args))]
pub fn apply(ctx: &TypeCtx, l: LambdaIdx, args: &[TyIdx]) -> Result<TyIdx, TypeError> {
    let arity = params_len(ctx, l);
    if args.len() != arity {
        return Err(TypeError::ArityMismatch {
            expected: arity,
            found: args.len(),
        });
    }
    for (i, &arg) in args.iter().enumerate() {
        let expected = tolerant_param_at(ctx, l, i);
        if !is_subtype(ctx, arg, expected) {
            return Err(TypeError::ArgMismatch {
                index: i,
                expected,
                found: arg,
            });
        }
    }

    let result = apply_unchecked(ctx, l, args);
    let expected_ret = ret_type(ctx, l, &KnownArgs::from_args(args));
    if is_subtype(ctx, result, expected_ret) {
        Ok(result)
    } else {
        tracing::trace!(
            "reduced result incompatible with declared return; collapsing to never"
        );
        Ok(TyIdx::NEVER)
    }
}

/// Invoke a type used as a callee, checked. Non-entities are errors.
pub fn apply_ty(ctx: &TypeCtx, fty: TyIdx, args: &[TyIdx]) -> Result<TyIdx, TypeError> {
    match ctx.pool.lookup(fty) {
        TyData::Lambda(l) => apply(ctx, l, args),
        _ => Err(TypeError::NotAnEntity(fty)),
    }
}

/// Invoke a type used as a callee, unchecked. Non-entities reduce to
/// `never`.
pub fn apply_ty_unchecked(ctx: &TypeCtx, fty: TyIdx, args: &[TyIdx]) -> TyIdx {
    eval_callee(ctx, fty, args, 0)
}

/// Unchecked invocation with a tolerant fallback: when the callee is not a
/// concrete entity (e.g. an abstract entity type standing in for a type
/// constructor), the result is its tolerant return type instead of
/// `never`. This supports classical-HKT-style recursive encodings.
pub fn kind(ctx: &TypeCtx, fty: TyIdx, args: &[TyIdx]) -> TyIdx {
    match ctx.pool.lookup(fty) {
        TyData::Lambda(l) => eval_lambda(ctx, l, args, 0),
        _ => tolerant_ret_of(ctx, fty),
    }
}

//! Bound-argument access and casting.
//!
//! An invocation associates a raw argument tuple with an entity for its
//! duration. Cast arguments align the raw tuple to the declared arity
//! (truncating redundant arguments, right-padding missing ones with
//! `never`) and replace each positionally-incompatible argument with
//! `never`. Compatibility is judged against the tolerant parameters.

use tylam_ir::{LambdaIdx, TyIdx};
use tylam_types::{is_subtype, tolerant_params, TypeCtx};

/// Cast a raw argument tuple to the entity's declared parameters.
pub fn cast_args(ctx: &TypeCtx, l: LambdaIdx, raw: &[TyIdx]) -> Box<[TyIdx]> {
    let expected = tolerant_params(ctx, l);

    // Quick path: the raw tuple already fits the expected shape.
    if raw.len() == expected.len()
        && raw
            .iter()
            .zip(expected.iter())
            .all(|(&a, p)| is_subtype(ctx, a, p.ty))
    {
        return raw.into();
    }

    expected
        .iter()
        .enumerate()
        .map(|(i, p)| match raw.get(i) {
            Some(&a) if is_subtype(ctx, a, p.ty) => a,
            _ => TyIdx::NEVER,
        })
        .collect()
}

/// Cast argument at one position; out of range is `never`.
pub fn cast_arg(ctx: &TypeCtx, l: LambdaIdx, raw: &[TyIdx], index: usize) -> TyIdx {
    cast_args(ctx, l, raw)
        .get(index)
        .copied()
        .unwrap_or(TyIdx::NEVER)
}

/// Raw argument at one position; out of range is `never` (accessing
/// arguments that were never bound fails closed).
pub fn raw_arg(raw: &[TyIdx], index: usize) -> TyIdx {
    raw.get(index).copied().unwrap_or(TyIdx::NEVER)
}

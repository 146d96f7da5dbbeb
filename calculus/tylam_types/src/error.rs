//! Type errors.
//!
//! These are the *hard* failure channel: checked invocation and checked
//! composition reject incompatible inputs with a `TypeError` at the call
//! boundary. Soft failures (casting, return-compatibility, budget
//! exhaustion) collapse to `never` instead and never surface here.

use tylam_ir::{LambdaIdx, TyIdx};

use crate::ctx::TypeCtx;
use crate::display::format_ty;

/// Type error raised at a call boundary.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum TypeError {
    /// Wrong number of arguments for a checked invocation.
    ArityMismatch { expected: usize, found: usize },
    /// An argument is not assignable to the parameter at its slot.
    ArgMismatch {
        index: usize,
        expected: TyIdx,
        found: TyIdx,
    },
    /// The left entity of a composition cannot accept the right entity's
    /// return type.
    NotComposable { ret: TyIdx, param: TyIdx },
    /// A value used as a callee is not an entity.
    NotAnEntity(TyIdx),
    /// A chain combinator was given no stages.
    EmptyChain,
    /// The entity has a shape `flip` does not operate on.
    UnsupportedFlip(LambdaIdx),
    /// `untupled` requires a unary entity whose parameter is a tuple.
    UntupledNeedsTuple(TyIdx),
}

impl std::fmt::Display for TypeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TypeError::ArityMismatch { expected, found } => {
                let plural = if *expected == 1 { "" } else { "s" };
                write!(
                    f,
                    "wrong number of arguments: expected {expected} argument{plural}, found {found}"
                )
            }
            TypeError::ArgMismatch {
                index,
                expected,
                found,
            } => write!(
                f,
                "argument {index} is not assignable: expected `{expected}`, found `{found}`"
            ),
            TypeError::NotComposable { ret, param } => write!(
                f,
                "cannot compose: return type `{ret}` is not assignable to parameter `{param}`"
            ),
            TypeError::NotAnEntity(ty) => {
                write!(f, "`{ty}` is not a type-level function")
            }
            TypeError::EmptyChain => write!(f, "chain requires at least one stage"),
            TypeError::UnsupportedFlip(idx) => {
                write!(f, "entity {} cannot be flipped", idx.raw())
            }
            TypeError::UntupledNeedsTuple(ty) => {
                write!(f, "untupled requires a tuple parameter, found `{ty}`")
            }
        }
    }
}

impl std::error::Error for TypeError {}

impl TypeError {
    /// Render with fully formatted types (the bare `Display` impl only has
    /// raw indices for dynamic types).
    pub fn render(&self, ctx: &TypeCtx) -> String {
        match self {
            TypeError::ArgMismatch {
                index,
                expected,
                found,
            } => format!(
                "argument {index} is not assignable: expected `{}`, found `{}`",
                format_ty(ctx, *expected),
                format_ty(ctx, *found)
            ),
            TypeError::NotComposable { ret, param } => format!(
                "cannot compose: return type `{}` is not assignable to parameter `{}`",
                format_ty(ctx, *ret),
                format_ty(ctx, *param)
            ),
            TypeError::NotAnEntity(ty) => {
                format!("`{}` is not a type-level function", format_ty(ctx, *ty))
            }
            TypeError::UntupledNeedsTuple(ty) => format!(
                "untupled requires a tuple parameter, found `{}`",
                format_ty(ctx, *ty)
            ),
            other => other.to_string(),
        }
    }
}

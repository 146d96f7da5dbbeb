//! Type system for the Tylam calculus.
//!
//! The calculus operates over a single homogeneous representation: the
//! type-level function entity. This crate provides that representation and
//! every judgment over it that does not involve running a body rule:
//!
//! - `TyData`/`TyPool`: canonical interned types (`TyIdx` identity is
//!   structural identity)
//! - `LambdaData`/`LambdaStore`: the entity registry
//! - assignability, strict equality, substitution
//! - variance classification and tolerant parameter/return shapes
//! - generic type-argument resolution from sparse call-site knowledge
//! - signature rendering and type formatting
//!
//! Invocation and the combinators live in `tylam_eval`.

mod ctx;
mod data;
mod display;
mod error;
mod infer;
mod lambda;
mod pool;
mod sig;
mod subst;
mod subtype;
mod tolerant;
mod variance;

pub use ctx::TypeCtx;
pub use data::{Param, TParamDecl, TyData};
pub use display::{format_ty, format_ty_into};
pub use error::TypeError;
pub use infer::{type_args, type_args_from_ret_shape, TypeArgBindings};
pub use lambda::{
    param_at, params, params_len, params_of, ret_of, ret_type, KnownArgs, LambdaData, LambdaStore,
    LAMBDA_VERSION,
};
pub use pool::TyPool;
pub use sig::sig;
pub use subst::{substitute, TParamSubst};
pub use subtype::{equals, is_subtype, mutual_subtype};
pub use tolerant::{tolerant_param_at, tolerant_params, tolerant_ret, tolerant_ret_of};
pub use variance::{variance_at, Position, Variance};

// Size assertions to prevent accidental regressions; TyData is stored in
// the pool and cloned on every lookup.
#[cfg(target_pointer_width = "64")]
mod size_asserts {
    use super::TyData;
    // Largest variants carry a boxed slice (16) plus a TyIdx (4), padded
    // to 24, plus the discriminant.
    const _: () = assert!(std::mem::size_of::<TyData>() <= 40);
}

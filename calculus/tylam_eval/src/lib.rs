//! Interpreter and combinators for the Tylam calculus.
//!
//! Where `tylam_types` judges, this crate *reduces*: it binds arguments to
//! entities, evaluates body rules by enum dispatch, and registers the
//! derived entities the combinator algebra produces.
//!
//! Two safety levels exist throughout. Checked operations (`apply`,
//! `compose`, `pipe`) reject incompatible inputs with a `TypeError` at the
//! call boundary; everything else fails soft by collapsing to `never`,
//! which is contagious through further reduction.

mod binding;
mod combinators;
mod interp;
mod invoke;

pub use binding::{cast_arg, cast_args, raw_arg};
pub use combinators::{
    always, ask, compose, compose_unchecked, curry, flip, flow, identity, partial_apply,
    partial_apply_prefix, pipe, tupled, untupled,
};
pub use invoke::{apply, apply_ty, apply_ty_unchecked, apply_unchecked, kind};

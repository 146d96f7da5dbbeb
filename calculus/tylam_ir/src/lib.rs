//! Identifiers, interning and the body-rule IR for the Tylam calculus.
//!
//! This crate holds the leaf data the rest of the engine is built from:
//! - `Name`: compact interned identifier (parameter labels, type-parameter
//!   names, entity names)
//! - `StringInterner`: sharded string interner backing `Name`
//! - `TyIdx`: 32-bit handle into the type pool, with pre-interned primitives
//! - `LambdaIdx`: handle into the entity registry
//! - `Rule`: the body-rule AST an entity's return type is computed from
//!
//! All handles have Copy, Eq, Hash so downstream pools can use them as map
//! keys and compare in O(1).

mod idx;
mod interner;
mod name;
mod rule;

pub use idx::{LambdaIdx, TyIdx};
pub use interner::{InternError, SharedInterner, StringInterner};
pub use name::Name;
pub use rule::{DerivedRule, Rule};

//! Internal type representation stored in the type pool.
//!
//! External code works with `TyIdx` (u32 indices) for O(1) equality; the
//! pool interns `TyData` canonically, so index identity *is* structural
//! identity (including tuple labels).

use tylam_ir::{LambdaIdx, Name, TyIdx};

/// One parameter (or tuple) slot: an optional label and a type.
///
/// Labels are carried for signature rendering and exact-equality checks;
/// assignability ignores them.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub struct Param {
    /// Slot label, if declared.
    pub label: Option<Name>,
    /// Slot type.
    pub ty: TyIdx,
}

impl Param {
    /// An unlabeled slot.
    #[inline]
    pub fn unlabeled(ty: TyIdx) -> Self {
        Param { label: None, ty }
    }

    /// A labeled slot.
    #[inline]
    pub fn labeled(label: Name, ty: TyIdx) -> Self {
        Param {
            label: Some(label),
            ty,
        }
    }
}

/// A declared type parameter: identifier plus upper bound.
///
/// The bound defaults to `unknown` (unconstrained) at construction sites.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub struct TParamDecl {
    /// Declared identifier.
    pub name: Name,
    /// Upper bound (`TyIdx::UNKNOWN` when unconstrained).
    pub bound: TyIdx,
}

impl TParamDecl {
    /// An unconstrained type parameter.
    #[inline]
    pub fn unbounded(name: Name) -> Self {
        TParamDecl {
            name,
            bound: TyIdx::UNKNOWN,
        }
    }

    /// A bounded type parameter.
    #[inline]
    pub fn bounded(name: Name, bound: TyIdx) -> Self {
        TParamDecl { name, bound }
    }
}

/// Internal type representation stored in the pool.
///
/// # Design
///
/// - Primitives are pre-interned with fixed `TyIdx` values
/// - Compound types store `TyIdx` children, not boxed types
/// - Unions are canonicalized at interning time (flattened, deduplicated,
///   sorted), so equal unions intern to the same index
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub enum TyData {
    // Primitives (pre-interned at fixed indices)
    /// The bottom type.
    Never,
    /// The top type.
    Unknown,
    /// The bidirectionally-assignable placeholder.
    Any,
    /// String type.
    Str,
    /// Number type.
    Num,
    /// Boolean type.
    Bool,

    // Literal types
    /// A string literal type, e.g. `"foo"`.
    StrLit(Name),
    /// A numeric literal type, e.g. `42`.
    NumLit(i64),
    /// A boolean literal type.
    BoolLit(bool),

    // Compound types
    /// Tuple type with possibly-labeled slots.
    Tuple(Box<[Param]>),
    /// Homogeneous list type.
    List(TyIdx),
    /// Plain function type; the rendering target of signature
    /// introspection.
    Fn { params: Box<[Param]>, ret: TyIdx },
    /// Universally quantified function type; the rendering target of
    /// signature introspection for generic entities.
    ForAll {
        tparams: Box<[TParamDecl]>,
        body: TyIdx,
    },

    // Entity types
    /// The abstract type-level-function type: any concrete entity whose
    /// signature fits is assignable to it.
    LambdaSig { params: Box<[Param]>, ret: TyIdx },
    /// A reference to a concrete registered entity.
    Lambda(LambdaIdx),

    /// Symbolic reference to a declared type parameter.
    TParam(Name),

    /// Union type. Canonical: flattened, no `never` members, deduplicated,
    /// sorted by raw index, always at least two members.
    Union(Box<[TyIdx]>),
}

impl TyData {
    /// Check if this is a pre-interned primitive.
    pub fn is_primitive(&self) -> bool {
        matches!(
            self,
            TyData::Never | TyData::Unknown | TyData::Any | TyData::Str | TyData::Num | TyData::Bool
        )
    }

    /// Check if this is a literal type.
    pub fn is_literal(&self) -> bool {
        matches!(
            self,
            TyData::StrLit(_) | TyData::NumLit(_) | TyData::BoolLit(_)
        )
    }

    /// Check if this is an entity-shaped type (concrete or abstract).
    pub fn is_entity(&self) -> bool {
        matches!(self, TyData::Lambda(_) | TyData::LambdaSig { .. })
    }
}

//! Index handles into the type pool and the entity registry.
//!
//! `TyIdx` is THE canonical type representation: all types are stored in a
//! pool and referenced by a 32-bit index. Type equality is O(1) index
//! comparison, and the pool interns canonically so structural identity and
//! index identity coincide.

use std::fmt;

/// A 32-bit index into the type pool.
///
/// Primitive types have fixed indices (0-5) for O(1) access without a pool.
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
#[repr(transparent)]
pub struct TyIdx(u32);

impl TyIdx {
    // === Primitive types (indices 0-5) ===
    // Pre-interned at pool creation.

    /// The bottom type `never` (uninhabited; the "no valid value" signal).
    pub const NEVER: Self = Self(0);
    /// The top type `unknown` (everything is assignable to it).
    pub const UNKNOWN: Self = Self(1);
    /// The `any` placeholder (assignable in both directions, except into
    /// `never`). Used as the invariant-position substitute and as the
    /// "no information" slot during generic resolution.
    pub const ANY: Self = Self(2);
    /// The `str` type.
    pub const STR: Self = Self(3);
    /// The `num` type.
    pub const NUM: Self = Self(4);
    /// The `bool` type.
    pub const BOOL: Self = Self(5);

    /// First index for dynamically interned types.
    pub const FIRST_DYNAMIC: u32 = 6;

    /// Number of pre-interned primitive types.
    pub const PRIMITIVE_COUNT: u32 = 6;

    /// Create an index from a raw u32 value.
    #[inline]
    pub const fn from_raw(raw: u32) -> Self {
        Self(raw)
    }

    /// Get the raw u32 value.
    #[inline]
    pub const fn raw(self) -> u32 {
        self.0
    }

    /// Check if this is a pre-interned primitive type.
    #[inline]
    pub const fn is_primitive(self) -> bool {
        self.0 < Self::FIRST_DYNAMIC
    }

    /// Check if this is the bottom type.
    #[inline]
    pub const fn is_never(self) -> bool {
        self.0 == Self::NEVER.0
    }

    /// Check if this is the top type.
    #[inline]
    pub const fn is_unknown(self) -> bool {
        self.0 == Self::UNKNOWN.0
    }

    /// Check if this is the `any` placeholder.
    #[inline]
    pub const fn is_any(self) -> bool {
        self.0 == Self::ANY.0
    }

    /// Get the display name for primitive types.
    ///
    /// Returns `None` for dynamic types, which need the pool to render.
    #[inline]
    pub const fn name(self) -> Option<&'static str> {
        match self.0 {
            0 => Some("never"),
            1 => Some("unknown"),
            2 => Some("any"),
            3 => Some("str"),
            4 => Some("num"),
            5 => Some("bool"),
            _ => None,
        }
    }
}

impl fmt::Debug for TyIdx {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.name() {
            Some(name) => write!(f, "TyIdx::{}", name.to_uppercase()),
            None => write!(f, "TyIdx({})", self.0),
        }
    }
}

impl fmt::Display for TyIdx {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.name() {
            Some(name) => write!(f, "{name}"),
            None => write!(f, "type#{}", self.0),
        }
    }
}

// Compile-time size assertion: TyIdx must be exactly 4 bytes
const _: () = assert!(std::mem::size_of::<TyIdx>() == 4);

/// A 32-bit index into the entity registry (`LambdaStore`).
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
#[repr(transparent)]
pub struct LambdaIdx(u32);

impl LambdaIdx {
    /// Create an index from a raw u32 value.
    #[inline]
    pub const fn from_raw(raw: u32) -> Self {
        Self(raw)
    }

    /// Get the raw u32 value.
    #[inline]
    pub const fn raw(self) -> u32 {
        self.0
    }
}

impl fmt::Debug for LambdaIdx {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "LambdaIdx({})", self.0)
    }
}

const _: () = assert!(std::mem::size_of::<LambdaIdx>() == 4);

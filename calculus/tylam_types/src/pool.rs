//! Interning type pool.
//!
//! Provides O(1) type interning, lookup and equality comparison via
//! `TyIdx`. Interning is canonical: unions are normalized before storage,
//! so structurally equal types always receive the same index.

use parking_lot::RwLock;
use rustc_hash::FxHashMap;
use tylam_ir::{LambdaIdx, Name, TyIdx};

use crate::data::{Param, TParamDecl, TyData};

struct PoolInner {
    /// Map from type data to index for deduplication.
    map: FxHashMap<TyData, u32>,
    /// Storage for type data, indexed by `TyIdx`.
    types: Vec<TyData>,
}

impl PoolInner {
    fn with_primitives() -> Self {
        let mut inner = PoolInner {
            map: FxHashMap::default(),
            types: Vec::with_capacity(64),
        };

        // Pre-intern primitives at fixed indices matching TyIdx constants
        let primitives = [
            TyData::Never,   // 0 = TyIdx::NEVER
            TyData::Unknown, // 1 = TyIdx::UNKNOWN
            TyData::Any,     // 2 = TyIdx::ANY
            TyData::Str,     // 3 = TyIdx::STR
            TyData::Num,     // 4 = TyIdx::NUM
            TyData::Bool,    // 5 = TyIdx::BOOL
        ];

        for (idx, data) in primitives.into_iter().enumerate() {
            #[expect(
                clippy::cast_possible_truncation,
                reason = "primitives count is fixed and small"
            )]
            let idx_u32 = idx as u32;
            inner.map.insert(data.clone(), idx_u32);
            inner.types.push(data);
        }

        inner
    }
}

/// Interning type pool.
///
/// Interior-mutable: interning and lookup take `&self`, so the pool can be
/// handed around by shared reference throughout a checking session.
pub struct TyPool {
    inner: RwLock<PoolInner>,
}

impl TyPool {
    /// Create a new pool with pre-interned primitives.
    pub fn new() -> Self {
        TyPool {
            inner: RwLock::new(PoolInner::with_primitives()),
        }
    }

    /// Intern a type, returning its `TyIdx`.
    ///
    /// If the type is already interned, returns the existing index.
    ///
    /// # Panics
    /// Panics if the pool exceeds `u32::MAX` types.
    pub fn intern(&self, data: TyData) -> TyIdx {
        // Fast path for primitives: fixed indices, no lock round-trip
        match data {
            TyData::Never => return TyIdx::NEVER,
            TyData::Unknown => return TyIdx::UNKNOWN,
            TyData::Any => return TyIdx::ANY,
            TyData::Str => return TyIdx::STR,
            TyData::Num => return TyIdx::NUM,
            TyData::Bool => return TyIdx::BOOL,
            _ => {}
        }

        // Fast path: already interned
        {
            let guard = self.inner.read();
            if let Some(&idx) = guard.map.get(&data) {
                return TyIdx::from_raw(idx);
            }
        }

        // Slow path: insert under the write lock
        let mut guard = self.inner.write();

        // Double-check after acquiring write lock
        if let Some(&idx) = guard.map.get(&data) {
            return TyIdx::from_raw(idx);
        }

        let idx = match u32::try_from(guard.types.len()) {
            Ok(idx) => idx,
            Err(_) => panic!("type pool exceeded u32::MAX types"),
        };
        guard.types.push(data.clone());
        guard.map.insert(data, idx);
        TyIdx::from_raw(idx)
    }

    /// Look up the type data for a `TyIdx`.
    ///
    /// # Panics
    /// Panics if the index was not created by this pool.
    pub fn lookup(&self, idx: TyIdx) -> TyData {
        let guard = self.inner.read();
        guard.types[idx.raw() as usize].clone()
    }

    /// Number of interned types.
    pub fn len(&self) -> usize {
        self.inner.read().types.len()
    }

    /// Check if the pool holds only the pre-interned primitives.
    pub fn is_empty(&self) -> bool {
        self.len() <= TyIdx::PRIMITIVE_COUNT as usize
    }

    // Convenience constructors.
    //
    // All of these go through `intern()`, so identical arguments always
    // return the same `TyIdx`.

    /// A string literal type.
    pub fn str_lit(&self, value: Name) -> TyIdx {
        self.intern(TyData::StrLit(value))
    }

    /// A numeric literal type.
    pub fn num_lit(&self, value: i64) -> TyIdx {
        self.intern(TyData::NumLit(value))
    }

    /// A boolean literal type.
    pub fn bool_lit(&self, value: bool) -> TyIdx {
        self.intern(TyData::BoolLit(value))
    }

    /// A tuple type from labeled slots.
    pub fn tuple(&self, slots: impl Into<Box<[Param]>>) -> TyIdx {
        self.intern(TyData::Tuple(slots.into()))
    }

    /// A tuple type from unlabeled element types.
    pub fn tuple_of(&self, elems: &[TyIdx]) -> TyIdx {
        let slots: Box<[Param]> = elems.iter().map(|&ty| Param::unlabeled(ty)).collect();
        self.intern(TyData::Tuple(slots))
    }

    /// A list type.
    pub fn list(&self, elem: TyIdx) -> TyIdx {
        self.intern(TyData::List(elem))
    }

    /// A plain function type.
    pub fn fn_ty(&self, params: impl Into<Box<[Param]>>, ret: TyIdx) -> TyIdx {
        self.intern(TyData::Fn {
            params: params.into(),
            ret,
        })
    }

    /// A universally quantified function type.
    pub fn forall(&self, tparams: impl Into<Box<[TParamDecl]>>, body: TyIdx) -> TyIdx {
        self.intern(TyData::ForAll {
            tparams: tparams.into(),
            body,
        })
    }

    /// An abstract type-level-function type.
    pub fn lambda_sig(&self, params: impl Into<Box<[Param]>>, ret: TyIdx) -> TyIdx {
        self.intern(TyData::LambdaSig {
            params: params.into(),
            ret,
        })
    }

    /// A reference to a concrete entity.
    pub fn lambda(&self, idx: LambdaIdx) -> TyIdx {
        self.intern(TyData::Lambda(idx))
    }

    /// A symbolic type-parameter reference.
    pub fn tparam(&self, name: Name) -> TyIdx {
        self.intern(TyData::TParam(name))
    }

    /// A union type, canonicalized.
    ///
    /// Nested unions are flattened, `never` members dropped, duplicates
    /// removed and members sorted. A union containing `any` collapses to
    /// `any`, one containing `unknown` to `unknown`; an empty union is
    /// `never` and a single-member union is that member.
    pub fn union(&self, members: &[TyIdx]) -> TyIdx {
        let mut flat: Vec<TyIdx> = Vec::with_capacity(members.len());
        for &m in members {
            if m.is_any() {
                return TyIdx::ANY;
            }
            if m.is_unknown() {
                return TyIdx::UNKNOWN;
            }
            if m.is_never() {
                continue;
            }
            match self.lookup(m) {
                TyData::Union(inner) => flat.extend(inner.iter().copied()),
                _ => flat.push(m),
            }
        }
        flat.sort_unstable();
        flat.dedup();
        match flat.len() {
            0 => TyIdx::NEVER,
            1 => flat[0],
            _ => self.intern(TyData::Union(flat.into_boxed_slice())),
        }
    }
}

impl Default for TyPool {
    fn default() -> Self {
        Self::new()
    }
}

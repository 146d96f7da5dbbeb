//! The entity model: type-level functions and their registry.
//!
//! An entity is declared once and is immutable. Combinators register *new*
//! entities that close over existing ones by index, so the registry is
//! acyclic by construction: an entity cannot reference itself or anything
//! declared after it.

use parking_lot::RwLock;
use rustc_hash::FxHashMap;
use smallvec::SmallVec;
use tylam_ir::{LambdaIdx, Name, Rule, TyIdx};

use crate::ctx::TypeCtx;
use crate::data::{Param, TParamDecl, TyData};
use crate::infer::type_args;
use crate::subst::{substitute, TParamSubst};

/// Version marker distinguishing a valid entity from arbitrary structural
/// data.
pub const LAMBDA_VERSION: u8 = 1;

/// A registered type-level function.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct LambdaData {
    /// Diagnostic name, if any. Part of identity: two entities with the
    /// same shape but different names stay distinct.
    pub name: Option<Name>,
    /// Structural version tag (always `LAMBDA_VERSION`).
    pub version: u8,
    /// Declared parameters (arity 0-N, possibly labeled).
    pub params: Box<[Param]>,
    /// Declared return type.
    pub ret: TyIdx,
    /// Declared type parameters; empty for a plain entity.
    pub tparams: Box<[TParamDecl]>,
    /// The body rule computing the return type from bound arguments.
    pub body: Rule,
}

impl LambdaData {
    /// A plain (non-generic) entity.
    pub fn new(params: impl Into<Box<[Param]>>, ret: TyIdx, body: Rule) -> Self {
        LambdaData {
            name: None,
            version: LAMBDA_VERSION,
            params: params.into(),
            ret,
            tparams: Box::new([]),
            body,
        }
    }

    /// A generic entity with declared type parameters.
    pub fn generic(
        tparams: impl Into<Box<[TParamDecl]>>,
        params: impl Into<Box<[Param]>>,
        ret: TyIdx,
        body: Rule,
    ) -> Self {
        LambdaData {
            name: None,
            version: LAMBDA_VERSION,
            params: params.into(),
            ret,
            tparams: tparams.into(),
            body,
        }
    }

    /// Attach a diagnostic name.
    pub fn named(mut self, name: Name) -> Self {
        self.name = Some(name);
        self
    }

    /// Whether the entity declares type parameters.
    #[inline]
    pub fn is_generic(&self) -> bool {
        !self.tparams.is_empty()
    }

    /// Declared arity.
    #[inline]
    pub fn arity(&self) -> usize {
        self.params.len()
    }
}

struct StoreInner {
    map: FxHashMap<LambdaData, u32>,
    lambdas: Vec<LambdaData>,
}

/// Registry of declared entities.
///
/// Declaring the same data twice returns the same index, so combinators can
/// re-derive intermediate entities without flooding the registry.
pub struct LambdaStore {
    inner: RwLock<StoreInner>,
}

impl LambdaStore {
    /// Create an empty registry.
    pub fn new() -> Self {
        LambdaStore {
            inner: RwLock::new(StoreInner {
                map: FxHashMap::default(),
                lambdas: Vec::new(),
            }),
        }
    }

    /// Register an entity, returning its index.
    ///
    /// # Panics
    /// Panics if the registry exceeds `u32::MAX` entities.
    pub fn declare(&self, data: LambdaData) -> LambdaIdx {
        debug_assert_eq!(data.version, LAMBDA_VERSION);

        {
            let guard = self.inner.read();
            if let Some(&idx) = guard.map.get(&data) {
                return LambdaIdx::from_raw(idx);
            }
        }

        let mut guard = self.inner.write();
        if let Some(&idx) = guard.map.get(&data) {
            return LambdaIdx::from_raw(idx);
        }

        let idx = match u32::try_from(guard.lambdas.len()) {
            Ok(idx) => idx,
            Err(_) => panic!("entity registry exceeded u32::MAX entities"),
        };
        guard.lambdas.push(data.clone());
        guard.map.insert(data, idx);
        LambdaIdx::from_raw(idx)
    }

    /// Look up an entity.
    ///
    /// # Panics
    /// Panics if the index was not created by this registry.
    pub fn get(&self, idx: LambdaIdx) -> LambdaData {
        let guard = self.inner.read();
        guard.lambdas[idx.raw() as usize].clone()
    }

    /// Number of registered entities.
    pub fn len(&self) -> usize {
        self.inner.read().lambdas.len()
    }

    /// Check if no entities are registered.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Default for LambdaStore {
    fn default() -> Self {
        Self::new()
    }
}

/// Sparse call-site knowledge about an invocation: some parameter types
/// and/or the return type. Absent keys are unknown.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct KnownArgs {
    params: SmallVec<[(usize, TyIdx); 4]>,
    ret: Option<TyIdx>,
}

impl KnownArgs {
    /// Nothing known.
    pub fn none() -> Self {
        KnownArgs::default()
    }

    /// Know a prefix of the parameters (a full argument tuple is the
    /// common case).
    pub fn from_args(args: &[TyIdx]) -> Self {
        KnownArgs {
            params: args.iter().copied().enumerate().collect(),
            ret: None,
        }
    }

    /// Know scattered parameter positions.
    pub fn from_sparse(entries: &[(usize, TyIdx)]) -> Self {
        KnownArgs {
            params: entries.iter().copied().collect(),
            ret: None,
        }
    }

    /// Additionally know the return type.
    pub fn with_ret(mut self, ret: TyIdx) -> Self {
        self.ret = Some(ret);
        self
    }

    /// Know only the return type.
    pub fn from_ret(ret: TyIdx) -> Self {
        KnownArgs {
            params: SmallVec::new(),
            ret: Some(ret),
        }
    }

    /// Whether nothing is known.
    pub fn is_empty(&self) -> bool {
        self.params.is_empty() && self.ret.is_none()
    }

    /// The known type at a parameter position, if any.
    pub fn param(&self, index: usize) -> Option<TyIdx> {
        self.params
            .iter()
            .find(|(i, _)| *i == index)
            .map(|&(_, ty)| ty)
    }

    /// The known return type, if any.
    pub fn ret(&self) -> Option<TyIdx> {
        self.ret
    }

    /// Iterate over known parameter entries.
    pub fn param_entries(&self) -> impl Iterator<Item = (usize, TyIdx)> + '_ {
        self.params.iter().copied()
    }

    /// Drop entries this filter rejects, keeping the return entry only if
    /// `keep_ret` holds.
    pub(crate) fn retain(
        &self,
        mut keep_param: impl FnMut(usize, TyIdx) -> bool,
        keep_ret: impl FnOnce(TyIdx) -> bool,
    ) -> KnownArgs {
        KnownArgs {
            params: self
                .params
                .iter()
                .copied()
                .filter(|&(i, ty)| keep_param(i, ty))
                .collect(),
            ret: self.ret.filter(|&ty| keep_ret(ty)),
        }
    }
}

/// Build a full substitution map: inferred bindings where available, and
/// every still-unresolved type parameter closed at its declared bound.
pub(crate) fn close_at_bounds(tparams: &[TParamDecl], bindings: TParamSubst) -> TParamSubst {
    let mut map = bindings;
    for tp in tparams {
        map.entry(tp.name).or_insert(tp.bound);
    }
    map
}

/// Declared parameter tuple of an entity.
///
/// For a generic entity, type arguments are first resolved from `known`,
/// substituted in, and unresolved parameters are closed at their declared
/// bounds.
pub fn params(ctx: &TypeCtx, l: LambdaIdx, known: &KnownArgs) -> Box<[Param]> {
    let lam = ctx.lambdas.get(l);
    if !lam.is_generic() {
        return lam.params;
    }
    let map = close_at_bounds(&lam.tparams, type_args(ctx, l, known));
    lam.params
        .iter()
        .map(|p| Param {
            label: p.label,
            ty: substitute(ctx, p.ty, &map),
        })
        .collect()
}

/// Declared arity of an entity.
pub fn params_len(ctx: &TypeCtx, l: LambdaIdx) -> usize {
    ctx.lambdas.get(l).arity()
}

/// Indexed parameter projection; out of range is `never`.
pub fn param_at(ctx: &TypeCtx, l: LambdaIdx, index: usize, known: &KnownArgs) -> TyIdx {
    params(ctx, l, known)
        .get(index)
        .map_or(TyIdx::NEVER, |p| p.ty)
}

/// Declared return type of an entity, under the same resolution as
/// [`params`].
pub fn ret_type(ctx: &TypeCtx, l: LambdaIdx, known: &KnownArgs) -> TyIdx {
    let lam = ctx.lambdas.get(l);
    if !lam.is_generic() {
        return lam.ret;
    }
    let map = close_at_bounds(&lam.tparams, type_args(ctx, l, known));
    substitute(ctx, lam.ret, &map)
}

/// Parameter tuple of an arbitrary entity-shaped type (a concrete entity
/// or an abstract `LambdaSig`). `None` for anything else.
pub fn params_of(ctx: &TypeCtx, ty: TyIdx) -> Option<Box<[Param]>> {
    match ctx.pool.lookup(ty) {
        TyData::Lambda(l) => Some(params(ctx, l, &KnownArgs::none())),
        TyData::LambdaSig { params, .. } => Some(params),
        _ => None,
    }
}

/// Return type of an arbitrary entity-shaped type; `never` for anything
/// else (fails closed).
pub fn ret_of(ctx: &TypeCtx, ty: TyIdx) -> TyIdx {
    match ctx.pool.lookup(ty) {
        TyData::Lambda(l) => ret_type(ctx, l, &KnownArgs::none()),
        TyData::LambdaSig { ret, .. } => ret,
        _ => TyIdx::NEVER,
    }
}

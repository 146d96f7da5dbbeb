//! Shared context for one checking session.

use tylam_ir::{Name, StringInterner, TyIdx};

use crate::lambda::LambdaStore;
use crate::pool::TyPool;

/// Everything the calculus operates over: the type pool, the entity
/// registry and the string interner.
///
/// All three are interior-mutable, so the context is passed by shared
/// reference everywhere.
pub struct TypeCtx {
    /// Interned types.
    pub pool: TyPool,
    /// Registered entities.
    pub lambdas: LambdaStore,
    /// Interned identifiers (labels, type-parameter names, entity names).
    pub strings: StringInterner,
}

impl TypeCtx {
    /// Create a fresh context.
    pub fn new() -> Self {
        TypeCtx {
            pool: TyPool::new(),
            lambdas: LambdaStore::new(),
            strings: StringInterner::new(),
        }
    }

    /// Intern an identifier.
    #[inline]
    pub fn name(&self, s: &str) -> Name {
        self.strings.intern(s)
    }

    /// Intern a string literal type from source text.
    #[inline]
    pub fn str_lit(&self, s: &str) -> TyIdx {
        let name = self.strings.intern(s);
        self.pool.str_lit(name)
    }
}

impl Default for TypeCtx {
    fn default() -> Self {
        Self::new()
    }
}

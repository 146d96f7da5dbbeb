//! Type-parameter substitution.
//!
//! Folds a substitution map over the structure of a type, rebuilding
//! through the pool. Entities (`Lambda`) are closed definitions and are
//! left untouched; `ForAll` binders shadow their own parameters.

use rustc_hash::FxHashMap;
use tylam_ir::{Name, TyIdx};

use crate::ctx::TypeCtx;
use crate::data::{Param, TParamDecl, TyData};

/// Substitution map from type-parameter identifiers to types.
pub type TParamSubst = FxHashMap<Name, TyIdx>;

/// Substitute type parameters in `ty` according to `map`.
///
/// Unmapped parameters are left symbolic.
pub fn substitute(ctx: &TypeCtx, ty: TyIdx, map: &TParamSubst) -> TyIdx {
    if map.is_empty() {
        return ty;
    }
    match ctx.pool.lookup(ty) {
        TyData::TParam(name) => map.get(&name).copied().unwrap_or(ty),
        TyData::Tuple(slots) => {
            let slots = subst_slots(ctx, &slots, map);
            ctx.pool.tuple(slots)
        }
        TyData::List(elem) => {
            let elem2 = substitute(ctx, elem, map);
            if elem2 == elem {
                ty
            } else {
                ctx.pool.list(elem2)
            }
        }
        TyData::Fn { params, ret } => {
            let params = subst_slots(ctx, &params, map);
            let ret = substitute(ctx, ret, map);
            ctx.pool.fn_ty(params, ret)
        }
        TyData::LambdaSig { params, ret } => {
            let params = subst_slots(ctx, &params, map);
            let ret = substitute(ctx, ret, map);
            ctx.pool.lambda_sig(params, ret)
        }
        TyData::Union(members) => {
            let members: Vec<TyIdx> = members.iter().map(|&m| substitute(ctx, m, map)).collect();
            ctx.pool.union(&members)
        }
        TyData::ForAll { tparams, body } => {
            // The binder shadows its own names
            let mut inner = map.clone();
            for tp in tparams.iter() {
                inner.remove(&tp.name);
            }
            if inner.is_empty() {
                return ty;
            }
            let tparams: Box<[TParamDecl]> = tparams
                .iter()
                .map(|tp| TParamDecl {
                    name: tp.name,
                    bound: substitute(ctx, tp.bound, &inner),
                })
                .collect();
            let body = substitute(ctx, body, &inner);
            ctx.pool.forall(tparams, body)
        }
        // Primitives, literals and closed entities contain no parameters
        _ => ty,
    }
}

fn subst_slots(ctx: &TypeCtx, slots: &[Param], map: &TParamSubst) -> Box<[Param]> {
    slots
        .iter()
        .map(|p| Param {
            label: p.label,
            ty: substitute(ctx, p.ty, map),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn substitutes_through_structure() {
        let ctx = TypeCtx::new();
        let t = ctx.name("T");
        let tp = ctx.pool.tparam(t);
        let list = ctx.pool.list(tp);

        let mut map = TParamSubst::default();
        map.insert(t, TyIdx::STR);

        assert_eq!(substitute(&ctx, list, &map), ctx.pool.list(TyIdx::STR));
        assert_eq!(substitute(&ctx, tp, &map), TyIdx::STR);
    }

    #[test]
    fn unmapped_params_stay_symbolic() {
        let ctx = TypeCtx::new();
        let t = ctx.name("T");
        let u = ctx.name("U");
        let tp_u = ctx.pool.tparam(u);

        let mut map = TParamSubst::default();
        map.insert(t, TyIdx::STR);

        assert_eq!(substitute(&ctx, tp_u, &map), tp_u);
    }

    #[test]
    fn flips_nothing_in_closed_types() {
        let ctx = TypeCtx::new();
        let t = ctx.name("T");
        let mut map = TParamSubst::default();
        map.insert(t, TyIdx::STR);

        let lit = ctx.str_lit("foo");
        assert_eq!(substitute(&ctx, lit, &map), lit);
        assert_eq!(substitute(&ctx, TyIdx::NUM, &map), TyIdx::NUM);
    }

    #[test]
    fn forall_shadows_its_binder() {
        let ctx = TypeCtx::new();
        let t = ctx.name("T");
        let tp = ctx.pool.tparam(t);
        let body = ctx.pool.fn_ty([Param::unlabeled(tp)], tp);
        let forall = ctx.pool.forall([TParamDecl::unbounded(t)], body);

        let mut map = TParamSubst::default();
        map.insert(t, TyIdx::STR);

        assert_eq!(substitute(&ctx, forall, &map), forall);
    }
}

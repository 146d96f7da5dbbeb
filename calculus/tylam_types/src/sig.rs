//! Signature introspection.
//!
//! Renders an entity's callable shape as a first-class function type, for
//! debugging and for exact-match assertions. Output is canonical under
//! interning, so signatures compare by index identity.

use tylam_ir::{LambdaIdx, TyIdx};

use crate::ctx::TypeCtx;
use crate::data::{Param, TParamDecl, TyData};
use crate::lambda::{params, ret_type, KnownArgs};
use crate::subst::{substitute, TParamSubst};
use crate::tolerant::{tolerant_params, tolerant_ret};

/// Canonical quantifier names, assigned positionally.
const CANONICAL: [&str; 4] = ["T", "U", "V", "W"];

/// Render the signature of entity `l`.
///
/// - Non-generic: a plain function type over the declared parameters and
///   return, with entity-shaped slots recursively expanded into nested
///   function types.
/// - Generic, nothing known, at most four type parameters: a universally
///   quantified function type with canonical quantifier names; a
///   parameter bounded by `unknown` renders unbounded.
/// - Otherwise: the plain fallback rendering over the resolved types.
pub fn sig(ctx: &TypeCtx, l: LambdaIdx, known: &KnownArgs) -> TyIdx {
    let lam = ctx.lambdas.get(l);

    if lam.is_generic() && known.is_empty() && lam.tparams.len() <= CANONICAL.len() {
        // Rename declared identifiers to the canonical ones, positionally.
        let mut rename = TParamSubst::default();
        for (i, tp) in lam.tparams.iter().enumerate() {
            let canon = ctx.name(CANONICAL[i]);
            rename.insert(tp.name, ctx.pool.tparam(canon));
        }
        let tparams: Box<[TParamDecl]> = lam
            .tparams
            .iter()
            .enumerate()
            .map(|(i, tp)| TParamDecl {
                name: ctx.name(CANONICAL[i]),
                bound: substitute(ctx, tp.bound, &rename),
            })
            .collect();
        let slots: Box<[Param]> = lam
            .params
            .iter()
            .map(|p| Param {
                label: p.label,
                ty: expand(ctx, substitute(ctx, p.ty, &rename)),
            })
            .collect();
        let ret = expand(ctx, substitute(ctx, lam.ret, &rename));
        let body = ctx.pool.fn_ty(slots, ret);
        return ctx.pool.forall(tparams, body);
    }

    // Plain entities and the generic fallback share the simple rendering.
    let slots: Box<[Param]> = params(ctx, l, known)
        .iter()
        .map(|p| Param {
            label: p.label,
            ty: expand(ctx, p.ty),
        })
        .collect();
    let ret = expand(ctx, ret_type(ctx, l, known));
    ctx.pool.fn_ty(slots, ret)
}

/// Expand an entity-shaped slot into a nested function type, recursively.
///
/// Concrete entities expand through their tolerant frame; everything that
/// is not entity-shaped is left untouched.
fn expand(ctx: &TypeCtx, ty: TyIdx) -> TyIdx {
    match ctx.pool.lookup(ty) {
        TyData::Lambda(l) => {
            let lam = ctx.lambdas.get(l);
            let (slots, ret) = if lam.is_generic() {
                (tolerant_params(ctx, l), tolerant_ret(ctx, l))
            } else {
                (lam.params, lam.ret)
            };
            let slots: Box<[Param]> = slots
                .iter()
                .map(|p| Param {
                    label: p.label,
                    ty: expand(ctx, p.ty),
                })
                .collect();
            let ret = expand(ctx, ret);
            ctx.pool.fn_ty(slots, ret)
        }
        TyData::LambdaSig { params, ret } => {
            let slots: Box<[Param]> = params
                .iter()
                .map(|p| Param {
                    label: p.label,
                    ty: expand(ctx, p.ty),
                })
                .collect();
            let ret = expand(ctx, ret);
            ctx.pool.fn_ty(slots, ret)
        }
        _ => ty,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::{Param, TParamDecl};
    use crate::lambda::LambdaData;
    use pretty_assertions::assert_eq;
    use tylam_ir::Rule;

    #[test]
    fn plain_signature_keeps_labels() {
        let ctx = TypeCtx::new();
        let s1 = ctx.name("s1");
        let s2 = ctx.name("s2");
        let l = ctx.lambdas.declare(LambdaData::new(
            [
                Param::labeled(s1, TyIdx::STR),
                Param::labeled(s2, TyIdx::STR),
            ],
            TyIdx::STR,
            Rule::ConcatStr(Box::new([Rule::Arg(0), Rule::Arg(1)])),
        ));

        let expected = ctx.pool.fn_ty(
            [
                Param::labeled(s1, TyIdx::STR),
                Param::labeled(s2, TyIdx::STR),
            ],
            TyIdx::STR,
        );
        assert_eq!(sig(&ctx, l, &KnownArgs::none()), expected);
    }

    #[test]
    fn generic_signature_quantifies_canonically() {
        let ctx = TypeCtx::new();
        // Declared under a non-canonical name on purpose
        let elem = TParamDecl::unbounded(ctx.name("Elem"));
        let tp = ctx.pool.tparam(elem.name);
        let l = ctx.lambdas.declare(LambdaData::generic(
            [elem],
            [Param::labeled(ctx.name("value"), tp)],
            ctx.pool.tuple_of(&[tp]),
            Rule::Tuple(Box::new([Rule::Arg(0)])),
        ));

        let t = ctx.name("T");
        let tp_t = ctx.pool.tparam(t);
        let body = ctx.pool.fn_ty(
            [Param::labeled(ctx.name("value"), tp_t)],
            ctx.pool.tuple_of(&[tp_t]),
        );
        let expected = ctx.pool.forall([TParamDecl::unbounded(t)], body);
        assert_eq!(sig(&ctx, l, &KnownArgs::none()), expected);
    }

    #[test]
    fn entity_shaped_slots_expand_to_nested_fns() {
        let ctx = TypeCtx::new();
        // (f: Fn<(x: str) -> num>) -> num
        let inner = ctx
            .pool
            .lambda_sig([Param::labeled(ctx.name("x"), TyIdx::STR)], TyIdx::NUM);
        let l = ctx.lambdas.declare(LambdaData::new(
            [Param::labeled(ctx.name("f"), inner)],
            TyIdx::NUM,
            Rule::Apply {
                target: Rule::Arg(0).boxed(),
                args: Box::new([Rule::Const(TyIdx::STR)]),
            },
        ));

        let inner_fn = ctx
            .pool
            .fn_ty([Param::labeled(ctx.name("x"), TyIdx::STR)], TyIdx::NUM);
        let expected = ctx
            .pool
            .fn_ty([Param::labeled(ctx.name("f"), inner_fn)], TyIdx::NUM);
        assert_eq!(sig(&ctx, l, &KnownArgs::none()), expected);
    }

    #[test]
    fn known_information_selects_the_fallback_rendering() {
        let ctx = TypeCtx::new();
        let t = TParamDecl::unbounded(ctx.name("T"));
        let tp = ctx.pool.tparam(t.name);
        let l = ctx.lambdas.declare(LambdaData::generic(
            [t],
            [Param::labeled(ctx.name("value"), tp)],
            tp,
            Rule::Arg(0),
        ));

        let expected = ctx
            .pool
            .fn_ty([Param::labeled(ctx.name("value"), TyIdx::STR)], TyIdx::STR);
        let known = KnownArgs::from_args(&[TyIdx::STR]);
        assert_eq!(sig(&ctx, l, &known), expected);
    }
}

//! Type formatting for debugging and error messages.

use tylam_ir::TyIdx;

use crate::ctx::TypeCtx;
use crate::data::{Param, TyData};

/// Format a type as a human-readable string.
pub fn format_ty(ctx: &TypeCtx, idx: TyIdx) -> String {
    let mut buf = String::new();
    format_ty_into(ctx, idx, &mut buf);
    buf
}

/// Format a type into an existing string buffer.
pub fn format_ty_into(ctx: &TypeCtx, idx: TyIdx, buf: &mut String) {
    match ctx.pool.lookup(idx) {
        // Primitives
        TyData::Never => buf.push_str("never"),
        TyData::Unknown => buf.push_str("unknown"),
        TyData::Any => buf.push_str("any"),
        TyData::Str => buf.push_str("str"),
        TyData::Num => buf.push_str("num"),
        TyData::Bool => buf.push_str("bool"),

        // Literals
        TyData::StrLit(name) => {
            buf.push('"');
            buf.push_str(ctx.strings.lookup(name));
            buf.push('"');
        }
        TyData::NumLit(n) => buf.push_str(&n.to_string()),
        TyData::BoolLit(b) => buf.push_str(if b { "true" } else { "false" }),

        // Compounds
        TyData::Tuple(slots) => {
            buf.push('(');
            format_slots(ctx, &slots, buf);
            buf.push(')');
        }
        TyData::List(elem) => {
            buf.push('[');
            format_ty_into(ctx, elem, buf);
            buf.push(']');
        }
        TyData::Fn { params, ret } => {
            buf.push('(');
            format_slots(ctx, &params, buf);
            buf.push_str(") -> ");
            format_ty_into(ctx, ret, buf);
        }
        TyData::ForAll { tparams, body } => {
            buf.push('<');
            for (i, tp) in tparams.iter().enumerate() {
                if i > 0 {
                    buf.push_str(", ");
                }
                buf.push_str(ctx.strings.lookup(tp.name));
                if !tp.bound.is_unknown() {
                    buf.push_str(": ");
                    format_ty_into(ctx, tp.bound, buf);
                }
            }
            buf.push('>');
            format_ty_into(ctx, body, buf);
        }

        // Entities
        TyData::LambdaSig { params, ret } => {
            buf.push_str("Fn<(");
            format_slots(ctx, &params, buf);
            buf.push_str(") -> ");
            format_ty_into(ctx, ret, buf);
            buf.push('>');
        }
        TyData::Lambda(l) => match ctx.lambdas.get(l).name {
            Some(name) => buf.push_str(ctx.strings.lookup(name)),
            None => {
                buf.push_str("fn#");
                buf.push_str(&l.raw().to_string());
            }
        },

        TyData::TParam(name) => buf.push_str(ctx.strings.lookup(name)),

        TyData::Union(members) => {
            for (i, &m) in members.iter().enumerate() {
                if i > 0 {
                    buf.push_str(" | ");
                }
                format_ty_into(ctx, m, buf);
            }
        }
    }
}

fn format_slots(ctx: &TypeCtx, slots: &[Param], buf: &mut String) {
    for (i, slot) in slots.iter().enumerate() {
        if i > 0 {
            buf.push_str(", ");
        }
        if let Some(label) = slot.label {
            buf.push_str(ctx.strings.lookup(label));
            buf.push_str(": ");
        }
        format_ty_into(ctx, slot.ty, buf);
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
    fn formats_primitives_and_literals() {
        let ctx = TypeCtx::new();
        assert_eq!(format_ty(&ctx, TyIdx::NEVER), "never");
        assert_eq!(format_ty(&ctx, ctx.str_lit("foo")), "\"foo\"");
        assert_eq!(format_ty(&ctx, ctx.pool.num_lit(42)), "42");
        assert_eq!(format_ty(&ctx, ctx.pool.bool_lit(true)), "true");
    }

    #[test]
    fn formats_compounds() {
        let ctx = TypeCtx::new();
        let pair = ctx.pool.tuple([
            Param::labeled(ctx.name("a"), TyIdx::STR),
            Param::unlabeled(TyIdx::NUM),
        ]);
        assert_eq!(format_ty(&ctx, pair), "(a: str, num)");
        assert_eq!(format_ty(&ctx, ctx.pool.list(TyIdx::STR)), "[str]");

        let f = ctx
            .pool
            .fn_ty([Param::labeled(ctx.name("s"), TyIdx::STR)], TyIdx::NUM);
        assert_eq!(format_ty(&ctx, f), "(s: str) -> num");
    }

    #[test]
    fn formats_quantifiers_and_unions() {
        let ctx = TypeCtx::new();
        let t = ctx.name("T");
        let u = ctx.name("U");
        let tp = ctx.pool.tparam(t);
        let body = ctx.pool.fn_ty([Param::unlabeled(tp)], tp);
        let forall = ctx.pool.forall(
            [TParamDecl::unbounded(t), TParamDecl::bounded(u, TyIdx::NUM)],
            body,
        );
        assert_eq!(format_ty(&ctx, forall), "<T, U: num>(T) -> T");

        let union = ctx.pool.union(&[ctx.str_lit("a"), ctx.str_lit("b")]);
        let rendered = format_ty(&ctx, union);
        assert!(rendered == "\"a\" | \"b\"" || rendered == "\"b\" | \"a\"");
    }

    #[test]
    fn formats_entities_by_name() {
        let ctx = TypeCtx::new();
        let l = ctx.lambdas.declare(
            LambdaData::new([], TyIdx::STR, Rule::Const(TyIdx::STR)).named(ctx.name("Greet")),
        );
        assert_eq!(format_ty(&ctx, ctx.pool.lambda(l)), "Greet");

        let sig = ctx
            .pool
            .lambda_sig([Param::labeled(ctx.name("x"), TyIdx::NEVER)], TyIdx::UNKNOWN);
        assert_eq!(format_ty(&ctx, sig), "Fn<(x: never) -> unknown>");
    }
}

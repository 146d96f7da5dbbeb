//! The body-rule interpreter.
//!
//! Entities reduce by enum dispatch on their body rule, with bound
//! arguments reachable only through the accessor rules. Reduction depth is
//! bounded; exceeding the budget fails closed to `never`.

use tylam_ir::{DerivedRule, Rule, TyIdx};
use tylam_types::{params_len, TyData, TypeCtx};

use crate::binding::{cast_args, raw_arg};
use crate::combinators::{curry_step, flip_curried_step};

/// Reduction depth budget, the analogue of a host checker's
/// instantiation-depth limit.
const MAX_EVAL_DEPTH: usize = 128;

/// Evaluate entity `l` applied to `raw` arguments, unchecked.
pub(crate) fn eval_lambda(
    ctx: &TypeCtx,
    l: tylam_ir::LambdaIdx,
    raw: &[TyIdx],
    depth: usize,
) -> TyIdx {
    if depth > MAX_EVAL_DEPTH {
        tracing::warn!(lambda = l.raw(), "reduction depth budget exceeded");
        return TyIdx::NEVER;
    }
    let lam = ctx.lambdas.get(l);
    let cast = cast_args(ctx, l, raw);
    eval_rule(ctx, &lam.body, raw, &cast, depth)
}

/// Evaluate a type used as a callee, unchecked. Anything that is not a
/// concrete entity reduces to `never`.
pub(crate) fn eval_callee(ctx: &TypeCtx, fty: TyIdx, args: &[TyIdx], depth: usize) -> TyIdx {
    match ctx.pool.lookup(fty) {
        TyData::Lambda(l) => eval_lambda(ctx, l, args, depth),
        _ => TyIdx::NEVER,
    }
}

fn eval_rule(ctx: &TypeCtx, rule: &Rule, raw: &[TyIdx], cast: &[TyIdx], depth: usize) -> TyIdx {
    if depth > MAX_EVAL_DEPTH {
        return TyIdx::NEVER;
    }
    match rule {
        Rule::Args => ctx.pool.tuple_of(cast),
        Rule::Arg(i) => cast.get(*i as usize).copied().unwrap_or(TyIdx::NEVER),
        Rule::RawArg(i) => raw_arg(raw, *i as usize),
        Rule::Const(ty) => *ty,
        Rule::Tuple(rules) => {
            let elems: Vec<TyIdx> = rules
                .iter()
                .map(|r| eval_rule(ctx, r, raw, cast, depth))
                .collect();
            ctx.pool.tuple_of(&elems)
        }
        Rule::Apply { target, args } => {
            let callee = eval_rule(ctx, target, raw, cast, depth + 1);
            let args: Vec<TyIdx> = args
                .iter()
                .map(|r| eval_rule(ctx, r, raw, cast, depth + 1))
                .collect();
            eval_callee(ctx, callee, &args, depth + 1)
        }
        Rule::ConcatStr(rules) => {
            let mut out = String::new();
            for r in rules.iter() {
                let ty = eval_rule(ctx, r, raw, cast, depth);
                match literal_text(ctx, ty) {
                    Some(text) => out.push_str(&text),
                    None => return TyIdx::NEVER,
                }
            }
            ctx.str_lit(&out)
        }
        Rule::AddNum(rules) => {
            let mut sum: i64 = 0;
            for r in rules.iter() {
                let ty = eval_rule(ctx, r, raw, cast, depth);
                match ctx.pool.lookup(ty) {
                    TyData::NumLit(n) => sum = sum.wrapping_add(n),
                    _ => return TyIdx::NEVER,
                }
            }
            ctx.pool.num_lit(sum)
        }
        Rule::ParseNum(rule) => {
            let ty = eval_rule(ctx, rule, raw, cast, depth);
            match ctx.pool.lookup(ty) {
                TyData::StrLit(name) => match ctx.strings.lookup(name).parse::<i64>() {
                    Ok(n) => ctx.pool.num_lit(n),
                    Err(_) => TyIdx::NEVER,
                },
                _ => TyIdx::NEVER,
            }
        }
        Rule::Map { f, over } => {
            let callee = eval_rule(ctx, f, raw, cast, depth);
            let over = eval_rule(ctx, over, raw, cast, depth);
            match ctx.pool.lookup(over) {
                TyData::Tuple(slots) => {
                    let elems: Vec<TyIdx> = slots
                        .iter()
                        .map(|slot| eval_callee(ctx, callee, &[slot.ty], depth + 1))
                        .collect();
                    ctx.pool.tuple_of(&elems)
                }
                TyData::List(elem) => {
                    let mapped = eval_callee(ctx, callee, &[elem], depth + 1);
                    ctx.pool.list(mapped)
                }
                _ => TyIdx::NEVER,
            }
        }
        Rule::Fold { f, init, over } => {
            let callee = eval_rule(ctx, f, raw, cast, depth);
            let mut acc = eval_rule(ctx, init, raw, cast, depth);
            let over = eval_rule(ctx, over, raw, cast, depth);
            match ctx.pool.lookup(over) {
                TyData::Tuple(slots) => {
                    for slot in slots.iter() {
                        acc = eval_callee(ctx, callee, &[acc, slot.ty], depth + 1);
                    }
                    acc
                }
                _ => TyIdx::NEVER,
            }
        }
        Rule::Derived(derived) => eval_derived(ctx, derived, raw, cast, depth),
    }
}

fn eval_derived(
    ctx: &TypeCtx,
    derived: &DerivedRule,
    raw: &[TyIdx],
    cast: &[TyIdx],
    depth: usize,
) -> TyIdx {
    match derived {
        DerivedRule::Compose { g, f } => {
            let mid = eval_lambda(ctx, *f, &[raw_arg(raw, 0)], depth + 1);
            eval_lambda(ctx, *g, &[mid], depth + 1)
        }
        DerivedRule::CurryStep { base, taken } => {
            let mut taken2: Vec<TyIdx> = taken.to_vec();
            taken2.push(raw_arg(raw, 0));
            if taken2.len() >= params_len(ctx, *base) {
                eval_lambda(ctx, *base, &taken2, depth + 1)
            } else {
                ctx.pool.lambda(curry_step(ctx, *base, &taken2))
            }
        }
        DerivedRule::FlipArgs { base } => {
            eval_lambda(ctx, *base, &[raw_arg(raw, 1), raw_arg(raw, 0)], depth + 1)
        }
        DerivedRule::FlipCurried { base } => {
            let second = raw_arg(raw, 0);
            ctx.pool.lambda(flip_curried_step(ctx, *base, second))
        }
        DerivedRule::FlipCurriedStep { base, second } => {
            let inner = eval_lambda(ctx, *base, &[raw_arg(raw, 0)], depth + 1);
            eval_callee(ctx, inner, &[*second], depth + 1)
        }
        DerivedRule::Tupled { base } => {
            let packed = cast.first().copied().unwrap_or(TyIdx::NEVER);
            match ctx.pool.lookup(packed) {
                TyData::Tuple(slots) => {
                    let args: Vec<TyIdx> = slots.iter().map(|slot| slot.ty).collect();
                    eval_lambda(ctx, *base, &args, depth + 1)
                }
                _ => TyIdx::NEVER,
            }
        }
        DerivedRule::Untupled { base } => {
            let packed = ctx.pool.tuple_of(cast);
            eval_lambda(ctx, *base, &[packed], depth + 1)
        }
        DerivedRule::Partial { base, provided } => {
            let arity = params_len(ctx, *base);
            let mut rest = raw.iter().copied();
            let mut full: Vec<TyIdx> = Vec::with_capacity(arity);
            for i in 0..arity {
                #[expect(
                    clippy::cast_possible_truncation,
                    reason = "provided indices are validated against declared arity (u8 range)"
                )]
                let key = i as u8;
                if let Some(&(_, ty)) = provided.iter().find(|(j, _)| *j == key) {
                    full.push(ty);
                } else if let Some(next) = rest.next() {
                    full.push(next);
                } else {
                    break;
                }
            }
            eval_lambda(ctx, *base, &full, depth + 1)
        }
    }
}

/// Literal text for string interpolation; non-literals have none.
fn literal_text(ctx: &TypeCtx, ty: TyIdx) -> Option<String> {
    match ctx.pool.lookup(ty) {
        TyData::StrLit(name) => Some(ctx.strings.lookup(name).to_owned()),
        TyData::NumLit(n) => Some(n.to_string()),
        TyData::BoolLit(b) => Some(if b { "true" } else { "false" }.to_owned()),
        _ => None,
    }
}

//! Body rules: the computation an entity performs on its bound arguments.
//!
//! A `Rule` is evaluated by the interpreter in `tylam_eval` each time an
//! entity is invoked, with access to that invocation's bound arguments.
//!
//! # Invariant
//!
//! Arguments are reachable only through the accessor variants (`Args`,
//! `Arg`, `RawArg`). There is no other channel into argument positions, so
//! a rule is well-formed by construction.

use crate::{LambdaIdx, TyIdx};

/// The body rule of a type-level function.
///
/// Rules reduce to a type. Any sub-rule reducing to an unusable type
/// reduces the surrounding computation to `never`, which is contagious.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum Rule {
    /// The full cast argument tuple, as a tuple type.
    Args,
    /// One cast argument by position; out of range is `never`.
    Arg(u8),
    /// One raw (uncast) argument by position; out of range is `never`.
    RawArg(u8),
    /// A constant type.
    Const(TyIdx),
    /// A tuple built from sub-rules.
    Tuple(Box<[Rule]>),
    /// Apply the entity produced by `target` to `args` (unchecked).
    Apply {
        target: Box<Rule>,
        args: Box<[Rule]>,
    },
    /// Concatenate string/number/bool literals into a string literal.
    ConcatStr(Box<[Rule]>),
    /// Sum numeric literals into a numeric literal.
    AddNum(Box<[Rule]>),
    /// Parse a string literal into a numeric literal.
    ParseNum(Box<Rule>),
    /// Apply the unary entity produced by `f` to each element of a tuple
    /// (or to the element type of a list).
    Map { f: Box<Rule>, over: Box<Rule> },
    /// Fold the binary entity produced by `f` over a tuple, starting from
    /// `init`.
    Fold {
        f: Box<Rule>,
        init: Box<Rule>,
        over: Box<Rule>,
    },
    /// Delegate to a derived-entity body (produced by a combinator).
    Derived(DerivedRule),
}

/// Body of an entity produced by a combinator.
///
/// Each variant closes over the base entity by reference; the interpreter
/// dispatches on the tag.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum DerivedRule {
    /// `g(f(arg0))`.
    Compose { g: LambdaIdx, f: LambdaIdx },
    /// One step of a curried chain: collect one more argument, then either
    /// delegate to the base entity or produce the next step.
    CurryStep {
        base: LambdaIdx,
        taken: Box<[TyIdx]>,
    },
    /// `base(arg1, arg0)` over raw arguments.
    FlipArgs { base: LambdaIdx },
    /// Outer step of a flipped curried chain: takes the *inner* argument
    /// first.
    FlipCurried { base: LambdaIdx },
    /// Inner step of a flipped curried chain: takes the original outer
    /// argument, then invokes `base(arg0)(second)`.
    FlipCurriedStep { base: LambdaIdx, second: TyIdx },
    /// Spread a single tuple argument into the base entity's arguments.
    Tupled { base: LambdaIdx },
    /// Pack all arguments into one tuple and pass it to the base entity.
    Untupled { base: LambdaIdx },
    /// Interleave the remaining arguments into the provided positions (in
    /// original order), then delegate to the base entity.
    Partial {
        base: LambdaIdx,
        provided: Box<[(u8, TyIdx)]>,
    },
}

impl Rule {
    /// Shorthand for a constant rule.
    #[inline]
    pub fn konst(ty: TyIdx) -> Self {
        Rule::Const(ty)
    }

    /// Shorthand for a boxed sub-rule.
    #[inline]
    pub fn boxed(self) -> Box<Rule> {
        Box::new(self)
    }
}

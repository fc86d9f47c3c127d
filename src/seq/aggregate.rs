//! Sum, All and Any.
//!
//! `All` and `Any` are defined by comparing a boolean sequence with its image
//! under a constant function: a sequence is all-true iff it equals its
//! `AlwaysTrue` image, and any-true iff it differs from its `AlwaysFalse`
//! image. Both hold trivially for the empty sequence (`All([]) = True`,
//! `Any([]) = False`).

use crate::kind::{BoolKind, IntKind, IntValue};
use crate::primitives::{Bool, BoolNot};
use super::fold::{Fold, Plus};
use super::list::{ElemsEq, Sequence};
use super::transform::{AlwaysFalse, AlwaysTrue, MapElems};

/// Integer zero, the seed of [`Sum`].
pub type Zero = macros::int!(0);

/// Wrapping sum of an integer sequence.
#[diagnostic::on_unimplemented(
    message = "`{Self}` cannot be summed",
    label = "expected a sequence of integers"
)]
pub trait Sum {
    type Out: IntValue;
    const VALUE: i64 = <Self::Out as IntValue>::VALUE;
}

impl<S> Sum for S
where
    S: Sequence<Kind = IntKind> + Fold<Zero, Plus>,
    <S as Fold<Zero, Plus>>::Out: IntValue,
{
    type Out = <S as Fold<Zero, Plus>>::Out;
}

/// Every element is `True`.
#[diagnostic::on_unimplemented(
    message = "`All` is undefined for `{Self}`",
    label = "expected a sequence of booleans"
)]
pub trait All {
    type Out: Bool;
    const VALUE: bool = <Self::Out as Bool>::VALUE;
}

impl<S> All for S
where
    S: Sequence<Kind = BoolKind>,
    S::Elems: MapElems<AlwaysTrue>,
    S::Elems: ElemsEq<BoolKind, <S::Elems as MapElems<AlwaysTrue>>::Out>,
{
    type Out = <S::Elems as ElemsEq<BoolKind, <S::Elems as MapElems<AlwaysTrue>>::Out>>::Out;
}

/// At least one element is `True`.
#[diagnostic::on_unimplemented(
    message = "`Any` is undefined for `{Self}`",
    label = "expected a sequence of booleans"
)]
pub trait Any {
    type Out: Bool;
    const VALUE: bool = <Self::Out as Bool>::VALUE;
}

impl<S> Any for S
where
    S: Sequence<Kind = BoolKind>,
    S::Elems: MapElems<AlwaysFalse>,
    S::Elems: ElemsEq<BoolKind, <S::Elems as MapElems<AlwaysFalse>>::Out>,
    <S::Elems as ElemsEq<BoolKind, <S::Elems as MapElems<AlwaysFalse>>::Out>>::Out: BoolNot,
{
    type Out = <<S::Elems as ElemsEq<BoolKind, <S::Elems as MapElems<AlwaysFalse>>::Out>>::Out as BoolNot>::Out;
}

/// Sum of an integer sequence.
pub type SumOf<L> = <L as Sum>::Out;

/// Conjunction of a boolean sequence.
pub type AllOf<L> = <L as All>::Out;

/// Disjunction of a boolean sequence.
pub type AnyOf<L> = <L as Any>::Out;

//! Element-wise transformation with first-error propagation.
//!
//! A function construct declares its target kind through [`Mapping`] and
//! its per-element behavior through [`Apply<X>`]. [`Transform<F>`] maps every
//! element, keeping all computed values, and reports the error of the
//! earliest failing element.
//!
//! ```text
//! Transform<F> on List<K, [e1, e2, e3]>
//!   Out   = List<F::To, [F(e1), F(e2), F(e3)]>
//!   Error = first of [err(e1), err(e2), err(e3)] that is not NoError
//! ```

use core::marker::PhantomData;

use crate::kind::{BoolKind, Kind, KindEq, Of};
use crate::primitives::{BoolNot, False, True};
use super::error::{ErrorSlot, NoError, PickError};
use super::list::{HCons, HNil, List};

/// A function construct: maps values into kind `To`.
pub trait Mapping: 'static {
    type To: Kind;
}

/// The function applied to one element `X`.
#[diagnostic::on_unimplemented(
    message = "`{Self}` cannot be applied to `{X}`",
    label = "no `Apply<{X}>` implementation",
    note = "check that the sequence's kind matches what the function accepts"
)]
pub trait Apply<X>: Mapping {
    type Value: Of<Self::To>;
    type Error: ErrorSlot;
}

/// Map an element list, collecting values and the earliest error.
pub trait MapElems<F: Mapping> {
    type Out;
    type Error: ErrorSlot;
}

impl<F: Mapping> MapElems<F> for HNil {
    type Out = HNil;
    type Error = NoError;
}

impl<F, H, T> MapElems<F> for HCons<H, T>
where
    F: Apply<H>,
    T: MapElems<F>,
    <F::Error as ErrorSlot>::IsError: PickError<F::Error, T::Error>,
{
    type Out = HCons<F::Value, T::Out>;
    type Error = <<F::Error as ErrorSlot>::IsError as PickError<F::Error, T::Error>>::Out;
}

/// Apply `F` to every element.
#[diagnostic::on_unimplemented(
    message = "cannot transform `{Self}` with `{F}`",
    label = "`{F}` does not accept every element of this sequence"
)]
pub trait Transform<F: Mapping> {
    type Out;
    type Error: ErrorSlot;
}

impl<K: Kind, E, F: Mapping> Transform<F> for List<K, E>
where
    E: MapElems<F>,
{
    type Out = List<F::To, <E as MapElems<F>>::Out>;
    type Error = <E as MapElems<F>>::Error;
}

// =============================================================================
// Built-in function constructs
// =============================================================================

/// Maps every value of any kind to `True`.
#[derive(Debug, Default, Clone, Copy)]
pub struct AlwaysTrue;

impl Mapping for AlwaysTrue {
    type To = BoolKind;
}

impl<X> Apply<X> for AlwaysTrue {
    type Value = True;
    type Error = NoError;
}

/// Maps every value of any kind to `False`.
#[derive(Debug, Default, Clone, Copy)]
pub struct AlwaysFalse;

impl Mapping for AlwaysFalse {
    type To = BoolKind;
}

impl<X> Apply<X> for AlwaysFalse {
    type Value = False;
    type Error = NoError;
}

/// Boolean negation.
#[derive(Debug, Default, Clone, Copy)]
pub struct Negate;

impl Mapping for Negate {
    type To = BoolKind;
}

impl<X: BoolNot> Apply<X> for Negate {
    type Value = X::Out;
    type Error = NoError;
}

/// Ignores the element and yields `V` of kind `K`.
pub struct Constant<K, V>(PhantomData<(K, V)>);

impl<K: Kind, V: Of<K>> Mapping for Constant<K, V> {
    type To = K;
}

impl<K: Kind, V: Of<K>, X> Apply<X> for Constant<K, V> {
    type Value = V;
    type Error = NoError;
}

/// `x == Y` under the equality of kind `K`.
pub struct EqualTo<K, Y>(PhantomData<(K, Y)>);

impl<K: Kind, Y: 'static> Mapping for EqualTo<K, Y> {
    type To = BoolKind;
}

impl<K, Y: 'static, X> Apply<X> for EqualTo<K, Y>
where
    K: KindEq<X, Y>,
{
    type Value = <K as KindEq<X, Y>>::Out;
    type Error = NoError;
}

/// Output list of a transform.
pub type Mapped<L, F> = <L as Transform<F>>::Out;

/// Error slot of a transform.
pub type MapError<L, F> = <L as Transform<F>>::Error;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::kind::{IntKind, IsNegative, TypeKind};
    use crate::seq::error::{Fail, FailIf};
    use crate::seq::list::{Equals, Sequence};
    use macros::{int, ints};

    type Bools<E> = List<BoolKind, E>;

    /// Fails on negative integers, passes the value through.
    struct CheckNonNegative;

    impl Mapping for CheckNonNegative {
        type To = IntKind;
    }

    impl<X> Apply<X> for CheckNonNegative
    where
        X: IsNegative + Of<IntKind>,
        <X as IsNegative>::Out: FailIf<X>,
    {
        type Value = X;
        type Error = <<X as IsNegative>::Out as FailIf<X>>::Out;
    }

    /// Reports the element itself as the error for every element.
    struct FailAll;

    impl Mapping for FailAll {
        type To = IntKind;
    }

    impl<X: Of<IntKind>> Apply<X> for FailAll {
        type Value = X;
        type Error = Fail<X>;
    }

    #[test]
    fn test_empty_transform() {
        type T = List<IntKind>;
        assert_eq!(<Mapped<T, AlwaysTrue> as Sequence>::LEN, 0);
        assert!(!<MapError<T, FailAll> as ErrorSlot>::IS_ERROR);
    }

    #[test]
    fn test_values_and_kind_change() {
        type Out = Mapped<ints![1, 2, 3], AlwaysTrue>;
        assert!(<Out as Equals<Bools<crate::hlist![True, True, True]>>>::VALUE);
        type Out2 = Mapped<Bools<crate::hlist![True, False]>, Negate>;
        assert!(<Out2 as Equals<Bools<crate::hlist![False, True]>>>::VALUE);
    }

    #[test]
    fn test_constant_and_equal_to() {
        type Out = Mapped<ints![7, 8], Constant<TypeKind, u8>>;
        assert!(<Out as Equals<List<TypeKind, crate::hlist![u8, u8]>>>::VALUE);
        type Hits = Mapped<ints![1, 2, 1], EqualTo<IntKind, int!(1)>>;
        assert!(<Hits as Equals<Bools<crate::hlist![True, False, True]>>>::VALUE);
    }

    #[test]
    fn test_earliest_error_wins() {
        crate::assert_type_eq!(MapError<ints![4, 5], FailAll>, Fail<int!(4)>);
        crate::assert_type_eq!(MapError<ints![1, 2, -1, 3, -2], CheckNonNegative>, Fail<int!(-1)>);
        assert!(!<MapError<ints![1, 2, 3], CheckNonNegative> as ErrorSlot>::IS_ERROR);
    }

    #[test]
    fn test_all_values_computed_despite_error() {
        type Out = Mapped<ints![1, -1, 2], CheckNonNegative>;
        assert!(<Out as Equals<ints![1, -1, 2]>>::VALUE);
        assert_eq!(<Out as Sequence>::LEN, 3);
    }
}

//! Kind-tagged sequences.
//!
//! A `List<K, E>` stores its elements in the cons list `E`
//! (`HCons<A, HCons<B, HNil>>`); every element must be a value of kind `K`.

use core::marker::PhantomData;

use crate::kind::{Kind, KindEq, Of, TypeValue, IdCons, IdNil, Applied, Named};
use crate::primitives::{Bool, True, False};

// =============================================================================
// Cons list
// =============================================================================

/// Empty element list.
#[derive(Debug, Default, Clone, Copy)]
pub struct HNil;

/// Element list cell.
pub struct HCons<H, T>(PhantomData<(H, T)>);

/// An element list whose every element is of kind `K`.
#[diagnostic::on_unimplemented(
    message = "`{Self}` contains an element that is not of kind `{K}`",
    note = "all elements of a sequence must share its kind"
)]
pub trait Elements<K: Kind>: 'static {
    const LEN: usize;
}

impl<K: Kind> Elements<K> for HNil {
    const LEN: usize = 0;
}

impl<K: Kind, H: Of<K>, T: Elements<K>> Elements<K> for HCons<H, T> {
    const LEN: usize = 1 + T::LEN;
}

/// Append one element at the end.
pub trait Append<X> {
    type Out;
}

impl<X> Append<X> for HNil {
    type Out = HCons<X, HNil>;
}

impl<H, T: Append<X>, X> Append<X> for HCons<H, T> {
    type Out = HCons<H, T::Out>;
}

/// Join two element lists.
pub trait HConcat<Rhs> {
    type Out;
}

impl<Rhs> HConcat<Rhs> for HNil {
    type Out = Rhs;
}

impl<H, T: HConcat<Rhs>, Rhs> HConcat<Rhs> for HCons<H, T> {
    type Out = HCons<H, T::Out>;
}

/// Element-wise equality under kind `K`. Lists of different length are unequal.
pub trait ElemsEq<K: Kind, Rhs> {
    type Out: Bool;
}

impl<K: Kind> ElemsEq<K, HNil> for HNil {
    type Out = True;
}

impl<K: Kind, H, T> ElemsEq<K, HCons<H, T>> for HNil {
    type Out = False;
}

impl<K: Kind, H, T> ElemsEq<K, HNil> for HCons<H, T> {
    type Out = False;
}

impl<K, A, TA, B, TB> ElemsEq<K, HCons<B, TB>> for HCons<A, TA>
where
    K: KindEq<A, B>,
    TA: ElemsEq<K, TB>,
{
    type Out = <<K as KindEq<A, B>>::Out as Bool>::And<<TA as ElemsEq<K, TB>>::Out>;
}

/// Identity list of the elements, used for the type-value identity of
/// sequences themselves.
pub trait ElemIds {
    type Out;
}

impl ElemIds for HNil {
    type Out = IdNil;
}

impl<H: TypeValue, T: ElemIds> ElemIds for HCons<H, T> {
    type Out = IdCons<H::Id, T::Out>;
}

// =============================================================================
// Sequence
// =============================================================================

/// Common view of lists and sets.
#[diagnostic::on_unimplemented(
    message = "`{Self}` is not a sequence",
    label = "expected a `List<K, ..>` or `Set<K, ..>`"
)]
pub trait Sequence: 'static {
    type Kind: Kind;
    type Elems: Elements<Self::Kind>;

    /// Arity (for sets: cardinality).
    const LEN: usize;
}

/// An ordered sequence of values of kind `K`.
///
/// Build one with `bools![..]`, `ints![..]`, `types![..]` or spell the
/// element list directly: `List<BoolKind, hlist![True, False]>`.
pub struct List<K, E = HNil>(PhantomData<(K, E)>);

impl<K, E> Default for List<K, E> {
    fn default() -> Self {
        List(PhantomData)
    }
}

impl<K, E> Clone for List<K, E> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<K, E> Copy for List<K, E> {}

impl<K: Kind, E: Elements<K>> Sequence for List<K, E> {
    type Kind = K;
    type Elems = E;
    const LEN: usize = E::LEN;
}

impl<K: Kind, E: ElemIds + 'static> TypeValue for List<K, E> {
    type Id = Applied<Named<macros::make_routing_stream!("tola_kinds::List")>, IdCons<K::Id, E::Out>>;
}

/// Structural list equality: same kind, same arity, equal elements in order.
pub trait Equals<Rhs> {
    type Out: Bool;
    const VALUE: bool = <Self::Out as Bool>::VALUE;
}

impl<K: Kind, A, B> Equals<List<K, B>> for List<K, A>
where
    A: ElemsEq<K, B>,
{
    type Out = <A as ElemsEq<K, B>>::Out;
}

/// Build an element list: `hlist![A, B, C]`.
#[macro_export]
macro_rules! hlist {
    () => { $crate::seq::HNil };
    ($head:ty $(, $tail:ty)*) => {
        $crate::seq::HCons<$head, $crate::hlist![$($tail),*]>
    };
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::kind::{BoolKind, IntKind, TypeKind};
    use macros::int;

    #[test]
    fn test_len() {
        assert_eq!(<List<BoolKind> as Sequence>::LEN, 0);
        assert_eq!(<List<BoolKind, hlist![True, False, True]> as Sequence>::LEN, 3);
        assert_eq!(<List<TypeKind, hlist![u8, u16]> as Sequence>::LEN, 2);
    }

    #[test]
    fn test_append() {
        type L = <hlist![int!(1)] as Append<int!(2)>>::Out;
        assert!(<List<IntKind, L> as Equals<List<IntKind, hlist![int!(1), int!(2)]>>>::VALUE);
    }

    #[test]
    fn test_equals_is_order_and_arity_sensitive() {
        type A = List<IntKind, hlist![int!(1), int!(2)]>;
        type B = List<IntKind, hlist![int!(2), int!(1)]>;
        type C = List<IntKind, hlist![int!(1), int!(2), int!(2)]>;
        assert!(<A as Equals<A>>::VALUE);
        assert!(!<A as Equals<B>>::VALUE);
        assert!(!<A as Equals<C>>::VALUE);
    }

    #[test]
    fn test_lists_are_type_values() {
        type A = List<BoolKind, hlist![True]>;
        type B = List<BoolKind, hlist![False]>;
        type C = List<TypeKind, hlist![True]>;
        assert!(<<TypeKind as KindEq<A, A>>::Out as Bool>::VALUE);
        assert!(!<<TypeKind as KindEq<A, B>>::Out as Bool>::VALUE);
        assert!(!<<TypeKind as KindEq<A, C>>::Out as Bool>::VALUE);
    }
}

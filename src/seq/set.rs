//! Kind-tagged sets.
//!
//! A set is built by folding [`AddIfAbsent`] over a sequence, starting from
//! the empty set. Membership is tested with [`Contains`]; two sets are equal
//! when each contains every element of the other, regardless of order.

use core::marker::PhantomData;

use crate::kind::{Applied, BoolKind, IdCons, Kind, Named, TypeValue};
use crate::primitives::Bool;
use super::aggregate::{All, Any};
use super::error::NoError;
use super::fold::{Combine, Fold};
use super::list::{Append, ElemIds, Elements, HNil, List, Sequence};
use super::transform::{Apply, EqualTo, MapElems, Mapping, Transform};

/// An unordered collection of distinct values of kind `K`.
///
/// Do not spell `Set<K, E>` with duplicate elements by hand; build sets with
/// [`ToSet`] (or the `SetOf` alias) so that elements stay distinct.
pub struct Set<K, E = HNil>(PhantomData<(K, E)>);

impl<K, E> Default for Set<K, E> {
    fn default() -> Self {
        Set(PhantomData)
    }
}

impl<K, E> Clone for Set<K, E> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<K, E> Copy for Set<K, E> {}

impl<K: Kind, E: Elements<K>> Sequence for Set<K, E> {
    type Kind = K;
    type Elems = E;
    const LEN: usize = E::LEN;
}

impl<K: Kind, E: ElemIds + 'static> TypeValue for Set<K, E> {
    type Id = Applied<Named<macros::make_routing_stream!("tola_kinds::Set")>, IdCons<K::Id, E::Out>>;
}

// =============================================================================
// Membership
// =============================================================================

/// `X` is an element of `Self` (works on lists and sets).
///
/// The per-element equality flags are compared against the all-false
/// sequence of the same arity; membership holds iff they differ.
#[diagnostic::on_unimplemented(
    message = "cannot test whether `{X}` is in `{Self}`",
    label = "`{X}` must be of this sequence's kind"
)]
pub trait Contains<X> {
    type Out: Bool;
    const VALUE: bool = <Self::Out as Bool>::VALUE;
}

impl<S, X> Contains<X> for S
where
    S: Sequence,
    X: 'static,
    S::Elems: MapElems<EqualTo<S::Kind, X>>,
    List<BoolKind, <S::Elems as MapElems<EqualTo<S::Kind, X>>>::Out>: Any,
{
    type Out = <List<BoolKind, <S::Elems as MapElems<EqualTo<S::Kind, X>>>::Out> as Any>::Out;
}

/// `x ∈ S` as a function construct.
pub struct MemberOf<S>(PhantomData<S>);

impl<S: Sequence> Mapping for MemberOf<S> {
    type To = BoolKind;
}

impl<S, X> Apply<X> for MemberOf<S>
where
    S: Sequence + Contains<X>,
{
    type Value = <S as Contains<X>>::Out;
    type Error = NoError;
}

// =============================================================================
// Construction
// =============================================================================

/// Fold step: keep the set if `X` is already present, otherwise append `X`.
#[derive(Debug, Default, Clone, Copy)]
pub struct AddIfAbsent;

impl<K, E, X> Combine<Set<K, E>, X> for AddIfAbsent
where
    K: Kind,
    Set<K, E>: Contains<X>,
    E: Append<X>,
{
    type Out = <<Set<K, E> as Contains<X>>::Out as Bool>::If<Set<K, E>, Set<K, <E as Append<X>>::Out>>;
}

/// Deduplicate a sequence into a set. On a set this is the identity.
pub trait ToSet {
    type Out;
}

impl<S> ToSet for S
where
    S: Sequence + Fold<Set<<S as Sequence>::Kind, HNil>, AddIfAbsent>,
{
    type Out = <S as Fold<Set<<S as Sequence>::Kind, HNil>, AddIfAbsent>>::Out;
}

/// Mapping a set yields a set: the mapped values are deduplicated again.
impl<K: Kind, E, F: Mapping> Transform<F> for Set<K, E>
where
    E: MapElems<F>,
    List<F::To, <E as MapElems<F>>::Out>: ToSet,
{
    type Out = <List<F::To, <E as MapElems<F>>::Out> as ToSet>::Out;
    type Error = <E as MapElems<F>>::Error;
}

// =============================================================================
// Equality
// =============================================================================

/// Order-independent equality: every element of each side is in the other.
#[diagnostic::on_unimplemented(
    message = "cannot compare `{Self}` with `{Rhs}` as sets",
    label = "both sides must be sequences of the same kind"
)]
pub trait SetEquals<Rhs> {
    type Out: Bool;
    const VALUE: bool = <Self::Out as Bool>::VALUE;
}

impl<A, B> SetEquals<B> for A
where
    A: Sequence,
    B: Sequence<Kind = A::Kind>,
    A::Elems: MapElems<MemberOf<B>>,
    B::Elems: MapElems<MemberOf<A>>,
    List<BoolKind, <A::Elems as MapElems<MemberOf<B>>>::Out>: All,
    List<BoolKind, <B::Elems as MapElems<MemberOf<A>>>::Out>: All,
{
    type Out = <<List<BoolKind, <A::Elems as MapElems<MemberOf<B>>>::Out> as All>::Out as Bool>::And<
        <List<BoolKind, <B::Elems as MapElems<MemberOf<A>>>::Out> as All>::Out,
    >;
}

/// Set built from a sequence.
pub type SetOf<L> = <L as ToSet>::Out;

/// Set with one more element.
pub type Insert<S, X> = <AddIfAbsent as Combine<S, X>>::Out;

/// Membership flag.
pub type IsIn<S, X> = <S as Contains<X>>::Out;

/// Set equality flag.
pub type SetEq<A, B> = <A as SetEquals<B>>::Out;

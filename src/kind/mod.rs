//! # Layer 1: Kinds and values
//!
//! Every sequence is tagged with one of three kinds:
//!
//! | Kind | Values | Equality |
//! |------|--------|----------|
//! | [`BoolKind`] | `True`, `False` | [`BoolEq`] |
//! | [`IntKind`] | [`Int<D>`](int::Int) | digit-wise [`DigitsEq`](int::DigitsEq) |
//! | [`TypeKind`] | any [`TypeValue`] | structural [`IdEq`] |
//!
//! Membership is expressed by [`Of<K>`] and equality by [`KindEq<A, B>`],
//! which is implemented on the kind marker so that each kind can use its own
//! notion of equality without overlapping impls.

pub mod identity;
pub mod int;

use crate::primitives::{Bool, BoolEq};

pub use identity::{Applied, IdCons, IdEq, IdNil, Named, TypeValue};
pub use int::{Digits, Int, IntAdd, IntNeg, IntSub, IntValue, IsNegative};

use int::DigitsEq;

// =============================================================================
// Kind
// =============================================================================

/// A kind tag: the element type family of a sequence.
pub trait Kind: 'static {
    /// Human readable name, used in reflection output.
    const NAME: &'static str;

    /// Identity of the kind itself, part of the identity of every
    /// `List<K, _>` / `Set<K, _>`.
    type Id;
}

/// Kind of boolean values.
#[derive(Debug, Default, Clone, Copy)]
pub struct BoolKind;

/// Kind of 64-bit signed integer values.
#[derive(Debug, Default, Clone, Copy)]
pub struct IntKind;

/// Kind of arbitrary type values.
#[derive(Debug, Default, Clone, Copy)]
pub struct TypeKind;

impl Kind for BoolKind {
    const NAME: &'static str = "bool";
    type Id = Named<macros::make_routing_stream!("tola_kinds::kind::BoolKind")>;
}

impl Kind for IntKind {
    const NAME: &'static str = "int64";
    type Id = Named<macros::make_routing_stream!("tola_kinds::kind::IntKind")>;
}

impl Kind for TypeKind {
    const NAME: &'static str = "type";
    type Id = Named<macros::make_routing_stream!("tola_kinds::kind::TypeKind")>;
}

// =============================================================================
// Membership
// =============================================================================

/// `Self` is a value of kind `K`.
#[diagnostic::on_unimplemented(
    message = "`{Self}` is not a value of kind `{K}`",
    label = "expected a value of kind `{K}`",
    note = "bool values are `True`/`False`, int values come from `int!(..)`, type values implement `TypeValue`"
)]
pub trait Of<K: Kind>: 'static {}

impl<B: Bool> Of<BoolKind> for B {}

impl<D: Digits> Of<IntKind> for Int<D> {}

impl<T: TypeValue> Of<TypeKind> for T {}

// =============================================================================
// Equality
// =============================================================================

/// Equality of two values of this kind.
///
/// Implemented on the kind marker: `<BoolKind as KindEq<True, False>>::Out`.
pub trait KindEq<A, B>: Kind {
    type Out: Bool;
}

impl<A, B> KindEq<A, B> for BoolKind
where
    A: BoolEq<B>,
    B: Bool,
{
    type Out = <A as BoolEq<B>>::Out;
}

impl<A, B> KindEq<Int<A>, Int<B>> for IntKind
where
    A: DigitsEq<B>,
    B: Digits,
{
    type Out = <A as DigitsEq<B>>::Out;
}

impl<A, B> KindEq<A, B> for TypeKind
where
    A: TypeValue,
    B: TypeValue,
    A::Id: IdEq<B::Id>,
{
    type Out = <A::Id as IdEq<B::Id>>::Out;
}

// The kinds are type values themselves, so `types![BoolKind, IntKind]` works.
impl TypeValue for BoolKind {
    type Id = <BoolKind as Kind>::Id;
}

impl TypeValue for IntKind {
    type Id = <IntKind as Kind>::Id;
}

impl TypeValue for TypeKind {
    type Id = <TypeKind as Kind>::Id;
}

/// Shorthand for `<K as KindEq<A, B>>::Out`.
pub type Same<K, A, B> = <K as KindEq<A, B>>::Out;

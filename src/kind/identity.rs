//! Structural identities for values of the type kind.
//!
//! Rust offers no stable way to compare two arbitrary types for equality
//! during trait resolution, so every type value carries an explicit `Id`:
//!
//! ```text
//! i32            -> Named<hash("i32")>
//! Option<i32>    -> Applied<Named<hash("core::option::Option")>, [Named<hash("i32")>]>
//! int!(7)        -> Applied<Named<hash("tola_kinds::Int")>, [digit ids...]>
//! ```
//!
//! `Named` identities compare their 64-bit FNV-1a hash streams; `Applied`
//! identities compare constructor and arguments structurally.

use core::marker::PhantomData;

use crate::primitives::{Bool, True, False, Nibble, ConstStream, DefaultMaxDepth, HashStream, StreamEq};
use super::int::{DEnd, Dig, Digits, Int};

// =============================================================================
// Identity shapes
// =============================================================================

/// Nominal identity: the hash stream of a fully qualified name.
pub struct Named<S>(PhantomData<S>);

/// Generic constructor `Ctor` applied to the identity list `Args`.
pub struct Applied<Ctor, Args>(PhantomData<(Ctor, Args)>);

/// Empty identity list.
pub struct IdNil;

/// Identity list cell.
pub struct IdCons<H, T>(PhantomData<(H, T)>);

/// A type usable as a value of the type kind.
///
/// Derive it with `#[derive(TypeValue)]`. Nominal identities are 64-bit
/// FNV-1a hashes of the qualified name, so two distinct names whose hashes
/// collide compare equal.
#[diagnostic::on_unimplemented(
    message = "`{Self}` cannot be used as a type value",
    label = "missing `TypeValue` implementation",
    note = "add `#[derive(TypeValue)]` to the type definition"
)]
pub trait TypeValue: 'static {
    type Id;
}

// =============================================================================
// Identity equality
// =============================================================================

/// Type-level equality of two identities.
pub trait IdEq<Other> {
    type Out: Bool;
}

impl<A: HashStream, B: HashStream> IdEq<Named<B>> for Named<A>
where
    A: StreamEq<B, DefaultMaxDepth>,
{
    type Out = <A as StreamEq<B, DefaultMaxDepth>>::Out;
}

impl<S, C, A> IdEq<Applied<C, A>> for Named<S> {
    type Out = False;
}

impl<S, C, A> IdEq<Named<S>> for Applied<C, A> {
    type Out = False;
}

impl<CA, AA, CB, AB> IdEq<Applied<CB, AB>> for Applied<CA, AA>
where
    CA: IdEq<CB>,
    AA: IdEq<AB>,
{
    type Out = <<CA as IdEq<CB>>::Out as Bool>::And<<AA as IdEq<AB>>::Out>;
}

impl IdEq<IdNil> for IdNil {
    type Out = True;
}

impl<H, T> IdEq<IdCons<H, T>> for IdNil {
    type Out = False;
}

impl<H, T> IdEq<IdNil> for IdCons<H, T> {
    type Out = False;
}

impl<HA, TA, HB, TB> IdEq<IdCons<HB, TB>> for IdCons<HA, TA>
where
    HA: IdEq<HB>,
    TA: IdEq<TB>,
{
    type Out = <<HA as IdEq<HB>>::Out as Bool>::And<<TA as IdEq<TB>>::Out>;
}

// =============================================================================
// Identities of the engine's own values
// =============================================================================

impl TypeValue for True {
    type Id = Named<macros::make_routing_stream!("tola_kinds::True")>;
}

impl TypeValue for False {
    type Id = Named<macros::make_routing_stream!("tola_kinds::False")>;
}

/// Identity list of an integer's digits.
pub trait DigitIds: Digits {
    type Out;
}

impl DigitIds for DEnd {
    type Out = IdNil;
}

impl<N: Nibble, R: DigitIds> DigitIds for Dig<N, R> {
    type Out = IdCons<Named<ConstStream<N>>, R::Out>;
}

impl<D: DigitIds> TypeValue for Int<D> {
    type Id = Applied<Named<macros::make_routing_stream!("tola_kinds::Int")>, D::Out>;
}

// =============================================================================
// Identities of std types
// =============================================================================

macro_rules! impl_named_type_value {
    ($($ty:ty),* $(,)?) => {
        $(
            impl TypeValue for $ty {
                type Id = Named<macros::make_routing_stream!(stringify!($ty))>;
            }
        )*
    };
}

impl_named_type_value!(
    bool, char,
    i8, i16, i32, i64, i128, isize,
    u8, u16, u32, u64, u128, usize,
    f32, f64,
    (), str,
);

impl<T: TypeValue + ?Sized> TypeValue for &'static T {
    type Id = Applied<Named<macros::make_routing_stream!("core::primitive::ref")>, IdCons<T::Id, IdNil>>;
}

impl<T: TypeValue + ?Sized> TypeValue for &'static mut T {
    type Id = Applied<Named<macros::make_routing_stream!("core::primitive::ref_mut")>, IdCons<T::Id, IdNil>>;
}

impl<T: TypeValue + ?Sized> TypeValue for *const T {
    type Id = Applied<Named<macros::make_routing_stream!("core::primitive::ptr_const")>, IdCons<T::Id, IdNil>>;
}

impl<T: TypeValue + ?Sized> TypeValue for *mut T {
    type Id = Applied<Named<macros::make_routing_stream!("core::primitive::ptr_mut")>, IdCons<T::Id, IdNil>>;
}

impl<T: TypeValue> TypeValue for [T] {
    type Id = Applied<Named<macros::make_routing_stream!("core::primitive::slice")>, IdCons<T::Id, IdNil>>;
}

// Tuples: one constructor, arity carried by the argument list.
macro_rules! impl_tuple_type_value {
    ($($name:ident),+) => {
        impl<$($name: TypeValue),+> TypeValue for ($($name,)+) {
            type Id = Applied<
                Named<macros::make_routing_stream!("core::primitive::tuple")>,
                crate::__id_list!($($name),+)
            >;
        }
    };
}

macro_rules! for_each_tuple_arity {
    ($mac:ident: $head:ident $(, $tail:ident)*) => {
        $mac!($head $(, $tail)*);
        for_each_tuple_arity!($mac: $($tail),*);
    };
    ($mac:ident:) => {};
}

for_each_tuple_arity!(impl_tuple_type_value: T0, T1, T2, T3, T4, T5, T6, T7, T8, T9, T10, T11);

// Arrays: the length is part of the identity as an integer value.
macro_rules! impl_array_type_value {
    ($($len:literal)*) => {
        $(
            impl<T: TypeValue> TypeValue for [T; $len] {
                type Id = Applied<
                    Named<macros::make_routing_stream!("core::primitive::array")>,
                    IdCons<T::Id, IdCons<<macros::int!($len) as TypeValue>::Id, IdNil>>,
                >;
            }
        )*
    };
}

impl_array_type_value!(
    0 1 2 3 4 5 6 7 8 9 10 11 12 13 14 15 16
    17 18 19 20 21 22 23 24 25 26 27 28 29 30 31 32
);

impl<T: TypeValue> TypeValue for Option<T> {
    type Id = Applied<Named<macros::make_routing_stream!("core::option::Option")>, IdCons<T::Id, IdNil>>;
}

impl<T: TypeValue, E: TypeValue> TypeValue for Result<T, E> {
    type Id = Applied<
        Named<macros::make_routing_stream!("core::result::Result")>,
        IdCons<T::Id, IdCons<E::Id, IdNil>>,
    >;
}

impl<T: TypeValue> TypeValue for PhantomData<T> {
    type Id = Applied<Named<macros::make_routing_stream!("core::marker::PhantomData")>, IdCons<T::Id, IdNil>>;
}

#[cfg(feature = "alloc")]
mod alloc_types {
    use super::*;
    use alloc::{boxed::Box, string::String, vec::Vec};

    impl TypeValue for String {
        type Id = Named<macros::make_routing_stream!("alloc::string::String")>;
    }

    impl<T: TypeValue> TypeValue for Vec<T> {
        type Id = Applied<Named<macros::make_routing_stream!("alloc::vec::Vec")>, IdCons<T::Id, IdNil>>;
    }

    impl<T: TypeValue + ?Sized> TypeValue for Box<T> {
        type Id = Applied<Named<macros::make_routing_stream!("alloc::boxed::Box")>, IdCons<T::Id, IdNil>>;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn same<A: TypeValue, B: TypeValue>() -> bool
    where
        A::Id: IdEq<B::Id>,
    {
        <<A::Id as IdEq<B::Id>>::Out as Bool>::VALUE
    }

    #[test]
    fn test_named() {
        assert!(same::<u8, u8>());
        assert!(!same::<u8, i8>());
        assert!(!same::<(), bool>());
    }

    #[test]
    fn test_applied_structural() {
        assert!(same::<Option<i32>, Option<i32>>());
        assert!(!same::<Option<i32>, Option<u32>>());
        assert!(!same::<Option<i32>, Result<i32, i32>>());
        assert!(!same::<Option<i32>, i32>());
        assert!(!same::<Option<Option<i32>>, Option<i32>>());
    }

    #[test]
    fn test_engine_values() {
        assert!(same::<True, True>());
        assert!(!same::<True, False>());
        assert!(same::<macros::int!(3), macros::int!(3)>());
        assert!(!same::<macros::int!(3), macros::int!(4)>());
        assert!(!same::<macros::int!(3), u64>());
    }

    #[test]
    fn test_tuples() {
        assert!(same::<(u8, bool), (u8, bool)>());
        assert!(!same::<(u8, bool), (bool, u8)>());
        assert!(!same::<(u8,), (u8, u8)>());
        assert!(!same::<(u8,), u8>());
        assert!(!same::<(u8, bool), Result<u8, bool>>());
        assert!(same::<(u8, (i32, char)), (u8, (i32, char))>());
    }

    #[test]
    fn test_references_and_pointers() {
        assert!(same::<&'static u8, &'static u8>());
        assert!(!same::<&'static u8, u8>());
        assert!(!same::<&'static u8, &'static mut u8>());
        assert!(!same::<&'static u8, *const u8>());
        assert!(!same::<*const u8, *mut u8>());
        assert!(same::<&'static str, &'static str>());
        assert!(!same::<&'static str, &'static [u8]>());
        assert!(!same::<&'static [u8], &'static [u16]>());
    }

    #[test]
    fn test_arrays() {
        assert!(same::<[u8; 4], [u8; 4]>());
        assert!(!same::<[u8; 4], [u8; 5]>());
        assert!(!same::<[u8; 4], [i8; 4]>());
        assert!(!same::<[u8; 0], ()>());
    }

    #[cfg(feature = "alloc")]
    #[test]
    fn test_alloc_types() {
        use alloc::{boxed::Box, string::String, vec::Vec};
        assert!(same::<Vec<String>, Vec<String>>());
        assert!(!same::<Vec<String>, Vec<u8>>());
        assert!(!same::<Box<str>, String>());
    }
}

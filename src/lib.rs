#![cfg_attr(not(feature = "std"), no_std)]
#![allow(clippy::crate_in_macro_def)]
#![recursion_limit = "512"]

// Feature flags handled:
// - std: default, enables std library
// - alloc: enables alloc types in no_std

//! # tola-kinds
//!
//! Compile-time computation over kind-tagged sequences.
//!
//! **Type-level lists, sets and folds for Rust.**
//!
//! ## Architecture
//!
//! Every value is a zero-sized type and every operation is a trait with an
//! associated `Out` type, so a whole computation is carried out by the trait
//! solver and nothing is left for runtime.
//!
//! ### 1. Kinds
//! Sequences are homogeneous and tagged with one of three kinds:
//!
//! ```text
//! BoolKind  -> True, False
//! IntKind   -> int!(-3), int!(42), ...   (16 nibbles, two's complement)
//! TypeKind  -> any T: TypeValue          (hash-stream / structural identity)
//! ```
//!
//! ### 2. Errors as data
//! Element functions return a value *and* an error slot (`NoError` or
//! `Fail<E>`). A transform keeps every value and reports the earliest failure.
//!
//! ### 3. Sets
//! A set is a fold of insert-if-absent over a sequence; set equality is
//! mutual membership, so element order does not matter.
//!
//! ```text
//! +-------------------------------------------------------------------+
//! |  Layer 0: Primitives                                              |
//! |  - Bool (True/False), Nibble (X0-XF), HashStream, Peano           |
//! +-------------------------------------------------------------------+
//!                                |
//!                                v
//! +-------------------------------------------------------------------+
//! |  Layer 1: Kinds                                                   |
//! |  - Kind, Of<K>, KindEq, Int<Digits>, TypeValue identities         |
//! +-------------------------------------------------------------------+
//!                                |
//!                                v
//! +-------------------------------------------------------------------+
//! |  Layer 2: Sequences                                               |
//! |  - List, Concat, Transform, Fold, Sum/All/Any, Set                |
//! +-------------------------------------------------------------------+
//!                                |
//!                                v
//! +-------------------------------------------------------------------+
//! |  Layer 3: Surface                                                 |
//! |  - aliases (BoolList, SumOf, ...), literal macros, Inspect        |
//! +-------------------------------------------------------------------+
//! ```
//!
//! ## Quick Start
//!
//! ```
//! use tola_kinds::prelude::*;
//!
//! type Xs = ints![3, 1, 2, 1, 3];
//!
//! assert_eq!(<Xs as Sum>::VALUE, 10);
//!
//! type Unique = SetOf<Xs>;
//! assert_eq!(<Unique as Sequence>::LEN, 3);
//! assert!(<Unique as Contains<int!(2)>>::VALUE);
//! assert!(!<Unique as Contains<int!(5)>>::VALUE);
//!
//! assert!(<AllOf<bools![true, true]> as Bool>::VALUE);
//! ```

// Allow `::tola_kinds` to work inside the crate itself
extern crate self as tola_kinds;

#[cfg(feature = "alloc")]
extern crate alloc;

// Re-export paste for the per-kind alias families
pub use paste;

// =============================================================================
// Layer 0: Primitives (no dependencies)
// =============================================================================
pub mod primitives;

// =============================================================================
// Layer 1: Kinds and values
// =============================================================================
pub mod kind;

// =============================================================================
// Layer 2: Sequences and operations
// =============================================================================
pub mod seq;

// =============================================================================
// Layer 3: Surface
// =============================================================================
pub mod inspect;
pub mod aliases;

// =============================================================================
// Re-exports at Crate Root
// =============================================================================

pub use primitives::bool::{Bool, True, False, BoolAnd, BoolOr, BoolNot, BoolEq, BoolOf};
pub use kind::{BoolKind, IntKind, TypeKind, Kind, Of, KindEq, Int, IntValue, TypeValue};
pub use seq::*;
pub use inspect::{Inspect, Reflected};

// Re-export proc macros
pub use macros::{int, ints, make_routing_stream, TypeValue};

// =============================================================================
// Declarative Macro Bridge (for proc-macro -> module_path!() expansion)
// =============================================================================

// Architecture:
// 1. #[derive(TypeValue)] (proc-macro) generates __impl_type_value! call
// 2. __impl_type_value! (this decl-macro) expands concat!(module_path!(), ...)
// 3. make_routing_stream! (proc-macro) receives the expanded expression

#[macro_export]
#[doc(hidden)]
macro_rules! __impl_type_value {
    ($ty:ident, $name:expr) => {
        impl $crate::kind::TypeValue for $ty {
            type Id = $crate::kind::Named<
                $crate::make_routing_stream!(::core::concat!(::core::module_path!(), "::", $name))
            >;
        }
    };
    ($ty:ty, $name:expr, [$($param:ident),+], [$($bounds:tt)*], [$($preds:tt)*]) => {
        impl<$($bounds)*> $crate::kind::TypeValue for $ty
        where
            $($preds)*
            $($param: $crate::kind::TypeValue,)+
        {
            type Id = $crate::kind::Applied<
                $crate::kind::Named<
                    $crate::make_routing_stream!(::core::concat!(::core::module_path!(), "::", $name))
                >,
                $crate::__id_list!($($param),+)
            >;
        }
    };
}

#[macro_export]
#[doc(hidden)]
macro_rules! __id_list {
    () => { $crate::kind::IdNil };
    ($head:ident $(, $tail:ident)*) => {
        $crate::kind::IdCons<<$head as $crate::kind::TypeValue>::Id, $crate::__id_list!($($tail),*)>
    };
}

// =============================================================================
// Compile-time assertions
// =============================================================================

/// `Self` and `T` are the same type.
#[diagnostic::on_unimplemented(
    message = "type mismatch: `{Self}` is not `{T}`",
    label = "the computed type differs from the expected one"
)]
pub trait SameAs<T: ?Sized> {}

impl<T: ?Sized> SameAs<T> for T {}

/// Fail compilation unless both types are identical.
///
/// ```
/// use tola_kinds::prelude::*;
/// tola_kinds::assert_type_eq!(SumOf<ints![1, 2]>, int!(3));
/// ```
#[macro_export]
macro_rules! assert_type_eq {
    ($a:ty, $b:ty $(,)?) => {
        const _: fn() = || {
            fn same<A: ?Sized + $crate::SameAs<B>, B: ?Sized>() {}
            same::<$a, $b>();
        };
    };
}

/// Fail compilation unless the type-level boolean is `True`.
#[macro_export]
macro_rules! assert_true {
    ($b:ty $(,)?) => {
        const _: () = ::core::assert!(<$b as $crate::Bool>::VALUE);
    };
}

/// Fail compilation unless the type-level boolean is `False`.
#[macro_export]
macro_rules! assert_false {
    ($b:ty $(,)?) => {
        const _: () = ::core::assert!(!<$b as $crate::Bool>::VALUE);
    };
}

// =============================================================================
// Prelude
// =============================================================================

pub mod prelude {
    pub use crate::primitives::bool::{Bool, True, False, BoolOf};
    pub use crate::kind::{BoolKind, IntKind, TypeKind, Kind, KindEq, Of, Int, IntValue, TypeValue};
    pub use crate::seq::{
        List, Set, Sequence, HCons, HNil,
        Concat, Equals, Transform, Mapping, Apply, Fold, Combine,
        Sum, All, Any, ToSet, Contains, SetEquals,
        NoError, Fail, ErrorSlot, FirstError, FailIf, FailUnless,
        AlwaysTrue, AlwaysFalse, Negate, Constant, EqualTo, MemberOf, Plus, AddIfAbsent,
    };
    pub use crate::aliases::*;
    pub use crate::inspect::{Inspect, Reflected};
    pub use macros::{int, ints, TypeValue};
    // Note: hlist!, bools!, types!, concat_lists!, first_error! and the
    // assertion macros are #[macro_export] so they're at crate root
    pub use crate::{hlist, bools, types, concat_lists, first_error};
}

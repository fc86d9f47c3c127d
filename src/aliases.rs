//! Convenience types and macros for sequence construction
//!
//! Named aliases for every operation, so generated code can spell a
//! computation as a type without qualified-path noise:
//!
//! ```
//! use tola_kinds::prelude::*;
//!
//! type Xs = ints![1, 2, 2, 3];
//! type Total = SumOf<Xs>;                 // int!(8)
//! type Unique = SetOf<Xs>;                // {1, 2, 3}
//! type HasTwo = IsIn<Unique, int!(2)>;    // True
//!
//! tola_kinds::assert_type_eq!(Total, int!(8));
//! assert_eq!(<Unique as Sequence>::LEN, 3);
//! assert!(<HasTwo as Bool>::VALUE);
//! ```

use crate::kind::{BoolKind, IntKind, TypeKind};
use crate::seq::{Concat, Equals, FirstError, HNil, List, Set};

pub use crate::seq::{
    AllOf, AnyOf, Folded, Insert, IsIn, MapError, Mapped, SetEq, SetOf, SumOf,
};

// =============================================================================
// Per-kind sequence families
// =============================================================================

macro_rules! kind_families {
    ($($prefix:ident => $kind:ident),* $(,)?) => {
        $crate::paste::paste! {
            $(
                #[doc = "List of `" $kind "` values."]
                pub type [<$prefix List>]<E = HNil> = List<$kind, E>;

                #[doc = "Set of `" $kind "` values."]
                pub type [<$prefix Set>]<E = HNil> = Set<$kind, E>;
            )*
        }
    };
}

kind_families!(
    Bool => BoolKind,
    Int64 => IntKind,
    Type => TypeKind,
);

// =============================================================================
// Operation aliases
// =============================================================================

/// `A ++ B`
pub type Concatenated<A, B> = <A as Concat<B>>::Out;

/// Structural list equality flag.
pub type ListEq<A, B> = <A as Equals<B>>::Out;

/// First error of an element list of error slots.
pub type FirstErrorOf<Slots> = <Slots as FirstError>::Out;

// =============================================================================
// Literal macros
// =============================================================================

// Note: hlist! lives in seq/list.rs, ints! is a proc macro.

/// Boolean list literal: `bools![true, false]`.
#[macro_export]
macro_rules! bools {
    ($($b:literal),* $(,)?) => {
        $crate::seq::List<
            $crate::kind::BoolKind,
            $crate::hlist![$($crate::primitives::BoolOf<$b>),*]
        >
    };
}

/// Type list literal: `types![u8, String, Option<i32>]`.
#[macro_export]
macro_rules! types {
    ($($t:ty),* $(,)?) => {
        $crate::seq::List<$crate::kind::TypeKind, $crate::hlist![$($t),*]>
    };
}

//! # Layer 2: Sequences and their operations
//!
//! - `list.rs`: `List<K, E>`, the `Sequence` trait, element lists.
//! - `concat.rs`: `Concat` of same-kind lists.
//! - `error.rs`: `NoError` / `Fail<E>` slots and `FirstError`.
//! - `transform.rs`: `Transform<F>` with first-error propagation, built-in functions.
//! - `fold.rs`: `Fold<Seed, F>` and the `Plus` combinator.
//! - `aggregate.rs`: `Sum`, `All`, `Any`.
//! - `set.rs`: `Set<K, E>`, `ToSet`, `Contains`, `SetEquals`.

pub mod list;
pub mod concat;
pub mod error;
pub mod transform;
pub mod fold;
pub mod aggregate;
pub mod set;

pub use list::{Append, ElemsEq, Elements, Equals, HConcat, HCons, HNil, List, Sequence};
pub use concat::Concat;
pub use error::{Earliest, ErrorSlot, Fail, FailIf, FailUnless, FirstError, NoError, PickError};
pub use transform::{
    AlwaysFalse, AlwaysTrue, Apply, Constant, EqualTo, MapElems, MapError, Mapped, Mapping, Negate,
    Transform,
};
pub use fold::{Combine, Fold, FoldElems, Folded, Plus};
pub use aggregate::{All, AllOf, Any, AnyOf, Sum, SumOf, Zero};
pub use set::{AddIfAbsent, Contains, Insert, IsIn, MemberOf, Set, SetEq, SetEquals, SetOf, ToSet};

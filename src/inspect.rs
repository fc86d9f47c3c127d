//! Runtime inspection of computed sequences
//!
//! Allows iterating over the elements of a list or set for debugging and tests.

use core::fmt;

use crate::kind::{BoolKind, Digits, Int, IntKind, IntValue, Kind, TypeKind, TypeValue};
use crate::primitives::Bool;
use crate::seq::{HCons, HNil, List, Sequence, Set};

/// A single element, reflected into a runtime value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Reflected {
    Bool(bool),
    Int(i64),
    /// The element type's name, as reported by `core::any::type_name`.
    Type(&'static str),
}

impl fmt::Display for Reflected {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Reflected::Bool(b) => write!(f, "{}", b),
            Reflected::Int(n) => write!(f, "{}", n),
            Reflected::Type(name) => f.write_str(name),
        }
    }
}

/// How a kind turns its value `X` into a [`Reflected`].
pub trait Reflect<X>: Kind {
    fn reflect() -> Reflected;
}

impl<X: Bool> Reflect<X> for BoolKind {
    fn reflect() -> Reflected {
        Reflected::Bool(X::VALUE)
    }
}

impl<D: Digits> Reflect<Int<D>> for IntKind {
    fn reflect() -> Reflected {
        Reflected::Int(<Int<D> as IntValue>::VALUE)
    }
}

impl<X: TypeValue> Reflect<X> for TypeKind {
    fn reflect() -> Reflected {
        Reflected::Type(core::any::type_name::<X>())
    }
}

/// Walk an element list under kind `K`.
pub trait InspectElems<K: Kind> {
    fn each<F: FnMut(Reflected)>(f: &mut F);
}

impl<K: Kind> InspectElems<K> for HNil {
    fn each<F: FnMut(Reflected)>(_f: &mut F) {}
}

impl<K: Kind + Reflect<H>, H, T: InspectElems<K>> InspectElems<K> for HCons<H, T> {
    fn each<F: FnMut(Reflected)>(f: &mut F) {
        f(<K as Reflect<H>>::reflect());
        T::each(f);
    }
}

/// Runtime inspection of sequences.
///
/// Calls `f` for each element in order (for sets: insertion order).
pub trait Inspect: Sequence {
    fn inspect<F: FnMut(Reflected)>(&self, f: F);

    /// Collect the reflected elements.
    #[cfg(feature = "alloc")]
    fn to_vec(&self) -> alloc::vec::Vec<Reflected> {
        let mut out = alloc::vec::Vec::with_capacity(Self::LEN);
        self.inspect(|r| out.push(r));
        out
    }

    /// Render as `[a, b, c]` for lists or `{a, b, c}` for sets.
    #[cfg(feature = "alloc")]
    fn render(&self) -> alloc::string::String;
}

impl<K: Kind, E> Inspect for List<K, E>
where
    List<K, E>: Sequence,
    E: InspectElems<K>,
{
    fn inspect<F: FnMut(Reflected)>(&self, mut f: F) {
        E::each(&mut f);
    }

    #[cfg(feature = "alloc")]
    fn render(&self) -> alloc::string::String {
        render_with(self, '[', ']')
    }
}

impl<K: Kind, E> Inspect for Set<K, E>
where
    Set<K, E>: Sequence,
    E: InspectElems<K>,
{
    fn inspect<F: FnMut(Reflected)>(&self, mut f: F) {
        E::each(&mut f);
    }

    #[cfg(feature = "alloc")]
    fn render(&self) -> alloc::string::String {
        render_with(self, '{', '}')
    }
}

#[cfg(feature = "alloc")]
fn render_with<S: Inspect + ?Sized>(seq: &S, open: char, close: char) -> alloc::string::String {
    use core::fmt::Write;

    let mut out = alloc::string::String::new();
    out.push(open);
    let mut first = true;
    seq.inspect(|r| {
        if !first {
            out.push_str(", ");
        }
        first = false;
        // Writing into a String cannot fail.
        let _ = write!(out, "{}", r);
    });
    out.push(close);
    out
}

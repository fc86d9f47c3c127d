//! Type-level nibble system (4-bit values X0-XF).
//!
//! Nibbles serve two purposes: the digits of type-level integers
//! (see [`crate::kind::int`]) and the symbols of identity hash streams.

use super::bool::{Bool, True, False};

// =============================================================================
// Nibble iteration macros
// =============================================================================

/// Iterate over all 16 (Nibble, value) pairs.
#[macro_export]
macro_rules! for_each_nibble {
    ($mac:ident) => {
        $mac!(X0, 0); $mac!(X1, 1); $mac!(X2, 2); $mac!(X3, 3);
        $mac!(X4, 4); $mac!(X5, 5); $mac!(X6, 6); $mac!(X7, 7);
        $mac!(X8, 8); $mac!(X9, 9); $mac!(XA, 10); $mac!(XB, 11);
        $mac!(XC, 12); $mac!(XD, 13); $mac!(XE, 14); $mac!(XF, 15);
    };
}

/// Generate impls for all distinct pairs (A, B) and (B, A) where A != B.
#[macro_export]
macro_rules! for_distinct_pairs {
    ($mac:ident) => {
        $crate::for_distinct_pairs!(@recurse $mac, [X0, X1, X2, X3, X4, X5, X6, X7, X8, X9, XA, XB, XC, XD, XE, XF]);
    };
    (@recurse $mac:ident, [$head:ident, $($tail:ident),*]) => {
        $(
            $mac!($head, $tail);
            $mac!($tail, $head);
        )*
        $crate::for_distinct_pairs!(@recurse $mac, [$($tail),*]);
    };
    (@recurse $mac:ident, [$last:ident]) => {};
}

// =============================================================================
// Nibble trait and types
// =============================================================================

/// Type-level nibble (4-bit value, 0..15)
pub trait Nibble: 'static {
    const VALUE: u8;
}

// Define structs X0..XF and implement Nibble
macro_rules! define_nibble {
    ($n:ident, $v:literal) => {
        #[derive(Debug, Default, Clone, Copy)]
        pub struct $n;
        impl Nibble for $n {
            const VALUE: u8 = $v;
        }
    };
}
for_each_nibble!(define_nibble);

// =============================================================================
// Nibble equality
// =============================================================================

/// Type-level nibble equality
pub trait NibbleEq<Other: Nibble>: Nibble {
    type Out: Bool;
}

// Self-equality: X == X → True
macro_rules! impl_eq_self {
    ($n:ident, $v:literal) => { impl NibbleEq<$n> for $n { type Out = True; } };
}
for_each_nibble!(impl_eq_self);

// Cross-inequality: X != Y → False
macro_rules! impl_neq { ($a:ident, $b:ident) => { impl NibbleEq<$b> for $a { type Out = False; } }; }
for_distinct_pairs!(impl_neq);

// =============================================================================
// NibbleAdd (add with carry)
// =============================================================================

/// Full adder over nibbles: `Self + Rhs + CarryIn`.
///
/// `Sum` is the low nibble of the result, `Carry` whether it overflowed 0xF.
pub trait NibbleAdd<Rhs: Nibble, CarryIn: Bool>: Nibble {
    type Sum: Nibble;
    type Carry: Bool;
}

// 16 x 16 x 2 impls, generated
macros::nibble_add_table!();

// =============================================================================
// NibbleNot (bitwise complement)
// =============================================================================

/// Bitwise complement: `0xF - Self`.
pub trait NibbleNot: Nibble {
    type Out: Nibble;
}

macro_rules! not_table {
    ($($n:ident => $m:ident),* $(,)?) => {
        $(impl NibbleNot for $n { type Out = $m; })*
    };
}

not_table! {
    X0 => XF, X1 => XE, X2 => XD, X3 => XC,
    X4 => XB, X5 => XA, X6 => X9, X7 => X8,
    X8 => X7, X9 => X6, XA => X5, XB => X4,
    XC => X3, XD => X2, XE => X1, XF => X0,
}

// =============================================================================
// NibbleHigh (top bit)
// =============================================================================

/// Whether the nibble's top bit (0x8) is set. On the most significant
/// digit of an integer this is the sign bit.
pub trait NibbleHigh: Nibble {
    type High: Bool;
}

macro_rules! impl_high {
    ($n:ident, $v:literal) => {
        impl NibbleHigh for $n {
            type High = <() as super::bool::SelectBool<{ $v >= 8 }>>::Out;
        }
    };
}
for_each_nibble!(impl_high);

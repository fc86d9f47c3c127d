//! Type-level 64-bit integers.
//!
//! An integer is a little-endian list of 16 nibbles holding the two's
//! complement bit pattern of an `i64`:
//!
//! ```text
//! int!(0x1F) = Int<Dig<XF, Dig<X1, Dig<X0, ... Dig<X0, DEnd>>>>>
//!                      ^ least significant        ^ most significant
//! ```
//!
//! Arithmetic wraps like `i64::wrapping_add`: the carry out of the most
//! significant digit is dropped.

use core::marker::PhantomData;

use crate::primitives::{Bool, True, False, Nibble, NibbleEq, X0};
use crate::primitives::nibble::{NibbleAdd, NibbleHigh, NibbleNot};

// =============================================================================
// Digits
// =============================================================================

/// End of a digit list.
#[derive(Debug, Default, Clone, Copy)]
pub struct DEnd;

/// One nibble followed by the more significant digits.
pub struct Dig<N, Rest>(PhantomData<(N, Rest)>);

/// A little-endian list of nibbles.
pub trait Digits: 'static {
    /// The raw bit pattern (low 4 bits are the first digit).
    const BITS: u64;
    const LEN: usize;
}

impl Digits for DEnd {
    const BITS: u64 = 0;
    const LEN: usize = 0;
}

impl<N: Nibble, R: Digits> Digits for Dig<N, R> {
    const BITS: u64 = (N::VALUE as u64) | (R::BITS << 4);
    const LEN: usize = 1 + R::LEN;
}

/// Digit-wise equality. Lists of different length are unequal.
pub trait DigitsEq<Rhs>: Digits {
    type Out: Bool;
}

impl DigitsEq<DEnd> for DEnd {
    type Out = True;
}

impl<N: Nibble, R: Digits> DigitsEq<Dig<N, R>> for DEnd {
    type Out = False;
}

impl<N: Nibble, R: Digits> DigitsEq<DEnd> for Dig<N, R> {
    type Out = False;
}

impl<A, RA, B, RB> DigitsEq<Dig<B, RB>> for Dig<A, RA>
where
    A: NibbleEq<B>,
    B: Nibble,
    RA: DigitsEq<RB>,
    RB: Digits,
{
    type Out = <<A as NibbleEq<B>>::Out as Bool>::And<<RA as DigitsEq<RB>>::Out>;
}

/// Ripple-carry addition of two digit lists of equal length.
pub trait DigitsAdd<Rhs, CarryIn: Bool>: Digits {
    type Out: Digits;
}

impl<C: Bool> DigitsAdd<DEnd, C> for DEnd {
    type Out = DEnd;
}

impl<A, RA, B, RB, C> DigitsAdd<Dig<B, RB>, C> for Dig<A, RA>
where
    A: NibbleAdd<B, C>,
    B: Nibble,
    C: Bool,
    RA: DigitsAdd<RB, <A as NibbleAdd<B, C>>::Carry>,
    RB: Digits,
{
    type Out = Dig<<A as NibbleAdd<B, C>>::Sum, <RA as DigitsAdd<RB, <A as NibbleAdd<B, C>>::Carry>>::Out>;
}

/// Bitwise complement of every digit.
pub trait DigitsNot: Digits {
    type Out: Digits;
}

impl DigitsNot for DEnd {
    type Out = DEnd;
}

impl<N: NibbleNot, R: DigitsNot> DigitsNot for Dig<N, R> {
    type Out = Dig<N::Out, R::Out>;
}

/// A zero of the same length.
pub trait DigitsZero: Digits {
    type Out: Digits;
}

impl DigitsZero for DEnd {
    type Out = DEnd;
}

impl<N: Nibble, R: DigitsZero> DigitsZero for Dig<N, R> {
    type Out = Dig<X0, R::Out>;
}

/// Top bit of the most significant digit.
pub trait DigitsSign: Digits {
    type Out: Bool;
}

impl<N: NibbleHigh> DigitsSign for Dig<N, DEnd> {
    type Out = N::High;
}

impl<N, M, R> DigitsSign for Dig<N, Dig<M, R>>
where
    N: Nibble,
    Dig<M, R>: DigitsSign,
{
    type Out = <Dig<M, R> as DigitsSign>::Out;
}

// =============================================================================
// Int
// =============================================================================

/// A type-level `i64`. Build with `int!(..)`.
pub struct Int<D>(PhantomData<D>);

impl<D> Default for Int<D> {
    fn default() -> Self {
        Int(PhantomData)
    }
}

impl<D> Clone for Int<D> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<D> Copy for Int<D> {}

impl<D: Digits> core::fmt::Debug for Int<D> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "int!({})", <Self as IntValue>::VALUE)
    }
}

/// Runtime view of a type-level integer.
pub trait IntValue: 'static {
    const VALUE: i64;
}

impl<D: Digits> IntValue for Int<D> {
    const VALUE: i64 = D::BITS as i64;
}

/// Wrapping addition.
#[diagnostic::on_unimplemented(
    message = "cannot add `{Rhs}` to `{Self}`",
    note = "both operands must be integers built with `int!(..)`"
)]
pub trait IntAdd<Rhs> {
    type Out: IntValue;
}

impl<A, B> IntAdd<Int<B>> for Int<A>
where
    A: DigitsAdd<B, False>,
    B: Digits,
{
    type Out = Int<<A as DigitsAdd<B, False>>::Out>;
}

/// Wrapping negation: `!x + 1`.
pub trait IntNeg {
    type Out: IntValue;
}

impl<D> IntNeg for Int<D>
where
    D: DigitsNot + DigitsZero,
    <D as DigitsNot>::Out: DigitsAdd<<D as DigitsZero>::Out, True>,
{
    type Out = Int<<<D as DigitsNot>::Out as DigitsAdd<<D as DigitsZero>::Out, True>>::Out>;
}

/// Wrapping subtraction: `a + (-b)`.
pub trait IntSub<Rhs> {
    type Out: IntValue;
}

impl<A, B> IntSub<B> for A
where
    B: IntNeg,
    A: IntAdd<<B as IntNeg>::Out>,
{
    type Out = <A as IntAdd<<B as IntNeg>::Out>>::Out;
}

/// Whether the integer is below zero.
pub trait IsNegative {
    type Out: Bool;
}

impl<D: DigitsSign> IsNegative for Int<D> {
    type Out = <D as DigitsSign>::Out;
}

#[cfg(test)]
mod tests {
    use super::*;
    use macros::int;

    fn value<I: IntValue>() -> i64 {
        I::VALUE
    }

    #[test]
    fn test_literal_round_trip() {
        assert_eq!(value::<int!(0)>(), 0);
        assert_eq!(value::<int!(-1)>(), -1);
        assert_eq!(value::<int!(0x1234_5678)>(), 0x1234_5678);
        assert_eq!(value::<int!(-9223372036854775808)>(), i64::MIN);
        assert_eq!(value::<int!(9223372036854775807)>(), i64::MAX);
    }

    #[test]
    fn test_add_with_carry() {
        assert_eq!(value::<<int!(0xF) as IntAdd<int!(1)>>::Out>(), 0x10);
        assert_eq!(value::<<int!(-3) as IntAdd<int!(10)>>::Out>(), 7);
    }

    #[test]
    fn test_add_wraps() {
        assert_eq!(value::<<int!(9223372036854775807) as IntAdd<int!(1)>>::Out>(), i64::MIN);
    }

    #[test]
    fn test_neg_and_sub() {
        assert_eq!(value::<<int!(42) as IntNeg>::Out>(), -42);
        assert_eq!(value::<<int!(0) as IntNeg>::Out>(), 0);
        assert_eq!(value::<<int!(5) as IntSub<int!(8)>>::Out>(), -3);
    }

    #[test]
    fn test_is_negative() {
        assert!(<<int!(-7) as IsNegative>::Out as Bool>::VALUE);
        assert!(!<<int!(0) as IsNegative>::Out as Bool>::VALUE);
        assert!(!<<int!(7) as IsNegative>::Out as Bool>::VALUE);
    }

    #[test]
    fn test_digits_eq_length_sensitive() {
        type One = Dig<X0, DEnd>;
        type Two = Dig<X0, Dig<X0, DEnd>>;
        assert!(!<<One as DigitsEq<Two>>::Out as Bool>::VALUE);
        assert!(<<Two as DigitsEq<Two>>::Out as Bool>::VALUE);
    }

    #[test]
    fn test_debug_shows_value() {
        extern crate std;
        use std::format;
        type MinusTwelve = int!(-12);
        assert_eq!(format!("{:?}", MinusTwelve::default()), "int!(-12)");
    }
}

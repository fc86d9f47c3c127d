//! Nibble streams for nominal identities.
//!
//! A nominal type (a user struct, `i32`, the `List` constructor itself) is
//! identified by the 64-bit FNV-1a hash of its qualified name, laid out as a
//! stream of 16 nibbles. Two streams are compared nibble by nibble up to a
//! Peano depth; identities always use [`DefaultMaxDepth`], which covers the
//! whole hash.

use core::marker::PhantomData;
use super::nibble::{Nibble, NibbleEq, X0, X1, X2, X3, X4, X5, X6, X7, X8, X9, XA, XB, XC, XD, XE, XF};
use super::bool::{Bool, True, False};

/// A stream of nibbles. Streams never end; finite hashes rotate.
pub trait HashStream: 'static {
    type Head: Nibble;
    type Tail: HashStream;
}

/// `N, N, N, ...`
///
/// Used as the identity of a single integer digit.
pub struct ConstStream<N>(PhantomData<N>);

impl<N: Nibble> HashStream for ConstStream<N> {
    type Head = N;
    type Tail = ConstStream<N>;
}

// =============================================================================
// Comparison depth
// =============================================================================

pub trait Peano {}

pub struct Z;
impl Peano for Z {}

pub struct S<N>(PhantomData<N>);
impl<N: Peano> Peano for S<N> {}

macros::peano!(16);

/// One comparison step per nibble of a 64-bit hash.
pub type DefaultMaxDepth = D16;

// =============================================================================
// Stream equality
// =============================================================================

/// `True` when the first `Depth` nibbles of both streams agree.
pub trait StreamEq<Other: HashStream, Depth> {
    type Out: Bool;
}

impl<A: HashStream, B: HashStream> StreamEq<B, Z> for A {
    type Out = True;
}

impl<A, B, D> StreamEq<B, S<D>> for A
where
    A: HashStream,
    B: HashStream,
    A::Head: NibbleEq<B::Head>,
    <A::Head as NibbleEq<B::Head>>::Out: StreamEqStep<A::Tail, B::Tail, D>,
{
    type Out = <<A::Head as NibbleEq<B::Head>>::Out as StreamEqStep<A::Tail, B::Tail, D>>::Out;
}

/// Stops at the first mismatching head.
pub trait StreamEqStep<TailA, TailB, Depth> {
    type Out: Bool;
}

impl<TailA, TailB, D> StreamEqStep<TailA, TailB, D> for False {
    type Out = False;
}

impl<TailA, TailB, D> StreamEqStep<TailA, TailB, D> for True
where
    TailA: HashStream + StreamEq<TailB, D>,
    TailB: HashStream,
{
    type Out = <TailA as StreamEq<TailB, D>>::Out;
}

// =============================================================================
// Hash streams from const nibbles
// =============================================================================

/// Maps a const `u8` in `0..16` to its nibble type.
pub trait SelectNibble<const N: u8> {
    type Out: Nibble;
}

macro_rules! impl_select_nibble {
    ($n:ident, $v:literal) => {
        impl SelectNibble<$v> for () {
            type Out = $n;
        }
    };
}
crate::for_each_nibble!(impl_select_nibble);

/// The 16 nibbles of a 64-bit hash, most significant first.
///
/// `make_routing_stream!` expands to this type; the nibbles may be literals
/// or const-fn calls over `module_path!()`.
pub struct HashStream16<
    const N0: u8, const N1: u8, const N2: u8, const N3: u8,
    const N4: u8, const N5: u8, const N6: u8, const N7: u8,
    const N8: u8, const N9: u8, const N10: u8, const N11: u8,
    const N12: u8, const N13: u8, const N14: u8, const N15: u8,
>;

impl<
    const N0: u8, const N1: u8, const N2: u8, const N3: u8,
    const N4: u8, const N5: u8, const N6: u8, const N7: u8,
    const N8: u8, const N9: u8, const N10: u8, const N11: u8,
    const N12: u8, const N13: u8, const N14: u8, const N15: u8,
> HashStream for HashStream16<N0, N1, N2, N3, N4, N5, N6, N7, N8, N9, N10, N11, N12, N13, N14, N15>
where
    (): SelectNibble<N0> + SelectNibble<N1> + SelectNibble<N2> + SelectNibble<N3>
      + SelectNibble<N4> + SelectNibble<N5> + SelectNibble<N6> + SelectNibble<N7>
      + SelectNibble<N8> + SelectNibble<N9> + SelectNibble<N10> + SelectNibble<N11>
      + SelectNibble<N12> + SelectNibble<N13> + SelectNibble<N14> + SelectNibble<N15>,
{
    type Head = <() as SelectNibble<N0>>::Out;
    type Tail = HashStream16<N1, N2, N3, N4, N5, N6, N7, N8, N9, N10, N11, N12, N13, N14, N15, N0>;
}

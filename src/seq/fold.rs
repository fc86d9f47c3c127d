//! Left fold over sequences.

use crate::kind::IntAdd;
use super::list::{HCons, HNil, Sequence};

/// A binary combinator: `F(acc, x)`.
pub trait Combine<Acc, X> {
    type Out;
}

/// Fold an element list left to right.
pub trait FoldElems<Acc, F> {
    type Out;
}

impl<Acc, F> FoldElems<Acc, F> for HNil {
    type Out = Acc;
}

impl<Acc, F, H, T> FoldElems<Acc, F> for HCons<H, T>
where
    F: Combine<Acc, H>,
    T: FoldElems<<F as Combine<Acc, H>>::Out, F>,
{
    type Out = <T as FoldElems<<F as Combine<Acc, H>>::Out, F>>::Out;
}

/// `acc = Seed; for x in Self { acc = F(acc, x) }; acc`
#[diagnostic::on_unimplemented(
    message = "cannot fold `{Self}` with `{F}` starting from `{Seed}`",
    label = "`{F}` does not combine every element of this sequence"
)]
pub trait Fold<Seed, F> {
    type Out;
}

impl<S, Seed, F> Fold<Seed, F> for S
where
    S: Sequence,
    S::Elems: FoldElems<Seed, F>,
{
    type Out = <S::Elems as FoldElems<Seed, F>>::Out;
}

/// Integer addition (wrapping).
#[derive(Debug, Default, Clone, Copy)]
pub struct Plus;

impl<A, B> Combine<A, B> for Plus
where
    A: IntAdd<B>,
{
    type Out = <A as IntAdd<B>>::Out;
}

/// Result of a fold.
pub type Folded<L, Seed, F> = <L as Fold<Seed, F>>::Out;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::kind::{IntValue, TypeKind};
    use crate::seq::list::{Append, List};
    use macros::{int, ints};

    /// Counts elements, ignoring their values.
    struct Count;

    impl<Acc: IntAdd<int!(1)>, X> Combine<Acc, X> for Count {
        type Out = <Acc as IntAdd<int!(1)>>::Out;
    }

    /// Rebuilds the element list in order.
    struct Collect;

    impl<Acc: Append<X>, X> Combine<Acc, X> for Collect {
        type Out = <Acc as Append<X>>::Out;
    }

    #[test]
    fn test_fold_empty_is_seed() {
        crate::assert_type_eq!(Folded<ints![], int!(9), Plus>, int!(9));
    }

    #[test]
    fn test_fold_plus() {
        assert_eq!(<Folded<ints![1, 2, 3], int!(10), Plus> as IntValue>::VALUE, 16);
        assert_eq!(<Folded<ints![5, -8], int!(0), Plus> as IntValue>::VALUE, -3);
    }

    #[test]
    fn test_fold_any_kind() {
        type Ts = List<TypeKind, crate::hlist![u8, bool, char]>;
        assert_eq!(<Folded<Ts, int!(0), Count> as IntValue>::VALUE, 3);
    }

    #[test]
    fn test_fold_is_left_to_right() {
        type Out = Folded<ints![1, 2, 3], HNil, Collect>;
        crate::assert_type_eq!(Out, crate::hlist![int!(1), int!(2), int!(3)]);
    }
}

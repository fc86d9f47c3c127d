//! Lists, concatenation and folds through the public surface
#![recursion_limit = "512"]

use tola_kinds::prelude::*;
use tola_kinds::{assert_false, assert_true, assert_type_eq};

use tola_kinds::kind::IntAdd;

/// Doubles the accumulator once per element.
struct Double;

impl<Acc: IntAdd<Acc>, X> Combine<Acc, X> for Double {
    type Out = <Acc as IntAdd<Acc>>::Out;
}

#[test]
fn test_literals() {
    assert_type_eq!(bools![true, false], BoolList<hlist![True, False]>);
    assert_type_eq!(ints![7], Int64List<hlist![int!(7)]>);
    assert_type_eq!(types![u8, ()], TypeList<hlist![u8, ()]>);
    assert_type_eq!(int!(2 * -3 + 1), int!(-5));
}

#[test]
fn test_concat_lists_macro() {
    type L = concat_lists![ints![1], ints![2, 3], Int64List, ints![4]];
    assert_type_eq!(L, ints![1, 2, 3, 4]);
    assert_eq!(<L as Sequence>::LEN, 4);
}

#[test]
fn test_list_equality() {
    assert_true!(ListEq<ints![1, 2], ints![1, 2]>);
    assert_false!(ListEq<ints![1, 2], ints![2, 1]>);
    assert_false!(ListEq<ints![1, 2], ints![1, 2, 2]>);
    assert_true!(ListEq<types![Option<u8>], types![Option<u8>]>);
}

#[test]
fn test_fold_variants() {
    assert_eq!(<Folded<ints![0, 0, 0], int!(3), Double> as IntValue>::VALUE, 24);
    assert_eq!(<Folded<ints![10, -3], int!(100), Plus> as IntValue>::VALUE, 107);
    assert_type_eq!(Folded<Int64List, int!(5), Plus>, int!(5));
}

#[test]
fn test_negate_and_constants() {
    assert_type_eq!(Mapped<bools![true, false], Negate>, bools![false, true]);
    assert_type_eq!(Mapped<types![u8, u16], AlwaysFalse>, bools![false, false]);
    assert_type_eq!(Mapped<bools![true], Constant<IntKind, int!(9)>>, ints![9]);
}

#[test]
fn test_sum_wraps() {
    assert_eq!(<ints![9223372036854775807, 1] as Sum>::VALUE, i64::MIN);
    assert_eq!(<ints![-1, -1, -1] as Sum>::VALUE, -3);
}

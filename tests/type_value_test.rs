//! Type-kind sequences with user-defined type values
#![recursion_limit = "512"]

use tola_kinds::prelude::*;
use tola_kinds::{assert_false, assert_true, assert_type_eq};

#[derive(TypeValue)]
struct Meters;

#[derive(TypeValue)]
struct Seconds;

#[derive(TypeValue)]
#[allow(dead_code)]
enum Unit {
    Metric,
    Imperial,
}

#[derive(TypeValue)]
#[allow(dead_code)]
struct Tagged<T>(T);

#[derive(TypeValue)]
#[allow(dead_code)]
struct Pair<A, B = u8>
where
    A: Copy,
{
    a: A,
    b: B,
}

mod other {
    use tola_kinds::prelude::*;

    // Same name, different module: a different type value.
    #[derive(TypeValue)]
    pub struct Meters;
}

#[test]
fn test_derived_identity() {
    assert_true!(<TypeKind as KindEq<Meters, Meters>>::Out);
    assert_false!(<TypeKind as KindEq<Meters, Seconds>>::Out);
    assert_false!(<TypeKind as KindEq<Meters, other::Meters>>::Out);
    assert_false!(<TypeKind as KindEq<Unit, Meters>>::Out);
}

#[test]
fn test_generic_identity() {
    assert_true!(<TypeKind as KindEq<Tagged<i32>, Tagged<i32>>>::Out);
    assert_false!(<TypeKind as KindEq<Tagged<i32>, Tagged<u32>>>::Out);
    assert_false!(<TypeKind as KindEq<Tagged<Meters>, Meters>>::Out);
    assert_true!(<TypeKind as KindEq<Pair<u8, Meters>, Pair<u8, Meters>>>::Out);
    assert_false!(<TypeKind as KindEq<Pair<u8, Meters>, Pair<u16, Meters>>>::Out);
    assert_false!(<TypeKind as KindEq<Pair<u8>, Pair<u8, u16>>>::Out);
}

#[test]
fn test_type_sets() {
    type S = SetOf<types![Meters, Seconds, Meters, Tagged<Seconds>, Seconds]>;
    assert_eq!(<S as Sequence>::LEN, 3);
    assert_true!(IsIn<S, Tagged<Seconds>>);
    assert_false!(IsIn<S, Tagged<Meters>>);
    assert_true!(SetEq<S, SetOf<types![Tagged<Seconds>, Seconds, Meters]>>);
}

#[test]
fn test_engine_values_as_types() {
    // Sequences and integers are themselves type values.
    type Nested = types![ints![1, 2], bools![true], int!(3)];
    assert_eq!(<Nested as Sequence>::LEN, 3);
    assert_true!(IsIn<Nested, ints![1, 2]>);
    assert_false!(IsIn<Nested, ints![2, 1]>);
    assert_false!(IsIn<Nested, int!(4)>);
}

#[test]
fn test_constant_function() {
    type Out = Mapped<ints![1, 2, 3], Constant<TypeKind, Meters>>;
    assert_type_eq!(Out, types![Meters, Meters, Meters]);
    assert_eq!(<SetOf<Out> as Sequence>::LEN, 1);
}

#[test]
fn test_compound_std_types() {
    type Ts = types![(u8, bool), u8, &'static str, [u8; 4], (bool, u8)];
    assert_eq!(<Ts as Sequence>::LEN, 5);
    assert_eq!(<SetOf<Ts> as Sequence>::LEN, 5);

    type Dups = types![(u8, bool), &'static str, (u8, bool), [u8; 4], &'static str];
    assert_eq!(<SetOf<Dups> as Sequence>::LEN, 3);
    assert_true!(IsIn<SetOf<Dups>, [u8; 4]>);
    assert_false!(IsIn<SetOf<Dups>, [u8; 3]>);
    assert_false!(IsIn<SetOf<Dups>, (bool, u8)>);
}

//! Test runtime reflection via the Inspect trait
#![recursion_limit = "512"]

use tola_kinds::prelude::*;

#[derive(TypeValue)]
struct CapA;

#[derive(TypeValue)]
struct CapB;

#[test]
fn test_inspect_empty() {
    let empty = <Int64List as Default>::default();
    let mut seen = Vec::new();
    empty.inspect(|r| seen.push(r));
    assert!(seen.is_empty());
}

#[test]
fn test_inspect_ints_in_order() {
    type L = ints![10, -20, 30];
    let mut seen = Vec::new();
    L::default().inspect(|r| seen.push(r));
    assert_eq!(seen, vec![Reflected::Int(10), Reflected::Int(-20), Reflected::Int(30)]);
}

#[test]
fn test_inspect_computed_set() {
    type S = SetOf<Mapped<ints![1, 2, 3, 4], EqualTo<IntKind, int!(3)>>>;
    let set = <S as Default>::default();
    assert_eq!(set.to_vec(), vec![Reflected::Bool(false), Reflected::Bool(true)]);
    assert_eq!(set.render(), "{false, true}");
}

#[test]
fn test_inspect_type_names() {
    type Set = types![CapA, CapB];
    let set = <Set as Default>::default();
    let mut names = Vec::new();
    set.inspect(|r| {
        if let Reflected::Type(name) = r {
            names.push(name);
        }
    });
    assert_eq!(names.len(), 2);
    assert!(names[0].ends_with("CapA"), "unexpected name {}", names[0]);
    assert!(names[1].ends_with("CapB"), "unexpected name {}", names[1]);
}

#[test]
fn test_render_extremes() {
    type L = ints![-9223372036854775808, 9223372036854775807];
    assert_eq!(L::default().render(), "[-9223372036854775808, 9223372036854775807]");
}

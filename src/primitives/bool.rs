//! Type-level boolean logic.
//!
//! Core types: `True`, `False`, `Bool` trait.
//!
//! These double as the values of the boolean kind: a `BoolList` is a list
//! of `True`/`False` markers.

/// Type-level boolean.
pub trait Bool: 'static {
    const VALUE: bool;
    /// Type-level conditional: If<Then, Else> (General Type Selector)
    type If<Then, Else>;

    /// Logical AND
    type And<Other: Bool>: Bool;

    /// Logical OR
    type Or<Other: Bool>: Bool;
}

/// Type-level True.
#[derive(Debug, Default, Clone, Copy)]
pub struct True;

/// Type-level False.
#[derive(Debug, Default, Clone, Copy)]
pub struct False;

impl Bool for True {
    const VALUE: bool = true;
    type If<Then, Else> = Then;

    type And<Other: Bool> = Other;
    type Or<Other: Bool> = True;
}

impl Bool for False {
    const VALUE: bool = false;
    type If<Then, Else> = Else;

    type And<Other: Bool> = False;
    type Or<Other: Bool> = Other;
}

pub trait BoolAnd<Other: Bool>: Bool {
    type Out: Bool;
}
impl<A: Bool, B: Bool> BoolAnd<B> for A {
    type Out = A::And<B>;
}

pub trait BoolOr<Other: Bool>: Bool {
    type Out: Bool;
}
impl<A: Bool, B: Bool> BoolOr<B> for A {
    type Out = A::Or<B>;
}

/// Type-level NOT.
pub trait BoolNot: Bool {
    type Out: Bool;
}

impl BoolNot for True {
    type Out = False;
}

impl BoolNot for False {
    type Out = True;
}

/// Type-level equality of two booleans (XNOR).
pub trait BoolEq<Other: Bool>: Bool {
    type Out: Bool;
}

impl BoolEq<True> for True { type Out = True; }
impl BoolEq<False> for True { type Out = False; }
impl BoolEq<True> for False { type Out = False; }
impl BoolEq<False> for False { type Out = True; }

/// Convert const bool to type-level Bool.
pub trait SelectBool<const B: bool> {
    type Out: Bool;
}

impl SelectBool<true> for () {
    type Out = True;
}

impl SelectBool<false> for () {
    type Out = False;
}

/// Type-level boolean from a `bool` literal.
pub type BoolOf<const B: bool> = <() as SelectBool<B>>::Out;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_connectives() {
        assert!(<<True as BoolAnd<True>>::Out as Bool>::VALUE);
        assert!(!<<True as BoolAnd<False>>::Out as Bool>::VALUE);
        assert!(<<False as BoolOr<True>>::Out as Bool>::VALUE);
        assert!(!<<False as BoolOr<False>>::Out as Bool>::VALUE);
        assert!(<<False as BoolNot>::Out as Bool>::VALUE);
    }

    #[test]
    fn test_eq_and_select() {
        assert!(<<True as BoolEq<True>>::Out as Bool>::VALUE);
        assert!(!<<False as BoolEq<True>>::Out as Bool>::VALUE);
        assert!(<BoolOf<true> as Bool>::VALUE);
        assert!(!<BoolOf<false> as Bool>::VALUE);
    }
}

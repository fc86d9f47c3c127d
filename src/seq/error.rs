//! Error markers and first-error reduction.
//!
//! An element function reports success with the sentinel [`NoError`] and
//! failure with [`Fail<E>`], where `E` is any payload type. Failures are data:
//! they flow through transforms and are reduced with [`FirstError`].

use core::marker::PhantomData;

use crate::kind::{Applied, IdCons, IdNil, Named, TypeValue};
use crate::primitives::{Bool, True, False};
use super::list::{HCons, HNil};

/// The "no error" sentinel.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoError;

/// A failure carrying the payload type `E`.
pub struct Fail<E>(PhantomData<E>);

impl<E> Default for Fail<E> {
    fn default() -> Self {
        Fail(PhantomData)
    }
}

/// Either [`NoError`] or a [`Fail<E>`].
#[diagnostic::on_unimplemented(
    message = "`{Self}` is not an error slot",
    note = "use `NoError` for success and `Fail<E>` for failures"
)]
pub trait ErrorSlot: 'static {
    type IsError: Bool;
    const IS_ERROR: bool = <Self::IsError as Bool>::VALUE;
}

impl ErrorSlot for NoError {
    type IsError = False;
}

impl<E: 'static> ErrorSlot for Fail<E> {
    type IsError = True;
}

impl TypeValue for NoError {
    type Id = Named<macros::make_routing_stream!("tola_kinds::NoError")>;
}

impl<E: TypeValue> TypeValue for Fail<E> {
    type Id = Applied<Named<macros::make_routing_stream!("tola_kinds::Fail")>, IdCons<E::Id, IdNil>>;
}

/// Choose between an error slot and the rest, dispatched on whether the
/// first slot is an error.
pub trait PickError<First: ErrorSlot, Rest: ErrorSlot> {
    type Out: ErrorSlot;
}

impl<First: ErrorSlot, Rest: ErrorSlot> PickError<First, Rest> for True {
    type Out = First;
}

impl<First: ErrorSlot, Rest: ErrorSlot> PickError<First, Rest> for False {
    type Out = Rest;
}

/// Earlier slot wins if it is an error.
pub type Earliest<First, Rest> =
    <<First as ErrorSlot>::IsError as PickError<First, Rest>>::Out;

/// The first non-sentinel slot of a list of error slots, or [`NoError`].
pub trait FirstError {
    type Out: ErrorSlot;
}

impl FirstError for HNil {
    type Out = NoError;
}

impl<H, T> FirstError for HCons<H, T>
where
    H: ErrorSlot,
    T: FirstError,
    H::IsError: PickError<H, T::Out>,
{
    type Out = Earliest<H, T::Out>;
}

/// `NoError` when `Self` is `True`, otherwise `Fail<E>`.
pub trait FailUnless<E>: Bool {
    type Out: ErrorSlot;
}

impl<E: 'static> FailUnless<E> for True {
    type Out = NoError;
}

impl<E: 'static> FailUnless<E> for False {
    type Out = Fail<E>;
}

/// `Fail<E>` when `Self` is `True`, otherwise `NoError`.
pub trait FailIf<E>: Bool {
    type Out: ErrorSlot;
}

impl<E: 'static> FailIf<E> for True {
    type Out = Fail<E>;
}

impl<E: 'static> FailIf<E> for False {
    type Out = NoError;
}

/// First error among the given slots: `first_error![NoError, Fail<A>, Fail<B>]`.
#[macro_export]
macro_rules! first_error {
    ($($slot:ty),* $(,)?) => {
        <$crate::hlist![$($slot),*] as $crate::seq::FirstError>::Out
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    struct A;
    struct B;

    fn is_error<S: ErrorSlot>() -> bool {
        S::IS_ERROR
    }

    #[test]
    fn test_empty_and_clean() {
        assert!(!is_error::<first_error![]>());
        assert!(!is_error::<first_error![NoError, NoError]>());
    }

    #[test]
    fn test_earliest_wins() {
        type E = first_error![NoError, Fail<A>, Fail<B>];
        crate::assert_type_eq!(E, Fail<A>);
        type F = first_error![Fail<B>, NoError, Fail<A>];
        crate::assert_type_eq!(F, Fail<B>);
    }

    #[test]
    fn test_guards() {
        crate::assert_type_eq!(<True as FailUnless<A>>::Out, NoError);
        crate::assert_type_eq!(<False as FailUnless<A>>::Out, Fail<A>);
        crate::assert_type_eq!(<True as FailIf<A>>::Out, Fail<A>);
        crate::assert_type_eq!(<False as FailIf<A>>::Out, NoError);
    }
}

//! Concatenation of same-kind lists.

use crate::kind::Kind;
use super::list::{HConcat, List};

/// `Self ++ Rhs`: the left operand's elements first, then the right's.
///
/// Only lists of the same kind concatenate; anything else has no impl.
#[diagnostic::on_unimplemented(
    message = "cannot concatenate `{Self}` with `{Rhs}`",
    label = "both operands must be lists of the same kind",
    note = "sets do not support concatenation; concatenate the source lists and rebuild the set"
)]
pub trait Concat<Rhs> {
    type Out;
}

impl<K: Kind, A, B> Concat<List<K, B>> for List<K, A>
where
    A: HConcat<B>,
{
    type Out = List<K, <A as HConcat<B>>::Out>;
}

/// N-ary concatenation, left-nested: `concat_lists![A, B, C]`.
#[macro_export]
macro_rules! concat_lists {
    ($only:ty) => { $only };
    ($first:ty, $second:ty $(, $rest:ty)*) => {
        $crate::concat_lists![
            <$first as $crate::seq::Concat<$second>>::Out
            $(, $rest)*
        ]
    };
}

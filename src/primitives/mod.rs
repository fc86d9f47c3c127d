//! # Layer 0: Primitives
//!
//! Basic building blocks for the kind system:
//! - `bool.rs`: Type-level boolean logic (True/False).
//! - `nibble.rs`: Type-level 4-bit values (X0-XF) and their arithmetic tables.
//! - `stream.rs`: Hash streams and Peano numbers for nominal identities.
//! - `const_utils.rs`: const-fn hashing used by the identity macros.

pub mod bool;
pub mod nibble;
pub mod stream;
pub mod const_utils;

// Re-export key types at this level
pub use bool::{Bool, True, False, BoolAnd, BoolOr, BoolNot, BoolEq, SelectBool, BoolOf};
pub use nibble::{Nibble, X0, X1, X2, X3, X4, X5, X6, X7, X8, X9, XA, XB, XC, XD, XE, XF, NibbleEq};
pub use stream::{HashStream, ConstStream, HashStream16, StreamEq, Z, S, Peano, DefaultMaxDepth};

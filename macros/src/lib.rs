//! Procedural macros for the tola-kinds type-level computation engine
//!
//! ## Macros
//!
//! | Macro | Target | Purpose |
//! |-------|--------|---------|
//! | `int!(expr)` | type | 64-bit integer literal as a type |
//! | `ints![a, b, ...]` | type | Integer list literal |
//! | `#[derive(TypeValue)]` | struct/enum | Register a type as a value of the type kind |
//!
//! ## Example
//!
//! ```ignore
//! use tola_kinds::prelude::*;
//!
//! type Xs = ints![1, 2, -3];
//! assert_eq!(<Xs as Sum>::VALUE, 0);
//!
//! #[derive(TypeValue)]
//! struct Meters;
//! ```

use proc_macro::TokenStream;
use syn::parse_macro_input;

// =============================================================================
// Module Declarations (Three-tier: inner / common / user)
// =============================================================================

mod inner;
mod common;
mod user;

// =============================================================================
// Internal Macros (inner/)
// =============================================================================

/// Generate Peano number type aliases D0..Dn.
///
/// # Usage
/// ```ignore
/// peano!(16);  // Generates D0 = Z, D1 = S<D0>, ..., D16 = S<D15>
/// ```
#[proc_macro]
pub fn peano(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as inner::peano::PeanoInput);
    inner::peano::expand_peano(input).into()
}

/// Generate the `NibbleAdd` full-adder table (512 impls).
#[proc_macro]
pub fn nibble_add_table(_input: TokenStream) -> TokenStream {
    inner::nibble_table::expand_nibble_add_table().into()
}

/// Hash stream for a qualified name.
///
/// Accepts either a string literal (hashed here) or an expression such as
/// `concat!(module_path!(), "::", "Name")` (hashed by const fn at the call site).
#[proc_macro]
pub fn make_routing_stream(input: TokenStream) -> TokenStream {
    user::expand_make_routing_stream(input.into()).into()
}

// =============================================================================
// User-facing Macros (user/)
// =============================================================================

/// Type-level 64-bit integer from a constant expression.
///
/// # Usage
/// ```ignore
/// type MinusThree = int!(-3);
/// type Big = int!(1 << 40); // error: only `+`, `-`, `*` are supported
/// ```
#[proc_macro]
pub fn int(input: TokenStream) -> TokenStream {
    let expr = parse_macro_input!(input as syn::Expr);
    user::expand_int(expr).into()
}

/// Integer list literal: `ints![1, 2, 3]` is a `List<IntKind, ...>`.
#[proc_macro]
pub fn ints(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as common::IntListInput);
    user::expand_ints(input).into()
}

/// Derive macro making a type a value of the type kind.
///
/// Non-generic types get a nominal identity (hash of the fully qualified
/// name). Generic types get a structural identity built from the
/// constructor name and the identities of their type parameters.
///
/// # Usage
/// ```ignore
/// #[derive(TypeValue)]
/// struct Meters;
///
/// #[derive(TypeValue)]
/// struct Tagged<T>(T);
///
/// type Ts = types![Meters, Tagged<i32>];
/// ```
#[proc_macro_derive(TypeValue)]
pub fn derive_type_value(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as syn::DeriveInput);
    user::expand_derive_type_value(input).into()
}

//! `int!` and `ints!`: integer literals lowered to type-level integers.

use proc_macro2::{Span, TokenStream};
use quote::quote;
use syn::{Expr, Ident};

use crate::common::{eval_int, nibbles_of, IntListInput};

/// Build the `Int<Dig<..>>` type for a single value.
fn int_type(value: i64) -> TokenStream {
    let mut digits = quote! { ::tola_kinds::kind::int::DEnd };

    // Little-endian: the innermost digit is the most significant one.
    for n in nibbles_of(value).iter().rev() {
        let nib = Ident::new(&format!("X{:X}", n), Span::call_site());
        digits = quote! {
            ::tola_kinds::kind::int::Dig<::tola_kinds::primitives::nibble::#nib, #digits>
        };
    }

    quote! { ::tola_kinds::kind::int::Int<#digits> }
}

/// `int!(-3)` -> `Int<Dig<XD, Dig<XF, ...>>>`
pub fn expand_int(expr: Expr) -> TokenStream {
    match eval_int(&expr) {
        Ok(value) => int_type(value),
        Err(err) => err.to_compile_error(),
    }
}

/// `ints![1, 2, 3]` -> `List<IntKind, HCons<int!(1), HCons<..., HNil>>>`
pub fn expand_ints(input: IntListInput) -> TokenStream {
    let mut values = Vec::with_capacity(input.items.len());
    for item in &input.items {
        match eval_int(item) {
            Ok(v) => values.push(v),
            Err(err) => return err.to_compile_error(),
        }
    }

    let mut elems = quote! { ::tola_kinds::seq::HNil };
    for v in values.into_iter().rev() {
        let ty = int_type(v);
        elems = quote! { ::tola_kinds::seq::HCons<#ty, #elems> };
    }

    quote! { ::tola_kinds::seq::List<::tola_kinds::kind::IntKind, #elems> }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_int_type_has_sixteen_digits() {
        let out = int_type(7).to_string();
        assert_eq!(out.matches("Dig").count(), 16);
        assert!(out.contains("X7"));
    }

    #[test]
    fn test_ints_reports_bad_items() {
        let input: IntListInput = syn::parse_str("1, foo, 3").unwrap();
        let out = expand_ints(input).to_string();
        assert!(out.contains("compile_error"));
    }
}

use proc_macro2::TokenStream as TokenStream2;
use quote::quote;
use syn::{DeriveInput, GenericParam};

/// #[derive(TypeValue)] generates a call to the declarative macro bridge.
/// This allows module_path!() to be expanded before the proc-macro processes it.
///
/// The three-layer architecture:
/// 1. #[derive(TypeValue)] (proc-macro) -> generates __impl_type_value! call
/// 2. __impl_type_value! (decl-macro) -> passes concat!() to proc-macro
/// 3. make_routing_stream! (proc-macro) -> receives expanded string
///
/// Generic types become applied constructors: the identity of `Pair<A, B>`
/// is the constructor's name plus the identities of `A` and `B`.
pub fn expand_derive_type_value(input: DeriveInput) -> TokenStream2 {
    let ident = &input.ident;
    let ident_str = ident.to_string();

    let mut params = Vec::new();
    for param in &input.generics.params {
        match param {
            GenericParam::Type(tp) => {
                let mut tp = tp.clone();
                tp.eq_token = None;
                tp.default = None;
                tp.attrs.clear();
                params.push(tp);
            }
            GenericParam::Lifetime(lt) => {
                return syn::Error::new_spanned(
                    lt,
                    "TypeValue cannot be derived for types with lifetime parameters",
                )
                .to_compile_error();
            }
            GenericParam::Const(c) => {
                return syn::Error::new_spanned(
                    c,
                    "TypeValue cannot be derived for types with const parameters",
                )
                .to_compile_error();
            }
        }
    }

    if params.is_empty() {
        return quote! {
            ::tola_kinds::__impl_type_value!(#ident, #ident_str);
        };
    }

    let names: Vec<_> = params.iter().map(|p| &p.ident).collect();
    let predicates: Vec<_> = input
        .generics
        .where_clause
        .as_ref()
        .map(|w| w.predicates.iter().collect())
        .unwrap_or_default();

    quote! {
        ::tola_kinds::__impl_type_value!(
            #ident<#(#names),*>, #ident_str,
            [#(#names),*],
            [#(#params),*],
            [#(#predicates,)*]
        );
    }
}

// Logic for make_routing_stream macro
pub fn expand_make_routing_stream(input: TokenStream2) -> TokenStream2 {
    // 1. Try to parse as string literal first (direct case)
    if let Ok(lit) = syn::parse2::<syn::LitStr>(input.clone()) {
        let s = lit.value();
        let hash = fnv1a_64(&s);

        // Build HashStream16 directly from hash
        let nibbles: Vec<u8> = (0..16).map(|i| {
            ((hash >> (i * 4)) & 0xF) as u8
        }).collect();

        return quote! {
            ::tola_kinds::primitives::stream::HashStream16<
                #(#nibbles),*
            >
        };
    }

    // 2. If not a string literal, it's likely concat!(module_path!(), ...)
    //    Generate HashStream16 with hash computed at compile time using const fn
    let slots = (0u8..16).map(|i| {
        quote! { { ::tola_kinds::primitives::const_utils::hash_nibble(#input, #i) } }
    });
    quote! {
        ::tola_kinds::primitives::stream::HashStream16<#(#slots),*>
    }
}

fn fnv1a_64(s: &str) -> u64 {
    let mut hash: u64 = 0xcbf29ce484222325;
    for b in s.as_bytes() {
        hash ^= *b as u64;
        hash = hash.wrapping_mul(0x100000001b3);
    }
    hash
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_struct_goes_through_bridge() {
        let input: DeriveInput = syn::parse_str("struct Meters;").unwrap();
        let out = expand_derive_type_value(input).to_string();
        assert!(out.contains("__impl_type_value"));
        assert!(out.contains("\"Meters\""));
    }

    #[test]
    fn test_generic_struct_lists_params() {
        let input: DeriveInput =
            syn::parse_str("struct Pair<A: Clone, B = u8> where A: Copy { a: A, b: B }").unwrap();
        let out = expand_derive_type_value(input).to_string();
        assert!(out.contains("Pair < A , B >"));
        assert!(out.contains("A : Copy ,"));
        assert!(!out.contains("u8"));
    }

    #[test]
    fn test_lifetimes_rejected() {
        let input: DeriveInput = syn::parse_str("struct Borrowed<'a>(&'a str);").unwrap();
        let out = expand_derive_type_value(input).to_string();
        assert!(out.contains("compile_error"));
    }

    #[test]
    fn test_literal_stream_is_precomputed() {
        let out = expand_make_routing_stream(quote! { "a" }).to_string();
        assert!(!out.contains("hash_nibble"));
        let out = expand_make_routing_stream(quote! { concat!("a", "b") }).to_string();
        assert_eq!(out.matches("hash_nibble").count(), 16);
    }
}

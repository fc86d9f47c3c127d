//! Generate NibbleAdd impls for all 16*16*2 (lhs, rhs, carry-in) combinations.

use proc_macro2::{Span, TokenStream};
use quote::quote;
use syn::Ident;

fn nibble_ident(n: u8) -> Ident {
    Ident::new(&format!("X{:X}", n), Span::call_site())
}

fn bool_ident(b: bool) -> Ident {
    Ident::new(if b { "True" } else { "False" }, Span::call_site())
}

/// Generate all 512 NibbleAdd impls.
///
/// Emits bare identifiers (`X0`..`XF`, `True`, `False`, `NibbleAdd`), so the
/// call site must have them in scope.
pub fn expand_nibble_add_table() -> TokenStream {
    let mut impls = TokenStream::new();

    for a in 0u8..16 {
        for b in 0u8..16 {
            for carry_in in [false, true] {
                let total = a + b + carry_in as u8;

                let lhs = nibble_ident(a);
                let rhs = nibble_ident(b);
                let cin = bool_ident(carry_in);
                let sum = nibble_ident(total & 0xF);
                let cout = bool_ident(total > 0xF);

                impls.extend(quote! {
                    impl NibbleAdd<#rhs, #cin> for #lhs {
                        type Sum = #sum;
                        type Carry = #cout;
                    }
                });
            }
        }
    }

    impls
}

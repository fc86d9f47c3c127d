//! Comparison-depth aliases `D0..=Dn`.
//!
//! Identity streams are compared nibble by nibble, and the number of nibbles
//! looked at is a Peano number. The aliases keep those depths readable.

use proc_macro2::{Span, TokenStream};
use quote::quote;
use syn::{parse::Parse, parse::ParseStream, Ident, LitInt};

pub struct PeanoInput {
    pub max: usize,
}

impl Parse for PeanoInput {
    fn parse(input: ParseStream) -> syn::Result<Self> {
        let lit: LitInt = input.parse()?;
        let max = lit.base10_parse::<usize>()?;
        if max == 0 {
            return Err(syn::Error::new(lit.span(), "depth must be at least 1"));
        }
        Ok(PeanoInput { max })
    }
}

fn depth(n: usize) -> Ident {
    Ident::new(&format!("D{}", n), Span::call_site())
}

pub fn expand_peano(input: PeanoInput) -> TokenStream {
    let zero = depth(0);
    let aliases = (1..=input.max).map(|n| {
        let curr = depth(n);
        let prev = depth(n - 1);
        let doc = format!("Compare {} nibble(s).", n);
        quote! {
            #[doc = #doc]
            pub type #curr = S<#prev>;
        }
    });

    quote! {
        /// Compare nothing; every pair of streams is equal at this depth.
        pub type #zero = Z;
        #(#aliases)*
    }
}

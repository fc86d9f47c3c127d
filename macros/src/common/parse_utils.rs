//! Common parsing utilities
//!
//! Shared parsing helpers for the integer literal macros.

use syn::{
    parse::{Parse, ParseStream},
    punctuated::Punctuated,
    spanned::Spanned,
    BinOp, Expr, Lit, Token, UnOp,
};

// =============================================================================
// Integer Expression Evaluation
// =============================================================================

/// Evaluate a constant integer expression to an `i64`.
///
/// Accepts integer literals, unary minus, parentheses and the binary
/// operators `+`, `-`, `*`. Anything else is rejected with an error spanned
/// at the offending expression.
pub fn eval_int(expr: &Expr) -> syn::Result<i64> {
    let wide = eval_wide(expr)?;
    i64::try_from(wide).map_err(|_| {
        syn::Error::new(expr.span(), format!("integer `{}` does not fit in 64 bits", wide))
    })
}

fn eval_wide(expr: &Expr) -> syn::Result<i128> {
    match expr {
        Expr::Lit(lit) => match &lit.lit {
            Lit::Int(int) => int.base10_parse::<i128>(),
            other => Err(syn::Error::new(other.span(), "expected an integer literal")),
        },
        Expr::Unary(unary) if matches!(unary.op, UnOp::Neg(_)) => {
            let inner = eval_wide(&unary.expr)?;
            checked(expr, inner.checked_neg())
        }
        Expr::Paren(paren) => eval_wide(&paren.expr),
        Expr::Group(group) => eval_wide(&group.expr),
        Expr::Binary(bin) => {
            let lhs = eval_wide(&bin.left)?;
            let rhs = eval_wide(&bin.right)?;
            match bin.op {
                BinOp::Add(_) => checked(expr, lhs.checked_add(rhs)),
                BinOp::Sub(_) => checked(expr, lhs.checked_sub(rhs)),
                BinOp::Mul(_) => checked(expr, lhs.checked_mul(rhs)),
                _ => Err(syn::Error::new(bin.op.span(), "unsupported operator in integer literal")),
            }
        }
        other => Err(syn::Error::new(
            other.span(),
            "expected a constant integer expression",
        )),
    }
}

fn checked(expr: &Expr, value: Option<i128>) -> syn::Result<i128> {
    value.ok_or_else(|| syn::Error::new(expr.span(), "integer overflow"))
}

/// Split a 64-bit value into 16 little-endian nibbles (two's complement).
pub fn nibbles_of(value: i64) -> [u8; 16] {
    let bits = value as u64;
    let mut out = [0u8; 16];
    for (i, slot) in out.iter_mut().enumerate() {
        *slot = ((bits >> (i * 4)) & 0xF) as u8;
    }
    out
}

// =============================================================================
// Comma-separated List Parsing
// =============================================================================

/// `1, 2, -3` : the input of `ints![...]`
pub struct IntListInput {
    pub items: Vec<Expr>,
}

impl Parse for IntListInput {
    fn parse(input: ParseStream) -> syn::Result<Self> {
        let items = Punctuated::<Expr, Token![,]>::parse_terminated(input)?;
        Ok(IntListInput { items: items.into_iter().collect() })
    }
}

//! User-facing macro implementations
//!
//! | Macro | Usage | Purpose |
//! |-------|-------|---------|
//! | `#[derive(TypeValue)]` | on struct/enum | Make a type a value of the type kind |
//! | `make_routing_stream!` | type position | Hash stream for a qualified name |
//! | `int!` | type position | Integer literal as a type-level integer |
//! | `ints!` | type position | Integer list literal |

mod int_lit;
pub mod type_value;

// Re-export all public items
pub use int_lit::{expand_int, expand_ints};
pub use type_value::{expand_derive_type_value, expand_make_routing_stream};

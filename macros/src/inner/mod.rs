// Internal macros: generators for lookup tables and type aliases used
// inside the root crate only.

pub mod nibble_table;
pub mod peano;

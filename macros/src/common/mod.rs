// Common utilities shared between internal and user-facing macros
//
// This module contains:
// - parse_utils: integer expression evaluation and literal lists

mod parse_utils;

pub use parse_utils::*;

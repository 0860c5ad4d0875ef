//! Typed ANSI/VT output commands: structs that encode to escape sequences
//! via [`vtansi::Encode`] rather than raw byte strings.

pub mod clear;
pub mod cursor;
pub mod mode;
pub mod query;
pub mod screen;
pub mod window;

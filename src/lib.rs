//! Library entrypoint for `shwords`.
//!
//! The crate exposes a POSIX-style shell word lexer plus the inverse quoting
//! helpers used to build command lines that lex back to the same words.

pub mod lexer;

pub use lexer::{join, quote, split, split_with};

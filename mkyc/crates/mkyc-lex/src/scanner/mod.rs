//! Scanner module.
//!
//! The scanner is split into small, focused components:
//! - `core` - `Scanner` struct, constructors and dispatch
//! - `identifier` - identifier and keyword lexing
//! - `number` - integer literal lexing
//! - `operator` - operator lexing
//! - `comment` - line and block comment lexing

mod comment;
mod core;
mod identifier;
mod number;
mod operator;

pub use core::{tokenize, Scanner};

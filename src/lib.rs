//! Shell-style splitting of a single line into argv tokens.
//!
//! The core is [`tokenizer::tokenize`]. [`reader`] supplies a line from any
//! byte stream and [`demo`] formats results for the command line tool.

pub mod demo;
pub mod error;
pub mod reader;
pub mod tokenizer;

pub use error::{ReadLineError, TokenizeError};
pub use tokenizer::tokenize;

//! Line tokenizing module.
//!
//! Splits a single line into argv-style tokens: unescaped spaces separate
//! tokens, double quotes group characters (spaces included) and a backslash
//! takes away the special meaning of the character after it.

use crate::error::TokenizeError;
use tracing::{debug, trace};

// --- Constants ---
pub const SPACE: char = ' ';
pub const DOUBLE_QUOTE: char = '"';
pub const BACKSLASH: char = '\\';

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum State {
    Normal,
    InQuotes,
    Escaped,
    EscapedInQuotes,
}

/// Scan state for one `tokenize` call.
struct Tokenizer {
    state: State,
    current: String,
    /// Set once a quoted region closes, so an empty `""` still yields a token.
    quoted: bool,
    tokens: Vec<String>,
}

impl Tokenizer {
    fn new() -> Self {
        Self {
            state: State::Normal,
            current: String::new(),
            quoted: false,
            tokens: Vec::new(),
        }
    }

    fn step(&mut self, c: char) {
        self.state = match (self.state, c) {
            (State::Normal, SPACE) => {
                self.flush();
                State::Normal
            }
            (State::Normal, DOUBLE_QUOTE) => State::InQuotes,
            (State::Normal, BACKSLASH) => State::Escaped,
            (State::Normal, c) => {
                self.current.push(c);
                State::Normal
            }

            (State::InQuotes, DOUBLE_QUOTE) => {
                self.quoted = true;
                State::Normal
            }
            (State::InQuotes, BACKSLASH) => State::EscapedInQuotes,
            (State::InQuotes, c) => {
                self.current.push(c);
                State::InQuotes
            }

            (State::Escaped, c) => {
                self.current.push(c);
                State::Normal
            }
            (State::EscapedInQuotes, c) => {
                self.current.push(c);
                State::InQuotes
            }
        };
    }

    /// Pushes the pending token, if there is one, and starts a new one.
    fn flush(&mut self) {
        if self.current.is_empty() && !self.quoted {
            return;
        }
        let token = std::mem::take(&mut self.current);
        trace!(token = %token, "token");
        self.tokens.push(token);
        self.quoted = false;
    }

    fn finish(mut self) -> Result<Vec<String>, TokenizeError> {
        match self.state {
            State::InQuotes => Err(TokenizeError::UnmatchedQuote),
            State::Escaped | State::EscapedInQuotes => Err(TokenizeError::IncompleteEscape),
            State::Normal => {
                self.flush();
                Ok(self.tokens)
            }
        }
    }
}

/// Splits `line` into tokens, respecting double quotes and backslash escapes.
///
/// Adjacent quoted and unquoted runs with no space between them form one
/// token. Returns `Err` when the line ends inside quotes or right after a
/// backslash; no partial token list is returned in that case.
///
/// # Examples
///
/// ```
/// use argv_split::tokenizer::tokenize;
///
/// let tokens = tokenize(r#"Hello world "as is...""#).unwrap();
/// assert_eq!(tokens, vec!["Hello", "world", "as is..."]);
/// ```
pub fn tokenize(line: &str) -> Result<Vec<String>, TokenizeError> {
    let mut tokenizer = Tokenizer::new();
    for c in line.chars() {
        tokenizer.step(c);
    }
    tokenizer.finish().inspect_err(|e| debug!(line, error = %e, "failed to tokenize"))
}

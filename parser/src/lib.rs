//! Tokenizer for `minilog` format strings.
//!
//! The tokenizer is streaming: it pulls one byte at a time out of any `Iterator<Item = u8>` and
//! never looks back, so it works just as well on a `&str` as on a string that lives in a separate
//! read-only memory that can only be read byte by byte. It is shared by the `minilog` runtime,
//! which renders each [`Token`] as soon as it is produced, and by the `minilog` macros, which use
//! it to check format strings at compile time.
//!
//! The tokenizer is total: any byte sequence is accepted. Constructs that the macros reject
//! (unknown specifiers, a dangling `%` or `\`) come out as [`Specifier::Unknown`] and
//! [`Token::Truncated`] respectively.

#![cfg_attr(not(test), no_std)]

mod types;

pub use crate::types::{ArgKind, Qualifier, Specifier};

/// A `%` conversion, e.g. `%*s` or `%lx`.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Conversion {
    pub qualifier: Qualifier,
    pub specifier: Specifier,
}

/// A piece of a format string.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Token {
    /// A byte to emit as is. Escaped bytes (`\%`) come out as literals too.
    Literal(u8),
    /// A `%` conversion.
    Conversion(Conversion),
    /// The input ended in the middle of an escape sequence or a conversion. Always the last token.
    Truncated,
}

/// Streaming tokenizer over the bytes of a format string.
///
/// The input ends when the iterator returns `None`; sources that use a NUL terminator are
/// expected to stop yielding at the NUL.
pub struct Tokens<I> {
    bytes: I,
    done: bool,
}

impl<I> Tokens<I>
where
    I: Iterator<Item = u8>,
{
    pub fn new(bytes: I) -> Self {
        Self { bytes, done: false }
    }

    fn conversion(&mut self) -> Token {
        let mut byte = match self.bytes.next() {
            Some(byte) => byte,
            None => return Token::Truncated,
        };

        let qualifier = match byte {
            b'*' | b'l' => {
                let qualifier = if byte == b'*' {
                    Qualifier::FromArgument
                } else {
                    Qualifier::Wide
                };
                byte = match self.bytes.next() {
                    Some(byte) => byte,
                    None => return Token::Truncated,
                };
                qualifier
            }
            b'0'..=b'9' => {
                let mut width = 0usize;
                while byte.is_ascii_digit() {
                    width = width
                        .saturating_mul(10)
                        .saturating_add(usize::from(byte - b'0'));
                    byte = match self.bytes.next() {
                        Some(byte) => byte,
                        None => return Token::Truncated,
                    };
                }
                Qualifier::Width(width)
            }
            _ => Qualifier::None,
        };

        Token::Conversion(Conversion {
            qualifier,
            specifier: Specifier::from_byte(byte),
        })
    }
}

impl<I> Iterator for Tokens<I>
where
    I: Iterator<Item = u8>,
{
    type Item = Token;

    fn next(&mut self) -> Option<Token> {
        if self.done {
            return None;
        }

        let byte = match self.bytes.next() {
            Some(byte) => byte,
            None => {
                self.done = true;
                return None;
            }
        };

        let token = match byte {
            b'\\' => match self.bytes.next() {
                Some(byte) => Token::Literal(byte),
                None => Token::Truncated,
            },
            b'%' => self.conversion(),
            byte => Token::Literal(byte),
        };

        if token == Token::Truncated {
            self.done = true;
        }
        Some(token)
    }
}

/// Tokenizes `format`.
pub fn tokens(format: &str) -> Tokens<core::iter::Copied<core::slice::Iter<'_, u8>>> {
    Tokens::new(format.as_bytes().iter().copied())
}

/// Severity of a log statement, and threshold of a logger.
///
/// A statement at level `L` is emitted by a logger with threshold `T` iff `L` is not
/// [`Level::NoOutput`] and `L <= T`.
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
#[repr(u8)]
pub enum Level {
    NoOutput = 0,
    Error = 1,
    Warning = 2,
    Info = 3,
    Debug = 4,
    Verbose = 5,
}

impl Level {
    /// Maps any integer onto a level, saturating at both ends.
    pub fn clamped(level: i32) -> Self {
        match level {
            i32::MIN..=0 => Level::NoOutput,
            1 => Level::Error,
            2 => Level::Warning,
            3 => Level::Info,
            4 => Level::Debug,
            _ => Level::Verbose,
        }
    }

    /// Parses the names accepted by `MINILOG_LEVEL`: `off` (or `none`), `error`, `warn` (or
    /// `warning`), `info`, `debug`, `verbose`.
    pub fn from_name(name: &str) -> Option<Self> {
        Some(match name {
            "off" | "none" => Level::NoOutput,
            "error" => Level::Error,
            "warn" | "warning" => Level::Warning,
            "info" => Level::Info,
            "debug" => Level::Debug,
            "verbose" => Level::Verbose,
            _ => return None,
        })
    }

    /// Label written in front of messages of this level.
    pub fn prefix(self) -> &'static str {
        match self {
            Level::Error => "ERROR: ",
            Level::Warning => "WARNING: ",
            Level::Debug => "debug: ",
            Level::Verbose => "verbose: ",
            Level::NoOutput | Level::Info => "",
        }
    }

    /// Whether a statement at this level passes a logger whose threshold is `threshold`.
    pub fn passes(self, threshold: Level) -> bool {
        self != Level::NoOutput && self <= threshold
    }
}

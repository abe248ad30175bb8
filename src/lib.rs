//! A printf-style logging facility for resource-constrained devices, like microcontrollers.
//!
//! Messages are rendered one byte at a time straight into a [`Write`] sink: no intermediate
//! string is built and nothing is allocated. Format strings can live in ordinary memory or in a
//! separate read-only memory that is only reachable through a byte accessor ([`FlashStr`]).
//!
//! # Format strings
//!
//! | conversion | argument | output |
//! |---|---|---|
//! | `%%` | none | `%` |
//! | `%s` | `&str` or `Option<&str>` | the text; `%8s` left-pads to 8 bytes, `None` writes nothing |
//! | `%d` `%i` | integer | signed decimal |
//! | `%u` | integer | unsigned decimal |
//! | `%x` / `%X` | integer | hexadecimal / `0x` + hexadecimal |
//! | `%b` / `%B` | integer | binary / `0b` + binary |
//! | `%c` | `char` or integer | the character / the low byte |
//! | `%p` | pointer | address in hexadecimal |
//! | `%t` / `%T` | `bool` or integer | `T`/`F` / `true`/`false`; only 1 is true |
//! | `%f` | float | shortest decimal that round-trips |
//! | `%m` / `%M` | `&[u8]` | hex dump of the first width bytes / address + `: ` + hex dump |
//!
//! Integer conversions see the low 32 bits of their argument; with the `l` qualifier (`%ld`,
//! `%lx`, ...) they see all 64. A decimal width (`%4m`) or `*` (`%*s`, width taken from the
//! argument list) sets the padding width of `%s` and the byte count of `%m`/`%M`; without a width
//! `%m` dumps nothing. A `\` makes the following character literal: `\%`.
//!
//! # Logging
//!
//! ```
//! use minilog::{sink::CharSink, Level, Logging};
//!
//! fn uart_tx(_byte: u8) { /* write to the data register */ }
//!
//! let mut log = Logging::new(Level::Warning, CharSink(uart_tx));
//! let buf = [0x01u8, 0xab, 0x00];
//! minilog::warn!(log, "rx %3m (%u bytes)\r\n", &buf, buf.len());
//! minilog::info!(log, "filtered out\r\n");
//! ```
//!
//! The macros check the format string and the number and kind of arguments at compile time. The
//! `MINILOG_LEVEL` environment variable (`off`, `error`, `warn`, `info`, `debug`, `verbose`)
//! removes statements above that level from the binary altogether.

#![cfg_attr(not(test), no_std)]

#[cfg(feature = "alloc")]
extern crate alloc;

mod arg;
#[doc(hidden)]
pub mod export;
pub mod formatter;
mod logging;
pub mod sink;
pub mod source;

pub use minilog_macros::{debug, debug_cont, error, info, verbose, warn, write};
pub use minilog_parser::Level;

pub use crate::{
    arg::{Arg, Args},
    logging::{Logging, CR},
    source::{FlashStr, IntoSource, RamStr},
};

/// Trait for log destinations.
///
/// The formatter calls `write_byte` for every byte as it produces it; a single log statement
/// results in an arbitrary number of calls. Writing must not fail.
pub trait Write {
    /// Writes one byte to the destination.
    fn write_byte(&mut self, byte: u8);

    /// Writes `bytes` to the destination; override when the destination can take them at once.
    fn write_bytes(&mut self, bytes: &[u8]) {
        for &byte in bytes {
            self.write_byte(byte)
        }
    }
}

impl<W> Write for &mut W
where
    W: Write + ?Sized,
{
    fn write_byte(&mut self, byte: u8) {
        (**self).write_byte(byte)
    }

    fn write_bytes(&mut self, bytes: &[u8]) {
        (**self).write_bytes(bytes)
    }
}

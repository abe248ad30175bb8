//! Ready-made [`Write`] implementations.

use crate::Write;

/// Sink that drops everything written to it.
#[derive(Clone, Copy, Debug, Default)]
pub struct Discard;

impl Write for Discard {
    fn write_byte(&mut self, _: u8) {}
}

/// Sink that hands every byte to a function, e.g. one that pushes it into a UART data register.
#[derive(Clone, Copy)]
pub struct CharSink(pub fn(u8));

impl Write for CharSink {
    fn write_byte(&mut self, byte: u8) {
        (self.0)(byte)
    }
}

/// Sink that collects bytes into a caller-provided buffer and hands them over a line at a time.
///
/// The buffered bytes are passed to the callback right after a `\n` is written, or as soon as the
/// buffer is full. Long lines are therefore handed over in buffer-sized pieces.
pub struct LineBuffered<'b, F>
where
    F: FnMut(&[u8]),
{
    buffer: &'b mut [u8],
    len: usize,
    on_line: F,
}

impl<'b, F> LineBuffered<'b, F>
where
    F: FnMut(&[u8]),
{
    /// A zero-length `buffer` hands over every byte on its own.
    pub fn new(buffer: &'b mut [u8], on_line: F) -> Self {
        Self {
            buffer,
            len: 0,
            on_line,
        }
    }

    /// Hands over any pending bytes, even without a trailing newline.
    pub fn flush(&mut self) {
        if self.len != 0 {
            (self.on_line)(&self.buffer[..self.len]);
            self.len = 0;
        }
    }

    /// Number of bytes waiting for a newline
    pub fn pending(&self) -> usize {
        self.len
    }
}

impl<F> Write for LineBuffered<'_, F>
where
    F: FnMut(&[u8]),
{
    fn write_byte(&mut self, byte: u8) {
        if self.buffer.is_empty() {
            (self.on_line)(&[byte]);
            return;
        }

        self.buffer[self.len] = byte;
        self.len += 1;
        if byte == b'\n' || self.len == self.buffer.len() {
            self.flush();
        }
    }
}

#[cfg(feature = "alloc")]
impl Write for alloc::vec::Vec<u8> {
    fn write_byte(&mut self, byte: u8) {
        self.push(byte)
    }

    fn write_bytes(&mut self, bytes: &[u8]) {
        self.extend_from_slice(bytes)
    }
}

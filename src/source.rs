//! Where format strings are read from.
//!
//! A format string lives either in ordinary memory ([`RamStr`]) or in a separate read-only memory
//! that can only be read one byte at a time through a dedicated accessor ([`FlashStr`]), like the
//! program memory of Harvard-architecture microcontrollers. Both are plain byte iterators that
//! stop at the terminator, so the formatter is written once for both.

use core::{iter::FusedIterator, marker::PhantomData};

/// Reads one byte at `addr` from the read-only memory region
pub type ReadByte = unsafe fn(addr: *const u8) -> u8;

/// Conversion into a format string reader.
///
/// The logging API takes `impl IntoSource`, so the type of the format value decides which reader
/// is used.
pub trait IntoSource {
    type Source: Iterator<Item = u8>;

    fn into_source(self) -> Self::Source;
}

/// Format string in ordinary memory.
///
/// Ends at the end of the slice or at the first NUL byte, whichever comes first.
#[derive(Clone, Debug)]
pub struct RamStr<'a> {
    bytes: &'a [u8],
}

impl<'a> RamStr<'a> {
    pub fn new(bytes: &'a [u8]) -> Self {
        Self { bytes }
    }
}

impl Iterator for RamStr<'_> {
    type Item = u8;

    fn next(&mut self) -> Option<u8> {
        match self.bytes.split_first() {
            Some((&byte, rest)) if byte != 0 => {
                self.bytes = rest;
                Some(byte)
            }
            _ => {
                self.bytes = &[];
                None
            }
        }
    }
}

impl FusedIterator for RamStr<'_> {}

/// NUL-terminated format string in a memory region that is read through an accessor function.
#[derive(Clone, Copy, Debug)]
pub struct FlashStr<'a> {
    addr: *const u8,
    read: ReadByte,
    _region: PhantomData<&'a [u8]>,
}

impl<'a> FlashStr<'a> {
    /// # Safety
    ///
    /// `read` must be able to read every byte from `addr` up to and including the first NUL byte,
    /// and that region must not change while this value (or any copy of it) is alive.
    pub const unsafe fn new(addr: *const u8, read: ReadByte) -> Self {
        Self {
            addr,
            read,
            _region: PhantomData,
        }
    }

    /// Wraps a NUL-terminated byte string that is addressable like ordinary memory, e.g. flash
    /// mapped into the address space. Reads go through [`read_mapped`].
    ///
    /// Returns `None` if `bytes` does not contain a NUL byte.
    pub fn mapped(bytes: &'a [u8]) -> Option<Self> {
        if bytes.contains(&0) {
            // SAFETY: the slice is readable and contains the terminator
            Some(unsafe { Self::new(bytes.as_ptr(), read_mapped) })
        } else {
            None
        }
    }

    pub fn addr(&self) -> *const u8 {
        self.addr
    }
}

/// Volatile read of memory-mapped read-only memory.
///
/// # Safety
///
/// `addr` must be valid for reads.
pub unsafe fn read_mapped(addr: *const u8) -> u8 {
    core::ptr::read_volatile(addr)
}

/// Reader over a [`FlashStr`].
#[derive(Clone, Debug)]
pub struct FlashReader<'a> {
    next: *const u8,
    read: ReadByte,
    done: bool,
    _region: PhantomData<&'a [u8]>,
}

impl Iterator for FlashReader<'_> {
    type Item = u8;

    fn next(&mut self) -> Option<u8> {
        if self.done {
            return None;
        }

        // SAFETY: `FlashStr::new` guarantees that every byte up to the NUL is readable, and we
        // stop at the NUL
        let byte = unsafe { (self.read)(self.next) };
        if byte == 0 {
            self.done = true;
            return None;
        }
        self.next = self.next.wrapping_add(1);
        Some(byte)
    }
}

impl FusedIterator for FlashReader<'_> {}

impl<'a> IntoSource for RamStr<'a> {
    type Source = RamStr<'a>;

    fn into_source(self) -> RamStr<'a> {
        self
    }
}

impl<'a> IntoSource for &'a str {
    type Source = RamStr<'a>;

    fn into_source(self) -> RamStr<'a> {
        RamStr::new(self.as_bytes())
    }
}

impl<'a> IntoSource for &'a [u8] {
    type Source = RamStr<'a>;

    fn into_source(self) -> RamStr<'a> {
        RamStr::new(self)
    }
}

impl<'a, const N: usize> IntoSource for &'a [u8; N] {
    type Source = RamStr<'a>;

    fn into_source(self) -> RamStr<'a> {
        RamStr::new(self)
    }
}

impl<'a> IntoSource for FlashStr<'a> {
    type Source = FlashReader<'a>;

    fn into_source(self) -> FlashReader<'a> {
        FlashReader {
            next: self.addr,
            read: self.read,
            done: false,
            _region: PhantomData,
        }
    }
}

impl<'a> IntoSource for &FlashStr<'a> {
    type Source = FlashReader<'a>;

    fn into_source(self) -> FlashReader<'a> {
        (*self).into_source()
    }
}

#[cfg(test)]
mod tests {
    use core::cell::Cell;

    use super::*;

    #[test]
    fn ram_stops_at_nul_or_end() {
        assert_eq!("abc".into_source().collect::<Vec<_>>(), b"abc");
        assert_eq!(b"ab\0c".into_source().collect::<Vec<_>>(), b"ab");
        assert_eq!("".into_source().next(), None);
    }

    #[test]
    fn flash_reads_through_the_accessor() {
        thread_local! {
            static READS: Cell<usize> = Cell::new(0);
        }

        unsafe fn counting_read(addr: *const u8) -> u8 {
            READS.with(|reads| reads.set(reads.get() + 1));
            core::ptr::read(addr)
        }

        static TEXT: [u8; 4] = *b"hi!\0";
        let flash = unsafe { FlashStr::new(TEXT.as_ptr(), counting_read) };
        let mut reader = flash.into_source();
        assert_eq!(reader.by_ref().collect::<Vec<_>>(), b"hi!");
        // never reads past the terminator, even when polled again
        assert_eq!(reader.next(), None);
        assert_eq!(READS.with(Cell::get), 4);
    }

    #[test]
    fn mapped_requires_a_terminator() {
        assert!(FlashStr::mapped(b"no terminator").is_none());
        let flash = FlashStr::mapped(b"ok\0").unwrap();
        assert_eq!(flash.into_source().collect::<Vec<_>>(), b"ok");
    }
}

use core::slice;

/// A formatting argument, tagged with its type.
///
/// Arguments are passed to the logger as a slice of `Arg`s. Every conversion in the format
/// string takes the next argument out of that slice, so the order matters, but the tag does not
/// have to match the conversion exactly: numeric tags are converted into one another the way a C
/// cast would, and a conversion that cannot render the argument it was given (e.g. `%d` with a
/// string) consumes it and renders nothing.
///
/// Values usually get here through the `From` impls or through the logging macros, which pick a
/// constructor based on the conversion.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Arg<'a> {
    Int(i64),
    Uint(u64),
    Float(f64),
    Char(char),
    Bool(bool),
    /// `None` is the equivalent of a null string pointer; `%s` renders nothing for it
    Str(Option<&'a str>),
    Bytes(&'a [u8]),
    Ptr(usize),
}

impl<'a> Arg<'a> {
    /// Integer view of the argument, `None` for strings and byte sequences
    pub(crate) fn integer(self) -> Option<i64> {
        Some(match self {
            Arg::Int(x) => x,
            Arg::Uint(x) => x as i64,
            // saturating; NaN becomes 0
            Arg::Float(x) => x as i64,
            Arg::Char(c) => i64::from(u32::from(c)),
            Arg::Bool(b) => i64::from(b),
            Arg::Ptr(p) => p as i64,
            Arg::Str(_) | Arg::Bytes(_) => return None,
        })
    }

    pub(crate) fn float(self) -> Option<f64> {
        match self {
            Arg::Float(x) => Some(x),
            Arg::Uint(x) => Some(x as f64),
            other => other.integer().map(|x| x as f64),
        }
    }

    pub(crate) fn text(self) -> Option<&'a str> {
        match self {
            Arg::Str(s) => s,
            _ => None,
        }
    }

    pub(crate) fn bytes(self) -> Option<&'a [u8]> {
        match self {
            Arg::Bytes(b) => Some(b),
            Arg::Str(Some(s)) => Some(s.as_bytes()),
            _ => None,
        }
    }

    pub(crate) fn address(self) -> Option<usize> {
        match self {
            Arg::Ptr(p) => Some(p),
            Arg::Bytes(b) => Some(b.as_ptr() as usize),
            Arg::Str(Some(s)) => Some(s.as_ptr() as usize),
            Arg::Str(None) => Some(0),
            other => other.integer().map(|x| x as usize),
        }
    }
}

macro_rules! from_signed {
    ($($ty:ty),*) => {
        $(
            impl From<$ty> for Arg<'_> {
                fn from(x: $ty) -> Self {
                    Arg::Int(x as i64)
                }
            }
        )*
    };
}

macro_rules! from_unsigned {
    ($($ty:ty),*) => {
        $(
            impl From<$ty> for Arg<'_> {
                fn from(x: $ty) -> Self {
                    Arg::Uint(x as u64)
                }
            }
        )*
    };
}

from_signed!(i8, i16, i32, i64, isize);
from_unsigned!(u8, u16, u32, u64, usize);

impl From<f32> for Arg<'_> {
    fn from(x: f32) -> Self {
        Arg::Float(f64::from(x))
    }
}

impl From<f64> for Arg<'_> {
    fn from(x: f64) -> Self {
        Arg::Float(x)
    }
}

impl From<bool> for Arg<'_> {
    fn from(b: bool) -> Self {
        Arg::Bool(b)
    }
}

impl From<char> for Arg<'_> {
    fn from(c: char) -> Self {
        Arg::Char(c)
    }
}

impl<'a> From<&'a str> for Arg<'a> {
    fn from(s: &'a str) -> Self {
        Arg::Str(Some(s))
    }
}

impl<'a> From<Option<&'a str>> for Arg<'a> {
    fn from(s: Option<&'a str>) -> Self {
        Arg::Str(s)
    }
}

impl<'a> From<&'a [u8]> for Arg<'a> {
    fn from(b: &'a [u8]) -> Self {
        Arg::Bytes(b)
    }
}

impl<'a, const N: usize> From<&'a [u8; N]> for Arg<'a> {
    fn from(b: &'a [u8; N]) -> Self {
        Arg::Bytes(b)
    }
}

impl<T: ?Sized> From<*const T> for Arg<'_> {
    fn from(p: *const T) -> Self {
        Arg::Ptr(p.cast::<u8>() as usize)
    }
}

impl<T: ?Sized> From<*mut T> for Arg<'_> {
    fn from(p: *mut T) -> Self {
        Arg::Ptr(p.cast::<u8>() as usize)
    }
}

/// Consume-once cursor over the arguments of one formatting call.
///
/// Once the arguments run out, every further conversion renders nothing.
#[derive(Clone, Debug)]
pub struct Args<'s, 'a> {
    iter: slice::Iter<'s, Arg<'a>>,
}

impl<'s, 'a> Args<'s, 'a> {
    pub fn new(args: &'s [Arg<'a>]) -> Self {
        Self { iter: args.iter() }
    }

    /// A cursor with no arguments
    pub fn empty() -> Self {
        Self::new(&[])
    }

    /// Number of arguments not consumed yet
    pub fn remaining(&self) -> usize {
        self.iter.len()
    }
}

impl<'a> Iterator for Args<'_, 'a> {
    type Item = Arg<'a>;

    fn next(&mut self) -> Option<Arg<'a>> {
        self.iter.next().copied()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.iter.size_hint()
    }
}

impl ExactSizeIterator for Args<'_, '_> {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn conversions() {
        assert_eq!(Arg::from(-1i8), Arg::Int(-1));
        assert_eq!(Arg::from(200u8), Arg::Uint(200));
        assert_eq!(Arg::from(1.5f32), Arg::Float(1.5));
        assert_eq!(Arg::from("hi"), Arg::Str(Some("hi")));
        assert_eq!(Arg::from(None::<&str>), Arg::Str(None));
        assert_eq!(Arg::from(&[1u8, 2]), Arg::Bytes(&[1, 2]));
        assert_eq!(Arg::from(0x20 as *const u32), Arg::Ptr(0x20));
    }

    #[test]
    fn numeric_views() {
        assert_eq!(Arg::Uint(u64::MAX).integer(), Some(-1));
        assert_eq!(Arg::Bool(true).integer(), Some(1));
        assert_eq!(Arg::Char('A').integer(), Some(65));
        assert_eq!(Arg::Float(-2.9).integer(), Some(-2));
        assert_eq!(Arg::Float(f64::NAN).integer(), Some(0));
        assert_eq!(Arg::Str(Some("1")).integer(), None);
        assert_eq!(Arg::Int(3).float(), Some(3.0));
        assert_eq!(Arg::Bytes(&[]).float(), None);
    }

    #[test]
    fn cursor_is_consume_once() {
        let args = [Arg::Int(1), Arg::Int(2)];
        let mut cursor = Args::new(&args);
        assert_eq!(cursor.remaining(), 2);
        assert_eq!(cursor.next(), Some(Arg::Int(1)));
        assert_eq!(cursor.next(), Some(Arg::Int(2)));
        assert_eq!(cursor.next(), None);
        assert_eq!(cursor.remaining(), 0);
    }
}

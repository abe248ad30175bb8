//! Implementation details of the logging macros. Not covered by semver guarantees.
//!
//! The macros wrap every argument in the constructor that matches its conversion, so passing,
//! say, a string to `%d` is a type error at the call site instead of garbled output.

use crate::{arg::Args, formatter, source::IntoSource, Arg, Write};

mod sealed {
    pub trait Sealed {}
}

/// Values accepted by `%d %i %u %x %X %b %B` and by `*`
pub trait Integer: sealed::Sealed {
    fn into_arg(self) -> Arg<'static>;
}

/// Values accepted by `%c`
pub trait Character {
    fn into_arg(self) -> Arg<'static>;
}

/// Values accepted by `%t %T`
pub trait Flag {
    fn into_arg(self) -> Arg<'static>;
}

/// Values accepted by `%s`
pub trait Text<'a> {
    fn into_arg(self) -> Arg<'a>;
}

/// Values accepted by `%p`
pub trait Pointer {
    fn into_arg(self) -> Arg<'static>;
}

macro_rules! integers {
    ($($ty:ty),*) => {
        $(
            impl sealed::Sealed for $ty {}

            impl Integer for $ty {
                fn into_arg(self) -> Arg<'static> {
                    Arg::from(self)
                }
            }

            impl Character for $ty {
                fn into_arg(self) -> Arg<'static> {
                    Arg::from(self)
                }
            }

            impl Flag for $ty {
                fn into_arg(self) -> Arg<'static> {
                    Arg::from(self)
                }
            }
        )*
    };
}

integers!(i8, i16, i32, i64, isize, u8, u16, u32, u64, usize);

impl Character for char {
    fn into_arg(self) -> Arg<'static> {
        Arg::Char(self)
    }
}

impl Flag for bool {
    fn into_arg(self) -> Arg<'static> {
        Arg::Bool(self)
    }
}

impl<'a> Text<'a> for &'a str {
    fn into_arg(self) -> Arg<'a> {
        Arg::Str(Some(self))
    }
}

impl<'a> Text<'a> for Option<&'a str> {
    fn into_arg(self) -> Arg<'a> {
        Arg::Str(self)
    }
}

impl<T: ?Sized> Pointer for *const T {
    fn into_arg(self) -> Arg<'static> {
        Arg::from(self)
    }
}

impl<T: ?Sized> Pointer for *mut T {
    fn into_arg(self) -> Arg<'static> {
        Arg::from(self)
    }
}

impl<T: ?Sized> Pointer for &T {
    fn into_arg(self) -> Arg<'static> {
        Arg::from(self as *const T)
    }
}

pub fn integer(x: impl Integer) -> Arg<'static> {
    x.into_arg()
}

pub fn character(x: impl Character) -> Arg<'static> {
    x.into_arg()
}

pub fn flag(x: impl Flag) -> Arg<'static> {
    x.into_arg()
}

pub fn float(x: impl Into<f64>) -> Arg<'static> {
    Arg::Float(x.into())
}

pub fn text<'a>(x: impl Text<'a>) -> Arg<'a> {
    x.into_arg()
}

pub fn bytes(x: &[u8]) -> Arg<'_> {
    Arg::Bytes(x)
}

pub fn pointer(x: impl Pointer) -> Arg<'static> {
    x.into_arg()
}

/// Target of `minilog::write!`
pub fn write<W>(mut sink: W, format: impl IntoSource, args: &[Arg<'_>])
where
    W: Write,
{
    formatter::emit(&mut sink, format, &mut Args::new(args))
}

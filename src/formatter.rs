use core::fmt::{self, Write as _};

use minilog_parser::{Conversion, Qualifier, Specifier, Token, Tokens};

use crate::{
    arg::{Arg, Args},
    source::IntoSource,
    Write,
};

/// Renders `format` into `sink`, taking the values of its conversions out of `args`.
///
/// Every byte is written to the sink as soon as it is known; nothing is buffered and nothing is
/// allocated. Bytes after a `\` are written as is. Conversions that cannot be rendered (unknown
/// specifier, missing argument, argument of an unsuitable type) write nothing, and a format
/// string that ends in the middle of a conversion or escape sequence simply ends there.
///
/// ```
/// use minilog::{formatter, Arg, Args, Write};
///
/// struct Uart(Vec<u8>);
///
/// impl Write for Uart {
///     fn write_byte(&mut self, byte: u8) {
///         self.0.push(byte)
///     }
/// }
///
/// let mut uart = Uart(Vec::new());
/// let args = [Arg::from("reg"), Arg::from(255)];
/// formatter::emit(&mut uart, "%s=%X", &mut Args::new(&args));
/// assert_eq!(uart.0, b"reg=0xff");
/// ```
pub fn emit<W, S>(sink: &mut W, format: S, args: &mut Args<'_, '_>)
where
    W: Write + ?Sized,
    S: IntoSource,
{
    let mut formatter = Formatter { sink, args };
    for token in Tokens::new(format.into_source()) {
        match token {
            Token::Literal(byte) => formatter.sink.write_byte(byte),
            Token::Conversion(conversion) => formatter.conversion(conversion),
            Token::Truncated => {}
        }
    }
}

struct Formatter<'f, 's, 'a, W: ?Sized> {
    sink: &'f mut W,
    args: &'f mut Args<'s, 'a>,
}

impl<W> Formatter<'_, '_, '_, W>
where
    W: Write + ?Sized,
{
    fn conversion(&mut self, conversion: Conversion) {
        let (width, wide) = match conversion.qualifier {
            Qualifier::None => (None, false),
            Qualifier::Width(width) => (Some(width), false),
            Qualifier::FromArgument => (Some(self.width_argument()), false),
            Qualifier::Wide => (None, true),
        };

        match conversion.specifier {
            Specifier::Percent => self.sink.write_byte(b'%'),
            Specifier::Unknown(_) => {}
            Specifier::Str => self.str(width),
            Specifier::Signed => {
                if let Some(x) = self.args.next().and_then(Arg::integer) {
                    let x = if wide { x } else { i64::from(x as i32) };
                    self.fmt(format_args!("{}", x));
                }
            }
            Specifier::Unsigned | Specifier::Hex | Specifier::PrefixedHex => {
                let prefix = match conversion.specifier {
                    Specifier::PrefixedHex => "0x",
                    _ => "",
                };
                let radix = match conversion.specifier {
                    Specifier::Unsigned => Radix::Decimal,
                    _ => Radix::Hexadecimal,
                };
                self.unsigned(prefix, radix, wide)
            }
            Specifier::Binary => self.unsigned("", Radix::Binary, wide),
            Specifier::PrefixedBinary => self.unsigned("0b", Radix::Binary, wide),
            Specifier::Char => self.char(),
            Specifier::Pointer => {
                if let Some(addr) = self.args.next().and_then(Arg::address) {
                    self.fmt(format_args!("{:x}", addr));
                }
            }
            Specifier::ShortBool => self.flag("T", "F"),
            Specifier::LongBool => self.flag("true", "false"),
            Specifier::Float => {
                if let Some(x) = self.args.next().and_then(Arg::float) {
                    self.sink.write_bytes(ryu::Buffer::new().format(x).as_bytes());
                }
            }
            Specifier::Bytes => self.bytes(width, false),
            Specifier::AddressedBytes => self.bytes(width, true),
        }
    }

    /// `*`: negative widths count as 0, a missing argument too
    fn width_argument(&mut self) -> usize {
        match self.args.next().and_then(Arg::integer) {
            Some(width) if width > 0 => usize::try_from(width).unwrap_or(usize::MAX),
            _ => 0,
        }
    }

    fn str(&mut self, width: Option<usize>) {
        let text = match self.args.next().and_then(Arg::text) {
            Some(text) => text,
            None => return,
        };

        let padding = width.unwrap_or(0).saturating_sub(text.len());
        for _ in 0..padding {
            self.sink.write_byte(b' ');
        }
        self.sink.write_bytes(text.as_bytes());
    }

    /// Narrow conversions see the low 32 bits of the argument, i.e. the two's complement bit
    /// pattern of negative values
    fn unsigned(&mut self, prefix: &str, radix: Radix, wide: bool) {
        let x = match self.args.next().and_then(Arg::integer) {
            Some(x) if wide => x as u64,
            Some(x) => u64::from(x as u32),
            None => return,
        };

        self.sink.write_bytes(prefix.as_bytes());
        match radix {
            Radix::Decimal => self.fmt(format_args!("{}", x)),
            Radix::Hexadecimal => self.fmt(format_args!("{:x}", x)),
            Radix::Binary => self.fmt(format_args!("{:b}", x)),
        }
    }

    fn char(&mut self) {
        match self.args.next() {
            Some(Arg::Char(c)) => {
                let mut buf = [0; 4];
                self.sink.write_bytes(c.encode_utf8(&mut buf).as_bytes());
            }
            Some(arg) => {
                if let Some(x) = arg.integer() {
                    self.sink.write_byte(x as u8);
                }
            }
            None => {}
        }
    }

    /// Only exactly 1 is true
    fn flag(&mut self, yes: &str, no: &str) {
        if let Some(x) = self.args.next().and_then(Arg::integer) {
            let text = if x == 1 { yes } else { no };
            self.sink.write_bytes(text.as_bytes());
        }
    }

    /// The width is the number of bytes to dump, capped at the length of the sequence. Without
    /// one nothing is dumped.
    fn bytes(&mut self, width: Option<usize>, with_address: bool) {
        let bytes = match self.args.next().and_then(Arg::bytes) {
            Some(bytes) => bytes,
            None => return,
        };

        if with_address {
            self.fmt(format_args!("{:x}: ", bytes.as_ptr() as usize));
        }

        let count = width.unwrap_or(0).min(bytes.len());
        for byte in &bytes[..count] {
            self.fmt(format_args!("{:02x}", byte));
        }
    }

    fn fmt(&mut self, args: fmt::Arguments<'_>) {
        FmtWrite { sink: &mut *self.sink }.write_fmt(args).ok();
    }
}

enum Radix {
    Decimal,
    Hexadecimal,
    Binary,
}

/// Adapter that lets `core::fmt` render numbers straight into the sink
struct FmtWrite<'w, W: ?Sized> {
    sink: &'w mut W,
}

impl<W> fmt::Write for FmtWrite<'_, W>
where
    W: Write + ?Sized,
{
    fn write_str(&mut self, s: &str) -> fmt::Result {
        self.sink.write_bytes(s.as_bytes());
        Ok(())
    }
}

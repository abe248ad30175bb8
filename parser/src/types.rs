/// The byte right after `%` (and after the optional [`Qualifier`]).
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Specifier {
    /// `%%`
    Percent,
    /// `%s`
    Str,
    /// `%d` OR `%i`
    Signed,
    /// `%u`
    Unsigned,
    /// `%x`
    Hex,
    /// `%X`, like `%x` but prefixed with `0x`
    PrefixedHex,
    /// `%b`
    Binary,
    /// `%B`, like `%b` but prefixed with `0b`
    PrefixedBinary,
    /// `%c`
    Char,
    /// `%p`
    Pointer,
    /// `%t`, `T` or `F`
    ShortBool,
    /// `%T`, `true` or `false`
    LongBool,
    /// `%f`
    Float,
    /// `%m`, hex dump of a byte sequence
    Bytes,
    /// `%M`, like `%m` but prefixed with the address of the sequence
    AddressedBytes,
    /// Anything else; reads no argument and renders nothing
    Unknown(u8),
}

/// The kind of argument a [`Specifier`] consumes.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ArgKind {
    Text,
    Signed,
    Unsigned,
    Float,
    Char,
    Pointer,
    Flag,
    Bytes,
}

impl Specifier {
    pub fn from_byte(byte: u8) -> Self {
        match byte {
            b'%' => Specifier::Percent,
            b's' => Specifier::Str,
            b'd' | b'i' => Specifier::Signed,
            b'u' => Specifier::Unsigned,
            b'x' => Specifier::Hex,
            b'X' => Specifier::PrefixedHex,
            b'b' => Specifier::Binary,
            b'B' => Specifier::PrefixedBinary,
            b'c' => Specifier::Char,
            b'p' => Specifier::Pointer,
            b't' => Specifier::ShortBool,
            b'T' => Specifier::LongBool,
            b'f' => Specifier::Float,
            b'm' => Specifier::Bytes,
            b'M' => Specifier::AddressedBytes,
            other => Specifier::Unknown(other),
        }
    }

    /// Returns the argument consumed by this specifier, `None` if it consumes nothing
    pub fn argument(self) -> Option<ArgKind> {
        Some(match self {
            Specifier::Percent | Specifier::Unknown(_) => return None,
            Specifier::Str => ArgKind::Text,
            Specifier::Signed
            | Specifier::Hex
            | Specifier::PrefixedHex
            | Specifier::Binary
            | Specifier::PrefixedBinary => ArgKind::Signed,
            Specifier::Unsigned => ArgKind::Unsigned,
            Specifier::Char => ArgKind::Char,
            Specifier::Pointer => ArgKind::Pointer,
            Specifier::ShortBool | Specifier::LongBool => ArgKind::Flag,
            Specifier::Float => ArgKind::Float,
            Specifier::Bytes | Specifier::AddressedBytes => ArgKind::Bytes,
        })
    }
}

/// The optional modifier between `%` and the [`Specifier`].
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Qualifier {
    None,
    /// A literal decimal run, e.g. `%12s`
    Width(usize),
    /// `%*s`: the width is the next argument
    FromArgument,
    /// `%ld`: use the 64-bit variant of a numeric specifier
    Wide,
}

impl Qualifier {
    /// Number of arguments consumed by the qualifier itself
    pub fn arguments(self) -> usize {
        match self {
            Qualifier::FromArgument => 1,
            _ => 0,
        }
    }
}

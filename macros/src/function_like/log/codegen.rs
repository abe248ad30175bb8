use minilog_parser::{ArgKind, Conversion, Specifier, Token};
use proc_macro2::TokenStream as TokenStream2;
use proc_macro_error2::abort;
use quote::quote_spanned;
use syn::{spanned::Spanned as _, Expr, LitStr};

pub(crate) struct Codegen {
    /// One `minilog::Arg` constructor call per formatting argument, in order
    pub(crate) exprs: Vec<TokenStream2>,
}

/// What a formatting argument is consumed by
#[derive(Clone, Copy, Debug, PartialEq)]
enum Slot {
    /// the `*` of `%*s`
    Width,
    Conversion(ArgKind),
}

impl Codegen {
    pub(crate) fn new(format_string: &LitStr, formatting_exprs: &[Expr]) -> Self {
        let slots = match slots(&format_string.value()) {
            Ok(slots) => slots,
            Err(e) => abort!(format_string, "{}", e),
        };

        if slots.len() != formatting_exprs.len() {
            abort!(
                format_string,
                "format string requires {} but {} supplied",
                plural(slots.len(), "argument", "arguments"),
                plural(formatting_exprs.len(), "was", "were"),
            );
        }

        let exprs = slots
            .iter()
            .zip(formatting_exprs)
            .map(|(slot, expr)| {
                let span = expr.span();
                match slot {
                    Slot::Width | Slot::Conversion(ArgKind::Signed | ArgKind::Unsigned) => {
                        quote_spanned!(span=> minilog::export::integer(#expr))
                    }
                    Slot::Conversion(ArgKind::Text) => {
                        quote_spanned!(span=> minilog::export::text(#expr))
                    }
                    Slot::Conversion(ArgKind::Float) => {
                        quote_spanned!(span=> minilog::export::float(#expr))
                    }
                    Slot::Conversion(ArgKind::Char) => {
                        quote_spanned!(span=> minilog::export::character(#expr))
                    }
                    Slot::Conversion(ArgKind::Pointer) => {
                        quote_spanned!(span=> minilog::export::pointer(#expr))
                    }
                    Slot::Conversion(ArgKind::Flag) => {
                        quote_spanned!(span=> minilog::export::flag(#expr))
                    }
                    Slot::Conversion(ArgKind::Bytes) => {
                        quote_spanned!(span=> minilog::export::bytes(#expr))
                    }
                }
            })
            .collect();

        Self { exprs }
    }
}

/// Lists the arguments `format` consumes, rejecting what the runtime would silently skip
fn slots(format: &str) -> Result<Vec<Slot>, String> {
    if format.contains('\0') {
        return Err("format string contains a NUL byte, which would end it early".into());
    }

    let mut slots = vec![];
    for token in minilog_parser::tokens(format) {
        match token {
            Token::Literal(_) => {}
            Token::Truncated => {
                return Err(
                    "format string ends in the middle of a conversion or escape sequence".into(),
                )
            }
            Token::Conversion(Conversion {
                qualifier,
                specifier,
            }) => {
                if let Specifier::Unknown(byte) = specifier {
                    return Err(format!(
                        "unknown conversion specifier `{}` (use `\\\\%` for a literal `%`)",
                        char::from(byte)
                    ));
                }
                for _ in 0..qualifier.arguments() {
                    slots.push(Slot::Width);
                }
                if let Some(kind) = specifier.argument() {
                    slots.push(Slot::Conversion(kind));
                }
            }
        }
    }
    Ok(slots)
}

fn plural(n: usize, singular: &str, plural: &str) -> String {
    if n == 1 {
        format!("{} {}", n, singular)
    } else {
        format!("{} {}", n, plural)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn slots_in_order() {
        assert_eq!(
            slots("%*s=%ld %% %3m"),
            Ok(vec![
                Slot::Width,
                Slot::Conversion(ArgKind::Text),
                Slot::Conversion(ArgKind::Signed),
                Slot::Conversion(ArgKind::Bytes),
            ])
        );
        assert_eq!(slots(r"100\% done"), Ok(vec![]));
    }

    #[test]
    fn rejects_what_the_runtime_skips() {
        assert!(slots("%q").is_err());
        assert!(slots("50%").is_err());
        assert!(slots(r"trailing \").is_err());
        assert!(slots("a\0b").is_err());
    }

    #[test]
    fn plurals() {
        assert_eq!(plural(1, "argument", "arguments"), "1 argument");
        assert_eq!(plural(0, "was", "were"), "0 were");
    }
}

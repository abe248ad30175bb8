use syn::{
    parse::{self, Parse, ParseStream},
    punctuated::Punctuated,
    Expr, LitStr, Token,
};

/// `target, "format string", args...`
///
/// `target` is the logger for the logging macros and the sink for `write!`.
pub(crate) struct Args {
    pub(crate) target: Expr,
    pub(crate) format_string: LitStr,
    pub(crate) formatting_args: Option<Punctuated<Expr, Token![,]>>,
}

impl Parse for Args {
    fn parse(input: ParseStream) -> parse::Result<Self> {
        let target = input.parse()?;
        let _comma: Token![,] = input.parse()?;
        Ok(Self {
            target,
            format_string: input.parse()?,
            formatting_args: if input.is_empty() {
                None
            } else {
                let _comma: Token![,] = input.parse()?;
                Some(Punctuated::parse_terminated(input)?)
            },
        })
    }
}

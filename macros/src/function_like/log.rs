use minilog_parser::Level;
use proc_macro::TokenStream;
use proc_macro2::TokenStream as TokenStream2;
use quote::quote;
use syn::parse_macro_input;

use self::env_filter::EnvFilter;
pub(crate) use self::{args::Args, codegen::Codegen};

mod args;
mod codegen;
mod env_filter;

#[derive(Clone, Copy)]
pub(crate) enum Statement {
    /// `error!` .. `verbose!`: level prefix, then the message
    Prefixed(Level),
    /// `debug_cont!`: debug level, no prefix
    DebugContinued,
}

impl Statement {
    fn level(self) -> Level {
        match self {
            Statement::Prefixed(level) => level,
            Statement::DebugContinued => Level::Debug,
        }
    }
}

pub(crate) fn expand(statement: Statement, args: TokenStream) -> TokenStream {
    let args = parse_macro_input!(args as Args);
    expand_parsed(statement, args, &EnvFilter::from_env_var()).into()
}

pub(crate) fn expand_parsed(
    statement: Statement,
    args: Args,
    filter: &EnvFilter,
) -> TokenStream2 {
    let formatting_exprs = args
        .formatting_args
        .map(|punctuated| punctuated.into_iter().collect())
        .unwrap_or_else(Vec::new);

    let Codegen { exprs } = Codegen::new(&args.format_string, &formatting_exprs);

    let logger = &args.target;
    let format_string = &args.format_string;

    if !filter.allows(statement.level()) {
        // statement is compiled out, but the arguments must still type check and count as used
        return quote!({
            let _ = || {
                let _ = &#logger;
                #(let _ = #exprs;)*
            };
        });
    }

    match statement {
        Statement::Prefixed(level) => {
            let level = level_path(level);
            quote!({
                (#logger).log_with(#level, #format_string, || [#(#exprs),*])
            })
        }
        Statement::DebugContinued => quote!({
            (#logger).debug_cont_with(#format_string, || [#(#exprs),*])
        }),
    }
}

fn level_path(level: Level) -> TokenStream2 {
    match level {
        Level::NoOutput => quote!(minilog::Level::NoOutput),
        Level::Error => quote!(minilog::Level::Error),
        Level::Warning => quote!(minilog::Level::Warning),
        Level::Info => quote!(minilog::Level::Info),
        Level::Debug => quote!(minilog::Level::Debug),
        Level::Verbose => quote!(minilog::Level::Verbose),
    }
}

#[cfg(test)]
mod tests {
    use syn::parse_quote;

    use super::*;

    fn expand_with(statement: Statement, minilog_level: Option<&str>) -> String {
        let args: Args = parse_quote!(log, "%s=%d", name, value);
        let filter = EnvFilter::new(minilog_level).unwrap();
        expand_parsed(statement, args, &filter).to_string()
    }

    #[test]
    fn statements_below_the_filter_are_kept() {
        let expanded = expand_with(Statement::Prefixed(Level::Info), Some("info"));
        assert!(expanded.contains("log_with"));
        assert!(expanded.contains("Level :: Info"));
    }

    #[test]
    fn statements_above_the_filter_only_borrow_their_arguments() {
        let expanded = expand_with(Statement::Prefixed(Level::Debug), Some("info"));
        assert!(!expanded.contains("log_with"));
        assert!(expanded.contains("text (name)"));
        assert!(expanded.contains("integer (value)"));
    }

    #[test]
    fn continued_debug_is_filtered_as_debug() {
        assert!(!expand_with(Statement::DebugContinued, Some("info")).contains("debug_cont_with"));
        assert!(expand_with(Statement::DebugContinued, Some("debug")).contains("debug_cont_with"));
    }

    #[test]
    fn everything_is_filtered_when_off() {
        let expanded = expand_with(Statement::Prefixed(Level::Error), Some("off"));
        assert!(!expanded.contains("log_with"));
    }

    #[test]
    fn target_is_parenthesized() {
        let args: Args = parse_quote!(*log, "x");
        let expanded = expand_parsed(
            Statement::Prefixed(Level::Info),
            args,
            &EnvFilter::new(None).unwrap(),
        );
        assert!(expanded.to_string().contains("(* log) . log_with"));
    }
}

use proc_macro::TokenStream;
use quote::quote;
use syn::parse_macro_input;

use super::log::{Args, Codegen};

pub(crate) fn expand(input: TokenStream) -> TokenStream {
    let args = parse_macro_input!(input as Args);

    let formatting_exprs: Vec<_> = args
        .formatting_args
        .map(|punctuated| punctuated.into_iter().collect())
        .unwrap_or_default();

    let Codegen { exprs } = Codegen::new(&args.format_string, &formatting_exprs);

    let sink = &args.target;
    let format_string = &args.format_string;
    quote!({
        minilog::export::write(#sink, #format_string, &[#(#exprs),*])
    })
    .into()
}

//! INTERNAL; DO NOT USE. Please use the `minilog` crate to access the functionality implemented here

use minilog_parser::Level;
use proc_macro::TokenStream;
use proc_macro_error2::proc_macro_error;

use crate::function_like::log::Statement;

mod function_like;

/* Logging macros */
#[proc_macro]
#[proc_macro_error]
pub fn error(input: TokenStream) -> TokenStream {
    function_like::log::expand(Statement::Prefixed(Level::Error), input)
}

#[proc_macro]
#[proc_macro_error]
pub fn warn(input: TokenStream) -> TokenStream {
    function_like::log::expand(Statement::Prefixed(Level::Warning), input)
}

#[proc_macro]
#[proc_macro_error]
pub fn info(input: TokenStream) -> TokenStream {
    function_like::log::expand(Statement::Prefixed(Level::Info), input)
}

#[proc_macro]
#[proc_macro_error]
pub fn debug(input: TokenStream) -> TokenStream {
    function_like::log::expand(Statement::Prefixed(Level::Debug), input)
}

// continues a `debug!` line, so no prefix
#[proc_macro]
#[proc_macro_error]
pub fn debug_cont(input: TokenStream) -> TokenStream {
    function_like::log::expand(Statement::DebugContinued, input)
}

#[proc_macro]
#[proc_macro_error]
pub fn verbose(input: TokenStream) -> TokenStream {
    function_like::log::expand(Statement::Prefixed(Level::Verbose), input)
}
/* Logging macros */

#[proc_macro]
#[proc_macro_error]
pub fn write(input: TokenStream) -> TokenStream {
    function_like::write::expand(input)
}

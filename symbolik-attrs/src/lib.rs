mod error_kind;

use error_kind::ErrorKindTarget;
use proc_macro::TokenStream;
use quote::ToTokens;
use syn::parse_macro_input;

/// Derives the `ErrorKind` trait from `symbolik-error` for the given struct.
///
/// The report produced by the error is customized with the `error` attribute:
///
/// ```
/// use symbolik_attrs::ErrorKind;
///
/// #[derive(Debug, ErrorKind)]
/// #[error(message = "unexpected end of input", labels = ["add an expression here"])]
/// pub struct Foo;
/// ```
///
/// The following tags are available:
///
/// | Tag       | Description                                                                  |
/// | --------- | ---------------------------------------------------------------------------- |
/// | `message` | The message displayed at the top of the report. Required.                    |
/// | `labels`  | An array of label texts, one for each span of the error, in order.           |
/// | `help`    | Optional help text for the error, describing what the user can do to fix it. |
///
/// Each tag accepts an expression evaluating to something that implements [`ToString`]. For
/// structs with named fields, the expression is evaluated with the fields of the struct in scope
/// (as references), so they can be used in the expression. Tuple structs are not supported.
#[proc_macro_derive(ErrorKind, attributes(error))]
pub fn error_kind(item: TokenStream) -> TokenStream {
    let target = parse_macro_input!(item as ErrorKindTarget);
    target.into_token_stream().into()
}

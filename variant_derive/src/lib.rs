extern crate proc_macro;
#[macro_use]
extern crate proc_macro_error;

mod alternatives;
mod args;
mod expand;

use proc_macro::TokenStream;
use proc_macro_error::proc_macro_error;
use syn::{parse_macro_input, AttributeArgs, ItemStruct};

use crate::args::VariantArgs;

/// Turns a tuple struct listing alternative types into a tagged union.
///
/// ```ignore
/// #[variant(Debug, Clone, PartialEq)]
/// pub struct Value(i32, f64, String, RecursiveWrapper<Tree>);
/// ```
///
/// The field list is the alternative list: repeated types collapse onto
/// their first position, which fixes the discriminants. The flags select the
/// standard traits to implement; `Ord` implies `PartialOrd` and `Eq`, both
/// of which imply `PartialEq`.
#[proc_macro_attribute]
#[proc_macro_error]
pub fn variant(attr: TokenStream, item: TokenStream) -> TokenStream {
    let args = parse_macro_input!(attr as AttributeArgs);
    let item = parse_macro_input!(item as ItemStruct);

    let args = match VariantArgs::parse(&args) {
        Ok(args) => args,
        Err(e) => return e.write_errors().into(),
    };
    let alternatives = alternatives::collect(&item);

    expand::expand(&item, &args, &alternatives).into()
}

#![allow(non_snake_case)]

use darling::FromMeta;
use syn::AttributeArgs;

/// Capabilities requested in `#[variant(...)]`.
#[derive(FromMeta, Default, Debug, Clone, Eq, PartialEq)]
pub struct VariantArgs {
    #[darling(default)]
    pub Debug: bool,
    #[darling(default)]
    pub Display: bool,
    #[darling(default)]
    pub Clone: bool,
    #[darling(default)]
    pub PartialEq: bool,
    #[darling(default)]
    pub Eq: bool,
    #[darling(default)]
    pub PartialOrd: bool,
    #[darling(default)]
    pub Ord: bool,
    #[darling(default)]
    pub Hash: bool,
    #[darling(default)]
    pub Default: bool,
    #[darling(default)]
    pub MoveOut: bool,
    #[darling(default)]
    pub BinarySerializable: bool,
}

impl VariantArgs {
    pub fn parse(args: &AttributeArgs) -> Result<Self, darling::Error> {
        let mut parsed = VariantArgs::from_list(args)?;
        parsed.fill_implied();
        Ok(parsed)
    }

    /// Adds the supertraits of what was requested.
    pub fn fill_implied(&mut self) {
        if self.Ord {
            self.PartialOrd = true;
            self.Eq = true;
        }
        if self.Eq || self.PartialOrd {
            self.PartialEq = true;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use syn::parse_quote;

    fn parse(args: Vec<syn::NestedMeta>) -> Result<VariantArgs, darling::Error> {
        VariantArgs::parse(&args)
    }

    #[test]
    fn ord_pulls_in_its_supertraits() {
        let args = parse(vec![parse_quote!(Ord), parse_quote!(Debug)]).unwrap();
        assert!(args.Ord && args.PartialOrd && args.Eq && args.PartialEq && args.Debug);
        assert!(!args.Clone && !args.Hash);
    }

    #[test]
    fn empty_list_requests_nothing() {
        assert_eq!(parse(vec![]).unwrap(), VariantArgs::default());
    }

    #[test]
    fn unknown_flag_is_rejected() {
        assert!(parse(vec![parse_quote!(Serialize)]).is_err());
    }
}

use itertools::Itertools;
use proc_macro2::Span;
use quote::ToTokens;
use std::collections::HashSet;
use syn::spanned::Spanned;
use syn::visit::{self, Visit};
use syn::{
    Fields, GenericArgument, ItemStruct, Lifetime, PathArguments, Type, TypeBareFn, TypeImplTrait,
    TypeInfer, TypeReference, Visibility,
};

/// One deduplicated alternative of a `#[variant]` declaration.
pub struct Alternative {
    /// Type kept in the storage union, as written.
    pub stored: Type,
    /// Type seen by access and visitation.
    pub target: Type,
    /// Stored through `RecursiveWrapper`.
    pub indirect: bool,
    pub name: String,
}

/// Strips redundant parentheses and invisible groups.
fn strip(ty: &Type) -> &Type {
    match ty {
        Type::Paren(p) => strip(&p.elem),
        Type::Group(g) => strip(&g.elem),
        _ => ty,
    }
}

/// Token text without the spacing `to_string` adds between punctuation.
fn pretty(ty: &Type) -> String {
    let raw = ty.to_token_stream().to_string();
    let chars: Vec<char> = raw.chars().collect();
    let mut out = String::with_capacity(raw.len());
    for (idx, &c) in chars.iter().enumerate() {
        if c != ' ' {
            out.push(c);
            if c == ',' {
                out.push(' ');
            }
            continue;
        }
        let word = |c: Option<&char>| c.map_or(false, |c| c.is_alphanumeric() || *c == '_');
        if idx > 0 && word(chars.get(idx - 1)) && word(chars.get(idx + 1)) {
            out.push(' ');
        }
    }
    out
}

fn key(ty: &Type) -> String {
    pretty(strip(ty)).chars().filter(|c| !c.is_whitespace()).collect()
}

/// `RecursiveWrapper<T>` yields `T`.
fn wrapped(ty: &Type) -> Option<&Type> {
    let path = match strip(ty) {
        Type::Path(p) if p.qself.is_none() => &p.path,
        _ => return None,
    };
    let last = path.segments.last()?;
    if last.ident != "RecursiveWrapper" {
        return None;
    }
    match &last.arguments {
        PathArguments::AngleBracketed(args) if args.args.len() == 1 => match &args.args[0] {
            GenericArgument::Type(inner) => Some(inner),
            _ => None,
        },
        _ => None,
    }
}

/// Finds constructs that cannot be stored or cannot be compared by name.
#[derive(Default)]
struct Checker {
    error: Option<(Span, &'static str)>,
}

impl Checker {
    fn fail(&mut self, span: Span, msg: &'static str) {
        if self.error.is_none() {
            self.error = Some((span, msg));
        }
    }
}

impl<'ast> Visit<'ast> for Checker {
    fn visit_type_impl_trait(&mut self, i: &'ast TypeImplTrait) {
        self.fail(i.span(), "`impl Trait` cannot be a variant alternative");
    }

    fn visit_type_infer(&mut self, i: &'ast TypeInfer) {
        self.fail(i.span(), "variant alternatives must be spelled out, `_` is not allowed");
    }

    fn visit_type_reference(&mut self, i: &'ast TypeReference) {
        if i.lifetime.is_none() {
            self.fail(i.span(), "reference alternatives need a `'static` lifetime");
        }
        visit::visit_type_reference(self, i);
    }

    fn visit_lifetime(&mut self, i: &'ast Lifetime) {
        if i.ident != "static" {
            self.fail(i.span(), "only `'static` lifetimes may appear in variant alternatives");
        }
    }

    // function pointers own their lifetimes
    fn visit_type_bare_fn(&mut self, _: &'ast TypeBareFn) {}

    fn visit_ident(&mut self, i: &'ast proc_macro2::Ident) {
        if i == "Self" {
            self.fail(i.span(), "name the type instead of using `Self` in a variant alternative");
        }
    }
}

fn check(ty: &Type) {
    match strip(ty) {
        Type::Slice(_) | Type::TraitObject(_) => {
            abort!(ty.span(), "variant alternatives must be sized")
        }
        Type::Path(p) if p.qself.is_none() && p.path.is_ident("str") => {
            abort!(ty.span(), "variant alternatives must be sized")
        }
        Type::Never(_) => abort!(ty.span(), "`!` cannot be a variant alternative"),
        _ => {}
    }

    let mut checker = Checker::default();
    checker.visit_type(ty);
    if let Some((span, msg)) = checker.error {
        abort!(span, msg)
    }
}

/// Validates the declaration and returns its alternatives in discriminant
/// order. Repeated types keep their first position.
pub fn collect(item: &ItemStruct) -> Vec<Alternative> {
    if !item.generics.params.is_empty() || item.generics.where_clause.is_some() {
        abort!(
            item.generics.span(),
            "variant types cannot be generic";
            help = "duplicate alternatives can only be detected for concrete types"
        )
    }

    if let Some(attr) = item.attrs.iter().find(|a| a.path.is_ident("derive")) {
        abort!(
            attr.span(),
            "request capabilities through `#[variant(...)]` instead of `#[derive]`";
            help = "e.g. `#[variant(Debug, Clone, PartialEq)]`"
        )
    }

    let fields = match &item.fields {
        Fields::Unnamed(fields) => fields,
        _ => abort!(
            item.span(),
            "expected a tuple struct listing the alternatives";
            help = "e.g. `struct Value(i32, String);`"
        ),
    };

    if fields.unnamed.is_empty() {
        abort!(item.span(), "a variant needs at least one alternative")
    }

    for field in &fields.unnamed {
        if !matches!(field.vis, Visibility::Inherited) {
            abort!(field.vis.span(), "variant alternatives take no visibility")
        }
        if let Some(attr) = field.attrs.first() {
            abort!(attr.span(), "variant alternatives take no attributes")
        }
        check(&field.ty);
    }

    let alternatives = fields
        .unnamed
        .iter()
        .map(|field| {
            let stored = strip(&field.ty).clone();
            let (target, indirect) = match wrapped(&stored) {
                Some(inner) => (strip(inner).clone(), true),
                None => (stored.clone(), false),
            };
            let name = pretty(&target);
            Alternative {
                stored,
                target,
                indirect,
                name,
            }
        })
        .unique_by(|alt| key(&alt.stored))
        .collect::<Vec<_>>();

    let mut targets = HashSet::with_capacity(alternatives.len());
    for alt in &alternatives {
        if !targets.insert(key(&alt.target)) {
            abort!(
                alt.stored.span(),
                "`{}` is listed both directly and through `RecursiveWrapper`",
                alt.name
            )
        }
    }

    alternatives
}

#[cfg(test)]
mod tests {
    use super::*;
    use syn::parse_quote;

    #[test]
    fn pretty_names() {
        let ty: Type = parse_quote!(std::collections::HashMap<String, Vec<u8>>);
        assert_eq!(pretty(&ty), "std::collections::HashMap<String, Vec<u8>>");
        let ty: Type = parse_quote!(&'static str);
        assert_eq!(pretty(&ty), "&'static str");
    }

    #[test]
    fn keys_ignore_spacing_and_parens() {
        let a: Type = parse_quote!(Option<Vec<u8>>);
        let b: Type = parse_quote!((Option< Vec<u8> >));
        assert_eq!(key(&a), key(&b));
    }

    #[test]
    fn dedup_keeps_first_position() {
        let item: ItemStruct = parse_quote!(struct V(i32, f64, i32, RecursiveWrapper<Node>, f64););
        let alts = collect(&item);
        let names = alts.iter().map(|a| a.name.as_str()).collect::<Vec<_>>();
        assert_eq!(names, vec!["i32", "f64", "Node"]);
        assert!(alts[2].indirect);
        assert!(!alts[0].indirect);
    }
}

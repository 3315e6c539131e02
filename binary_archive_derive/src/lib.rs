extern crate proc_macro;

use proc_macro::TokenStream;

use proc_macro2::{Ident, Span};
use quote::quote;
use syn::{
    parse_macro_input, parse_quote, Data, DataEnum, DataStruct, DeriveInput, Error, Fields,
    GenericParam, Generics,
};

fn field_binding(idx: usize) -> Ident {
    Ident::new(&format!("__field_{}", idx), Span::call_site())
}

/// Field bindings of one struct body or enum variant, in declaration order.
struct FieldsWrapper<'a>(&'a Fields);

impl<'a> FieldsWrapper<'a> {
    fn bindings(&self) -> Vec<Ident> {
        (0..self.0.len()).map(field_binding).collect()
    }

    /// `{ a: __field_0, .. }`, `(__field_0, ..)` or nothing; usable both as a
    /// constructor and as a pattern.
    fn shape(&self) -> proc_macro2::TokenStream {
        let bindings = self.bindings();
        match self.0 {
            Fields::Named(_) => {
                let names = self.0.iter().map(|f| f.ident.as_ref());
                quote! { { #(#names: #bindings,)* } }
            }
            Fields::Unnamed(_) => quote! { ( #(#bindings,)* ) },
            Fields::Unit => quote! {},
        }
    }

    /// `ref` pattern over the fields, binding the same names as `shape`.
    fn ref_pattern(&self) -> proc_macro2::TokenStream {
        let bindings = self.bindings();
        match self.0 {
            Fields::Named(_) => {
                let names = self.0.iter().map(|f| f.ident.as_ref());
                quote! { { #(#names: ref #bindings,)* } }
            }
            Fields::Unnamed(_) => quote! { ( #(ref #bindings,)* ) },
            Fields::Unit => quote! {},
        }
    }

    fn read_each(&self) -> proc_macro2::TokenStream {
        let reads = self.0.iter().enumerate().map(|(idx, f)| {
            let binding = field_binding(idx);
            let ty = &f.ty;
            quote! {
                let (input, #binding) =
                    <#ty as ::binary_archive::BinarySerializable>::deserialize(all_input, input)?;
            }
        });
        quote! { #(#reads)* }
    }

    fn write_each(&self) -> proc_macro2::TokenStream {
        let bindings = self.bindings();
        quote! {
            #( ::binary_archive::BinarySerializable::serialize(#bindings, wrt)?; )*
        }
    }
}

fn add_trait_bounds(generics: &mut Generics) {
    for param in &mut generics.params {
        if let GenericParam::Type(ty) = param {
            ty.bounds
                .push(parse_quote!(::binary_archive::BinarySerializable));
        }
    }
}

/// Field-wise archive support.
///
/// Structs write their fields in declaration order. Enums first write the
/// zero-based declaration index of the variant as a `u32`, then its fields.
#[proc_macro_derive(BinarySerializable)]
pub fn bs_derive(input: TokenStream) -> TokenStream {
    let mut input = parse_macro_input!(input as DeriveInput);
    add_trait_bounds(&mut input.generics);

    let tokens = match &input.data {
        Data::Struct(s) => bs_derive_struct(&input.ident, &input.generics, s),
        Data::Enum(e) => bs_derive_enum(&input.ident, &input.generics, e),
        Data::Union(u) => {
            Error::new_spanned(u.union_token, "BinarySerializable cannot be derived for unions")
                .to_compile_error()
        }
    };

    tokens.into()
}

fn bs_derive_struct(
    ident: &Ident,
    generics: &Generics,
    s: &DataStruct,
) -> proc_macro2::TokenStream {
    let (impl_generics, type_generics, where_clause) = generics.split_for_impl();
    let fields = FieldsWrapper(&s.fields);
    let read = fields.read_each();
    let write = fields.write_each();
    let shape = fields.shape();
    let pattern = fields.ref_pattern();

    quote! {
        impl #impl_generics ::binary_archive::BinarySerializable for #ident #type_generics #where_clause {
            fn deserialize<'a>(all_input: &'a [u8], input: &'a [u8]) -> ::binary_archive::ArchiveResult<'a, Self> where Self: Sized {
                #read
                Ok((input, #ident #shape))
            }

            fn serialize<W>(&self, wrt: &mut W) -> Result<(), ::std::io::Error> where W: ::binary_archive::byteorder::WriteBytesExt {
                let #ident #pattern = *self;
                #write
                Ok(())
            }
        }
    }
}

fn bs_derive_enum(ident: &Ident, generics: &Generics, e: &DataEnum) -> proc_macro2::TokenStream {
    let (impl_generics, type_generics, where_clause) = generics.split_for_impl();

    let read_arms = e.variants.iter().enumerate().map(|(idx, v)| {
        let var_ident = &v.ident;
        let discriminant = idx as u32;
        let fields = FieldsWrapper(&v.fields);
        let read = fields.read_each();
        let shape = fields.shape();
        quote! {
            #discriminant => {
                #read
                Ok((input, #ident::#var_ident #shape))
            }
        }
    });

    let write_arms = e.variants.iter().enumerate().map(|(idx, v)| {
        let var_ident = &v.ident;
        let discriminant = idx as u32;
        let fields = FieldsWrapper(&v.fields);
        let pattern = fields.ref_pattern();
        let write = fields.write_each();
        quote! {
            #ident::#var_ident #pattern => {
                ::binary_archive::BinarySerializable::serialize(&#discriminant, wrt)?;
                #write
                Ok(())
            }
        }
    });

    quote! {
        impl #impl_generics ::binary_archive::BinarySerializable for #ident #type_generics #where_clause {
            fn deserialize<'a>(all_input: &'a [u8], input: &'a [u8]) -> ::binary_archive::ArchiveResult<'a, Self> where Self: Sized {
                let start = input;
                let (input, discriminant) =
                    <u32 as ::binary_archive::BinarySerializable>::deserialize(all_input, input)?;
                match discriminant {
                    #(#read_arms)*
                    _ => Err(<Self as ::binary_archive::BinarySerializable>::make_verbose_error(
                        start,
                        ::binary_archive::nom::error::ErrorKind::Tag,
                        "unknown enum discriminant",
                    )),
                }
            }

            fn serialize<W>(&self, wrt: &mut W) -> Result<(), ::std::io::Error> where W: ::binary_archive::byteorder::WriteBytesExt {
                match *self {
                    #(#write_arms)*
                }
            }
        }
    }
}

use crate::alternatives::Alternative;
use crate::args::VariantArgs;
use proc_macro2::{Ident, Span, TokenStream};
use quote::{format_ident, quote};
use syn::{ItemStruct, Type};

/// Everything the generated impls need to know about one declaration.
struct Layout<'a> {
    ident: &'a Ident,
    storage: Ident,
    tag: Ident,
    stored: Vec<&'a Type>,
    targets: Vec<&'a Type>,
    kinds: Vec<TokenStream>,
    count: usize,
}

impl<'a> Layout<'a> {
    fn new(item: &'a ItemStruct, alternatives: &'a [Alternative]) -> Self {
        let count = alternatives.len();
        let tag = if count <= 1 << 8 {
            "u8"
        } else if count <= 1 << 16 {
            "u16"
        } else {
            "u32"
        };
        let kinds = alternatives
            .iter()
            .map(|alt| {
                let target = &alt.target;
                if alt.indirect {
                    quote! { ::variant::slot::Indirect<#target> }
                } else {
                    quote! { ::variant::slot::Direct<#target> }
                }
            })
            .collect();

        Layout {
            ident: &item.ident,
            storage: format_ident!("__{}Storage", item.ident),
            tag: Ident::new(tag, Span::call_site()),
            stored: alternatives.iter().map(|alt| &alt.stored).collect(),
            targets: alternatives.iter().map(|alt| &alt.target).collect(),
            kinds,
            count,
        }
    }

    /// `There<There<Here>>` for position 2.
    fn witness(idx: usize) -> TokenStream {
        (0..idx).fold(quote! { ::variant::type_list::Here }, |inner, _| {
            quote! { ::variant::type_list::There<#inner> }
        })
    }

    fn type_list(&self) -> TokenStream {
        self.stored
            .iter()
            .rev()
            .fold(quote! { ::variant::type_list::TNil }, |tail, head| {
                quote! { ::variant::type_list::TCons<#head, #tail> }
            })
    }

    /// `thunk::<Kind>` for every alternative, as a `const` table.
    fn table(&self, name: &str, thunk: TokenStream, fn_ty: TokenStream) -> TokenStream {
        let name = Ident::new(name, Span::call_site());
        let count = self.count;
        let entries = self.kinds.iter().map(|kind| quote! { #thunk::<#kind> as #fn_ty });
        quote! {
            const #name: [#fn_ty; #count] = [#(#entries),*];
        }
    }
}

pub fn expand(item: &ItemStruct, args: &VariantArgs, alternatives: &[Alternative]) -> TokenStream {
    let layout = Layout::new(item, alternatives);
    let Layout {
        ident,
        storage,
        tag,
        stored,
        ..
    } = &layout;
    let vis = &item.vis;
    let attrs = &item.attrs;
    let slots = (0..stored.len()).map(|idx| format_ident!("_{}", idx));

    let core = expand_core(&layout, alternatives);
    let visit = expand_visit(&layout);
    let capabilities = expand_capabilities(&layout, args);

    quote! {
        #(#attrs)*
        #vis struct #ident {
            which: #tag,
            storage: ::std::mem::MaybeUninit<#storage>,
        }

        #[doc(hidden)]
        #[allow(dead_code, non_snake_case, non_camel_case_types)]
        #[repr(C)]
        #vis union #storage {
            #(#slots: ::std::mem::ManuallyDrop<#stored>,)*
        }

        const _: () = {
            #core
            #visit
            #capabilities
        };
    }
}

fn expand_core(layout: &Layout, alternatives: &[Alternative]) -> TokenStream {
    let Layout {
        ident,
        storage,
        tag,
        stored,
        targets,
        kinds,
        ..
    } = layout;
    let list = layout.type_list();
    let names = alternatives.iter().map(|alt| alt.name.as_str());
    let drop_table = layout.table(
        "DROP",
        quote! { ::variant::dispatch::drop_slot },
        quote! { ::variant::dispatch::DropFn },
    );

    let alternative_impls = stored.iter().zip(targets).zip(kinds).enumerate().map(
        |(idx, ((stored, target), kind))| {
            let witness = Layout::witness(idx);
            quote! {
                unsafe impl ::variant::Alternative<#target> for #ident {
                    type Kind = #kind;
                    const INDEX: usize = <
                        <#ident as ::variant::VariantCore>::Alternatives
                            as ::variant::type_list::Find<#stored, #witness>
                    >::INDEX;
                }
            }
        },
    );

    let slot_checks = kinds.iter().enumerate().map(|(idx, kind)| {
        let witness = Layout::witness(idx);
        let alternatives = quote! { <#ident as ::variant::VariantCore>::Alternatives };
        quote! {
            ::variant::type_list::assert_same::<
                ::variant::type_list::Nth< #alternatives, #witness>,
                <#kind as ::variant::slot::SlotKind>::Stored,
            >();
        }
    });

    let self_ty: Type = syn::parse_quote!(#ident);
    let from_impls = targets.iter().filter(|target| ***target != self_ty).map(|target| {
        quote! {
            impl ::std::convert::From<#target> for #ident {
                fn from(value: #target) -> Self {
                    <#ident as ::variant::VariantExt>::from_alternative::<#target>(value)
                }
            }
        }
    });

    quote! {
        unsafe impl ::variant::VariantCore for #ident {
            type Alternatives = #list;
            type Storage = #storage;
            const NAMES: &'static [&'static str] = &[#(#names),*];

            fn which(&self) -> usize {
                self.which as usize
            }

            fn storage(&self) -> *const u8 {
                self.storage.as_ptr() as *const u8
            }

            fn storage_mut(&mut self) -> *mut u8 {
                self.storage.as_mut_ptr() as *mut u8
            }

            unsafe fn from_raw_parts(which: usize, storage: ::std::mem::MaybeUninit<#storage>) -> Self {
                #ident {
                    which: which as #tag,
                    storage,
                }
            }

            fn into_raw_parts(self) -> (usize, ::std::mem::MaybeUninit<#storage>) {
                let this = ::std::mem::ManuallyDrop::new(self);
                (this.which as usize, unsafe { ::std::ptr::read(&this.storage) })
            }
        }

        #(#alternative_impls)*

        #[allow(dead_code)]
        fn __assert_slot_types() {
            #(#slot_checks)*
        }

        impl ::std::ops::Drop for #ident {
            fn drop(&mut self) {
                #drop_table
                unsafe { (DROP[self.which as usize])(self.storage.as_mut_ptr() as *mut u8) }
            }
        }

        #(#from_impls)*
    }
}

fn expand_visit(layout: &Layout) -> TokenStream {
    let Layout {
        ident,
        targets,
        kinds,
        count,
        ..
    } = layout;

    let bounds = |visitor: TokenStream| {
        let each = targets
            .iter()
            .map(move |target| quote! { #visitor<#target, Output = __R> })
            .collect::<Vec<_>>();
        quote! { #(#each)+* }
    };
    let visit_bounds = bounds(quote! { ::variant::Visitor });
    let visit_mut_bounds = bounds(quote! { ::variant::VisitorMut });
    let visit_once_bounds = bounds(quote! { ::variant::VisitorOnce });

    quote! {
        #[allow(non_camel_case_types)]
        struct __Dispatch<__V, __R>(::std::marker::PhantomData<fn(__V) -> __R>);

        impl<__V, __R> __Dispatch<__V, __R> where __V: #visit_bounds {
            const VISIT: [::variant::dispatch::VisitFn<__V, __R>; #count] = [
                #(::variant::dispatch::visit_slot::<#kinds, __V, __R> as ::variant::dispatch::VisitFn<__V, __R>),*
            ];
        }

        impl<__V, __R> __Dispatch<__V, __R> where __V: #visit_mut_bounds {
            const VISIT_MUT: [::variant::dispatch::VisitMutFn<__V, __R>; #count] = [
                #(::variant::dispatch::visit_slot_mut::<#kinds, __V, __R> as ::variant::dispatch::VisitMutFn<__V, __R>),*
            ];
        }

        impl<__V, __R> __Dispatch<__V, __R> where __V: #visit_once_bounds {
            const VISIT_ONCE: [::variant::dispatch::VisitOnceFn<__V, __R>; #count] = [
                #(::variant::dispatch::visit_slot_once::<#kinds, __V, __R> as ::variant::dispatch::VisitOnceFn<__V, __R>),*
            ];
        }

        impl<__V, __R> ::variant::ApplyVisitor<__V> for #ident where __V: #visit_bounds {
            type Output = __R;

            fn apply_visitor(&self, visitor: __V) -> __R {
                let visit = __Dispatch::<__V, __R>::VISIT[self.which as usize];
                unsafe { visit(self.storage.as_ptr() as *const u8, visitor) }
            }
        }

        impl<__V, __R> ::variant::ApplyVisitorMut<__V> for #ident where __V: #visit_mut_bounds {
            type Output = __R;

            fn apply_visitor_mut(&mut self, visitor: __V) -> __R {
                let visit = __Dispatch::<__V, __R>::VISIT_MUT[self.which as usize];
                unsafe { visit(self.storage.as_mut_ptr() as *mut u8, visitor) }
            }
        }

        impl<__V, __R> ::variant::ApplyVisitorOnce<__V> for #ident where __V: #visit_once_bounds {
            type Output = __R;

            fn apply_visitor_once(self, visitor: __V) -> __R {
                let (which, mut storage) = ::variant::VariantCore::into_raw_parts(self);
                let visit = __Dispatch::<__V, __R>::VISIT_ONCE[which];
                unsafe { visit(storage.as_mut_ptr() as *mut u8, visitor) }
            }
        }
    }
}

fn expand_capabilities(layout: &Layout, args: &VariantArgs) -> TokenStream {
    let Layout {
        ident,
        storage,
        targets,
        ..
    } = layout;
    let mut tokens = TokenStream::new();

    if args.Clone {
        let table = layout.table(
            "CLONE",
            quote! { ::variant::dispatch::clone_slot },
            quote! { ::variant::dispatch::CloneFn },
        );
        tokens.extend(quote! {
            impl ::std::clone::Clone for #ident {
                fn clone(&self) -> Self {
                    #table
                    let mut storage = ::std::mem::MaybeUninit::<#storage>::uninit();
                    unsafe {
                        (CLONE[self.which as usize])(
                            self.storage.as_ptr() as *const u8,
                            storage.as_mut_ptr() as *mut u8,
                        );
                    }
                    #ident {
                        which: self.which,
                        storage,
                    }
                }
            }
        });
    }

    if args.MoveOut {
        let table = layout.table(
            "MOVE",
            quote! { ::variant::dispatch::move_out_slot },
            quote! { ::variant::dispatch::MoveFn },
        );
        tokens.extend(quote! {
            impl ::variant::MoveOut for #ident {
                fn move_out(&mut self) -> Self {
                    #table
                    let mut storage = ::std::mem::MaybeUninit::<#storage>::uninit();
                    unsafe {
                        (MOVE[self.which as usize])(
                            self.storage.as_mut_ptr() as *mut u8,
                            storage.as_mut_ptr() as *mut u8,
                        );
                    }
                    #ident {
                        which: self.which,
                        storage,
                    }
                }
            }
        });
    }

    if args.PartialEq {
        tokens.extend(quote! {
            impl ::std::cmp::PartialEq for #ident {
                fn eq(&self, other: &Self) -> bool {
                    ::variant::ops::eq(self, other)
                }
            }
        });
    }

    if args.Eq {
        tokens.extend(quote! {
            impl ::std::cmp::Eq for #ident {}

            #[allow(dead_code)]
            fn __assert_alternatives_eq() {
                fn is_eq<T: ?Sized + ::std::cmp::Eq>() {}
                #(is_eq::<#targets>();)*
            }
        });
    }

    if args.PartialOrd {
        tokens.extend(quote! {
            impl ::std::cmp::PartialOrd for #ident {
                fn partial_cmp(&self, other: &Self) -> ::std::option::Option<::std::cmp::Ordering> {
                    ::variant::ops::partial_cmp(self, other)
                }
            }
        });
    }

    if args.Ord {
        tokens.extend(quote! {
            impl ::std::cmp::Ord for #ident {
                fn cmp(&self, other: &Self) -> ::std::cmp::Ordering {
                    ::variant::ops::cmp(self, other)
                }
            }
        });
    }

    if args.Hash {
        tokens.extend(quote! {
            impl ::std::hash::Hash for #ident {
                fn hash<__H: ::std::hash::Hasher>(&self, state: &mut __H) {
                    ::variant::ops::hash(self, state)
                }
            }
        });
    }

    if args.Debug {
        let name = ident.to_string();
        tokens.extend(quote! {
            impl ::std::fmt::Debug for #ident {
                fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                    ::variant::ops::debug(self, #name, f)
                }
            }
        });
    }

    if args.Display {
        tokens.extend(quote! {
            impl ::std::fmt::Display for #ident {
                fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                    ::variant::ops::display(self, f)
                }
            }
        });
    }

    if args.Default {
        let first = targets[0];
        tokens.extend(quote! {
            impl ::std::default::Default for #ident {
                fn default() -> Self {
                    <#ident as ::variant::VariantExt>::from_alternative::<#first>(
                        ::std::default::Default::default(),
                    )
                }
            }
        });
    }

    if args.BinarySerializable {
        let count = layout.count;
        tokens.extend(quote! {
            impl ::variant::archive::BinarySerializable for #ident {
                fn deserialize<'a>(
                    all_input: &'a [u8],
                    input: &'a [u8],
                ) -> ::variant::archive::ArchiveResult<'a, Self> {
                    const READ: [::variant::io::ReadFn<#ident>; #count] = [
                        #(::variant::io::read_alternative::<#ident, #targets> as ::variant::io::ReadFn<#ident>),*
                    ];
                    ::variant::io::decode_with(all_input, input, &READ)
                }

                fn serialize<__W>(&self, wrt: &mut __W) -> ::std::result::Result<(), ::std::io::Error>
                where
                    __W: ::variant::archive::byteorder::WriteBytesExt,
                {
                    ::variant::io::write(self, wrt)
                }
            }
        });
    }

    tokens
}

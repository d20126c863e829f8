use proc_macro2::TokenStream;
use quote::{format_ident, quote};
use syn::ItemStruct;

pub fn expand_slice(input: ItemStruct) -> TokenStream {
    let handle_ident = &input.ident;
    let vis = &input.vis;
    let fields = &input.fields;
    let attrs = &input.attrs;

    let inner_ident = format_ident!("{handle_ident}Inner");
    // Unit and tuple structs need a trailing semicolon, named fields must not have one.
    let terminator = match fields {
        syn::Fields::Named(_) => quote! {},
        _ => quote! { ; },
    };

    quote! {
        #(#attrs)*
        #[derive(Debug)]
        #vis struct #inner_ident #fields #terminator

        #[derive(Debug, Clone)]
        #vis struct #handle_ident {
            inner: std::sync::Arc<#inner_ident>,
        }

        impl #handle_ident {
            #[must_use]
            pub fn new(inner: #inner_ident) -> Self {
                Self { inner: std::sync::Arc::new(inner) }
            }
        }

        impl std::ops::Deref for #handle_ident {
            type Target = #inner_ident;

            fn deref(&self) -> &Self::Target {
                &self.inner
            }
        }

        impl ::tln_domain::registry::FeatureSlice for #handle_ident {
            fn as_any(&self) -> &dyn std::any::Any {
                self
            }
        }
    }
}

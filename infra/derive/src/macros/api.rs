use fxhash::FxHashSet;
use proc_macro2::TokenStream;
use quote::quote;
use syn::{Attribute, ItemFn, ItemStruct, LitStr};

const RENAME_ALL: &str = "camelCase";

/// Expands the `#[api_model]` attribute macro.
///
/// Adds the missing DTO derives (`Debug`, `Serialize`, `Deserialize`, `ToSchema`)
/// and the wire policy every request and response body shares: camelCase names,
/// unknown fields rejected. The policy is fixed; a struct may restate it through
/// its own `#[serde(...)]` but never contradict it.
pub fn expand_api_model(args: TokenStream, input: ItemStruct) -> TokenStream {
    if !args.is_empty() {
        return syn::Error::new_spanned(args, "api_model takes no arguments").to_compile_error();
    }

    let policy = match SerdePolicy::read(&input.attrs) {
        Ok(policy) => policy,
        Err(err) => return err.to_compile_error(),
    };
    let derives = derived_trait_names(&input.attrs);

    let derive_attr = derive_attr(&derives);
    let rename_attr =
        if policy.rename_all { quote! {} } else { quote! { #[serde(rename_all = #RENAME_ALL)] } };
    let deny_attr =
        if policy.deny_unknown_fields { quote! {} } else { quote! { #[serde(deny_unknown_fields)] } };

    quote! {
        #derive_attr
        #rename_attr
        #deny_attr
        #input
    }
}

/// Expands the `#[api_handler]` attribute macro.
///
/// Registers the handler with `utoipa::path` and silences `unused_async` for
/// handlers that never await.
pub fn expand_api_handler(args: TokenStream, input: ItemFn) -> TokenStream {
    let body = &input.block;
    let sig = &input.sig;
    let vis = &input.vis;
    let attrs = &input.attrs;

    quote! {
        #(#attrs)*
        #[allow(clippy::unused_async)]
        #[::utoipa::path(#args)]
        #vis #sig {
            #body
        }
    }
}

/// Which parts of the wire policy the struct already declares itself.
struct SerdePolicy {
    rename_all: bool,
    deny_unknown_fields: bool,
}

impl SerdePolicy {
    fn read(attrs: &[Attribute]) -> syn::Result<Self> {
        let mut policy = Self { rename_all: false, deny_unknown_fields: false };

        for attr in attrs.iter().filter(|attr| attr.path().is_ident("serde")) {
            attr.parse_nested_meta(|meta| {
                if meta.path.is_ident("rename_all") {
                    let lit: LitStr = meta.value()?.parse()?;
                    if lit.value() != RENAME_ALL {
                        return Err(syn::Error::new_spanned(
                            lit,
                            "api_model bodies are camelCase; drop this rename_all",
                        ));
                    }
                    policy.rename_all = true;
                } else if meta.path.is_ident("deny_unknown_fields") {
                    policy.deny_unknown_fields = true;
                } else if meta.input.peek(syn::Token![=]) {
                    // Other container attributes pass through untouched.
                    let _: syn::Expr = meta.value()?.parse()?;
                } else if meta.input.peek(syn::token::Paren) {
                    let _: TokenStream = meta.input.parse::<proc_macro2::Group>()?.stream();
                }
                Ok(())
            })?;
        }

        Ok(policy)
    }
}

fn derive_attr(derives: &FxHashSet<String>) -> TokenStream {
    let missing = [
        ("Debug", quote! { Debug }),
        ("Serialize", quote! { ::serde::Serialize }),
        ("Deserialize", quote! { ::serde::Deserialize }),
        ("ToSchema", quote! { ::utoipa::ToSchema }),
    ]
    .into_iter()
    .filter(|(name, _)| !derives.contains(*name))
    .map(|(_, path)| path)
    .collect::<Vec<_>>();

    if missing.is_empty() { quote! {} } else { quote! { #[derive(#(#missing),*)] } }
}

fn derived_trait_names(attrs: &[Attribute]) -> FxHashSet<String> {
    let mut traits = FxHashSet::default();

    for attr in attrs.iter().filter(|attr| attr.path().is_ident("derive")) {
        let _ = attr.parse_nested_meta(|meta| {
            if let Some(segment) = meta.path.segments.last() {
                traits.insert(segment.ident.to_string());
            }
            Ok(())
        });
    }

    traits
}

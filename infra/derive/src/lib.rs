#![allow(unreachable_pub)]
#![allow(clippy::needless_pass_by_value)]

//! # Macros
//!
//! Procedural macros shared by every Talardnad crate.
//!
//! * [`tln_error`] turns an enum into a context-aware, optionally classified error type.
//! * [`tln_slice`] turns a struct into an `Arc`-backed feature slice handle.
//! * [`api_model`] / [`api_handler`] keep DTOs and Axum handlers consistent with `OpenAPI`.
//!
//! The examples below are `ignore`d because they need the consuming crates
//! (`tln-domain`, `serde`, `utoipa`) in scope.

mod macros;

use proc_macro::TokenStream;
use syn::{DeriveInput, ItemFn, ItemStruct, parse_macro_input};

/// Attribute macro to define a standard API data model.
///
/// # Injected Behaviors
///
/// * **Derives**: `Debug`, `Serialize`, `Deserialize` and `utoipa::ToSchema` when missing.
/// * **Serde Policy**: `rename_all = "camelCase"` and `deny_unknown_fields`. Restating
///   either through `#[serde(...)]` is allowed; a different `rename_all` is a compile error.
///
/// The attribute takes no arguments.
///
/// # Example
///
/// ```rust,ignore
/// use tln_derive::api_model;
///
/// #[api_model]
/// pub struct MarketSummary {
///     pub id: String,
///     pub open_time: String,
/// }
/// ```
#[proc_macro_attribute]
pub fn api_model(attr: TokenStream, item: TokenStream) -> TokenStream {
    let input = parse_macro_input!(item as ItemStruct);
    macros::api::expand_api_model(attr.into(), input).into()
}

/// Attribute macro to bridge Axum handlers with `OpenAPI` documentation.
///
/// Accepts the standard `utoipa::path` arguments (`get`, `post`, `path = "..."`,
/// `request_body = ...`, `responses(...)`, `tag = "..."`).
///
/// # Example
///
/// ```rust,ignore
/// #[api_handler(
///     get,
///     path = "/markets/{id}",
///     responses((status = OK, body = MarketWithProvider)),
///     tag = MARKET_TAG
/// )]
/// pub(crate) async fn get_market(/* extractors */) -> Result<Json<MarketWithProvider>, ApiError> {
///     todo!()
/// }
/// ```
#[proc_macro_attribute]
pub fn api_handler(args: TokenStream, item: TokenStream) -> TokenStream {
    let input = parse_macro_input!(item as ItemFn);
    macros::api::expand_api_handler(args.into(), input).into()
}

/// Attribute macro for domain-specific error enums.
///
/// # Features
///
/// * **Automatic Derives**: Injects `#[derive(Debug, thiserror::Error)]`.
/// * **Context Support**: Generates a companion `...Ext` trait that adds `.context()`
///   to any `Result` that can be converted into this error type.
/// * **Standard Conversions**: Implements `From<T>` for variants containing a source field.
/// * **Internal Fallback**: `From<&'static str>` and `From<String>` when an `Internal`
///   variant is present.
/// * **Classification**: with `#[tln_error(classified)]`, implements
///   `tln_domain::error::Classify`, mapping variants by name:
///   `NotFound`, `Conflict`, `Validation`, `Unauthorized` and `Forbidden` map to the
///   matching `ErrorKind`; every other variant is `ErrorKind::Internal`.
///
/// # Requirements
///
/// 1. The macro must be applied to an **enum** with named-field variants.
/// 2. Variants that support context must include a `context: Option<Cow<'static, str>>` field.
/// 3. Variants wrapping external errors must include a `source` field (or `#[source]`/`#[from]`)
///    together with a `context` field.
///
/// # Example
///
/// ```rust,ignore
/// use std::borrow::Cow;
///
/// #[tln_derive::tln_error(classified)]
/// pub enum MarketError {
///     #[error("{message}{}", format_context(.context))]
///     NotFound { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
///
///     #[error("{message}{}", format_context(.context))]
///     Internal { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
/// }
/// ```
#[proc_macro_attribute]
pub fn tln_error(args: TokenStream, item: TokenStream) -> TokenStream {
    let input = parse_macro_input!(item as DeriveInput);
    macros::error::expand_derive(args.into(), input).into()
}

/// Attribute macro to define a vertical slice handle.
///
/// 1. Renames the annotated struct to `<Name>Inner`.
/// 2. Generates a cheap-to-clone `Arc` wrapper named `<Name>` that derefs to the inner state.
/// 3. Implements `tln_domain::registry::FeatureSlice` so the slice can be registered in `ApiState`.
///
/// # Example
/// ```rust,ignore
/// #[tln_derive::tln_slice]
/// pub struct Market {
///     service: MarketService<SurrealMarketRepository>,
/// }
///
/// let slice = Market::new(MarketInner { service });
/// ```
#[proc_macro_attribute]
pub fn tln_slice(_attr: TokenStream, item: TokenStream) -> TokenStream {
    let input = syn::parse_macro_input!(item as ItemStruct);
    macros::slice::expand_slice(input).into()
}

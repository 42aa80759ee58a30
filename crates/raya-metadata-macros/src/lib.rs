// raya-metadata-macros: declarative front end for raya-metadata
//
// Provides:
// - #[derive(Annotated)] - Registers #[meta(...)] annotations on a struct and its fields
// - #[annotated]         - Registers #[meta(...)] annotations on methods and their parameters
//
// Example:
// ```
// use raya_metadata::{annotated, Annotated};
//
// #[derive(Annotated)]
// #[meta(label("Product", "Products"), noun("product"))]
// struct Product {
//     #[meta(token("sku-code"), example("WM-001"))]
//     sku: String,
// }
//
// #[annotated]
// impl ProductService {
//     #[meta(label("Create Product"))]
//     fn create(&self, #[meta(sensitive)] api_key: String) {}
// }
// ```
//
// Both macros emit a `Registration` that is collected at link time and
// applied to `MetadataRegistry::global()` on first use.

use proc_macro::TokenStream;
use syn::{parse_macro_input, DeriveInput, ItemImpl};

mod annotated;
mod attrs;
mod derive;
mod registration;

/// Registers the `#[meta(...)]` annotations of a struct and its fields.
///
/// Container attributes target the type, field attributes target the field
/// (by name, or by position for tuple structs). Supported annotations:
///
/// - `name("..")`
/// - `label("..")` / `label("..", "..")`
/// - `noun("..")` / `noun("..", "..")`
/// - `token("..")` / `token("..", "..")`
/// - `description("..")`
/// - `example(<expr>)`, any expression convertible into `serde_json::Value`
/// - `sensitive` / `sensitive(<bool>)`
///
/// # Example
///
/// ```ignore
/// #[derive(Annotated)]
/// #[meta(sensitive)]
/// struct Credentials {
///     #[meta(label("Username"))]
///     username: String,
///     #[meta(label("Password"), sensitive(true))]
///     password: String,
/// }
/// ```
#[proc_macro_derive(Annotated, attributes(meta))]
pub fn derive_annotated(item: TokenStream) -> TokenStream {
    let input = parse_macro_input!(item as DeriveInput);
    derive::expand_derive(input)
        .unwrap_or_else(|e| e.to_compile_error())
        .into()
}

/// Registers the `#[meta(...)]` annotations inside an inherent impl block.
///
/// Annotations on a method target the method; annotations on a parameter
/// target that parameter, counted from zero and skipping the receiver.
/// The `#[meta]` attributes are removed from the emitted impl.
///
/// # Example
///
/// ```ignore
/// #[annotated]
/// impl AuthService {
///     #[meta(sensitive)]
///     fn authenticate(&self) -> Token { ... }
///
///     fn login(&self, #[meta(sensitive, label("Credentials"))] credentials: Credentials) -> Token { ... }
/// }
/// ```
#[proc_macro_attribute]
pub fn annotated(_attr: TokenStream, item: TokenStream) -> TokenStream {
    let input = parse_macro_input!(item as ItemImpl);
    annotated::expand_annotated(input)
        .unwrap_or_else(|e| e.to_compile_error())
        .into()
}

// #[derive(Annotated)] implementation

use proc_macro2::TokenStream;
use quote::quote;
use syn::ext::IdentExt;
use syn::{Data, DeriveInput, Result};

use crate::attrs::parse_annotations;
use crate::registration::{registration, reject_generics};

/// Expands #[derive(Annotated)].
///
/// Input:
/// ```ignore
/// #[derive(Annotated)]
/// #[meta(label("Product", "Products"))]
/// struct Product {
///     #[meta(token("sku-code"))]
///     sku: String,
/// }
/// ```
///
/// Registered statements:
/// ```ignore
/// registry.annotate::<Product>(Target::Type, Label::with_plural("Product", "Products"));
/// registry.annotate::<Product>(Target::member("sku"), Token::new("sku-code"));
/// ```
pub fn expand_derive(input: DeriveInput) -> Result<TokenStream> {
    let ident = &input.ident;
    reject_generics(&input.generics, ident)?;

    let Data::Struct(data) = &input.data else {
        return Err(syn::Error::new_spanned(
            ident,
            "#[derive(Annotated)] only supports structs",
        ));
    };

    let mut statements = Vec::new();

    for annotation in parse_annotations(&input.attrs)? {
        statements.push(quote! {
            registry.annotate::<#ident>(::raya_metadata::Target::Type, #annotation);
        });
    }

    for (index, field) in data.fields.iter().enumerate() {
        let member = match &field.ident {
            Some(name) => name.unraw().to_string(),
            None => index.to_string(),
        };
        for annotation in parse_annotations(&field.attrs)? {
            statements.push(quote! {
                registry.annotate::<#ident>(::raya_metadata::Target::member(#member), #annotation);
            });
        }
    }

    Ok(registration(&statements))
}

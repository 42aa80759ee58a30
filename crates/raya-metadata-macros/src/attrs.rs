// #[meta(...)] attribute parsing
//
// Turns each nested annotation into the expression that constructs the
// matching raya_metadata annotation value.

use proc_macro2::TokenStream;
use quote::quote;
use syn::meta::ParseNestedMeta;
use syn::punctuated::Punctuated;
use syn::{Attribute, Expr, Result, Token};

const META_ATTR: &str = "meta";

const KNOWN_ANNOTATIONS: &str = "name, label, noun, token, description, example, sensitive";

/// Whether `attr` is a `#[meta(...)]` attribute
pub fn is_meta_attr(attr: &Attribute) -> bool {
    attr.path().is_ident(META_ATTR)
}

/// Parse every `#[meta(...)]` in `attrs`, in source order.
pub fn parse_annotations(attrs: &[Attribute]) -> Result<Vec<TokenStream>> {
    let mut annotations = Vec::new();
    for attr in attrs.iter().filter(|attr| is_meta_attr(attr)) {
        attr.parse_nested_meta(|meta| {
            annotations.push(parse_annotation(&meta)?);
            Ok(())
        })?;
    }
    Ok(annotations)
}

fn parse_annotation(meta: &ParseNestedMeta) -> Result<TokenStream> {
    let Some(ident) = meta.path.get_ident() else {
        return Err(meta.error(format!("expected one of: {KNOWN_ANNOTATIONS}")));
    };
    let kind = ident.to_string();

    match kind.as_str() {
        "name" => {
            let value = single_arg(meta, &kind)?;
            Ok(quote!(::raya_metadata::Name::new(#value)))
        }
        "description" => {
            let value = single_arg(meta, &kind)?;
            Ok(quote!(::raya_metadata::Description::new(#value)))
        }
        "example" => {
            let value = single_arg(meta, &kind)?;
            Ok(quote!(::raya_metadata::Example::new(#value)))
        }
        "label" => plural_annotation(meta, &kind, quote!(::raya_metadata::Label)),
        "noun" => plural_annotation(meta, &kind, quote!(::raya_metadata::Noun)),
        "token" => plural_annotation(meta, &kind, quote!(::raya_metadata::Token)),
        "sensitive" => {
            // Bare `sensitive` marks the element, `sensitive(false)` stores false
            if meta.input.peek(syn::token::Paren) {
                let value = single_arg(meta, &kind)?;
                Ok(quote!(::raya_metadata::Sensitive::set(#value)))
            } else {
                Ok(quote!(::raya_metadata::Sensitive::new()))
            }
        }
        _ => Err(meta.error(format!(
            "unknown metadata annotation `{kind}`, expected one of: {KNOWN_ANNOTATIONS}"
        ))),
    }
}

fn plural_annotation(meta: &ParseNestedMeta, kind: &str, ty: TokenStream) -> Result<TokenStream> {
    let args = parse_args(meta)?;
    match args.as_slice() {
        [value] => Ok(quote!(#ty::new(#value))),
        [value, plural] => Ok(quote!(#ty::with_plural(#value, #plural))),
        _ => Err(meta.error(format!("`{kind}` takes a value and an optional plural"))),
    }
}

fn single_arg(meta: &ParseNestedMeta, kind: &str) -> Result<Expr> {
    let mut args = parse_args(meta)?;
    if args.len() != 1 {
        return Err(meta.error(format!("`{kind}` takes exactly one argument")));
    }
    Ok(args.remove(0))
}

fn parse_args(meta: &ParseNestedMeta) -> Result<Vec<Expr>> {
    let content;
    syn::parenthesized!(content in meta.input);
    let args = Punctuated::<Expr, Token![,]>::parse_terminated(&content)?;
    Ok(args.into_iter().collect())
}

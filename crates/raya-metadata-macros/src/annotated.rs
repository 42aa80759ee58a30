// #[annotated] implementation

use proc_macro2::TokenStream;
use quote::quote;
use syn::ext::IdentExt;
use syn::{FnArg, ImplItem, ItemImpl, Result};

use crate::attrs::{is_meta_attr, parse_annotations};
use crate::registration::{registration, reject_generics};

/// Expands #[annotated] on an inherent impl block.
///
/// Input:
/// ```ignore
/// #[annotated]
/// impl ProductService {
///     #[meta(label("Create Product"))]
///     fn create(&self, #[meta(label("Product"))] product: Product) {}
/// }
/// ```
///
/// Output: the impl with every `#[meta]` removed, plus a registration of
/// ```ignore
/// registry.annotate::<ProductService>(Target::member("create"), Label::new("Create Product"));
/// registry.annotate::<ProductService>(Target::parameter("create", 0usize), Label::new("Product"));
/// ```
pub fn expand_annotated(mut item: ItemImpl) -> Result<TokenStream> {
    if let Some((_, path, _)) = &item.trait_ {
        return Err(syn::Error::new_spanned(
            path,
            "#[annotated] must be applied to an inherent impl block",
        ));
    }
    reject_generics(&item.generics, &item.self_ty)?;

    let self_ty = item.self_ty.clone();
    let mut statements = Vec::new();

    for impl_item in &mut item.items {
        match impl_item {
            ImplItem::Fn(method) => {
                let member = method.sig.ident.unraw().to_string();

                for annotation in parse_annotations(&method.attrs)? {
                    statements.push(quote! {
                        registry.annotate::<#self_ty>(::raya_metadata::Target::member(#member), #annotation);
                    });
                }
                method.attrs.retain(|attr| !is_meta_attr(attr));

                // The receiver is not a parameter
                let params = method.sig.inputs.iter_mut().filter_map(|input| match input {
                    FnArg::Typed(param) => Some(param),
                    FnArg::Receiver(_) => None,
                });
                for (index, param) in params.enumerate() {
                    for annotation in parse_annotations(&param.attrs)? {
                        statements.push(quote! {
                            registry.annotate::<#self_ty>(
                                ::raya_metadata::Target::parameter(#member, #index),
                                #annotation,
                            );
                        });
                    }
                    param.attrs.retain(|attr| !is_meta_attr(attr));
                }
            }
            ImplItem::Const(constant) => {
                let member = constant.ident.unraw().to_string();
                for annotation in parse_annotations(&constant.attrs)? {
                    statements.push(quote! {
                        registry.annotate::<#self_ty>(::raya_metadata::Target::member(#member), #annotation);
                    });
                }
                constant.attrs.retain(|attr| !is_meta_attr(attr));
            }
            _ => {}
        }
    }

    let registration = registration(&statements);
    Ok(quote! {
        #item
        #registration
    })
}

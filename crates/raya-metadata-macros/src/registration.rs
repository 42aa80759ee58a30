// Link-time registration shared by both macros

use proc_macro2::TokenStream;
use quote::{quote, ToTokens};
use syn::{Generics, Result};

/// Wrap annotate statements in a function submitted to the registration
/// inventory.
///
/// Example expansion:
/// ```ignore
/// const _: () = {
///     fn __raya_metadata_register(registry: &::raya_metadata::MetadataRegistry) {
///         registry.annotate::<Product>(::raya_metadata::Target::Type, ::raya_metadata::Label::new("Product"));
///     }
///     ::raya_metadata::__private::inventory::submit! {
///         ::raya_metadata::Registration::new(__raya_metadata_register)
///     }
/// };
/// ```
pub fn registration(statements: &[TokenStream]) -> TokenStream {
    quote! {
        const _: () = {
            #[allow(unused_variables)]
            fn __raya_metadata_register(registry: &::raya_metadata::MetadataRegistry) {
                #(#statements)*
            }

            ::raya_metadata::__private::inventory::submit! {
                ::raya_metadata::Registration::new(__raya_metadata_register)
            }
        };
    }
}

/// Registrations are plain functions, so the owning type must be concrete.
pub fn reject_generics(generics: &Generics, owner: impl ToTokens) -> Result<()> {
    if generics.params.is_empty() {
        return Ok(());
    }
    Err(syn::Error::new_spanned(
        owner,
        "metadata cannot be registered for generic types; \
         use MetadataRegistry::annotate on a concrete instantiation instead",
    ))
}

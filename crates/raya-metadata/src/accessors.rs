//! Accessors
//!
//! Read-only projections of single descriptor fields. Every accessor uses
//! lookup-only resolution: querying an element that was never annotated
//! returns `None` and leaves the registry unchanged.
//!
//! Each accessor exists twice: as a method on `MetadataRegistry` and as a
//! free function that reads `MetadataRegistry::global()`.
//!
//! ```ignore
//! let label = raya_metadata::label::<Product>(Target::Type);
//! let token = raya_metadata::token::<Product>(Target::member("sku"));
//! let secret = registry.sensitive::<AuthService>(Target::parameter("login", 0));
//! ```

use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::descriptor::MetadataDescriptor;
use crate::error::{MetadataError, MetadataResult};
use crate::key::{MetadataKey, Target};
use crate::registry::MetadataRegistry;

impl MetadataRegistry {
    fn project<T: ?Sized + 'static, R>(
        &self,
        target: Target<'_>,
        field: impl FnOnce(&MetadataDescriptor) -> Option<R>,
    ) -> Option<R> {
        let descriptor = self.get::<T>(target)?;
        let guard = descriptor.read();
        field(&*guard)
    }
}

macro_rules! string_accessors {
    ($($(#[$doc:meta])* $field:ident;)*) => {
        impl MetadataRegistry {
            $(
                $(#[$doc])*
                pub fn $field<T: ?Sized + 'static>(&self, target: Target<'_>) -> Option<String> {
                    self.project::<T, _>(target, |d| d.$field.clone())
                }
            )*
        }

        $(
            $(#[$doc])*
            ///
            /// Reads the global registry.
            pub fn $field<T: ?Sized + 'static>(target: Target<'_>) -> Option<String> {
                MetadataRegistry::global().$field::<T>(target)
            }
        )*
    };
}

string_accessors! {
    /// Name of the element
    name;
    /// Label of the element
    label;
    /// Plural label of the element
    labels;
    /// Noun of the element
    noun;
    /// Plural noun of the element
    nouns;
    /// Token of the element
    token;
    /// Plural token of the element
    tokens;
    /// Description of the element
    description;
}

impl MetadataRegistry {
    /// Whether the element was marked sensitive
    ///
    /// `None` when no `Sensitive` annotation was applied, which is distinct
    /// from an explicit `Some(false)`.
    pub fn sensitive<T: ?Sized + 'static>(&self, target: Target<'_>) -> Option<bool> {
        self.project::<T, _>(target, |d| d.sensitive)
    }

    /// Example value of the element
    pub fn example<T: ?Sized + 'static>(&self, target: Target<'_>) -> Option<Value> {
        self.project::<T, _>(target, |d| d.example.clone())
    }

    /// Example value of the element decoded as `V`
    pub fn example_as<T: ?Sized + 'static, V: DeserializeOwned>(
        &self,
        target: Target<'_>,
    ) -> MetadataResult<Option<V>> {
        let Some(example) = self.example::<T>(target) else {
            return Ok(None);
        };
        serde_json::from_value(example)
            .map(Some)
            .map_err(|source| MetadataError::DecodeExample {
                target: MetadataKey::of::<T>(target).to_string(),
                type_name: std::any::type_name::<V>(),
                source,
            })
    }
}

/// Whether the element was marked sensitive
///
/// Reads the global registry.
pub fn sensitive<T: ?Sized + 'static>(target: Target<'_>) -> Option<bool> {
    MetadataRegistry::global().sensitive::<T>(target)
}

/// Example value of the element
///
/// Reads the global registry.
pub fn example<T: ?Sized + 'static>(target: Target<'_>) -> Option<Value> {
    MetadataRegistry::global().example::<T>(target)
}

/// Example value of the element decoded as `V`
///
/// Reads the global registry.
pub fn example_as<T: ?Sized + 'static, V: DeserializeOwned>(
    target: Target<'_>,
) -> MetadataResult<Option<V>> {
    MetadataRegistry::global().example_as::<T, V>(target)
}

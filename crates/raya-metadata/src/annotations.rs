//! Annotations
//!
//! Each annotation writes one or two fields of a `MetadataDescriptor` and
//! nothing else. They are applied through `MetadataRegistry::annotate`:
//!
//! ```ignore
//! registry.annotate::<Product>(Target::Type, Label::with_plural("Product", "Products"));
//! registry.annotate::<Product>(Target::member("sku"), Token::new("sku-code"));
//! registry.annotate::<AuthService>(Target::parameter("login", 0), Sensitive::new());
//! ```

use serde::Serialize;
use serde_json::Value;

use crate::descriptor::MetadataDescriptor;
use crate::error::{MetadataError, MetadataResult};

/// A write of one or more descriptor fields
pub trait Annotation {
    /// Short name used in log output
    fn kind(&self) -> &'static str;

    /// Write this annotation's fields into `descriptor`
    fn apply(&self, descriptor: &mut MetadataDescriptor);
}

impl<A: Annotation + ?Sized> Annotation for &A {
    fn kind(&self) -> &'static str {
        (**self).kind()
    }

    fn apply(&self, descriptor: &mut MetadataDescriptor) {
        (**self).apply(descriptor)
    }
}

/// Sets `name`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Name(String);

impl Name {
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }
}

impl Annotation for Name {
    fn kind(&self) -> &'static str {
        "name"
    }

    fn apply(&self, descriptor: &mut MetadataDescriptor) {
        descriptor.name = Some(self.0.clone());
    }
}

// Label, Noun and Token share a shape: a singular value that may be
// explicitly absent, plus a plural that is only written when supplied.
// A supplied plural may itself be absent, which clears the field.
macro_rules! plural_annotation {
    ($(#[$doc:meta])* $ty:ident, $kind:literal, $singular:ident, $plural:ident) => {
        $(#[$doc])*
        #[derive(Debug, Clone, PartialEq, Eq)]
        pub struct $ty {
            singular: Option<String>,
            plural: Option<Option<String>>,
        }

        impl $ty {
            /// Singular value only; the plural field is left untouched
            pub fn new(value: impl Into<String>) -> Self {
                Self {
                    singular: Some(value.into()),
                    plural: None,
                }
            }

            /// Singular and plural values
            pub fn with_plural(value: impl Into<String>, plural: impl Into<String>) -> Self {
                Self::new(value).plural(plural)
            }

            /// Singular value that may be absent; `None` clears the field
            pub fn from_option(value: Option<String>) -> Self {
                Self {
                    singular: value,
                    plural: None,
                }
            }

            /// Also write the plural value
            pub fn plural(mut self, plural: impl Into<String>) -> Self {
                self.plural = Some(Some(plural.into()));
                self
            }

            /// Also write a plural value that may be absent; `None` clears the field
            pub fn plural_option(mut self, plural: Option<String>) -> Self {
                self.plural = Some(plural);
                self
            }
        }

        impl Annotation for $ty {
            fn kind(&self) -> &'static str {
                $kind
            }

            fn apply(&self, descriptor: &mut MetadataDescriptor) {
                descriptor.$singular = self.singular.clone();
                if let Some(plural) = &self.plural {
                    descriptor.$plural = plural.clone();
                }
            }
        }
    };
}

plural_annotation!(
    /// Sets `label` and optionally `labels`
    ///
    /// Labels are meant for user interfaces: form inputs, table headers,
    /// generated documentation.
    Label,
    "label",
    label,
    labels
);

plural_annotation!(
    /// Sets `noun` and optionally `nouns`
    Noun,
    "noun",
    noun,
    nouns
);

plural_annotation!(
    /// Sets `token` and optionally `tokens`
    Token,
    "token",
    token,
    tokens
);

/// Sets `description`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Description(String);

impl Description {
    pub fn new(description: impl Into<String>) -> Self {
        Self(description.into())
    }
}

impl Annotation for Description {
    fn kind(&self) -> &'static str {
        "description"
    }

    fn apply(&self, descriptor: &mut MetadataDescriptor) {
        descriptor.description = Some(self.0.clone());
    }
}

/// Sets `example`
///
/// Any JSON-representable value is accepted, including structured data.
#[derive(Debug, Clone, PartialEq)]
pub struct Example(Value);

impl Example {
    pub fn new(value: impl Into<Value>) -> Self {
        Self(value.into())
    }

    /// Encode a serializable Rust value as the example
    pub fn serialize<T: Serialize + ?Sized>(value: &T) -> MetadataResult<Self> {
        serde_json::to_value(value)
            .map(Self)
            .map_err(|source| MetadataError::EncodeExample {
                type_name: std::any::type_name::<T>(),
                source,
            })
    }

    pub fn value(&self) -> &Value {
        &self.0
    }
}

impl Annotation for Example {
    fn kind(&self) -> &'static str {
        "example"
    }

    fn apply(&self, descriptor: &mut MetadataDescriptor) {
        descriptor.example = Some(self.0.clone());
    }
}

/// Sets `sensitive`
///
/// A bare `Sensitive::new()` (or `Sensitive::default()`) marks the element
/// sensitive. `Sensitive::set(false)` stores an explicit `false`, which
/// overrides nothing but its own key.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Sensitive(bool);

impl Sensitive {
    pub const fn new() -> Self {
        Self(true)
    }

    pub const fn set(sensitive: bool) -> Self {
        Self(sensitive)
    }

    pub const fn is_sensitive(&self) -> bool {
        self.0
    }
}

impl Default for Sensitive {
    fn default() -> Self {
        Self::new()
    }
}

impl From<bool> for Sensitive {
    fn from(sensitive: bool) -> Self {
        Self::set(sensitive)
    }
}

impl Annotation for Sensitive {
    fn kind(&self) -> &'static str {
        "sensitive"
    }

    fn apply(&self, descriptor: &mut MetadataDescriptor) {
        descriptor.sensitive = Some(self.0);
    }
}

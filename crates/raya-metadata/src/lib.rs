//! Raya Metadata - descriptive annotations for types, members and parameters
//!
//! Attaches human readable metadata (names, labels, nouns, tokens,
//! descriptions, example values, sensitivity) to a type, one of its fields
//! or methods, or a single method parameter. Consumers such as form
//! renderers, validators or documentation generators read it back through
//! the accessor functions.
//!
//! # Example
//!
//! ```ignore
//! use raya_metadata::{annotated, Annotated, Target};
//!
//! #[derive(Annotated)]
//! #[meta(label("Product", "Products"))]
//! struct Product {
//!     #[meta(token("sku-code"))]
//!     sku: String,
//! }
//!
//! struct ProductService;
//!
//! #[annotated]
//! impl ProductService {
//!     #[meta(label("Create Product"))]
//!     fn create(&self, #[meta(sensitive)] owner_token: String) {}
//! }
//!
//! assert_eq!(raya_metadata::label::<Product>(Target::Type).as_deref(), Some("Product"));
//! assert_eq!(raya_metadata::tokens::<Product>(Target::member("sku")), None);
//! ```
//!
//! The same can be done without macros:
//!
//! ```ignore
//! use raya_metadata::{Label, MetadataRegistry, Target, Token};
//!
//! let registry = MetadataRegistry::new();
//! registry.annotate::<Product>(Target::Type, Label::with_plural("Product", "Products"));
//! registry.annotate::<Product>(Target::member("sku"), Token::new("sku-code"));
//! ```

mod accessors;
mod annotations;
mod descriptor;
mod error;
mod key;
mod options;
mod registry;

pub use accessors::{
    description, example, example_as, label, labels, name, noun, nouns, sensitive, token, tokens,
};
pub use annotations::{Annotation, Description, Example, Label, Name, Noun, Sensitive, Token};
pub use descriptor::{DescriptorRef, MetadataDescriptor};
pub use error::{MetadataError, MetadataResult};
pub use key::{MetadataKey, Target, TypeKey};
pub use options::{OverwritePolicy, RegistryOptions};
pub use registry::{MetadataRegistry, Registration};

pub use raya_metadata_macros::{annotated, Annotated};

#[doc(hidden)]
pub mod __private {
    pub use inventory;
}

//! Error types for raya-metadata
//!
//! Annotating and reading metadata never fails. Errors only come from
//! converting example values to and from concrete Rust types.

/// Result type for typed example conversions
pub type MetadataResult<T> = Result<T, MetadataError>;

/// Metadata error types
#[derive(Debug, thiserror::Error)]
pub enum MetadataError {
    /// Example value could not be encoded
    #[error("Cannot encode example value of type {type_name}: {source}")]
    EncodeExample {
        /// Rust type of the rejected value
        type_name: &'static str,
        /// Underlying serde error
        #[source]
        source: serde_json::Error,
    },

    /// Stored example does not match the requested type
    #[error("Example of {target} is not a valid {type_name}: {source}")]
    DecodeExample {
        /// Annotated element, e.g. `Product.price`
        target: String,
        /// Requested Rust type
        type_name: &'static str,
        /// Underlying serde error
        #[source]
        source: serde_json::Error,
    },
}

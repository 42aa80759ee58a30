//! Metadata Descriptor
//!
//! The record every annotation writes into. One descriptor exists per
//! `MetadataKey`; the registry hands out `DescriptorRef` handles that all
//! point at the same allocation.

use std::sync::Arc;

use parking_lot::{RwLock, RwLockReadGuard, RwLockWriteGuard};
use serde_json::Value;

/// Descriptive metadata for a type, member or parameter
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MetadataDescriptor {
    /// Identifier of the element
    pub name: Option<String>,
    /// Human readable label
    pub label: Option<String>,
    /// Plural form of `label`
    pub labels: Option<String>,
    /// Noun used when referring to the element in prose
    pub noun: Option<String>,
    /// Plural form of `noun`
    pub nouns: Option<String>,
    /// Machine token (slug, url segment, ...)
    pub token: Option<String>,
    /// Plural form of `token`
    pub tokens: Option<String>,
    /// Whether the element holds sensitive data
    pub sensitive: Option<bool>,
    /// Free-form description
    pub description: Option<String>,
    /// Example value
    pub example: Option<Value>,
}

impl MetadataDescriptor {
    /// Create a descriptor with only `name` set
    pub fn new(name: Option<String>) -> Self {
        Self {
            name,
            ..Self::default()
        }
    }

    /// Names of fields that held a value in `self` and hold a different
    /// one in `after`
    pub(crate) fn replaced_fields(&self, after: &Self) -> Vec<&'static str> {
        fn changed<T: PartialEq>(before: &Option<T>, after: &Option<T>) -> bool {
            before.is_some() && before != after
        }

        let mut fields = Vec::new();
        if changed(&self.name, &after.name) {
            fields.push("name");
        }
        if changed(&self.label, &after.label) {
            fields.push("label");
        }
        if changed(&self.labels, &after.labels) {
            fields.push("labels");
        }
        if changed(&self.noun, &after.noun) {
            fields.push("noun");
        }
        if changed(&self.nouns, &after.nouns) {
            fields.push("nouns");
        }
        if changed(&self.token, &after.token) {
            fields.push("token");
        }
        if changed(&self.tokens, &after.tokens) {
            fields.push("tokens");
        }
        if changed(&self.sensitive, &after.sensitive) {
            fields.push("sensitive");
        }
        if changed(&self.description, &after.description) {
            fields.push("description");
        }
        if changed(&self.example, &after.example) {
            fields.push("example");
        }
        fields
    }
}

/// Shared handle to a registered descriptor
///
/// Cloning the handle does not copy the descriptor. Writes through any
/// handle are visible through every other handle for the same key.
#[derive(Debug, Clone)]
pub struct DescriptorRef(Arc<RwLock<MetadataDescriptor>>);

impl DescriptorRef {
    pub(crate) fn new(descriptor: MetadataDescriptor) -> Self {
        Self(Arc::new(RwLock::new(descriptor)))
    }

    /// Lock the descriptor for reading
    pub fn read(&self) -> RwLockReadGuard<'_, MetadataDescriptor> {
        self.0.read()
    }

    /// Lock the descriptor for writing
    pub fn write(&self) -> RwLockWriteGuard<'_, MetadataDescriptor> {
        self.0.write()
    }

    /// Copy of the current descriptor state
    pub fn snapshot(&self) -> MetadataDescriptor {
        self.0.read().clone()
    }

    /// Whether both handles point at the same descriptor
    pub fn ptr_eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }
}

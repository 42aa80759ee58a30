//! Metadata Registry
//!
//! Maps `MetadataKey`s to descriptors. Two resolution modes exist:
//!
//! - `resolve` creates the descriptor on first use (annotations go through
//!   this path)
//! - `get` only looks up, and never creates (accessors go through this path)
//!
//! ## Usage contract
//!
//! Annotations are applied while the program sets itself up, reads happen
//! afterwards. The table and the descriptors are behind locks so sharing
//! the registry is safe, but multi-field writes from concurrent annotators
//! are not ordered against each other.
//!
//! ## Global registry
//!
//! `MetadataRegistry::global()` is created on first use and immediately
//! applies every `Registration` submitted by `#[derive(Annotated)]` and
//! `#[annotated]`. Fresh registries built with `new()` start empty; call
//! `load_registrations()` to populate them the same way.

use std::sync::LazyLock;

use dashmap::DashMap;
use rustc_hash::FxBuildHasher;

use crate::annotations::Annotation;
use crate::descriptor::{DescriptorRef, MetadataDescriptor};
use crate::key::{MetadataKey, Target};
use crate::options::{OverwritePolicy, RegistryOptions};

static GLOBAL_REGISTRY: LazyLock<MetadataRegistry> = LazyLock::new(|| {
    let registry = MetadataRegistry::new();
    registry.load_registrations();
    registry
});

/// A set of annotations submitted at link time
///
/// Built by the derive and attribute macros; collected with `inventory`.
pub struct Registration {
    register: fn(&MetadataRegistry),
}

impl Registration {
    pub const fn new(register: fn(&MetadataRegistry)) -> Self {
        Self { register }
    }

    /// Apply the annotations to `registry`
    pub fn apply(&self, registry: &MetadataRegistry) {
        (self.register)(registry)
    }
}

inventory::collect!(Registration);

/// Store of metadata descriptors
#[derive(Debug)]
pub struct MetadataRegistry {
    descriptors: DashMap<MetadataKey, DescriptorRef, FxBuildHasher>,
    options: RegistryOptions,
}

impl MetadataRegistry {
    /// Create a new empty registry
    pub fn new() -> Self {
        Self::with_options(RegistryOptions::default())
    }

    /// Create a new empty registry with `options`
    pub fn with_options(options: RegistryOptions) -> Self {
        Self {
            descriptors: DashMap::with_hasher(FxBuildHasher),
            options,
        }
    }

    /// The process-wide registry
    pub fn global() -> &'static MetadataRegistry {
        &GLOBAL_REGISTRY
    }

    pub fn options(&self) -> RegistryOptions {
        self.options
    }

    /// Apply every collected `Registration` to this registry
    ///
    /// Returns the number of registrations applied.
    pub fn load_registrations(&self) -> usize {
        let mut count = 0;
        for registration in inventory::iter::<Registration> {
            registration.apply(self);
            count += 1;
        }
        tracing::debug!(count, descriptors = self.len(), "loaded metadata registrations");
        count
    }

    // ========================================================================
    // Resolution
    // ========================================================================

    /// Get the descriptor for `target` on `T`, creating it if needed
    pub fn resolve<T: ?Sized + 'static>(&self, target: Target<'_>) -> DescriptorRef {
        self.resolve_key(&MetadataKey::of::<T>(target))
    }

    /// Get the descriptor for `key`, creating it if needed
    ///
    /// A new descriptor starts with the key's default name.
    pub fn resolve_key(&self, key: &MetadataKey) -> DescriptorRef {
        if let Some(existing) = self.get_key(key) {
            return existing;
        }

        self.descriptors
            .entry(key.clone())
            .or_insert_with(|| {
                let name = key.default_name();
                tracing::debug!(key = %key, name = ?name, "created metadata descriptor");
                DescriptorRef::new(MetadataDescriptor::new(name))
            })
            .value()
            .clone()
    }

    /// Look up the descriptor for `target` on `T` without creating it
    pub fn get<T: ?Sized + 'static>(&self, target: Target<'_>) -> Option<DescriptorRef> {
        self.get_key(&MetadataKey::of::<T>(target))
    }

    /// Look up the descriptor for `key` without creating it
    pub fn get_key(&self, key: &MetadataKey) -> Option<DescriptorRef> {
        self.descriptors.get(key).map(|entry| entry.value().clone())
    }

    /// Check if a descriptor exists for `target` on `T`
    pub fn contains<T: ?Sized + 'static>(&self, target: Target<'_>) -> bool {
        self.descriptors.contains_key(&MetadataKey::of::<T>(target))
    }

    /// Get number of descriptors
    pub fn len(&self) -> usize {
        self.descriptors.len()
    }

    /// Check if registry is empty
    pub fn is_empty(&self) -> bool {
        self.descriptors.is_empty()
    }

    // ========================================================================
    // Annotation
    // ========================================================================

    /// Apply `annotation` to `target` on `T`
    pub fn annotate<T: ?Sized + 'static>(&self, target: Target<'_>, annotation: impl Annotation) {
        self.annotate_key(&MetadataKey::of::<T>(target), annotation);
    }

    /// Apply `annotation` to the descriptor for `key`
    pub fn annotate_key(&self, key: &MetadataKey, annotation: impl Annotation) {
        let descriptor = self.resolve_key(key);
        let mut guard = descriptor.write();

        match self.options.overwrite {
            OverwritePolicy::Replace => annotation.apply(&mut guard),
            OverwritePolicy::Warn => {
                let before = guard.clone();
                annotation.apply(&mut guard);

                let default_name = key.default_name();
                let replaced: Vec<_> = before
                    .replaced_fields(&guard)
                    .into_iter()
                    .filter(|field| *field != "name" || before.name != default_name)
                    .collect();
                if !replaced.is_empty() {
                    tracing::warn!(
                        key = %key,
                        annotation = annotation.kind(),
                        fields = ?replaced,
                        "annotation replaced existing metadata"
                    );
                }
            }
        }

        tracing::trace!(key = %key, annotation = annotation.kind(), "applied annotation");
    }
}

impl Default for MetadataRegistry {
    fn default() -> Self {
        Self::new()
    }
}

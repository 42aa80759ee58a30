//! Registry options

/// What to do when an annotation replaces a value that is already set
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OverwritePolicy {
    /// Last write wins
    #[default]
    Replace,
    /// Last write wins, and a warning naming the replaced fields is logged
    Warn,
}

/// Options for a `MetadataRegistry`
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RegistryOptions {
    /// Behavior on re-annotation
    pub overwrite: OverwritePolicy,
}

impl RegistryOptions {
    /// Set the re-annotation policy
    pub fn overwrite(mut self, policy: OverwritePolicy) -> Self {
        self.overwrite = policy;
        self
    }
}

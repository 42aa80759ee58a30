//! Metadata Keys
//!
//! A descriptor is identified by the type that owns it plus a slot string
//! derived from the annotated element:
//!
//! | Target                           | Slot          |
//! |----------------------------------|---------------|
//! | `Target::Type`                   | `""`          |
//! | `Target::member("sku")`          | `"sku"`       |
//! | `Target::parameter("create", 1)` | `"create:1"`  |
//!
//! Fields, properties and methods share the member slot, so a field and a
//! method with the same name resolve to the same descriptor.

use std::any::TypeId;
use std::borrow::Cow;
use std::fmt;
use std::hash::{Hash, Hasher};

/// Separator between a member name and a parameter index in a slot
const PARAMETER_SEPARATOR: char = ':';

/// Identity of an owning type
///
/// Two keys are equal when they name the same Rust type. A key built from
/// the type (`TypeKey::of::<T>()`) and one built from an instance
/// (`TypeKey::of_val(&value)`) are interchangeable.
#[derive(Clone, Copy)]
pub struct TypeKey {
    id: TypeId,
    type_name: &'static str,
}

impl TypeKey {
    /// Key for the type `T`
    pub fn of<T: ?Sized + 'static>() -> Self {
        Self {
            id: TypeId::of::<T>(),
            type_name: std::any::type_name::<T>(),
        }
    }

    /// Key for the type of `value`
    ///
    /// The key names the static type of the reference. Pass the owner itself:
    /// `of_val(&boxed)` keys on `Box<Product>`, while `of_val(&*boxed)` keys
    /// on `Product`.
    pub fn of_val<T: 'static>(_value: &T) -> Self {
        Self::of::<T>()
    }

    /// The `TypeId` of the owning type
    pub fn id(&self) -> TypeId {
        self.id
    }

    /// Fully qualified type name as reported by the compiler
    pub fn type_name(&self) -> &'static str {
        self.type_name
    }

    /// Declared type name, with module paths removed
    ///
    /// `shop::model::Product` becomes `Product` and
    /// `alloc::vec::Vec<shop::model::Product>` becomes `Vec<Product>`.
    pub fn name(&self) -> Cow<'static, str> {
        short_type_name(self.type_name)
    }
}

impl PartialEq for TypeKey {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for TypeKey {}

impl Hash for TypeKey {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

impl fmt::Debug for TypeKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("TypeKey").field(&self.type_name).finish()
    }
}

impl fmt::Display for TypeKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name())
    }
}

/// The element of a type an annotation applies to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Target<'a> {
    /// The type itself
    Type,
    /// A field, property or method
    Member(&'a str),
    /// A parameter of a method, counted from zero without the receiver
    Parameter {
        /// Method name
        member: &'a str,
        /// Parameter position
        index: usize,
    },
}

impl<'a> Target<'a> {
    /// Target a field, property or method
    pub const fn member(name: &'a str) -> Self {
        Target::Member(name)
    }

    /// Target the parameter at `index` of method `member`
    pub const fn parameter(member: &'a str, index: usize) -> Self {
        Target::Parameter { member, index }
    }

    /// Slot string for this target
    pub fn slot(&self) -> String {
        match self {
            Target::Type => String::new(),
            Target::Member(name) => (*name).to_string(),
            Target::Parameter { member, index } => {
                format!("{member}{PARAMETER_SEPARATOR}{index}")
            }
        }
    }
}

/// Composite key of a descriptor: owning type plus slot
///
/// Equality and hashing use the owner and the slot string only. Whether the
/// key was built from a parameter target is kept alongside for naming.
#[derive(Debug, Clone)]
pub struct MetadataKey {
    owner: TypeKey,
    slot: String,
    parameter: bool,
}

impl PartialEq for MetadataKey {
    fn eq(&self, other: &Self) -> bool {
        self.owner == other.owner && self.slot == other.slot
    }
}

impl Eq for MetadataKey {}

impl Hash for MetadataKey {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.owner.hash(state);
        self.slot.hash(state);
    }
}

impl MetadataKey {
    /// Build the key for `target` on `owner`
    pub fn new(owner: TypeKey, target: Target<'_>) -> Self {
        Self {
            owner,
            slot: target.slot(),
            parameter: matches!(target, Target::Parameter { .. }),
        }
    }

    /// Key for `target` on type `T`
    pub fn of<T: ?Sized + 'static>(target: Target<'_>) -> Self {
        Self::new(TypeKey::of::<T>(), target)
    }

    /// Owning type
    pub fn owner(&self) -> TypeKey {
        self.owner
    }

    /// Slot string (`""`, `member` or `member:index`)
    pub fn slot(&self) -> &str {
        &self.slot
    }

    /// Whether the key addresses a method parameter
    pub fn is_parameter(&self) -> bool {
        self.parameter
    }

    /// Name a freshly created descriptor starts with
    ///
    /// Types default to their declared name and members to the member
    /// name. Parameters have no name available here.
    pub fn default_name(&self) -> Option<String> {
        if self.slot.is_empty() {
            Some(self.owner.name().into_owned())
        } else if self.is_parameter() {
            None
        } else {
            Some(self.slot.clone())
        }
    }
}

impl fmt::Display for MetadataKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.slot.is_empty() {
            write!(f, "{}", self.owner)
        } else {
            write!(f, "{}.{}", self.owner, self.slot)
        }
    }
}

/// Strip module paths from every path segment of a type name
fn short_type_name(full: &'static str) -> Cow<'static, str> {
    let is_delimiter = |c: char| matches!(c, '<' | '>' | ',' | '(' | ')' | '[' | ']' | '&' | ';' | ' ');

    if !full.contains(is_delimiter) {
        return Cow::Borrowed(full.rsplit("::").next().unwrap_or(full));
    }

    let mut out = String::with_capacity(full.len());
    let mut segment_start = 0;
    for (i, c) in full.char_indices() {
        if is_delimiter(c) {
            let segment = &full[segment_start..i];
            out.push_str(segment.rsplit("::").next().unwrap_or(segment));
            out.push(c);
            segment_start = i + c.len_utf8();
        }
    }
    let tail = &full[segment_start..];
    out.push_str(tail.rsplit("::").next().unwrap_or(tail));
    Cow::Owned(out)
}

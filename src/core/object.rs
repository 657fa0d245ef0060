//! Object capability interface.
//!
//! The engine never inspects host objects directly. Anything submitted for
//! rule evaluation exposes exactly two tags through this interface, and
//! matching is plain string equality against the tags a rule filters on.

use serde::{Deserialize, Serialize};

/// Capability interface for objects submitted to rule evaluation.
///
/// Hosts implement this on whatever their gameplay objects are (sprites,
/// entities, plain records). The engine only ever calls these two methods.
pub trait GameplayObject {
    /// The object's class tag (e.g. `"fruit"`, `"bomb"`).
    ///
    /// Rules always filter on this tag.
    fn obj_class(&self) -> &str;

    /// The object's subclass tag (e.g. `"golden"`).
    ///
    /// Returns the empty string when the object carries no subclass; the
    /// override is the capability declaration. Rules only consult this tag
    /// when they carry a subclass filter.
    fn obj_subclass(&self) -> &str {
        ""
    }
}

/// A plain-data [`GameplayObject`] for hosts that keep tags as data rather
/// than deriving them from a live object.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaggedObject {
    /// Class tag reported through the capability interface.
    pub obj_class: String,

    /// Subclass tag; empty means untagged.
    pub obj_subclass: String,
}

impl TaggedObject {
    /// Create an object with a class tag and no subclass.
    pub fn new(obj_class: impl Into<String>) -> Self {
        Self {
            obj_class: obj_class.into(),
            obj_subclass: String::new(),
        }
    }

    /// Set the subclass tag (builder pattern).
    #[must_use]
    pub fn with_subclass(mut self, obj_subclass: impl Into<String>) -> Self {
        self.obj_subclass = obj_subclass.into();
        self
    }
}

impl GameplayObject for TaggedObject {
    fn obj_class(&self) -> &str {
        &self.obj_class
    }

    fn obj_subclass(&self) -> &str {
        &self.obj_subclass
    }
}

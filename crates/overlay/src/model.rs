use derive_more::Display;
use std::any::{self, TypeId};

///
/// FieldModel
///
/// Runtime field metadata exposed by a reflected type.
/// `type_id` is the exact declared value type; pair matching compares type
/// identity, never structural shape.
///

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct FieldModel {
    /// Field name as declared on the type.
    pub name: &'static str,
    /// Identity of the declared value type.
    pub type_id: TypeId,
    /// Human-readable type name for diagnostics.
    pub type_name: &'static str,
    /// Whether the field can be read from a source instance.
    pub readable: bool,
    /// Whether the field can be written on a target instance.
    pub writable: bool,
}

impl FieldModel {
    #[must_use]
    pub fn new<T: 'static>(name: &'static str) -> Self {
        Self {
            name,
            type_id: TypeId::of::<T>(),
            type_name: any::type_name::<T>(),
            readable: true,
            writable: true,
        }
    }

    /// Mark the field as not writable (computed or derived members).
    #[must_use]
    pub const fn read_only(mut self) -> Self {
        self.writable = false;
        self
    }

    /// Mark the field as not readable.
    #[must_use]
    pub const fn write_only(mut self) -> Self {
        self.readable = false;
        self
    }
}

///
/// FieldPair
///
/// A resolved (readable source field, writable target field) match.
/// Invariant: both sides share the same name and the same value type.
///

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct FieldPair {
    pub name: &'static str,
    pub type_id: TypeId,
}

///
/// Mode
///
/// Derived per call, never stored: update when the caller supplies a target
/// instance, create otherwise.
///

#[derive(Clone, Copy, Debug, Display, Eq, PartialEq)]
pub enum Mode {
    #[display("create")]
    Create,
    #[display("update")]
    Update,
}

impl Mode {
    pub(crate) const fn of<T>(target: Option<&T>) -> Self {
        match target {
            Some(_) => Self::Update,
            None => Self::Create,
        }
    }
}

///
/// TESTS
///

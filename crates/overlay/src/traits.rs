use crate::{error::Error, model::FieldModel, policy::PolicyBinding};
use std::any::Any;

//
// Reflection capability traits. `#[derive(Overlay)]` implements all four for
// named-field structs; adapters for foreign or computed shapes can implement
// them by hand.
//

///
/// FieldSchema
///
/// Enumerable field metadata for a type. The `'static` bound makes the
/// implementor usable as a cache identity key.
///

pub trait FieldSchema: 'static {
    /// Field metadata in declaration order.
    fn fields() -> Vec<FieldModel>;
}

///
/// FieldRead
///

pub trait FieldRead: FieldSchema {
    /// Clone the named field's current value as an erased box.
    /// Returns `None` for names outside the schema.
    fn read_field(&self, field: &str) -> Option<Box<dyn Any>>;
}

///
/// FieldWrite
///

pub trait FieldWrite: FieldSchema + Sized {
    /// Build a fresh instance via the type's default construction rule.
    fn construct() -> Result<Self, Error>;

    /// Overwrite the named field from an erased box.
    /// The box must hold exactly the field's declared value type.
    fn write_field(&mut self, field: &str, value: Box<dyn Any>) -> Result<(), Error>;
}

///
/// FieldPolicies
///
/// Declared per-field copy policies of a source type. Empty for types with
/// no declarations; such types copy every matched field in both modes.
///

pub trait FieldPolicies: FieldSchema {
    fn field_policies() -> Vec<PolicyBinding>;
}

//! Overlay: a field-overlay mapper that populates or updates one data shape
//! from another without hand-written field-by-field assignment.
//!
//! ## Crate layout
//! - `model`: runtime field metadata, resolved pairs, and copy modes.
//! - `policy`: the per-field two-flag copy policy and its bindings.
//! - `traits`: the reflection capability set implemented by `#[derive(Overlay)]`.
//! - `cache`: type-keyed resolver caches and their observability reports.
//! - `mapper`: the `Overlay` engine and its four call shapes.
//! - `error`: the two failure classes a copy call can surface.
#![warn(unreachable_pub)]

extern crate self as overlay;

pub mod cache;
pub mod error;
pub mod mapper;
pub mod model;
pub mod policy;
pub mod traits;

mod resolve;

// re-exports
pub use error::Error;
pub use mapper::Overlay;
pub use overlay_derive::Overlay;

//
// Consts
//

/// Workspace version re-export for downstream tooling/tests.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

///
/// Prelude
///
/// Prelude contains only domain vocabulary.
/// No caches, resolvers, or helpers are re-exported here.
///

pub mod prelude {
    pub use crate::{
        Overlay,
        error::Error,
        model::Mode,
        policy::CopyPolicy,
        traits::{FieldPolicies as _, FieldRead as _, FieldSchema as _, FieldWrite as _},
    };
}

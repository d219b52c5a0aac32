use crate::model::Mode;
use serde::Serialize;

///
/// CopyPolicy
///
/// Per-field eligibility for the two copy modes. Pure data; a declaration
/// always sets both flags explicitly. A field with no declaration at all is
/// copied unconditionally, in both modes.
///

#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize)]
pub struct CopyPolicy {
    pub on_create: bool,
    pub on_update: bool,
}

impl CopyPolicy {
    #[must_use]
    pub const fn includes(self, mode: Mode) -> bool {
        match mode {
            Mode::Create => self.on_create,
            Mode::Update => self.on_update,
        }
    }
}

///
/// PolicyBinding
///
/// A field paired with its declared policy. Only declared fields appear in
/// a resolved list; the default always-copy behavior has no binding.
///

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct PolicyBinding {
    pub field: &'static str,
    pub policy: CopyPolicy,
}

///
/// TESTS
///

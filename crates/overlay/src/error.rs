use thiserror::Error as ThisError;

///
/// Error
///
/// The only two failure classes a copy call defines. Unmapped or excluded
/// fields are silent omissions, never errors, and there is no rollback:
/// fields written before a failure stay written on the dropped target.
///

#[derive(Debug, ThisError)]
#[remain::sorted]
pub enum Error {
    /// A resolved value could not be written to the target field.
    /// Guarded upstream by exact type matching, so this indicates a
    /// hand-written adapter whose schema and write impl disagree.
    #[error("cannot assign field '{field}' on {type_name}")]
    Assignment {
        field: String,
        type_name: &'static str,
    },

    /// The target type's default construction rule failed.
    #[error("cannot construct {type_name}: {message}")]
    Construction {
        type_name: &'static str,
        message: String,
    },
}

impl Error {
    /// Construct an assignment failure for the named field.
    pub fn assignment(field: impl Into<String>, type_name: &'static str) -> Self {
        Self::Assignment {
            field: field.into(),
            type_name,
        }
    }

    /// Construct a target-construction failure.
    pub fn construction(type_name: &'static str, message: impl Into<String>) -> Self {
        Self::Construction {
            type_name,
            message: message.into(),
        }
    }
}

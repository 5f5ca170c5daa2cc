//! Error types for the collaboration path.

use crate::role::RoleName;

/// Errors produced when a collaborator is asked to perform its unit of work.
///
/// There is exactly one kind: an abstract contract method or an unfinished
/// stub was invoked instead of a concrete implementation. The coordinator
/// tags the error with the role that raised it before handing it back.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CapabilityError {
    #[error("{operation} is not implemented{}", role_suffix(.role))]
    NotImplemented {
        operation: String,
        role: Option<RoleName>,
    },
}

fn role_suffix(role: &Option<RoleName>) -> String {
    match role {
        Some(role) => format!(" (role {role})"),
        None => String::new(),
    }
}

impl CapabilityError {
    /// An untagged `NotImplemented` for `operation`.
    pub fn not_implemented(operation: impl Into<String>) -> Self {
        CapabilityError::NotImplemented {
            operation: operation.into(),
            role: None,
        }
    }

    /// Attach the role that raised this error.
    ///
    /// An existing tag is kept: the innermost role is the one that failed.
    pub fn for_role(self, role: &RoleName) -> Self {
        match self {
            CapabilityError::NotImplemented {
                operation,
                role: None,
            } => CapabilityError::NotImplemented {
                operation,
                role: Some(role.clone()),
            },
            tagged => tagged,
        }
    }

    /// The role that raised this error, if it has been tagged.
    pub fn role(&self) -> Option<&RoleName> {
        match self {
            CapabilityError::NotImplemented { role, .. } => role.as_ref(),
        }
    }
}

/// Result type for collaboration operations.
pub type CapabilityResult<T> = std::result::Result<T, CapabilityError>;

//! Developer roles: the collaborators of a project team.

use crate::capability::Capability;
use crate::error::CapabilityResult;

/// Writes server-side code in a configurable language.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BackendDeveloper {
    language: String,
}

impl BackendDeveloper {
    pub fn new(language: impl Into<String>) -> Self {
        Self {
            language: language.into(),
        }
    }

    pub fn python() -> Self {
        Self::new("Python")
    }

    pub fn language(&self) -> &str {
        &self.language
    }
}

impl Default for BackendDeveloper {
    fn default() -> Self {
        Self::python()
    }
}

impl Capability for BackendDeveloper {
    type Output = String;

    fn perform(&self) -> CapabilityResult<String> {
        Ok(format!("Writing {} code", self.language))
    }
}

/// Writes browser code. Carries no state of its own.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FrontendDeveloper;

impl Capability for FrontendDeveloper {
    type Output = String;

    fn perform(&self) -> CapabilityResult<String> {
        Ok("Writing JavaScript code".to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_backend_defaults_to_python() {
        assert_eq!(
            BackendDeveloper::default().perform().unwrap(),
            "Writing Python code"
        );
    }

    #[test]
    fn test_backend_language_is_configurable() {
        let dev = BackendDeveloper::new("Rust");
        assert_eq!(dev.language(), "Rust");
        assert_eq!(dev.perform().unwrap(), "Writing Rust code");
    }

    #[test]
    fn test_frontend_writes_javascript() {
        assert_eq!(
            FrontendDeveloper.perform().unwrap(),
            "Writing JavaScript code"
        );
    }
}

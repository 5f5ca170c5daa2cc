//! Role names: the keys of a roster.

use serde::{Deserialize, Serialize};

/// Rejected role name.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid role name {input:?}: must not be blank")]
pub struct InvalidRoleName {
    pub input: String,
}

/// A non-empty, trimmed role identifier such as `backend` or `frontend`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct RoleName(String);

impl RoleName {
    pub fn new(name: impl Into<String>) -> Result<Self, InvalidRoleName> {
        let name = name.into();
        let trimmed = name.trim();
        if trimmed.is_empty() {
            return Err(InvalidRoleName { input: name });
        }
        Ok(Self(trimmed.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for RoleName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<String> for RoleName {
    type Error = InvalidRoleName;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        RoleName::new(value)
    }
}

impl TryFrom<&str> for RoleName {
    type Error = InvalidRoleName;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        RoleName::new(value)
    }
}

impl From<RoleName> for String {
    fn from(value: RoleName) -> Self {
        value.0
    }
}

impl AsRef<str> for RoleName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl PartialEq<str> for RoleName {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl PartialEq<&str> for RoleName {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_role_name_is_trimmed() {
        let role = RoleName::new("  backend ").unwrap();
        assert_eq!(role.as_str(), "backend");
        assert_eq!(role.to_string(), "backend");
    }

    #[test]
    fn test_blank_role_name_rejected() {
        assert_eq!(
            RoleName::new("   "),
            Err(InvalidRoleName {
                input: "   ".to_string()
            })
        );
        assert!(RoleName::new("").is_err());
    }

    #[test]
    fn test_serde_rejects_blank_name() {
        let ok: RoleName = serde_json::from_str("\"frontend\"").unwrap();
        assert_eq!(ok, "frontend");

        let bad = serde_json::from_str::<RoleName>("\"\"");
        assert!(bad.is_err());
    }
}

//! Team roster configuration.
//!
//! A roster file names each role and the kind of developer that fills it:
//!
//! ```json
//! { "roles": [
//!     { "role": "backend", "kind": "backend", "language": "Python" },
//!     { "role": "frontend", "kind": "frontend" }
//! ] }
//! ```
//!
//! [`RosterConfig::build_roster`] assembles the collaborators; the coordinator
//! only ever receives the finished [`Roster`].

use std::collections::HashSet;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::role::{InvalidRoleName, RoleName};
use crate::roster::Roster;
use crate::team::{BackendDeveloper, FrontendDeveloper};

/// Errors produced while loading or validating a roster configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read roster file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse roster: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("roster must name at least one role")]
    EmptyRoster,

    #[error("{0}")]
    InvalidRole(#[from] InvalidRoleName),

    #[error("role {0} appears more than once")]
    DuplicateRole(String),
}

/// Result type for configuration operations.
pub type ConfigResult<T> = std::result::Result<T, ConfigError>;

/// Which developer fills a role.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum DeveloperKind {
    Backend { language: String },
    Frontend,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoleEntry {
    pub role: String,
    #[serde(flatten)]
    pub kind: DeveloperKind,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RosterConfig {
    pub roles: Vec<RoleEntry>,
}

impl Default for RosterConfig {
    fn default() -> Self {
        Self::standard_team()
    }
}

impl RosterConfig {
    /// Python backend followed by a JavaScript frontend.
    pub fn standard_team() -> Self {
        Self {
            roles: vec![
                RoleEntry {
                    role: "backend".to_string(),
                    kind: DeveloperKind::Backend {
                        language: "Python".to_string(),
                    },
                },
                RoleEntry {
                    role: "frontend".to_string(),
                    kind: DeveloperKind::Frontend,
                },
            ],
        }
    }

    /// Parse and validate a JSON roster.
    pub fn from_json_str(json: &str) -> ConfigResult<Self> {
        let config: RosterConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Read, parse and validate a JSON roster file.
    pub fn load(path: &Path) -> ConfigResult<Self> {
        let raw = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        debug!(path = %path.display(), "loaded roster file");
        Self::from_json_str(&raw)
    }

    /// Validate and return the role names in order.
    pub fn validate(&self) -> ConfigResult<Vec<RoleName>> {
        if self.roles.is_empty() {
            return Err(ConfigError::EmptyRoster);
        }

        let mut seen = HashSet::new();
        let mut names = Vec::with_capacity(self.roles.len());
        for entry in &self.roles {
            let name = RoleName::new(entry.role.as_str())?;
            if !seen.insert(name.clone()) {
                return Err(ConfigError::DuplicateRole(name.to_string()));
            }
            names.push(name);
        }
        Ok(names)
    }

    /// Assemble one collaborator per entry, in file order.
    pub fn build_roster(&self) -> ConfigResult<Roster<String>> {
        let names = self.validate()?;
        let mut roster = Roster::new();
        for (name, entry) in names.into_iter().zip(&self.roles) {
            match &entry.kind {
                DeveloperKind::Backend { language } => {
                    roster.insert(name, BackendDeveloper::new(language.as_str()));
                }
                DeveloperKind::Frontend => {
                    roster.insert(name, FrontendDeveloper);
                }
            }
        }
        Ok(roster)
    }
}

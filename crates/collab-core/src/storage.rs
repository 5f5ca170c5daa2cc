//! Persistence as a separate responsibility.
//!
//! Producing a result and storing it are different jobs. Collaborators only
//! produce; anything that wants to keep a result goes through a
//! [`RecordStore`]. No backend ships here: [`UnimplementedStore`] marks the
//! seam and fails every call.

use serde::{Deserialize, Serialize};

use crate::coordinator::RunReport;
use crate::error::{CapabilityError, CapabilityResult};
use crate::role::RoleName;

/// An opaque payload produced by a role.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Record {
    pub role: RoleName,
    pub payload: serde_json::Value,
}

impl Record {
    pub fn new(role: RoleName, payload: serde_json::Value) -> Self {
        Self { role, payload }
    }

    /// One record per entry of a successful run, in delegation order.
    pub fn from_report<O: Serialize>(report: &RunReport<O>) -> serde_json::Result<Vec<Record>> {
        report
            .entries
            .iter()
            .map(|entry| {
                Ok(Record::new(
                    entry.role.clone(),
                    serde_json::to_value(&entry.output)?,
                ))
            })
            .collect()
    }
}

pub trait RecordStore {
    fn save(&self, record: &Record) -> CapabilityResult<()>;
}

/// Placeholder store with no backend.
#[derive(Debug, Clone, Copy, Default)]
pub struct UnimplementedStore;

impl RecordStore for UnimplementedStore {
    fn save(&self, record: &Record) -> CapabilityResult<()> {
        Err(CapabilityError::not_implemented("save").for_role(&record.role))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn record() -> Record {
        Record::new(RoleName::new("backend").unwrap(), json!("Writing Python code"))
    }

    #[test]
    fn test_unimplemented_store_rejects_save() {
        let err = UnimplementedStore.save(&record()).unwrap_err();
        assert_eq!(err.to_string(), "save is not implemented (role backend)");
    }

    #[test]
    fn test_records_from_report_follow_delegation_order() {
        use crate::coordinator::Coordinator;
        use crate::roster::Roster;
        use crate::team::{BackendDeveloper, FrontendDeveloper};

        let coordinator = Coordinator::new(
            Roster::new()
                .with(RoleName::new("backend").unwrap(), BackendDeveloper::python())
                .with(RoleName::new("frontend").unwrap(), FrontendDeveloper),
        );
        let report = coordinator.run_report().unwrap();
        let records = Record::from_report(&report).unwrap();

        assert_eq!(records.len(), 2);
        assert_eq!(records[0], record());
        assert_eq!(records[1].payload, json!("Writing JavaScript code"));
        assert!(UnimplementedStore.save(&records[1]).is_err());
    }

    #[test]
    fn test_record_serde_shape() {
        let value = serde_json::to_value(record()).unwrap();
        assert_eq!(
            value,
            json!({ "role": "backend", "payload": "Writing Python code" })
        );
    }
}

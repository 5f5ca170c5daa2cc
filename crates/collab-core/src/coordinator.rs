//! The coordinator: delegates to its roster through the capability contract.
//!
//! A [`Coordinator`] never constructs collaborators and never inspects their
//! concrete type. It is handed a fully assembled [`Roster`] and, on each run,
//! calls every collaborator's `perform` exactly once in roster order.

use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

use crate::error::CapabilityResult;
use crate::metrics::METRICS;
use crate::obs::{
    emit_collaborator_failed, emit_collaborator_performed, emit_run_finished, emit_run_started,
    RunSpan,
};
use crate::role::RoleName;
use crate::roster::Roster;

/// Output of one collaborator, labelled with its role.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RoleOutput<O> {
    pub role: RoleName,
    pub output: O,
}

/// The outcome of a successful [`Coordinator::run_report`].
#[derive(Debug, Clone, Serialize)]
pub struct RunReport<O> {
    pub run_id: Uuid,
    /// One entry per collaborator, in delegation order.
    pub entries: Vec<RoleOutput<O>>,
    pub finished_at: DateTime<Utc>,
}

impl<O> RunReport<O> {
    pub fn outputs(&self) -> impl Iterator<Item = &O> {
        self.entries.iter().map(|e| &e.output)
    }

    pub fn into_outputs(self) -> Vec<O> {
        self.entries.into_iter().map(|e| e.output).collect()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// High-level coordinator over interchangeable collaborators.
pub struct Coordinator<O> {
    roster: Roster<O>,
}

impl<O> std::fmt::Debug for Coordinator<O> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Coordinator")
            .field("roster", &self.roster)
            .finish()
    }
}

impl<O> Coordinator<O> {
    /// Construct with an already-assembled roster.
    pub fn new(roster: Roster<O>) -> Self {
        Self { roster }
    }

    pub fn roster(&self) -> &Roster<O> {
        &self.roster
    }

    /// Role names in delegation order.
    pub fn roles(&self) -> impl Iterator<Item = &RoleName> {
        self.roster.roles()
    }

    pub fn len(&self) -> usize {
        self.roster.len()
    }

    pub fn is_empty(&self) -> bool {
        self.roster.is_empty()
    }

    /// Delegate to every collaborator and return their outputs in order.
    ///
    /// See [`Coordinator::run_report`] for failure semantics.
    pub fn run(&self) -> CapabilityResult<Vec<O>> {
        self.run_report().map(RunReport::into_outputs)
    }

    /// Delegate to every collaborator and return the labelled report.
    ///
    /// Stops at the first failing collaborator and returns its error tagged
    /// with the role. Outputs gathered before the failure are dropped.
    pub fn run_report(&self) -> CapabilityResult<RunReport<O>> {
        let run_id = Uuid::new_v4();
        let run_label = run_id.to_string();
        let _span = RunSpan::enter(&run_label);

        METRICS.inc_runs();
        emit_run_started(&run_label, self.roster.len());

        let mut entries = Vec::with_capacity(self.roster.len());
        for (position, (role, collaborator)) in self.roster.iter().enumerate() {
            METRICS.inc_delegations();
            match collaborator.perform() {
                Ok(output) => {
                    emit_collaborator_performed(&run_label, role.as_str(), position);
                    entries.push(RoleOutput {
                        role: role.clone(),
                        output,
                    });
                }
                Err(e) => {
                    let err = e.for_role(role);
                    METRICS.inc_failures();
                    emit_collaborator_failed(&run_label, role.as_str(), &err);
                    emit_run_finished(&run_label, entries.len(), false);
                    return Err(err);
                }
            }
        }

        emit_run_finished(&run_label, entries.len(), true);
        Ok(RunReport {
            run_id,
            entries,
            finished_at: Utc::now(),
        })
    }

    /// Invoke a single collaborator by role name.
    ///
    /// Returns `None` when the roster has no such role.
    pub fn perform_role(&self, role: &str) -> Option<CapabilityResult<O>> {
        let (position, (role, collaborator)) = self
            .roster
            .iter()
            .enumerate()
            .find(|(_, (r, _))| r.as_str() == role)?;

        let run_label = Uuid::new_v4().to_string();
        let _span = RunSpan::enter(&run_label);

        METRICS.inc_delegations();
        match collaborator.perform() {
            Ok(output) => {
                emit_collaborator_performed(&run_label, role.as_str(), position);
                Some(Ok(output))
            }
            Err(e) => {
                let err = e.for_role(role);
                METRICS.inc_failures();
                emit_collaborator_failed(&run_label, role.as_str(), &err);
                Some(Err(err))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::capability::{Capability, Unimplemented};
    use crate::error::CapabilityError;

    struct Count(u32);

    impl Capability for Count {
        type Output = u32;

        fn perform(&self) -> CapabilityResult<u32> {
            Ok(self.0)
        }
    }

    fn role(name: &str) -> RoleName {
        RoleName::new(name).unwrap()
    }

    #[test]
    fn test_empty_roster_runs_to_empty_output() {
        let coordinator: Coordinator<u32> = Coordinator::new(Roster::new());
        assert!(coordinator.is_empty());
        assert_eq!(coordinator.run(), Ok(vec![]));
    }

    #[test]
    fn test_run_report_labels_entries() {
        let coordinator = Coordinator::new(
            Roster::new()
                .with(role("one"), Count(1))
                .with(role("two"), Count(2)),
        );

        let report = coordinator.run_report().unwrap();
        assert_eq!(report.len(), 2);
        assert_eq!(report.entries[0].role, "one");
        assert_eq!(report.entries[1].output, 2);
        assert_eq!(report.outputs().copied().collect::<Vec<_>>(), vec![1, 2]);
    }

    #[test]
    fn test_each_run_gets_a_fresh_id() {
        let coordinator = Coordinator::new(Roster::new().with(role("one"), Count(1)));
        let a = coordinator.run_report().unwrap();
        let b = coordinator.run_report().unwrap();
        assert_ne!(a.run_id, b.run_id);
    }

    #[test]
    fn test_failure_is_tagged_with_role() {
        let coordinator = Coordinator::new(
            Roster::new()
                .with(role("ok"), Count(1))
                .with(role("stub"), Unimplemented::<u32>::default()),
        );

        let err = coordinator.run().unwrap_err();
        assert_eq!(
            err,
            CapabilityError::NotImplemented {
                operation: "perform".to_string(),
                role: Some(role("stub")),
            }
        );
    }

    #[test]
    fn test_perform_role_unknown_is_none() {
        let coordinator = Coordinator::new(Roster::new().with(role("one"), Count(1)));
        assert!(coordinator.perform_role("missing").is_none());
        assert_eq!(coordinator.perform_role("one"), Some(Ok(1)));
    }

    #[test]
    fn test_report_serializes_entries() {
        let coordinator = Coordinator::new(Roster::new().with(role("one"), Count(1)));
        let report = coordinator.run_report().unwrap();
        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(json["entries"][0]["role"], "one");
        assert_eq!(json["entries"][0]["output"], 1);
        assert!(json["run_id"].is_string());
    }
}

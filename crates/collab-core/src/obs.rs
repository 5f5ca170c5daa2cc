//! Structured observability hooks for coordinator runs.
//!
//! This module provides:
//! - Run-scoped tracing spans via the `RunSpan` RAII guard
//! - Emission functions for the run lifecycle: start, each delegation, finish
//!
//! Events are emitted at `info!` level, failures at `warn!`. Filtering follows
//! `RUST_LOG`; see [`crate::telemetry::init_tracing`].

use tracing::{info, warn};

/// RAII guard that enters a run-scoped tracing span for the duration of a run.
///
/// # Example
///
/// ```ignore
/// let _span = RunSpan::enter("3f6c…");
/// // Every event below is associated with run_id = "3f6c…"
/// ```
pub struct RunSpan {
    _span: tracing::span::EnteredSpan,
}

impl RunSpan {
    /// Create and enter a span tagged with the run_id.
    pub fn enter(run_id: &str) -> Self {
        let span = tracing::info_span!("collab.run", run_id = %run_id);
        Self {
            _span: span.entered(),
        }
    }
}

/// Emit event: run started with the number of collaborators in the roster.
pub fn emit_run_started(run_id: &str, collaborators: usize) {
    info!(event = "run.started", run_id = %run_id, collaborators = collaborators);
}

/// Emit event: one collaborator performed successfully.
pub fn emit_collaborator_performed(run_id: &str, role: &str, position: usize) {
    info!(
        event = "collaborator.performed",
        run_id = %run_id,
        role = %role,
        position = position,
    );
}

/// Emit event: a collaborator failed; the run stops here.
pub fn emit_collaborator_failed(run_id: &str, role: &str, error: &dyn std::fmt::Display) {
    warn!(event = "collaborator.failed", run_id = %run_id, role = %role, error = %error);
}

/// Emit event: run finished.
pub fn emit_run_finished(run_id: &str, performed: usize, success: bool) {
    info!(
        event = "run.finished",
        run_id = %run_id,
        performed = performed,
        success = success,
    );
}

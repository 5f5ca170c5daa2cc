//! Collab Core Library
//!
//! A coordinator delegating to interchangeable collaborators that all satisfy
//! one capability contract.
//!
//! # Module layout
//!
//! - [`capability`] — `Capability`, `Unimplemented`, `Augmented`
//! - [`error`] — `CapabilityError`, `CapabilityResult`
//! - [`role`] / [`roster`] — `RoleName`, `Roster`
//! - [`coordinator`] — `Coordinator`, `RunReport`, `RoleOutput`
//! - [`team`], [`shapes`], [`pricing`], [`vehicles`] — concrete collaborator families
//! - [`storage`] — `RecordStore` seam
//! - [`config`] — `RosterConfig`
//! - [`telemetry`], [`obs`], [`metrics`] — logging and counters

pub mod capability;
pub mod config;
pub mod coordinator;
pub mod error;
pub mod metrics;
pub mod obs;
pub mod pricing;
pub mod role;
pub mod roster;
pub mod shapes;
pub mod storage;
pub mod team;
pub mod telemetry;
pub mod vehicles;

pub use capability::{Augmented, Capability, Unimplemented};
pub use config::{ConfigError, ConfigResult, DeveloperKind, RoleEntry, RosterConfig};
pub use coordinator::{Coordinator, RoleOutput, RunReport};
pub use error::{CapabilityError, CapabilityResult};
pub use role::{InvalidRoleName, RoleName};
pub use roster::{Collaborator, Roster};

pub use pricing::{tiered, vip, RegularDiscount};
pub use shapes::{Circle, Draw, Drawable, Drawing, Resize, Square};
pub use storage::{Record, RecordStore, UnimplementedStore};
pub use team::{BackendDeveloper, FrontendDeveloper};
pub use vehicles::{Bicycle, Car, EngineKind, Motorized};

pub use metrics::METRICS;
pub use obs::{
    emit_collaborator_failed, emit_collaborator_performed, emit_run_finished, emit_run_started,
    RunSpan,
};
pub use telemetry::init_tracing;

/// Collab version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

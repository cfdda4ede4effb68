//! # cumulo-core: Domain Model and Simulation Engines
//!
//! Pure, deterministic building blocks for the Cumulo console:
//!
//! - **Resource lifecycle**: a timer-agnostic state machine that models
//!   long-running platform operations (provision, restart, upgrade, delete)
//!   as an immediate transient status plus a scheduled completion.
//! - **Inspection runs**: a scripted multi-phase health check that produces
//!   a scored, immutable report.
//! - **Catalog**: static mock collections for every console domain
//!   (clusters, workloads, network, storage, projects).
//! - **Parameter lists**: ordered key/value editing with an explicit
//!   add/remove/rename contract.
//!
//! Nothing in this crate touches the DOM, the network, or a real clock.
//! Callers supply `now_ms` timestamps and drive scheduled completions
//! themselves, which keeps every operation synchronous and testable.

pub mod catalog;
pub mod inspection;
pub mod lifecycle;
pub mod middleware;
pub mod params;
pub mod template;

pub use inspection::{
    InspectionItem, InspectionPhase, InspectionReport, InspectionRun, ItemStatus, ReportStatus,
    Severity, INSPECTION_PHASES, INSPECTION_TICK_MS,
};
pub use lifecycle::{
    ActionToken, LifecycleAction, LifecycleEngine, LifecycleError, Managed, ResourceId,
    ScheduledCompletion, DELETE_DELAY_MS, PROVISION_DELAY_MS, RESTART_DELAY_MS, UPGRADE_DELAY_MS,
};
pub use middleware::{ConsumerGroup, InstanceStatus, KafkaInstance, KafkaTopic, MetricsSnapshot};
pub use params::{ParamEntry, ParamError, ParamList};
pub use template::DeployTemplate;

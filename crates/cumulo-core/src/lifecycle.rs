//! Resource lifecycle state machine
//!
//! Models asynchronous backend operations (which a real platform would drive
//! via server-sent status updates) as local, deterministic transitions: each
//! action applies an immediate transient status, and actions with a delayed
//! outcome schedule a completion keyed by `(ResourceId, ActionToken)`.
//!
//! The engine is clock-agnostic. Callers pass `now_ms` when submitting and
//! apply completions either from a timer callback (`complete`) or from a
//! deterministic test driver (`complete_due`). Submitting a new action for a
//! resource invalidates any prior pending completion, so a stale timer that
//! fires later is a no-op rather than a last-write-wins race.

use std::collections::HashMap;
use std::fmt;

use serde::{Deserialize, Serialize};
use tracing::debug;
use uuid::Uuid;

/// Delay before a newly created resource reaches `Running`
pub const PROVISION_DELAY_MS: u64 = 3_000;
/// Delay before a restarted resource returns to `Running`
pub const RESTART_DELAY_MS: u64 = 2_000;
/// Delay before an upgrade completes
pub const UPGRADE_DELAY_MS: u64 = 3_000;
/// Delay between the `Deleting` status and removal from the collection
pub const DELETE_DELAY_MS: u64 = 1_000;

/// Opaque unique identifier for a managed resource
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ResourceId(Uuid);

impl ResourceId {
    /// Generate a fresh id
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for ResourceId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for ResourceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// User-issued lifecycle actions
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LifecycleAction {
    /// Provision a new resource
    Create,
    /// Restart a running resource
    Restart,
    /// Stop a running resource (immediate, no completion)
    Stop,
    /// Resume a stopped resource (immediate, no completion)
    Resume,
    /// Upgrade to a new version; the version field changes on completion
    Upgrade { target_version: String },
    /// Remove the resource after a short visual `Deleting` phase
    Delete,
}

impl LifecycleAction {
    /// Human-readable action name (used in errors and logs)
    pub fn label(&self) -> &'static str {
        match self {
            LifecycleAction::Create => "create",
            LifecycleAction::Restart => "restart",
            LifecycleAction::Stop => "stop",
            LifecycleAction::Resume => "resume",
            LifecycleAction::Upgrade { .. } => "upgrade",
            LifecycleAction::Delete => "delete",
        }
    }

    /// Fixed completion delay, or `None` for immediate-only actions
    pub fn completion_delay_ms(&self) -> Option<u64> {
        match self {
            LifecycleAction::Create => Some(PROVISION_DELAY_MS),
            LifecycleAction::Restart => Some(RESTART_DELAY_MS),
            LifecycleAction::Upgrade { .. } => Some(UPGRADE_DELAY_MS),
            LifecycleAction::Delete => Some(DELETE_DELAY_MS),
            LifecycleAction::Stop | LifecycleAction::Resume => None,
        }
    }

    /// Whether completing this action removes the resource from the collection
    pub fn removes_resource(&self) -> bool {
        matches!(self, LifecycleAction::Delete)
    }
}

/// Errors from lifecycle operations
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LifecycleError {
    #[error("unknown resource: {0}")]
    UnknownResource(ResourceId),

    #[error("invalid transition: cannot {action} while {from}")]
    InvalidTransition { from: String, action: String },
}

/// A resource kind that participates in the lifecycle state machine
pub trait Managed {
    /// Stable identifier
    fn id(&self) -> ResourceId;

    /// Validate `action` against the current status and apply its immediate
    /// (transient) status.
    fn begin(&mut self, action: &LifecycleAction) -> Result<(), LifecycleError>;

    /// Apply the terminal effect of a delayed `action`. Removal is handled by
    /// the engine; implementations only mutate fields (status, version, ...).
    fn finish(&mut self, action: &LifecycleAction);
}

/// Token identifying one scheduled completion. A resource has at most one
/// live token; submitting a new action mints a new token and orphans the old.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ActionToken(u64);

/// Handle returned by [`LifecycleEngine::submit`] for actions with a delayed
/// outcome. The caller schedules a one-shot timer for `delay_ms` and then
/// calls [`LifecycleEngine::complete`] with the id and token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScheduledCompletion {
    pub id: ResourceId,
    pub token: ActionToken,
    pub delay_ms: u64,
    pub due_at_ms: u64,
}

#[derive(Debug, Clone)]
struct Pending {
    token: ActionToken,
    due_at_ms: u64,
    action: LifecycleAction,
}

/// Owns a collection of managed resources and their pending completions
#[derive(Debug)]
pub struct LifecycleEngine<R: Managed> {
    resources: Vec<R>,
    pending: HashMap<ResourceId, Pending>,
    next_token: u64,
}

impl<R: Managed> LifecycleEngine<R> {
    /// Create an engine over an initial collection
    pub fn new(resources: Vec<R>) -> Self {
        Self {
            resources,
            pending: HashMap::new(),
            next_token: 0,
        }
    }

    /// All resources, in insertion order
    pub fn resources(&self) -> &[R] {
        &self.resources
    }

    pub fn len(&self) -> usize {
        self.resources.len()
    }

    pub fn is_empty(&self) -> bool {
        self.resources.is_empty()
    }

    /// Look up a resource by id
    pub fn get(&self, id: ResourceId) -> Option<&R> {
        self.resources.iter().find(|r| r.id() == id)
    }

    /// Whether a completion is pending for `id`
    pub fn is_pending(&self, id: ResourceId) -> bool {
        self.pending.contains_key(&id)
    }

    /// Number of pending completions across all resources
    pub fn pending_count(&self) -> usize {
        self.pending.len()
    }

    /// Insert a new resource and submit [`LifecycleAction::Create`] for it.
    pub fn create(
        &mut self,
        resource: R,
        now_ms: u64,
    ) -> Result<Option<ScheduledCompletion>, LifecycleError> {
        let id = resource.id();
        self.resources.push(resource);
        self.submit(id, LifecycleAction::Create, now_ms)
    }

    /// Submit an action for a resource.
    ///
    /// Applies the immediate status, invalidates any pending completion for
    /// the same resource and, for actions with a delayed outcome, schedules
    /// a new completion and returns its handle.
    pub fn submit(
        &mut self,
        id: ResourceId,
        action: LifecycleAction,
        now_ms: u64,
    ) -> Result<Option<ScheduledCompletion>, LifecycleError> {
        let resource = self
            .resources
            .iter_mut()
            .find(|r| r.id() == id)
            .ok_or(LifecycleError::UnknownResource(id))?;
        resource.begin(&action)?;

        // The new action supersedes any in-flight completion for this id.
        if self.pending.remove(&id).is_some() {
            debug!(%id, action = action.label(), "superseded pending completion");
        }

        let Some(delay_ms) = action.completion_delay_ms() else {
            return Ok(None);
        };

        let token = ActionToken(self.next_token);
        self.next_token += 1;
        let due_at_ms = now_ms + delay_ms;
        self.pending.insert(
            id,
            Pending {
                token,
                due_at_ms,
                action,
            },
        );

        Ok(Some(ScheduledCompletion {
            id,
            token,
            delay_ms,
            due_at_ms,
        }))
    }

    /// Apply the completion identified by `(id, token)`.
    ///
    /// Returns `false` without mutating anything when the token is stale,
    /// i.e. a newer action has been submitted for the resource since the
    /// timer was scheduled, or the completion already ran.
    pub fn complete(&mut self, id: ResourceId, token: ActionToken) -> bool {
        let current = match self.pending.get(&id) {
            Some(p) if p.token == token => true,
            _ => false,
        };
        if !current {
            return false;
        }
        match self.pending.remove(&id) {
            Some(pending) => {
                self.apply_completion(id, &pending.action);
                true
            }
            None => false,
        }
    }

    /// Apply every completion whose deadline is at or before `now_ms`.
    /// Deterministic driver for tests and headless use.
    pub fn complete_due(&mut self, now_ms: u64) -> Vec<ResourceId> {
        let mut due: Vec<(ResourceId, ActionToken, u64)> = self
            .pending
            .iter()
            .filter(|(_, p)| p.due_at_ms <= now_ms)
            .map(|(id, p)| (*id, p.token, p.due_at_ms))
            .collect();
        due.sort_by_key(|(_, _, due_at)| *due_at);

        let mut completed = Vec::new();
        for (id, token, _) in due {
            if self.complete(id, token) {
                completed.push(id);
            }
        }
        completed
    }

    fn apply_completion(&mut self, id: ResourceId, action: &LifecycleAction) {
        if action.removes_resource() {
            self.resources.retain(|r| r.id() != id);
            debug!(%id, "resource removed");
            return;
        }
        if let Some(resource) = self.resources.iter_mut().find(|r| r.id() == id) {
            resource.finish(action);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::middleware::{InstanceStatus, KafkaInstance};

    fn engine_with(instance: KafkaInstance) -> (LifecycleEngine<KafkaInstance>, ResourceId) {
        let id = instance.id();
        (LifecycleEngine::new(vec![instance]), id)
    }

    fn running_instance() -> KafkaInstance {
        KafkaInstance::new("orders-broker", "3.6.1", 3, 100)
    }

    #[test]
    fn restart_is_transient_then_running() {
        let (mut engine, id) = engine_with(running_instance());
        let before = engine.get(id).cloned().expect("present");

        let scheduled = engine
            .submit(id, LifecycleAction::Restart, 1_000)
            .expect("valid")
            .expect("delayed");
        assert_eq!(scheduled.delay_ms, RESTART_DELAY_MS);
        assert_eq!(scheduled.due_at_ms, 1_000 + RESTART_DELAY_MS);
        assert_eq!(engine.get(id).map(|i| i.status), Some(InstanceStatus::Restarting));

        // One tick before the deadline: nothing happens.
        assert!(engine.complete_due(scheduled.due_at_ms - 1).is_empty());
        assert_eq!(engine.get(id).map(|i| i.status), Some(InstanceStatus::Restarting));

        assert_eq!(engine.complete_due(scheduled.due_at_ms), vec![id]);
        let after = engine.get(id).expect("present");
        assert_eq!(after.status, InstanceStatus::Running);
        // All other fields unchanged.
        assert_eq!(after.name, before.name);
        assert_eq!(after.version, before.version);
        assert_eq!(after.brokers, before.brokers);
        assert_eq!(after.storage_gb, before.storage_gb);
    }

    #[test]
    fn delete_removes_after_delay() {
        let (mut engine, id) = engine_with(running_instance());

        let scheduled = engine
            .submit(id, LifecycleAction::Delete, 0)
            .expect("valid")
            .expect("delayed");
        assert_eq!(engine.get(id).map(|i| i.status), Some(InstanceStatus::Deleting));
        assert_eq!(engine.len(), 1);

        engine.complete_due(scheduled.due_at_ms);
        assert_eq!(engine.len(), 0);
        assert!(engine.get(id).is_none());
    }

    #[test]
    fn upgrade_sets_version_on_completion() {
        let (mut engine, id) = engine_with(running_instance());

        let scheduled = engine
            .submit(
                id,
                LifecycleAction::Upgrade {
                    target_version: "3.7.0".to_string(),
                },
                500,
            )
            .expect("valid")
            .expect("delayed");
        let instance = engine.get(id).expect("present");
        assert_eq!(instance.status, InstanceStatus::Upgrading);
        assert_eq!(instance.version, "3.6.1");

        engine.complete_due(scheduled.due_at_ms);
        let instance = engine.get(id).expect("present");
        assert_eq!(instance.status, InstanceStatus::Running);
        assert_eq!(instance.version, "3.7.0");
    }

    #[test]
    fn create_provisions_then_runs() {
        let mut engine = LifecycleEngine::new(Vec::new());
        let instance = KafkaInstance::new("payments-broker", "3.6.1", 3, 50);
        let id = instance.id();

        let scheduled = engine.create(instance, 0).expect("valid").expect("delayed");
        assert_eq!(scheduled.delay_ms, PROVISION_DELAY_MS);
        assert_eq!(engine.get(id).map(|i| i.status), Some(InstanceStatus::Provisioning));

        engine.complete_due(PROVISION_DELAY_MS);
        assert_eq!(engine.get(id).map(|i| i.status), Some(InstanceStatus::Running));
    }

    #[test]
    fn stop_and_resume_are_immediate() {
        let (mut engine, id) = engine_with(running_instance());

        assert_eq!(engine.submit(id, LifecycleAction::Stop, 0).expect("valid"), None);
        assert_eq!(engine.get(id).map(|i| i.status), Some(InstanceStatus::Stopped));
        assert_eq!(engine.pending_count(), 0);

        assert_eq!(engine.submit(id, LifecycleAction::Resume, 0).expect("valid"), None);
        assert_eq!(engine.get(id).map(|i| i.status), Some(InstanceStatus::Running));
    }

    #[test]
    fn new_action_invalidates_prior_token() {
        let (mut engine, id) = engine_with(running_instance());

        let first = engine
            .submit(id, LifecycleAction::Restart, 0)
            .expect("valid")
            .expect("delayed");
        // Deleting supersedes the restart before its timer fires.
        let second = engine
            .submit(id, LifecycleAction::Delete, 100)
            .expect("valid")
            .expect("delayed");

        // The stale restart timer fires and must be a no-op.
        assert!(!engine.complete(first.id, first.token));
        assert_eq!(engine.get(id).map(|i| i.status), Some(InstanceStatus::Deleting));

        assert!(engine.complete(second.id, second.token));
        assert!(engine.get(id).is_none());
    }

    #[test]
    fn complete_is_idempotent() {
        let (mut engine, id) = engine_with(running_instance());
        let scheduled = engine
            .submit(id, LifecycleAction::Restart, 0)
            .expect("valid")
            .expect("delayed");

        assert!(engine.complete(scheduled.id, scheduled.token));
        assert!(!engine.complete(scheduled.id, scheduled.token));
        assert_eq!(engine.get(id).map(|i| i.status), Some(InstanceStatus::Running));
    }

    #[test]
    fn invalid_transitions_are_rejected() {
        let (mut engine, id) = engine_with(running_instance());
        engine.submit(id, LifecycleAction::Stop, 0).expect("valid");

        let err = engine
            .submit(id, LifecycleAction::Restart, 0)
            .expect_err("stopped instances cannot restart");
        assert!(matches!(err, LifecycleError::InvalidTransition { .. }));
        // The failed submit did not change the status.
        assert_eq!(engine.get(id).map(|i| i.status), Some(InstanceStatus::Stopped));
    }

    #[test]
    fn unknown_resource_is_an_error() {
        let mut engine: LifecycleEngine<KafkaInstance> = LifecycleEngine::new(Vec::new());
        let err = engine
            .submit(ResourceId::new(), LifecycleAction::Restart, 0)
            .expect_err("nothing to restart");
        assert!(matches!(err, LifecycleError::UnknownResource(_)));
    }

    #[test]
    fn delete_is_allowed_from_any_status() {
        let (mut engine, id) = engine_with(running_instance());
        engine.submit(id, LifecycleAction::Stop, 0).expect("valid");

        let scheduled = engine
            .submit(id, LifecycleAction::Delete, 0)
            .expect("delete from stopped")
            .expect("delayed");
        engine.complete_due(scheduled.due_at_ms);
        assert!(engine.is_empty());
    }

    #[test]
    fn complete_due_applies_in_deadline_order() {
        let a = KafkaInstance::new("a", "3.6.1", 1, 10);
        let b = KafkaInstance::new("b", "3.6.1", 1, 10);
        let (id_a, id_b) = (a.id(), b.id());
        let mut engine = LifecycleEngine::new(vec![a, b]);

        engine.submit(id_b, LifecycleAction::Delete, 0).expect("valid");
        engine.submit(id_a, LifecycleAction::Restart, 0).expect("valid");

        let completed = engine.complete_due(u64::MAX);
        // Delete (due at 1s) precedes restart (due at 2s).
        assert_eq!(completed, vec![id_b, id_a]);
    }
}

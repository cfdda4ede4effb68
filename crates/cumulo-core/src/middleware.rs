//! Middleware domain: Kafka instances, topics, consumer groups
//!
//! The Kafka instance is the representative managed resource: it runs the
//! full lifecycle state machine (provision, stop/resume, restart, upgrade,
//! delete). Topics and consumer groups are display records; topic configs use
//! the ordered [`ParamList`] contract instead of a free-form map.

use serde::{Deserialize, Serialize};

use crate::lifecycle::{LifecycleAction, LifecycleError, Managed, ResourceId};
use crate::params::ParamList;

/// Status of a Kafka instance
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum InstanceStatus {
    Running,
    Stopped,
    Provisioning,
    Restarting,
    Upgrading,
    Deleting,
}

impl InstanceStatus {
    pub fn label(&self) -> &'static str {
        match self {
            InstanceStatus::Running => "Running",
            InstanceStatus::Stopped => "Stopped",
            InstanceStatus::Provisioning => "Provisioning",
            InstanceStatus::Restarting => "Restarting",
            InstanceStatus::Upgrading => "Upgrading",
            InstanceStatus::Deleting => "Deleting",
        }
    }

    /// Whether this status is a transient state with a pending completion
    pub fn is_transitional(&self) -> bool {
        matches!(
            self,
            InstanceStatus::Provisioning
                | InstanceStatus::Restarting
                | InstanceStatus::Upgrading
                | InstanceStatus::Deleting
        )
    }
}

/// A managed Kafka instance
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct KafkaInstance {
    pub id: ResourceId,
    pub name: String,
    pub version: String,
    pub status: InstanceStatus,
    pub brokers: u32,
    pub storage_gb: u32,
    pub topic_count: u32,
}

impl KafkaInstance {
    /// New instance in `Running`. Creation flows submit
    /// [`LifecycleAction::Create`] right after insertion, which moves it to
    /// `Provisioning` until the scheduled completion fires.
    pub fn new(name: impl Into<String>, version: impl Into<String>, brokers: u32, storage_gb: u32) -> Self {
        Self {
            id: ResourceId::new(),
            name: name.into(),
            version: version.into(),
            status: InstanceStatus::Running,
            brokers,
            storage_gb,
            topic_count: 0,
        }
    }
}

impl Managed for KafkaInstance {
    fn id(&self) -> ResourceId {
        self.id
    }

    fn begin(&mut self, action: &LifecycleAction) -> Result<(), LifecycleError> {
        use InstanceStatus::*;
        let next = match (action, self.status) {
            (LifecycleAction::Create, _) => Provisioning,
            (LifecycleAction::Restart, Running) => Restarting,
            (LifecycleAction::Stop, Running) => Stopped,
            (LifecycleAction::Resume, Stopped) => Running,
            (LifecycleAction::Upgrade { .. }, Running) => Upgrading,
            (LifecycleAction::Delete, _) => Deleting,
            _ => {
                return Err(LifecycleError::InvalidTransition {
                    from: self.status.label().to_string(),
                    action: action.label().to_string(),
                })
            }
        };
        self.status = next;
        Ok(())
    }

    fn finish(&mut self, action: &LifecycleAction) {
        match action {
            LifecycleAction::Create | LifecycleAction::Restart => {
                self.status = InstanceStatus::Running;
            }
            LifecycleAction::Upgrade { target_version } => {
                self.status = InstanceStatus::Running;
                self.version = target_version.clone();
            }
            // Stop/Resume are immediate; Delete removal is the engine's job.
            _ => {}
        }
    }
}

/// A topic on a Kafka instance
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct KafkaTopic {
    pub name: String,
    pub partitions: u32,
    pub replication_factor: u16,
    pub message_count: u64,
    pub config: ParamList,
}

/// Consumer group summary
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConsumerGroup {
    pub group_id: String,
    pub state: String,
    pub member_count: usize,
    pub topics: Vec<String>,
    pub total_lag: u64,
}

/// Point-in-time metrics for one instance, fed to the AI optimizer
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MetricsSnapshot {
    pub instance: String,
    pub messages_in_per_sec: u64,
    pub bytes_in_per_sec: u64,
    pub bytes_out_per_sec: u64,
    pub avg_produce_latency_ms: f64,
    pub disk_used_pct: u8,
    pub partition_skew_pct: u8,
    pub under_replicated_partitions: u32,
}

impl MetricsSnapshot {
    /// Serialize for inclusion in an AI prompt
    pub fn to_prompt_text(&self) -> String {
        serde_json::to_string_pretty(self).unwrap_or_else(|_| format!("{self:?}"))
    }
}

// ============================================================================
// Mock catalog
// ============================================================================

pub fn sample_instances() -> Vec<KafkaInstance> {
    let mut orders = KafkaInstance::new("orders-broker", "3.6.1", 3, 200);
    orders.topic_count = 12;
    let mut payments = KafkaInstance::new("payments-broker", "3.5.2", 5, 500);
    payments.topic_count = 28;
    let mut audit = KafkaInstance::new("audit-broker", "3.6.1", 3, 100);
    audit.status = InstanceStatus::Stopped;
    audit.topic_count = 4;
    vec![orders, payments, audit]
}

pub fn sample_topics() -> Vec<KafkaTopic> {
    vec![
        KafkaTopic {
            name: "orders.created".to_string(),
            partitions: 12,
            replication_factor: 3,
            message_count: 4_812_331,
            config: ParamList::from_pairs(&[
                ("retention.ms", "604800000"),
                ("cleanup.policy", "delete"),
            ]),
        },
        KafkaTopic {
            name: "payments.settled".to_string(),
            partitions: 24,
            replication_factor: 3,
            message_count: 19_204_887,
            config: ParamList::from_pairs(&[
                ("retention.ms", "1209600000"),
                ("cleanup.policy", "compact"),
                ("min.insync.replicas", "2"),
            ]),
        },
        KafkaTopic {
            name: "audit.events".to_string(),
            partitions: 6,
            replication_factor: 3,
            message_count: 881_002,
            config: ParamList::from_pairs(&[("cleanup.policy", "compact,delete")]),
        },
    ]
}

pub fn sample_consumer_groups() -> Vec<ConsumerGroup> {
    vec![
        ConsumerGroup {
            group_id: "order-fulfillment".to_string(),
            state: "Stable".to_string(),
            member_count: 6,
            topics: vec!["orders.created".to_string()],
            total_lag: 128,
        },
        ConsumerGroup {
            group_id: "fraud-scoring".to_string(),
            state: "Stable".to_string(),
            member_count: 12,
            topics: vec!["payments.settled".to_string()],
            total_lag: 42_117,
        },
        ConsumerGroup {
            group_id: "audit-archiver".to_string(),
            state: "Rebalancing".to_string(),
            member_count: 2,
            topics: vec!["audit.events".to_string()],
            total_lag: 3_550,
        },
    ]
}

pub fn sample_metrics() -> MetricsSnapshot {
    MetricsSnapshot {
        instance: "payments-broker".to_string(),
        messages_in_per_sec: 18_400,
        bytes_in_per_sec: 24_500_000,
        bytes_out_per_sec: 61_200_000,
        avg_produce_latency_ms: 14.8,
        disk_used_pct: 78,
        partition_skew_pct: 31,
        under_replicated_partitions: 2,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn transitional_statuses() {
        assert!(InstanceStatus::Provisioning.is_transitional());
        assert!(InstanceStatus::Deleting.is_transitional());
        assert!(!InstanceStatus::Running.is_transitional());
        assert!(!InstanceStatus::Stopped.is_transitional());
    }

    #[test]
    fn metrics_prompt_text_is_json() {
        let text = sample_metrics().to_prompt_text();
        let parsed: serde_json::Value = serde_json::from_str(&text).expect("valid json");
        assert_eq!(parsed["instance"], "payments-broker");
        assert_eq!(parsed["disk_used_pct"], 78);
    }

    #[test]
    fn sample_topics_have_ordered_configs() {
        let topics = sample_topics();
        let settled = &topics[1];
        assert_eq!(settled.config.entries()[0].key, "retention.ms");
        assert_eq!(settled.config.get("min.insync.replicas"), Some("2"));
    }
}

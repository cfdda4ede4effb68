//! Static mock collections for the display-only console domains
//!
//! Clusters, workloads, network, storage, and projects render flat tables
//! bound to these records. Only middleware instances (see
//! [`crate::middleware`]) run the lifecycle state machine.

use serde::{Deserialize, Serialize};

use crate::lifecycle::ResourceId;

// ============================================================================
// Clusters
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ClusterStatus {
    Healthy,
    Warning,
    Error,
    Offline,
}

impl ClusterStatus {
    pub fn label(&self) -> &'static str {
        match self {
            ClusterStatus::Healthy => "Healthy",
            ClusterStatus::Warning => "Warning",
            ClusterStatus::Error => "Error",
            ClusterStatus::Offline => "Offline",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClusterSummary {
    pub id: ResourceId,
    pub name: String,
    pub status: ClusterStatus,
    pub version: String,
    pub region: String,
    pub nodes: u32,
    pub cpu_used_pct: u8,
    pub memory_used_pct: u8,
}

pub fn sample_clusters() -> Vec<ClusterSummary> {
    vec![
        ClusterSummary {
            id: ResourceId::new(),
            name: "prod-east".to_string(),
            status: ClusterStatus::Healthy,
            version: "v1.29.4".to_string(),
            region: "us-east-1".to_string(),
            nodes: 18,
            cpu_used_pct: 62,
            memory_used_pct: 71,
        },
        ClusterSummary {
            id: ResourceId::new(),
            name: "prod-west".to_string(),
            status: ClusterStatus::Warning,
            version: "v1.29.4".to_string(),
            region: "us-west-2".to_string(),
            nodes: 12,
            cpu_used_pct: 84,
            memory_used_pct: 66,
        },
        ClusterSummary {
            id: ResourceId::new(),
            name: "staging".to_string(),
            status: ClusterStatus::Healthy,
            version: "v1.30.1".to_string(),
            region: "eu-central-1".to_string(),
            nodes: 6,
            cpu_used_pct: 31,
            memory_used_pct: 45,
        },
    ]
}

// ============================================================================
// Workloads
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum WorkloadKind {
    Deployment,
    StatefulSet,
    DaemonSet,
}

impl WorkloadKind {
    pub fn label(&self) -> &'static str {
        match self {
            WorkloadKind::Deployment => "Deployment",
            WorkloadKind::StatefulSet => "StatefulSet",
            WorkloadKind::DaemonSet => "DaemonSet",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum WorkloadStatus {
    Running,
    Degraded,
    Failed,
    Pending,
}

impl WorkloadStatus {
    pub fn label(&self) -> &'static str {
        match self {
            WorkloadStatus::Running => "Running",
            WorkloadStatus::Degraded => "Degraded",
            WorkloadStatus::Failed => "Failed",
            WorkloadStatus::Pending => "Pending",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Workload {
    pub id: ResourceId,
    pub name: String,
    pub project: String,
    pub kind: WorkloadKind,
    pub status: WorkloadStatus,
    pub image: String,
    pub replicas_ready: u32,
    pub replicas_desired: u32,
    /// Captured log excerpt fed to the AI root-cause analysis
    pub recent_log: String,
}

impl Workload {
    pub fn new(
        name: impl Into<String>,
        project: impl Into<String>,
        kind: WorkloadKind,
        image: impl Into<String>,
        replicas: u32,
    ) -> Self {
        Self {
            id: ResourceId::new(),
            name: name.into(),
            project: project.into(),
            kind,
            status: WorkloadStatus::Pending,
            image: image.into(),
            replicas_ready: 0,
            replicas_desired: replicas,
            recent_log: String::new(),
        }
    }
}

pub fn sample_workloads() -> Vec<Workload> {
    vec![
        Workload {
            id: ResourceId::new(),
            name: "storefront".to_string(),
            project: "retail".to_string(),
            kind: WorkloadKind::Deployment,
            status: WorkloadStatus::Running,
            image: "registry.local/storefront:2.11.0".to_string(),
            replicas_ready: 4,
            replicas_desired: 4,
            recent_log: "INFO  http server listening on :8080".to_string(),
        },
        Workload {
            id: ResourceId::new(),
            name: "checkout".to_string(),
            project: "retail".to_string(),
            kind: WorkloadKind::Deployment,
            status: WorkloadStatus::Degraded,
            image: "registry.local/checkout:5.2.1".to_string(),
            replicas_ready: 2,
            replicas_desired: 3,
            recent_log:
                "ERROR dial tcp 10.40.2.17:5432: connect: connection refused (retry 14/∞)"
                    .to_string(),
        },
        Workload {
            id: ResourceId::new(),
            name: "inventory-db".to_string(),
            project: "retail".to_string(),
            kind: WorkloadKind::StatefulSet,
            status: WorkloadStatus::Running,
            image: "postgres:16.2".to_string(),
            replicas_ready: 1,
            replicas_desired: 1,
            recent_log: "LOG   checkpoint complete: wrote 1284 buffers".to_string(),
        },
        Workload {
            id: ResourceId::new(),
            name: "node-exporter".to_string(),
            project: "platform".to_string(),
            kind: WorkloadKind::DaemonSet,
            status: WorkloadStatus::Failed,
            image: "prom/node-exporter:v1.8.0".to_string(),
            replicas_ready: 16,
            replicas_desired: 18,
            recent_log:
                "FATAL listen tcp :9100: bind: address already in use; exiting".to_string(),
        },
    ]
}

// ============================================================================
// Network
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ServiceType {
    ClusterIp,
    NodePort,
    LoadBalancer,
}

impl ServiceType {
    pub fn label(&self) -> &'static str {
        match self {
            ServiceType::ClusterIp => "ClusterIP",
            ServiceType::NodePort => "NodePort",
            ServiceType::LoadBalancer => "LoadBalancer",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ServiceEntry {
    pub id: ResourceId,
    pub name: String,
    pub namespace: String,
    pub service_type: ServiceType,
    pub cluster_ip: String,
    pub ports: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IngressEntry {
    pub id: ResourceId,
    pub name: String,
    pub namespace: String,
    pub host: String,
    pub path: String,
    pub service: String,
    pub tls: bool,
}

pub fn sample_services() -> Vec<ServiceEntry> {
    vec![
        ServiceEntry {
            id: ResourceId::new(),
            name: "storefront".to_string(),
            namespace: "retail".to_string(),
            service_type: ServiceType::LoadBalancer,
            cluster_ip: "10.96.12.40".to_string(),
            ports: "80:8080/TCP".to_string(),
        },
        ServiceEntry {
            id: ResourceId::new(),
            name: "checkout".to_string(),
            namespace: "retail".to_string(),
            service_type: ServiceType::ClusterIp,
            cluster_ip: "10.96.31.7".to_string(),
            ports: "8080/TCP".to_string(),
        },
        ServiceEntry {
            id: ResourceId::new(),
            name: "inventory-db".to_string(),
            namespace: "retail".to_string(),
            service_type: ServiceType::ClusterIp,
            cluster_ip: "10.96.44.102".to_string(),
            ports: "5432/TCP".to_string(),
        },
    ]
}

pub fn sample_ingresses() -> Vec<IngressEntry> {
    vec![
        IngressEntry {
            id: ResourceId::new(),
            name: "storefront".to_string(),
            namespace: "retail".to_string(),
            host: "shop.example.com".to_string(),
            path: "/".to_string(),
            service: "storefront:80".to_string(),
            tls: true,
        },
        IngressEntry {
            id: ResourceId::new(),
            name: "checkout".to_string(),
            namespace: "retail".to_string(),
            host: "shop.example.com".to_string(),
            path: "/checkout".to_string(),
            service: "checkout:8080".to_string(),
            tls: true,
        },
    ]
}

// ============================================================================
// Storage
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PvcStatus {
    Bound,
    Pending,
    Released,
}

impl PvcStatus {
    pub fn label(&self) -> &'static str {
        match self {
            PvcStatus::Bound => "Bound",
            PvcStatus::Pending => "Pending",
            PvcStatus::Released => "Released",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Pvc {
    pub id: ResourceId,
    pub name: String,
    pub namespace: String,
    pub status: PvcStatus,
    pub capacity_gb: u32,
    pub access_mode: String,
    pub storage_class: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StorageClassEntry {
    pub name: String,
    pub provisioner: String,
    pub reclaim_policy: String,
    pub is_default: bool,
}

pub fn sample_pvcs() -> Vec<Pvc> {
    vec![
        Pvc {
            id: ResourceId::new(),
            name: "inventory-db-data".to_string(),
            namespace: "retail".to_string(),
            status: PvcStatus::Bound,
            capacity_gb: 100,
            access_mode: "RWO".to_string(),
            storage_class: "ssd-fast".to_string(),
        },
        Pvc {
            id: ResourceId::new(),
            name: "media-cache".to_string(),
            namespace: "retail".to_string(),
            status: PvcStatus::Bound,
            capacity_gb: 500,
            access_mode: "RWX".to_string(),
            storage_class: "hdd-bulk".to_string(),
        },
        Pvc {
            id: ResourceId::new(),
            name: "scratch".to_string(),
            namespace: "platform".to_string(),
            status: PvcStatus::Pending,
            capacity_gb: 20,
            access_mode: "RWO".to_string(),
            storage_class: "ssd-fast".to_string(),
        },
    ]
}

pub fn sample_storage_classes() -> Vec<StorageClassEntry> {
    vec![
        StorageClassEntry {
            name: "ssd-fast".to_string(),
            provisioner: "csi.cumulo.io/block".to_string(),
            reclaim_policy: "Delete".to_string(),
            is_default: true,
        },
        StorageClassEntry {
            name: "hdd-bulk".to_string(),
            provisioner: "csi.cumulo.io/file".to_string(),
            reclaim_policy: "Retain".to_string(),
            is_default: false,
        },
    ]
}

// ============================================================================
// Projects
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Project {
    pub name: String,
    pub display_name: String,
    pub owner: String,
    pub workload_count: u32,
    pub quota_cpu_cores: u32,
    pub quota_memory_gb: u32,
}

pub fn sample_projects() -> Vec<Project> {
    vec![
        Project {
            name: "retail".to_string(),
            display_name: "Retail Platform".to_string(),
            owner: "commerce-team".to_string(),
            workload_count: 3,
            quota_cpu_cores: 48,
            quota_memory_gb: 192,
        },
        Project {
            name: "platform".to_string(),
            display_name: "Platform Services".to_string(),
            owner: "sre".to_string(),
            workload_count: 1,
            quota_cpu_cores: 16,
            quota_memory_gb: 64,
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sample_ids_are_unique() {
        let clusters = sample_clusters();
        let mut ids: Vec<_> = clusters.iter().map(|c| c.id).collect();
        ids.sort_by_key(|id| id.to_string());
        ids.dedup();
        assert_eq!(ids.len(), clusters.len());
    }

    #[test]
    fn workload_projects_exist() {
        let projects = sample_projects();
        for workload in sample_workloads() {
            assert!(
                projects.iter().any(|p| p.name == workload.project),
                "workload {} references unknown project {}",
                workload.name,
                workload.project
            );
        }
    }
}

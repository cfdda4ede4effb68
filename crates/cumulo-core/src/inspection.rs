//! Inspection run simulation
//!
//! A scripted multi-phase health check. The phase list, tick interval, and
//! report transformation are fixed at design time: this is demo progress,
//! not a real scan. The contract the console depends on:
//!
//! - `start` clears any existing report and sets the running flag,
//! - each `tick` advances exactly one phase,
//! - the final tick deterministically remediates the fixable subset of the
//!   static item templates, computes the score, installs a fresh report
//!   (new id + caller timestamp), and clears the running flag,
//! - reports are immutable; a re-run replaces, never mutates.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Interval at which the console drives [`InspectionRun::tick`]
pub const INSPECTION_TICK_MS: u64 = 600;

/// One phase of the scripted progress sequence
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InspectionPhase {
    pub percent: u8,
    pub label: &'static str,
}

/// Fixed phase sequence; a run takes `INSPECTION_PHASES.len() - 1` ticks.
pub const INSPECTION_PHASES: &[InspectionPhase] = &[
    InspectionPhase { percent: 0, label: "Preparing inspection environment" },
    InspectionPhase { percent: 15, label: "Checking node health" },
    InspectionPhase { percent: 30, label: "Verifying control plane components" },
    InspectionPhase { percent: 45, label: "Scanning workload status" },
    InspectionPhase { percent: 60, label: "Auditing network policies" },
    InspectionPhase { percent: 75, label: "Analyzing storage utilization" },
    InspectionPhase { percent: 90, label: "Aggregating findings" },
    InspectionPhase { percent: 100, label: "Generating report" },
];

/// Result of a single inspection check
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ItemStatus {
    Pass,
    Warning,
    Fail,
}

impl ItemStatus {
    pub fn label(&self) -> &'static str {
        match self {
            ItemStatus::Pass => "Pass",
            ItemStatus::Warning => "Warning",
            ItemStatus::Fail => "Fail",
        }
    }
}

/// Severity of a finding
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Severity {
    Low,
    Medium,
    High,
    Critical,
}

impl Severity {
    pub fn label(&self) -> &'static str {
        match self {
            Severity::Low => "Low",
            Severity::Medium => "Medium",
            Severity::High => "High",
            Severity::Critical => "Critical",
        }
    }
}

/// Overall report verdict
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ReportStatus {
    Pass,
    Warning,
    Fail,
}

impl ReportStatus {
    pub fn label(&self) -> &'static str {
        match self {
            ReportStatus::Pass => "Pass",
            ReportStatus::Warning => "Warning",
            ReportStatus::Fail => "Fail",
        }
    }
}

/// One line of an inspection report
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InspectionItem {
    pub id: String,
    pub category: String,
    pub status: ItemStatus,
    pub severity: Severity,
    pub message: String,
    pub recommendation: Option<String>,
}

impl InspectionItem {
    fn new(
        id: &str,
        category: &str,
        status: ItemStatus,
        severity: Severity,
        message: &str,
        recommendation: Option<&str>,
    ) -> Self {
        Self {
            id: id.to_string(),
            category: category.to_string(),
            status,
            severity,
            message: message.to_string(),
            recommendation: recommendation.map(str::to_string),
        }
    }
}

/// A scored snapshot of one inspection run. Immutable once built.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InspectionReport {
    pub id: Uuid,
    pub score: u8,
    pub status: ReportStatus,
    pub items: Vec<InspectionItem>,
    pub timestamp_ms: u64,
}

/// Static check templates every run starts from
pub fn item_templates() -> Vec<InspectionItem> {
    vec![
        InspectionItem::new(
            "node-pressure",
            "Nodes",
            ItemStatus::Pass,
            Severity::High,
            "No node reports memory or disk pressure",
            None,
        ),
        InspectionItem::new(
            "node-kubelet-cert",
            "Nodes",
            ItemStatus::Fail,
            Severity::Medium,
            "Kubelet serving certificate on 1 node expires within 30 days",
            Some("Rotate the kubelet serving certificate before expiry"),
        ),
        InspectionItem::new(
            "etcd-latency",
            "Control Plane",
            ItemStatus::Warning,
            Severity::Medium,
            "etcd commit latency p99 above 100ms in the last hour",
            Some("Check etcd disk throughput and defragment if needed"),
        ),
        InspectionItem::new(
            "apiserver-availability",
            "Control Plane",
            ItemStatus::Pass,
            Severity::Critical,
            "API server availability 100% over the last 24h",
            None,
        ),
        InspectionItem::new(
            "workload-restarts",
            "Workloads",
            ItemStatus::Fail,
            Severity::High,
            "2 workloads restarted more than 5 times in the last hour",
            Some("Inspect container logs and recent image changes"),
        ),
        InspectionItem::new(
            "workload-limits",
            "Workloads",
            ItemStatus::Fail,
            Severity::Low,
            "4 workloads run without CPU or memory limits",
            Some("Set resource limits to protect node capacity"),
        ),
        InspectionItem::new(
            "network-policies",
            "Network",
            ItemStatus::Warning,
            Severity::Low,
            "2 namespaces have no NetworkPolicy applied",
            Some("Apply a default-deny policy per namespace"),
        ),
        InspectionItem::new(
            "ingress-tls",
            "Network",
            ItemStatus::Pass,
            Severity::Medium,
            "All ingress routes terminate TLS",
            None,
        ),
        InspectionItem::new(
            "pvc-utilization",
            "Storage",
            ItemStatus::Fail,
            Severity::Medium,
            "1 persistent volume claim above 85% utilization",
            Some("Expand the claim or archive cold data"),
        ),
        InspectionItem::new(
            "storageclass-default",
            "Storage",
            ItemStatus::Pass,
            Severity::Low,
            "Exactly one default StorageClass configured",
            None,
        ),
    ]
}

/// Deterministic remediation applied on the final tick: failing items at
/// `Low`/`Medium` severity flip to `Pass` (recommendation retained); `High`
/// and `Critical` failures stay.
fn remediate(items: &mut [InspectionItem]) {
    for item in items.iter_mut() {
        if item.status == ItemStatus::Fail && item.severity <= Severity::Medium {
            item.status = ItemStatus::Pass;
        }
    }
}

/// Score from fixed per-item penalties, clamped to 0..=100
fn score(items: &[InspectionItem]) -> u8 {
    let penalty: u32 = items
        .iter()
        .map(|item| match (item.status, item.severity) {
            (ItemStatus::Fail, Severity::Critical) => 30,
            (ItemStatus::Fail, Severity::High) => 20,
            (ItemStatus::Fail, Severity::Medium) => 10,
            (ItemStatus::Fail, Severity::Low) => 5,
            (ItemStatus::Warning, _) => 3,
            (ItemStatus::Pass, _) => 0,
        })
        .sum();
    100u32.saturating_sub(penalty) as u8
}

fn verdict(items: &[InspectionItem]) -> ReportStatus {
    let severe_failure = items
        .iter()
        .any(|i| i.status == ItemStatus::Fail && i.severity >= Severity::High);
    if severe_failure {
        ReportStatus::Fail
    } else if items.iter().any(|i| i.status != ItemStatus::Pass) {
        ReportStatus::Warning
    } else {
        ReportStatus::Pass
    }
}

/// Build the report a completed run produces. Deterministic except for the
/// fresh id and the caller-supplied timestamp.
pub fn build_report(timestamp_ms: u64) -> InspectionReport {
    let mut items = item_templates();
    remediate(&mut items);
    InspectionReport {
        id: Uuid::new_v4(),
        score: score(&items),
        status: verdict(&items),
        items,
        timestamp_ms,
    }
}

/// Progress state of a simulated inspection
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct InspectionRun {
    phase_index: usize,
    running: bool,
    report: Option<InspectionReport>,
}

impl InspectionRun {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    /// The report of the most recent completed run, if any
    pub fn report(&self) -> Option<&InspectionReport> {
        self.report.as_ref()
    }

    /// Current phase while running
    pub fn phase(&self) -> Option<&'static InspectionPhase> {
        self.running.then(|| &INSPECTION_PHASES[self.phase_index])
    }

    pub fn progress_percent(&self) -> u8 {
        INSPECTION_PHASES[self.phase_index].percent
    }

    /// Begin a run: clears the previous report and rewinds to phase 0.
    /// Starting while already running restarts from the first phase.
    pub fn start(&mut self) {
        self.report = None;
        self.phase_index = 0;
        self.running = true;
    }

    /// Advance one phase. On the final phase, installs a fresh report and
    /// clears the running flag. Returns the report on that final tick.
    pub fn tick(&mut self, now_ms: u64) -> Option<&InspectionReport> {
        if !self.running {
            return None;
        }
        if self.phase_index + 1 < INSPECTION_PHASES.len() {
            self.phase_index += 1;
        }
        if self.phase_index + 1 == INSPECTION_PHASES.len() {
            self.running = false;
            self.report = Some(build_report(now_ms));
            return self.report.as_ref();
        }
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run_to_completion(run: &mut InspectionRun, now_ms: u64) -> InspectionReport {
        run.start();
        let mut guard = 0;
        while run.is_running() {
            run.tick(now_ms);
            guard += 1;
            assert!(guard <= INSPECTION_PHASES.len(), "run did not terminate");
        }
        run.report().cloned().expect("completed run has a report")
    }

    #[test]
    fn start_clears_report_and_sets_running() {
        let mut run = InspectionRun::new();
        run_to_completion(&mut run, 1_000);
        assert!(run.report().is_some());

        run.start();
        assert!(run.is_running());
        assert!(run.report().is_none());
        assert_eq!(run.progress_percent(), 0);
    }

    #[test]
    fn each_tick_advances_exactly_one_phase() {
        let mut run = InspectionRun::new();
        run.start();

        for expected in 1..INSPECTION_PHASES.len() - 1 {
            assert!(run.tick(0).is_none());
            assert_eq!(run.progress_percent(), INSPECTION_PHASES[expected].percent);
            assert!(run.is_running());
        }

        // Final tick: report installed, running cleared.
        assert!(run.tick(42).is_some());
        assert!(!run.is_running());
        assert_eq!(run.progress_percent(), 100);
        assert_eq!(run.report().map(|r| r.timestamp_ms), Some(42));
    }

    #[test]
    fn tick_while_idle_is_a_no_op() {
        let mut run = InspectionRun::new();
        assert!(run.tick(0).is_none());
        assert!(run.report().is_none());
    }

    #[test]
    fn reruns_are_independent_but_deterministic() {
        let mut run = InspectionRun::new();
        let first = run_to_completion(&mut run, 1_000);
        let second = run_to_completion(&mut run, 2_000);

        assert_ne!(first.id, second.id);
        assert_ne!(first.timestamp_ms, second.timestamp_ms);
        // Same static inputs, same transformation.
        assert_eq!(first.items, second.items);
        assert_eq!(first.score, second.score);
        assert_eq!(first.status, second.status);
    }

    #[test]
    fn remediation_fixes_only_low_and_medium_failures() {
        let report = build_report(0);
        let by_id = |id: &str| {
            report
                .items
                .iter()
                .find(|i| i.id == id)
                .unwrap_or_else(|| panic!("missing item {id}"))
        };

        // Medium/Low failures in the template are remediated...
        assert_eq!(by_id("node-kubelet-cert").status, ItemStatus::Pass);
        assert_eq!(by_id("workload-limits").status, ItemStatus::Pass);
        assert_eq!(by_id("pvc-utilization").status, ItemStatus::Pass);
        // ...with the recommendation retained.
        assert!(by_id("node-kubelet-cert").recommendation.is_some());

        // High-severity failure and warnings survive.
        assert_eq!(by_id("workload-restarts").status, ItemStatus::Fail);
        assert_eq!(by_id("etcd-latency").status, ItemStatus::Warning);
        assert_eq!(by_id("network-policies").status, ItemStatus::Warning);
    }

    #[test]
    fn score_and_verdict_are_fixed_for_the_template() {
        let report = build_report(0);
        // One High failure (20) + two warnings (3 each) against the
        // remediated template.
        assert_eq!(report.score, 74);
        assert_eq!(report.status, ReportStatus::Fail);
    }

    #[test]
    fn verdict_rules() {
        let mut items = vec![InspectionItem::new(
            "a",
            "Nodes",
            ItemStatus::Pass,
            Severity::Low,
            "ok",
            None,
        )];
        assert_eq!(verdict(&items), ReportStatus::Pass);

        items[0].status = ItemStatus::Warning;
        assert_eq!(verdict(&items), ReportStatus::Warning);

        items[0].status = ItemStatus::Fail;
        assert_eq!(verdict(&items), ReportStatus::Warning);

        items[0].severity = Severity::Critical;
        assert_eq!(verdict(&items), ReportStatus::Fail);
    }

    #[test]
    fn score_clamps_at_zero() {
        let items: Vec<InspectionItem> = (0..5)
            .map(|i| {
                InspectionItem::new(
                    &format!("crit-{i}"),
                    "Nodes",
                    ItemStatus::Fail,
                    Severity::Critical,
                    "down",
                    None,
                )
            })
            .collect();
        assert_eq!(score(&items), 0);
    }
}

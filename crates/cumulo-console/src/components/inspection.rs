//! Inspection run panel
//!
//! Shared by the Clusters and Kafka views. Each instantiation owns its own
//! `InspectionRun` signal, so the two views never observe each other's runs.
//! The scripted phases are stepped on a fixed tick (see
//! [`crate::timers::drive_inspection`]); the final tick installs an immutable
//! scored report.

use leptos::*;

use cumulo_core::{InspectionRun, ItemStatus, ReportStatus, Severity};

use super::primitives::{Badge, BadgeVariant, EmptyState, ProgressBar, TableCard};
use crate::format::format_time;
use crate::timers::drive_inspection;

fn item_badge(status: ItemStatus) -> BadgeVariant {
    match status {
        ItemStatus::Pass => BadgeVariant::Success,
        ItemStatus::Warning => BadgeVariant::Warning,
        ItemStatus::Fail => BadgeVariant::Error,
    }
}

fn severity_badge(severity: Severity) -> BadgeVariant {
    match severity {
        Severity::Low => BadgeVariant::Default,
        Severity::Medium => BadgeVariant::Info,
        Severity::High => BadgeVariant::Warning,
        Severity::Critical => BadgeVariant::Error,
    }
}

fn report_badge(status: ReportStatus) -> BadgeVariant {
    match status {
        ReportStatus::Pass => BadgeVariant::Success,
        ReportStatus::Warning => BadgeVariant::Warning,
        ReportStatus::Fail => BadgeVariant::Error,
    }
}

/// Health inspection panel with scripted progress and a scored report
#[component]
pub fn InspectionPanel(title: &'static str) -> impl IntoView {
    let run = create_rw_signal(InspectionRun::new());

    let start = move |_| {
        run.update(|r| r.start());
        drive_inspection(run);
    };

    let running = move || run.with(|r| r.is_running());
    let percent = Signal::derive(move || run.with(|r| r.progress_percent()));
    let phase_label = Signal::derive(move || {
        run.with(|r| r.phase().map(|p| p.label.to_string()).unwrap_or_default())
    });
    let report = move || run.with(|r| r.report().cloned());

    view! {
        <TableCard
            title=title
            action=view! {
                <button
                    class="btn btn-primary"
                    on:click=start
                    disabled=running
                >
                    {move || if running() { "Inspecting..." } else { "Run Inspection" }}
                </button>
            }.into_view()
        >
            <Show when=running>
                <div class="inspection-progress">
                    <ProgressBar percent=percent label=phase_label/>
                </div>
            </Show>

            <Show
                when=move || report().is_some()
                fallback=move || view! {
                    <Show when=move || !running()>
                        <EmptyState
                            title="No report yet"
                            description="Run an inspection to produce a scored health report"
                        />
                    </Show>
                }
            >
                {move || report().map(|report| view! {
                    <div class="report">
                        <div class="report-summary">
                            <div class="report-score" aria-label="Inspection score">
                                {report.score}
                            </div>
                            <Badge
                                text=report.status.label()
                                variant=report_badge(report.status)
                                with_dot=true
                            />
                            <span class="report-time">
                                {format!("Completed at {}", format_time(report.timestamp_ms))}
                            </span>
                        </div>
                        <table role="table" aria-label="Inspection findings">
                            <thead>
                                <tr>
                                    <th scope="col">"Category"</th>
                                    <th scope="col">"Status"</th>
                                    <th scope="col">"Severity"</th>
                                    <th scope="col">"Finding"</th>
                                    <th scope="col">"Recommendation"</th>
                                </tr>
                            </thead>
                            <tbody>
                                {report.items.into_iter().map(|item| view! {
                                    <tr>
                                        <td>{item.category}</td>
                                        <td><Badge text=item.status.label() variant=item_badge(item.status)/></td>
                                        <td><Badge text=item.severity.label() variant=severity_badge(item.severity)/></td>
                                        <td>{item.message}</td>
                                        <td class="muted">{item.recommendation.unwrap_or_else(|| "-".to_string())}</td>
                                    </tr>
                                }).collect_view()}
                            </tbody>
                        </table>
                    </div>
                })}
            </Show>
        </TableCard>
    }
}

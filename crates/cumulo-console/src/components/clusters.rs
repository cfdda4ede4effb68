//! Clusters view
//!
//! Cluster table with utilization indicators plus the cluster health
//! inspection panel.

use leptos::*;

use cumulo_core::catalog::{sample_clusters, ClusterStatus};

use super::inspection::InspectionPanel;
use super::primitives::{Badge, BadgeVariant, TableCard};
use crate::format::utilization_class;

fn status_badge(status: ClusterStatus) -> BadgeVariant {
    match status {
        ClusterStatus::Healthy => BadgeVariant::Success,
        ClusterStatus::Warning => BadgeVariant::Warning,
        ClusterStatus::Error => BadgeVariant::Error,
        ClusterStatus::Offline => BadgeVariant::Default,
    }
}

/// Clusters list with inspection
#[component]
pub fn ClustersView() -> impl IntoView {
    let clusters = sample_clusters();

    view! {
        <div class="view active" role="main" aria-label="Clusters">
            <TableCard
                title="Clusters"
                badge=view! {
                    <Badge text=format!("{} clusters", clusters.len()) variant=BadgeVariant::Default/>
                }.into_view()
            >
                <table role="table" aria-label="Clusters">
                    <thead>
                        <tr>
                            <th scope="col">"Name"</th>
                            <th scope="col">"Status"</th>
                            <th scope="col">"Version"</th>
                            <th scope="col">"Region"</th>
                            <th scope="col">"Nodes"</th>
                            <th scope="col">"CPU"</th>
                            <th scope="col">"Memory"</th>
                        </tr>
                    </thead>
                    <tbody>
                        {clusters.into_iter().map(|cluster| view! {
                            <tr>
                                <td><span class="mono">{cluster.name}</span></td>
                                <td>
                                    <Badge
                                        text=cluster.status.label()
                                        variant=status_badge(cluster.status)
                                        with_dot=true
                                    />
                                </td>
                                <td class="mono">{cluster.version}</td>
                                <td>{cluster.region}</td>
                                <td>{cluster.nodes}</td>
                                <td>
                                    <span class=format!("util {}", utilization_class(cluster.cpu_used_pct))>
                                        {format!("{}%", cluster.cpu_used_pct)}
                                    </span>
                                </td>
                                <td>
                                    <span class=format!("util {}", utilization_class(cluster.memory_used_pct))>
                                        {format!("{}%", cluster.memory_used_pct)}
                                    </span>
                                </td>
                            </tr>
                        }).collect_view()}
                    </tbody>
                </table>
            </TableCard>

            <InspectionPanel title="Cluster Health Inspection"/>
        </div>
    }
}

//! Overview dashboard
//!
//! Aggregate stat cards over the mock catalog plus the project table.

use leptos::*;

use cumulo_core::catalog::{
    sample_clusters, sample_projects, sample_pvcs, sample_services, sample_workloads,
};
use cumulo_core::middleware::sample_instances;

use super::icons::{ClusterIcon, NetworkIcon, QueueIcon, StorageIcon, WorkloadIcon};
use super::primitives::{Badge, BadgeVariant, StatCard, TableCard};

/// Overview with platform-wide stats and projects
#[component]
pub fn OverviewView() -> impl IntoView {
    let clusters = sample_clusters();
    let workloads = sample_workloads();
    let services = sample_services();
    let pvcs = sample_pvcs();
    let instances = sample_instances();
    let projects = sample_projects();

    let cluster_stat = format!("{}", clusters.len());
    let node_total: u32 = clusters.iter().map(|c| c.nodes).sum();
    let workload_stat = format!(
        "{}/{}",
        workloads.iter().map(|w| w.replicas_ready).sum::<u32>(),
        workloads.iter().map(|w| w.replicas_desired).sum::<u32>()
    );
    let service_stat = format!("{}", services.len());
    let storage_stat = format!("{} GiB", pvcs.iter().map(|p| p.capacity_gb).sum::<u32>());
    let instance_stat = format!("{}", instances.len());

    view! {
        <div class="view active" role="main" aria-label="Dashboard">
            <div class="stat-grid">
                <StatCard
                    label="Clusters"
                    value=Signal::derive(move || cluster_stat.clone())
                    icon=view! { <ClusterIcon/> }.into_view()
                />
                <StatCard
                    label="Nodes"
                    value=Signal::derive(move || node_total.to_string())
                />
                <StatCard
                    label="Replicas Ready"
                    value=Signal::derive(move || workload_stat.clone())
                    icon=view! { <WorkloadIcon/> }.into_view()
                />
                <StatCard
                    label="Services"
                    value=Signal::derive(move || service_stat.clone())
                    icon=view! { <NetworkIcon/> }.into_view()
                />
                <StatCard
                    label="Provisioned Storage"
                    value=Signal::derive(move || storage_stat.clone())
                    icon=view! { <StorageIcon/> }.into_view()
                />
                <StatCard
                    label="Kafka Instances"
                    value=Signal::derive(move || instance_stat.clone())
                    icon=view! { <QueueIcon/> }.into_view()
                />
            </div>

            <TableCard
                title="Projects"
                badge=view! {
                    <Badge text=format!("{} projects", projects.len()) variant=BadgeVariant::Default/>
                }.into_view()
            >
                <table role="table" aria-label="Projects">
                    <thead>
                        <tr>
                            <th scope="col">"Name"</th>
                            <th scope="col">"Display Name"</th>
                            <th scope="col">"Owner"</th>
                            <th scope="col">"Workloads"</th>
                            <th scope="col">"CPU Quota"</th>
                            <th scope="col">"Memory Quota"</th>
                        </tr>
                    </thead>
                    <tbody>
                        {projects.into_iter().map(|project| view! {
                            <tr>
                                <td><span class="mono">{project.name}</span></td>
                                <td>{project.display_name}</td>
                                <td>{project.owner}</td>
                                <td>{project.workload_count}</td>
                                <td>{format!("{} cores", project.quota_cpu_cores)}</td>
                                <td>{format!("{} GiB", project.quota_memory_gb)}</td>
                            </tr>
                        }).collect_view()}
                    </tbody>
                </table>
            </TableCard>
        </div>
    }
}

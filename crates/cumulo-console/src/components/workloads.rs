//! Workloads view
//!
//! Workload table with per-row AI log analysis, a create form, confirmed
//! deletion, and the AI manifest generator.

use std::rc::Rc;

use leptos::*;
use wasm_bindgen_futures::spawn_local;

use cumulo_assist::Assistant;
use cumulo_core::catalog::{sample_workloads, Workload, WorkloadKind, WorkloadStatus};
use cumulo_core::ResourceId;

use super::icons::SparkIcon;
use super::primitives::{
    Badge, BadgeVariant, ConfirmDialog, EmptyState, LoadingHint, SearchInput, TableCard,
};

fn status_badge(status: WorkloadStatus) -> BadgeVariant {
    match status {
        WorkloadStatus::Running => BadgeVariant::Success,
        WorkloadStatus::Degraded => BadgeVariant::Warning,
        WorkloadStatus::Failed => BadgeVariant::Error,
        WorkloadStatus::Pending => BadgeVariant::Default,
    }
}

fn parse_kind(value: &str) -> WorkloadKind {
    match value {
        "StatefulSet" => WorkloadKind::StatefulSet,
        "DaemonSet" => WorkloadKind::DaemonSet,
        _ => WorkloadKind::Deployment,
    }
}

/// Workload list, creation, deletion, and AI helpers
#[component]
pub fn WorkloadsView() -> impl IntoView {
    let assistant = expect_context::<Rc<Assistant>>();

    let workloads = create_rw_signal(sample_workloads());
    let search = create_rw_signal(String::new());
    let filtered = move || {
        let query = search.get().to_lowercase();
        workloads.with(|list| {
            list.iter()
                .filter(|w| {
                    query.is_empty()
                        || w.name.to_lowercase().contains(&query)
                        || w.project.to_lowercase().contains(&query)
                })
                .cloned()
                .collect::<Vec<_>>()
        })
    };

    // Log analysis: which workload, in-flight flag, and the last result.
    let analyzing = create_rw_signal(false);
    let analysis = create_rw_signal(None::<(String, String)>);

    // Deletion pends in a signal until the dialog confirms or cancels.
    let pending_delete = create_rw_signal(None::<(ResourceId, String)>);
    let delete_open = Signal::derive(move || pending_delete.get().is_some());
    let delete_message = Signal::derive(move || {
        pending_delete
            .get()
            .map(|(_, name)| format!("Delete workload \"{name}\"? This cannot be undone."))
            .unwrap_or_default()
    });
    let confirm_delete = move |_| {
        if let Some((id, _)) = pending_delete.get() {
            workloads.update(|list| list.retain(|w| w.id != id));
        }
        pending_delete.set(None);
    };
    let cancel_delete = move |_| pending_delete.set(None);

    // Create form
    let form_name = create_rw_signal(String::new());
    let form_project = create_rw_signal("retail".to_string());
    let form_kind = create_rw_signal("Deployment".to_string());
    let form_image = create_rw_signal(String::new());
    let form_replicas = create_rw_signal("1".to_string());
    let form_valid = Signal::derive(move || {
        !form_name.get().trim().is_empty() && !form_image.get().trim().is_empty()
    });
    let submit_create = move |_| {
        if !form_valid.get() {
            return;
        }
        let replicas = form_replicas.get().trim().parse().unwrap_or(1);
        let workload = Workload::new(
            form_name.get().trim(),
            form_project.get().trim(),
            parse_kind(&form_kind.get()),
            form_image.get().trim(),
            replicas,
        );
        workloads.update(|list| list.push(workload));
        form_name.set(String::new());
        form_image.set(String::new());
        form_replicas.set("1".to_string());
    };

    // Manifest generator
    let manifest_prompt = create_rw_signal(String::new());
    let manifest_busy = create_rw_signal(false);
    let manifest_result = create_rw_signal(None::<String>);
    let generator = assistant.clone();
    let generate_manifest = move |_| {
        let description = manifest_prompt.get();
        if description.trim().is_empty() || manifest_busy.get() {
            return;
        }
        manifest_busy.set(true);
        let assistant = generator.clone();
        spawn_local(async move {
            let manifest = assistant.generate_manifest(description.trim()).await;
            manifest_result.try_set(Some(manifest));
            manifest_busy.try_set(false);
        });
    };

    let analyzer = assistant;

    view! {
        <div class="view active" role="main" aria-label="Workloads">
            <TableCard
                title="Workloads"
                badge=view! {
                    <Badge
                        text=Signal::derive(move || format!("{} workloads", workloads.with(|w| w.len())))
                        variant=BadgeVariant::Default
                    />
                }.into_view()
                action=view! {
                    <SearchInput value=search placeholder="Filter by name or project"/>
                }.into_view()
            >
                <table role="table" aria-label="Workloads">
                    <thead>
                        <tr>
                            <th scope="col">"Name"</th>
                            <th scope="col">"Project"</th>
                            <th scope="col">"Kind"</th>
                            <th scope="col">"Status"</th>
                            <th scope="col">"Replicas"</th>
                            <th scope="col">"Image"</th>
                            <th scope="col">"Actions"</th>
                        </tr>
                    </thead>
                    <tbody>
                        <For
                            each=filtered
                            key=|workload| workload.id
                            children=move |workload: Workload| {
                                let id = workload.id;
                                let name = workload.name.clone();
                                let delete_name = workload.name.clone();
                                let log = workload.recent_log.clone();
                                let assistant = analyzer.clone();
                                let analyze = move |_| {
                                    if analyzing.get() {
                                        return;
                                    }
                                    analyzing.set(true);
                                    let assistant = assistant.clone();
                                    let name = name.clone();
                                    let log = log.clone();
                                    spawn_local(async move {
                                        let text = assistant.analyze_logs(&log).await;
                                        analysis.try_set(Some((name, text)));
                                        analyzing.try_set(false);
                                    });
                                };
                                view! {
                                    <tr>
                                        <td><span class="mono">{workload.name.clone()}</span></td>
                                        <td>{workload.project.clone()}</td>
                                        <td>{workload.kind.label()}</td>
                                        <td>
                                            <Badge
                                                text=workload.status.label()
                                                variant=status_badge(workload.status)
                                                with_dot=true
                                            />
                                        </td>
                                        <td class="mono">
                                            {format!("{}/{}", workload.replicas_ready, workload.replicas_desired)}
                                        </td>
                                        <td class="mono">{workload.image.clone()}</td>
                                        <td class="row-actions">
                                            <button
                                                class="btn btn-small"
                                                disabled=move || analyzing.get()
                                                on:click=analyze
                                            >
                                                <SparkIcon/>
                                                "Analyze logs"
                                            </button>
                                            <button
                                                class="btn btn-small btn-danger"
                                                on:click=move |_| {
                                                    pending_delete.set(Some((id, delete_name.clone())))
                                                }
                                            >
                                                "Delete"
                                            </button>
                                        </td>
                                    </tr>
                                }
                            }
                        />
                    </tbody>
                </table>
                <Show when=move || filtered().is_empty()>
                    <EmptyState
                        title="No matching workloads"
                        description="Clear the filter or create a workload below."
                    />
                </Show>
            </TableCard>

            <Show when=move || analyzing.get()>
                <LoadingHint message="Analyzing logs..."/>
            </Show>
            {move || analysis.get().map(|(name, text)| view! {
                <div class="card ai-result">
                    <div class="card-title">
                        <SparkIcon/>
                        {format!("Log analysis: {name}")}
                    </div>
                    <pre class="ai-text">{text}</pre>
                </div>
            })}

            <TableCard title="Create Workload">
                <div class="form-grid">
                    <label class="form-field">
                        <span>"Name"</span>
                        <input
                            type="text"
                            placeholder="my-service"
                            prop:value=move || form_name.get()
                            on:input=move |ev| form_name.set(event_target_value(&ev))
                        />
                    </label>
                    <label class="form-field">
                        <span>"Project"</span>
                        <input
                            type="text"
                            prop:value=move || form_project.get()
                            on:input=move |ev| form_project.set(event_target_value(&ev))
                        />
                    </label>
                    <label class="form-field">
                        <span>"Kind"</span>
                        <select on:change=move |ev| form_kind.set(event_target_value(&ev))>
                            <option value="Deployment">"Deployment"</option>
                            <option value="StatefulSet">"StatefulSet"</option>
                            <option value="DaemonSet">"DaemonSet"</option>
                        </select>
                    </label>
                    <label class="form-field">
                        <span>"Image"</span>
                        <input
                            type="text"
                            placeholder="registry.local/my-service:1.0.0"
                            prop:value=move || form_image.get()
                            on:input=move |ev| form_image.set(event_target_value(&ev))
                        />
                    </label>
                    <label class="form-field">
                        <span>"Replicas"</span>
                        <input
                            type="number"
                            min="1"
                            prop:value=move || form_replicas.get()
                            on:input=move |ev| form_replicas.set(event_target_value(&ev))
                        />
                    </label>
                </div>
                <button
                    class="btn btn-primary"
                    disabled=move || !form_valid.get()
                    on:click=submit_create
                >
                    "Create"
                </button>
            </TableCard>

            <TableCard title="AI Manifest Generator">
                <p class="card-hint">
                    "Describe the workload in plain language and get a starting manifest."
                </p>
                <textarea
                    class="ai-input"
                    rows=3
                    placeholder="A redis cache with 2 replicas and a 1Gi memory limit"
                    prop:value=move || manifest_prompt.get()
                    on:input=move |ev| manifest_prompt.set(event_target_value(&ev))
                ></textarea>
                <button
                    class="btn btn-primary"
                    disabled=move || manifest_busy.get() || manifest_prompt.with(|p| p.trim().is_empty())
                    on:click=generate_manifest
                >
                    <SparkIcon/>
                    "Generate"
                </button>
                <Show when=move || manifest_busy.get()>
                    <LoadingHint message="Generating manifest..."/>
                </Show>
                {move || manifest_result.get().map(|manifest| view! {
                    <pre class="ai-text manifest">{manifest}</pre>
                })}
            </TableCard>

            <ConfirmDialog
                open=delete_open
                title="Delete workload"
                message=delete_message
                on_confirm=confirm_delete
                on_cancel=cancel_delete
            />
        </div>
    }
}

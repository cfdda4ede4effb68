//! Middleware view
//!
//! The one view backed by the lifecycle engine: Kafka instance cards with
//! status-dependent actions and batch operations, topics with inline config
//! editing, consumer groups, the health inspection, and AI tuning advice.

use std::rc::Rc;

use leptos::*;
use wasm_bindgen_futures::spawn_local;

use cumulo_assist::Assistant;
use cumulo_core::middleware::{
    sample_consumer_groups, sample_instances, sample_metrics, sample_topics,
};
use cumulo_core::{
    InstanceStatus, KafkaInstance, LifecycleAction, LifecycleEngine, ResourceId,
};

use super::icons::SparkIcon;
use super::inspection::InspectionPanel;
use super::primitives::{
    Badge, BadgeVariant, ConfirmDialog, LoadingHint, TableCard,
};
use crate::format::{format_number, format_rate_mb, lag_class};
use crate::timers::{drive_completion, now_ms};

const UPGRADE_TARGET_VERSION: &str = "3.7.0";

fn status_badge(status: InstanceStatus) -> BadgeVariant {
    match status {
        InstanceStatus::Running => BadgeVariant::Success,
        InstanceStatus::Stopped => BadgeVariant::Default,
        InstanceStatus::Deleting => BadgeVariant::Warning,
        _ => BadgeVariant::Info,
    }
}

/// What the delete dialog is about to remove
#[derive(Clone)]
enum DeleteTarget {
    One(ResourceId, String),
    Many(Vec<ResourceId>),
}

/// Kafka instances, topics, consumer groups, inspection, and AI tuning
#[component]
pub fn MiddlewareView() -> impl IntoView {
    let assistant = expect_context::<Rc<Assistant>>();

    let engine = create_rw_signal(LifecycleEngine::new(sample_instances()));
    let selected = create_rw_signal(Vec::<ResourceId>::new());

    // Submits an action and schedules its delayed completion. Invalid
    // transitions (a second click racing a state change) are dropped.
    let dispatch = move |id: ResourceId, action: LifecycleAction| {
        let result = engine.try_update(|e| e.submit(id, action, now_ms()));
        if let Some(Ok(Some(scheduled))) = result {
            drive_completion(engine, scheduled);
        }
    };

    let pending_delete = create_rw_signal(None::<DeleteTarget>);
    let delete_open = Signal::derive(move || pending_delete.get().is_some());
    let delete_message = Signal::derive(move || match pending_delete.get() {
        Some(DeleteTarget::One(_, name)) => {
            format!("Delete instance \"{name}\"? All topics on it will be lost.")
        }
        Some(DeleteTarget::Many(ids)) => {
            format!("Delete {} selected instances? All topics on them will be lost.", ids.len())
        }
        None => String::new(),
    });
    let confirm_delete = move |_| {
        match pending_delete.get() {
            Some(DeleteTarget::One(id, _)) => dispatch(id, LifecycleAction::Delete),
            Some(DeleteTarget::Many(ids)) => {
                for id in ids {
                    dispatch(id, LifecycleAction::Delete);
                }
            }
            None => {}
        }
        selected.set(Vec::new());
        pending_delete.set(None);
    };
    let cancel_delete = move |_| pending_delete.set(None);

    let batch = move |action: fn() -> LifecycleAction| {
        for id in selected.get() {
            dispatch(id, action());
        }
        selected.set(Vec::new());
    };

    // Create form
    let form_name = create_rw_signal(String::new());
    let form_version = create_rw_signal("3.6.1".to_string());
    let form_brokers = create_rw_signal("3".to_string());
    let form_storage = create_rw_signal("100".to_string());
    let form_valid = Signal::derive(move || !form_name.get().trim().is_empty());
    let submit_create = move |_| {
        if !form_valid.get() {
            return;
        }
        let instance = KafkaInstance::new(
            form_name.get().trim(),
            form_version.get().trim(),
            form_brokers.get().trim().parse().unwrap_or(3),
            form_storage.get().trim().parse().unwrap_or(100),
        );
        let result = engine.try_update(|e| e.create(instance, now_ms()));
        if let Some(Ok(Some(scheduled))) = result {
            drive_completion(engine, scheduled);
        }
        form_name.set(String::new());
    };

    // Topics with inline config editing
    let topics = create_rw_signal(sample_topics());
    let editing = create_rw_signal(None::<usize>);
    let draft_key = create_rw_signal(String::new());
    let draft_value = create_rw_signal(String::new());
    let config_error = create_rw_signal(None::<String>);

    let groups = sample_consumer_groups();

    // AI tuning
    let metrics = sample_metrics();
    let tuning_busy = create_rw_signal(false);
    let tuning_result = create_rw_signal(None::<String>);
    let tuner = assistant;
    let metrics_json = metrics.to_prompt_text();
    let suggest = move |_| {
        if tuning_busy.get() {
            return;
        }
        tuning_busy.set(true);
        let assistant = tuner.clone();
        let metrics_json = metrics_json.clone();
        spawn_local(async move {
            let text = assistant.suggest_optimizations(&metrics_json).await;
            tuning_result.try_set(Some(text));
            tuning_busy.try_set(false);
        });
    };

    view! {
        <div class="view active" role="main" aria-label="Middleware">
            <TableCard
                title="Kafka Instances"
                badge=view! {
                    <Badge
                        text=Signal::derive(move || {
                            format!("{} instances", engine.with(|e| e.len()))
                        })
                        variant=BadgeVariant::Default
                    />
                }.into_view()
                action=view! {
                    <Show when=move || !selected.with(|s| s.is_empty())>
                        <div class="batch-actions">
                            <span class="batch-count">
                                {move || format!("{} selected", selected.with(|s| s.len()))}
                            </span>
                            <button class="btn btn-small" on:click=move |_| batch(|| LifecycleAction::Stop)>
                                "Stop"
                            </button>
                            <button class="btn btn-small" on:click=move |_| batch(|| LifecycleAction::Restart)>
                                "Restart"
                            </button>
                            <button
                                class="btn btn-small btn-danger"
                                on:click=move |_| {
                                    pending_delete.set(Some(DeleteTarget::Many(selected.get())))
                                }
                            >
                                "Delete"
                            </button>
                        </div>
                    </Show>
                }.into_view()
            >
                // Instance status and version mutate in place, so the cards
                // re-render as a block instead of using a keyed list.
                <div class="instance-grid">
                    {move || engine.with(|e| e.resources().to_vec()).into_iter().map(|instance| {
                        let id = instance.id;
                        let name = instance.name.clone();
                        let is_selected = move || selected.with(|s| s.contains(&id));
                        let toggle = move |_| {
                            selected.update(|s| {
                                if let Some(pos) = s.iter().position(|sel| *sel == id) {
                                    s.remove(pos);
                                } else {
                                    s.push(id);
                                }
                            });
                        };
                        let actions = match instance.status {
                            InstanceStatus::Running => view! {
                                <button class="btn btn-small" on:click=move |_| {
                                    dispatch(id, LifecycleAction::Stop)
                                }>"Stop"</button>
                                <button class="btn btn-small" on:click=move |_| {
                                    dispatch(id, LifecycleAction::Restart)
                                }>"Restart"</button>
                                <button class="btn btn-small" on:click=move |_| {
                                    dispatch(id, LifecycleAction::Upgrade {
                                        target_version: UPGRADE_TARGET_VERSION.to_string(),
                                    })
                                }>{format!("Upgrade to {UPGRADE_TARGET_VERSION}")}</button>
                                <button class="btn btn-small btn-danger" on:click={
                                    let name = name.clone();
                                    move |_| pending_delete.set(Some(DeleteTarget::One(id, name.clone())))
                                }>"Delete"</button>
                            }.into_view(),
                            InstanceStatus::Stopped => view! {
                                <button class="btn btn-small" on:click=move |_| {
                                    dispatch(id, LifecycleAction::Resume)
                                }>"Resume"</button>
                                <button class="btn btn-small btn-danger" on:click={
                                    let name = name.clone();
                                    move |_| pending_delete.set(Some(DeleteTarget::One(id, name.clone())))
                                }>"Delete"</button>
                            }.into_view(),
                            _ => view! {
                                <span class="transition-hint" role="status">"In progress..."</span>
                            }.into_view(),
                        };
                        view! {
                            <div class="instance-card" class:selected=is_selected>
                                <div class="instance-header">
                                    <label class="instance-select">
                                        <input
                                            type="checkbox"
                                            prop:checked=is_selected
                                            on:change=toggle
                                            disabled=instance.status.is_transitional()
                                        />
                                        <span class="instance-name mono">{instance.name.clone()}</span>
                                    </label>
                                    <Badge
                                        text=instance.status.label()
                                        variant=status_badge(instance.status)
                                        with_dot=true
                                    />
                                </div>
                                <div class="instance-meta mono">
                                    {format!(
                                        "v{} · {} brokers · {} GiB · {} topics",
                                        instance.version,
                                        instance.brokers,
                                        instance.storage_gb,
                                        instance.topic_count,
                                    )}
                                </div>
                                <div class="instance-actions">{actions}</div>
                            </div>
                        }
                    }).collect_view()}
                </div>
            </TableCard>

            <TableCard title="Create Instance">
                <div class="form-grid">
                    <label class="form-field">
                        <span>"Name"</span>
                        <input
                            type="text"
                            placeholder="events-broker"
                            prop:value=move || form_name.get()
                            on:input=move |ev| form_name.set(event_target_value(&ev))
                        />
                    </label>
                    <label class="form-field">
                        <span>"Version"</span>
                        <input
                            type="text"
                            prop:value=move || form_version.get()
                            on:input=move |ev| form_version.set(event_target_value(&ev))
                        />
                    </label>
                    <label class="form-field">
                        <span>"Brokers"</span>
                        <input
                            type="number"
                            min="1"
                            prop:value=move || form_brokers.get()
                            on:input=move |ev| form_brokers.set(event_target_value(&ev))
                        />
                    </label>
                    <label class="form-field">
                        <span>"Storage (GiB)"</span>
                        <input
                            type="number"
                            min="10"
                            prop:value=move || form_storage.get()
                            on:input=move |ev| form_storage.set(event_target_value(&ev))
                        />
                    </label>
                </div>
                <button
                    class="btn btn-primary"
                    disabled=move || !form_valid.get()
                    on:click=submit_create
                >
                    "Provision"
                </button>
            </TableCard>

            <TableCard title="Topics">
                <table role="table" aria-label="Topics">
                    <thead>
                        <tr>
                            <th scope="col">"Name"</th>
                            <th scope="col">"Partitions"</th>
                            <th scope="col">"Replication"</th>
                            <th scope="col">"Messages"</th>
                            <th scope="col">"Config"</th>
                            <th scope="col"></th>
                        </tr>
                    </thead>
                    <tbody>
                        {move || topics.get().into_iter().enumerate().map(|(ti, topic)| {
                            let is_editing = editing.get() == Some(ti);
                            let summary = topic
                                .config
                                .entries()
                                .iter()
                                .map(|e| format!("{}={}", e.key, e.value))
                                .collect::<Vec<_>>()
                                .join(", ");
                            let submit_add = move |_| {
                                let result = topics
                                    .try_update(|list| {
                                        list[ti].config.add(draft_key.get().trim(), draft_value.get())
                                    })
                                    .unwrap_or(Ok(()));
                                match result {
                                    Ok(()) => {
                                        draft_key.set(String::new());
                                        draft_value.set(String::new());
                                        config_error.set(None);
                                    }
                                    Err(err) => config_error.set(Some(err.to_string())),
                                }
                            };
                            let config = topic.config.clone();
                            let editor = is_editing.then(move || view! {
                                <tr class="config-editor-row">
                                    <td colspan=6>
                                        <div class="config-editor">
                                            {config.entries().iter().enumerate().map(|(pi, entry)| {
                                                let key = entry.key.clone();
                                                let value = entry.value.clone();
                                                view! {
                                                    <div class="param-row">
                                                        <input
                                                            class="param-input mono"
                                                            type="text"
                                                            prop:value=key
                                                            on:change=move |ev| {
                                                                let new_key = event_target_value(&ev);
                                                                let result = topics
                                                                    .try_update(|list| {
                                                                        list[ti].config.rename(pi, new_key.trim())
                                                                    })
                                                                    .unwrap_or(Ok(()));
                                                                match result {
                                                                    Ok(()) => config_error.set(None),
                                                                    Err(err) => config_error
                                                                        .set(Some(err.to_string())),
                                                                }
                                                            }
                                                        />
                                                        <input
                                                            class="param-input mono"
                                                            type="text"
                                                            prop:value=value
                                                            on:change=move |ev| {
                                                                let new_value = event_target_value(&ev);
                                                                let result = topics
                                                                    .try_update(|list| {
                                                                        list[ti].config.set_value(pi, new_value)
                                                                    })
                                                                    .unwrap_or(Ok(()));
                                                                match result {
                                                                    Ok(()) => config_error.set(None),
                                                                    Err(err) => config_error
                                                                        .set(Some(err.to_string())),
                                                                }
                                                            }
                                                        />
                                                        <button
                                                            class="btn btn-small"
                                                            on:click=move |_| {
                                                                topics.update(|list| {
                                                                    let _ = list[ti].config.remove(pi);
                                                                });
                                                                config_error.set(None);
                                                            }
                                                        >
                                                            "Remove"
                                                        </button>
                                                    </div>
                                                }
                                            }).collect_view()}
                                            <div class="param-row">
                                                <input
                                                    class="param-input mono"
                                                    type="text"
                                                    placeholder="key"
                                                    prop:value=move || draft_key.get()
                                                    on:input=move |ev| draft_key.set(event_target_value(&ev))
                                                />
                                                <input
                                                    class="param-input mono"
                                                    type="text"
                                                    placeholder="value"
                                                    prop:value=move || draft_value.get()
                                                    on:input=move |ev| draft_value.set(event_target_value(&ev))
                                                />
                                                <button class="btn btn-small btn-primary" on:click=submit_add>
                                                    "Add"
                                                </button>
                                            </div>
                                            {move || config_error.get().map(|message| view! {
                                                <p class="form-error" role="alert">{message}</p>
                                            })}
                                        </div>
                                    </td>
                                </tr>
                            });
                            view! {
                                <tr>
                                    <td><span class="mono">{topic.name.clone()}</span></td>
                                    <td>{topic.partitions}</td>
                                    <td>{topic.replication_factor}</td>
                                    <td class="mono">{format_number(topic.message_count)}</td>
                                    <td class="mono config-summary">{summary}</td>
                                    <td class="row-actions">
                                        <button
                                            class="btn btn-small"
                                            on:click=move |_| {
                                                config_error.set(None);
                                                draft_key.set(String::new());
                                                draft_value.set(String::new());
                                                editing.set(if is_editing { None } else { Some(ti) });
                                            }
                                        >
                                            {if is_editing { "Done" } else { "Edit config" }}
                                        </button>
                                    </td>
                                </tr>
                                {editor}
                            }
                        }).collect_view()}
                    </tbody>
                </table>
            </TableCard>

            <TableCard title="Consumer Groups">
                <table role="table" aria-label="Consumer groups">
                    <thead>
                        <tr>
                            <th scope="col">"Group"</th>
                            <th scope="col">"State"</th>
                            <th scope="col">"Members"</th>
                            <th scope="col">"Topics"</th>
                            <th scope="col">"Total Lag"</th>
                        </tr>
                    </thead>
                    <tbody>
                        {groups.into_iter().map(|group| view! {
                            <tr>
                                <td><span class="mono">{group.group_id}</span></td>
                                <td>{group.state}</td>
                                <td>{group.member_count}</td>
                                <td class="mono">{group.topics.join(", ")}</td>
                                <td>
                                    <span class=format!("lag {}", lag_class(group.total_lag))>
                                        {format_number(group.total_lag)}
                                    </span>
                                </td>
                            </tr>
                        }).collect_view()}
                    </tbody>
                </table>
            </TableCard>

            <InspectionPanel title="Kafka Health Inspection"/>

            <TableCard title="AI Tuning Advisor">
                <p class="card-hint">
                    {format!(
                        "Reviews the latest metrics snapshot for \"{}\" and suggests broker and topic tuning.",
                        metrics.instance,
                    )}
                </p>
                <div class="metrics-summary mono">
                    {format!(
                        "{} msg/s in · {} in · {} out · disk {}%",
                        format_number(metrics.messages_in_per_sec),
                        format_rate_mb(metrics.bytes_in_per_sec),
                        format_rate_mb(metrics.bytes_out_per_sec),
                        metrics.disk_used_pct,
                    )}
                </div>
                <button class="btn btn-primary" disabled=move || tuning_busy.get() on:click=suggest>
                    <SparkIcon/>
                    "Suggest optimizations"
                </button>
                <Show when=move || tuning_busy.get()>
                    <LoadingHint message="Reviewing metrics..."/>
                </Show>
                {move || tuning_result.get().map(|text| view! {
                    <pre class="ai-text">{text}</pre>
                })}
            </TableCard>

            <ConfirmDialog
                open=delete_open
                title="Delete instance"
                message=delete_message
                on_confirm=confirm_delete
                on_cancel=cancel_delete
            />
        </div>
    }
}

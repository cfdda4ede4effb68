//! Storage view
//!
//! Persistent volume claims, storage classes, and deployment templates with
//! an inline parameter editor plus JSON export.

use leptos::*;
use wasm_bindgen::{JsCast, JsValue};

use cumulo_core::catalog::{sample_pvcs, sample_storage_classes, PvcStatus};
use cumulo_core::template::sample_templates;
use cumulo_core::ResourceId;

use super::icons::DownloadIcon;
use super::primitives::{Badge, BadgeVariant, ConfirmDialog, EmptyState, TableCard};

fn pvc_badge(status: PvcStatus) -> BadgeVariant {
    match status {
        PvcStatus::Bound => BadgeVariant::Success,
        PvcStatus::Pending => BadgeVariant::Warning,
        PvcStatus::Released => BadgeVariant::Default,
    }
}

/// Hands a JSON document to the browser as a file download.
fn download_json(filename: &str, contents: &str) -> Result<(), JsValue> {
    let parts = js_sys::Array::new();
    parts.push(&JsValue::from_str(contents));
    let options = web_sys::BlobPropertyBag::new();
    options.set_type("application/json");
    let blob = web_sys::Blob::new_with_str_sequence_and_options(&parts, &options)?;
    let url = web_sys::Url::create_object_url_with_blob(&blob)?;

    let document = web_sys::window()
        .and_then(|w| w.document())
        .ok_or_else(|| JsValue::from_str("document unavailable"))?;
    let anchor: web_sys::HtmlAnchorElement =
        document.create_element("a")?.unchecked_into();
    anchor.set_href(&url);
    anchor.set_download(filename);
    anchor.click();
    web_sys::Url::revoke_object_url(&url)
}

/// PVCs, storage classes, and deployment templates
#[component]
pub fn StorageView() -> impl IntoView {
    let pvcs = create_rw_signal(sample_pvcs());
    let classes = sample_storage_classes();
    let templates = create_rw_signal(sample_templates());

    let pending_delete = create_rw_signal(None::<(ResourceId, String)>);
    let delete_open = Signal::derive(move || pending_delete.get().is_some());
    let delete_message = Signal::derive(move || {
        pending_delete
            .get()
            .map(|(_, name)| {
                format!("Delete claim \"{name}\"? Data on the volume may be reclaimed.")
            })
            .unwrap_or_default()
    });
    let confirm_delete = move |_| {
        if let Some((id, _)) = pending_delete.get() {
            pvcs.update(|list| list.retain(|p| p.id != id));
        }
        pending_delete.set(None);
    };
    let cancel_delete = move |_| pending_delete.set(None);

    // Parameter editing: at most one "add" row is open across all templates,
    // and the last edit error is shown on the card it came from.
    let add_target = create_rw_signal(None::<usize>);
    let draft_key = create_rw_signal(String::new());
    let draft_value = create_rw_signal(String::new());
    let param_error = create_rw_signal(None::<(usize, String)>);

    view! {
        <div class="view active" role="main" aria-label="Storage">
            <TableCard
                title="Persistent Volume Claims"
                badge=view! {
                    <Badge
                        text=Signal::derive(move || format!("{} claims", pvcs.with(|p| p.len())))
                        variant=BadgeVariant::Default
                    />
                }.into_view()
            >
                <table role="table" aria-label="Persistent volume claims">
                    <thead>
                        <tr>
                            <th scope="col">"Name"</th>
                            <th scope="col">"Namespace"</th>
                            <th scope="col">"Status"</th>
                            <th scope="col">"Capacity"</th>
                            <th scope="col">"Access"</th>
                            <th scope="col">"Class"</th>
                            <th scope="col">"Actions"</th>
                        </tr>
                    </thead>
                    <tbody>
                        <For
                            each=move || pvcs.get()
                            key=|pvc| pvc.id
                            children=move |pvc| {
                                let id = pvc.id;
                                let name = pvc.name.clone();
                                view! {
                                    <tr>
                                        <td><span class="mono">{pvc.name.clone()}</span></td>
                                        <td>{pvc.namespace.clone()}</td>
                                        <td>
                                            <Badge
                                                text=pvc.status.label()
                                                variant=pvc_badge(pvc.status)
                                                with_dot=true
                                            />
                                        </td>
                                        <td class="mono">{format!("{} GiB", pvc.capacity_gb)}</td>
                                        <td class="mono">{pvc.access_mode.clone()}</td>
                                        <td class="mono">{pvc.storage_class.clone()}</td>
                                        <td class="row-actions">
                                            <button
                                                class="btn btn-small btn-danger"
                                                on:click=move |_| {
                                                    pending_delete.set(Some((id, name.clone())))
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
                <Show when=move || pvcs.with(|p| p.is_empty())>
                    <EmptyState title="No volume claims"/>
                </Show>
            </TableCard>

            <TableCard title="Storage Classes">
                <table role="table" aria-label="Storage classes">
                    <thead>
                        <tr>
                            <th scope="col">"Name"</th>
                            <th scope="col">"Provisioner"</th>
                            <th scope="col">"Reclaim Policy"</th>
                            <th scope="col">"Default"</th>
                        </tr>
                    </thead>
                    <tbody>
                        {classes.into_iter().map(|class| view! {
                            <tr>
                                <td><span class="mono">{class.name}</span></td>
                                <td class="mono">{class.provisioner}</td>
                                <td>{class.reclaim_policy}</td>
                                <td>
                                    {class.is_default.then(|| view! {
                                        <Badge text="Default" variant=BadgeVariant::Info/>
                                    })}
                                </td>
                            </tr>
                        }).collect_view()}
                    </tbody>
                </table>
            </TableCard>

            <TableCard title="Deployment Templates">
                <div class="template-grid">
                    {move || templates.get().into_iter().enumerate().map(|(ti, template)| {
                        let export = {
                            let template = template.clone();
                            move |_| match template.export_json() {
                                Ok(json) => {
                                    if let Err(err) =
                                        download_json(&template.export_filename(), &json)
                                    {
                                        logging::warn!("template export failed: {err:?}");
                                    }
                                }
                                Err(err) => logging::warn!("template export failed: {err}"),
                            }
                        };
                        let submit_add = move |_| {
                            let key = draft_key.get();
                            let value = draft_value.get();
                            let result = templates
                                .try_update(|list| list[ti].params.add(key.trim(), value))
                                .unwrap_or(Ok(()));
                            match result {
                                Ok(()) => {
                                    draft_key.set(String::new());
                                    draft_value.set(String::new());
                                    add_target.set(None);
                                    param_error.set(None);
                                }
                                Err(err) => param_error.set(Some((ti, err.to_string()))),
                            }
                        };
                        view! {
                            <div class="template-card">
                                <div class="template-header">
                                    <div>
                                        <div class="template-name">{template.name.clone()}</div>
                                        <p class="template-description">{template.description.clone()}</p>
                                    </div>
                                    <button class="btn btn-small" on:click=export>
                                        <DownloadIcon/>
                                        "Export JSON"
                                    </button>
                                </div>
                                <table class="param-table" aria-label="Template parameters">
                                    <thead>
                                        <tr>
                                            <th scope="col">"Parameter"</th>
                                            <th scope="col">"Value"</th>
                                            <th scope="col"></th>
                                        </tr>
                                    </thead>
                                    <tbody>
                                        {template.params.entries().iter().enumerate().map(|(pi, entry)| {
                                            let key = entry.key.clone();
                                            let value = entry.value.clone();
                                            view! {
                                                <tr>
                                                    <td>
                                                        <input
                                                            class="param-input mono"
                                                            type="text"
                                                            prop:value=key
                                                            on:change=move |ev| {
                                                                let new_key = event_target_value(&ev);
                                                                let result = templates
                                                                    .try_update(|list| {
                                                                        list[ti].params.rename(pi, new_key.trim())
                                                                    })
                                                                    .unwrap_or(Ok(()));
                                                                match result {
                                                                    Ok(()) => param_error.set(None),
                                                                    Err(err) => param_error
                                                                        .set(Some((ti, err.to_string()))),
                                                                }
                                                            }
                                                        />
                                                    </td>
                                                    <td>
                                                        <input
                                                            class="param-input mono"
                                                            type="text"
                                                            prop:value=value
                                                            on:change=move |ev| {
                                                                let new_value = event_target_value(&ev);
                                                                let result = templates
                                                                    .try_update(|list| {
                                                                        list[ti].params.set_value(pi, new_value)
                                                                    })
                                                                    .unwrap_or(Ok(()));
                                                                match result {
                                                                    Ok(()) => param_error.set(None),
                                                                    Err(err) => param_error
                                                                        .set(Some((ti, err.to_string()))),
                                                                }
                                                            }
                                                        />
                                                    </td>
                                                    <td>
                                                        <button
                                                            class="btn btn-small"
                                                            on:click=move |_| {
                                                                templates.update(|list| {
                                                                    let _ = list[ti].params.remove(pi);
                                                                });
                                                                param_error.set(None);
                                                            }
                                                        >
                                                            "Remove"
                                                        </button>
                                                    </td>
                                                </tr>
                                            }
                                        }).collect_view()}
                                    </tbody>
                                </table>
                                {move || param_error.get().and_then(|(idx, message)| {
                                    (idx == ti).then(|| view! {
                                        <p class="form-error" role="alert">{message}</p>
                                    })
                                })}
                                <Show
                                    when=move || add_target.get() == Some(ti)
                                    fallback=move || view! {
                                        <button
                                            class="btn btn-small"
                                            on:click=move |_| {
                                                draft_key.set(String::new());
                                                draft_value.set(String::new());
                                                add_target.set(Some(ti));
                                            }
                                        >
                                            "Add parameter"
                                        </button>
                                    }
                                >
                                    <div class="param-add-row">
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
                                        <button class="btn btn-small btn-primary" on:click=submit_add.clone()>
                                            "Add"
                                        </button>
                                        <button
                                            class="btn btn-small"
                                            on:click=move |_| {
                                                add_target.set(None);
                                                param_error.set(None);
                                            }
                                        >
                                            "Cancel"
                                        </button>
                                    </div>
                                </Show>
                            </div>
                        }
                    }).collect_view()}
                </div>
            </TableCard>

            <ConfirmDialog
                open=delete_open
                title="Delete volume claim"
                message=delete_message
                on_confirm=confirm_delete
                on_cancel=cancel_delete
            />
        </div>
    }
}

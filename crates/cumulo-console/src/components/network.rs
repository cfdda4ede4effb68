//! Network view
//!
//! Services and ingress routes, with an add-service form and confirmed
//! service deletion.

use leptos::*;

use cumulo_core::catalog::{
    sample_ingresses, sample_services, ServiceEntry, ServiceType,
};
use cumulo_core::ResourceId;

use super::primitives::{Badge, BadgeVariant, ConfirmDialog, EmptyState, TableCard};

fn type_badge(service_type: ServiceType) -> BadgeVariant {
    match service_type {
        ServiceType::LoadBalancer => BadgeVariant::Info,
        ServiceType::NodePort => BadgeVariant::Warning,
        ServiceType::ClusterIp => BadgeVariant::Default,
    }
}

fn parse_service_type(value: &str) -> ServiceType {
    match value {
        "NodePort" => ServiceType::NodePort,
        "LoadBalancer" => ServiceType::LoadBalancer,
        _ => ServiceType::ClusterIp,
    }
}

/// Services and ingresses
#[component]
pub fn NetworkView() -> impl IntoView {
    let services = create_rw_signal(sample_services());
    let ingresses = sample_ingresses();

    let pending_delete = create_rw_signal(None::<(ResourceId, String)>);
    let delete_open = Signal::derive(move || pending_delete.get().is_some());
    let delete_message = Signal::derive(move || {
        pending_delete
            .get()
            .map(|(_, name)| format!("Delete service \"{name}\"? Traffic to it will stop."))
            .unwrap_or_default()
    });
    let confirm_delete = move |_| {
        if let Some((id, _)) = pending_delete.get() {
            services.update(|list| list.retain(|s| s.id != id));
        }
        pending_delete.set(None);
    };
    let cancel_delete = move |_| pending_delete.set(None);

    // Add-service form
    let form_name = create_rw_signal(String::new());
    let form_namespace = create_rw_signal("retail".to_string());
    let form_type = create_rw_signal("ClusterIP".to_string());
    let form_ports = create_rw_signal(String::new());
    let form_valid = Signal::derive(move || {
        !form_name.get().trim().is_empty()
            && !form_namespace.get().trim().is_empty()
            && !form_ports.get().trim().is_empty()
    });
    let submit = move |_| {
        if !form_valid.get() {
            return;
        }
        let entry = ServiceEntry {
            id: ResourceId::new(),
            name: form_name.get().trim().to_string(),
            namespace: form_namespace.get().trim().to_string(),
            service_type: parse_service_type(&form_type.get()),
            cluster_ip: "10.96.0.0".to_string(),
            ports: form_ports.get().trim().to_string(),
        };
        services.update(|list| list.push(entry));
        form_name.set(String::new());
        form_ports.set(String::new());
    };

    view! {
        <div class="view active" role="main" aria-label="Network">
            <TableCard
                title="Services"
                badge=view! {
                    <Badge
                        text=Signal::derive(move || format!("{} services", services.with(|s| s.len())))
                        variant=BadgeVariant::Default
                    />
                }.into_view()
            >
                <table role="table" aria-label="Services">
                    <thead>
                        <tr>
                            <th scope="col">"Name"</th>
                            <th scope="col">"Namespace"</th>
                            <th scope="col">"Type"</th>
                            <th scope="col">"Cluster IP"</th>
                            <th scope="col">"Ports"</th>
                            <th scope="col">"Actions"</th>
                        </tr>
                    </thead>
                    <tbody>
                        <For
                            each=move || services.get()
                            key=|service| service.id
                            children=move |service: ServiceEntry| {
                                let id = service.id;
                                let name = service.name.clone();
                                view! {
                                    <tr>
                                        <td><span class="mono">{service.name.clone()}</span></td>
                                        <td>{service.namespace.clone()}</td>
                                        <td>
                                            <Badge
                                                text=service.service_type.label()
                                                variant=type_badge(service.service_type)
                                            />
                                        </td>
                                        <td class="mono">{service.cluster_ip.clone()}</td>
                                        <td class="mono">{service.ports.clone()}</td>
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
                <Show when=move || services.with(|s| s.is_empty())>
                    <EmptyState title="No services" description="Add a service below."/>
                </Show>
            </TableCard>

            <TableCard title="Add Service">
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
                        <span>"Namespace"</span>
                        <input
                            type="text"
                            prop:value=move || form_namespace.get()
                            on:input=move |ev| form_namespace.set(event_target_value(&ev))
                        />
                    </label>
                    <label class="form-field">
                        <span>"Type"</span>
                        <select on:change=move |ev| form_type.set(event_target_value(&ev))>
                            <option value="ClusterIP">"ClusterIP"</option>
                            <option value="NodePort">"NodePort"</option>
                            <option value="LoadBalancer">"LoadBalancer"</option>
                        </select>
                    </label>
                    <label class="form-field">
                        <span>"Ports"</span>
                        <input
                            type="text"
                            placeholder="80:8080/TCP"
                            prop:value=move || form_ports.get()
                            on:input=move |ev| form_ports.set(event_target_value(&ev))
                        />
                    </label>
                </div>
                <button class="btn btn-primary" disabled=move || !form_valid.get() on:click=submit>
                    "Add"
                </button>
            </TableCard>

            <TableCard
                title="Ingress Routes"
                badge=view! {
                    <Badge text=format!("{} routes", ingresses.len()) variant=BadgeVariant::Default/>
                }.into_view()
            >
                <table role="table" aria-label="Ingress routes">
                    <thead>
                        <tr>
                            <th scope="col">"Name"</th>
                            <th scope="col">"Namespace"</th>
                            <th scope="col">"Host"</th>
                            <th scope="col">"Path"</th>
                            <th scope="col">"Service"</th>
                            <th scope="col">"TLS"</th>
                        </tr>
                    </thead>
                    <tbody>
                        {ingresses.into_iter().map(|ingress| view! {
                            <tr>
                                <td><span class="mono">{ingress.name}</span></td>
                                <td>{ingress.namespace}</td>
                                <td class="mono">{ingress.host}</td>
                                <td class="mono">{ingress.path}</td>
                                <td class="mono">{ingress.service}</td>
                                <td>
                                    {if ingress.tls {
                                        view! { <Badge text="TLS" variant=BadgeVariant::Success/> }
                                    } else {
                                        view! { <Badge text="None" variant=BadgeVariant::Default/> }
                                    }}
                                </td>
                            </tr>
                        }).collect_view()}
                    </tbody>
                </table>
            </TableCard>

            <ConfirmDialog
                open=delete_open
                title="Delete service"
                message=delete_message
                on_confirm=confirm_delete
                on_cancel=cancel_delete
            />
        </div>
    }
}

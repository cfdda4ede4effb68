//! Settings view
//!
//! Read-only summary of the injected console configuration.

use std::rc::Rc;

use leptos::*;

use cumulo_assist::Assistant;

use super::primitives::{Badge, BadgeVariant, InfoRow, StatusDot, TableCard};
use crate::config::ConsoleConfig;

/// Console configuration summary
#[component]
pub fn SettingsView() -> impl IntoView {
    let config = expect_context::<ConsoleConfig>();
    let assistant = expect_context::<Rc<Assistant>>();

    let version = config.version.clone().unwrap_or_else(|| "dev".to_string());
    let base_url = config
        .ai_base_url
        .clone()
        .unwrap_or_else(|| "(default)".to_string());
    let model = config
        .ai_model
        .clone()
        .unwrap_or_else(|| "(default)".to_string());
    let has_key = config.ai_api_key.is_some();
    let enabled = assistant.is_enabled();

    view! {
        <div class="view active" role="main" aria-label="Settings">
            <TableCard title="Console">
                <InfoRow label="Version">
                    <span class="mono">{version}</span>
                </InfoRow>
                <InfoRow label="Data source">
                    <Badge text="Demo" variant=BadgeVariant::Info/>
                </InfoRow>
            </TableCard>

            <TableCard title="AI Assistant">
                <InfoRow label="Status">
                    <StatusDot active=enabled/>
                    {if enabled { " Enabled" } else { " Disabled" }}
                </InfoRow>
                <InfoRow label="Credential">
                    {if has_key {
                        view! { <Badge text="Configured" variant=BadgeVariant::Success/> }
                    } else {
                        view! { <Badge text="Not configured" variant=BadgeVariant::Warning/> }
                    }}
                </InfoRow>
                <InfoRow label="Endpoint">
                    <span class="mono">{base_url}</span>
                </InfoRow>
                <InfoRow label="Model">
                    <span class="mono">{model}</span>
                </InfoRow>
                <p class="card-hint">
                    "Configuration is injected at deploy time through "
                    <code>"cumulo:*"</code>
                    " meta tags or a "
                    <code>"window.__CUMULO_CONFIG__"</code>
                    " object. Without a credential the assistant falls back to "
                    "canned responses."
                </p>
            </TableCard>
        </div>
    }
}

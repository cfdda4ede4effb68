//! Sidebar navigation component
//!
//! Main navigation with branding, section links with active-state
//! highlighting, and the console version in the footer.

use leptos::*;
use leptos_router::*;

use super::icons::{
    ClusterIcon, HomeIcon, NetworkIcon, QueueIcon, SettingsIcon, StorageIcon, WorkloadIcon,
};
use crate::config::ConsoleConfig;

/// Sidebar navigation with branding and status footer
#[component]
pub fn Sidebar() -> impl IntoView {
    let config = expect_context::<ConsoleConfig>();
    let version = config.version.unwrap_or_else(|| "dev".to_string());

    view! {
        <aside class="sidebar" role="navigation" aria-label="Main navigation">
            <div class="logo" aria-label="Cumulo Console">
                <div class="logo-icon" aria-hidden="true">"C"</div>
                <span class="logo-text">"Cumulo"</span>
            </div>

            <nav class="nav" aria-label="Primary">
                <div class="nav-section">
                    <div class="nav-section-title" aria-hidden="true">"Overview"</div>
                    <A href="/" class="nav-link" active_class="active" exact=true>
                        <HomeIcon/>
                        <span>"Dashboard"</span>
                    </A>
                </div>

                <div class="nav-section">
                    <div class="nav-section-title" aria-hidden="true">"Platform"</div>
                    <A href="/clusters" class="nav-link" active_class="active">
                        <ClusterIcon/>
                        <span>"Clusters"</span>
                    </A>
                    <A href="/workloads" class="nav-link" active_class="active">
                        <WorkloadIcon/>
                        <span>"Workloads"</span>
                    </A>
                    <A href="/network" class="nav-link" active_class="active">
                        <NetworkIcon/>
                        <span>"Network"</span>
                    </A>
                    <A href="/storage" class="nav-link" active_class="active">
                        <StorageIcon/>
                        <span>"Storage"</span>
                    </A>
                </div>

                <div class="nav-section">
                    <div class="nav-section-title" aria-hidden="true">"Middleware"</div>
                    <A href="/middleware" class="nav-link" active_class="active">
                        <QueueIcon/>
                        <span>"Kafka"</span>
                    </A>
                </div>

                <div class="nav-section">
                    <div class="nav-section-title" aria-hidden="true">"System"</div>
                    <A href="/settings" class="nav-link" active_class="active">
                        <SettingsIcon/>
                        <span>"Settings"</span>
                    </A>
                </div>
            </nav>

            <div class="sidebar-footer" role="status" aria-label="Console status">
                <div class="sidebar-stat">
                    <span class="sidebar-stat-label">"Version"</span>
                    <span class="sidebar-stat-value">{version}</span>
                </div>
                <div class="sidebar-stat">
                    <span class="sidebar-stat-label">"Data"</span>
                    <span class="sidebar-stat-value">"Demo"</span>
                </div>
            </div>
        </aside>
    }
}

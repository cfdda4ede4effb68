//! Header component
//!
//! Top bar showing the current page title (derived from the route) and the
//! availability of the AI assistant.

use std::rc::Rc;

use leptos::*;
use leptos_router::use_location;

use super::primitives::StatusDot;
use cumulo_assist::Assistant;

/// Page header with title and assistant status
#[component]
pub fn Header() -> impl IntoView {
    let assistant = expect_context::<Rc<Assistant>>();
    let location = use_location();
    let ai_enabled = assistant.is_enabled();

    // Derive page title from current path
    let title = move || {
        let path = location.pathname.get();
        match path.as_str() {
            "/" => "Dashboard",
            "/clusters" => "Clusters",
            "/workloads" => "Workloads",
            "/network" => "Network",
            "/storage" => "Storage",
            "/middleware" => "Kafka",
            "/settings" => "Settings",
            _ => "Dashboard",
        }
    };

    view! {
        <header class="header" role="banner">
            <div class="header-left">
                <h1 class="header-title" aria-live="polite">{title}</h1>
            </div>
            <div class="header-right">
                <div class="connection-status" role="status" aria-live="polite">
                    <StatusDot active=ai_enabled/>
                    <span>
                        {if ai_enabled { "AI assistant ready" } else { "AI assistant off" }}
                    </span>
                </div>
            </div>
        </header>
    }
}

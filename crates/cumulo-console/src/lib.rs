//! Cumulo Console - Leptos-based WebAssembly UI
//!
//! A single-page administrative console for the Cumulo container platform:
//! clusters, workloads, network, storage, middleware, and project dashboards.
//! All data is mock/static and generated in memory; there is no backend.
//! The one external collaborator is the AI assistant (see `cumulo-assist`),
//! which turns prompts into manifests, log analyses, and tuning suggestions.
//!
//! ## Configuration
//!
//! The host page injects configuration via meta tags:
//!
//! ```html
//! <meta name="cumulo:version" content="0.1.0">
//! <meta name="cumulo:ai-api-key" content="sk-...">
//! <meta name="cumulo:ai-base-url" content="https://llm.internal/v1">
//! ```
//!
//! or via JavaScript:
//!
//! ```javascript
//! window.__CUMULO_CONFIG__ = { ai_api_key: "sk-..." };
//! ```
//!
//! A missing credential never crashes the console: AI features simply return
//! their fixed fallback strings.
//!
//! ## State model
//!
//! Every view owns its mock collections as local signals; there is no shared
//! store. The lifecycle engine and inspection run from `cumulo-core` are
//! driven by one-shot `gloo_timers` futures (see [`timers`]).

pub mod components;
pub mod config;
pub mod format;
pub mod timers;

use std::rc::Rc;

use leptos::*;
use leptos_router::*;

use components::{
    clusters::ClustersView, header::Header, middleware::MiddlewareView, network::NetworkView,
    overview::OverviewView, settings::SettingsView, sidebar::Sidebar, storage::StorageView,
    workloads::WorkloadsView,
};
use config::ConsoleConfig;

/// Main console application component
#[component]
pub fn App() -> impl IntoView {
    // Panic hook for readable stack traces in the browser console
    console_error_panic_hook::set_once();

    let config = ConsoleConfig::load();
    let assistant = Rc::new(config.assistant());
    provide_context(config);
    provide_context(assistant);

    view! {
        <Router>
            <div class="app">
                <Sidebar/>
                <main class="main">
                    <Header/>
                    <div class="content">
                        <Routes>
                            <Route path="/" view=OverviewView/>
                            <Route path="/clusters" view=ClustersView/>
                            <Route path="/workloads" view=WorkloadsView/>
                            <Route path="/network" view=NetworkView/>
                            <Route path="/storage" view=StorageView/>
                            <Route path="/middleware" view=MiddlewareView/>
                            <Route path="/settings" view=SettingsView/>
                        </Routes>
                    </div>
                </main>
            </div>
        </Router>
    }
}

/// Mount the application to the DOM
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn main() {
    mount_to_body(|| view! { <App/> });
}

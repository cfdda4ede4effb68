//! Reusable UI primitive components
//!
//! Foundational building blocks shared by every view: badges, cards, empty
//! states, the search input, progress bars, and the confirmation dialog used
//! before destructive actions.

use leptos::*;

// ============================================================================
// Badges & Indicators
// ============================================================================

/// Badge variant
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BadgeVariant {
    #[default]
    Default,
    Success,
    Warning,
    Error,
    Info,
}

impl BadgeVariant {
    pub fn class(&self) -> &'static str {
        match self {
            BadgeVariant::Default => "badge",
            BadgeVariant::Success => "badge badge-success",
            BadgeVariant::Warning => "badge badge-warning",
            BadgeVariant::Error => "badge badge-error",
            BadgeVariant::Info => "badge badge-info",
        }
    }
}

/// Badge component with text
#[component]
pub fn Badge<T: IntoView + 'static>(
    text: T,
    #[prop(optional)] variant: BadgeVariant,
    #[prop(optional, default = false)] with_dot: bool,
) -> impl IntoView {
    view! {
        <span class=variant.class()>
            {with_dot.then(|| view! { <span class="badge-dot"></span> })}
            {text}
        </span>
    }
}

/// Status indicator dot
#[component]
pub fn StatusDot(#[prop(into)] active: MaybeSignal<bool>) -> impl IntoView {
    view! {
        <span
            class="status-dot"
            class:connected=move || active.get()
            class:disconnected=move || !active.get()
            role="status"
            aria-label=move || if active.get() { "Available" } else { "Unavailable" }
        />
    }
}

// ============================================================================
// Cards & Containers
// ============================================================================

/// Stat card for overview metrics
#[component]
pub fn StatCard(
    label: &'static str,
    #[prop(into)] value: Signal<String>,
    #[prop(optional)] icon: Option<View>,
) -> impl IntoView {
    view! {
        <div class="stat-card">
            <div class="stat-header">
                {icon.map(|i| view! { <div class="stat-icon">{i}</div> })}
                <span class="stat-label">{label}</span>
            </div>
            <div class="stat-value" aria-label=format!("{}: ", label)>
                {move || value.get()}
            </div>
        </div>
    }
}

/// Table card container
#[component]
pub fn TableCard(
    title: &'static str,
    children: Children,
    #[prop(optional)] action: Option<View>,
    #[prop(optional)] badge: Option<View>,
) -> impl IntoView {
    view! {
        <div class="table-card">
            <div class="table-header">
                <div class="table-title-group">
                    <div class="table-title">{title}</div>
                    {badge}
                </div>
                {action}
            </div>
            {children()}
        </div>
    }
}

/// Key-value info row with children for the value
#[component]
pub fn InfoRow(label: &'static str, children: Children) -> impl IntoView {
    view! {
        <div class="info-row">
            <span class="info-label">{label}</span>
            <span class="info-value">{children()}</span>
        </div>
    }
}

// ============================================================================
// Empty & Loading States
// ============================================================================

/// Generic empty state component
#[component]
pub fn EmptyState(
    title: &'static str,
    #[prop(optional)] description: Option<&'static str>,
) -> impl IntoView {
    view! {
        <div class="empty-state" role="status">
            <div class="empty-text">{title}</div>
            {description.map(|desc| view! { <p class="empty-description">{desc}</p> })}
        </div>
    }
}

/// Inline loading indicator shown while an AI call is awaited
#[component]
pub fn LoadingHint(message: &'static str) -> impl IntoView {
    view! {
        <div class="loading-hint" role="status" aria-live="polite">
            <span class="loading-dots" aria-hidden="true"></span>
            <span>{message}</span>
        </div>
    }
}

// ============================================================================
// Progress
// ============================================================================

/// Progress bar with a phase label underneath
#[component]
pub fn ProgressBar(
    #[prop(into)] percent: Signal<u8>,
    #[prop(into)] label: Signal<String>,
) -> impl IntoView {
    view! {
        <div class="progress" role="progressbar"
            aria-valuemin=0 aria-valuemax=100
            aria-valuenow=move || percent.get()
        >
            <div class="progress-track" aria-hidden="true">
                <div class="progress-fill" style=move || format!("width: {}%", percent.get())></div>
            </div>
            <div class="progress-label" aria-live="polite">
                {move || format!("{}% — {}", percent.get(), label.get())}
            </div>
        </div>
    }
}

// ============================================================================
// Search
// ============================================================================

/// Search input
#[component]
pub fn SearchInput(
    #[prop(into)] value: RwSignal<String>,
    #[prop(optional, default = "Search...")] placeholder: &'static str,
) -> impl IntoView {
    view! {
        <div class="search-bar">
            <input
                type="search"
                placeholder=placeholder
                class="search-input"
                prop:value=move || value.get()
                on:input=move |ev| value.set(event_target_value(&ev))
                aria-label=placeholder
            />
        </div>
    }
}

// ============================================================================
// Confirmation
// ============================================================================

/// Blocking confirmation dialog for destructive actions.
///
/// Modeled as an explicit open flag plus pending-action payload held by the
/// caller; the dialog only renders and reports the choice.
#[component]
pub fn ConfirmDialog(
    #[prop(into)] open: Signal<bool>,
    title: &'static str,
    #[prop(into)] message: Signal<String>,
    #[prop(into)] on_confirm: Callback<()>,
    #[prop(into)] on_cancel: Callback<()>,
) -> impl IntoView {
    view! {
        <Show when=move || open.get()>
            <div class="modal-backdrop" role="presentation">
                <div class="modal" role="alertdialog" aria-modal="true" aria-label=title>
                    <div class="modal-title">{title}</div>
                    <p class="modal-message">{move || message.get()}</p>
                    <div class="modal-actions">
                        <button class="btn btn-secondary" on:click=move |_| on_cancel.call(())>
                            "Cancel"
                        </button>
                        <button class="btn btn-danger" on:click=move |_| on_confirm.call(())>
                            "Confirm"
                        </button>
                    </div>
                </div>
            </div>
        </Show>
    }
}

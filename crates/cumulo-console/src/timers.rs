//! Timer plumbing between the browser event loop and the core engines
//!
//! Delayed lifecycle completions and inspection ticks run as one-shot
//! `gloo_timers` futures. Updates go through `try_update`, so a timer that
//! outlives its view (the signal is disposed on unmount) is a silent no-op;
//! a timer superseded by a newer action is rejected by its stale token.

use gloo_timers::future::TimeoutFuture;
use leptos::{RwSignal, SignalUpdate};
use wasm_bindgen_futures::spawn_local;

use cumulo_core::{LifecycleEngine, Managed, ScheduledCompletion, INSPECTION_TICK_MS};

/// Current wall-clock time in milliseconds
pub fn now_ms() -> u64 {
    js_sys::Date::now() as u64
}

/// Schedule the delayed completion returned by `LifecycleEngine::submit`
pub fn drive_completion<R>(engine: RwSignal<LifecycleEngine<R>>, scheduled: ScheduledCompletion)
where
    R: Managed + 'static,
{
    spawn_local(async move {
        TimeoutFuture::new(scheduled.delay_ms as u32).await;
        let _ = engine.try_update(|e| e.complete(scheduled.id, scheduled.token));
    });
}

/// Drive a started inspection run: one tick per fixed interval until the
/// final phase installs the report (or the owning view unmounts)
pub fn drive_inspection(run: RwSignal<cumulo_core::InspectionRun>) {
    spawn_local(async move {
        loop {
            TimeoutFuture::new(INSPECTION_TICK_MS as u32).await;
            let still_running = run.try_update(|r| {
                r.tick(now_ms());
                r.is_running()
            });
            match still_running {
                Some(true) => continue,
                // Finished, or the signal was disposed with the view.
                _ => break,
            }
        }
    });
}

//! Notification host and the `notify` entry point views use to raise toasts.

use catalog::{Notice, NoticeLevel};
use leptos::prelude::*;

use crate::state::toasts::ToastState;

/// Queue `notice` and schedule its dismissal after `ttl_ms`.
pub fn notify(toasts: RwSignal<ToastState>, notice: Notice, ttl_ms: u32) {
    let Some(id) = toasts.try_update(|t| t.push(notice, ttl_ms)) else {
        return;
    };

    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        gloo_timers::future::sleep(std::time::Duration::from_millis(u64::from(ttl_ms))).await;
        toasts.try_update(|t| t.dismiss(id));
    });
    #[cfg(not(feature = "hydrate"))]
    let _ = id;
}

fn toast_class(level: NoticeLevel) -> &'static str {
    match level {
        NoticeLevel::Success => "toast toast--success",
        NoticeLevel::Error => "toast toast--error",
    }
}

/// Fixed-position stack of active toasts.
#[component]
pub fn ToastHost() -> impl IntoView {
    let toasts = expect_context::<RwSignal<ToastState>>();

    view! {
        <div class="toast-host" aria-live="polite">
            <For
                each=move || toasts.get().items().to_vec()
                key=|toast| toast.id
                children=move |toast| {
                    let id = toast.id;
                    let role = if toast.notice.is_error() { "alert" } else { "status" };
                    view! {
                        <div class=toast_class(toast.notice.level) role=role>
                            <span class="toast__message">{toast.notice.message}</span>
                            <button
                                class="toast__close"
                                title="Dismiss"
                                on:click=move |_| {
                                    toasts.update(|t| {
                                        t.dismiss(id);
                                    });
                                }
                            >
                                "×"
                            </button>
                        </div>
                    }
                }
            />
        </div>
    }
}

//! Signup page. A successful registration only notifies; the user then
//! logs in from the entry route.

#[cfg(test)]
#[path = "signup_test.rs"]
mod signup_test;

use catalog::auth::{SIGNUP_FAILED, SIGNUP_SUCCEEDED};
use catalog::{ApiError, AuthResponse, Notice, Route};
use leptos::prelude::*;
use leptos_router::components::A;

use crate::state::toasts::ToastState;

/// Notice for a registration attempt.
pub fn signup_outcome(result: Result<AuthResponse, ApiError>) -> Notice {
    match result.and_then(AuthResponse::into_message) {
        Ok(_) => Notice::success(SIGNUP_SUCCEEDED),
        Err(err) => Notice::error(err.message_or(SIGNUP_FAILED)),
    }
}

#[component]
pub fn SignUpPage() -> impl IntoView {
    let toasts = expect_context::<RwSignal<ToastState>>();
    let name = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let busy = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get_untracked() {
            return;
        }
        let req = catalog::RegisterRequest {
            name: name.get_untracked().trim().to_owned(),
            email: email.get_untracked().trim().to_owned(),
            password: password.get_untracked(),
        };
        busy.set(true);

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            let notice = signup_outcome(crate::net::api::register(&req).await);
            name.set(String::new());
            email.set(String::new());
            password.set(String::new());
            busy.set(false);
            crate::components::toast_host::notify(toasts, notice, crate::state::toasts::AUTH_TOAST_MS);
        });
        #[cfg(not(feature = "hydrate"))]
        let _ = (req, toasts);
    };

    view! {
        <section class="form-card">
            <h2>"Signup"</h2>
            <form on:submit=on_submit>
                <SignUpField label="Name" kind="text" value=name/>
                <SignUpField label="Email" kind="email" value=email/>
                <SignUpField label="Password" kind="password" value=password/>
                <button class="btn btn--primary btn--block" type="submit" disabled=move || busy.get()>
                    "Signup"
                </button>
            </form>
            <p class="form-card__footer">
                "Already registered? "
                <A href=Route::Login.path()>"Sign in"</A>
            </p>
        </section>
    }
}

#[component]
fn SignUpField(label: &'static str, kind: &'static str, value: RwSignal<String>) -> impl IntoView {
    view! {
        <label class="form-card__label">
            {label}
            <input
                class="form-card__input"
                type=kind
                required
                prop:value=move || value.get()
                on:input=move |ev| value.set(event_target_value(&ev))
            />
        </label>
    }
}

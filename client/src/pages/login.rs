//! Login page: the unauthenticated entry route.
//!
//! On success the issued token is persisted, the session signal is updated,
//! and the user lands on the catalog. Fields are cleared after every
//! attempt.

#[cfg(test)]
#[path = "login_test.rs"]
mod login_test;

use catalog::auth::LOGIN_FAILED;
use catalog::{ApiError, AuthResponse, Notice, Route, TokenStore};
use leptos::prelude::*;
use leptos_router::components::A;

use crate::state::session::SessionState;
use crate::state::toasts::ToastState;

/// Fold a login response into the token to store plus the notice to show,
/// or the error notice.
pub fn login_outcome(result: Result<AuthResponse, ApiError>) -> Result<(String, Notice), Notice> {
    let resp = result.map_err(|err| Notice::error(err.message_or(LOGIN_FAILED)))?;
    let message = resp.message.clone().unwrap_or_else(|| "Login successful".to_owned());
    let token = resp
        .into_token()
        .map_err(|err| Notice::error(err.message_or(LOGIN_FAILED)))?;
    Ok((token, Notice::success(message)))
}

/// Fallback when the browser refuses to keep the token.
pub const SESSION_NOT_SAVED: &str = "Could not save your session. Check that site storage is allowed.";

/// Persist a fresh token. A session that cannot be stored is not started.
pub fn persist_token<S: TokenStore>(store: &S, token: &str) -> Result<(), Notice> {
    store.store(token).map_err(|err| {
        #[cfg(feature = "hydrate")]
        log::warn!("failed to persist token: {err}");
        #[cfg(not(feature = "hydrate"))]
        let _ = err;
        Notice::error(SESSION_NOT_SAVED)
    })
}

#[component]
pub fn LoginPage() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let toasts = expect_context::<RwSignal<ToastState>>();
    let navigate = leptos_router::hooks::use_navigate();
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let busy = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get_untracked() {
            return;
        }
        let req = catalog::LoginRequest {
            email: email.get_untracked().trim().to_owned(),
            password: password.get_untracked(),
        };
        busy.set(true);

        #[cfg(feature = "hydrate")]
        {
            use crate::components::toast_host::notify;
            use crate::state::toasts::AUTH_TOAST_MS;
            use crate::util::storage::BrowserTokenStore;

            let navigate = navigate.clone();
            leptos::task::spawn_local(async move {
                let outcome = login_outcome(crate::net::api::login(&req).await).and_then(|(token, notice)| {
                    persist_token(&BrowserTokenStore, &token)?;
                    Ok((token, notice))
                });
                email.set(String::new());
                password.set(String::new());
                busy.set(false);
                match outcome {
                    Ok((token, notice)) => {
                        session.update(|s| s.sign_in(token));
                        notify(toasts, notice, AUTH_TOAST_MS);
                        navigate(Route::Home.path(), leptos_router::NavigateOptions::default());
                    }
                    Err(notice) => notify(toasts, notice, AUTH_TOAST_MS),
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        let _ = (req, session, toasts, &navigate);
    };

    view! {
        <section class="form-card">
            <h2>"Login"</h2>
            <form on:submit=on_submit>
                <label class="form-card__label">
                    "Email"
                    <input
                        class="form-card__input"
                        type="email"
                        name="email"
                        required
                        prop:value=move || email.get()
                        on:input=move |ev| email.set(event_target_value(&ev))
                    />
                </label>
                <label class="form-card__label">
                    "Password"
                    <input
                        class="form-card__input"
                        type="password"
                        name="password"
                        required
                        prop:value=move || password.get()
                        on:input=move |ev| password.set(event_target_value(&ev))
                    />
                </label>
                <button class="btn btn--primary btn--block" type="submit" disabled=move || busy.get()>
                    "Login"
                </button>
            </form>
            <p class="form-card__footer">
                "New user? "
                <A href=Route::SignUp.path()>"Sign Up"</A>
            </p>
        </section>
    }
}

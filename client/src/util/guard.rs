//! Route guard for views that need a stored token.
//!
//! SYSTEM CONTEXT
//! ==============
//! Every protected route renders through [`RequireToken`], so the redirect
//! rule lives in exactly one place. Presence of a token is all it checks;
//! the backend still rejects requests it does not accept.

#[cfg(test)]
#[path = "guard_test.rs"]
mod guard_test;

use catalog::Route;
use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::{use_location, use_navigate};

use crate::state::session::SessionState;

/// Route the guard evaluates for `pathname`. Unknown paths are treated as
/// protected.
pub fn guarded_route(pathname: &str) -> Route {
    Route::from_path(pathname).unwrap_or(Route::Home)
}

/// Placeholder text while the guard has not let the view through.
pub fn pending_label(state: &SessionState) -> &'static str {
    if state.loaded { "Redirecting to login..." } else { "Loading..." }
}

/// Render `children` only while a token is present; otherwise navigate to
/// the unauthenticated entry route.
#[component]
pub fn RequireToken(children: ChildrenFn) -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let location = use_location();
    let navigate = use_navigate();

    Effect::new(move || {
        let route = guarded_route(&location.pathname.get());
        if let Some(target) = session.get().redirect_for(route) {
            navigate(
                target.path(),
                NavigateOptions { replace: true, ..NavigateOptions::default() },
            );
        }
    });

    view! {
        <Show
            when=move || session.get().is_authenticated()
            fallback=move || view! { <h2 class="status-line">{move || pending_label(&session.get())}</h2> }
        >
            {children()}
        </Show>
    }
}

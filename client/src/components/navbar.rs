//! Navigation shell: static links plus logout.
//!
//! SYSTEM CONTEXT
//! ==============
//! Rendered above every route. Logout clears the stored token, drops the
//! session signal, and returns to the login route. Token changes made in
//! other tabs arrive through the window `storage` event.

use catalog::Route;
use catalog::routes::NAV_LINKS;
use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::components::A;
use leptos_router::hooks::use_navigate;

use crate::state::session::SessionState;
use crate::util::storage::BrowserTokenStore;

#[component]
pub fn Navbar() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let navigate = use_navigate();
    let menu_open = RwSignal::new(false);

    #[cfg(feature = "hydrate")]
    {
        let handle = window_event_listener(leptos::ev::storage, move |_| {
            session.set(SessionState::restore());
        });
        on_cleanup(move || handle.remove());
    }

    let on_logout = move |ev: leptos::ev::MouseEvent| {
        ev.prevent_default();
        let target = match catalog::session::logout(&BrowserTokenStore) {
            Ok(route) => route,
            Err(err) => {
                #[cfg(feature = "hydrate")]
                log::warn!("failed to clear stored token: {err}");
                #[cfg(not(feature = "hydrate"))]
                let _ = err;
                Route::Login
            }
        };
        session.update(SessionState::sign_out);
        menu_open.set(false);
        navigate(target.path(), NavigateOptions::default());
    };

    view! {
        <nav class="navbar">
            <div class="navbar__inner">
                <span class="navbar__brand">"Bookshelf"</span>
                <button class="navbar__toggle" on:click=move |_| menu_open.update(|open| *open = !*open)>
                    {move || if menu_open.get() { "Close" } else { "Menu" }}
                </button>
                <ul class="navbar__links" class:navbar__links--open=move || menu_open.get()>
                    {NAV_LINKS
                        .iter()
                        .map(|(route, label)| {
                            view! {
                                <li on:click=move |_| menu_open.set(false)>
                                    <A href=route.path()>{*label}</A>
                                </li>
                            }
                        })
                        .collect_view()}
                    <li>
                        <a href=Route::Login.path() class="navbar__logout" on:click=on_logout>
                            "Logout"
                        </a>
                    </li>
                </ul>
            </div>
        </nav>
    }
}

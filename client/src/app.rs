//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::components::navbar::Navbar;
use crate::components::toast_host::ToastHost;
use crate::pages::{
    add_book::AddBookPage, borrowed_books::BorrowedBooksPage, home::HomePage, login::LoginPage,
    my_books::MyBooksPage, signup::SignUpPage,
};
use crate::state::{session::SessionState, toasts::ToastState};
use crate::util::guard::RequireToken;

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Provides the session and notification contexts, restores the stored
/// token once running in the browser, and wraps every protected route in
/// [`RequireToken`].
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let session = RwSignal::new(SessionState::default());
    let toasts = RwSignal::new(ToastState::default());

    provide_context(session);
    provide_context(toasts);

    // Effects only run after hydration, so the server always renders the
    // "not yet restored" session.
    Effect::new(move || {
        if !session.get_untracked().loaded {
            session.set(SessionState::restore());
        }
    });

    view! {
        <Stylesheet id="leptos" href="/pkg/bookshelf.css"/>
        <Title text="Bookshelf"/>

        <Router>
            <Navbar/>
            <main class="page">
                <Routes fallback=|| "Page not found.".into_view()>
                    <Route path=StaticSegment("") view=LoginPage/>
                    <Route path=StaticSegment("signUp") view=SignUpPage/>
                    <Route
                        path=StaticSegment("home")
                        view=|| view! { <RequireToken><HomePage/></RequireToken> }
                    />
                    <Route
                        path=StaticSegment("myBooks")
                        view=|| view! { <RequireToken><MyBooksPage/></RequireToken> }
                    />
                    <Route
                        path=StaticSegment("borrowedBooks")
                        view=|| view! { <RequireToken><BorrowedBooksPage/></RequireToken> }
                    />
                    <Route
                        path=StaticSegment("add")
                        view=|| view! { <RequireToken><AddBookPage/></RequireToken> }
                    />
                </Routes>
            </main>
        </Router>
        <ToastHost/>
    }
}

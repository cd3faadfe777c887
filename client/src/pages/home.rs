//! Catalog page: every book, with a borrow action.
//!
//! A successful borrow refetches the whole catalog so the card picks up the
//! backend's new availability.

use catalog::endpoints::BookScope;
use catalog::{Book, ListState, Phase};
use leptos::prelude::*;

use crate::components::book_card::BookCard;
use crate::pages::shelf::{FetchReport, Shelf};
use crate::util::clock;

#[component]
pub fn HomePage() -> impl IntoView {
    let shelf = Shelf::new(BookScope::All, FetchReport::Log);
    let local = clock::local_day();

    Effect::new(move || shelf.fetch());

    let on_borrow = Callback::new(move |id: String| {
        #[cfg(feature = "hydrate")]
        shelf.mutate(catalog::Action::Borrow, id, |token, id| async move {
            crate::net::api::borrow_book(&token, &id).await
        });
        #[cfg(not(feature = "hydrate"))]
        let _ = id;
    });

    view! {
        <Show
            when=move || shelf.books.with(|s| s.phase() != Phase::Loading)
            fallback=|| view! { <h2 class="status-line">"Loading..."</h2> }
        >
            <section class="book-grid" aria-busy=move || shelf.books.with(ListState::is_loading).to_string()>
                <For
                    each=move || shelf.books.with(|s| s.items().to_vec())
                    key=Book::clone
                    children=move |book: Book| {
                        let new_today = local.is_some_and(|d| book.is_new_on(d.today, d.offset));
                        view! {
                            <BookCard book=book.clone() new_today=new_today>
                                <CatalogActions book=book on_borrow=on_borrow/>
                            </BookCard>
                        }
                    }
                />
            </section>
        </Show>
    }
}

#[component]
fn CatalogActions(book: Book, on_borrow: Callback<String>) -> impl IntoView {
    let available = book.availability;
    let status_class = if available { "tag tag--available" } else { "tag tag--borrowed" };
    let id = book.id.clone();

    view! {
        <span class=status_class>{book.availability_label()}</span>
        <button
            class="btn btn--primary book-card__action"
            disabled=!available
            on:click=move |_| on_borrow.run(id.clone())
        >
            {book.borrow_action_label()}
        </button>
    }
}

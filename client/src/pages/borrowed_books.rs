//! Books the current user has borrowed, each with a return action.
//!
//! A successful return drops the card locally without refetching.

use catalog::endpoints::BookScope;
use catalog::{Book, ListState};
use leptos::prelude::*;

use crate::components::book_card::BookCard;
use crate::pages::shelf::{FetchReport, ListPhase, Shelf, empty_message};

#[component]
pub fn BorrowedBooksPage() -> impl IntoView {
    let shelf = Shelf::new(BookScope::Borrowed, FetchReport::Log);

    Effect::new(move || shelf.fetch());

    let on_return = Callback::new(move |id: String| {
        #[cfg(feature = "hydrate")]
        shelf.mutate(catalog::Action::Return, id, |token, id| async move {
            crate::net::api::return_book(&token, &id).await
        });
        #[cfg(not(feature = "hydrate"))]
        let _ = id;
    });

    view! {
        {move || match shelf.books.with(ListPhase::of) {
            ListPhase::Loading => view! { <h2 class="status-line">"Loading..."</h2> }.into_any(),
            ListPhase::Empty => {
                view! {
                    <h2 class="status-line status-line--empty">
                        {empty_message(BookScope::Borrowed)}
                    </h2>
                }
                    .into_any()
            }
            ListPhase::Ready => {
                view! {
                    <section>
                        <h2 class="section-title">"MY BORROWED BOOKS"</h2>
                        <div class="book-grid" aria-busy=move || shelf.books.with(ListState::is_loading).to_string()>
                            <For
                                each=move || shelf.books.with(|s| s.items().to_vec())
                                key=Book::clone
                                children=move |book: Book| {
                                    let id = book.id.clone();
                                    view! {
                                        <BookCard book=book>
                                            <button
                                                class="btn btn--primary book-card__action"
                                                on:click=move |_| on_return.run(id.clone())
                                            >
                                                "Return"
                                            </button>
                                        </BookCard>
                                    }
                                }
                            />
                        </div>
                    </section>
                }
                    .into_any()
            }
        }}
    }
}

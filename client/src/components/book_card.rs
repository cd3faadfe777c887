//! Card rendering of a single book, shared by all list views.
//!
//! DESIGN
//! ======
//! The card shows what every view has in common (cover, title, author,
//! genre, "New Book" tag); each view passes its own status tags and action
//! buttons as children.

use catalog::Book;
use leptos::prelude::*;

#[component]
pub fn BookCard(
    book: Book,
    /// Whether the book was created today.
    #[prop(optional)]
    new_today: bool,
    children: Children,
) -> impl IntoView {
    let alt = book.title.clone();

    view! {
        <article class="book-card">
            <img class="book-card__image" src=book.image_url alt=alt/>
            <div class="book-card__overlay">
                <h3 class="book-card__title">{book.title}</h3>
                <p class="book-card__author">"Author: " {book.author}</p>
                <div class="book-card__tags">
                    <span class="tag tag--genre">{book.genre}</span>
                    <Show when=move || new_today>
                        <span class="tag tag--new">"New Book"</span>
                    </Show>
                </div>
                {children()}
            </div>
        </article>
    }
}

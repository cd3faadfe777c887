//! The current user's own uploads, with update and delete actions.
//!
//! SYSTEM CONTEXT
//! ==============
//! Delete drops the card locally; update swaps in the book the backend
//! returns. Both only touch local state after the backend confirmed the
//! write. The edit dialog closes as soon as the update is submitted.

use catalog::endpoints::BookScope;
use catalog::{Book, BookDraft, ListState};
use leptos::prelude::*;

use crate::components::book_card::BookCard;
use crate::pages::shelf::{FetchReport, ListPhase, Shelf, empty_message};

#[component]
pub fn MyBooksPage() -> impl IntoView {
    let shelf = Shelf::new(BookScope::Mine, FetchReport::Toast);
    let editing = RwSignal::new(None::<Book>);

    Effect::new(move || shelf.fetch());

    let on_delete = Callback::new(move |id: String| {
        #[cfg(feature = "hydrate")]
        shelf.mutate(catalog::Action::Delete, id, |token, id| async move {
            crate::net::api::delete_book(&token, &id).await
        });
        #[cfg(not(feature = "hydrate"))]
        let _ = id;
    });
    let on_edit = Callback::new(move |book: Book| editing.set(Some(book)));
    let on_close = Callback::new(move |()| editing.set(None));

    view! {
        <section>
            {move || match shelf.books.with(ListPhase::of) {
                ListPhase::Loading => view! { <h2 class="status-line">"Loading..."</h2> }.into_any(),
                ListPhase::Empty => {
                    view! {
                        <h2 class="status-line status-line--empty">
                            {empty_message(BookScope::Mine)}
                        </h2>
                    }
                        .into_any()
                }
                ListPhase::Ready => {
                    view! {
                        <h2 class="section-title">"MY BOOKS"</h2>
                        <div class="book-grid" aria-busy=move || shelf.books.with(ListState::is_loading).to_string()>
                            <For
                                each=move || shelf.books.with(|s| s.items().to_vec())
                                key=Book::clone
                                children=move |book: Book| {
                                    view! {
                                        <BookCard book=book.clone()>
                                            <OwnerActions book=book on_edit=on_edit on_delete=on_delete/>
                                        </BookCard>
                                    }
                                }
                            />
                        </div>
                    }
                        .into_any()
                }
            }}
            {move || {
                editing
                    .get()
                    .map(|book| view! { <EditBookDialog book=book shelf=shelf on_close=on_close/> })
            }}
        </section>
    }
}

#[component]
fn OwnerActions(book: Book, on_edit: Callback<Book>, on_delete: Callback<String>) -> impl IntoView {
    let id = book.id.clone();
    let borrower = book.borrower_label();

    view! {
        <span class="tag tag--borrower">{borrower}</span>
        <div class="book-card__buttons">
            <button class="btn btn--primary" on:click=move |_| on_edit.run(book.clone())>
                "Update"
            </button>
            <button class="btn btn--danger" on:click=move |_| on_delete.run(id.clone())>
                "Delete"
            </button>
        </div>
    }
}

/// Modal editing title/author/genre with an optional replacement cover.
#[component]
fn EditBookDialog(book: Book, shelf: Shelf, on_close: Callback<()>) -> impl IntoView {
    let draft = BookDraft::from(&book);
    let title = RwSignal::new(draft.title);
    let author = RwSignal::new(draft.author);
    let genre = RwSignal::new(draft.genre);
    let image_ref = NodeRef::<leptos::html::Input>::new();
    let book_id = book.id;

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let draft = BookDraft {
            title: title.get_untracked(),
            author: author.get_untracked(),
            genre: genre.get_untracked(),
        };
        if !draft.is_complete() {
            return;
        }

        #[cfg(feature = "hydrate")]
        {
            let image = image_ref
                .get_untracked()
                .and_then(|input| input.files())
                .and_then(|files| files.get(0));
            let patch = catalog::BookPatch::from(draft);
            shelf.mutate(catalog::Action::Update, book_id.clone(), move |token, id| async move {
                crate::net::api::update_book(&token, &id, &patch, image.as_ref()).await
            });
        }
        #[cfg(not(feature = "hydrate"))]
        let _ = (draft, &book_id, shelf, image_ref);

        on_close.run(());
    };

    view! {
        <div class="dialog-backdrop" on:click=move |_| on_close.run(())>
            <div class="dialog" on:click=move |ev| ev.stop_propagation()>
                <h2>"Update Book"</h2>
                <form on:submit=on_submit>
                    <DialogField label="Title" value=title/>
                    <DialogField label="Author" value=author/>
                    <DialogField label="Genre" value=genre/>
                    <label class="dialog__label">
                        "Book Image"
                        <input class="dialog__input" type="file" accept="image/*" node_ref=image_ref/>
                    </label>
                    <div class="dialog__actions">
                        <button class="btn" type="button" on:click=move |_| on_close.run(())>
                            "Cancel"
                        </button>
                        <button class="btn btn--primary" type="submit">
                            "Save"
                        </button>
                    </div>
                </form>
            </div>
        </div>
    }
}

#[component]
fn DialogField(label: &'static str, value: RwSignal<String>) -> impl IntoView {
    view! {
        <label class="dialog__label">
            {label}
            <input
                class="dialog__input"
                type="text"
                required
                prop:value=move || value.get()
                on:input=move |ev| value.set(event_target_value(&ev))
            />
        </label>
    }
}

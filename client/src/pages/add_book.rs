//! Add-book form: multipart upload of a new book with its cover image.

#[cfg(test)]
#[path = "add_book_test.rs"]
mod add_book_test;

use catalog::{BookDraft, Notice};
use leptos::prelude::*;

#[cfg(feature = "hydrate")]
use crate::components::toast_host::notify;
use crate::state::session::SessionState;
use crate::state::toasts::ToastState;
#[cfg(feature = "hydrate")]
use crate::state::toasts::VIEW_TOAST_MS;

/// Label of the submit button.
pub fn submit_label(busy: bool) -> &'static str {
    if busy { "Adding..." } else { "Add Book" }
}

/// Client-side check before upload; the browser's `required` attribute
/// normally catches these first.
pub fn validate(draft: &BookDraft, has_image: bool) -> Result<(), Notice> {
    let missing = draft.missing_fields();
    if !missing.is_empty() {
        return Err(Notice::error(format!("Missing: {}", missing.join(", "))));
    }
    if !has_image {
        return Err(Notice::error("Choose a book image"));
    }
    Ok(())
}

#[component]
pub fn AddBookPage() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let toasts = expect_context::<RwSignal<ToastState>>();
    let title = RwSignal::new(String::new());
    let author = RwSignal::new(String::new());
    let genre = RwSignal::new(String::new());
    let busy = RwSignal::new(false);
    let image_ref = NodeRef::<leptos::html::Input>::new();

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get_untracked() {
            return;
        }
        let draft = BookDraft {
            title: title.get_untracked(),
            author: author.get_untracked(),
            genre: genre.get_untracked(),
        };

        #[cfg(feature = "hydrate")]
        {
            let image = image_ref
                .get_untracked()
                .and_then(|input| input.files())
                .and_then(|files| files.get(0));
            if let Err(notice) = validate(&draft, image.is_some()) {
                notify(toasts, notice, VIEW_TOAST_MS);
                return;
            }
            let Some(image) = image else {
                return;
            };
            busy.set(true);
            leptos::task::spawn_local(async move {
                let action = catalog::Action::Create;
                let result = match session.get_untracked().require_token() {
                    Ok(token) => crate::net::api::create_book(&token, &draft, &image).await,
                    Err(err) => Err(err),
                };
                let result = result.map(|resp| resp.message_or(action.success_fallback()));
                notify(toasts, Notice::from_result(&result, action.failure_fallback()), VIEW_TOAST_MS);
                busy.set(false);
            });
        }
        #[cfg(not(feature = "hydrate"))]
        let _ = (draft, session, toasts, image_ref);
    };

    view! {
        <section class="form-card">
            <h2>"Add New Book"</h2>
            <form on:submit=on_submit>
                <FormField label="Title" value=title/>
                <FormField label="Author" value=author/>
                <FormField label="Genre" value=genre/>
                <label class="form-card__label">
                    "Book Image"
                    <input class="form-card__input" type="file" accept="image/*" required node_ref=image_ref/>
                </label>
                <button class="btn btn--primary btn--block" type="submit" disabled=move || busy.get()>
                    {move || submit_label(busy.get())}
                </button>
            </form>
        </section>
    }
}

#[component]
fn FormField(label: &'static str, value: RwSignal<String>) -> impl IntoView {
    view! {
        <label class="form-card__label">
            {label}
            <input
                class="form-card__input"
                type="text"
                required
                prop:value=move || value.get()
                on:input=move |ev| value.set(event_target_value(&ev))
            />
        </label>
    }
}

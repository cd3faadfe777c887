use super::*;

fn full_draft() -> BookDraft {
    BookDraft {
        title: "Dune".to_owned(),
        author: "Frank Herbert".to_owned(),
        genre: "Sci-Fi".to_owned(),
    }
}

#[test]
fn complete_form_with_image_is_valid() {
    assert_eq!(validate(&full_draft(), true), Ok(()));
}

#[test]
fn missing_image_is_rejected() {
    assert_eq!(validate(&full_draft(), false), Err(Notice::error("Choose a book image")));
}

#[test]
fn blank_fields_are_listed() {
    let draft = BookDraft { genre: " ".to_owned(), ..full_draft() };
    assert_eq!(validate(&draft, true), Err(Notice::error("Missing: genre")));
}

#[test]
fn submit_label_reflects_busy_flag() {
    assert_eq!(submit_label(false), "Add Book");
    assert_eq!(submit_label(true), "Adding...");
}

use super::*;
use crate::notice::NoticeLevel;

// =============================================================
// Helpers
// =============================================================

fn book(id: &str, title: &str, available: bool) -> Book {
    Book {
        id: id.to_owned(),
        title: title.to_owned(),
        author: "Author".to_owned(),
        genre: "Genre".to_owned(),
        image_url: String::new(),
        availability: available,
        created_at: None,
        borrowed_by: None,
    }
}

fn holds(state: &ListState<Book>, id: &str) -> bool {
    state.items().iter().any(|b| b.id == id)
}

fn ready(books: Vec<Book>) -> ListState<Book> {
    let mut state = ListState::new();
    assert_eq!(state.finish_fetch(Ok(books)), None);
    state
}

fn confirmed(message: &str) -> Result<MutationResponse, ApiError> {
    Ok(MutationResponse { message: Some(message.to_owned()), data: None })
}

// =============================================================
// Fetch lifecycle
// =============================================================

#[test]
fn starts_loading() {
    let state = ListState::<Book>::new();
    assert_eq!(state.phase(), Phase::Loading);
    assert!(state.is_loading());
}

#[test]
fn non_empty_fetch_is_ready() {
    let state = ready(vec![book("1", "A", true)]);
    assert_eq!(state.phase(), Phase::Ready);
    assert_eq!(state.items().len(), 1);
}

#[test]
fn empty_fetch_is_empty() {
    let state = ready(Vec::new());
    assert_eq!(state.phase(), Phase::Empty);
}

#[test]
fn failed_fetch_notifies_and_stays_empty() {
    let mut state = ListState::<Book>::new();
    let notice = state.finish_fetch(Err(ApiError::Transport("offline".to_owned())));
    assert_eq!(notice, Some(Notice::error(FETCH_FAILED)));
    assert_eq!(state.phase(), Phase::Failed);
    assert!(state.is_empty());
}

#[test]
fn failed_refetch_keeps_previous_items() {
    let mut state = ready(vec![book("1", "A", true)]);
    state.begin_fetch();
    assert_eq!(state.phase(), Phase::Ready);
    assert!(state.is_loading());
    assert_eq!(state.items().len(), 1);
    let notice = state.finish_fetch(Err(ApiError::from_status(500, r#"{"message":"boom"}"#)));
    assert_eq!(notice.map(|n| n.message), Some("boom".to_owned()));
    assert_eq!(state.phase(), Phase::Ready);
    assert_eq!(state.items()[0].id, "1");
}

#[test]
fn refetch_after_borrow_keeps_cards_visible() {
    let mut state = ready(vec![book("1", "A", true), book("2", "B", true)]);
    let settled = state.settle(Action::Borrow, "1", confirmed("Book borrowed successfully"));
    assert!(settled.refetch);
    state.begin_fetch();
    assert_eq!(state.phase(), Phase::Ready);
    assert_eq!(state.items().len(), 2);
    state.finish_fetch(Ok(vec![book("1", "A", false), book("2", "B", true)]));
    assert!(!state.is_loading());
    assert_eq!(state.phase(), Phase::Ready);
}

#[test]
fn refetch_of_empty_list_stays_empty() {
    let mut state = ready(Vec::new());
    state.begin_fetch();
    assert_eq!(state.phase(), Phase::Empty);
}

// =============================================================
// Local patches
// =============================================================

#[test]
fn remove_filters_by_id() {
    let mut state = ready(vec![book("1", "A", true), book("2", "B", true)]);
    assert!(state.remove("1"));
    assert!(!holds(&state, "1"));
    assert!(!state.remove("missing"));
    assert_eq!(state.items().len(), 1);
}

#[test]
fn replace_swaps_matching_entry_in_place() {
    let mut state = ready(vec![book("1", "A", true), book("2", "B", true)]);
    assert!(state.replace(book("2", "B2", false)));
    assert_eq!(state.items()[1].title, "B2");
    assert!(!state.replace(book("9", "Z", true)));
    assert_eq!(state.items().len(), 2);
}

// =============================================================
// settle
// =============================================================

#[test]
fn borrow_success_requests_refetch_without_local_change() {
    let mut state = ready(vec![book("1", "A", true)]);
    let settled = state.settle(Action::Borrow, "1", confirmed("Book borrowed successfully"));
    assert!(settled.refetch);
    assert_eq!(settled.notice, Notice::success("Book borrowed successfully"));
    assert!(state.items()[0].availability);

    // The refetch then reflects the backend's new availability.
    state.begin_fetch();
    state.finish_fetch(Ok(vec![book("1", "A", false)]));
    assert!(!state.items()[0].availability);
    assert_eq!(state.items()[0].borrow_action_label(), "Borrowed");
}

#[test]
fn delete_success_removes_item_locally() {
    let mut state = ready(vec![book("1", "A", true), book("2", "B", true)]);
    let settled = state.settle(Action::Delete, "1", confirmed("Book deleted"));
    assert!(!settled.refetch);
    assert!(!holds(&state, "1"));
    assert_eq!(state.items().len(), 1);
}

#[test]
fn return_success_removes_item_locally() {
    let mut state = ready(vec![book("1", "A", false)]);
    let settled = state.settle(Action::Return, "1", confirmed("Book returned"));
    assert_eq!(settled.notice.level, NoticeLevel::Success);
    assert_eq!(state.phase(), Phase::Empty);
}

#[test]
fn update_success_replaces_with_returned_book() {
    let mut state = ready(vec![book("1", "A", true)]);
    let response = MutationResponse {
        message: Some("Book updated".to_owned()),
        data: Some(book("1", "A (2nd ed.)", true)),
    };
    let settled = state.settle(Action::Update, "1", Ok(response));
    assert!(!settled.refetch);
    assert_eq!(state.items()[0].title, "A (2nd ed.)");
}

#[test]
fn update_without_returned_book_falls_back_to_refetch() {
    let mut state = ready(vec![book("1", "A", true)]);
    let settled = state.settle(Action::Update, "1", confirmed("ok"));
    assert!(settled.refetch);
    assert_eq!(state.items()[0].title, "A");
}

#[test]
fn failure_leaves_list_untouched_and_uses_backend_text() {
    let mut state = ready(vec![book("1", "A", true)]);
    let err = ApiError::from_status(403, r#"{"message":"Not your book"}"#);
    let settled = state.settle(Action::Delete, "1", Err(err));
    assert!(!settled.refetch);
    assert_eq!(settled.notice, Notice::error("Not your book"));
    assert!(holds(&state, "1"));
}

#[test]
fn failure_without_backend_text_uses_action_fallback() {
    let mut state = ready(vec![book("1", "A", false)]);
    let settled = state.settle(Action::Return, "1", Err(ApiError::Transport("x".to_owned())));
    assert_eq!(settled.notice, Notice::error("Error returning book"));
}

#[test]
fn success_without_message_uses_action_fallback() {
    let mut state = ready(vec![book("1", "A", true)]);
    let settled = state.settle(Action::Borrow, "1", Ok(MutationResponse::default()));
    assert_eq!(settled.notice, Notice::success("Book borrowed"));
}

#[test]
fn notice_does_not_depend_on_held_list() {
    let ok = confirmed("Book returned successfully");
    assert_eq!(Action::Return.notice(&ok), Notice::success("Book returned successfully"));
    let err = Err(ApiError::from_status(404, r#"{"message":"Book not found"}"#));
    assert_eq!(Action::Delete.notice(&err), Notice::error("Book not found"));
    assert_eq!(Action::Update.notice(&Ok(MutationResponse::default())), Notice::success("Book updated"));
}

#[test]
fn action_resync_policy() {
    assert_eq!(Action::Borrow.resync(), Resync::Refetch);
    assert_eq!(Action::Return.resync(), Resync::Remove);
    assert_eq!(Action::Delete.resync(), Resync::Remove);
    assert_eq!(Action::Update.resync(), Resync::Replace);
    assert_eq!(Action::Create.resync(), Resync::Nothing);
}

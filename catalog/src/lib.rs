//! Shared domain model for the Bookshelf library client.
//!
//! This crate owns everything the browser app (`client`) and the terminal
//! client (`cli`) agree on: the wire DTOs of the remote library API, the
//! endpoint paths, the route table, the token-presence session guard, and the
//! list-fetch-mutate state machine the list views share. It has no I/O of its
//! own so it compiles unchanged for native and `wasm32` targets.

pub mod auth;
pub mod book;
pub mod endpoints;
pub mod error;
pub mod listing;
pub mod notice;
pub mod routes;
pub mod session;

pub use auth::{AuthResponse, LoginRequest, RegisterRequest};
pub use book::{Book, BookDraft, BookPatch, Borrower};
pub use error::ApiError;
pub use listing::{Action, ListState, Phase, Settled};
pub use notice::{Notice, NoticeLevel};
pub use routes::Route;
pub use session::{Access, MemoryTokenStore, TokenStore};

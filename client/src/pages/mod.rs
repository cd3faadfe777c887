//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns route-scoped orchestration and delegates rendering details
//! to `components`. The three list pages share their fetch/mutate plumbing
//! through `shelf`.

pub mod add_book;
pub mod borrowed_books;
pub mod home;
pub mod login;
pub mod my_books;
pub(crate) mod shelf;
pub mod signup;

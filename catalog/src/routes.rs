//! Client route table.
//!
//! `Login` at `/` is the unauthenticated entry route: the session guard
//! redirects there and logout returns there.

#[cfg(test)]
#[path = "routes_test.rs"]
mod routes_test;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Route {
    Login,
    SignUp,
    Home,
    MyBooks,
    BorrowedBooks,
    AddBook,
}

/// Links rendered by the navigation shell, in display order.
pub const NAV_LINKS: [(Route, &str); 4] = [
    (Route::Home, "Home"),
    (Route::BorrowedBooks, "Borrowed Books"),
    (Route::MyBooks, "My Books"),
    (Route::AddBook, "Add Books"),
];

impl Route {
    pub const ALL: [Self; 6] = [
        Self::Login,
        Self::SignUp,
        Self::Home,
        Self::MyBooks,
        Self::BorrowedBooks,
        Self::AddBook,
    ];

    #[must_use]
    pub fn path(self) -> &'static str {
        match self {
            Self::Login => "/",
            Self::SignUp => "/signUp",
            Self::Home => "/home",
            Self::MyBooks => "/myBooks",
            Self::BorrowedBooks => "/borrowedBooks",
            Self::AddBook => "/add",
        }
    }

    /// Resolve a location path, ignoring a trailing slash and query string.
    #[must_use]
    pub fn from_path(path: &str) -> Option<Self> {
        let path = path.split(['?', '#']).next().unwrap_or_default();
        let path = match path.trim_end_matches('/') {
            "" => "/",
            trimmed => trimmed,
        };
        Self::ALL.into_iter().find(|route| route.path() == path)
    }

    /// Routes that require a stored token.
    #[must_use]
    pub fn is_protected(self) -> bool {
        !matches!(self, Self::Login | Self::SignUp)
    }
}

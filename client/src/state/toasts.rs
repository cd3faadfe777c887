//! Transient notification queue.
//!
//! Toasts are appended with a monotonically increasing id and removed either
//! by the user or by the auto-dismiss timer started in
//! `components::toast_host::notify`.

#[cfg(test)]
#[path = "toasts_test.rs"]
mod toasts_test;

use catalog::Notice;

/// Lifetime of toasts raised by list and form views.
pub const VIEW_TOAST_MS: u32 = 2_000;
/// Lifetime of toasts raised by the login and signup forms.
pub const AUTH_TOAST_MS: u32 = 6_000;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Toast {
    pub id: u64,
    pub notice: Notice,
    pub ttl_ms: u32,
}

#[derive(Clone, Debug, Default)]
pub struct ToastState {
    items: Vec<Toast>,
    next_id: u64,
}

impl ToastState {
    /// Queue `notice` and return its id.
    pub fn push(&mut self, notice: Notice, ttl_ms: u32) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        self.items.push(Toast { id, notice, ttl_ms });
        id
    }

    /// Remove toast `id`. Dismissing twice is a no-op.
    pub fn dismiss(&mut self, id: u64) -> bool {
        let before = self.items.len();
        self.items.retain(|t| t.id != id);
        self.items.len() != before
    }

    pub fn items(&self) -> &[Toast] {
        &self.items
    }
}

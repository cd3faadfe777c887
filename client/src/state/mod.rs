//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! Only two pieces of state cross view boundaries: the session token and the
//! notification queue. Each list view keeps its own `catalog::ListState`.

pub mod session;
pub mod toasts;

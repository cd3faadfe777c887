//! Networking for the remote library API.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` issues every REST call; request and response shapes live in the
//! `catalog` crate.

pub mod api;

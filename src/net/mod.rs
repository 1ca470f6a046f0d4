//! Networking modules for HTTP + realtime socket.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` handles REST calls, `socket` manages per-workspace realtime
//! connections, and `types` defines the shared wire schema.

pub mod api;
pub mod socket;
pub mod types;

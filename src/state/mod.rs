//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State is split by concern (`query`, `ui`, `toast`, `workspace_form`,
//! `workspace`) so components depend on small focused models and the pure
//! transitions can be tested without a browser.

pub mod query;
pub mod toast;
pub mod ui;
pub mod workspace;
pub mod workspace_form;

//! Utility helpers shared across client UI modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules keep small pure helpers out of page and component code so
//! they can be unit-tested natively.

pub mod avatar;
pub mod text;

//! Transient user-facing notices.
//!
//! SYSTEM CONTEXT
//! ==============
//! Provided app-wide from `App`. `components::toast` renders the queue and
//! schedules each notice's expiry.

#[cfg(test)]
#[path = "toast_test.rs"]
mod toast_test;

/// How long a notice stays on screen.
pub const TOAST_TTL_MS: u64 = 3000;

/// Severity of a notice; drives its CSS modifier.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ToastLevel {
    #[default]
    Error,
    Info,
}

impl ToastLevel {
    pub fn class(self) -> &'static str {
        match self {
            Self::Error => "toast--error",
            Self::Info => "toast--info",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Toast {
    pub id: String,
    pub level: ToastLevel,
    pub message: String,
}

/// Queue of visible notices, oldest first.
#[derive(Clone, Debug, Default)]
pub struct ToastState {
    pub items: Vec<Toast>,
}

impl ToastState {
    /// Append a notice and return its id.
    pub fn push(&mut self, level: ToastLevel, message: impl Into<String>) -> String {
        let id = uuid::Uuid::new_v4().to_string();
        self.items.push(Toast {
            id: id.clone(),
            level,
            message: message.into(),
        });
        id
    }

    /// Remove a notice. Unknown ids are ignored.
    pub fn dismiss(&mut self, id: &str) {
        self.items.retain(|t| t.id != id);
    }
}

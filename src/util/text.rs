//! Text-input helpers.

#[cfg(test)]
#[path = "text_test.rs"]
mod text_test;

/// True when `value` is empty or whitespace only.
pub fn is_blank(value: &str) -> bool {
    value.trim().is_empty()
}

/// First character upper-cased, used for compact workspace buttons.
pub fn initial(name: &str) -> String {
    name.chars().next().map(|c| c.to_uppercase().collect()).unwrap_or_default()
}

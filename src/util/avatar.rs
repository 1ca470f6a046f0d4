//! Gravatar URLs for user avatars.
//!
//! Gravatar accepts a SHA-256 hash of the normalized (trimmed, lower-cased)
//! email. Missing avatars fall back to the generated `style`.

#[cfg(test)]
#[path = "avatar_test.rs"]
mod avatar_test;

use sha2::{Digest, Sha256};

/// Header avatar size in pixels.
pub const HEADER_AVATAR_SIZE: u32 = 28;
/// Profile-menu avatar size in pixels.
pub const PROFILE_AVATAR_SIZE: u32 = 36;

/// Generated fallback image style (`d=` parameter).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum AvatarStyle {
    #[default]
    Retro,
    Identicon,
    MysteryPerson,
}

impl AvatarStyle {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Retro => "retro",
            Self::Identicon => "identicon",
            Self::MysteryPerson => "mp",
        }
    }
}

/// Avatar image URL for `email` at `size` pixels.
pub fn gravatar_url(email: &str, size: u32, style: AvatarStyle) -> String {
    let digest = Sha256::digest(email.trim().to_lowercase().as_bytes());
    format!("https://www.gravatar.com/avatar/{digest:x}?s={size}&d={}", style.as_str())
}

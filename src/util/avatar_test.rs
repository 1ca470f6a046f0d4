use super::*;

const EMPTY_SHA256: &str = "e3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855";

#[test]
fn url_contains_hash_size_and_style() {
    assert_eq!(
        gravatar_url("", 28, AvatarStyle::Retro),
        format!("https://www.gravatar.com/avatar/{EMPTY_SHA256}?s=28&d=retro")
    );
}

#[test]
fn email_is_trimmed_and_lowercased_before_hashing() {
    assert_eq!(
        gravatar_url("  Alice@Example.COM ", 36, AvatarStyle::Identicon),
        gravatar_url("alice@example.com", 36, AvatarStyle::Identicon)
    );
}

#[test]
fn different_emails_hash_differently() {
    assert_ne!(
        gravatar_url("a@example.com", 28, AvatarStyle::Retro),
        gravatar_url("b@example.com", 28, AvatarStyle::Retro)
    );
}

#[test]
fn hash_is_64_hex_chars() {
    let url = gravatar_url("alice@example.com", HEADER_AVATAR_SIZE, AvatarStyle::MysteryPerson);
    let hash = url
        .trim_start_matches("https://www.gravatar.com/avatar/")
        .split('?')
        .next()
        .unwrap();
    assert_eq!(hash.len(), 64);
    assert!(hash.chars().all(|c| c.is_ascii_hexdigit()));
    assert!(url.ends_with("?s=28&d=mp"));
}

use super::*;

// =============================================================
// from_location
// =============================================================

#[test]
fn plain_http_location_uses_ws_socket() {
    let config = ClientConfig::from_location("http://localhost:3090/workspace/a", "localhost:3090");
    assert_eq!(config.api_base, "http://localhost:3090");
    assert_eq!(config.socket_base, "ws://localhost:3090");
}

#[test]
fn https_location_uses_wss_socket() {
    let config = ClientConfig::from_location("https://chat.example.com/", "chat.example.com");
    assert_eq!(config.api_base, "https://chat.example.com");
    assert_eq!(config.socket_base, "wss://chat.example.com");
}

// =============================================================
// from_override
// =============================================================

#[test]
fn override_without_scheme_defaults_to_http() {
    let config = ClientConfig::from_override("api.local:3095");
    assert_eq!(config.api_base, "http://api.local:3095");
    assert_eq!(config.socket_base, "ws://api.local:3095");
}

#[test]
fn override_with_https_scheme_and_trailing_slash() {
    let config = ClientConfig::from_override(" https://api.example.com/ ");
    assert_eq!(config.api_base, "https://api.example.com");
    assert_eq!(config.socket_base, "wss://api.example.com");
}

// =============================================================
// URL builders
// =============================================================

#[test]
fn api_url_prefixes_base() {
    let config = ClientConfig::from_location("http://", DEFAULT_HOST);
    assert_eq!(config.api_url("/api/users"), "http://localhost:3095/api/users");
}

#[test]
fn socket_url_uses_workspace_namespace() {
    let config = ClientConfig::from_location("https://", "chat.example.com");
    assert_eq!(config.socket_url("acme"), "wss://chat.example.com/ws-acme");
}

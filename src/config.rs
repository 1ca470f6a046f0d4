//! Endpoint configuration for the REST API and the realtime socket.
//!
//! SYSTEM CONTEXT
//! ==============
//! The browser bundle talks to whatever origin served it. A build-time
//! `TEAMCHAT_API_HOST` override points both the API and the socket at a
//! separate backend host; native builds (SSR, tests) fall back to
//! `DEFAULT_HOST`.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use std::sync::OnceLock;

/// Backend host used when no browser location or override is available.
pub const DEFAULT_HOST: &str = "localhost:3095";

const API_HOST_OVERRIDE: Option<&str> = option_env!("TEAMCHAT_API_HOST");

static CONFIG: OnceLock<ClientConfig> = OnceLock::new();

/// Resolved base URLs for HTTP requests and socket connections.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ClientConfig {
    /// Scheme + host prefix for REST calls, e.g. `https://chat.example.com`.
    pub api_base: String,
    /// Scheme + host prefix for sockets, e.g. `wss://chat.example.com`.
    pub socket_base: String,
}

impl ClientConfig {
    /// Build a config from a page location (`href`) and its `host`.
    ///
    /// Secure pages (`https`) get `wss` sockets; everything else is plain.
    pub fn from_location(href: &str, host: &str) -> Self {
        let secure = href.starts_with("https");
        let (http, ws) = if secure { ("https", "wss") } else { ("http", "ws") };
        Self {
            api_base: format!("{http}://{host}"),
            socket_base: format!("{ws}://{host}"),
        }
    }

    /// Detect the config from the build override, then the browser location.
    pub fn detect() -> Self {
        if let Some(host) = API_HOST_OVERRIDE.filter(|h| !h.trim().is_empty()) {
            return Self::from_override(host);
        }
        #[cfg(feature = "hydrate")]
        {
            if let Some(location) = web_sys::window().map(|w| w.location()) {
                let href = location.href().unwrap_or_default();
                if let Ok(host) = location.host() {
                    return Self::from_location(&href, &host);
                }
            }
        }
        Self::from_location("http://", DEFAULT_HOST)
    }

    /// Parse an override of the form `host[:port]` or `scheme://host[:port]`.
    pub fn from_override(value: &str) -> Self {
        let value = value.trim().trim_end_matches('/');
        match value.split_once("://") {
            Some((scheme, host)) => Self::from_location(&format!("{scheme}://"), host),
            None => Self::from_location("http://", value),
        }
    }

    /// Absolute URL for an API path such as `/api/users`.
    pub fn api_url(&self, path: &str) -> String {
        format!("{}{path}", self.api_base)
    }

    /// Socket URL for a workspace namespace (`/ws-{workspace}`).
    pub fn socket_url(&self, workspace: &str) -> String {
        format!("{}/ws-{workspace}", self.socket_base)
    }
}

/// Process-wide config, detected on first use.
pub fn config() -> &'static ClientConfig {
    CONFIG.get_or_init(ClientConfig::detect)
}

use serde::Deserialize;

use crate::constants::{BASE_FIELD, DEFAULT_TARBALL_PREFIX, TOKEN_FIELD, USER_FIELD};
use crate::page::{field, Page};
use crate::utils::trim_base;

/// What to do with a fetch completion that is older than the newest request
/// issued for the same region.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ResponseOrdering {
    /// Every completion is applied; whichever lands last wins.
    #[default]
    LastWriteWins,
    /// Completions superseded by a newer request for the region are dropped.
    DiscardStale,
}

/// Client options, passed from the page through `configure()` or parsed from
/// JSON.  Every key is optional.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct ClientConfig {
    /// Overrides the `base` hidden field.
    pub base_url: Option<String>,
    pub response_ordering: ResponseOrdering,
    /// Path under the base URL where generated tarballs are served.
    pub tarball_prefix: String,
    pub debug_logging: bool,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: None,
            response_ordering: ResponseOrdering::LastWriteWins,
            tarball_prefix: DEFAULT_TARBALL_PREFIX.to_string(),
            debug_logging: true,
        }
    }
}

impl ClientConfig {
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}

/// Base URL, token and user the page was rendered with.  Read once at start
/// and constant for the page's lifetime.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SessionContext {
    pub base: String,
    pub token: String,
    pub user: String,
}

impl SessionContext {
    pub fn new(base: &str, token: &str, user: &str) -> Self {
        Self {
            base: trim_base(base),
            token: token.to_string(),
            user: user.to_string(),
        }
    }

    /// Resolve the base URL from the config override, then the `base` field,
    /// then the build-time `API_BASE_URL`; same-origin when none is set.
    pub fn from_page(page: &dyn Page, config: &ClientConfig) -> Self {
        let read = |id: &str| field(page, id).map(|f| f.value());
        let base = config
            .base_url
            .clone()
            .or_else(|| read(BASE_FIELD))
            .or_else(|| option_env!("API_BASE_URL").map(str::to_string))
            .unwrap_or_default();
        Self::new(
            &base,
            &read(TOKEN_FIELD).unwrap_or_default(),
            &read(USER_FIELD).unwrap_or_default(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::page::MemoryPage;

    #[test]
    fn empty_json_gives_defaults() {
        let config = ClientConfig::from_json("{}").unwrap();
        assert_eq!(config, ClientConfig::default());
    }

    #[test]
    fn json_selects_stale_discarding() {
        let config =
            ClientConfig::from_json(r#"{"response_ordering":"discard_stale","tarball_prefix":"/users"}"#)
                .unwrap();
        assert_eq!(config.response_ordering, ResponseOrdering::DiscardStale);
        assert_eq!(config.tarball_prefix, "/users");
    }

    #[test]
    fn session_prefers_config_override() {
        let page = MemoryPage::notebook_template("https://from-field/", "tok", "alice");
        let session = SessionContext::from_page(&page, &ClientConfig::default());
        assert_eq!(session.base, "https://from-field");

        let config = ClientConfig {
            base_url: Some("https://override/".into()),
            ..ClientConfig::default()
        };
        let session = SessionContext::from_page(&page, &config);
        assert_eq!(session.base, "https://override");
        assert_eq!(session.token, "tok");
        assert_eq!(session.user, "alice");
    }

    #[test]
    fn session_tolerates_missing_fields() {
        let page = MemoryPage::new();
        let session = SessionContext::from_page(&page, &ClientConfig::default());
        assert_eq!(session.token, "");
        assert_eq!(session.user, "");
    }
}

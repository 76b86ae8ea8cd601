use std::env;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::{FussballError, Result};

const DEFAULT_BASE_URL: &str = "https://www.fussball.de";
const DEFAULT_TIMEOUT_SECS: u64 = 30;

const ENV_BASE_URL: &str = "FUSSBALL_BASE_URL";
const ENV_TIMEOUT_SECS: &str = "FUSSBALL_TIMEOUT_SECS";
const ENV_USER_AGENT: &str = "FUSSBALL_USER_AGENT";

/// Settings for a [`crate::FussballClient`].
///
/// The site origin is configurable so that tests and staging setups can point
/// the client at a mirror.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClientConfig {
    pub base_url: String,
    pub timeout_secs: u64,
    pub user_agent: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
            user_agent: format!(
                "Mozilla/5.0 (compatible; fussball-scraper/{})",
                env!("CARGO_PKG_VERSION")
            ),
        }
    }
}

impl ClientConfig {
    /// Defaults overridden by `FUSSBALL_BASE_URL`, `FUSSBALL_TIMEOUT_SECS`
    /// and `FUSSBALL_USER_AGENT` where set.
    pub fn from_env() -> Result<Self> {
        Self::from_vars(|key| env::var(key).ok())
    }

    fn from_vars(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let mut config = Self::default();

        if let Some(base_url) = lookup(ENV_BASE_URL) {
            config = config.with_base_url(base_url);
        }
        if let Some(raw) = lookup(ENV_TIMEOUT_SECS) {
            config.timeout_secs = raw.trim().parse().map_err(|_| FussballError::Config {
                key: ENV_TIMEOUT_SECS,
                value: raw.clone(),
            })?;
        }
        if let Some(user_agent) = lookup(ENV_USER_AGENT) {
            config.user_agent = user_agent;
        }

        Ok(config)
    }

    /// Replace the site origin. A trailing slash is dropped.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into().trim_end_matches('/').to_string();
        self
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    /// Club search results for a free-text query.
    pub fn search_url(&self, query: &str) -> String {
        format!(
            "{}/suche/-/text/{}/restriction/-1#!/",
            self.base(),
            urlencoding::encode(query.trim())
        )
    }

    /// Profile page of a single club.
    pub fn club_profile_url(&self, external_club_id: &str) -> String {
        format!("{}/verein/-/-/id/{external_club_id}#!/", self.base())
    }

    /// Upcoming games of a single team.
    pub fn team_fixtures_url(&self, external_team_id: &str) -> String {
        format!(
            "{}/ajax.team.next.games/-/mode/PAGE/team-id/{external_team_id}",
            self.base()
        )
    }

    /// Detail page (match report) of a single game.
    pub fn match_url(&self, external_match_id: &str) -> String {
        format!("{}/spiel/-/-/spiel/{external_match_id}", self.base())
    }

    /// Resolve a link as found in a page against the site origin.
    pub fn absolute_url(&self, href: &str) -> String {
        absolute_url(self.base(), href)
    }

    fn base(&self) -> &str {
        self.base_url.trim_end_matches('/')
    }
}

/// Make `href` absolute: absolute links pass through, protocol-relative ones
/// get `https:`, everything else is prefixed with `origin`.
pub(crate) fn absolute_url(origin: &str, href: &str) -> String {
    let href = href.trim();
    if href.starts_with("http://") || href.starts_with("https://") {
        href.to_string()
    } else if href.starts_with("//") {
        format!("https:{href}")
    } else if href.starts_with('/') {
        format!("{}{href}", origin.trim_end_matches('/'))
    } else {
        format!("{}/{href}", origin.trim_end_matches('/'))
    }
}

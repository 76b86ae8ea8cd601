use tracing::{instrument, warn};

use crate::config::ClientConfig;
use crate::error::{FussballError, Result};
use crate::fussball_scraper::{clubs, fixtures, match_detail};
use crate::model::*;

/// The main entry point for looking things up on fussball.de.
///
/// `FussballClient` wraps a [`reqwest::Client`] and a [`ClientConfig`]. Every
/// lookup performs exactly one request. Lookups never fail: transport and
/// parse errors are logged and turned into an empty list or an empty record,
/// because the site is scraped live and may be unavailable at any time.
///
/// # Examples
///
/// ```no_run
/// # async fn example() {
/// use fussball_scraper::FussballClient;
///
/// let client = FussballClient::new();
/// let clubs = client.search_clubs("SG Wurgwitz").await;
/// for club in &clubs {
///     println!("{} ({})", club.name, club.location_text);
/// }
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct FussballClient {
    http: reqwest::Client,
    config: ClientConfig,
}

impl FussballClient {
    /// Create a new client with default settings.
    pub fn new() -> Self {
        Self::with_client(reqwest::Client::new(), ClientConfig::default())
    }

    /// Create a client whose HTTP layer honours the configured timeout and
    /// user agent.
    pub fn with_config(config: ClientConfig) -> Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(config.timeout())
            .user_agent(config.user_agent.clone())
            .build()
            .map_err(FussballError::ClientBuild)?;
        Ok(Self::with_client(http, config))
    }

    /// Create a client using the provided [`reqwest::Client`].
    ///
    /// Use this when you need proxies, custom headers or retrying middleware.
    pub fn with_client(client: reqwest::Client, config: ClientConfig) -> Self {
        Self {
            http: client,
            config,
        }
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Search clubs by name. Empty on no hits or any failure.
    #[instrument(skip(self))]
    pub async fn search_clubs(&self, query: &str) -> Vec<ClubCandidate> {
        let url = self.config.search_url(query);
        clubs::search_clubs(&self.http, &url, &self.config.base_url)
            .await
            .unwrap_or_else(|e| degrade("club search", e))
    }

    /// Fetch a club profile. On failure only the id and source URL are set.
    #[instrument(skip(self))]
    pub async fn fetch_club_profile(&self, external_club_id: &str) -> ClubProfile {
        let url = self.config.club_profile_url(external_club_id);
        clubs::get_club_profile(&self.http, &url, external_club_id)
            .await
            .unwrap_or_else(|e| ClubProfile {
                external_club_id: external_club_id.to_string(),
                source_url: url.clone(),
                ..degrade("club profile", e)
            })
    }

    /// Fetch the upcoming games of a team. Empty on any failure.
    #[instrument(skip(self))]
    pub async fn fetch_team_fixtures(&self, external_team_id: &str) -> FixtureList {
        let url = self.config.team_fixtures_url(external_team_id);
        fixtures::get_team_fixtures(&self.http, &url, &self.config.base_url)
            .await
            .unwrap_or_else(|e| degrade("team fixtures", e))
    }

    /// Fetch the report of a single match. All fields empty on any failure.
    #[instrument(skip(self))]
    pub async fn fetch_match_details(&self, external_match_id: &str) -> MatchDetails {
        let url = self.config.match_url(external_match_id);
        match_detail::get_match_details(&self.http, &url, &self.config.base_url)
            .await
            .unwrap_or_else(|e| degrade("match details", e))
    }
}

impl Default for FussballClient {
    fn default() -> Self {
        Self::new()
    }
}

fn degrade<T: Default>(lookup: &str, error: FussballError) -> T {
    warn!(lookup, network = error.is_network(), error = %error, "lookup failed, returning empty result");
    T::default()
}

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use serde::{Deserialize, Serialize};

use super::fixture::KICKOFF_TIME_FORMAT;

pub(crate) const MATCH_DATE_FORMAT: &str = "%Y-%m-%d";

/// Everything the match report page says about a single game.
///
/// Fields the page did not provide stay `None` (or empty); parsing never fails.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct MatchDetails {
    pub home_team: MatchTeam,
    pub away_team: MatchTeam,
    pub competition_name: Option<String>,
    /// `YYYY-MM-DD`.
    pub date: Option<String>,
    /// `HH:MM`.
    pub kickoff_time: Option<String>,
    pub venue_text: Option<String>,
    /// `"A:B"`.
    #[serde(rename = "result")]
    pub final_score: Option<String>,
    /// `"A:B"`.
    #[serde(rename = "half_time_result")]
    pub half_time_score: Option<String>,
    pub events: Vec<MatchEvent>,
    #[serde(rename = "ids")]
    pub external_ids: MatchIds,
}

impl MatchDetails {
    /// Kickoff as a timestamp, if both date and time are present and valid.
    pub fn kickoff(&self) -> Option<NaiveDateTime> {
        let date = NaiveDate::parse_from_str(self.date.as_deref()?, MATCH_DATE_FORMAT).ok()?;
        let time =
            NaiveTime::parse_from_str(self.kickoff_time.as_deref()?, KICKOFF_TIME_FORMAT).ok()?;
        Some(date.and_time(time))
    }
}

/// One side of a match report header.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct MatchTeam {
    pub name: Option<String>,
    pub external_id: Option<String>,
    pub profile_url: Option<String>,
    pub logo_url: Option<String>,
}

/// Identifiers the site lists in the match info box.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct MatchIds {
    #[serde(rename = "staffel")]
    pub season_id: Option<String>,
    #[serde(rename = "spiel")]
    pub match_id: Option<String>,
}

/// A single entry of the match course (goal, booking or substitution).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct MatchEvent {
    /// Digits with an optional trailing `+` for stoppage time.
    pub minute: Option<String>,
    #[serde(rename = "type")]
    pub event_type: Option<MatchEventType>,
    pub side: Option<Side>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub player: Option<PlayerRef>,
    #[serde(rename = "sub_in", skip_serializing_if = "Option::is_none")]
    pub incoming_player: Option<PlayerRef>,
    #[serde(rename = "sub_out", skip_serializing_if = "Option::is_none")]
    pub outgoing_player: Option<PlayerRef>,
}

impl MatchEvent {
    /// Every player this event refers to.
    pub fn players(&self) -> impl Iterator<Item = &PlayerRef> {
        [&self.player, &self.incoming_player, &self.outgoing_player]
            .into_iter()
            .flatten()
    }
}

/// Kind of a match course entry, inferred from its icon.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum_macros::Display,
    strum_macros::EnumString,
)]
#[serde(rename_all = "kebab-case")]
#[strum(serialize_all = "kebab-case")]
pub enum MatchEventType {
    Goal,
    YellowCard,
    Substitute,
}

/// Which team an event belongs to.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum_macros::Display,
    strum_macros::EnumString,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum Side {
    Home,
    Away,
}

/// A player as linked from a match report.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct PlayerRef {
    pub name: Option<String>,
    pub external_id: Option<String>,
    pub profile_url: Option<String>,
}

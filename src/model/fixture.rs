use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use serde::Serialize;

pub(crate) const FIXTURE_DATE_FORMAT: &str = "%d.%m.%Y";
pub(crate) const KICKOFF_TIME_FORMAT: &str = "%H:%M";

/// A list of fixtures in page order.
pub type FixtureList = Vec<ScheduledFixture>;

/// One upcoming (or recently played) game as listed in a fixtures table.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ScheduledFixture {
    /// `DD.MM.YYYY`, as printed in the headline row.
    pub date: Option<String>,
    /// `HH:MM`.
    pub time: Option<String>,
    pub competition_name: Option<String>,
    pub home_team: FixtureTeam,
    pub away_team: FixtureTeam,
    pub match_url: Option<String>,
    pub external_match_id: Option<String>,
    /// Score, placeholder or status notice (e.g. `Nichtantritt GAST`), verbatim.
    pub score_or_status: String,
}

impl ScheduledFixture {
    /// Kickoff as a timestamp, if both date and time are present and valid.
    pub fn kickoff(&self) -> Option<NaiveDateTime> {
        let date = NaiveDate::parse_from_str(self.date.as_deref()?, FIXTURE_DATE_FORMAT).ok()?;
        let time = NaiveTime::parse_from_str(self.time.as_deref()?, KICKOFF_TIME_FORMAT).ok()?;
        Some(date.and_time(time))
    }
}

/// A team as shown in a fixtures row.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct FixtureTeam {
    pub name: String,
    pub profile_url: Option<String>,
    pub external_team_id: Option<String>,
}

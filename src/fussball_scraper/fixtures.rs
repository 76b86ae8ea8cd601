use std::sync::LazyLock;

use chrono::NaiveDate;
use regex::Regex;
use scraper::{CaseSensitivity, ElementRef, Html, Selector};
use tracing::{debug, instrument, trace, warn};

use crate::config::absolute_url;
use crate::error::Result;
use crate::fussball_scraper::{self, element_text, select_text, SITE_ORIGIN};
use crate::model::{FixtureList, FixtureTeam, ScheduledFixture, FIXTURE_DATE_FORMAT};

/// `Sonntag, 24.08.2025 - 13:00 Uhr | Kreisoberliga`
static RE_HEADLINE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[^,|]+,\s*(\d{2}\.\d{2}\.\d{4})\s*-\s*(\d{2}:\d{2})\s*Uhr\s*\|\s*(.+?)\s*$")
        .expect("invalid regex: headline")
});

#[instrument(skip(client))]
pub(crate) async fn get_team_fixtures(
    client: &reqwest::Client,
    url: &str,
    origin: &str,
) -> Result<FixtureList> {
    let body = fussball_scraper::get_page(client, url).await?;
    let fixtures = parse_fixtures(&Html::parse_document(&body), origin)?;
    debug!(count = fixtures.len(), "parsed fixture list");
    Ok(fixtures)
}

/// Parse the fixtures table of a team or club schedule page.
///
/// Returns the fixtures in page order; an unusable page yields an empty list.
pub fn parse_upcoming_fixtures(html: &str) -> FixtureList {
    parse_fixtures(&Html::parse_document(html), SITE_ORIGIN).unwrap_or_else(|e| {
        warn!(error = %e, "failed to parse fixture list");
        vec![]
    })
}

/// Shared date, time and competition set by a headline row.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
struct Headline {
    date: Option<String>,
    time: Option<String>,
    competition: Option<String>,
}

enum Row<'a> {
    Headline,
    Fixture { home: ElementRef<'a>, away: ElementRef<'a> },
    Other,
}

fn classify<'a>(row: &ElementRef<'a>, club_selector: &Selector) -> Row<'a> {
    if row
        .value()
        .has_class("row-headline", CaseSensitivity::CaseSensitive)
    {
        return Row::Headline;
    }
    let mut clubs = row.select(club_selector);
    match (clubs.next(), clubs.next()) {
        (Some(home), Some(away)) => Row::Fixture { home, away },
        _ => Row::Other,
    }
}

pub(crate) fn parse_fixtures(document: &Html, origin: &str) -> Result<FixtureList> {
    let row_selector = Selector::parse("table tr")?;
    let club_selector = Selector::parse("td.column-club")?;

    let mut headline = Headline::default();
    let mut fixtures = vec![];
    for row in document.select(&row_selector) {
        match classify(&row, &club_selector) {
            Row::Headline => {
                headline = element_text(&row)
                    .map(|text| parse_headline(&text))
                    .unwrap_or_default();
                if headline.date.is_none() {
                    debug!(text = ?element_text(&row), "unrecognized headline, context reset");
                }
            }
            Row::Fixture { home, away } => {
                fixtures.push(parse_fixture(&row, home, away, &headline, origin)?);
            }
            Row::Other => trace!("ignoring table row"),
        }
    }
    Ok(fixtures)
}

/// All three fields on a match, none otherwise.
fn parse_headline(text: &str) -> Headline {
    RE_HEADLINE
        .captures(text)
        .filter(|caps| NaiveDate::parse_from_str(&caps[1], FIXTURE_DATE_FORMAT).is_ok())
        .map(|caps| Headline {
            date: Some(caps[1].to_string()),
            time: Some(caps[2].to_string()),
            competition: Some(caps[3].to_string()),
        })
        .unwrap_or_default()
}

fn parse_fixture(
    row: &ElementRef,
    home: ElementRef,
    away: ElementRef,
    headline: &Headline,
    origin: &str,
) -> Result<ScheduledFixture> {
    let time_selector = Selector::parse("td.column-date")?;
    let time = select_text(row, &time_selector)
        .and_then(|text| fussball_scraper::find_time(&text))
        .or_else(|| headline.time.clone());

    let link_selector = Selector::parse("a[href]")?;
    let match_href = row
        .select(&link_selector)
        .filter_map(|a| a.value().attr("href"))
        .find(|href| fussball_scraper::match_id(href).is_some());
    let external_match_id = match_href.and_then(fussball_scraper::match_id);
    let match_url = match_href.map(|href| absolute_url(origin, href));

    let score_selector = Selector::parse("td.column-score")?;
    let score_or_status = select_text(row, &score_selector).unwrap_or_default();

    Ok(ScheduledFixture {
        date: headline.date.clone(),
        time,
        competition_name: headline.competition.clone(),
        home_team: parse_team(&home, origin)?,
        away_team: parse_team(&away, origin)?,
        match_url,
        external_match_id,
        score_or_status,
    })
}

fn parse_team(cell: &ElementRef, origin: &str) -> Result<FixtureTeam> {
    let name_selector = Selector::parse(".club-name")?;
    let link_selector = Selector::parse("a[href]")?;

    let name = select_text(cell, &name_selector)
        .or_else(|| element_text(cell))
        .unwrap_or_default();
    let href = fussball_scraper::select_href(cell, &link_selector);

    Ok(FixtureTeam {
        name,
        profile_url: href.map(|href| absolute_url(origin, href)),
        external_team_id: href.and_then(fussball_scraper::team_id),
    })
}

use std::sync::LazyLock;

use chrono::NaiveDate;
use regex::Regex;
use scraper::{CaseSensitivity, ElementRef, Html, Selector};
use tracing::{debug, instrument, warn};

use crate::config::absolute_url;
use crate::error::Result;
use crate::fussball_scraper::{
    self, element_text, labelled_rows, select_href, select_text, SITE_ORIGIN,
};
use crate::glyphs;
use crate::model::{
    MatchDetails, MatchEvent, MatchEventType, MatchIds, MatchTeam, PlayerRef, Side,
    MATCH_DATE_FORMAT,
};

static RE_ISO_DATE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\d{4}-\d{2}-\d{2}").expect("invalid regex: iso date"));

/// Icon markers of the match course, in priority order.
const EVENT_ICONS: [(&str, MatchEventType); 3] = [
    ("i.icon-ball", MatchEventType::Goal),
    ("i.icon-card.yellow-card", MatchEventType::YellowCard),
    ("i.icon-substitute", MatchEventType::Substitute),
];

#[instrument(skip(client))]
pub(crate) async fn get_match_details(
    client: &reqwest::Client,
    url: &str,
    origin: &str,
) -> Result<MatchDetails> {
    let body = fussball_scraper::get_page(client, url).await?;
    let details = parse_match(&Html::parse_document(&body), origin)?;
    debug!(events = details.events.len(), "parsed match details");
    Ok(details)
}

/// Parse a match report page.
///
/// Never fails: anything the page does not provide is left empty.
pub fn parse_match_details(html: &str) -> MatchDetails {
    parse_match(&Html::parse_document(html), SITE_ORIGIN).unwrap_or_else(|e| {
        warn!(error = %e, "failed to parse match details");
        MatchDetails::default()
    })
}

pub(crate) fn parse_match(document: &Html, origin: &str) -> Result<MatchDetails> {
    let root = document.root_element();

    let competition_selector = Selector::parse("a.competition")?;
    let competition_name = select_text(&root, &competition_selector);

    let header_date_selector = Selector::parse(".stage-header .date")?;
    let kickoff_time = select_text(&root, &header_date_selector)
        .and_then(|text| fussball_scraper::find_time(&text));

    let venue_selector = Selector::parse("a.location")?;
    let venue_text = select_text(&root, &venue_selector);

    let half_time_selector = Selector::parse(".half-result")?;
    let half_time_score = select_text(&root, &half_time_selector)
        .and_then(|text| glyphs::normalize_half_time(&text));

    Ok(MatchDetails {
        home_team: parse_team(&root, ".team-home", origin)?,
        away_team: parse_team(&root, ".team-away", origin)?,
        competition_name,
        date: parse_date(&root)?,
        kickoff_time,
        venue_text,
        final_score: parse_final_score(&root)?,
        half_time_score,
        events: parse_events(&root, origin)?,
        external_ids: parse_ids(&root)?,
    })
}

/// `YYYY-MM-DD` from the start date element; `None` if absent or invalid.
fn parse_date(root: &ElementRef) -> Result<Option<String>> {
    let date_selector = Selector::parse("[itemprop='startDate']")?;
    let Some(element) = root.select(&date_selector).next() else {
        return Ok(None);
    };

    let candidates = [
        element.value().attr("content").map(str::to_string),
        element.value().attr("datetime").map(str::to_string),
        element_text(&element),
    ];
    Ok(candidates
        .into_iter()
        .flatten()
        .filter_map(|text| RE_ISO_DATE.find(&text).map(|m| m.as_str().to_string()))
        .find(|date| NaiveDate::parse_from_str(date, MATCH_DATE_FORMAT).is_ok()))
}

fn parse_team(root: &ElementRef, side: &str, origin: &str) -> Result<MatchTeam> {
    let side_selector = Selector::parse(side)?;
    let Some(block) = root.select(&side_selector).next() else {
        return Ok(MatchTeam::default());
    };

    let logo_link_selector = Selector::parse(".team-logo a[href]")?;
    let logo_href = select_href(&block, &logo_link_selector);

    let logo_img_selector = Selector::parse(".team-logo img")?;
    let logo_url = block
        .select(&logo_img_selector)
        .find_map(|img| img.value().attr("src"))
        .filter(|src| !src.trim().is_empty())
        .map(|src| absolute_url(origin, src));

    let name_link_selector = Selector::parse(".team-name a")?;
    let club_name_selector = Selector::parse(".club-name")?;
    let name_link = block.select(&name_link_selector).next();
    let name = name_link
        .and_then(|link| element_text(&link))
        .or_else(|| select_text(&block, &club_name_selector));

    let profile_url = name_link
        .and_then(|link| link.value().attr("href"))
        .or(logo_href)
        .map(|href| absolute_url(origin, href));

    Ok(MatchTeam {
        name,
        external_id: logo_href.and_then(fussball_scraper::entity_id),
        profile_url,
        logo_url,
    })
}

fn parse_final_score(root: &ElementRef) -> Result<Option<String>> {
    let result_selector = Selector::parse(".end-result")?;
    let Some(result) = root.select(&result_selector).next() else {
        return Ok(None);
    };

    let left_selector = Selector::parse(".score-left")?;
    let right_selector = Selector::parse(".score-right")?;
    let left = select_text(&result, &left_selector);
    let right = select_text(&result, &right_selector);
    let raw = result.text().collect::<String>();

    Ok(glyphs::normalize_score(left.as_deref(), right.as_deref(), &raw))
}

fn parse_ids(root: &ElementRef) -> Result<MatchIds> {
    let row_selector = Selector::parse(".match-info .row")?;
    let mut ids = MatchIds::default();
    for (label, value) in labelled_rows(root, &row_selector)? {
        let Some(value) = element_text(&value) else {
            continue;
        };
        if label.contains("Staffel-ID") {
            ids.season_id = Some(value);
        } else if label.contains("Spiel") && value.chars().all(|c| c.is_ascii_digit()) {
            // Exact label wins; other numeric rows like `Spieltag` only fill a gap.
            if label == "Spiel" || ids.match_id.is_none() {
                ids.match_id = Some(value);
            }
        }
    }
    Ok(ids)
}

fn parse_events(root: &ElementRef, origin: &str) -> Result<Vec<MatchEvent>> {
    let row_selector = Selector::parse(".match-course .row-event")?;
    root.select(&row_selector)
        .map(|row| parse_event(&row, origin))
        .collect()
}

fn parse_event(row: &ElementRef, origin: &str) -> Result<MatchEvent> {
    let time_selector = Selector::parse(".column-time")?;
    let minute = select_text(row, &time_selector)
        .map(|text| {
            text.chars()
                .filter(|c| c.is_ascii_digit() || *c == '+')
                .collect::<String>()
        })
        .filter(|minute| !minute.is_empty());

    let element = row.value();
    let side = if element.has_class("event-left", CaseSensitivity::CaseSensitive) {
        Some(Side::Home)
    } else if element.has_class("event-right", CaseSensitivity::CaseSensitive) {
        Some(Side::Away)
    } else {
        None
    };

    let event_type = classify_event(row)?;
    let mut event = MatchEvent {
        minute,
        event_type,
        side,
        ..MatchEvent::default()
    };

    if event_type == Some(MatchEventType::Substitute) {
        let substitute_selector = Selector::parse(".substitute a")?;
        let mut links = row.select(&substitute_selector);
        event.incoming_player = links.next().map(|a| parse_player(&a, origin)).transpose()?;
        event.outgoing_player = links.next().map(|a| parse_player(&a, origin)).transpose()?;
    } else {
        let player_selector = Selector::parse(".column-player a")?;
        event.player = row
            .select(&player_selector)
            .next()
            .map(|a| parse_player(&a, origin))
            .transpose()?;
    }

    Ok(event)
}

fn classify_event(row: &ElementRef) -> Result<Option<MatchEventType>> {
    for (icon, event_type) in EVENT_ICONS {
        let selector = Selector::parse(icon)?;
        if row.select(&selector).next().is_some() {
            return Ok(Some(event_type));
        }
    }
    Ok(None)
}

fn parse_player(link: &ElementRef, origin: &str) -> Result<PlayerRef> {
    let obfuscated_selector = Selector::parse("[data-obfuscation]")?;
    let name = match link.select(&obfuscated_selector).next() {
        Some(span) => {
            Some(glyphs::decode_obfuscated(&span.inner_html())).filter(|name| !name.is_empty())
        }
        None => element_text(link),
    };
    let href = link
        .value()
        .attr("href")
        .map(str::trim)
        .filter(|href| !href.is_empty());

    Ok(PlayerRef {
        name,
        external_id: href.and_then(fussball_scraper::player_id),
        profile_url: href.map(|href| absolute_url(origin, href)),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    const MATCH_HTML: &str = include_str!("../../tests/fixtures/match_report.html");

    fn player(name: &str, id: &str) -> Option<PlayerRef> {
        Some(PlayerRef {
            name: Some(name.to_string()),
            external_id: Some(id.to_string()),
            profile_url: Some(format!(
                "https://www.fussball.de/spielerprofil/-/player-id/{id}"
            )),
        })
    }

    #[test]
    fn test_header() {
        let details = parse_match_details(MATCH_HTML);
        assert_eq!(details.competition_name.as_deref(), Some("Kreisoberliga"));
        assert_eq!(details.date.as_deref(), Some("2025-08-24"));
        assert_eq!(details.kickoff_time.as_deref(), Some("13:00"));
        assert_eq!(
            details.venue_text.as_deref(),
            Some("Rasenplatz, Sportplatz Wurgwitz, Kohlsdorfer Straße 2, 01705 Freital")
        );
        assert_eq!(
            details.kickoff(),
            NaiveDate::from_ymd_opt(2025, 8, 24).and_then(|d| d.and_hms_opt(13, 0, 0))
        );
    }

    #[test]
    fn test_teams() {
        let details = parse_match_details(MATCH_HTML);
        assert_eq!(
            details.home_team,
            MatchTeam {
                name: Some("SpG SG Wurgwitz/\u{200B}SG 90 Braunsdorf".to_string()),
                external_id: Some("00ES8GN8VS00002BVV0AG08LVUPGND5I".to_string()),
                profile_url: Some("https://www.fussball.de/mannschaft/spg-sg-wurgwitz-sg-90-braunsdorf-sg-wurgwitz-sachsen/-/saison/2526/team-id/02TD2NSG0C000000VS5489BSVTA87VEB".to_string()),
                logo_url: Some("https://www.fussball.de/export.media/-/action/getLogo/format/3/id/00ES8GN8VS00002BVV0AG08LVUPGND5I".to_string()),
            }
        );
        // The away side has no name link, only the club name.
        assert_eq!(
            details.away_team.name.as_deref(),
            Some("SV Chemie Dohna")
        );
        assert_eq!(
            details.away_team.external_id.as_deref(),
            Some("00ES8GN8VS00003AVV0AG08LVUPGND5I")
        );
        assert_eq!(
            details.away_team.profile_url.as_deref(),
            Some("https://www.fussball.de/verein/sv-chemie-dohna-sachsen/-/id/00ES8GN8VS00003AVV0AG08LVUPGND5I")
        );
        assert_eq!(
            details.away_team.logo_url.as_deref(),
            Some("https://cdn.fussball.de/logos/00ES8GN8VS00003AVV0AG08LVUPGND5I.png")
        );
    }

    #[test]
    fn test_scores_and_ids() {
        let details = parse_match_details(MATCH_HTML);
        assert_eq!(details.final_score.as_deref(), Some("0:0"));
        assert_eq!(details.half_time_score.as_deref(), Some("1:0"));
        assert_eq!(
            details.external_ids,
            MatchIds {
                season_id: Some("730090".to_string()),
                match_id: Some("730090003".to_string()),
            }
        );
    }

    #[test]
    fn test_events_in_document_order() {
        let details = parse_match_details(MATCH_HTML);
        let summary: Vec<(Option<&str>, Option<MatchEventType>, Option<Side>)> = details
            .events
            .iter()
            .map(|e| (e.minute.as_deref(), e.event_type, e.side))
            .collect();
        assert_eq!(
            summary,
            vec![
                (Some("12"), Some(MatchEventType::Goal), Some(Side::Home)),
                (Some("34"), Some(MatchEventType::YellowCard), Some(Side::Away)),
                (Some("46"), Some(MatchEventType::Substitute), Some(Side::Home)),
                (Some("78"), Some(MatchEventType::Goal), Some(Side::Away)),
                (Some("90+"), None, Some(Side::Home)),
            ]
        );
    }

    #[test]
    fn test_event_players() {
        let details = parse_match_details(MATCH_HTML);
        assert_eq!(
            details.events[0].player,
            player("Max Mustermann", "02LK0M6Q5G000000VV0AG80NVV8OQVTB")
        );
        // Literal names are taken as they are.
        assert_eq!(
            details.events[1].player,
            Some(PlayerRef {
                name: Some("Leon Wagner".to_string()),
                external_id: Some("00ES8GNAVO00002UVV0AG08LVUPGND5I".to_string()),
                profile_url: Some(
                    "https://www.fussball.de/userprofil/-/userid/00ES8GNAVO00002UVV0AG08LVUPGND5I"
                        .to_string()
                ),
            })
        );
        assert_eq!(details.events[1].incoming_player, None);
    }

    #[test]
    fn test_substitution() {
        let details = parse_match_details(MATCH_HTML);
        let substitution = &details.events[2];
        assert_eq!(substitution.player, None);
        assert_eq!(
            substitution.incoming_player,
            player("Jonas Müller", "02LK0M7A1C000000VV0AG80NVV8OQVTB")
        );
        assert_eq!(
            substitution.outgoing_player,
            player("Tim Weiß", "02LK0M7K9O000000VV0AG80NVV8OQVTB")
        );
        assert_eq!(substitution.players().count(), 2);
    }

    #[test]
    fn test_match_id_ignores_other_numeric_rows() {
        let row = |label: &str, value: &str| {
            format!(
                "<div class=\"row\"><div class=\"column-left\">{label}:</div>\
                 <div class=\"column-right\">{value}</div></div>"
            )
        };
        let spiel_first = format!(
            "<div class=\"match-info\">{}{}{}</div>",
            row("Staffel-ID", "730090"),
            row("Spiel", "730090003"),
            row("Spieltag", "3"),
        );
        let spieltag_first = format!(
            "<div class=\"match-info\">{}{}</div>",
            row("Spieltag", "3"),
            row("Spiel", "730090003"),
        );
        for html in [spiel_first, spieltag_first] {
            let details = parse_match_details(&html);
            assert_eq!(
                details.external_ids.match_id.as_deref(),
                Some("730090003")
            );
        }
    }

    #[test]
    fn test_substitution_with_single_link() {
        let details = parse_match_details(
            "<div class=\"match-course\"><div class=\"row-event event-right\">\
             <div class=\"column-time\">61'</div>\
             <div class=\"column-event\"><i class=\"icon-substitute\"></i></div>\
             <div class=\"column-player\"><div class=\"substitute\">\
             <a href=\"/spielerprofil/-/player-id/02LK0M8AAA000000VV0AG80NVV8OQVTB\">Paul Becker</a>\
             </div></div></div></div>",
        );
        let event = &details.events[0];
        assert_eq!(event.side, Some(Side::Away));
        assert_eq!(
            event.incoming_player.as_ref().and_then(|p| p.name.as_deref()),
            Some("Paul Becker")
        );
        assert_eq!(event.outgoing_player, None);
    }

    #[test]
    fn test_empty_page() {
        let details = parse_match_details("");
        assert_eq!(details, MatchDetails::default());
        assert_eq!(details.date, None);
    }

    #[test]
    fn test_invalid_date_is_dropped() {
        let details = parse_match_details(
            "<div class=\"stage-header\"><span class=\"date\">Sonntag / 13:00 Uhr</span>\
             <span itemprop=\"startDate\" content=\"2025-13-45\"></span></div>",
        );
        assert_eq!(details.date, None);
        assert_eq!(details.kickoff_time.as_deref(), Some("13:00"));
    }

    #[test]
    fn test_literal_score_without_glyphs() {
        let details = parse_match_details(
            "<div class=\"end-result\"><span class=\"score-left\">3</span>\
             <span class=\"colon\">:</span><span class=\"score-right\">2</span></div>",
        );
        assert_eq!(details.final_score.as_deref(), Some("3:2"));
        assert_eq!(details.half_time_score, None);
    }
}

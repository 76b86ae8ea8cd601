use itertools::Itertools;
use scraper::{ElementRef, Html, Selector};
use tracing::{debug, instrument, warn};

use crate::config::absolute_url;
use crate::error::Result;
use crate::fussball_scraper::{
    self, element_text, labelled_rows, select_href, select_text, SITE_ORIGIN,
};
use crate::model::{ClubCandidate, ClubProfile};

#[instrument(skip(client))]
pub(crate) async fn search_clubs(
    client: &reqwest::Client,
    url: &str,
    origin: &str,
) -> Result<Vec<ClubCandidate>> {
    let body = fussball_scraper::get_page(client, url).await?;
    let clubs = parse_search(&Html::parse_document(&body), origin)?;
    debug!(count = clubs.len(), "parsed club search");
    Ok(clubs)
}

#[instrument(skip(client))]
pub(crate) async fn get_club_profile(
    client: &reqwest::Client,
    url: &str,
    external_club_id: &str,
) -> Result<ClubProfile> {
    let body = fussball_scraper::get_page(client, url).await?;
    let profile = parse_profile(&Html::parse_document(&body), external_club_id, url)?;
    debug!(name = %profile.name, "parsed club profile");
    Ok(profile)
}

/// Parse the club tab of a search results page.
pub fn parse_club_search(html: &str) -> Vec<ClubCandidate> {
    parse_search(&Html::parse_document(html), SITE_ORIGIN).unwrap_or_else(|e| {
        warn!(error = %e, "failed to parse club search");
        vec![]
    })
}

/// Parse a club profile page. Facts the page does not list stay empty.
pub fn parse_club_profile(html: &str, external_club_id: &str, source_url: &str) -> ClubProfile {
    parse_profile(&Html::parse_document(html), external_club_id, source_url).unwrap_or_else(|e| {
        warn!(error = %e, "failed to parse club profile");
        ClubProfile {
            external_club_id: external_club_id.to_string(),
            source_url: source_url.to_string(),
            ..ClubProfile::default()
        }
    })
}

pub(crate) fn parse_search(document: &Html, origin: &str) -> Result<Vec<ClubCandidate>> {
    let hit_selector = Selector::parse("#clublist a[href]")?;
    let name_selector = Selector::parse(".name")?;
    let location_selector = Selector::parse(".sub")?;

    Ok(document
        .select(&hit_selector)
        .filter_map(|hit| {
            let href = hit.value().attr("href")?.trim();
            let name = select_text(&hit, &name_selector).or_else(|| element_text(&hit))?;
            Some(ClubCandidate {
                name,
                link: absolute_url(origin, href),
                location_text: select_text(&hit, &location_selector).unwrap_or_default(),
                external_club_id: fussball_scraper::entity_id(href),
            })
        })
        .collect())
}

pub(crate) fn parse_profile(
    document: &Html,
    external_club_id: &str,
    source_url: &str,
) -> Result<ClubProfile> {
    let root = document.root_element();
    let mut profile = ClubProfile {
        external_club_id: external_club_id.to_string(),
        source_url: source_url.to_string(),
        ..ClubProfile::default()
    };

    let heading_selector = Selector::parse("#club-profile :is(h1, h2, h3)")?;
    profile.name = select_text(&root, &heading_selector).unwrap_or_default();

    let row_selector = Selector::parse(".factfile-data .row")?;
    let link_selector = Selector::parse("a[href]")?;
    for (label, value) in labelled_rows(&root, &row_selector)? {
        if label.contains("Gründungsjahr") {
            profile.founding_year = cell_lines(&value);
        } else if label.contains("Vereinsfarben") {
            profile.colors_text = cell_lines(&value);
        } else if label.contains("Adresse") {
            profile.address_text = cell_lines(&value);
        } else if label.contains("Ansprechpartner") {
            profile.contact_person_text = cell_lines(&value);
        } else if ["Website", "Homepage", "Internet"]
            .iter()
            .any(|key| label.contains(key))
        {
            profile.website_url = select_href(&value, &link_selector)
                .map(str::to_string)
                .unwrap_or_else(|| cell_lines(&value));
        }
    }

    Ok(profile)
}

/// Text lines of a fact cell (split by `<br>` and child elements), joined by `, `.
fn cell_lines(cell: &ElementRef) -> String {
    cell.text()
        .map(fussball_scraper::normalize_ws)
        .filter(|line| !line.is_empty())
        .join(", ")
}

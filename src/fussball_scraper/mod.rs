pub(crate) mod clubs;
pub(crate) mod fixtures;
pub(crate) mod match_detail;

use std::sync::LazyLock;

use ::scraper::{ElementRef, Selector};
use itertools::Itertools;
use regex::Regex;
use tracing::debug;

use crate::error::{FussballError, Result};

/// Origin used to resolve relative links when no client config is involved.
pub(crate) const SITE_ORIGIN: &str = "https://www.fussball.de";

static RE_TEAM_ID: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"/team-id/([0-9A-Za-z]+)(?:[/#?]|$)").expect("invalid regex: team id")
});
static RE_MATCH_ID: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"/spiel/([0-9A-Za-z]+)(?:[/#?]|$)").expect("invalid regex: match id")
});
static RE_ENTITY_ID: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"/id/([0-9A-Za-z]+)(?:[/#?]|$)").expect("invalid regex: entity id")
});
static RE_PLAYER_ID: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"/(?:player-id|userid)/([0-9A-Za-z]+)(?:[/#?]|$)")
        .expect("invalid regex: player id")
});
static RE_TIME: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\b(\d{2}:\d{2})\b").expect("invalid regex: time"));

/// Fetch a URL and return the response body.
pub(crate) async fn get_page(client: &reqwest::Client, url: &str) -> Result<String> {
    debug!(url, "fetching page");

    let response = client.get(url).send().await.map_err(|e| FussballError::Http {
        url: url.to_owned(),
        source: e,
    })?;

    let status = response.status();
    if !status.is_success() {
        return Err(FussballError::UnexpectedStatus {
            url: url.to_owned(),
            status,
        });
    }

    response.text().await.map_err(|e| FussballError::ResponseBody {
        url: url.to_owned(),
        source: e,
    })
}

/// Extract whitespace-normalized text content from the first element matching
/// `selector` inside `element`. Returns `None` if nothing matches or the text
/// is empty.
pub(crate) fn select_text(element: &ElementRef, selector: &Selector) -> Option<String> {
    element.select(selector).next().and_then(|e| element_text(&e))
}

/// All text below `element`, whitespace-normalized. `None` if empty.
pub(crate) fn element_text(element: &ElementRef) -> Option<String> {
    let text = normalize_ws(&element.text().collect::<String>());
    (!text.is_empty()).then_some(text)
}

/// The `href` of the first element matching `selector` inside `element`.
pub(crate) fn select_href<'a>(element: &ElementRef<'a>, selector: &Selector) -> Option<&'a str> {
    element
        .select(selector)
        .find_map(|e| e.value().attr("href"))
        .map(str::trim)
        .filter(|href| !href.is_empty())
}

pub(crate) fn normalize_ws(text: &str) -> String {
    text.split_whitespace().join(" ")
}

/// Label/value pairs from two-column fact rows.
///
/// Labels are normalized text with a trailing colon removed; the value cell is
/// returned as an element so callers can look for links inside it.
pub(crate) fn labelled_rows<'a>(
    root: &ElementRef<'a>,
    row_selector: &Selector,
) -> Result<Vec<(String, ElementRef<'a>)>> {
    let label_selector = Selector::parse(".column-left, .label")?;
    let value_selector = Selector::parse(".column-right, .value")?;
    Ok(root
        .select(row_selector)
        .filter_map(|row| {
            let label = select_text(&row, &label_selector)?;
            let value = row.select(&value_selector).next()?;
            Some((label.trim_end_matches(':').trim().to_string(), value))
        })
        .collect())
}

/// First `HH:MM` in `text`.
pub(crate) fn find_time(text: &str) -> Option<String> {
    capture(&RE_TIME, text)
}

/// Last match wins: slugs come before the `/-/` separator, ids after it.
fn capture(re: &Regex, href: &str) -> Option<String> {
    re.captures_iter(href).last().map(|caps| caps[1].to_string())
}

/// External team id from a `.../team-id/<ID>` link.
pub(crate) fn team_id(href: &str) -> Option<String> {
    capture(&RE_TEAM_ID, href)
}

/// External match id from a `.../spiel/<ID>` link.
pub(crate) fn match_id(href: &str) -> Option<String> {
    capture(&RE_MATCH_ID, href)
}

/// External club (or logo) id from a `.../id/<ID>` link.
pub(crate) fn entity_id(href: &str) -> Option<String> {
    capture(&RE_ENTITY_ID, href)
}

/// External player id from a `.../player-id/<ID>` or `.../userid/<ID>` link.
pub(crate) fn player_id(href: &str) -> Option<String> {
    capture(&RE_PLAYER_ID, href)
}

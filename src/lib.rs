//! Scraper for amateur football data published on fussball.de.
//!
//! The pure parsers ([`parse_upcoming_fixtures`], [`parse_match_details`],
//! [`parse_club_search`], [`parse_club_profile`]) turn already fetched HTML
//! into plain records. [`FussballClient`] fetches the pages and degrades to
//! empty results when the site cannot be reached.

pub mod client;
pub mod config;
pub mod error;
mod fussball_scraper;
mod glyphs;
pub mod model;

pub use client::FussballClient;
pub use config::ClientConfig;
pub use error::{FussballError, Result};
pub use fussball_scraper::clubs::{parse_club_profile, parse_club_search};
pub use fussball_scraper::fixtures::parse_upcoming_fixtures;
pub use fussball_scraper::match_detail::parse_match_details;
pub use model::*;

//! Reversal of the site's text obfuscation.
//!
//! Player names and scores are rendered with custom web fonts in which every
//! character is drawn by a private-use codepoint. The markup therefore only
//! carries those codepoints; the tables here map them back.

mod codepoint;
mod font_map;
mod score;

use tracing::trace;

pub(crate) use score::{normalize_half_time, normalize_score};

/// Decode an obfuscated name fragment (the inner HTML of the name span).
///
/// Entities are resolved first, then every codepoint is looked up in the name
/// font table. Codepoints without a mapping contribute nothing.
pub(crate) fn decode_obfuscated(fragment: &str) -> String {
    let unescaped = html_escape::decode_html_entities(fragment);
    let decoded: String = codepoint::codepoints(unescaped.as_bytes())
        .filter_map(|cp| {
            let glyph = font_map::lookup(cp);
            if glyph.is_none() {
                trace!(glyph = %font_map::glyph_key(cp), "unmapped glyph");
            }
            glyph
        })
        .collect();
    decoded.trim().to_string()
}

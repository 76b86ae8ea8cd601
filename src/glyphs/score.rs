use std::collections::HashMap;
use std::sync::LazyLock;

use regex::Regex;

/// Digit glyphs of the scoreboard font.
const SCORE_GLYPHS: &[(char, char)] = &[
    ('\u{E94B}', '0'),
    ('\u{E91A}', '1'),
    ('\u{E9D2}', '2'),
    ('\u{E9A3}', '3'),
    ('\u{E94F}', '4'),
    ('\u{E9AE}', '5'),
    ('\u{E920}', '6'),
    ('\u{E950}', '7'),
    ('\u{E90F}', '8'),
    ('\u{E9DA}', '9'),
];

static DIGIT_MAP: LazyLock<HashMap<char, char>> =
    LazyLock::new(|| SCORE_GLYPHS.iter().copied().collect());

static RE_SCORE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(\d+)\s*:\s*(\d+)").expect("invalid regex: score"));

static RE_HALF_TIME: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\[\s*([^\[\]:]+?)\s*:\s*([^\[\]:]+?)\s*\]").expect("invalid regex: half time")
});

/// Digits drawn by `text`, if every visible character is a digit glyph.
fn resolve_digits(text: &str) -> Option<String> {
    let text = text.trim();
    if text.is_empty() {
        return None;
    }
    text.chars()
        .filter(|c| !c.is_whitespace())
        .map(|c| DIGIT_MAP.get(&c).copied())
        .collect()
}

/// Replace every digit glyph with its digit and keep everything else.
fn translate_glyphs(text: &str) -> String {
    text.chars()
        .map(|c| DIGIT_MAP.get(&c).copied().unwrap_or(c))
        .collect()
}

/// Final score as `"A:B"`.
///
/// Tries the glyph table on the two score cells, then a digit pair in the raw
/// scoreboard text, then the raw text itself (e.g. `"Absage"`).
pub(crate) fn normalize_score(left: Option<&str>, right: Option<&str>, raw: &str) -> Option<String> {
    if let (Some(left), Some(right)) = (left.and_then(resolve_digits), right.and_then(resolve_digits)) {
        return Some(format!("{left}:{right}"));
    }
    if let Some(caps) = RE_SCORE.captures(raw) {
        return Some(format!("{}:{}", &caps[1], &caps[2]));
    }
    let raw = raw.trim();
    (!raw.is_empty()).then(|| raw.to_string())
}

/// Half-time score from a bracketed `[A : B]` notice, as `"A:B"`.
pub(crate) fn normalize_half_time(raw: &str) -> Option<String> {
    let translated = translate_glyphs(raw);
    let caps = RE_HALF_TIME.captures(&translated)?;
    let strip = |s: &str| s.chars().filter(|c| !c.is_whitespace()).collect::<String>();
    Some(format!("{}:{}", strip(&caps[1]), strip(&caps[2])))
}

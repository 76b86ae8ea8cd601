use std::collections::HashMap;
use std::sync::LazyLock;

/// Private-use codepoints of the site's name font and the letters they draw.
///
/// Built from the web font served alongside obfuscated player names. Only
/// characters that occur in player names are covered.
const NAME_GLYPHS: &[(u32, char)] = &[
    (0xE601, 'f'),
    (0xE602, 'Z'),
    (0xE606, 'B'),
    (0xE607, 'X'),
    (0xE609, '7'),
    (0xE60C, 'C'),
    (0xE611, 'Y'),
    (0xE616, 'x'),
    (0xE618, 'a'),
    (0xE619, 'w'),
    (0xE61D, 'D'),
    (0xE623, 'ß'),
    (0xE624, 'g'),
    (0xE626, 'J'),
    (0xE636, 'L'),
    (0xE637, '1'),
    (0xE63A, '0'),
    (0xE63B, 'M'),
    (0xE63F, '2'),
    (0xE644, 'K'),
    (0xE648, 'e'),
    (0xE649, 'T'),
    (0xE64B, 'b'),
    (0xE64C, '-'),
    (0xE64E, 'S'),
    (0xE653, '6'),
    (0xE654, 'd'),
    (0xE65E, '3'),
    (0xE65F, 'W'),
    (0xE668, 'p'),
    (0xE66B, 'G'),
    (0xE66F, '5'),
    (0xE671, 'U'),
    (0xE674, 'v'),
    (0xE675, ' '),
    (0xE677, 'm'),
    (0xE678, 'r'),
    (0xE689, 'h'),
    (0xE68B, '4'),
    (0xE690, 'E'),
    (0xE691, '.'),
    (0xE695, 'V'),
    (0xE69B, '9'),
    (0xE6A4, 'P'),
    (0xE6A9, 'o'),
    (0xE6AB, 'Ö'),
    (0xE6AC, 'ü'),
    (0xE6AF, 'u'),
    (0xE6B1, '8'),
    (0xE6B2, 'Ü'),
    (0xE6B4, 'O'),
    (0xE6B6, 'F'),
    (0xE6B9, 'I'),
    (0xE6BA, 'k'),
    (0xE6BB, 'y'),
    (0xE6C0, 'i'),
    (0xE6C7, 'H'),
    (0xE6C8, 'A'),
    (0xE6C9, '\''),
    (0xE6CC, 's'),
    (0xE6D2, 'j'),
    (0xE6D5, 'z'),
    (0xE6DA, 'Ä'),
    (0xE6E1, 'Q'),
    (0xE6E6, 'R'),
    (0xE6E7, 't'),
    (0xE6EE, 'N'),
    (0xE6F0, 'c'),
    (0xE6F2, 'q'),
    (0xE6F3, 'n'),
    (0xE6F6, 'l'),
    (0xE6F8, 'ä'),
    (0xE6FA, 'ö'),
];

static GLYPH_MAP: LazyLock<HashMap<u32, char>> =
    LazyLock::new(|| NAME_GLYPHS.iter().copied().collect());

/// The literal character a font glyph stands for.
pub(crate) fn lookup(codepoint: u32) -> Option<char> {
    GLYPH_MAP.get(&codepoint).copied()
}

/// `\uXXXX` notation of a codepoint, as used in font tables and logs.
pub(crate) fn glyph_key(codepoint: u32) -> String {
    format!("\\u{codepoint:04X}")
}

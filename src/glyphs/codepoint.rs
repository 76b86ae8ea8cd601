/// Iterator over the codepoints encoded in a UTF-8 style byte sequence.
///
/// Unlike `str::chars` this works on arbitrary bytes. Stray continuation
/// bytes, invalid lead bytes and truncated sequences are skipped one byte at
/// a time, so decoding never fails and resynchronises on the next lead byte.
/// Overlong forms are not rejected.
pub(crate) struct Codepoints<'a> {
    bytes: &'a [u8],
    pos: usize,
}

pub(crate) fn codepoints(bytes: &[u8]) -> Codepoints<'_> {
    Codepoints { bytes, pos: 0 }
}

impl Iterator for Codepoints<'_> {
    type Item = u32;

    fn next(&mut self) -> Option<u32> {
        loop {
            let lead = *self.bytes.get(self.pos)?;
            let (len, initial) = match lead {
                0x00..=0x7F => (1, u32::from(lead)),
                0xC0..=0xDF => (2, u32::from(lead & 0x1F)),
                0xE0..=0xEF => (3, u32::from(lead & 0x0F)),
                0xF0..=0xF7 => (4, u32::from(lead & 0x07)),
                _ => {
                    self.pos += 1;
                    continue;
                }
            };

            match self.bytes.get(self.pos + 1..self.pos + len) {
                Some(tail) if tail.iter().all(|b| b & 0xC0 == 0x80) => {
                    self.pos += len;
                    return Some(
                        tail.iter()
                            .fold(initial, |cp, b| (cp << 6) | u32::from(b & 0x3F)),
                    );
                }
                _ => self.pos += 1,
            }
        }
    }
}

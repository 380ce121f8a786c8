use std::path::Path;

use tracing::{debug, info};

use crate::charset::resolve_charset;
use crate::file_io::{read_file, write_file};
use crate::{GettextError, GettextResult};

/// `\u` plus four hex digits.
const ESCAPE_LEN: usize = 6;

const HIGH_SURROGATES: std::ops::RangeInclusive<u16> = 0xd800..=0xdbff;
const LOW_SURROGATES: std::ops::RangeInclusive<u16> = 0xdc00..=0xdfff;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Unescaped {
    pub text: String,
    /// Number of `\uXXXX` sequences decoded.
    pub escapes: usize,
}

/// Replaces every `\uXXXX` in `input` with the character it encodes.
///
/// A backslash not followed by `u` is copied as is. Surrogate pairs written as
/// two consecutive escapes are joined into one character. Offsets in errors
/// count characters, not bytes.
pub fn unescape_unicode(input: &str) -> GettextResult<Unescaped> {
    let chars: Vec<char> = input.chars().collect();
    let mut text = String::with_capacity(input.len());
    let mut escapes = 0usize;
    let mut idx = 0usize;

    while idx < chars.len() {
        if !starts_escape(&chars, idx) {
            text.push(chars[idx]);
            idx += 1;
            continue;
        }

        let offset = idx;
        let unit = read_code_unit(&chars, offset)?;
        idx += ESCAPE_LEN;
        escapes += 1;

        let code = if HIGH_SURROGATES.contains(&unit) {
            let low = if starts_escape(&chars, idx) {
                Some(read_code_unit(&chars, idx)?)
            } else {
                None
            };
            match low {
                Some(low) if LOW_SURROGATES.contains(&low) => {
                    idx += ESCAPE_LEN;
                    escapes += 1;
                    0x10000 + ((u32::from(unit) - 0xd800) << 10) + (u32::from(low) - 0xdc00)
                }
                _ => return Err(GettextError::UnpairedSurrogate { offset, code: unit }),
            }
        } else {
            u32::from(unit)
        };

        let ch = char::from_u32(code)
            .ok_or(GettextError::UnpairedSurrogate { offset, code: unit })?;
        text.push(ch);
    }

    Ok(Unescaped { text, escapes })
}

fn starts_escape(chars: &[char], idx: usize) -> bool {
    chars.get(idx) == Some(&'\\') && chars.get(idx + 1) == Some(&'u')
}

fn read_code_unit(chars: &[char], offset: usize) -> GettextResult<u16> {
    let digits = chars
        .get(offset + 2..offset + ESCAPE_LEN)
        .ok_or(GettextError::InvalidEscape {
            offset,
            reason: "expected four hex digits after \\u",
        })?;
    digits.iter().try_fold(0u16, |acc, ch| {
        ch.to_digit(16)
            .map(|digit| (acc << 4) | digit as u16)
            .ok_or(GettextError::InvalidEscape {
                offset,
                reason: "non-hex digit in \\u escape",
            })
    })
}

/// Decodes `\uXXXX` escapes in the file at `path`, reading and writing it in
/// the encoding named by `encoding`.
///
/// Returns the number of escapes decoded. A file without escapes is not
/// rewritten.
pub fn unescape_unicode_file(path: &Path, encoding: &str) -> GettextResult<usize> {
    let charset = resolve_charset(encoding)?;
    info!(file = %path.display(), encoding = charset.name(), "unescaping unicode");
    let bytes = read_file(path)?;
    let contents = charset.decode(&bytes, path)?;
    let unescaped = unescape_unicode(&contents)?;
    if unescaped.escapes == 0 {
        debug!(file = %path.display(), "no escape sequences");
        return Ok(0);
    }
    let encoded = charset.encode(&unescaped.text, path)?;
    write_file(path, &encoded)?;
    debug!(escapes = unescaped.escapes, "unicode escapes decoded");
    Ok(unescaped.escapes)
}

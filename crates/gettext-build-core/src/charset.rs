use std::path::Path;

use encoding_rs::{Encoding, UTF_16BE, UTF_16LE};

use crate::{GettextError, GettextResult};

/// Labels meaning the real ISO-8859-1, which WHATWG folds into windows-1252.
const LATIN1_LABELS: [&str; 12] = [
    "iso-8859-1",
    "iso8859-1",
    "iso_8859-1",
    "iso_8859_1",
    "iso88591",
    "8859_1",
    "latin1",
    "l1",
    "iso-ir-100",
    "cp819",
    "ibm819",
    "csisolatin1",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Backend {
    /// One byte per character, U+0000 to U+00FF.
    Latin1,
    Whatwg(&'static Encoding),
}

/// A declared text encoding, resolved from a label such as `utf-8` or
/// `ISO-8859-1`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Charset {
    backend: Backend,
}

pub fn resolve_charset(label: &str) -> GettextResult<Charset> {
    let trimmed = label.trim();
    if LATIN1_LABELS
        .iter()
        .any(|alias| trimmed.eq_ignore_ascii_case(alias))
    {
        return Ok(Charset {
            backend: Backend::Latin1,
        });
    }

    let encoding = Encoding::for_label(trimmed.as_bytes())
        .ok_or_else(|| GettextError::UnknownEncoding(label.to_string()))?;
    let charset = Charset {
        backend: Backend::Whatwg(encoding),
    };
    if !charset.is_utf16() && encoding.output_encoding() != encoding {
        return Err(GettextError::UnsupportedEncoding(encoding.name()));
    }
    Ok(charset)
}

impl Charset {
    pub fn name(&self) -> &'static str {
        match self.backend {
            Backend::Latin1 => "ISO-8859-1",
            Backend::Whatwg(encoding) => encoding.name(),
        }
    }

    fn is_utf16(&self) -> bool {
        matches!(self.backend, Backend::Whatwg(encoding) if encoding == UTF_16LE || encoding == UTF_16BE)
    }

    /// Decodes without replacement characters; a byte order mark is kept as
    /// U+FEFF so re-encoding reproduces it.
    pub fn decode(&self, bytes: &[u8], path: &Path) -> GettextResult<String> {
        let encoding = match self.backend {
            Backend::Latin1 => return Ok(bytes.iter().map(|&byte| char::from(byte)).collect()),
            Backend::Whatwg(encoding) => encoding,
        };
        encoding
            .decode_without_bom_handling_and_without_replacement(bytes)
            .map(|text| text.into_owned())
            .ok_or_else(|| GettextError::Malformed {
                path: path.to_path_buf(),
                encoding: self.name(),
            })
    }

    pub fn encode(&self, text: &str, path: &Path) -> GettextResult<Vec<u8>> {
        let encoding = match self.backend {
            Backend::Latin1 => return self.encode_latin1(text, path),
            Backend::Whatwg(encoding) => encoding,
        };
        if encoding == UTF_16LE {
            return Ok(text.encode_utf16().flat_map(u16::to_le_bytes).collect());
        }
        if encoding == UTF_16BE {
            return Ok(text.encode_utf16().flat_map(u16::to_be_bytes).collect());
        }

        let (bytes, _, had_unmappable) = encoding.encode(text);
        if had_unmappable {
            let mut buf = [0u8; 4];
            let code = text
                .chars()
                .find(|ch| encoding.encode(ch.encode_utf8(&mut buf)).2)
                .map_or(0, u32::from);
            return Err(self.unmappable(path, code));
        }
        Ok(bytes.into_owned())
    }

    fn encode_latin1(&self, text: &str, path: &Path) -> GettextResult<Vec<u8>> {
        text.chars()
            .map(|ch| u8::try_from(ch).map_err(|_| self.unmappable(path, u32::from(ch))))
            .collect()
    }

    fn unmappable(&self, path: &Path, code: u32) -> GettextError {
        GettextError::Unmappable {
            path: path.to_path_buf(),
            encoding: self.name(),
            code,
        }
    }
}

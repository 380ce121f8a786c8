use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;

#[derive(Debug, Error)]
pub enum GettextError {
    /// Locale tag without 1 to 3 `_`-separated segments.
    #[error("invalid locale format: {0:?}")]
    InvalidLocale(String),
    /// `\u` not followed by four hex digits.
    #[error("invalid unicode escape at offset {offset}: {reason}")]
    InvalidEscape { offset: usize, reason: &'static str },
    /// Surrogate escape without its other half.
    #[error("unpaired surrogate \\u{code:04x} at offset {offset}")]
    UnpairedSurrogate { offset: usize, code: u16 },
    /// Empty name passed to the header stripper.
    #[error("header field name is empty")]
    EmptyFieldName,
    /// Header field found but no `"` follows it.
    #[error("{field} header in {} has no closing quote", .path.display())]
    UnterminatedField { path: PathBuf, field: String },
    /// Label no known encoding answers to.
    #[error("unknown encoding {0:?}")]
    UnknownEncoding(String),
    /// Decode-only encoding such as `replacement`.
    #[error("encoding {0} cannot be written")]
    UnsupportedEncoding(&'static str),
    /// File bytes are not valid in the declared encoding.
    #[error("{} is not valid {encoding}", .path.display())]
    Malformed { path: PathBuf, encoding: &'static str },
    /// Decoded text holds a character the declared encoding lacks.
    #[error("{} contains U+{code:04X} which cannot be encoded as {encoding}", .path.display())]
    Unmappable {
        path: PathBuf,
        encoding: &'static str,
        code: u32,
    },
    /// File could not be read.
    #[error("unable to read {}: {source}", .path.display())]
    Read { path: PathBuf, source: io::Error },
    /// File could not be replaced.
    #[error("unable to write {}: {source}", .path.display())]
    Write { path: PathBuf, source: io::Error },
}

pub type GettextResult<T> = Result<T, GettextError>;

impl GettextError {
    /// Malformed input: a bad locale tag, escape, encoding, or header layout.
    pub fn is_invalid_format(&self) -> bool {
        !self.is_io()
    }

    pub fn is_io(&self) -> bool {
        matches!(self, GettextError::Read { .. } | GettextError::Write { .. })
    }

    /// The file the failure is attached to, when there is one.
    pub fn path(&self) -> Option<&Path> {
        match self {
            GettextError::UnterminatedField { path, .. }
            | GettextError::Malformed { path, .. }
            | GettextError::Unmappable { path, .. }
            | GettextError::Read { path, .. }
            | GettextError::Write { path, .. } => Some(path),
            _ => None,
        }
    }
}

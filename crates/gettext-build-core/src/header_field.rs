use std::ops::Range;
use std::path::Path;

use tracing::{debug, info, warn};

use crate::file_io::{read_file, write_file};
use crate::{GettextError, GettextResult};

/// Header written by `xgettext` and `msgmerge` with the wall-clock time of the
/// run; removing it keeps generated catalogs reproducible.
pub const POT_CREATION_DATE: &str = "POT-Creation-Date";

/// Where a header field sits in a catalog's raw bytes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldLocation {
    /// `start` is the first byte of `Name:`, `end` the index of the `"` that
    /// closes the header line.
    Span(Range<usize>),
    Unterminated { start: usize },
    Absent,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StripOutcome {
    Removed(Range<usize>),
    NotFound,
}

/// Scans `contents` for the first `<field>:` and the next `"` after it.
///
/// Catalogs declare their charset inside the header being edited, so the scan
/// works on bytes. The field name is matched by its UTF-8 bytes, which is
/// exact for the ASCII names gettext uses.
pub fn locate_header_field(contents: &[u8], field: &str) -> FieldLocation {
    let Some(start) = find_field_start(contents, field.as_bytes()) else {
        return FieldLocation::Absent;
    };
    let value_start = start + field.len() + 1;
    match contents[value_start..].iter().position(|&byte| byte == b'"') {
        Some(offset) => FieldLocation::Span(start..value_start + offset),
        None => FieldLocation::Unterminated { start },
    }
}

fn find_field_start(contents: &[u8], field: &[u8]) -> Option<usize> {
    let needle_len = field.len() + 1;
    if contents.len() < needle_len {
        return None;
    }
    (0..=contents.len() - needle_len).find(|&idx| {
        contents[idx..idx + field.len()] == *field && contents[idx + field.len()] == b':'
    })
}

/// Removes the first `<field>: ...` header value from the catalog at `path`,
/// keeping the closing quote and every other byte as it was.
///
/// A file without the field is left untouched and reported as
/// [`StripOutcome::NotFound`], so running this twice is the same as running
/// it once.
pub fn strip_header_field(path: &Path, field: &str) -> GettextResult<StripOutcome> {
    if field.is_empty() {
        return Err(GettextError::EmptyFieldName);
    }
    info!(file = %path.display(), field, "removing header field");
    let contents = read_file(path)?;
    match locate_header_field(&contents, field) {
        FieldLocation::Span(span) => {
            debug!(start = span.start, end = span.end, "header field located");
            let mut stripped = Vec::with_capacity(contents.len() - span.len());
            stripped.extend_from_slice(&contents[..span.start]);
            stripped.extend_from_slice(&contents[span.end..]);
            write_file(path, &stripped)?;
            Ok(StripOutcome::Removed(span))
        }
        FieldLocation::Unterminated { start } => {
            debug!(start, "header field has no closing quote");
            Err(GettextError::UnterminatedField {
                path: path.to_path_buf(),
                field: field.to_string(),
            })
        }
        FieldLocation::Absent => {
            warn!(file = %path.display(), field, "header field not found");
            Ok(StripOutcome::NotFound)
        }
    }
}

pub fn remove_pot_creation_date(path: &Path) -> GettextResult<StripOutcome> {
    strip_header_field(path, POT_CREATION_DATE)
}

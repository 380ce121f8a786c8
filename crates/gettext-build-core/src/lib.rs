#![forbid(unsafe_code)]

mod charset;
mod error;
mod file_io;
mod header_field;
mod locale;
mod unescape;

pub use charset::{Charset, resolve_charset};
pub use error::{GettextError, GettextResult};
pub use file_io::{read_file, write_file};
pub use header_field::{
    FieldLocation, POT_CREATION_DATE, StripOutcome, locate_header_field, remove_pot_creation_date,
    strip_header_field,
};
pub use locale::{legacy_bundle_name, legacy_locale, locale_from_catalog_path};
pub use unescape::{Unescaped, unescape_unicode, unescape_unicode_file};

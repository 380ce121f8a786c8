use std::path::Path;

use crate::{GettextError, GettextResult};

const MAX_SEGMENTS: usize = 3;

/// ISO language codes the Java runtime still reports under their withdrawn names.
const LEGACY_LANGUAGES: [(&str, &str); 3] = [("he", "iw"), ("yi", "ji"), ("id", "in")];

/// A `language[_region[_variant]]` tag split into its segments.
#[derive(Debug, Clone, PartialEq, Eq)]
struct LocaleTag {
    segments: Vec<String>,
}

impl LocaleTag {
    fn parse(input: &str) -> GettextResult<Self> {
        let mut segments: Vec<String> = input
            .split('_')
            .filter(|part| !part.is_empty())
            .map(str::to_string)
            .collect();
        if segments.is_empty() || segments.len() > MAX_SEGMENTS {
            return Err(GettextError::InvalidLocale(input.to_string()));
        }

        if segments.len() < MAX_SEGMENTS {
            if let Some(last) = segments.pop() {
                match last.split_once('@') {
                    Some((base, variant)) => {
                        segments.push(base.to_string());
                        if segments.len() == 1 {
                            segments.push(String::new());
                        }
                        segments.push(variant.to_string());
                    }
                    None => segments.push(last),
                }
            }
        }

        Ok(Self { segments })
    }

    fn into_legacy(mut self) -> Self {
        if let Some(language) = self.segments.first_mut() {
            if let Some((_, legacy)) = LEGACY_LANGUAGES
                .iter()
                .find(|(modern, _)| language.eq_ignore_ascii_case(modern))
            {
                *language = (*legacy).to_string();
            }
        }
        self
    }

    fn join(&self) -> String {
        self.segments.join("_")
    }
}

/// Converts a gettext locale name (`he_IL`, `sr@latin`, `de_DE@euro`) into the
/// identifier Java resource bundles are named after (`iw_IL`, `sr__latin`,
/// `de_DE_euro`).
///
/// Empty `_`-separated tokens are ignored; anything that leaves zero or more
/// than three segments is rejected.
pub fn legacy_locale(locale: &str) -> GettextResult<String> {
    Ok(LocaleTag::parse(locale)?.into_legacy().join())
}

/// Name of the resource bundle holding `locale`'s messages, e.g.
/// `Messages_iw_IL`.
pub fn legacy_bundle_name(base: &str, locale: &str) -> GettextResult<String> {
    let locale = legacy_locale(locale)?;
    Ok(format!("{base}_{locale}"))
}

/// The locale a catalog file is named for: `po/de_DE.po` gives `de_DE`.
pub fn locale_from_catalog_path(path: &Path) -> Option<&str> {
    path.file_stem()
        .and_then(|stem| stem.to_str())
        .filter(|stem| !stem.is_empty())
}

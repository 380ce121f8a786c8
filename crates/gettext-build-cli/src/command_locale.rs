use gettext_build_core::{GettextError, legacy_bundle_name, legacy_locale};
use thiserror::Error;
use tracing::debug;

#[derive(Debug, Error)]
pub enum LocaleCommandError {
    #[error(transparent)]
    Locale(#[from] GettextError),
}

#[derive(Debug, Clone)]
pub struct LocaleOptions {
    pub tags: Vec<String>,
    /// Print `<bundle>_<locale>` instead of the bare locale.
    pub bundle: Option<String>,
}

/// Normalizes each tag in order, stopping at the first invalid one.
pub fn run_locale(options: &LocaleOptions) -> Result<Vec<String>, LocaleCommandError> {
    let mut lines = Vec::with_capacity(options.tags.len());
    for tag in &options.tags {
        let line = match &options.bundle {
            Some(base) => legacy_bundle_name(base, tag)?,
            None => legacy_locale(tag)?,
        };
        debug!(tag = %tag, normalized = %line, "locale normalized");
        lines.push(line);
    }
    Ok(lines)
}

#[cfg(test)]
mod tests {
    use super::{LocaleCommandError, LocaleOptions, run_locale};
    use gettext_build_core::GettextError;

    #[test]
    fn normalizes_every_tag() {
        let options = LocaleOptions {
            tags: vec!["he_IL".to_string(), "en@euro".to_string(), "de".to_string()],
            bundle: None,
        };
        let lines = run_locale(&options).expect("run");
        assert_eq!(lines, vec!["iw_IL", "en__euro", "de"]);
    }

    #[test]
    fn prefixes_bundle_name() {
        let options = LocaleOptions {
            tags: vec!["yi".to_string()],
            bundle: Some("Messages".to_string()),
        };
        assert_eq!(run_locale(&options).expect("run"), vec!["Messages_ji"]);
    }

    #[test]
    fn stops_at_invalid_tag() {
        let options = LocaleOptions {
            tags: vec!["fr".to_string(), "a_b_c_d".to_string()],
            bundle: None,
        };
        let err = run_locale(&options).expect_err("invalid");
        assert!(matches!(
            err,
            LocaleCommandError::Locale(GettextError::InvalidLocale(_))
        ));
    }
}

use std::path::PathBuf;

use gettext_build_core::{GettextError, unescape_unicode_file};
use thiserror::Error;

use crate::config::CliConfig;
use crate::report::{FileResult, Report, ReportError, write_report};

#[derive(Debug, Error)]
pub enum UnescapeCommandError {
    #[error("{}: {source}", .path.display())]
    Unescape {
        path: PathBuf,
        source: GettextError,
    },
    #[error(transparent)]
    Report(#[from] ReportError),
}

#[derive(Debug, Clone)]
pub struct UnescapeOptions {
    pub files: Vec<PathBuf>,
    /// Overrides `encoding` from the config.
    pub encoding: Option<String>,
    /// Set by `--config`; the file must then exist.
    pub config_path: Option<PathBuf>,
    pub report_path: Option<PathBuf>,
}

pub fn run_unescape(
    options: &UnescapeOptions,
    config: &CliConfig,
) -> Result<Report, UnescapeCommandError> {
    let encoding = options.encoding.as_deref().unwrap_or(&config.encoding);

    let mut report = Report::new("unescape");
    for file in &options.files {
        let escapes =
            unescape_unicode_file(file, encoding).map_err(|source| UnescapeCommandError::Unescape {
                path: file.clone(),
                source,
            })?;
        report.push(file, FileResult::Unescaped { escapes });
    }

    if let Some(path) = &options.report_path {
        write_report(path, &report)?;
    }
    Ok(report)
}

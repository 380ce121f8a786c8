use std::path::PathBuf;

use gettext_build_core::{GettextError, POT_CREATION_DATE, StripOutcome, strip_header_field};
use thiserror::Error;
use tracing::info;

use crate::config::CliConfig;
use crate::report::{FileResult, Report, ReportError, write_report};

#[derive(Debug, Error)]
pub enum StripCommandError {
    #[error("{}: {source}", .path.display())]
    Strip {
        path: PathBuf,
        source: GettextError,
    },
    #[error(transparent)]
    Report(#[from] ReportError),
}

#[derive(Debug, Clone)]
pub struct StripOptions {
    pub files: Vec<PathBuf>,
    /// Overrides `header_field` from the config.
    pub field: Option<String>,
    /// Set by `--config`; the file must then exist.
    pub config_path: Option<PathBuf>,
    pub report_path: Option<PathBuf>,
}

pub fn run_strip(options: &StripOptions, config: &CliConfig) -> Result<Report, StripCommandError> {
    let field = options.field.as_deref().unwrap_or(&config.header_field);
    let keep = field == POT_CREATION_DATE && config.print_pot_creation_date;

    let mut report = Report::new("strip");
    for file in &options.files {
        if keep {
            info!(file = %file.display(), field, "keeping header field");
            report.push(file, FileResult::Skipped);
            continue;
        }
        let outcome = strip_header_field(file, field).map_err(|source| StripCommandError::Strip {
            path: file.clone(),
            source,
        })?;
        let result = match outcome {
            StripOutcome::Removed(span) => FileResult::Removed {
                start: span.start,
                end: span.end,
            },
            StripOutcome::NotFound => FileResult::NotFound,
        };
        report.push(file, result);
    }

    if let Some(path) = &options.report_path {
        write_report(path, &report)?;
    }
    Ok(report)
}

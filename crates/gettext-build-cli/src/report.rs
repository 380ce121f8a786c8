use std::fs;
use std::path::{Path, PathBuf};

use serde::Serialize;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ReportError {
    #[error("unable to write report {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Report {
    pub command: &'static str,
    pub files: Vec<FileReport>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FileReport {
    pub file: String,
    #[serde(flatten)]
    pub result: FileResult,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "action", rename_all = "snake_case")]
pub enum FileResult {
    Removed { start: usize, end: usize },
    NotFound,
    Skipped,
    Unescaped { escapes: usize },
}

impl Report {
    pub fn new(command: &'static str) -> Self {
        Self {
            command,
            files: Vec::new(),
        }
    }

    pub fn push(&mut self, file: &Path, result: FileResult) {
        self.files.push(FileReport {
            file: file.display().to_string(),
            result,
        });
    }
}

pub fn write_report(path: &Path, report: &Report) -> Result<(), ReportError> {
    let json = serde_json::to_string_pretty(report)?;
    fs::write(path, json).map_err(|source| ReportError::Io {
        path: path.to_path_buf(),
        source,
    })
}

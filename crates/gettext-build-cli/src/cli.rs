use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::command_locale::{LocaleCommandError, LocaleOptions, run_locale};
use crate::command_strip::{StripCommandError, StripOptions, run_strip};
use crate::command_unescape::{UnescapeCommandError, UnescapeOptions, run_unescape};
use crate::config::{CliConfig, DEFAULT_CONFIG_PATH, load_config, load_config_or_default};
use crate::error::ConfigError;
use crate::logging::{LoggingError, init_logging};

#[derive(Debug, Error)]
pub enum CliAppError {
    #[error("{0}")]
    Usage(String),
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error(transparent)]
    Logging(#[from] LoggingError),
    #[error(transparent)]
    Locale(#[from] LocaleCommandError),
    #[error(transparent)]
    Strip(#[from] StripCommandError),
    #[error(transparent)]
    Unescape(#[from] UnescapeCommandError),
}

#[derive(Debug, Clone)]
enum Command {
    Locale(LocaleOptions),
    Strip(StripOptions),
    Unescape(UnescapeOptions),
}

impl Command {
    /// The path passed with `--config`, if any.
    fn config_path(&self) -> Option<&Path> {
        match self {
            Command::Locale(_) => None,
            Command::Strip(options) => options.config_path.as_deref(),
            Command::Unescape(options) => options.config_path.as_deref(),
        }
    }
}

/// An explicit `--config` must exist; the default path is optional.
fn load_command_config(command: &Command) -> Result<CliConfig, CliAppError> {
    let config = match command.config_path() {
        Some(path) => load_config(path)?,
        None => load_config_or_default(Path::new(DEFAULT_CONFIG_PATH))?,
    };
    Ok(config)
}

pub fn run() -> Result<(), CliAppError> {
    let command = parse_command(std::env::args().skip(1).collect())?;
    let config = load_command_config(&command)?;
    init_logging(&config.log_level)?;
    execute(&command, &config)
}

fn execute(command: &Command, config: &CliConfig) -> Result<(), CliAppError> {
    match command {
        Command::Locale(options) => {
            for line in run_locale(options)? {
                println!("{line}");
            }
        }
        Command::Strip(options) => {
            run_strip(options, config)?;
        }
        Command::Unescape(options) => {
            run_unescape(options, config)?;
        }
    }
    Ok(())
}

fn parse_command(args: Vec<String>) -> Result<Command, CliAppError> {
    let mut args = args.into_iter();
    let command = args.next().ok_or_else(|| CliAppError::Usage(usage()))?;
    match command.as_str() {
        "locale" => Ok(Command::Locale(parse_locale_options(args.collect())?)),
        "strip" => Ok(Command::Strip(parse_strip_options(args.collect())?)),
        "unescape" => Ok(Command::Unescape(parse_unescape_options(args.collect())?)),
        _ => Err(CliAppError::Usage(usage())),
    }
}

fn parse_locale_options(args: Vec<String>) -> Result<LocaleOptions, CliAppError> {
    let mut tags = Vec::new();
    let mut bundle = None;
    let mut iter = args.into_iter();
    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "--bundle" => bundle = Some(next_value("--bundle", &mut iter)?),
            "--help" | "-h" => return Err(CliAppError::Usage(usage())),
            flag if flag.starts_with("--") => return Err(CliAppError::Usage(usage())),
            tag => tags.push(tag.to_string()),
        }
    }
    if tags.is_empty() {
        return Err(CliAppError::Usage(usage()));
    }
    Ok(LocaleOptions { tags, bundle })
}

fn parse_strip_options(args: Vec<String>) -> Result<StripOptions, CliAppError> {
    let mut files = Vec::new();
    let mut field = None;
    let mut config_path = None;
    let mut report_path = None;
    let mut iter = args.into_iter();
    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "--field" => field = Some(next_value("--field", &mut iter)?),
            "--config" => config_path = Some(PathBuf::from(next_value("--config", &mut iter)?)),
            "--report" => report_path = Some(PathBuf::from(next_value("--report", &mut iter)?)),
            "--help" | "-h" => return Err(CliAppError::Usage(usage())),
            flag if flag.starts_with("--") => return Err(CliAppError::Usage(usage())),
            file => files.push(PathBuf::from(file)),
        }
    }
    if files.is_empty() {
        return Err(CliAppError::Usage(usage()));
    }
    Ok(StripOptions {
        files,
        field,
        config_path,
        report_path,
    })
}

fn parse_unescape_options(args: Vec<String>) -> Result<UnescapeOptions, CliAppError> {
    let mut files = Vec::new();
    let mut encoding = None;
    let mut config_path = None;
    let mut report_path = None;
    let mut iter = args.into_iter();
    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "--encoding" => encoding = Some(next_value("--encoding", &mut iter)?),
            "--config" => config_path = Some(PathBuf::from(next_value("--config", &mut iter)?)),
            "--report" => report_path = Some(PathBuf::from(next_value("--report", &mut iter)?)),
            "--help" | "-h" => return Err(CliAppError::Usage(usage())),
            flag if flag.starts_with("--") => return Err(CliAppError::Usage(usage())),
            file => files.push(PathBuf::from(file)),
        }
    }
    if files.is_empty() {
        return Err(CliAppError::Usage(usage()));
    }
    Ok(UnescapeOptions {
        files,
        encoding,
        config_path,
        report_path,
    })
}

fn next_value(flag: &str, iter: &mut impl Iterator<Item = String>) -> Result<String, CliAppError> {
    iter.next()
        .ok_or_else(|| CliAppError::Usage(format!("{flag} requires a value\n\n{}", usage())))
}

fn usage() -> String {
    "usage: gettext-build locale <tag> [<tag>...] [--bundle <base>]\n       gettext-build strip <file> [<file>...] [--field <name>] [--config <path>] [--report <path>]\n       gettext-build unescape <file> [<file>...] [--encoding <label>] [--config <path>] [--report <path>]".to_string()
}

#[cfg(test)]
mod tests {
    use super::{
        CliAppError, Command, execute, load_command_config, parse_command, parse_locale_options,
        parse_strip_options, parse_unescape_options,
    };
    use crate::config::CliConfig;
    use crate::error::ConfigError;
    use std::fs;

    fn args(values: &[&str]) -> Vec<String> {
        values.iter().map(|value| value.to_string()).collect()
    }

    #[test]
    fn parses_locale_options() {
        let options =
            parse_locale_options(args(&["he_IL", "en@euro", "--bundle", "Messages"])).expect("options");
        assert_eq!(options.tags, vec!["he_IL", "en@euro"]);
        assert_eq!(options.bundle.as_deref(), Some("Messages"));
    }

    #[test]
    fn parses_strip_options() {
        let options = parse_strip_options(args(&[
            "po/keys.pot",
            "po/de.po",
            "--config",
            "build/gettext-build.toml",
            "--report",
            "strip.json",
        ]))
        .expect("options");
        assert_eq!(options.files.len(), 2);
        assert!(options.field.is_none());
        assert!(options.config_path.expect("config").ends_with("build/gettext-build.toml"));
        assert!(options.report_path.expect("report").ends_with("strip.json"));
    }

    #[test]
    fn parses_unescape_options() {
        let options =
            parse_unescape_options(args(&["--encoding", "iso-8859-1", "Messages_de.properties"]))
                .expect("options");
        assert_eq!(options.encoding.as_deref(), Some("iso-8859-1"));
        assert!(options.config_path.is_none());
    }

    #[test]
    fn missing_flag_value_is_usage_error() {
        let err = parse_strip_options(args(&["keys.pot", "--field"])).expect_err("value");
        assert!(matches!(err, CliAppError::Usage(ref message) if message.starts_with("--field requires a value")));
    }

    #[test]
    fn rejects_unknown_flags_and_empty_inputs() {
        assert!(matches!(
            parse_unescape_options(args(&["a.properties", "--verbose"])),
            Err(CliAppError::Usage(_))
        ));
        assert!(matches!(parse_strip_options(args(&[])), Err(CliAppError::Usage(_))));
        assert!(matches!(parse_locale_options(args(&["--bundle", "M"])), Err(CliAppError::Usage(_))));
    }

    #[test]
    fn dispatches_known_commands() {
        assert!(matches!(
            parse_command(args(&["locale", "de"])),
            Ok(Command::Locale(_))
        ));
        assert!(matches!(
            parse_command(args(&["extract", "src"])),
            Err(CliAppError::Usage(_))
        ));
        assert!(matches!(parse_command(args(&[])), Err(CliAppError::Usage(_))));
    }

    #[test]
    fn executes_strip_command() {
        let dir = tempfile::tempdir().expect("dir");
        let keys = dir.path().join("keys.pot");
        fs::write(&keys, "\"POT-Creation-Date: 2026-10-19\\n\"\n").expect("write");
        let command = parse_command(vec![
            "strip".to_string(),
            keys.display().to_string(),
        ])
        .expect("command");
        assert!(command.config_path().is_none());

        execute(&command, &CliConfig::default()).expect("execute");
        assert_eq!(fs::read_to_string(&keys).expect("read"), "\"\"\n");
    }

    #[test]
    fn explicit_missing_config_is_an_error() {
        let dir = tempfile::tempdir().expect("dir");
        let missing = dir.path().join("buld").join("gettext-build.toml");
        let command = parse_command(args(&[
            "unescape",
            "Messages_de.properties",
            "--config",
            &missing.display().to_string(),
        ]))
        .expect("command");

        let err = load_command_config(&command).expect_err("missing config");
        assert!(matches!(err, CliAppError::Config(ConfigError::Io { ref path, .. }) if *path == missing));
    }

    #[test]
    fn explicit_config_is_loaded() {
        let dir = tempfile::tempdir().expect("dir");
        let path = dir.path().join("custom.toml");
        fs::write(&path, "print_pot_creation_date = true\n").expect("write");
        let command = parse_command(args(&["strip", "keys.pot", "--config", &path.display().to_string()]))
            .expect("command");

        let config = load_command_config(&command).expect("config");
        assert!(config.print_pot_creation_date);
    }
}

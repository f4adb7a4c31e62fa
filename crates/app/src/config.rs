use std::path::{Path, PathBuf};

use services::QuestionSource;
use thiserror::Error;

pub const DB_URL_ENV: &str = "QUIZ_DB_URL";
pub const QUESTIONS_ENV: &str = "QUIZ_QUESTIONS";

const DEFAULT_DB_URL: &str = "sqlite://quiz.sqlite3";
const DEFAULT_QUESTIONS: &str = "questions.json";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ArgsError {
    #[error("{flag} requires a value")]
    MissingValue { flag: &'static str },
    #[error("unknown argument: {0}")]
    UnknownArg(String),
    #[error("invalid --db value: {raw}")]
    InvalidDbUrl { raw: String },
    #[error("invalid --questions value: {raw}")]
    InvalidQuestions { raw: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub db_url: String,
    pub questions: QuestionSource,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Invocation {
    Run(AppConfig),
    Help,
}

pub fn print_usage() {
    eprintln!("Usage:");
    eprintln!("  cargo run -p app -- [--db <sqlite_url>] [--questions <url|path>]");
    eprintln!();
    eprintln!("Defaults:");
    eprintln!("  --db {DEFAULT_DB_URL}");
    eprintln!("  --questions {DEFAULT_QUESTIONS}");
    eprintln!();
    eprintln!("Environment:");
    eprintln!("  {DB_URL_ENV}, {QUESTIONS_ENV}, RUST_LOG");
}

fn require_value(
    args: &mut impl Iterator<Item = String>,
    flag: &'static str,
) -> Result<String, ArgsError> {
    args.next().ok_or(ArgsError::MissingValue { flag })
}

impl AppConfig {
    /// Resolve configuration from environment defaults and CLI flags.
    ///
    /// Flags win over environment variables.
    ///
    /// # Errors
    ///
    /// Returns `ArgsError` for unknown flags, missing or blank values.
    pub fn parse(
        args: impl IntoIterator<Item = String>,
        env: impl Fn(&str) -> Option<String>,
        cwd: &Path,
    ) -> Result<Invocation, ArgsError> {
        let mut db_url = env(DB_URL_ENV)
            .filter(|value| !value.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_DB_URL.to_owned());
        let mut questions = env(QUESTIONS_ENV)
            .filter(|value| !value.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_QUESTIONS.to_owned());

        let mut args = args.into_iter();
        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--db" => {
                    let value = require_value(&mut args, "--db")?;
                    if value.trim().is_empty() {
                        return Err(ArgsError::InvalidDbUrl { raw: value });
                    }
                    db_url = value;
                }
                "--questions" => {
                    let value = require_value(&mut args, "--questions")?;
                    if value.trim().is_empty() {
                        return Err(ArgsError::InvalidQuestions { raw: value });
                    }
                    questions = value;
                }
                "--help" | "-h" => return Ok(Invocation::Help),
                _ => return Err(ArgsError::UnknownArg(arg)),
            }
        }

        Ok(Invocation::Run(Self {
            db_url: normalize_sqlite_url(&db_url, cwd),
            questions: QuestionSource::parse(&questions),
        }))
    }
}

/// Turn `sqlite:relative.db` or a bare path into an absolute `sqlite://` URL.
#[must_use]
pub fn normalize_sqlite_url(raw: &str, cwd: &Path) -> String {
    if raw == "sqlite::memory:" || raw.starts_with("sqlite:file:") {
        return raw.to_owned();
    }

    let trimmed = raw.trim();
    let path_str = trimmed
        .strip_prefix("sqlite://")
        .or_else(|| trimmed.strip_prefix("sqlite:"))
        .unwrap_or(trimmed);
    let path = Path::new(path_str);
    let absolute = if path.is_absolute() {
        path.to_path_buf()
    } else {
        cwd.join(path)
    };
    format!("sqlite://{}", absolute.display())
}

/// Create the database file (and its directory) so `SQLite` can open it.
///
/// # Errors
///
/// Returns `ArgsError::InvalidDbUrl` for URLs without a path, or the I/O
/// error if the file cannot be created.
pub fn prepare_sqlite_file(db_url: &str) -> Result<(), Box<dyn std::error::Error>> {
    if db_url == "sqlite::memory:" || db_url.starts_with("sqlite:file:") {
        return Ok(());
    }

    let path = db_url
        .strip_prefix("sqlite://")
        .ok_or_else(|| ArgsError::InvalidDbUrl {
            raw: db_url.to_string(),
        })?;
    let path = path.split('?').next().unwrap_or(path);
    if path.is_empty() {
        return Err(ArgsError::InvalidDbUrl {
            raw: db_url.to_string(),
        }
        .into());
    }

    let path = PathBuf::from(path);
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }

    if !path.exists() {
        std::fs::OpenOptions::new()
            .create(true)
            .write(true)
            .truncate(false)
            .open(&path)?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(list: &[&str]) -> Vec<String> {
        list.iter().map(ToString::to_string).collect()
    }

    fn no_env(_: &str) -> Option<String> {
        None
    }

    #[test]
    fn defaults_resolve_against_cwd() {
        let parsed = AppConfig::parse(args(&[]), no_env, Path::new("/srv/quiz")).unwrap();
        assert_eq!(
            parsed,
            Invocation::Run(AppConfig {
                db_url: "sqlite:///srv/quiz/quiz.sqlite3".into(),
                questions: QuestionSource::File(PathBuf::from("questions.json")),
            })
        );
    }

    #[test]
    fn flags_override_environment() {
        let env = |key: &str| match key {
            DB_URL_ENV => Some("sqlite:env.db".to_owned()),
            QUESTIONS_ENV => Some("https://example.org/env.json".to_owned()),
            _ => None,
        };
        let parsed = AppConfig::parse(
            args(&["--questions", "https://example.org/questions.json"]),
            env,
            Path::new("/tmp"),
        )
        .unwrap();
        let Invocation::Run(config) = parsed else {
            panic!("expected run");
        };
        assert_eq!(config.db_url, "sqlite:///tmp/env.db");
        assert_eq!(
            config.questions,
            QuestionSource::Http("https://example.org/questions.json".into())
        );
    }

    #[test]
    fn rejects_bad_arguments() {
        assert_eq!(
            AppConfig::parse(args(&["--db"]), no_env, Path::new("/")),
            Err(ArgsError::MissingValue { flag: "--db" })
        );
        assert_eq!(
            AppConfig::parse(args(&["--verbose"]), no_env, Path::new("/")),
            Err(ArgsError::UnknownArg("--verbose".into()))
        );
        assert_eq!(
            AppConfig::parse(args(&["--questions", " "]), no_env, Path::new("/")),
            Err(ArgsError::InvalidQuestions { raw: " ".into() })
        );
    }

    #[test]
    fn help_short_circuits() {
        assert_eq!(
            AppConfig::parse(args(&["-h", "--bogus"]), no_env, Path::new("/")),
            Ok(Invocation::Help)
        );
    }

    #[test]
    fn normalize_keeps_memory_urls() {
        assert_eq!(normalize_sqlite_url("sqlite::memory:", Path::new("/x")), "sqlite::memory:");
        assert_eq!(
            normalize_sqlite_url("sqlite:///abs/quiz.db", Path::new("/x")),
            "sqlite:///abs/quiz.db"
        );
    }
}

//! Command line handling.

use crate::constants::DEFAULT_QUESTIONS_FILE;
use std::path::{Path, PathBuf};

/// Where the question table comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QuestionSource {
    File(PathBuf),
    /// The sheet compiled into the binary.
    Bundled,
}

impl QuestionSource {
    /// `questions.csv` in `dir` if present, otherwise the bundled sheet.
    pub fn default_in(dir: &Path) -> Self {
        let candidate = dir.join(DEFAULT_QUESTIONS_FILE);
        if candidate.is_file() {
            Self::File(candidate)
        } else {
            Self::Bundled
        }
    }

    pub fn describe(&self) -> String {
        match self {
            Self::File(path) => path.display().to_string(),
            Self::Bundled => "bundled question bank".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub source: QuestionSource,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Play(Config),
    Version,
    Help,
}

pub const USAGE: &str = "\
Ops Millionaire - operations management quiz

Usage: ops-millionaire [--questions <path>]

Options:
  --questions <path>  CSV question bank (default: ./questions.csv, else bundled)
  --version, -v       Show version information
  --help, -h          Show this help message

Environment:
  RUST_LOG            Log filter for the log file (default: info)";

/// Parse arguments (without the program name). `cwd` is where the default
/// question file is looked for.
pub fn parse_args<I>(args: I, cwd: &Path) -> Result<Command, String>
where
    I: IntoIterator<Item = String>,
{
    let mut args = args.into_iter();
    let mut source = None;

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--version" | "-v" => return Ok(Command::Version),
            "--help" | "-h" => return Ok(Command::Help),
            "--questions" => {
                let path = args
                    .next()
                    .ok_or_else(|| "--questions requires a path".to_string())?;
                source = Some(QuestionSource::File(PathBuf::from(path)));
            }
            other => {
                if let Some(path) = other.strip_prefix("--questions=") {
                    source = Some(QuestionSource::File(PathBuf::from(path)));
                } else {
                    return Err(format!("Unknown argument: {}", other));
                }
            }
        }
    }

    Ok(Command::Play(Config {
        source: source.unwrap_or_else(|| QuestionSource::default_in(cwd)),
    }))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    fn empty_dir() -> &'static Path {
        Path::new("/nonexistent/ops-millionaire")
    }

    #[test]
    fn test_no_args_uses_bundled_when_no_file() {
        let command = parse_args(args(&[]), empty_dir()).unwrap();
        assert_eq!(
            command,
            Command::Play(Config {
                source: QuestionSource::Bundled
            })
        );
    }

    #[test]
    fn test_questions_flag() {
        let command = parse_args(args(&["--questions", "bank.csv"]), empty_dir()).unwrap();
        assert_eq!(
            command,
            Command::Play(Config {
                source: QuestionSource::File(PathBuf::from("bank.csv"))
            })
        );

        let command = parse_args(args(&["--questions=other.csv"]), empty_dir()).unwrap();
        assert_eq!(
            command,
            Command::Play(Config {
                source: QuestionSource::File(PathBuf::from("other.csv"))
            })
        );
    }

    #[test]
    fn test_questions_flag_needs_value() {
        let err = parse_args(args(&["--questions"]), empty_dir()).unwrap_err();
        assert!(err.contains("requires a path"));
    }

    #[test]
    fn test_version_and_help() {
        assert_eq!(
            parse_args(args(&["--version"]), empty_dir()),
            Ok(Command::Version)
        );
        assert_eq!(parse_args(args(&["-v"]), empty_dir()), Ok(Command::Version));
        assert_eq!(parse_args(args(&["-h"]), empty_dir()), Ok(Command::Help));
    }

    #[test]
    fn test_unknown_argument() {
        let err = parse_args(args(&["--seed", "4"]), empty_dir()).unwrap_err();
        assert_eq!(err, "Unknown argument: --seed");
    }

    #[test]
    fn test_default_file_in_dir_is_used() {
        let dir = std::env::temp_dir().join(format!("ops-millionaire-cfg-{}", std::process::id()));
        std::fs::create_dir_all(&dir).unwrap();
        let file = dir.join(DEFAULT_QUESTIONS_FILE);
        std::fs::write(&file, "Level,Prompt,A,B,C,D,CorrectKey,Explanation\n").unwrap();

        assert_eq!(QuestionSource::default_in(&dir), QuestionSource::File(file));

        std::fs::remove_dir_all(&dir).unwrap();
    }
}

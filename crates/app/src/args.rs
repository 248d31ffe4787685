use std::fmt;
use std::time::Duration;

pub const DEFAULT_SOURCE: &str = "data/questions.json";
pub const DEFAULT_DELAY_MS: u64 = 1500;

#[derive(Debug, PartialEq, Eq)]
pub enum ArgsError {
    MissingValue { flag: &'static str },
    UnknownArg(String),
    UnknownCommand(String),
    InvalidDelay { raw: String },
    InvalidSource { raw: String },
}

impl fmt::Display for ArgsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ArgsError::MissingValue { flag } => write!(f, "{flag} requires a value"),
            ArgsError::UnknownArg(arg) => write!(f, "unknown argument: {arg}"),
            ArgsError::UnknownCommand(cmd) => write!(f, "unknown subcommand: {cmd}"),
            ArgsError::InvalidDelay { raw } => write!(f, "invalid --delay-ms value: {raw}"),
            ArgsError::InvalidSource { raw } => write!(f, "invalid --source value: {raw:?}"),
        }
    }
}

impl std::error::Error for ArgsError {}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Play,
    Validate,
    Help,
}

impl Command {
    fn from_arg(arg: &str) -> Option<Self> {
        match arg {
            "play" => Some(Self::Play),
            "validate" => Some(Self::Validate),
            _ => None,
        }
    }
}

/// Resolved configuration: environment defaults overridden by flags.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Args {
    pub command: Command,
    pub source: String,
    pub feedback_delay: Duration,
    pub json: bool,
}

/// Environment knobs read before flags are applied.
#[derive(Debug, Clone, Default)]
pub struct EnvDefaults {
    pub source: Option<String>,
    pub delay_ms: Option<String>,
}

impl EnvDefaults {
    #[must_use]
    pub fn from_env() -> Self {
        Self {
            source: std::env::var("QUIZ_SOURCE").ok(),
            delay_ms: std::env::var("QUIZ_FEEDBACK_DELAY_MS").ok(),
        }
    }
}

fn require_value(
    args: &mut impl Iterator<Item = String>,
    flag: &'static str,
) -> Result<String, ArgsError> {
    args.next().ok_or(ArgsError::MissingValue { flag })
}

fn parse_delay(raw: String) -> Result<Duration, ArgsError> {
    raw.trim()
        .parse::<u64>()
        .map(Duration::from_millis)
        .map_err(|_| ArgsError::InvalidDelay { raw })
}

impl Args {
    /// Parse arguments (without the program name).
    ///
    /// # Errors
    ///
    /// Returns `ArgsError` for unknown flags, missing values or bad numbers.
    pub fn parse(
        argv: impl IntoIterator<Item = String>,
        env: EnvDefaults,
    ) -> Result<Self, ArgsError> {
        let mut args = argv.into_iter().peekable();

        // Default behavior: play when no subcommand is provided.
        let mut command = match args.peek().map(String::as_str) {
            None => Command::Play,
            Some(first) if first.starts_with('-') => Command::Play,
            Some(first) => {
                let cmd = Command::from_arg(first)
                    .ok_or_else(|| ArgsError::UnknownCommand(first.to_string()))?;
                args.next();
                cmd
            }
        };

        let mut source = env
            .source
            .filter(|value| !value.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_SOURCE.into());
        // A broken env value falls back to the default; a broken flag is an error.
        let mut feedback_delay = env
            .delay_ms
            .and_then(|raw| parse_delay(raw).ok())
            .unwrap_or(Duration::from_millis(DEFAULT_DELAY_MS));
        let mut json = false;

        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--source" => {
                    let value = require_value(&mut args, "--source")?;
                    if value.trim().is_empty() {
                        return Err(ArgsError::InvalidSource { raw: value });
                    }
                    source = value;
                }
                "--delay-ms" => {
                    let value = require_value(&mut args, "--delay-ms")?;
                    feedback_delay = parse_delay(value)?;
                }
                "--json" => json = true,
                "--help" | "-h" => command = Command::Help,
                _ => return Err(ArgsError::UnknownArg(arg)),
            }
        }

        Ok(Self {
            command,
            source,
            feedback_delay,
            json,
        })
    }
}

pub fn print_usage() {
    eprintln!("Usage:");
    eprintln!("  quiz [play]   [--source <path|url>] [--delay-ms <ms>] [--json]");
    eprintln!("  quiz validate [--source <path|url>] [--json]");
    eprintln!();
    eprintln!("Defaults:");
    eprintln!("  --source {DEFAULT_SOURCE}");
    eprintln!("  --delay-ms {DEFAULT_DELAY_MS}");
    eprintln!();
    eprintln!("Environment:");
    eprintln!("  QUIZ_SOURCE, QUIZ_FEEDBACK_DELAY_MS, RUST_LOG");
}

use core::str::FromStr;

use thiserror::Error;

/// Environment variable selecting the log output format.
pub const LOG_FORMAT_ENV: &str = "STOCKLINE_LOG_FORMAT";

/// Filter used when `RUST_LOG` is unset or invalid.
pub const DEFAULT_FILTER: &str = "info";

/// Output format of the fmt subscriber.
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq)]
pub enum LogFormat {
    /// One JSON object per event.
    #[default]
    Json,
    /// Multi-line, human-oriented output.
    Pretty,
    /// Single-line, human-oriented output.
    Compact,
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("unknown log format `{0}` (expected json, pretty or compact)")]
pub struct ParseLogFormatError(String);

impl FromStr for LogFormat {
    type Err = ParseLogFormatError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "json" => Ok(Self::Json),
            "pretty" => Ok(Self::Pretty),
            "compact" => Ok(Self::Compact),
            other => Err(ParseLogFormatError(other.to_owned())),
        }
    }
}

/// Subscriber configuration.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ObservabilityConfig {
    /// `EnvFilter` directives, `None` to read `RUST_LOG`.
    pub filter: Option<String>,
    pub format: LogFormat,
    /// Set when the environment named a format we do not know.
    pub rejected_format: Option<ParseLogFormatError>,
}

impl ObservabilityConfig {
    /// Read the configuration from the process environment.
    pub fn from_env() -> Self {
        Self::from_format_var(std::env::var(LOG_FORMAT_ENV).ok().as_deref())
    }

    fn from_format_var(value: Option<&str>) -> Self {
        let mut config = Self::default();
        match value.map(LogFormat::from_str) {
            Some(Ok(format)) => config.format = format,
            Some(Err(err)) => config.rejected_format = Some(err),
            None => {}
        }
        config
    }

    pub fn with_filter(mut self, directives: impl Into<String>) -> Self {
        self.filter = Some(directives.into());
        self
    }

    pub fn with_format(mut self, format: LogFormat) -> Self {
        self.format = format;
        self
    }
}

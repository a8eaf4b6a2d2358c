use serde::Serialize;
use strum::{Display, EnumString};

/// Filter directive used when none is configured.
pub const DEFAULT_LOG_FILTER: &str = "info";

/// How the daemon renders log events on stderr.
///
/// Parsing accepts `json` and `compact` in any letter case.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, EnumString, Display)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum LogFormat {
    /// One flattened JSON object per event.
    Json,
    /// Single-line text for terminals.
    #[default]
    Compact,
}

/// Error returned when a [`LogFormat`] cannot be parsed from text.
pub type LogFormatParseError = strum::ParseError;

/// Log format used when none is configured.
#[must_use]
pub fn default_log_format() -> LogFormat {
    LogFormat::default()
}

use std::env;

/// Environment variable consulted by [`OutputFormat::from_env`].
pub const OUTPUT_FORMAT_ENV: &str = "ADAPTIVE_CARDS_OUTPUT";

const DEFAULT_INDENT: &str = "  ";

/// Layout of the JSON produced for a card.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Compact,
    /// One value per line; every line after the first starts with `prefix`,
    /// followed by one copy of `indent` per nesting level.
    Indented { prefix: String, indent: String },
}

impl OutputFormat {
    pub fn indented(prefix: impl Into<String>, indent: impl Into<String>) -> Self {
        Self::Indented {
            prefix: prefix.into(),
            indent: indent.into(),
        }
    }

    /// Parse an output format string (case-insensitive).
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "compact" | "minified" => Some(Self::Compact),
            "pretty" | "indented" => Some(Self::indented("", DEFAULT_INDENT)),
            _ => None,
        }
    }

    /// Reads the output format from `ADAPTIVE_CARDS_OUTPUT`.
    pub fn from_env() -> Self {
        env::var(OUTPUT_FORMAT_ENV)
            .ok()
            .and_then(|value| Self::parse(&value))
            .unwrap_or_default()
    }
}

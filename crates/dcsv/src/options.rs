#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Well-known delimiter pairs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Preset {
    /// Spreadsheet-compatible CSV: `,` separated, `"` quoted.
    #[default]
    Office,
    Tab,
    Pipe,
}

impl Preset {
    pub fn field_separator(self) -> &'static str {
        match self {
            Preset::Office => ",",
            Preset::Tab => "\t",
            Preset::Pipe => "|",
        }
    }

    pub fn text_delimiter(self) -> &'static str {
        "\""
    }
}

/// The pair of tokens a codec splits and quotes with.
///
/// Both tokens are non-empty and may be longer than one character. They are
/// matched as literal substrings, so callers should avoid configurations where
/// one token is a prefix of the other.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "RawDelimiters"))]
pub struct Delimiters {
    field_separator: String,
    text_delimiter: String,
}

impl Delimiters {
    pub fn new(field_separator: impl Into<String>, text_delimiter: impl Into<String>) -> Result<Self> {
        let field_separator = field_separator.into();
        let text_delimiter = text_delimiter.into();
        if field_separator.is_empty() {
            return Err(Error::config("field separator must not be empty"));
        }
        if text_delimiter.is_empty() {
            return Err(Error::config("text delimiter must not be empty"));
        }
        Ok(Self {
            field_separator,
            text_delimiter,
        })
    }

    /// `,` and `"`, as written by office suites.
    pub fn office() -> Self {
        Preset::Office.into()
    }

    pub fn field_separator(&self) -> &str {
        &self.field_separator
    }

    pub fn text_delimiter(&self) -> &str {
        &self.text_delimiter
    }

    #[cfg(feature = "json")]
    pub fn from_json_str(s: &str) -> Result<Self> {
        Ok(serde_json::from_str(s)?)
    }
}

impl Default for Delimiters {
    fn default() -> Self {
        Self::office()
    }
}

impl From<Preset> for Delimiters {
    fn from(preset: Preset) -> Self {
        Self {
            field_separator: preset.field_separator().to_string(),
            text_delimiter: preset.text_delimiter().to_string(),
        }
    }
}

#[cfg(feature = "serde")]
#[derive(Deserialize)]
struct RawDelimiters {
    field_separator: String,
    text_delimiter: String,
}

#[cfg(feature = "serde")]
impl TryFrom<RawDelimiters> for Delimiters {
    type Error = Error;

    fn try_from(raw: RawDelimiters) -> Result<Self> {
        Delimiters::new(raw.field_separator, raw.text_delimiter)
    }
}

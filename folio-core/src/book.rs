use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ParseLanguageError;

/// Catalog language. Selects the locale tables used by the generator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    En,
    De,
    Ja,
}

#[allow(clippy::derivable_impls)]
impl Default for Language {
    fn default() -> Self {
        Language::En
    }
}

impl Language {
    pub const ALL: [Language; 3] = [Language::En, Language::De, Language::Ja];

    /// Short code used in the language selector and on records
    pub fn code(self) -> &'static str {
        match self {
            Language::En => "en",
            Language::De => "de",
            Language::Ja => "ja",
        }
    }

    /// Human readable name for the language selector
    pub fn label(self) -> &'static str {
        match self {
            Language::En => "English (US)",
            Language::De => "German (DE)",
            Language::Ja => "Japanese (JP)",
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Language {
    type Err = ParseLanguageError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "en" => Ok(Language::En),
            "de" => Ok(Language::De),
            "ja" => Ok(Language::Ja),
            _ => Err(ParseLanguageError(s.to_string())),
        }
    }
}

/// A single synthetic book row.
///
/// Records are values: the catalog replaces whole windows of them and never
/// edits one in place.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BookRecord {
    /// Position within the generated window, starting at 1
    pub id: u32,
    pub isbn: String,
    pub title: String,
    pub authors: String,
    pub publisher: String,
    /// Two paragraphs of filler text
    pub details: String,
    /// Cover/avatar image URL
    pub img: String,
    pub language: Language,
    /// Review score in [0, 5] with one fractional digit
    pub review: f64,
    /// Like count in [0, 10]
    pub likes: u32,
    /// Effective seed of the batch that produced this record
    pub seed: i64,
}

use std::fmt;

use serde::{Deserialize, Serialize};

/// Languages a summary can be written in
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Language {
    #[default]
    #[serde(rename = "en")]
    English,
    #[serde(rename = "hi")]
    Hindi,
    #[serde(rename = "mr")]
    Marathi,
}

/// Transcript languages, most preferred first
pub const PREFERRED_LANGUAGES: [Language; 3] =
    [Language::Marathi, Language::Hindi, Language::English];

impl Language {
    /// Exact match on the ISO 639-1 code
    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "en" => Some(Language::English),
            "hi" => Some(Language::Hindi),
            "mr" => Some(Language::Marathi),
            _ => None,
        }
    }

    pub fn code(self) -> &'static str {
        match self {
            Language::English => "en",
            Language::Hindi => "hi",
            Language::Marathi => "mr",
        }
    }

    pub fn voice(self) -> Voice {
        match self {
            Language::English => Voice::Nova,
            Language::Hindi => Voice::Shimmer,
            Language::Marathi => Voice::Echo,
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// Preset speakers accepted by the speech endpoint
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Voice {
    Alloy,
    Echo,
    Fable,
    Nova,
    Onyx,
    Shimmer,
}

impl Voice {
    pub fn as_str(self) -> &'static str {
        match self {
            Voice::Alloy => "alloy",
            Voice::Echo => "echo",
            Voice::Fable => "fable",
            Voice::Nova => "nova",
            Voice::Onyx => "onyx",
            Voice::Shimmer => "shimmer",
        }
    }
}

/// Voice for a language code; unknown codes get the English voice
pub fn voice_for(language_code: &str) -> Voice {
    Language::from_code(language_code)
        .unwrap_or_default()
        .voice()
}

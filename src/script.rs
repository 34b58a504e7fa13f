use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use tracing::debug;

use azbuka_core::{has_cyrillic_char, html_to_cyrillic, html_to_latin, to_cyrillic, to_latin};

/// Target orthography for rendered text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Script {
    Cyrillic,
    Latin,
}

#[derive(Debug, thiserror::Error)]
#[error("unknown script: {0:?} (expected \"cyrillic\" or \"latin\")")]
pub struct ParseScriptError(String);

impl Script {
    /// Cyrillic if `text` has any Serbian Cyrillic letter, Latin otherwise.
    pub fn detect(text: &str) -> Script {
        if has_cyrillic_char(text) {
            Script::Cyrillic
        } else {
            Script::Latin
        }
    }

    /// Render plain text in this script.
    pub fn convert(self, text: &str) -> String {
        match self {
            Script::Cyrillic => to_cyrillic(text),
            Script::Latin => to_latin(text),
        }
    }

    /// Render the text content of `html` in this script, leaving tags alone.
    pub fn convert_html(self, html: &str) -> String {
        debug!(script = %self, len = html.len(), "convert_html");
        match self {
            Script::Cyrillic => html_to_cyrillic(html),
            Script::Latin => html_to_latin(html),
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Script::Cyrillic => "cyrillic",
            Script::Latin => "latin",
        }
    }
}

impl fmt::Display for Script {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Script {
    type Err = ParseScriptError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "cyrillic" | "cyr" => Ok(Script::Cyrillic),
            "latin" | "lat" => Ok(Script::Latin),
            _ => Err(ParseScriptError(s.to_string())),
        }
    }
}

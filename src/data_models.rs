use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Evidence bucket a citation falls into.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum CitationType {
    News,
    Academic,
    Statistics,
    Video,
    Other,
}

impl CitationType {
    /// Types a student can ask for. `Other` is only ever a classification result.
    pub const SELECTABLE: [CitationType; 4] = [
        CitationType::News,
        CitationType::Academic,
        CitationType::Statistics,
        CitationType::Video,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            CitationType::News => "news",
            CitationType::Academic => "academic",
            CitationType::Statistics => "statistics",
            CitationType::Video => "video",
            CitationType::Other => "other",
        }
    }
}

impl fmt::Display for CitationType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CitationType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "news" => Ok(CitationType::News),
            "academic" => Ok(CitationType::Academic),
            "statistics" => Ok(CitationType::Statistics),
            "video" => Ok(CitationType::Video),
            "other" => Ok(CitationType::Other),
            other => Err(format!("unknown evidence type: {other}")),
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Citation {
    pub title: String,
    pub url: String,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub snippet: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub date: Option<String>,
    #[serde(rename = "type")]
    pub citation_type: CitationType,
    /// Set only on synthetic entries added by the padding policy.
    #[serde(skip_serializing_if = "std::ops::Not::not", default)]
    pub placeholder: bool,
}

impl Citation {
    pub fn new(title: String, url: String, citation_type: CitationType) -> Citation {
        Citation {
            title,
            url,
            snippet: None,
            date: None,
            citation_type,
            placeholder: false,
        }
    }

    pub fn with_snippet(mut self, snippet: Option<String>) -> Citation {
        self.snippet = snippet;
        self
    }

    pub fn with_date(mut self, date: Option<String>) -> Citation {
        self.date = date;
        self
    }
}

/// The full answer to one search, built per request and never stored.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SearchResponse {
    pub summary: String,
    pub citations: Vec<Citation>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub related_questions: Option<Vec<String>>,
}

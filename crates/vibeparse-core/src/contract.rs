//! Request/response contracts for the generation backend

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// File extensions offered as generation filters
pub const FILE_TYPES: &[&str] = &[
    ".py", ".js", ".ts", ".tsx", ".jsx", ".java", ".cpp", ".c", ".go", ".rb", ".rs",
];

/// `GET /api/config` response
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct ServerConfig {
    #[serde(default)]
    pub mock_llm_mode: bool,
}

/// Reader proficiency level
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Proficiency {
    #[default]
    Beginner,
    Intermediate,
    Advanced,
}

impl Proficiency {
    pub const ALL: [Proficiency; 3] = [
        Proficiency::Beginner,
        Proficiency::Intermediate,
        Proficiency::Advanced,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Proficiency::Beginner => "beginner",
            Proficiency::Intermediate => "intermediate",
            Proficiency::Advanced => "advanced",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Proficiency::Beginner => "Beginner",
            Proficiency::Intermediate => "Intermediate",
            Proficiency::Advanced => "Advanced",
        }
    }
}

impl fmt::Display for Proficiency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Proficiency {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Proficiency::ALL
            .into_iter()
            .find(|p| p.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| format!("unknown proficiency: {s}"))
    }
}

/// Explanation depth
///
/// Display labels are free-form; the backend receives the normalized token.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Depth {
    #[default]
    KeyParts,
    Full,
    LineByLine,
}

impl Depth {
    pub const ALL: [Depth; 3] = [Depth::KeyParts, Depth::Full, Depth::LineByLine];

    /// Label shown in the form
    pub fn label(&self) -> &'static str {
        match self {
            Depth::KeyParts => "Key parts",
            Depth::Full => "Full",
            Depth::LineByLine => "Line by line",
        }
    }

    /// Token sent to the backend
    pub fn token(&self) -> String {
        normalize_depth_label(self.label())
    }
}

impl FromStr for Depth {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let token = normalize_depth_label(s);
        Depth::ALL
            .into_iter()
            .find(|d| d.token() == token)
            .ok_or_else(|| format!("unknown depth: {s}"))
    }
}

impl Serialize for Depth {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.token())
    }
}

impl<'de> Deserialize<'de> for Depth {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(serde::de::Error::custom)
    }
}

/// Normalize a depth label to a lowercase hyphenated token
///
/// `"Key Parts"` → `"key-parts"`, `" line_by  line "` → `"line-by-line"`.
pub fn normalize_depth_label(label: &str) -> String {
    label
        .split(|c: char| c.is_whitespace() || c == '_' || c == '-')
        .filter(|part| !part.is_empty())
        .map(|part| part.to_lowercase())
        .collect::<Vec<_>>()
        .join("-")
}

/// `POST /api/generate-script` body
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GenerateRequest {
    pub github_url: String,
    pub proficiency: Proficiency,
    pub depth: Depth,
    pub save_to_disk: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file_types: Option<Vec<String>>,
}

/// Successful `POST /api/generate-script` response
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct GenerateResponse {
    pub script_id: String,
}

/// Error body returned with non-2xx responses
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ErrorDetail {
    pub detail: String,
}

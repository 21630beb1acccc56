//! Pictogram records as returned by the catalog search endpoint.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Catalog key of a pictogram.
///
/// The search API sends `_id` as a number, older mirrors as a string;
/// both normalize to the same textual key.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "RawId", into = "String")]
pub struct PictogramId(String);

#[derive(Deserialize)]
#[serde(untagged)]
enum RawId {
    Number(u64),
    Text(String),
}

impl From<RawId> for PictogramId {
    fn from(raw: RawId) -> Self {
        match raw {
            RawId::Number(n) => Self(n.to_string()),
            RawId::Text(s) => Self(s),
        }
    }
}

impl From<PictogramId> for String {
    fn from(id: PictogramId) -> Self {
        id.0
    }
}

impl PictogramId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PictogramId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// One (language, keyword) label of a pictogram.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Keyword {
    #[serde(default)]
    pub language: String,
    #[serde(default)]
    pub keyword: String,
}

impl Keyword {
    pub fn new(language: &str, keyword: &str) -> Self {
        Self {
            language: language.to_string(),
            keyword: keyword.to_string(),
        }
    }
}

/// A single catalog entry. Unknown fields of the API payload are ignored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PictogramRecord {
    #[serde(rename = "_id")]
    pub id: PictogramId,
    #[serde(default)]
    pub keywords: Vec<Keyword>,
}

impl PictogramRecord {
    pub fn new(id: impl Into<String>, keywords: Vec<Keyword>) -> Self {
        Self {
            id: PictogramId::new(id),
            keywords,
        }
    }

    /// Keyword for `language`, falling back to the identifier.
    ///
    /// Labels with an empty keyword never match.
    pub fn label_for(&self, language: &str) -> &str {
        self.keywords
            .iter()
            .find(|k| k.language == language && !k.keyword.is_empty())
            .map(|k| k.keyword.as_str())
            .unwrap_or_else(|| self.id.as_str())
    }
}

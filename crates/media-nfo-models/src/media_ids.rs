use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Provider namespace of a typed external id (`<uniqueid type="...">`)
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum UniqueIdType {
    Imdb,
    Tmdb,
    Tvdb,
}

impl UniqueIdType {
    /// Value of the `type` attribute used by Kodi
    pub fn as_str(&self) -> &'static str {
        match self {
            UniqueIdType::Imdb => "imdb",
            UniqueIdType::Tmdb => "tmdb",
            UniqueIdType::Tvdb => "tvdb",
        }
    }
}

impl fmt::Display for UniqueIdType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for UniqueIdType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "imdb" => Ok(UniqueIdType::Imdb),
            "tmdb" => Ok(UniqueIdType::Tmdb),
            "tvdb" => Ok(UniqueIdType::Tvdb),
            other => Err(format!("Unknown uniqueid type: {}", other)),
        }
    }
}

/// Identifiers of a movie or show
///
/// Holds the legacy untyped `<id>` value next to the typed provider ids.
/// Every namespace is independent: setting one never touches another, so ids
/// collected from different tag generations accumulate on the same record.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct MediaIds {
    /// Legacy `<id>` element, whatever provider it came from
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub imdb_id: Option<String>,
    pub tmdb_id: Option<u32>,
    pub tvdb_id: Option<u32>,
}

impl MediaIds {
    /// Create an empty MediaIds struct
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the id of one provider namespace from its textual form
    ///
    /// Empty values are ignored. Numeric namespaces (TMDb, TVDB) reject text
    /// that is not a plain unsigned number and return `false` in that case.
    pub fn set_unique_id(&mut self, kind: UniqueIdType, value: &str) -> bool {
        let value = value.trim();
        if value.is_empty() {
            return false;
        }
        match kind {
            UniqueIdType::Imdb => {
                self.imdb_id = Some(value.to_string());
                true
            }
            UniqueIdType::Tmdb => match value.parse::<u32>() {
                Ok(id) => {
                    self.tmdb_id = Some(id);
                    true
                }
                Err(_) => false,
            },
            UniqueIdType::Tvdb => match value.parse::<u32>() {
                Ok(id) => {
                    self.tvdb_id = Some(id);
                    true
                }
                Err(_) => false,
            },
        }
    }

    /// Textual id of one provider namespace, if set
    pub fn unique_id(&self, kind: UniqueIdType) -> Option<String> {
        match kind {
            UniqueIdType::Imdb => self.imdb_id.clone(),
            UniqueIdType::Tmdb => self.tmdb_id.map(|id| id.to_string()),
            UniqueIdType::Tvdb => self.tvdb_id.map(|id| id.to_string()),
        }
    }

    /// All typed ids that are set, in a stable namespace order
    pub fn unique_ids(&self) -> Vec<(UniqueIdType, String)> {
        [UniqueIdType::Imdb, UniqueIdType::Tmdb, UniqueIdType::Tvdb]
            .into_iter()
            .filter_map(|kind| self.unique_id(kind).map(|value| (kind, value)))
            .collect()
    }

    /// Fill namespaces that are still empty from `other`; set values are kept
    pub fn merge(&mut self, other: &MediaIds) {
        if self.id.is_none() {
            self.id = other.id.clone();
        }
        if self.imdb_id.is_none() {
            self.imdb_id = other.imdb_id.clone();
        }
        if self.tmdb_id.is_none() {
            self.tmdb_id = other.tmdb_id;
        }
        if self.tvdb_id.is_none() {
            self.tvdb_id = other.tvdb_id;
        }
    }

    /// Check if all ID fields are empty
    pub fn is_empty(&self) -> bool {
        self.id.is_none() && self.imdb_id.is_none() && self.tmdb_id.is_none() && self.tvdb_id.is_none()
    }
}

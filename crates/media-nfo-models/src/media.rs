use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum MediaType {
    Movie,
    Show,
}

impl MediaType {
    /// Name of the root element of this media type's NFO document
    pub fn root_tag(&self) -> &'static str {
        match self {
            MediaType::Movie => "movie",
            MediaType::Show => "tvshow",
        }
    }

    pub fn from_root_tag(tag: &str) -> Option<Self> {
        match tag {
            "movie" => Some(MediaType::Movie),
            "tvshow" => Some(MediaType::Show),
            _ => None,
        }
    }
}

/// Generation of the Kodi NFO vocabulary a writer targets
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[serde(rename_all = "lowercase")]
pub enum KodiVersion {
    V16,
    V17,
    #[default]
    V18,
}

impl KodiVersion {
    pub const ALL: [KodiVersion; 3] = [KodiVersion::V16, KodiVersion::V17, KodiVersion::V18];

    pub fn as_str(&self) -> &'static str {
        match self {
            KodiVersion::V16 => "v16",
            KodiVersion::V17 => "v17",
            KodiVersion::V18 => "v18",
        }
    }

    /// Whether this version uses the `<ratings>` block and `<uniqueid>` ids
    pub fn has_typed_ids(&self) -> bool {
        *self >= KodiVersion::V17
    }
}

impl fmt::Display for KodiVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for KodiVersion {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().trim_start_matches('v') {
            "16" => Ok(KodiVersion::V16),
            "17" => Ok(KodiVersion::V17),
            "18" => Ok(KodiVersion::V18),
            _ => Err(format!("Invalid Kodi version: {}. Use 'v16', 'v17' or 'v18'", s)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kodi_version_parse() {
        assert_eq!("v17".parse::<KodiVersion>(), Ok(KodiVersion::V17));
        assert_eq!("18".parse::<KodiVersion>(), Ok(KodiVersion::V18));
        assert_eq!(" V16 ".parse::<KodiVersion>(), Ok(KodiVersion::V16));
        assert!("v19".parse::<KodiVersion>().is_err());
    }

    #[test]
    fn test_kodi_version_ordering() {
        assert!(!KodiVersion::V16.has_typed_ids());
        assert!(KodiVersion::V17.has_typed_ids());
        assert!(KodiVersion::V18.has_typed_ids());
        assert_eq!(KodiVersion::default(), KodiVersion::V18);
    }

    #[test]
    fn test_root_tags() {
        assert_eq!(MediaType::from_root_tag("tvshow"), Some(MediaType::Show));
        assert_eq!(MediaType::Movie.root_tag(), "movie");
        assert_eq!(MediaType::from_root_tag("episodedetails"), None);
    }
}

use serde::{Deserialize, Serialize};

/// Source label used when a rating does not name its origin
pub const DEFAULT_RATING_SOURCE: &str = "default";

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Rating {
    pub source: String, // e.g. "imdb", "themoviedb" or DEFAULT_RATING_SOURCE
    pub rating: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_rating: Option<u32>, // Only set when explicitly present and positive
    pub vote_count: u32,
}

impl Rating {
    pub fn new(source: impl Into<String>, rating: f64, vote_count: u32) -> Self {
        Self {
            source: source.into(),
            rating,
            max_rating: None,
            vote_count,
        }
    }

    /// Set the upper bound of the scale; non-positive values leave it unset
    pub fn with_max_rating(mut self, max: i64) -> Self {
        self.max_rating = u32::try_from(max).ok().filter(|m| *m > 0);
        self
    }
}

impl Default for Rating {
    fn default() -> Self {
        Self::new(DEFAULT_RATING_SOURCE, 0.0, 0)
    }
}

/// First rating of a list, created with default values when the list is empty
///
/// Legacy single-value tags (`<rating>`, `<votes>`) always address this entry.
pub fn first_rating_mut(ratings: &mut Vec<Rating>) -> &mut Rating {
    if ratings.is_empty() {
        ratings.push(Rating::default());
    }
    &mut ratings[0]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_rating_mut_creates_once() {
        let mut ratings = Vec::new();
        first_rating_mut(&mut ratings).rating = 7.0;
        first_rating_mut(&mut ratings).vote_count = 12;

        assert_eq!(ratings.len(), 1);
        assert_eq!(ratings[0].rating, 7.0);
        assert_eq!(ratings[0].vote_count, 12);
    }

    #[test]
    fn test_default_source_is_sentinel() {
        let rating = Rating::default();
        assert_eq!(rating.source, DEFAULT_RATING_SOURCE);
        assert_eq!(rating.max_rating, None);
    }

    #[test]
    fn test_max_rating_only_when_positive() {
        assert_eq!(Rating::default().with_max_rating(10).max_rating, Some(10));
        assert_eq!(Rating::default().with_max_rating(0).max_rating, None);
        assert_eq!(Rating::default().with_max_rating(-5).max_rating, None);
    }
}

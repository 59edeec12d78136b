use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};
use std::time::Duration;

use crate::actor::Actor;
use crate::images::ImageSet;
use crate::media_ids::MediaIds;
use crate::rating::Rating;
use crate::unique_list::UniqueList;

/// Collection ("set") a movie belongs to
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct MovieSet {
    pub name: String,
    pub overview: String,
}

impl MovieSet {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            overview: String::new(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.name.is_empty() && self.overview.is_empty()
    }
}

/// In-memory movie record
///
/// Constructed by the library scanner, populated by an NFO reader and later
/// serialized by an NFO writer. Neither operation takes ownership.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Movie {
    pub ids: MediaIds,
    pub title: String,
    pub original_title: String,
    pub sort_title: String,
    pub overview: String,
    pub outline: String,
    pub tagline: String,
    pub certification: String,
    pub genres: UniqueList,
    pub countries: UniqueList,
    pub studios: UniqueList,
    pub tags: UniqueList,
    pub released: Option<NaiveDate>,
    pub last_played: Option<NaiveDateTime>,
    pub date_added: Option<NaiveDateTime>,
    #[serde(with = "crate::serde_minutes")]
    pub runtime: Duration,
    pub play_count: i32,
    pub top250: i32,
    pub trailer: String,
    pub watched: bool,
    pub set: MovieSet,
    pub writer: String,   // Display string, e.g. "Lana Wachowski, Lilly Wachowski"
    pub director: String, // Display string, same format as writer
    pub actors: Vec<Actor>,
    pub ratings: Vec<Rating>,
    pub images: ImageSet,
}

impl Movie {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            ..Self::default()
        }
    }

    pub fn add_genre(&mut self, genre: impl Into<String>) {
        self.genres.insert(genre);
    }

    pub fn add_country(&mut self, country: impl Into<String>) {
        self.countries.insert(country);
    }

    pub fn add_studio(&mut self, studio: impl Into<String>) {
        self.studios.insert(studio);
    }

    pub fn add_tag(&mut self, tag: impl Into<String>) {
        self.tags.insert(tag);
    }

    pub fn add_actor(&mut self, actor: Actor) {
        self.actors.push(actor);
    }

    /// Runtime in whole minutes
    pub fn runtime_minutes(&self) -> u64 {
        self.runtime.as_secs() / 60
    }

    pub fn set_runtime_minutes(&mut self, minutes: u64) {
        self.runtime = Duration::from_secs(minutes.saturating_mul(60));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_runtime_minutes() {
        let mut movie = Movie::new("The Matrix");
        movie.set_runtime_minutes(136);
        assert_eq!(movie.runtime, Duration::from_secs(136 * 60));
        assert_eq!(movie.runtime_minutes(), 136);
    }

    #[test]
    fn test_collections_ignore_duplicates() {
        let mut movie = Movie::default();
        movie.add_genre("Action");
        movie.add_genre("Science Fiction");
        movie.add_genre("Action");
        movie.add_studio("Warner Bros.");
        movie.add_studio("Warner Bros.");

        assert_eq!(movie.genres.len(), 2);
        assert_eq!(movie.studios.len(), 1);
    }

    #[test]
    fn test_serde_roundtrip_keeps_runtime_in_minutes() {
        let mut movie = Movie::new("Heat");
        movie.set_runtime_minutes(170);
        movie.released = NaiveDate::from_ymd_opt(1995, 12, 15);

        let json = serde_json::to_value(&movie).unwrap();
        assert_eq!(json["runtime"], 170);

        let back: Movie = serde_json::from_value(json).unwrap();
        assert_eq!(back, movie);
    }

    #[test]
    fn test_huge_runtime_saturates() {
        let mut json = serde_json::to_value(Movie::new("Heat")).unwrap();
        json["runtime"] = serde_json::json!(u64::MAX);
        let back: Movie = serde_json::from_value(json).unwrap();
        assert_eq!(back.runtime, Duration::from_secs(u64::MAX));

        let mut movie = Movie::default();
        movie.set_runtime_minutes(u64::MAX);
        assert_eq!(movie.runtime, Duration::from_secs(u64::MAX));
    }
}

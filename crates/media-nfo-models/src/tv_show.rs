use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::time::Duration;

use crate::actor::Actor;
use crate::images::ImageSet;
use crate::media_ids::MediaIds;
use crate::rating::Rating;
use crate::unique_list::UniqueList;

/// Custom name of one season (`<namedseason number="1">Pilot Season</namedseason>`)
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct NamedSeason {
    pub number: u32,
    pub name: String,
}

/// In-memory TV show record
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct TvShow {
    pub ids: MediaIds,
    pub title: String,
    pub show_title: String,
    pub sort_title: String,
    pub overview: String,
    pub outline: String,
    pub certification: String,
    pub first_aired: Option<NaiveDate>,
    pub studios: UniqueList, // Networks
    pub genres: UniqueList,
    pub tags: UniqueList,
    pub ratings: Vec<Rating>,
    pub top250: i32,
    pub episode_count: i32,
    pub status: String,
    #[serde(with = "crate::serde_minutes")]
    pub runtime: Duration,
    pub episode_guide_url: String,
    pub actors: Vec<Actor>,
    pub images: ImageSet,
    pub named_seasons: Vec<NamedSeason>,
}

impl TvShow {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            ..Self::default()
        }
    }

    pub fn add_genre(&mut self, genre: impl Into<String>) {
        self.genres.insert(genre);
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

    /// Set the name of a season, replacing an earlier name for the same number
    pub fn set_season_name(&mut self, number: u32, name: impl Into<String>) {
        let name = name.into();
        match self.named_seasons.iter_mut().find(|s| s.number == number) {
            Some(season) => season.name = name,
            None => self.named_seasons.push(NamedSeason { number, name }),
        }
    }

    pub fn season_name(&self, number: u32) -> Option<&str> {
        self.named_seasons
            .iter()
            .find(|s| s.number == number)
            .map(|s| s.name.as_str())
    }

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
    fn test_season_names_replace_by_number() {
        let mut show = TvShow::new("Breaking Bad");
        show.set_season_name(1, "First");
        show.set_season_name(2, "Second");
        show.set_season_name(1, "Pilot Season");

        assert_eq!(show.named_seasons.len(), 2);
        assert_eq!(show.season_name(1), Some("Pilot Season"));
        assert_eq!(show.season_name(3), None);
    }
}

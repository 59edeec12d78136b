pub mod actor;
pub mod images;
pub mod media;
pub mod media_ids;
pub mod movie;
pub mod rating;
pub mod tv_show;
pub mod unique_list;

pub use actor::Actor;
pub use images::{ImageSet, Poster};
pub use media::{KodiVersion, MediaType};
pub use media_ids::{MediaIds, UniqueIdType};
pub use movie::{Movie, MovieSet};
pub use rating::{first_rating_mut, Rating, DEFAULT_RATING_SOURCE};
pub use tv_show::{NamedSeason, TvShow};
pub use unique_list::UniqueList;

/// Serde helpers storing a `Duration` as whole minutes
pub(crate) mod serde_minutes {
    use serde::{Deserialize, Deserializer, Serializer};
    use std::time::Duration;

    pub fn serialize<S: Serializer>(value: &Duration, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_u64(value.as_secs() / 60)
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Duration, D::Error> {
        let minutes = u64::deserialize(deserializer)?;
        Ok(Duration::from_secs(minutes.saturating_mul(60)))
    }
}

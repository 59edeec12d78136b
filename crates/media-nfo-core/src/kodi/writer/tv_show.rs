use media_nfo_models::{KodiVersion, MediaType, TvShow};
use tracing::debug;

use super::{
    actors, fanart, legacy_rating, legacy_votes, optional_number, posters, ratings_block, render, runtime_text,
    tags, unique_ids, Slot, Template,
};
use crate::error::Result;
use crate::kodi::values;
use crate::xml::{self, Element, ElementTree, SerializeOptions};

const TITLES: &[Slot<TvShow>] = &[
    Slot::Text("title", |s| s.title.clone()),
    Slot::Text("showtitle", |s| s.show_title.clone()),
    Slot::Optional("sorttitle", |s| s.sort_title.clone()),
];

const LEGACY_RATING: &[Slot<TvShow>] = &[
    Slot::Text("rating", |s| legacy_rating(&s.ratings)),
    Slot::Text("votes", |s| legacy_votes(&s.ratings)),
];

const RATINGS: &[Slot<TvShow>] = &[Slot::Compound(|s| ratings_block(&s.ratings))];

const DETAILS: &[Slot<TvShow>] = &[
    Slot::Text("top250", |s| s.top250.to_string()),
    Slot::Text("episode", |s| s.episode_count.to_string()),
    Slot::Text("plot", |s| s.overview.clone()),
    Slot::Text("outline", |s| s.outline.clone()),
    Slot::Text("mpaa", |s| s.certification.clone()),
    Slot::Text("premiered", |s| values::format_date(s.first_aired)),
    Slot::Text("studio", |s| s.studios.join(" / ")),
    Slot::Text("tvdbid", |s| optional_number(s.ids.tvdb_id)),
    Slot::Text("id", |s| s.ids.id.clone().unwrap_or_default()),
    Slot::Text("imdbid", |s| s.ids.imdb_id.clone().unwrap_or_default()),
    Slot::Optional("status", |s| s.status.clone()),
    Slot::Optional("runtime", |s| runtime_text(s.runtime_minutes())),
    Slot::Repeated(episode_guide),
    Slot::Text("genre", |s| s.genres.join(" / ")),
];

const UNIQUE_IDS: &[Slot<TvShow>] = &[Slot::Repeated(|s| unique_ids(&s.ids))];

const NAMED_SEASONS: &[Slot<TvShow>] = &[Slot::Repeated(named_seasons)];

const MEDIA: &[Slot<TvShow>] = &[
    Slot::Repeated(|s| tags(&s.tags)),
    Slot::Repeated(|s| actors(&s.actors)),
    Slot::Repeated(|s| posters(&s.images.posters)),
    Slot::Repeated(|s| fanart(&s.images.backdrops)),
];

static TV_SHOW_V16: &Template<TvShow> = &[TITLES, LEGACY_RATING, DETAILS, MEDIA];
static TV_SHOW_V17: &Template<TvShow> = &[TITLES, RATINGS, DETAILS, UNIQUE_IDS, MEDIA];
static TV_SHOW_V18: &Template<TvShow> = &[TITLES, RATINGS, DETAILS, UNIQUE_IDS, NAMED_SEASONS, MEDIA];

/// Renders a [`TvShow`] as a `<tvshow>` document for one Kodi generation
#[derive(Debug, Clone, Copy)]
pub struct TvShowXmlWriter {
    version: KodiVersion,
}

impl TvShowXmlWriter {
    pub fn new(version: KodiVersion) -> Self {
        Self { version }
    }

    pub fn write(&self, show: &TvShow) -> ElementTree {
        let template = match self.version {
            KodiVersion::V16 => TV_SHOW_V16,
            KodiVersion::V17 => TV_SHOW_V17,
            KodiVersion::V18 => TV_SHOW_V18,
        };
        debug!(version = %self.version, title = %show.title, "Writing tv show NFO");
        render(MediaType::Show.root_tag(), template, show)
    }

    /// [`write`](Self::write) followed by serialization
    pub fn write_bytes(&self, show: &TvShow, options: &SerializeOptions) -> Result<Vec<u8>> {
        xml::serialize(&self.write(show), options)
    }
}

impl Default for TvShowXmlWriter {
    fn default() -> Self {
        Self::new(KodiVersion::default())
    }
}

fn episode_guide(show: &TvShow) -> Vec<Element> {
    if show.episode_guide_url.is_empty() {
        return Vec::new();
    }
    let mut guide = Element::new("episodeguide");
    guide.push_child(Element::with_text("url", show.episode_guide_url.as_str()));
    vec![guide]
}

fn named_seasons(show: &TvShow) -> Vec<Element> {
    show.named_seasons
        .iter()
        .map(|season| {
            Element::with_text("namedseason", season.name.as_str()).with_attribute("number", season.number.to_string())
        })
        .collect()
}

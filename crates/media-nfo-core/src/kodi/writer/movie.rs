use media_nfo_models::{KodiVersion, MediaType, Movie};
use tracing::debug;

use super::{
    actors, fanart, legacy_rating, legacy_votes, optional_number, posters, ratings_block, render, runtime_text,
    tags, unique_ids, Slot, Template,
};
use crate::error::Result;
use crate::kodi::values;
use crate::xml::{self, Element, ElementTree, SerializeOptions};

const LAYOUT_V16: &[Slot<Movie>] = &[
    Slot::Text("title", |m| m.title.clone()),
    Slot::Text("originaltitle", |m| m.original_title.clone()),
    Slot::Text("sorttitle", |m| m.sort_title.clone()),
    Slot::Text("rating", |m| legacy_rating(&m.ratings)),
    Slot::Text("votes", |m| legacy_votes(&m.ratings)),
    Slot::Text("top250", |m| m.top250.to_string()),
    Slot::Text("year", |m| values::format_year(m.released)),
    Slot::Text("plot", |m| m.overview.clone()),
    Slot::Text("outline", |m| m.outline.clone()),
    Slot::Text("tagline", |m| m.tagline.clone()),
    Slot::Text("runtime", |m| runtime_text(m.runtime_minutes())),
    Slot::Text("mpaa", |m| m.certification.clone()),
    Slot::Text("playcount", |m| m.play_count.to_string()),
    Slot::Text("lastplayed", |m| values::format_date_time(m.last_played)),
    Slot::Text("id", |m| m.ids.id.clone().unwrap_or_default()),
    Slot::Text("tmdbid", |m| optional_number(m.ids.tmdb_id)),
    Slot::Text("set", |m| m.set.name.clone()),
    Slot::Text("trailer", |m| m.trailer.clone()),
    Slot::Text("watched", |m| values::format_bool(m.watched).to_string()),
    Slot::Text("credits", |m| m.writer.clone()),
    Slot::Text("director", |m| m.director.clone()),
    Slot::Text("premiered", |m| values::format_date(m.released)),
    Slot::Text("dateadded", |m| values::format_date_time(m.date_added)),
    Slot::List("studio", |m| &m.studios),
    Slot::List("genre", |m| &m.genres),
    Slot::List("country", |m| &m.countries),
    Slot::Repeated(|m| tags(&m.tags)),
    Slot::Repeated(|m| actors(&m.actors)),
    Slot::Repeated(|m| posters(&m.images.posters)),
    Slot::Repeated(|m| fanart(&m.images.backdrops)),
];

const LAYOUT_V17: &[Slot<Movie>] = &[
    Slot::Text("title", |m| m.title.clone()),
    Slot::Text("originaltitle", |m| m.original_title.clone()),
    Slot::Text("sorttitle", |m| m.sort_title.clone()),
    Slot::Compound(|m| ratings_block(&m.ratings)),
    Slot::Text("top250", |m| m.top250.to_string()),
    Slot::Text("year", |m| values::format_year(m.released)),
    Slot::Text("plot", |m| m.overview.clone()),
    Slot::Text("outline", |m| m.outline.clone()),
    Slot::Text("tagline", |m| m.tagline.clone()),
    Slot::Text("runtime", |m| runtime_text(m.runtime_minutes())),
    Slot::Text("mpaa", |m| m.certification.clone()),
    Slot::Text("playcount", |m| m.play_count.to_string()),
    Slot::Text("lastplayed", |m| values::format_date_time(m.last_played)),
    Slot::Text("id", |m| m.ids.id.clone().unwrap_or_default()),
    Slot::Repeated(|m| unique_ids(&m.ids)),
    Slot::Compound(movie_set),
    Slot::Text("trailer", |m| m.trailer.clone()),
    Slot::Text("watched", |m| values::format_bool(m.watched).to_string()),
    Slot::Text("credits", |m| m.writer.clone()),
    Slot::Text("director", |m| m.director.clone()),
    Slot::Text("premiered", |m| values::format_date(m.released)),
    Slot::Text("dateadded", |m| values::format_date_time(m.date_added)),
    Slot::List("studio", |m| &m.studios),
    Slot::List("genre", |m| &m.genres),
    Slot::List("country", |m| &m.countries),
    Slot::Repeated(|m| tags(&m.tags)),
    Slot::Repeated(|m| actors(&m.actors)),
    Slot::Repeated(|m| posters(&m.images.posters)),
    Slot::Repeated(|m| fanart(&m.images.backdrops)),
];

static MOVIE_V16: &Template<Movie> = &[LAYOUT_V16];
// Kodi v18 kept the v17 movie layout
static MOVIE_V17: &Template<Movie> = &[LAYOUT_V17];

/// Renders a [`Movie`] as a `<movie>` document for one Kodi generation
#[derive(Debug, Clone, Copy)]
pub struct MovieXmlWriter {
    version: KodiVersion,
}

impl MovieXmlWriter {
    pub fn new(version: KodiVersion) -> Self {
        Self { version }
    }

    pub fn write(&self, movie: &Movie) -> ElementTree {
        let template = if self.version.has_typed_ids() {
            MOVIE_V17
        } else {
            MOVIE_V16
        };
        debug!(version = %self.version, title = %movie.title, "Writing movie NFO");
        render(MediaType::Movie.root_tag(), template, movie)
    }

    /// [`write`](Self::write) followed by serialization
    pub fn write_bytes(&self, movie: &Movie, options: &SerializeOptions) -> Result<Vec<u8>> {
        xml::serialize(&self.write(movie), options)
    }
}

impl Default for MovieXmlWriter {
    fn default() -> Self {
        Self::new(KodiVersion::default())
    }
}


fn movie_set(movie: &Movie) -> Element {
    let mut set = Element::new("set");
    set.push_child(Element::with_text("name", movie.set.name.as_str()));
    set.push_child(Element::with_text("overview", movie.set.overview.as_str()));
    set
}

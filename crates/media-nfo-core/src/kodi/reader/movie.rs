use media_nfo_models::{MediaType, Movie, MovieSet, UniqueIdType};
use tracing::{debug, warn};

use super::{
    apply_legacy_ratings, dispatch_children, read_actor, read_fanart, read_ids, read_poster, read_ratings_block,
    recover, TagHandler, TagTable,
};
use crate::error::{NfoError, Result};
use crate::kodi::values;
use crate::xml::{Element, ElementTree};

static MOVIE_TAGS: &TagTable<Movie> = &[
    ("title", TagHandler::Text(|m, v| m.title = v)),
    ("originaltitle", TagHandler::Text(|m, v| m.original_title = v)),
    ("sorttitle", TagHandler::Text(|m, v| m.sort_title = v)),
    ("plot", TagHandler::Text(|m, v| m.overview = v)),
    ("outline", TagHandler::Text(|m, v| m.outline = v)),
    ("tagline", TagHandler::Text(|m, v| m.tagline = v)),
    ("set", TagHandler::Structural(read_movie_set)),
    ("actor", TagHandler::Structural(read_actor::<Movie>)),
    ("thumb", TagHandler::Structural(read_poster::<Movie>)),
    ("fanart", TagHandler::Structural(read_fanart::<Movie>)),
    ("playcount", TagHandler::Int(|m, v| m.play_count = v)),
    ("top250", TagHandler::Int(|m, v| m.top250 = v)),
    ("tag", TagHandler::Text(|m, v| m.add_tag(v))),
    ("studio", TagHandler::List('/', |m, v| m.add_studio(v))),
    ("genre", TagHandler::List('/', |m, v| m.add_genre(v))),
    ("country", TagHandler::List('/', |m, v| m.add_country(v))),
    ("ratings", TagHandler::Structural(read_ratings_block::<Movie>)),
];

/// Reads `<movie>` documents of every Kodi generation into a [`Movie`]
#[derive(Debug, Clone, Copy, Default)]
pub struct MovieXmlReader;

impl MovieXmlReader {
    pub fn new() -> Self {
        Self
    }

    /// Merge all recognized elements of `tree` into `movie`
    ///
    /// Returns [`NfoError::MissingRoot`] without touching the movie when the
    /// document has no `<movie>` element. Any other problem is recovered
    /// locally.
    pub fn read(&self, tree: &ElementTree, movie: &mut Movie) -> Result<()> {
        let root_tag = MediaType::Movie.root_tag();
        let Some(root) = tree.first_element(root_tag) else {
            warn!(root = %tree.root.name, "[MovieXmlReader] No <movie> tag in the document");
            return Err(NfoError::MissingRoot { expected: root_tag });
        };

        dispatch_children(root, movie, MOVIE_TAGS);
        apply_legacy_ratings(root, movie);
        read_document_fields(tree, movie);
        Ok(())
    }
}

/// Fields looked up across the whole document after the dispatch pass
fn read_document_fields(tree: &ElementTree, movie: &mut Movie) {
    if let Some(year) = tree.first_text("year") {
        movie.released = values::parse_year(&year);
    }
    // Overwrites the release date set by <year>
    if let Some(premiered) = tree.first_text("premiered") {
        movie.released = values::parse_date(&premiered);
    }

    if let Some(runtime) = tree.first_text("runtime") {
        let minutes = recover(values::parse_int("runtime", &runtime));
        movie.set_runtime_minutes(u64::try_from(minutes).unwrap_or(0));
    }
    if let Some(mpaa) = tree.first_text("mpaa") {
        movie.certification = mpaa;
    }

    if let Some(last_played) = tree.first_text("lastplayed") {
        movie.last_played = values::parse_date_time_lenient(&last_played);
    }
    if let Some(date_added) = tree.first_text("dateadded") {
        match values::parse_date_time(&date_added) {
            Some(value) => movie.date_added = Some(value),
            None => debug!(value = %date_added, "Dropping invalid <dateadded>"),
        }
    }

    // v16 wrote the TMDb id as <tmdbid>
    read_ids(tree, &[("tmdbid", UniqueIdType::Tmdb)], &mut movie.ids);

    if let Some(trailer) = tree.first_text("trailer") {
        movie.trailer = trailer;
    }

    movie.watched = match tree.first_text("watched") {
        Some(watched) => watched.trim() == "true",
        None => movie.play_count > 0,
    };

    let credits: Vec<String> = tree.elements_by_tag_name("credits").into_iter().map(Element::text).collect();
    movie.writer = values::join_names(credits.iter().map(String::as_str));

    let directors: Vec<String> = tree.elements_by_tag_name("director").into_iter().map(Element::text).collect();
    movie.director = values::join_names(directors.iter().map(String::as_str));
}

/// Both the v17 and the old syntax are supported:
///
/// ```xml
/// <set>
///   <name>Movie Set Name</name>
///   <overview></overview>
/// </set>
///
/// <set>Movie Set Name</set>
/// ```
fn read_movie_set(movie: &mut Movie, element: &Element) {
    let name = match element.first_descendant("name") {
        Some(name) => name.text(),
        None => element.text(),
    };
    let overview = element
        .first_descendant("overview")
        .map(Element::text)
        .unwrap_or_default();
    movie.set = MovieSet { name, overview };
}

use media_nfo_models::{MediaType, TvShow, UniqueIdType};
use tracing::{debug, warn};

use super::{
    apply_legacy_ratings, dispatch_children, read_actor, read_fanart, read_ids, read_poster, read_ratings_block,
    recover, TagHandler, TagTable,
};
use crate::error::{NfoError, Result};
use crate::kodi::values;
use crate::xml::{Element, ElementTree};

static TV_SHOW_TAGS: &TagTable<TvShow> = &[
    ("title", TagHandler::Text(|s, v| s.title = v)),
    ("showtitle", TagHandler::Text(|s, v| s.show_title = v)),
    ("sorttitle", TagHandler::Text(|s, v| s.sort_title = v)),
    ("plot", TagHandler::Text(|s, v| s.overview = v)),
    ("outline", TagHandler::Text(|s, v| s.outline = v)),
    ("status", TagHandler::Text(|s, v| s.status = v)),
    ("episodeguide", TagHandler::Structural(read_episode_guide)),
    ("top250", TagHandler::Int(|s, v| s.top250 = v)),
    ("episode", TagHandler::Int(|s, v| s.episode_count = v)),
    ("studio", TagHandler::List('/', |s, v| s.add_studio(v))),
    ("genre", TagHandler::List('/', |s, v| s.add_genre(v))),
    ("tag", TagHandler::Text(|s, v| s.add_tag(v))),
    ("actor", TagHandler::Structural(read_actor::<TvShow>)),
    ("thumb", TagHandler::Structural(read_poster::<TvShow>)),
    ("fanart", TagHandler::Structural(read_fanart::<TvShow>)),
    ("ratings", TagHandler::Structural(read_ratings_block::<TvShow>)),
    ("namedseason", TagHandler::Structural(read_named_season)),
];

/// Reads `<tvshow>` documents of every Kodi generation into a [`TvShow`]
#[derive(Debug, Clone, Copy, Default)]
pub struct TvShowXmlReader;

impl TvShowXmlReader {
    pub fn new() -> Self {
        Self
    }

    /// Merge all recognized elements of `tree` into `show`
    ///
    /// Returns [`NfoError::MissingRoot`] without touching the show when the
    /// document has no `<tvshow>` element.
    pub fn read(&self, tree: &ElementTree, show: &mut TvShow) -> Result<()> {
        let root_tag = MediaType::Show.root_tag();
        let Some(root) = tree.first_element(root_tag) else {
            warn!(root = %tree.root.name, "[TvShowXmlReader] No <tvshow> tag in the document");
            return Err(NfoError::MissingRoot { expected: root_tag });
        };

        dispatch_children(root, show, TV_SHOW_TAGS);
        apply_legacy_ratings(root, show);
        read_document_fields(tree, show);
        Ok(())
    }
}

fn read_document_fields(tree: &ElementTree, show: &mut TvShow) {
    if let Some(year) = tree.first_text("year") {
        show.first_aired = values::parse_year(&year);
    }
    if let Some(premiered) = tree.first_text("premiered") {
        show.first_aired = values::parse_date(&premiered);
    }

    if let Some(runtime) = tree.first_text("runtime") {
        let minutes = recover(values::parse_int("runtime", &runtime));
        show.set_runtime_minutes(u64::try_from(minutes).unwrap_or(0));
    }
    if let Some(mpaa) = tree.first_text("mpaa") {
        show.certification = mpaa;
    }

    read_ids(
        tree,
        &[
            ("tvdbid", UniqueIdType::Tvdb),
            ("imdbid", UniqueIdType::Imdb),
            ("tmdbid", UniqueIdType::Tmdb),
        ],
        &mut show.ids,
    );
}

/// `<episodeguide><url>...</url></episodeguide>` or the plain URL as text
fn read_episode_guide(show: &mut TvShow, element: &Element) {
    let url = match element.first_descendant("url") {
        Some(url) => url.text(),
        None => element.text(),
    };
    show.episode_guide_url = url.trim().to_string();
}

/// `<namedseason number="1">Season Name</namedseason>`
fn read_named_season(show: &mut TvShow, element: &Element) {
    let number = element
        .attribute("number")
        .and_then(|n| n.trim().parse::<u32>().ok());
    match number {
        Some(number) => show.set_season_name(number, element.text()),
        None => debug!("Ignoring <namedseason> without a valid number"),
    }
}

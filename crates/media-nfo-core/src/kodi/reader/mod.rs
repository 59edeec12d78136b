//! Version-tolerant NFO readers.
//!
//! A reader walks the direct children of the root element and dispatches each
//! tag through a static table of [`TagHandler`]s, then resolves the fields
//! that need whole-document lookups or precedence rules. Unknown tags are
//! ignored; malformed values fall back to defaults.

mod movie;
mod tv_show;


pub use movie::MovieXmlReader;
pub use tv_show::TvShowXmlReader;

use media_nfo_models::{
    first_rating_mut, Actor, ImageSet, MediaIds, Movie, Poster, Rating, TvShow, UniqueIdType, DEFAULT_RATING_SOURCE,
};
use tracing::debug;

use super::values;
use crate::error::Result;
use crate::xml::{Element, ElementTree};

/// How the text of one tag is merged into a record
pub(crate) enum TagHandler<R> {
    /// Raw element text
    Text(fn(&mut R, String)),
    /// Integer; non-numeric text becomes 0
    Int(fn(&mut R, i32)),
    /// Text split on a delimiter, every trimmed non-empty part appended
    List(char, fn(&mut R, &str)),
    /// Compound element handled as a whole
    Structural(fn(&mut R, &Element)),
}

pub(crate) type TagTable<R> = [(&'static str, TagHandler<R>)];

/// Parts of a record shared by the structural handlers
pub(crate) trait NfoRecord {
    fn ratings_mut(&mut self) -> &mut Vec<Rating>;
    fn actors_mut(&mut self) -> &mut Vec<Actor>;
    fn images_mut(&mut self) -> &mut ImageSet;
}

impl NfoRecord for Movie {
    fn ratings_mut(&mut self) -> &mut Vec<Rating> {
        &mut self.ratings
    }

    fn actors_mut(&mut self) -> &mut Vec<Actor> {
        &mut self.actors
    }

    fn images_mut(&mut self) -> &mut ImageSet {
        &mut self.images
    }
}

impl NfoRecord for TvShow {
    fn ratings_mut(&mut self) -> &mut Vec<Rating> {
        &mut self.ratings
    }

    fn actors_mut(&mut self) -> &mut Vec<Actor> {
        &mut self.actors
    }

    fn images_mut(&mut self) -> &mut ImageSet {
        &mut self.images
    }
}

/// Run every direct child of `root` through the matching table entry
pub(crate) fn dispatch_children<R>(root: &Element, record: &mut R, table: &'static TagTable<R>) {
    let mut handled = 0usize;
    let mut ignored = 0usize;

    for element in root.child_elements() {
        let Some((tag, handler)) = table.iter().find(|(tag, _)| *tag == element.name) else {
            ignored += 1;
            continue;
        };
        handled += 1;

        match handler {
            TagHandler::Text(set) => set(record, element.text()),
            TagHandler::Int(set) => set(record, recover(values::parse_int(*tag, &element.text()))),
            TagHandler::List(delimiter, add) => {
                let text = element.text();
                for item in values::split_list(&text, *delimiter) {
                    add(record, item);
                }
            }
            TagHandler::Structural(read) => read(record, element),
        }
    }

    debug!(root = %root.name, handled, ignored, "Dispatched NFO elements");
}

/// Unwrap a parsed value, logging and substituting the default on failure
pub(crate) fn recover<T: Default>(result: Result<T>) -> T {
    result.unwrap_or_else(|err| {
        debug!(error = %err, "Using default for unparseable NFO value");
        T::default()
    })
}

/// Like [`recover`] but silent for empty text, which just means "not set"
fn recover_non_empty<T: Default>(text: &str, parse: impl FnOnce(&str) -> Result<T>) -> T {
    if text.trim().is_empty() {
        T::default()
    } else {
        recover(parse(text))
    }
}

/// `<actor><name/><role/><thumb/></actor>`
pub(crate) fn read_actor<R: NfoRecord>(record: &mut R, element: &Element) {
    let text_of = |name: &str| element.first_descendant(name).map(Element::text).unwrap_or_default();
    let actor = Actor {
        name: text_of("name"),
        role: text_of("role"),
        thumb: text_of("thumb"),
        image_has_changed: false,
    };
    record.actors_mut().push(actor);
}

/// `<thumb preview="...">url</thumb>` as a direct child of the root
pub(crate) fn read_poster<R: NfoRecord>(record: &mut R, element: &Element) {
    record.images_mut().add_poster(poster_from(element));
}

/// `<fanart><thumb preview="...">url</thumb>...</fanart>`
pub(crate) fn read_fanart<R: NfoRecord>(record: &mut R, element: &Element) {
    for thumb in element.descendants("thumb") {
        record.images_mut().add_backdrop(poster_from(thumb));
    }
}

fn poster_from(thumb: &Element) -> Poster {
    Poster::new(thumb.text().trim(), thumb.attribute("preview").unwrap_or_default())
}

/// Kodi v17 block:
///
/// ```xml
/// <ratings>
///   <rating name="default" max="10" default="true">
///     <value>10</value>
///     <votes>10</votes>
///   </rating>
/// </ratings>
/// ```
pub(crate) fn read_ratings_block<R: NfoRecord>(record: &mut R, element: &Element) {
    for rating_element in element.descendants("rating") {
        let source = rating_element
            .attribute("name")
            .unwrap_or(DEFAULT_RATING_SOURCE)
            .to_string();
        let max = rating_element
            .attribute("max")
            .and_then(|max| max.trim().parse::<i64>().ok())
            .unwrap_or(0);

        let value_text = rating_element.first_descendant("value").map(Element::text).unwrap_or_default();
        let votes_text = rating_element.first_descendant("votes").map(Element::text).unwrap_or_default();

        let rating = Rating::new(
            source,
            recover_non_empty(&value_text, |t| values::parse_rating_value("value", t)),
            recover_non_empty(&votes_text, |t| values::parse_vote_count("votes", t)),
        )
        .with_max_rating(max);

        record.ratings_mut().push(rating);
    }
}

/// Apply the v16 `<rating>` and `<votes>` children of `root`
///
/// Runs after the dispatch pass so that the legacy values overwrite the
/// first entry of a `<ratings>` block wherever it appears in the document.
pub(crate) fn apply_legacy_ratings<R: NfoRecord>(root: &Element, record: &mut R) {
    for element in root.child_elements() {
        match element.name.as_str() {
            "rating" => read_legacy_rating(record, element),
            "votes" => read_legacy_votes(record, element),
            _ => {}
        }
    }
}

/// Kodi v16 `<rating>10.0</rating>`, applied to the first rating entry
fn read_legacy_rating<R: NfoRecord>(record: &mut R, element: &Element) {
    let text = element.text();
    if text.trim().is_empty() {
        return;
    }
    first_rating_mut(record.ratings_mut()).rating = recover(values::parse_rating_value("rating", &text));
}

/// Kodi v16 `<votes>100</votes>`, applied to the first rating entry
fn read_legacy_votes<R: NfoRecord>(record: &mut R, element: &Element) {
    let text = element.text();
    if text.trim().is_empty() {
        return;
    }
    first_rating_mut(record.ratings_mut()).vote_count = recover(values::parse_vote_count("votes", &text));
}

/// Collect every id of the document into `ids`
///
/// `<uniqueid>` values win over the per-provider `provider_tags` of older
/// generations. Namespaces the document does not mention keep their value.
pub(crate) fn read_ids(tree: &ElementTree, provider_tags: &[(&str, UniqueIdType)], ids: &mut MediaIds) {
    let mut found = MediaIds::new();
    for element in tree.elements_by_tag_name("uniqueid") {
        read_unique_id(element, &mut found);
    }

    let mut legacy = MediaIds::new();
    if let Some(id) = tree.first_text("id") {
        let id = id.trim();
        if !id.is_empty() {
            legacy.id = Some(id.to_string());
        }
    }
    for &(tag, kind) in provider_tags {
        if let Some(value) = tree.first_text(tag) {
            if !value.trim().is_empty() && !legacy.set_unique_id(kind, &value) {
                debug!(tag, value = %value, "Ignoring invalid provider id");
            }
        }
    }

    found.merge(&legacy);
    found.merge(ids);
    *ids = found;
}

/// `<uniqueid type="tmdb">603</uniqueid>`; unknown types are ignored
fn read_unique_id(element: &Element, ids: &mut MediaIds) {
    let Some(type_attr) = element.attribute("type") else {
        debug!("Ignoring <uniqueid> without type attribute");
        return;
    };
    match type_attr.parse::<UniqueIdType>() {
        Ok(kind) => {
            let value = element.text();
            if !ids.set_unique_id(kind, &value) {
                debug!(%kind, value = %value, "Ignoring invalid <uniqueid> value");
            }
        }
        Err(_) => debug!(kind = %type_attr, "Ignoring unsupported <uniqueid> type"),
    }
}

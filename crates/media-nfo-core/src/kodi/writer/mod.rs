//! Version-pinned NFO writers.
//!
//! Every writer is a fixed template: ordered sections of [`Slot`]s walked by
//! [`render`]. Generations that share a run of elements share the section. Scalar slots are emitted even when the record has no value, so
//! the element order Kodi expects never depends on which fields are set.

mod movie;
mod tv_show;


pub use movie::MovieXmlWriter;
pub use tv_show::TvShowXmlWriter;

use media_nfo_models::{Actor, MediaIds, Poster, Rating, UniqueList};

use super::values;
use crate::xml::{Element, ElementTree};

/// One position in a writer template
pub(crate) enum Slot<R> {
    /// Leaf element, always emitted (empty text when unset)
    Text(&'static str, fn(&R) -> String),
    /// Leaf element emitted only when the text is not empty
    Optional(&'static str, fn(&R) -> String),
    /// One element per value, or a single empty element for an empty list
    List(&'static str, fn(&R) -> &UniqueList),
    /// A compound element, always emitted
    Compound(fn(&R) -> Element),
    /// Zero or more elements (actors, images, typed ids, ...)
    Repeated(fn(&R) -> Vec<Element>),
}

/// Ordered sections making up one generation's layout
pub(crate) type Template<R> = [&'static [Slot<R>]];

/// Build the document for `record` by walking `template` in order
pub(crate) fn render<R>(root_tag: &'static str, template: &Template<R>, record: &R) -> ElementTree {
    let mut root = Element::new(root_tag);

    for slot in template.iter().flat_map(|section| section.iter()) {
        match slot {
            Slot::Text(tag, get) => root.push_child(Element::with_text(*tag, get(record))),
            Slot::Optional(tag, get) => {
                let text = get(record);
                if !text.is_empty() {
                    root.push_child(Element::with_text(*tag, text));
                }
            }
            Slot::List(tag, get) => {
                let values = get(record);
                if values.is_empty() {
                    root.push_child(Element::new(*tag));
                }
                for value in values {
                    root.push_child(Element::with_text(*tag, value.as_str()));
                }
            }
            Slot::Compound(build) => root.push_child(build(record)),
            Slot::Repeated(build) => {
                for element in build(record) {
                    root.push_child(element);
                }
            }
        }
    }

    ElementTree::new(root)
}

/// `<ratings>` block; the first entry is marked as default
pub(crate) fn ratings_block(ratings: &[Rating]) -> Element {
    let mut block = Element::new("ratings");
    for (index, rating) in ratings.iter().enumerate() {
        let mut element = Element::new("rating")
            .with_attribute("name", rating.source.as_str())
            .with_attribute("default", values::format_bool(index == 0));
        if let Some(max) = rating.max_rating {
            element.set_attribute("max", max.to_string());
        }
        element.push_child(Element::with_text("value", values::format_float(rating.rating)));
        element.push_child(Element::with_text("votes", rating.vote_count.to_string()));
        block.push_child(element);
    }
    block
}

/// Text of the v16 `<rating>` element
pub(crate) fn legacy_rating(ratings: &[Rating]) -> String {
    ratings
        .first()
        .map(|rating| values::format_float(rating.rating))
        .unwrap_or_default()
}

/// Text of the v16 `<votes>` element
pub(crate) fn legacy_votes(ratings: &[Rating]) -> String {
    ratings
        .first()
        .map(|rating| rating.vote_count.to_string())
        .unwrap_or_default()
}

/// One `<uniqueid type="...">` per known namespace, the first one as default
pub(crate) fn unique_ids(ids: &MediaIds) -> Vec<Element> {
    ids.unique_ids()
        .into_iter()
        .enumerate()
        .map(|(index, (kind, value))| {
            Element::with_text("uniqueid", value)
                .with_attribute("type", kind.as_str())
                .with_attribute("default", values::format_bool(index == 0))
        })
        .collect()
}

pub(crate) fn actors(actors: &[Actor]) -> Vec<Element> {
    actors
        .iter()
        .map(|actor| {
            let mut element = Element::new("actor");
            element.push_child(Element::with_text("name", actor.name.as_str()));
            element.push_child(Element::with_text("role", actor.role.as_str()));
            if !actor.thumb.is_empty() {
                element.push_child(Element::with_text("thumb", actor.thumb.as_str()));
            }
            element
        })
        .collect()
}

pub(crate) fn posters(posters: &[Poster]) -> Vec<Element> {
    posters
        .iter()
        .map(|poster| thumb(poster).with_attribute("aspect", "poster"))
        .collect()
}

/// `<fanart>` wrapping every backdrop; omitted when there are none
pub(crate) fn fanart(backdrops: &[Poster]) -> Vec<Element> {
    if backdrops.is_empty() {
        return Vec::new();
    }
    let mut element = Element::new("fanart");
    for backdrop in backdrops {
        element.push_child(thumb(backdrop));
    }
    vec![element]
}

fn thumb(image: &Poster) -> Element {
    let element = Element::with_text("thumb", image.original_url.as_str());
    if image.thumb_url.is_empty() {
        element
    } else {
        element.with_attribute("preview", image.thumb_url.as_str())
    }
}

/// Tags are free-form and emitted only when present
pub(crate) fn tags(tags: &UniqueList) -> Vec<Element> {
    tags.iter().map(|tag| Element::with_text("tag", tag.as_str())).collect()
}

/// Runtime in whole minutes, empty when unknown
pub(crate) fn runtime_text(minutes: u64) -> String {
    if minutes == 0 {
        String::new()
    } else {
        minutes.to_string()
    }
}

pub(crate) fn optional_number(value: Option<u32>) -> String {
    value.map(|v| v.to_string()).unwrap_or_default()
}

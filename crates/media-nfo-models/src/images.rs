use serde::{Deserialize, Serialize};

/// One image candidate: full resolution URL plus preview URL
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Poster {
    pub original_url: String,
    pub thumb_url: String,
}

impl Poster {
    pub fn new(original_url: impl Into<String>, thumb_url: impl Into<String>) -> Self {
        Self {
            original_url: original_url.into(),
            thumb_url: thumb_url.into(),
        }
    }
}

/// Poster and backdrop candidates in the order they were found
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct ImageSet {
    pub posters: Vec<Poster>,
    pub backdrops: Vec<Poster>,
}

impl ImageSet {
    pub fn add_poster(&mut self, poster: Poster) {
        self.posters.push(poster);
    }

    pub fn add_backdrop(&mut self, backdrop: Poster) {
        self.backdrops.push(backdrop);
    }

    pub fn is_empty(&self) -> bool {
        self.posters.is_empty() && self.backdrops.is_empty()
    }
}

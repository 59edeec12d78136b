use serde::{Deserialize, Serialize};

/// Cast member of a movie or show
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Actor {
    pub name: String,
    pub role: String,
    pub thumb: String, // URL of the actor image
    /// The thumbnail must be fetched again; never set by a fresh NFO read
    #[serde(default)]
    pub image_has_changed: bool,
}

impl Actor {
    pub fn new(name: impl Into<String>, role: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            role: role.into(),
            thumb: String::new(),
            image_has_changed: false,
        }
    }

    pub fn with_thumb(mut self, thumb: impl Into<String>) -> Self {
        self.thumb = thumb.into();
        self
    }
}

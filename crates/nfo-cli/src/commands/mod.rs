pub mod check;
pub mod config;
pub mod convert;
pub mod show;

use color_eyre::eyre::{eyre, Context};
use color_eyre::Result;
use media_nfo_core::{detect_media_type, xml, MovieXmlReader, TvShowXmlReader};
use media_nfo_models::{MediaType, Movie, TvShow};
use std::path::Path;

/// A record read from an NFO file
pub enum LoadedNfo {
    Movie(Movie),
    Show(TvShow),
}

impl LoadedNfo {
    pub fn media_type(&self) -> MediaType {
        match self {
            LoadedNfo::Movie(_) => MediaType::Movie,
            LoadedNfo::Show(_) => MediaType::Show,
        }
    }

    pub fn title(&self) -> &str {
        match self {
            LoadedNfo::Movie(movie) => &movie.title,
            LoadedNfo::Show(show) => &show.title,
        }
    }
}

/// Read `path`, detect its root element and run the matching reader
pub async fn read_nfo(path: &Path) -> Result<LoadedNfo> {
    let bytes = tokio::fs::read(path)
        .await
        .wrap_err_with(|| format!("Failed to read {}", path.display()))?;
    let tree = xml::parse(&bytes).wrap_err_with(|| format!("Failed to parse {}", path.display()))?;

    let media_type = detect_media_type(&tree)
        .ok_or_else(|| eyre!("{} contains neither a <movie> nor a <tvshow> element", path.display()))?;
    tracing::debug!(file = %path.display(), root = media_type.root_tag(), "Detected NFO type");

    match media_type {
        MediaType::Movie => {
            let mut movie = Movie::default();
            MovieXmlReader::new().read(&tree, &mut movie)?;
            Ok(LoadedNfo::Movie(movie))
        }
        MediaType::Show => {
            let mut show = TvShow::default();
            TvShowXmlReader::new().read(&tree, &mut show)?;
            Ok(LoadedNfo::Show(show))
        }
    }
}

pub mod error;
pub mod kodi;
pub mod xml;

pub use error::{NfoError, Result};
pub use kodi::{MovieXmlReader, MovieXmlWriter, TvShowXmlReader, TvShowXmlWriter};
pub use xml::{Element, ElementTree, SerializeOptions};

use media_nfo_models::{KodiVersion, MediaType, Movie, TvShow};

/// Parse `bytes` and merge the `<movie>` element into `movie`
pub fn load_movie(bytes: &[u8], movie: &mut Movie) -> Result<()> {
    let tree = xml::parse(bytes)?;
    MovieXmlReader::new().read(&tree, movie)
}

/// Parse `bytes` and merge the `<tvshow>` element into `show`
pub fn load_tv_show(bytes: &[u8], show: &mut TvShow) -> Result<()> {
    let tree = xml::parse(bytes)?;
    TvShowXmlReader::new().read(&tree, show)
}

pub fn movie_to_nfo(movie: &Movie, version: KodiVersion, options: &SerializeOptions) -> Result<Vec<u8>> {
    MovieXmlWriter::new(version).write_bytes(movie, options)
}

pub fn tv_show_to_nfo(show: &TvShow, version: KodiVersion, options: &SerializeOptions) -> Result<Vec<u8>> {
    TvShowXmlWriter::new(version).write_bytes(show, options)
}

/// Which record a document describes, judged by its root element
///
/// Falls back to searching the whole tree so wrapped documents are detected
/// the same way the readers find them.
pub fn detect_media_type(tree: &ElementTree) -> Option<MediaType> {
    MediaType::from_root_tag(&tree.root.name).or_else(|| {
        [MediaType::Movie, MediaType::Show]
            .into_iter()
            .find(|kind| tree.first_element(kind.root_tag()).is_some())
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_detect_media_type() {
        let movie = xml::parse(b"<movie><title>x</title></movie>").unwrap();
        assert_eq!(detect_media_type(&movie), Some(MediaType::Movie));

        let show = xml::parse(b"<tvshow/>").unwrap();
        assert_eq!(detect_media_type(&show), Some(MediaType::Show));

        let wrapped = xml::parse(b"<nfo><tvshow/></nfo>").unwrap();
        assert_eq!(detect_media_type(&wrapped), Some(MediaType::Show));

        let episode = xml::parse(b"<episodedetails/>").unwrap();
        assert_eq!(detect_media_type(&episode), None);
    }

    #[test]
    fn test_load_movie_malformed_leaves_record() {
        let mut movie = Movie::new("Untouched");
        let err = load_movie(b"<movie><title>Broken</movie>", &mut movie).unwrap_err();
        assert!(matches!(err, NfoError::MalformedXml(_)));
        assert!(!err.is_recoverable());
        assert_eq!(movie.title, "Untouched");
    }

    #[test]
    fn test_load_tv_show_missing_root_is_recoverable() {
        let mut show = TvShow::default();
        let err = load_tv_show(b"<movie/>", &mut show).unwrap_err();
        assert!(err.is_recoverable());
        assert_eq!(show, TvShow::default());
    }
}

//! Kodi NFO support: version-tolerant readers, version-pinned writers.

pub mod reader;
pub mod values;
pub mod writer;

pub use reader::{MovieXmlReader, TvShowXmlReader};
pub use writer::{MovieXmlWriter, TvShowXmlWriter};

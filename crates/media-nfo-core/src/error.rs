use thiserror::Error;

pub type Result<T> = std::result::Result<T, NfoError>;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum NfoError {
    /// The input is not well-formed XML; nothing was read
    #[error("Malformed XML: {0}")]
    MalformedXml(String),

    /// The document has no `<movie>`/`<tvshow>` element; treated as "no metadata"
    #[error("No <{expected}> element in the document")]
    MissingRoot { expected: &'static str },

    /// A field value could not be converted; readers recover with a default
    #[error("Unparseable value for <{field}>: {value:?}")]
    UnparseableValue { field: &'static str, value: String },

    #[error("Failed to serialize XML: {0}")]
    Serialize(String),
}

impl NfoError {
    /// Whether the caller may continue as if the file had no metadata
    pub fn is_recoverable(&self) -> bool {
        !matches!(self, NfoError::MalformedXml(_) | NfoError::Serialize(_))
    }
}

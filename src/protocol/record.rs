use std::io::Read;

use serde::Deserialize;
use serde_json::Value;

/// The JSON object key the filter inspects.
pub const NAME_FIELD: &str = "name";

/// One record decoded from standard input.
///
/// The document stays dynamically typed: the filter only ever inspects one
/// field, and a derived struct would reject documents that are valid JSON
/// but not objects (arrays, strings, numbers), which must instead flow to
/// the no-match outcome. Extra fields are ignored by construction.
#[derive(Debug, Deserialize)]
#[serde(transparent)]
pub struct Record(Value);

/// Errors that can occur while decoding a record from standard input.
///
/// Each variant's display form is the full diagnostic line the binary
/// prints before exiting with the no-match status.
#[derive(Debug, thiserror::Error)]
pub enum DecodeError {
    #[error("Error reading standard input: {0}")]
    Read(#[from] std::io::Error),
    #[error("Error decoding JSON: {0}")]
    Json(#[from] serde_json::Error),
}

impl Record {
    /// Consume a reader to EOF, then parse the buffered bytes as one JSON
    /// document. There is no streaming.
    pub fn read(mut reader: impl Read) -> Result<Self, DecodeError> {
        let mut buf = Vec::new();
        reader.read_to_end(&mut buf)?;
        Self::parse(&buf)
    }

    /// Parse a byte buffer into a record.
    ///
    /// Bytes go straight to the JSON parser, so input that is not valid
    /// UTF-8 reports as a [`DecodeError::Json`] rather than an encoding
    /// fault.
    ///
    /// # Examples
    ///
    /// ```
    /// use mad_filter::protocol::Record;
    ///
    /// let record = Record::parse(br#"{"name": "MAD-1042"}"#).unwrap();
    /// assert_eq!(record.name(), Some("MAD-1042"));
    ///
    /// // Any valid JSON parses, object or not. Shape is the decision
    /// // layer's concern, not the protocol's.
    /// let record = Record::parse(b"[1, 2, 3]").unwrap();
    /// assert_eq!(record.name(), None);
    /// ```
    pub fn parse(bytes: &[u8]) -> Result<Self, DecodeError> {
        Ok(serde_json::from_slice(bytes)?)
    }

    /// The record's name, when the document carries one as text.
    ///
    /// Returns `None` when the document is not an object, has no
    /// [`NAME_FIELD`] key, or holds a non-string value there. This is the
    /// single point where JSON field knowledge lives.
    pub fn name(&self) -> Option<&str> {
        self.0.get(NAME_FIELD).and_then(Value::as_str)
    }
}

use crate::protocol::{Record, Verdict};

/// The prefix a record's name must start with. Byte-literal and
/// case-sensitive; a name equal to the prefix itself matches.
pub const NAME_PREFIX: &str = "MAD";

/// Evaluate one record against the fixed name rule.
///
/// Matches when the document is an object whose `name` field is a string
/// starting with [`NAME_PREFIX`]. Everything else is a [`Verdict::NoMatch`]:
/// non-object documents, a missing key, a non-string value, and a name
/// without the prefix are all ordinary non-matches, not errors.
///
/// # Examples
///
/// ```
/// use mad_filter::decision::evaluate;
/// use mad_filter::protocol::{Record, Verdict};
///
/// let record = Record::parse(br#"{"name": "MAD-1042-codec-gate"}"#).unwrap();
/// assert_eq!(evaluate(&record), Verdict::Match);
///
/// let record = Record::parse(br#"{"name": 1042}"#).unwrap();
/// assert_eq!(evaluate(&record), Verdict::NoMatch);
/// ```
pub fn evaluate(record: &Record) -> Verdict {
    match record.name() {
        Some(name) if name.starts_with(NAME_PREFIX) => Verdict::Match,
        _ => Verdict::NoMatch,
    }
}

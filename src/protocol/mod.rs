pub mod record;
pub mod verdict;

pub use record::{DecodeError, Record, NAME_FIELD};
pub use verdict::Verdict;

//! Encoding core for an influxdb metrics reporter.
//!
//! Covers the parts of the reporter that have to be exactly right before a
//! line ever reaches the wire: merging overlapping tag sets with
//! last-write-wins precedence, parsing free-form item names into tags,
//! classifying field values against the line protocol scalar set, and
//! building the `/write` endpoint url. Transport, scheduling and the metric
//! registry itself live elsewhere.

pub mod format;
pub mod precision;
pub mod tags;
pub mod value;
pub mod write_url;

use thiserror::Error;

pub use precision::Precision;
pub use tags::{join_tags, join_tags_with_name, to_tag, to_tags, Tag};
pub use value::{FieldValue, ValueType};
pub use write_url::{parse_query_string, WriteUrlBuilder};

/// Result type for influxfmt operations.
pub type InfluxResult<T> = std::result::Result<T, InfluxError>;

/// Error enum for encoding failures.
///
/// Malformed individual tags never surface here; they are dropped during
/// parsing so that one bad tag cannot abort a whole write. Type and
/// precision faults always surface, since they indicate a programming or
/// configuration defect.
#[derive(Debug, Error, PartialEq)]
pub enum InfluxError {
    /// A field or tag value's type is not a legal line protocol scalar.
    #[error("value type {0:?} is not a valid line protocol scalar")]
    UnsupportedValueType(ValueType),
    /// A timestamp precision short code did not match any known precision.
    #[error("unknown timestamp precision code {0:?}")]
    InvalidPrecision(String),
    /// The assembled write url failed to parse.
    #[error("constructed write url is not valid: {0}")]
    UriConstruction(#[source] url::ParseError),
}

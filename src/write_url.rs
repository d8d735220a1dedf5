//! Write endpoint url construction.
//!
//! Builds the 1.x `/write` endpoint from connection parameters. Parameter
//! values are not percent-encoded; callers pre-sanitize database names and
//! credentials, and the final `Url::parse` pass rejects anything that no
//! longer forms a valid url.

use once_cell::sync::Lazy;
use regex::Regex;
use url::Url;

use crate::{InfluxError, InfluxResult, Precision};

static QUERY_PARAM: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[?&]([A-Za-z0-9.]+)=([^?&]*)").unwrap());

/// Builder for the influxdb write endpoint url.
///
/// ```
/// use influxfmt::{Precision, WriteUrlBuilder};
///
/// let url = WriteUrlBuilder::new("http://host:8086", "db")
///     .precision(Precision::Seconds)
///     .build()
///     .unwrap();
/// assert_eq!(url.as_str(), "http://host:8086/write?db=db&precision=s");
/// ```
#[derive(Debug, Clone)]
pub struct WriteUrlBuilder {
    base_url: String,
    database: String,
    username: Option<String>,
    password: Option<String>,
    retention_policy: Option<String>,
    precision: Option<Precision>,
    default_precision: Precision,
}

impl WriteUrlBuilder {
    pub fn new(base_url: impl Into<String>, database: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            database: database.into(),
            username: None,
            password: None,
            retention_policy: None,
            precision: None,
            default_precision: Precision::default(),
        }
    }

    pub fn username(mut self, username: impl Into<String>) -> Self {
        self.username = Some(username.into());
        self
    }

    pub fn password(mut self, password: impl Into<String>) -> Self {
        self.password = Some(password.into());
        self
    }

    pub fn retention_policy(mut self, retention_policy: impl Into<String>) -> Self {
        self.retention_policy = Some(retention_policy.into());
        self
    }

    /// Per-session precision override.
    pub fn precision(mut self, precision: Precision) -> Self {
        self.precision = Some(precision);
        self
    }

    /// The configured process-wide default, applied when no override is
    /// set. Initializes to nanoseconds.
    pub fn default_precision(mut self, precision: Precision) -> Self {
        self.default_precision = precision;
        self
    }

    /// Assembles the url: base with exactly one trailing slash, the `write`
    /// path segment, mandatory `db`, then `u`, `p` and `rp` in that fixed
    /// order when present and non-blank. `precision` is appended only when
    /// the effective precision is not nanoseconds.
    pub fn build(&self) -> InfluxResult<Url> {
        let mut out = String::with_capacity(self.base_url.len() + 32);
        out.push_str(&self.base_url);
        if !out.ends_with('/') {
            out.push('/');
        }
        out.push_str("write?db=");
        out.push_str(&self.database);

        let optional = [
            ("u", &self.username),
            ("p", &self.password),
            ("rp", &self.retention_policy),
        ];
        for (key, value) in optional.iter() {
            if let Some(value) = value {
                if !value.trim().is_empty() {
                    out.push('&');
                    out.push_str(key);
                    out.push('=');
                    out.push_str(value);
                }
            }
        }

        let precision = self.precision.unwrap_or(self.default_precision);
        if precision != Precision::Nanoseconds {
            out.push_str("&precision=");
            out.push_str(precision.as_code());
        }

        Url::parse(&out).map_err(InfluxError::UriConstruction)
    }
}

/// Extracts `key=value` query parameters from anywhere in the url text,
/// delimited by `?` or `&`. Later occurrences of a key overwrite earlier
/// ones; output order is first occurrence of each key. Introspection aid
/// for urls produced by [WriteUrlBuilder], not a compliant query parser.
pub fn parse_query_string(url: &Url) -> Vec<(String, String)> {
    let mut out: Vec<(String, String)> = Vec::new();
    for caps in QUERY_PARAM.captures_iter(url.as_str()) {
        let key = &caps[1];
        let value = &caps[2];
        match out.iter_mut().find(|entry| entry.0 == key) {
            Some(entry) => entry.1 = value.to_owned(),
            None => out.push((key.to_owned(), value.to_owned())),
        }
    }
    out
}

use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};

use chrono::{DateTime, Utc};
use serde::{Serialize, Serializer};

/// Format used for every human-readable run date.
pub const DISPLAY_DATE_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Identifier of a single run, taken from its snapshot file name.
///
/// The raw text is an RFC 3339 timestamp. Equality and ordering use the raw
/// text only: the producer writes zero-padded UTC names, so lexicographic
/// order is chronological order.
#[derive(Debug, Clone)]
pub struct RunId {
    raw: String,
    at: DateTime<Utc>,
}

impl RunId {
    /// Returns `None` when `raw` is not a canonical RFC 3339 timestamp.
    ///
    /// Only the uppercase `T` date/time separator and uppercase `Z` are
    /// accepted. The lenient spellings chrono also parses (space, `t`, `z`)
    /// would break lexicographic ordering.
    pub fn parse(raw: &str) -> Option<Self> {
        if raw.as_bytes().get(10) != Some(&b'T') || raw.contains(['t', 'z']) {
            return None;
        }
        let at = DateTime::parse_from_rfc3339(raw).ok()?.with_timezone(&Utc);
        Some(Self { raw: raw.to_string(), at })
    }

    pub fn as_str(&self) -> &str {
        &self.raw
    }

    /// The run instant in UTC, formatted with [`DISPLAY_DATE_FORMAT`].
    pub fn display_date(&self) -> String {
        self.at.format(DISPLAY_DATE_FORMAT).to_string()
    }
}

impl PartialEq for RunId {
    fn eq(&self, other: &Self) -> bool {
        self.raw == other.raw
    }
}

impl Eq for RunId {}

impl PartialOrd for RunId {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for RunId {
    fn cmp(&self, other: &Self) -> Ordering {
        self.raw.cmp(&other.raw)
    }
}

impl Hash for RunId {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.raw.hash(state);
    }
}

impl fmt::Display for RunId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.raw)
    }
}

impl Serialize for RunId {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.raw)
    }
}

use std::time::Duration;

use serde::de::Error;
use serde::{Deserialize, Deserializer, Serializer};
use serde_json::Value;

/// Custom deserializer for step durations encoded as integer nanoseconds.
///
/// Textual encodings such as `"1h30m"` are rejected, as are negative and
/// fractional numbers.
pub fn deserialize_nanos<'de, D>(deserializer: D) -> Result<Duration, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    match value {
        Value::Number(n) => {
            let nanos = n.as_u64().ok_or_else(|| {
                D::Error::custom(format!(
                    "invalid duration {}: expected non-negative integer nanoseconds",
                    n
                ))
            })?;
            Ok(Duration::from_nanos(nanos))
        }
        Value::String(s) => Err(Error::custom(format!(
            "textual duration {:?} is not supported, expected integer nanoseconds",
            s
        ))),
        _ => Err(Error::custom("duration must be an integer nanosecond count")),
    }
}

/// Writes a duration back out as integer nanoseconds, saturating at `u64::MAX`.
pub fn serialize_nanos<S>(duration: &Duration, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    serializer.serialize_u64(u64::try_from(duration.as_nanos()).unwrap_or(u64::MAX))
}

/// Custom deserializer for change lists: the producer writes `null` for empty lists
pub fn deserialize_path_list<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<Vec<String>>::deserialize(deserializer)?.unwrap_or_default())
}

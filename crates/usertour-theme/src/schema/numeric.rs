//! Numeric geometry fields stored either as JSON numbers or as digit strings.

use serde::de::Error;
use serde::{Deserialize, Deserializer};

#[derive(Deserialize)]
#[serde(untagged)]
enum NumberOrString {
    Number(u64),
    Text(String),
}

/// Parse a non-negative integer from its persisted string form (`"12"`).
pub fn parse_u32(s: &str) -> Option<u32> {
    s.trim().parse().ok()
}

pub(crate) fn lenient_u32<'de, D>(deserializer: D) -> Result<u32, D::Error>
where
    D: Deserializer<'de>,
{
    match NumberOrString::deserialize(deserializer)? {
        NumberOrString::Number(n) => {
            u32::try_from(n).map_err(|_| D::Error::custom(format!("{n} is out of range")))
        }
        NumberOrString::Text(s) => parse_u32(&s)
            .ok_or_else(|| D::Error::custom(format!("expected a non-negative integer, got \"{s}\""))),
    }
}

//! Lenient serde helpers for partially written documents.

use serde::{Deserialize, Deserializer};

/// Deserialize `null` as `T::default()`.
///
/// Pair with `#[serde(default)]` so a missing key behaves the same.
pub fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Option::<T>::deserialize(deserializer).map(Option::unwrap_or_default)
}

/// Deserialize an optional list of strings, turning `null` entries into `""`.
pub fn nullable_string_list<'de, D>(deserializer: D) -> Result<Option<Vec<String>>, D::Error>
where
    D: Deserializer<'de>,
{
    let list = Option::<Vec<Option<String>>>::deserialize(deserializer)?;
    Ok(list.map(|entries| entries.into_iter().map(Option::unwrap_or_default).collect()))
}

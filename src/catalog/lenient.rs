//! Deserializers that read structurally unexpected catalog values as absent.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer};

/// `None` when the value does not have the shape of `T`.
pub(crate) fn optional<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    let value = plist::Value::deserialize(deserializer)?;
    Ok(plist::from_value(&value).ok())
}

/// Empty when the value is not an array; elements that do not fit `T` become
/// `T::default()` so positions are kept.
pub(crate) fn sequence<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned + Default,
{
    let value = plist::Value::deserialize(deserializer)?;
    let Some(items) = value.into_array() else {
        return Ok(Vec::new());
    };

    Ok(items
        .iter()
        .map(|item| plist::from_value(item).unwrap_or_default())
        .collect())
}

/// Dictionary entries in document order, each decoded as `T` or defaulted.
pub(crate) fn entries<'de, D, T>(deserializer: D) -> Result<Vec<(String, T)>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned + Default,
{
    let value = plist::Value::deserialize(deserializer)?;
    let Some(dictionary) = value.into_dictionary() else {
        return Ok(Vec::new());
    };

    Ok(dictionary
        .into_iter()
        .map(|(key, entry)| {
            let decoded = plist::from_value(&entry).unwrap_or_default();
            (key, decoded)
        })
        .collect())
}

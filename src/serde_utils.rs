use serde::Deserialize;
use serde_json::Value;
use std::str::FromStr;

/// Decodes a string field into an enum, falling back to the enum's default
/// for absent, `null`, or unrecognized values. GROQ projections emit `null`
/// for attributes a document does not carry, so decoding stays lenient.
pub(crate) fn from_str_or_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: serde::Deserializer<'de>,
    T: FromStr + Default,
{
    let value = Option::<String>::deserialize(deserializer)?;
    Ok(value
        .and_then(|s| T::from_str(&s).ok())
        .unwrap_or_default())
}

/// Decodes an optional string field into an enum, mapping absent, `null`,
/// and unrecognized values to `None`.
pub(crate) fn opt_from_str<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: serde::Deserializer<'de>,
    T: FromStr,
{
    let value = Option::<String>::deserialize(deserializer)?;
    Ok(value.and_then(|s| T::from_str(&s).ok()))
}

/// Accepts a string or `null` and yields an owned string, empty when null.
pub(crate) fn string_or_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: serde::Deserializer<'de>,
{
    use serde::de::Error as DeError;

    match Value::deserialize(deserializer)? {
        Value::String(s) => Ok(s),
        Value::Null => Ok(String::new()),
        other => Err(DeError::custom(format!(
            "Expected string for text field, received {other:?}"
        ))),
    }
}

/// Decodes an array of dereferenced documents, dropping `null` entries.
/// A reference whose target was deleted dereferences to `null`; the
/// document itself stays valid, so the dangling entry is simply omitted.
pub(crate) fn vec_dropping_nulls<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: serde::Deserializer<'de>,
    T: serde::de::DeserializeOwned,
{
    let entries = Option::<Vec<Option<T>>>::deserialize(deserializer)?;
    Ok(entries.unwrap_or_default().into_iter().flatten().collect())
}

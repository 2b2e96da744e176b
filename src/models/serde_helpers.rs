//! Custom serde deserializers for lenient API responses.
//!
//! The notification API may omit fields or send them as `null`; these helpers
//! collapse both cases into the type's default value.

use serde::{Deserialize, Deserializer};

/// Deserializes an optional value, mapping `null` to `T::default()`.
///
/// Combine with `#[serde(default)]` so that a missing field is handled too.
///
/// # Examples
/// ```text
/// Input:  {"sent": null}
/// Output: sent = 0
/// ```
pub fn null_as_default<'a, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'a>,
    T: Deserialize<'a> + Default,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// Deserializes a device endpoint, falling back to `"unknown"` on `null`.
pub fn endpoint_or_unknown<'a, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'a>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_else(unknown_endpoint))
}

/// Default value used when the API does not report a device endpoint.
pub fn unknown_endpoint() -> String {
    String::from("unknown")
}

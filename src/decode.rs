use crate::error::TzktError;
use serde::de::DeserializeOwned;

/// Decodes a JSON document whose top level is an array.
///
/// Unknown fields in the elements are ignored. Anything that is not valid JSON,
/// or valid JSON that is not an array, yields [`TzktError::Decode`].
pub fn decode_array<T: DeserializeOwned>(text: &str) -> Result<Vec<T>, TzktError> {
    let items: Vec<T> = serde_json::from_str(text)?;
    Ok(items)
}

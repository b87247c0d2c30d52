pub mod student;
pub mod subject;
pub mod teacher;

use serde::{Deserialize, Deserializer};

/// Reads a JSON `null` as the type's default value.
///
/// The registration API serializes empty slices as `null`, so every array
/// field on the wire goes through this.
pub fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

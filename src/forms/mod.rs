use serde::{Deserialize, Deserializer};

pub mod containers;
pub mod files;
pub mod products;

/// Default currency applied to every cost field the client leaves unset.
pub(crate) fn default_currency() -> String {
    "USD".to_string()
}

/// Deserializes a nullable patch field into a double `Option`, so that an
/// omitted key (`None`) is distinguishable from an explicit `null`
/// (`Some(None)`).
pub(crate) fn double_option<'de, T, D>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
where
    T: Deserialize<'de>,
    D: Deserializer<'de>,
{
    Option::<T>::deserialize(deserializer).map(Some)
}

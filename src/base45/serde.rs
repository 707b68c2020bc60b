//! Stores byte fields as Base45 strings.
//!
//! ```
//! #[derive(serde::Serialize, serde::Deserialize)]
//! struct Payload {
//!     #[serde(with = "base45_codec::serde")]
//!     data: Vec<u8>,
//! }
//! ```

use ::serde::{de, Deserialize, Deserializer, Serializer};

pub fn serialize<T, S>(value: &T, serializer: S) -> Result<S::Ok, S::Error>
where
    T: AsRef<[u8]> + ?Sized,
    S: Serializer,
{
    serializer.serialize_str(&super::encode(value.as_ref()))
}

pub fn deserialize<'de, D>(deserializer: D) -> Result<Vec<u8>, D::Error>
where
    D: Deserializer<'de>,
{
    let input = String::deserialize(deserializer)?;
    super::decode(&input).map_err(de::Error::custom)
}

#![cfg(feature = "serde")]

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use super::Optional;

/// `Some` serializes as the bare value and `None` as an absent value (`null` in JSON). To leave an
/// empty field out entirely, mark it with
/// `#[serde(skip_serializing_if = "Optional::is_none", default)]`.
impl<T: Serialize> Serialize for Optional<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Optional::Some(value) => serializer.serialize_some(value),
            Optional::None => serializer.serialize_none(),
        }
    }
}

impl<'de, T: Deserialize<'de>> Deserialize<'de> for Optional<T> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Option::<T>::deserialize(deserializer).map(Optional::from)
    }
}

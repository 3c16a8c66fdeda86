use serde::{Deserialize, Deserializer};

/// One field of a partial update.
///
/// Distinguishes a key that was left out of the request body (`Unchanged`)
/// from one sent as `null` (`Clear`) and one carrying a value (`Set`). Fields
/// using it need `#[serde(default)]` so that a missing key decodes as
/// `Unchanged` instead of failing.
#[derive(Debug, Clone, PartialEq)]
pub enum Patch<T> {
    Unchanged,
    Clear,
    Set(T),
}

impl<T> Default for Patch<T> {
    fn default() -> Self {
        Patch::Unchanged
    }
}

impl<T> Patch<T> {
    pub fn map<U, F: FnOnce(T) -> U>(self, f: F) -> Patch<U> {
        match self {
            Patch::Unchanged => Patch::Unchanged,
            Patch::Clear => Patch::Clear,
            Patch::Set(v) => Patch::Set(f(v)),
        }
    }

    /// The value to write, if any. An explicit `null` is treated like a
    /// missing key: neither touches the stored column.
    pub fn into_value(self) -> Option<T> {
        match self {
            Patch::Set(v) => Some(v),
            Patch::Unchanged | Patch::Clear => None,
        }
    }
}

impl<'de, T: Deserialize<'de>> Deserialize<'de> for Patch<T> {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        Ok(match Option::<T>::deserialize(deserializer)? {
            Some(v) => Patch::Set(v),
            None => Patch::Clear,
        })
    }
}

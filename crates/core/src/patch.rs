//! Field-presence wrapper for partial updates.
//!
//! A plain `Option<T>` cannot tell "field omitted" apart from "field sent as
//! `null`", and a truthiness check would fold empty strings into the omitted
//! case as well. [`Patch`] keeps all three states apart so update handlers
//! decide explicitly what each one means.
//!
//! Use it on DTO fields together with `#[serde(default)]`:
//!
//! ```
//! use kpi_core::patch::Patch;
//!
//! #[derive(serde::Deserialize)]
//! struct Update {
//!     #[serde(default)]
//!     description: Patch<String>,
//! }
//!
//! let omitted: Update = serde_json::from_str("{}").unwrap();
//! assert!(omitted.description.is_missing());
//! ```

use serde::{Deserialize, Deserializer};

/// Presence state of a single field in a partial update.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Patch<T> {
    /// The field was not present in the payload.
    Missing,
    /// The field was present and explicitly `null`.
    Null,
    /// The field was present with a value (which may be empty).
    Value(T),
}

impl<T> Default for Patch<T> {
    fn default() -> Self {
        Patch::Missing
    }
}

impl<T> Patch<T> {
    pub fn is_missing(&self) -> bool {
        matches!(self, Patch::Missing)
    }

    /// Borrow the supplied value, if any.
    pub fn as_value(&self) -> Option<&T> {
        match self {
            Patch::Value(v) => Some(v),
            Patch::Missing | Patch::Null => None,
        }
    }

    /// Resolve the patch against the current value of a nullable field.
    ///
    /// `Missing` keeps `current`, `Null` clears it, `Value` replaces it.
    pub fn apply_to(self, current: Option<T>) -> Option<T> {
        match self {
            Patch::Missing => current,
            Patch::Null => None,
            Patch::Value(v) => Some(v),
        }
    }
}

impl<'de, T> Deserialize<'de> for Patch<T>
where
    T: Deserialize<'de>,
{
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        // Only reached when the key is present; absent keys fall back to
        // `Default` through `#[serde(default)]`.
        Option::<T>::deserialize(deserializer).map(|value| match value {
            Some(v) => Patch::Value(v),
            None => Patch::Null,
        })
    }
}

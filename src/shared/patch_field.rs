use serde::{Deserialize, Serialize};

// ──────────────────────────────────────────────────────────
// PATCH field semantics
// ──────────────────────────────────────────────────────────
// - omitted => Unset (keep stored value, needs #[serde(default)])
// - null    => Null  (clear)
// - value   => Value (replace)

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PatchField<T> {
    #[serde(skip)]
    Unset,
    Null,
    Value(T),
}

impl<T> Default for PatchField<T> {
    fn default() -> Self {
        PatchField::Unset
    }
}

impl<T> PatchField<T> {
    pub fn is_unset(&self) -> bool {
        matches!(self, PatchField::Unset)
    }

    pub fn as_value(&self) -> Option<&T> {
        if let PatchField::Value(v) = self {
            Some(v)
        } else {
            None
        }
    }

    /// Collapses to the value to write, if any. `Null` maps to `cleared`.
    pub fn resolve(self, cleared: T) -> Option<T> {
        match self {
            PatchField::Unset => None,
            PatchField::Null => Some(cleared),
            PatchField::Value(v) => Some(v),
        }
    }
}

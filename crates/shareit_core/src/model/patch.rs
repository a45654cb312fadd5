//! Partial-update field wrapper.
//!
//! # Invariants
//! - `Keep` never changes the target value.
//! - For optional attributes, `Set(None)` is an explicit clear and is
//!   distinct from `Keep`.

/// Update instruction for one patchable attribute.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldUpdate<T> {
    /// Field was not provided; keep the stored value.
    Keep,
    /// Replace the stored value.
    Set(T),
}

impl<T> FieldUpdate<T> {
    /// Returns the new value when this update replaces the field.
    pub fn as_set(&self) -> Option<&T> {
        match self {
            Self::Keep => None,
            Self::Set(value) => Some(value),
        }
    }

    pub fn is_set(&self) -> bool {
        matches!(self, Self::Set(_))
    }

    /// Writes the new value into `target` when set.
    pub fn apply_to(self, target: &mut T) {
        if let Self::Set(value) = self {
            *target = value;
        }
    }
}

impl<T> Default for FieldUpdate<T> {
    fn default() -> Self {
        Self::Keep
    }
}

/// Null-as-absent conversion for transport payloads where a missing JSON
/// field and `null` are indistinguishable.
impl<T> From<Option<T>> for FieldUpdate<T> {
    fn from(value: Option<T>) -> Self {
        match value {
            Some(value) => Self::Set(value),
            None => Self::Keep,
        }
    }
}

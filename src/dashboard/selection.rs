//! Dropdown selections and the `all` sentinel.

use std::collections::BTreeSet;

/// Filter value meaning "do not restrict on this dimension".
pub const ALL: &str = "all";

/// A parsed multi-select value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Selection {
    /// No restriction.
    All,
    /// Keep rows whose value is one of these.
    Only(BTreeSet<String>),
}

impl Selection {
    /// Interpret raw dropdown values. The sentinel anywhere in the list, or
    /// an empty list, means no restriction.
    #[must_use]
    pub fn from_values<S: AsRef<str>>(values: &[S]) -> Self {
        if values.is_empty() || values.iter().any(|v| v.as_ref() == ALL) {
            return Self::All;
        }
        Self::Only(values.iter().map(|v| v.as_ref().to_string()).collect())
    }

    /// Whether a row with `value` passes. Missing values only pass `All`.
    #[must_use]
    pub fn matches(&self, value: Option<&str>) -> bool {
        match self {
            Self::All => true,
            Self::Only(allowed) => value.is_some_and(|v| allowed.contains(v)),
        }
    }
}

/// The dropdown value representing no restriction.
#[must_use]
pub fn all_values() -> Vec<String> {
    vec![ALL.to_string()]
}

#[cfg(test)]
#[path = "selection_test.rs"]
mod tests;

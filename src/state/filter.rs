/// Category filter state
///
/// The single source of truth for which category currently constrains the
/// grid. Exactly one key is active at any time; activation of a key that was
/// never registered is a lookup failure and leaves the state untouched.

use thiserror::Error;

use super::data::Category;

/// The key that shows every image regardless of category
pub const ALL: &str = "all";

/// One selectable filter control
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterEntry {
    /// Case-folded key used for activation and backend queries
    pub key: String,
    /// Label shown on the control ("All" or the category name as loaded)
    pub label: String,
}

/// Raised when a filter key was never registered
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("no filter control registered for key '{key}'")]
pub struct UnknownFilter {
    pub key: String,
}

#[derive(Debug, Clone)]
pub struct FilterState {
    entries: Vec<FilterEntry>,
    active: String,
}

impl Default for FilterState {
    fn default() -> Self {
        Self::new()
    }
}

impl FilterState {
    /// Start with only the "All" control, which is also the initial active
    /// filter.
    pub fn new() -> Self {
        FilterState {
            entries: vec![FilterEntry {
                key: ALL.to_string(),
                label: "All".to_string(),
            }],
            active: ALL.to_string(),
        }
    }

    /// Register one control per loaded category, after the "All" control.
    /// Categories are loaded once per run, so this replaces any previous
    /// registration wholesale.
    pub fn register_categories(&mut self, categories: &[Category]) {
        self.entries.truncate(1);
        for category in categories {
            self.entries.push(FilterEntry {
                key: category.filter_key(),
                label: category.name.clone(),
            });
        }
        // The active key survives re-registration only if it still exists
        if !self.entries.iter().any(|e| e.key == self.active) {
            self.active = ALL.to_string();
        }
    }

    /// Make `key` the active filter.
    ///
    /// Fails with `UnknownFilter` when no such control exists; the active
    /// key is unchanged in that case and the caller must not reload.
    pub fn activate(&mut self, key: &str) -> Result<(), UnknownFilter> {
        if self.entries.iter().any(|e| e.key == key) {
            self.active = key.to_string();
            Ok(())
        } else {
            Err(UnknownFilter { key: key.to_string() })
        }
    }

    pub fn active(&self) -> &str {
        &self.active
    }

    pub fn entries(&self) -> &[FilterEntry] {
        &self.entries
    }
}

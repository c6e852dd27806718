//! Forced game option overrides.

use serde::Serialize;

/// A classified `ForcedOptions` value.
///
/// Integer values drive selectable (drop-down) options by index; anything
/// else is read as a checkbox state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ForcedValue {
    DropDown(i32),
    CheckBox(bool),
}

/// Forced option overrides, split by control kind.
///
/// Every key lands in exactly one of the two lists.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ForcedOptions {
    pub checkboxes: Vec<(String, bool)>,
    pub dropdowns: Vec<(String, i32)>,
}

impl ForcedOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a classified value under `key`.
    pub fn push(&mut self, key: impl Into<String>, value: ForcedValue) {
        let key = key.into();
        match value {
            ForcedValue::DropDown(index) => self.dropdowns.push((key, index)),
            ForcedValue::CheckBox(checked) => self.checkboxes.push((key, checked)),
        }
    }

    /// Look up the override recorded for `key`.
    pub fn get(&self, key: &str) -> Option<ForcedValue> {
        if let Some((_, index)) = self.dropdowns.iter().find(|(k, _)| k == key) {
            return Some(ForcedValue::DropDown(*index));
        }
        self.checkboxes
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, checked)| ForcedValue::CheckBox(*checked))
    }

    pub fn len(&self) -> usize {
        self.checkboxes.len() + self.dropdowns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.checkboxes.is_empty() && self.dropdowns.is_empty()
    }
}

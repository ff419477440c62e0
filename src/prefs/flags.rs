use serde::Serialize;

use super::store::KeyValueStore;

/// Key of the "show hints" preference
pub const HINTS: &str = "hints";

/// Boolean flags over a string store. Any non-empty value reads as on.
#[derive(Debug, Clone, Default)]
pub struct PreferenceFlags<S> {
    store: S,
}

impl<S: KeyValueStore> PreferenceFlags<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    pub fn set_flag(&mut self, key: &str, value: &str) {
        tracing::debug!(key, value, "set flag");
        self.store.set(key, value);
    }

    pub fn get_flag(&self, key: &str) -> String {
        self.store.get(key)
    }

    pub fn is_flag_set(&self, key: &str) -> bool {
        !self.get_flag(key).is_empty()
    }

    /// Flip the flag and return its new state. An "off" flag is written as
    /// `""`, not removed.
    pub fn toggle_flag(&mut self, key: &str) -> bool {
        if self.is_flag_set(key) {
            self.set_flag(key, "");
            false
        } else {
            self.set_flag(key, "true");
            true
        }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn into_inner(self) -> S {
        self.store
    }
}

/// Display state of the on/off indicator pair and the hint symbols.
///
/// The "enable" control is what the user clicks to turn the flag on, so
/// it shows while the flag is off, and the other way round.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct IndicatorState {
    pub enable_control_visible: bool,
    pub disable_control_visible: bool,
    pub hint_symbols_visible: bool,
}

impl IndicatorState {
    pub fn for_flag(enabled: bool) -> Self {
        Self {
            enable_control_visible: !enabled,
            disable_control_visible: enabled,
            hint_symbols_visible: enabled,
        }
    }
}

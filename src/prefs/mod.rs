//! Preference flag store
//!
//! Small boolean UI preferences (the "hints" toggle) kept in a client-local
//! string key/value store. A flag is on when its stored value is non-empty;
//! clearing writes an empty value instead of removing the entry.
//!
//! - `store`: the `KeyValueStore` seam and an in-memory implementation
//! - `cookie`: cookie-header backed store with whole-segment key matching
//! - `file`: JSON file backed store used by the CLI
//! - `flags`: `PreferenceFlags` get/set/check/toggle and indicator state

mod cookie;
mod file;
mod flags;
mod store;

pub use cookie::{lookup, CookieJar, SITE_PATH};
pub use file::{FileStore, PrefsDocument};
pub use flags::{IndicatorState, PreferenceFlags, HINTS};
pub use store::{KeyValueStore, MemoryStore};

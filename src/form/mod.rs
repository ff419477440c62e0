//! Item creation form controller
//!
//! One creation form serves bugs, tasks, stories and epics. Picking a type
//! switches which effort input and which parent selector are live, blanks
//! the effort that no longer applies, and for epics locks the parent
//! selector behind a synthetic "Disabled" option. At submit time the live
//! values are copied into the fields the server actually reads.
//!
//! The controller only talks to the form through `FormSurface`, so it runs
//! the same against a browser binding or the in-memory `MemorySurface`.

mod controller;
mod item_type;
mod state;
mod surface;

pub use controller::{CommittedSelection, DisabledOption, ItemFormController};
pub use item_type::WorkItemType;
pub use state::{ItemFormState, SelectorState};
pub use surface::{fields, FieldState, FormSurface, MemorySurface, SelectOption};

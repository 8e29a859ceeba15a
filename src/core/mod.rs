//! Core sheet state and the edit-session entrypoints, UI-agnostic.

mod ops;
mod state;

pub use state::{Core, EditState, SheetBounds};

//! Spreadsheet engine API.

mod address;
mod cell;
mod cycle;
mod deps;
mod eval;
mod format;
mod propagate;
mod term;

pub use address::Address;
pub use cell::{Cell, CellKind, Sheet};
pub use cycle::would_cycle;
pub use deps::{add_dependent, extract_refs, remove_dependent, rewire};
pub use eval::{create_engine, evaluate_cell, substitute};
pub use format::{ERROR_SENTINEL, format_dynamic, format_number};
pub use propagate::propagate;
pub use term::{Term, classify, is_cell_reference, is_number, is_operator, tokenize};

//! Cell records and sheet storage.
//!
//! This module provides the core data types for representing cells:
//! - [`CellKind`] - How a cell's value was derived (text, number, or formula)
//! - [`Cell`] - A cell with its value, optional formula, and dependent set
//! - [`Sheet`] - Sparse storage for cells (backed by `DashMap`)

use dashmap::DashMap;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

use super::address::Address;

/// How a cell's value was derived.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum CellKind {
    Text,
    Number,
    Formula,
}

/// A cell in the sheet.
///
/// Cells are created lazily, on first edit or first reference from another
/// cell's formula, and never deleted: clearing a cell resets it to an empty
/// `Number` but keeps the record so its dependents can still find it.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Cell {
    /// Matches the key this cell is stored under.
    pub address: Address,
    pub kind: CellKind,
    /// Current content, textual even for numbers. For formula cells this is
    /// the last computed result.
    pub value: String,
    /// Raw formula text including the leading '='. Present iff `kind` is
    /// `Formula`.
    pub formula: Option<String>,
    /// Addresses of cells whose formulas directly reference this cell.
    pub dependents: HashSet<Address>,
    /// True iff the last evaluation of this cell's formula failed.
    pub has_error: bool,
}

impl Cell {
    /// An unedited cell, materialized because some formula references it.
    pub fn placeholder(address: Address) -> Cell {
        Cell {
            address,
            kind: CellKind::Number,
            value: String::new(),
            formula: None,
            dependents: HashSet::new(),
            has_error: false,
        }
    }

    pub fn new_number(address: Address, value: &str) -> Cell {
        Cell {
            value: value.to_string(),
            ..Cell::placeholder(address)
        }
    }

    pub fn new_text(address: Address, value: &str) -> Cell {
        Cell {
            kind: CellKind::Text,
            value: value.to_string(),
            ..Cell::placeholder(address)
        }
    }

    /// The text an editor should open with: the formula for formula cells,
    /// the literal value otherwise.
    pub fn to_input_string(&self) -> String {
        match self.kind {
            CellKind::Formula => self.formula.clone().unwrap_or_default(),
            _ => self.value.clone(),
        }
    }
}

/// Sparse cell store, the single source of truth for sheet state.
pub type Sheet = DashMap<Address, Cell>;

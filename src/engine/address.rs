//! Cell address codec.
//!
//! Provides bidirectional conversion between 1-based `(row, col)` coordinates
//! and the canonical key notation used everywhere a cell is named (row 1,
//! col 3 ↔ `"C1"`). Row and column 0 are reserved for grid headers and never
//! address a real cell.
//!
//! # Examples
//!
//! ```
//! use cellgraph::engine::Address;
//!
//! let addr = Address::from_str("C1").unwrap();
//! assert_eq!(addr.row, 1);
//! assert_eq!(addr.col, 3);
//! assert_eq!(addr.to_string(), "C1");
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;

/// A cell coordinate: 1-based row and column.
#[derive(Clone, Copy, Debug, Hash, Eq, PartialEq, Serialize, Deserialize)]
pub struct Address {
    pub row: u32,
    pub col: u32,
}

impl Address {
    pub fn new(row: u32, col: u32) -> Address {
        Address { row, col }
    }

    /// Parse an address from key notation (e.g. "A1", "C12").
    /// Returns None if the key is malformed or names the header band.
    #[allow(clippy::should_implement_trait)]
    pub fn from_str(key: &str) -> Option<Address> {
        Self::parse_key(key)
    }

    fn parse_key(key: &str) -> Option<Address> {
        let mut chars = key.chars();
        let letter = chars.next()?;
        if !letter.is_ascii_alphabetic() {
            return None;
        }
        // Column letters are base-36 digits offset by 9, so 'A' is column 1
        // and 'Z' is column 26.
        let col = letter.to_digit(36)? - 9;
        let rest = chars.as_str();
        if rest.is_empty() || !rest.bytes().all(|b| b.is_ascii_digit()) {
            return None;
        }
        let row = rest.parse::<u32>().ok()?;
        if row == 0 {
            return None;
        }
        Some(Address::new(row, col))
    }

    /// Render a column number as its key letter (1 -> A, 26 -> Z).
    pub fn col_to_letter(col: u32) -> char {
        char::from_digit(col + 9, 36)
            .map(|c| c.to_ascii_uppercase())
            .unwrap_or('?')
    }
}

impl std::str::FromStr for Address {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse_key(s).ok_or_else(|| format!("Invalid cell address: {}", s))
    }
}

impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", Address::col_to_letter(self.col), self.row)
    }
}

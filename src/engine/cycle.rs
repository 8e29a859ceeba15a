use std::collections::HashSet;

use super::address::Address;
use super::cell::Sheet;
use super::deps::extract_refs;

/// Check whether committing `formula` at `origin` would close a reference
/// cycle, by walking forward references from each cell the formula names.
/// Runs before the store is touched so a rejected commit leaves no trace.
pub fn would_cycle(origin: Address, formula: &str, sheet: &Sheet) -> bool {
    let mut visited = HashSet::new();
    extract_refs(formula)
        .into_iter()
        .any(|target| reaches(target, origin, sheet, &mut visited))
}

fn reaches(
    current: Address,
    origin: Address,
    sheet: &Sheet,
    visited: &mut HashSet<Address>,
) -> bool {
    if current == origin {
        return true;
    }
    if !visited.insert(current) {
        return false;
    }

    let refs = match sheet.get(&current) {
        Some(cell) => match &cell.formula {
            Some(f) => extract_refs(f),
            None => return false,
        },
        None => return false,
    };

    refs.into_iter()
        .any(|next| reaches(next, origin, sheet, visited))
}

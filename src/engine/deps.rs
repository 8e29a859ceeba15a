//! Dependency back-link maintenance.
//!
//! Each cell carries the set of cells whose formulas reference it. That set
//! is the exact inverse of the formula reference graph and is rewired as part
//! of every commit, so it is never stale between mutations.

use super::address::Address;
use super::cell::{Cell, Sheet};
use super::term::{self, Term};

/// Extract the cell references from formula text, in order of appearance.
/// Duplicates are kept; callers that need a set deduplicate themselves.
pub fn extract_refs(formula: &str) -> Vec<Address> {
    term::tokenize(formula)
        .iter()
        .filter_map(|t| match term::classify(t) {
            Term::Ref(addr) => Some(addr),
            _ => None,
        })
        .collect()
}

/// Insert `dependent` into the dependents of `target`, materializing a
/// placeholder record if `target` has never been edited. Idempotent.
pub fn add_dependent(sheet: &Sheet, target: Address, dependent: Address) {
    let mut cell = sheet
        .entry(target)
        .or_insert_with(|| Cell::placeholder(target));
    cell.dependents.insert(dependent);
}

/// Remove `dependent` from the dependents of `target`. Idempotent; a missing
/// target is a no-op.
pub fn remove_dependent(sheet: &Sheet, target: Address, dependent: Address) {
    if let Some(mut cell) = sheet.get_mut(&target) {
        cell.dependents.remove(&dependent);
    }
}

/// Rewire back-links when `origin`'s formula changes: every cell referenced
/// by the old formula drops `origin` from its dependents, every cell
/// referenced by the new formula gains it. Runs entirely within a commit, so
/// no intermediate state is observable.
pub fn rewire(sheet: &Sheet, origin: Address, old_formula: Option<&str>, new_formula: Option<&str>) {
    if let Some(old) = old_formula {
        for target in extract_refs(old) {
            remove_dependent(sheet, target, origin);
        }
    }
    if let Some(new) = new_formula {
        for target in extract_refs(new) {
            add_dependent(sheet, target, origin);
        }
    }
}

//! Change propagation across the dependency graph.

use std::collections::HashSet;

use log::trace;
use rhai::Engine;

use super::address::Address;
use super::cell::Sheet;
use super::eval::evaluate_cell;

/// Recompute `changed` and every cell transitively reachable through
/// dependent back-links.
///
/// Cells are evaluated in topological order of the dependents graph, so each
/// formula reads fully refreshed inputs; the visited set bounds the walk
/// should the graph ever contain a cycle. Re-running on an already-consistent
/// sheet changes nothing.
pub fn propagate(engine: &Engine, changed: Address, sheet: &Sheet) {
    let mut visited = HashSet::new();
    let mut order = Vec::new();
    collect(changed, sheet, &mut visited, &mut order);
    order.reverse();

    trace!("propagate from {}: {} cell(s)", changed, order.len());
    for addr in order {
        evaluate_cell(engine, addr, sheet);
    }
}

fn collect(
    current: Address,
    sheet: &Sheet,
    visited: &mut HashSet<Address>,
    order: &mut Vec<Address>,
) {
    if !visited.insert(current) {
        return;
    }

    let dependents: Vec<Address> = match sheet.get(&current) {
        Some(cell) => cell.dependents.iter().copied().collect(),
        None => Vec::new(),
    };

    for dep in dependents {
        collect(dep, sheet, visited, order);
    }
    order.push(current);
}

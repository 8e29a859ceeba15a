//! End-to-end tests of the edit-commit-propagate flow through the public API.

use cellgraph::core::{Core, EditState};
use cellgraph::engine::{Address, CellKind, ERROR_SENTINEL};

fn addr(key: &str) -> Address {
    Address::from_str(key).unwrap()
}

fn edit(core: &mut Core, key: &str, text: &str) {
    core.select(addr(key)).unwrap();
    core.begin_edit();
    core.set_buffer(text);
    core.commit().unwrap();
}

fn value(core: &Core, key: &str) -> String {
    core.sheet
        .get(&addr(key))
        .map(|c| c.value.clone())
        .unwrap_or_default()
}

fn has_error(core: &Core, key: &str) -> bool {
    core.sheet.get(&addr(key)).map(|c| c.has_error).unwrap_or(false)
}

#[test]
fn sum_of_two_cells() {
    let mut core = Core::new();
    edit(&mut core, "A1", "1");
    edit(&mut core, "B1", "1");
    edit(&mut core, "C1", "=A1+B1");

    assert_eq!(value(&core, "C1"), "2");
    assert!(!has_error(&core, "C1"));
}

#[test]
fn chained_formulas() {
    let mut core = Core::new();
    edit(&mut core, "A1", "1");
    edit(&mut core, "B1", "1");
    edit(&mut core, "C1", "=A1+B1");
    edit(&mut core, "E1", "100");
    edit(&mut core, "D1", "=C1+E1");

    assert_eq!(value(&core, "D1"), "102");
}

#[test]
fn editing_a_cell_ripples_through_dependents() {
    let mut core = Core::new();
    edit(&mut core, "A1", "1");
    edit(&mut core, "B1", "1");
    edit(&mut core, "C1", "=A1+B1");
    edit(&mut core, "E1", "100");
    edit(&mut core, "D1", "=C1+E1");

    edit(&mut core, "A1", "5");

    assert_eq!(value(&core, "C1"), "6");
    assert_eq!(value(&core, "D1"), "106");
}

#[test]
fn division_by_zero_is_contained() {
    let mut core = Core::new();
    edit(&mut core, "A1", "1");
    // Commit must succeed; the error lives in the cell.
    edit(&mut core, "F1", "=A1/0");

    assert_eq!(value(&core, "F1"), ERROR_SENTINEL);
    assert!(has_error(&core, "F1"));
}

#[test]
fn error_sentinel_flows_into_dependents() {
    let mut core = Core::new();
    edit(&mut core, "A1", "0");
    edit(&mut core, "B1", "=1/A1");
    edit(&mut core, "C1", "=B1+1");

    assert!(has_error(&core, "B1"));
    assert!(has_error(&core, "C1"));

    edit(&mut core, "A1", "2");
    assert!(!has_error(&core, "B1"));
    assert!(!has_error(&core, "C1"));
    assert_eq!(value(&core, "C1"), "1.5");
}

#[test]
fn removing_a_reference_unwires_the_back_link() {
    let mut core = Core::new();
    edit(&mut core, "A1", "1");
    edit(&mut core, "B1", "2");
    edit(&mut core, "C1", "=A1+B1");

    assert!(core.sheet.get(&addr("A1")).unwrap().dependents.contains(&addr("C1")));

    edit(&mut core, "C1", "=B1+B1");

    assert!(!core.sheet.get(&addr("A1")).unwrap().dependents.contains(&addr("C1")));
    assert!(core.sheet.get(&addr("B1")).unwrap().dependents.contains(&addr("C1")));
    assert_eq!(value(&core, "C1"), "4");
}

#[test]
fn dependency_symmetry_after_commits() {
    let mut core = Core::new();
    edit(&mut core, "A1", "1");
    edit(&mut core, "B1", "2");
    edit(&mut core, "C1", "=A1+B1");
    edit(&mut core, "D1", "=C1*2");
    edit(&mut core, "C1", "=B1*3");

    // Every formula reference has a matching back-link, and nothing else.
    let entries: Vec<(Address, Vec<Address>)> = core
        .sheet
        .iter()
        .map(|e| (*e.key(), e.dependents.iter().copied().collect()))
        .collect();
    for (target, dependents) in entries {
        for dep in dependents {
            let formula = core
                .sheet
                .get(&dep)
                .and_then(|c| c.formula.clone())
                .unwrap_or_default();
            assert!(
                cellgraph::engine::extract_refs(&formula).contains(&target),
                "{target} lists {dep} as dependent but is not referenced by it"
            );
        }
    }
    assert!(!core.sheet.get(&addr("A1")).unwrap().dependents.contains(&addr("C1")));
}

#[test]
fn referenced_cells_materialize_as_placeholders() {
    let mut core = Core::new();
    edit(&mut core, "C1", "=Z9+1");

    let z9 = core.sheet.get(&addr("Z9")).unwrap();
    assert_eq!(z9.kind, CellKind::Number);
    assert_eq!(z9.value, "");
    assert!(z9.dependents.contains(&addr("C1")));
    drop(z9);

    // Missing value reads as zero.
    assert_eq!(value(&core, "C1"), "1");

    // Editing the placeholder later updates the formula.
    edit(&mut core, "Z9", "10");
    assert_eq!(value(&core, "C1"), "11");
}

#[test]
fn formula_entry_by_clicking_cells() {
    let mut core = Core::new();
    edit(&mut core, "A1", "3");
    edit(&mut core, "B1", "4");

    core.select(addr("C1")).unwrap();
    core.begin_edit();
    core.set_buffer("=A1+");
    assert_eq!(core.state(), EditState::AwaitingTerm);

    core.select(addr("B1")).unwrap();
    assert_eq!(core.buffer(), "=A1+B1");
    assert_eq!(core.formula_refs(), &[addr("A1"), addr("B1")]);

    core.commit().unwrap();
    assert_eq!(core.state(), EditState::Idle);
    assert_eq!(value(&core, "C1"), "7");
}

#[test]
fn cyclic_formula_is_rejected_at_commit() {
    let mut core = Core::new();
    edit(&mut core, "A1", "=B1+1");

    core.select(addr("B1")).unwrap();
    core.begin_edit();
    core.set_buffer("=A1+1");
    assert!(core.commit().is_err());

    // The rejected commit left no trace in the store.
    let b1 = core.sheet.get(&addr("B1")).unwrap();
    assert!(b1.formula.is_none());
    assert_ne!(b1.kind, CellKind::Formula);
    drop(b1);

    core.cancel();
    assert_eq!(core.state(), EditState::Idle);
}

#[test]
fn self_referential_formula_is_rejected() {
    let mut core = Core::new();
    core.select(addr("G1")).unwrap();
    core.begin_edit();
    core.set_buffer("=G1+1");
    assert!(core.commit().is_err());
    assert!(core.sheet.get(&addr("G1")).is_none());
}

#[test]
fn recommitting_the_same_formula_changes_nothing() {
    let mut core = Core::new();
    edit(&mut core, "A1", "2");
    edit(&mut core, "B1", "=A1*A1");
    assert_eq!(value(&core, "B1"), "4");

    edit(&mut core, "B1", "=A1*A1");
    assert_eq!(value(&core, "B1"), "4");
    assert_eq!(
        core.sheet.get(&addr("A1")).unwrap().dependents.len(),
        1
    );
}

#[test]
fn text_cells_substitute_as_invalid_expressions() {
    let mut core = Core::new();
    edit(&mut core, "A1", "hello");
    edit(&mut core, "B1", "=A1*2");

    assert!(has_error(&core, "B1"));
    assert_eq!(value(&core, "B1"), ERROR_SENTINEL);
}

use log::debug;

use super::state::{Core, EditState};
use crate::engine::{
    self, Address, Cell, CellKind, Term, propagate, rewire, tokenize, would_cycle,
};
use crate::error::{Result, SheetError};

impl Core {
    /// Select a cell.
    ///
    /// While the session awaits a formula term, the click supplies that term:
    /// it appends the cell's key to the buffer, or replaces the trailing key
    /// if the previous term also came from a click. During a plain edit a
    /// non-empty buffer is committed before the selection moves.
    pub fn select(&mut self, addr: Address) -> Result<()> {
        if self.state == EditState::AwaitingTerm {
            let key = addr.to_string();
            let mut terms = tokenize(&self.buffer);
            if self.pending_pick.is_some() {
                if let Some(last) = terms.last_mut() {
                    *last = key;
                }
            } else {
                terms.push(key);
            }
            self.buffer = terms.join("");
            self.pending_pick = Some(addr);
            self.refresh_formula_refs();
            return Ok(());
        }

        if self.state == EditState::Editing && !self.buffer.is_empty() {
            self.commit()?;
        }

        self.selected = addr;
        Ok(())
    }

    /// Open the selected cell for editing, seeding the buffer from its
    /// formula (if it has one) or its literal value.
    pub fn begin_edit(&mut self) {
        let seed = self
            .sheet
            .get(&self.selected)
            .map(|cell| cell.to_input_string())
            .unwrap_or_default();
        self.state = EditState::Editing;
        self.set_buffer(&seed);
    }

    /// Replace the edit buffer with typed input and re-derive the session
    /// state: a formula buffer whose last term is an operator awaits its
    /// next term from a cell click.
    pub fn set_buffer(&mut self, text: &str) {
        if self.state == EditState::Idle {
            return;
        }
        self.buffer = text.to_string();
        self.pending_pick = None;
        self.refresh_session();
    }

    /// Abandon the edit without touching the store.
    pub fn cancel(&mut self) {
        self.state = EditState::Idle;
        self.buffer.clear();
        self.formula_refs.clear();
        self.pending_pick = None;
    }

    /// Commit the edit buffer into the selected cell.
    ///
    /// More than one term commits a formula: back-links are rewired (old
    /// references dropped, new ones added, placeholders created as needed)
    /// and the change is propagated through all transitive dependents.
    /// Exactly one term commits a number or text literal; an empty buffer
    /// clears the cell. A formula that would close a reference cycle is
    /// rejected and the session stays open so the buffer can be corrected.
    pub fn commit(&mut self) -> Result<()> {
        if self.state == EditState::Idle {
            return Ok(());
        }
        let origin = self.selected;
        let terms = tokenize(&self.buffer);

        let old_formula = self
            .sheet
            .get(&origin)
            .and_then(|cell| cell.formula.clone());

        if terms.len() > 1 {
            let formula = terms.join("");
            if would_cycle(origin, &formula, &self.sheet) {
                return Err(SheetError::CircularReference(origin));
            }
            debug!("commit {origin}: formula {formula}");
            rewire(&self.sheet, origin, old_formula.as_deref(), Some(&formula));
            let mut cell = self
                .sheet
                .entry(origin)
                .or_insert_with(|| Cell::placeholder(origin));
            cell.kind = CellKind::Formula;
            cell.formula = Some(formula);
            drop(cell);
        } else {
            let literal = terms.into_iter().next().unwrap_or_default();
            debug!("commit {origin}: literal {literal:?}");
            rewire(&self.sheet, origin, old_formula.as_deref(), None);
            let mut cell = self
                .sheet
                .entry(origin)
                .or_insert_with(|| Cell::placeholder(origin));
            cell.kind = if literal.is_empty() || engine::is_number(&literal) {
                CellKind::Number
            } else {
                CellKind::Text
            };
            cell.value = literal;
            cell.formula = None;
            cell.has_error = false;
            drop(cell);
        }

        propagate(&self.engine, origin, &self.sheet);

        self.state = EditState::Idle;
        self.buffer.clear();
        self.formula_refs.clear();
        self.pending_pick = None;
        Ok(())
    }

    fn refresh_session(&mut self) {
        if !self.buffer.starts_with('=') {
            self.state = EditState::Editing;
            self.formula_refs.clear();
            return;
        }
        self.refresh_formula_refs();
        let terms = tokenize(&self.buffer);
        let ends_with_operator = terms
            .last()
            .map(|t| engine::is_operator(t))
            .unwrap_or(false);
        self.state = if ends_with_operator {
            EditState::AwaitingTerm
        } else {
            EditState::Editing
        };
    }

    fn refresh_formula_refs(&mut self) {
        self.formula_refs = tokenize(&self.buffer)
            .iter()
            .filter_map(|t| match engine::classify(t) {
                Term::Ref(addr) => Some(addr),
                _ => None,
            })
            .collect();
    }
}

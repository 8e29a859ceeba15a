use rhai::Engine;

use crate::engine::{Address, Sheet, create_engine};

/// Grid bounds the presentation layer enforces before calling in. The engine
/// itself only limits addresses to what the key encoding supports.
#[derive(Clone, Copy, Debug)]
pub struct SheetBounds {
    pub max_rows: u32,
    pub max_cols: u32,
}

impl Default for SheetBounds {
    fn default() -> Self {
        SheetBounds {
            max_rows: 49,
            max_cols: 26,
        }
    }
}

/// Edit session states.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EditState {
    Idle,
    /// A cell is open for text entry.
    Editing,
    /// The formula buffer ends with an operator; the next term may come from
    /// clicking a cell.
    AwaitingTerm,
}

/// UI-agnostic sheet state: the cell store plus the active edit session.
///
/// All mutation goes through the edit-session operations on this type
/// (`begin_edit`, `set_buffer`, `select`, `commit`, `cancel`); the
/// presentation layer reads `sheet`, the session state, and the in-progress
/// formula's referenced cells, and never writes cell fields directly.
pub struct Core {
    /// The cell store (DashMap is internally sharded, clones of refs are cheap).
    pub sheet: Sheet,
    pub bounds: SheetBounds,
    /// Expression engine for evaluating formulas.
    pub(crate) engine: Engine,
    pub selected: Address,
    pub(crate) state: EditState,
    pub(crate) buffer: String,
    pub(crate) formula_refs: Vec<Address>,
    /// Cell picked by click while awaiting a term; the next pick replaces
    /// the buffer's trailing term instead of appending.
    pub(crate) pending_pick: Option<Address>,
}

impl Core {
    pub fn new() -> Self {
        Self::with_bounds(SheetBounds::default())
    }

    pub fn with_bounds(bounds: SheetBounds) -> Self {
        Core {
            sheet: Sheet::new(),
            bounds,
            engine: create_engine(),
            selected: Address::new(1, 1),
            state: EditState::Idle,
            buffer: String::new(),
            formula_refs: Vec::new(),
            pending_pick: None,
        }
    }

    /// Current edit session state.
    pub fn state(&self) -> EditState {
        self.state
    }

    /// The in-progress edit buffer.
    pub fn buffer(&self) -> &str {
        &self.buffer
    }

    /// Cells referenced by the in-progress formula, for highlighting.
    pub fn formula_refs(&self) -> &[Address] {
        &self.formula_refs
    }
}

impl Default for Core {
    fn default() -> Self {
        Self::new()
    }
}

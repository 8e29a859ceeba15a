//! Formula evaluation.
//!
//! A formula is recomputed by substituting each referenced cell's current
//! value into its term sequence and handing the resulting expression string
//! to the expression engine. Evaluation is a pure function of the formula
//! text and the referenced values; failures never escape, they become the
//! cell's error sentinel.

use rhai::{Dynamic, Engine};

use super::address::Address;
use super::cell::{CellKind, Sheet};
use super::format::{ERROR_SENTINEL, format_dynamic};
use super::term::{self, Term};

/// Create the expression engine a sheet shares for its lifetime.
pub fn create_engine() -> Engine {
    Engine::new()
}

/// Build the arithmetic expression for a formula by substituting referenced
/// cells' current values. A missing or empty cell substitutes as zero; the
/// leading '=' term is dropped; operators and unclassifiable fragments pass
/// through unchanged.
///
/// Numeric operands are emitted as float literals so arithmetic is carried
/// out in floats: `1/2` means one half, and division by zero becomes a
/// non-finite result the caller folds into the error path.
pub fn substitute(formula: &str, sheet: &Sheet) -> String {
    let mut terms = term::tokenize(formula);
    if terms.first().map(String::as_str) == Some("=") {
        terms.remove(0);
    }

    let mut expr = String::new();
    for raw in &terms {
        match term::classify(raw) {
            Term::Ref(addr) => {
                let value = sheet
                    .get(&addr)
                    .map(|cell| cell.value.clone())
                    .unwrap_or_default();
                if value.is_empty() {
                    push_operand(&mut expr, "0");
                } else {
                    push_operand(&mut expr, &value);
                }
            }
            Term::Number(n) => push_operand(&mut expr, &n),
            _ => expr.push_str(raw),
        }
    }
    expr
}

fn push_operand(expr: &mut String, raw: &str) {
    match raw.parse::<f64>() {
        Ok(n) => expr.push_str(&format!("{:?}", n)),
        Err(_) => expr.push_str(raw),
    }
}

/// Recompute a formula cell in place; non-formula cells are left untouched.
/// On failure (division by zero, malformed expression) the cell's value
/// becomes [`ERROR_SENTINEL`] and `has_error` is set; success clears it.
pub fn evaluate_cell(engine: &Engine, addr: Address, sheet: &Sheet) {
    let formula = match sheet.get(&addr) {
        Some(cell) if cell.kind == CellKind::Formula => match &cell.formula {
            Some(f) => f.clone(),
            None => return,
        },
        _ => return,
    };

    let expr = substitute(&formula, sheet);
    let outcome = match engine.eval_expression::<Dynamic>(&expr) {
        Ok(result) if is_finite(&result) => Ok(format_dynamic(&result)),
        Ok(_) | Err(_) => Err(()),
    };

    if let Some(mut cell) = sheet.get_mut(&addr) {
        match outcome {
            Ok(value) => {
                cell.value = value;
                cell.has_error = false;
            }
            Err(()) => {
                cell.value = ERROR_SENTINEL.to_string();
                cell.has_error = true;
            }
        }
    }
}

// Float division by zero yields an infinity instead of an evaluation error;
// fold it into the error path so "/0" is an error for both numeric kinds.
fn is_finite(value: &Dynamic) -> bool {
    value.as_float().map(f64::is_finite).unwrap_or(true)
}

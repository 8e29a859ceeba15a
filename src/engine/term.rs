//! Formula tokenization and term classification.
//!
//! Formula text is a flat left-to-right sequence of numeric literals, cell
//! references, and the single-character operators `+ - * / =`. Splitting on
//! operator boundaries yields the terms; each term classifies into exactly
//! one [`Term`] variant.

use regex::Regex;

use super::address::Address;

/// A classified formula term.
#[derive(Clone, Debug, PartialEq)]
pub enum Term {
    Number(String),
    Operator(String),
    Ref(Address),
    /// A fragment matching none of the other shapes. It is carried through
    /// unchanged and surfaces as a computation error at evaluation time.
    Literal(String),
}

const OPERATORS: &str = "+-*/=";

pub fn is_operator(term: &str) -> bool {
    term.len() == 1 && OPERATORS.contains(term)
}

pub fn is_number(term: &str) -> bool {
    term.parse::<f64>().is_ok()
}

/// A term is a cell reference iff it is longer than one character, starts
/// with a letter, and the remainder is a non-negative integer.
pub fn is_cell_reference(term: &str) -> bool {
    let mut chars = term.chars();
    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() => {
            let rest = chars.as_str();
            !rest.is_empty() && rest.bytes().all(|b| b.is_ascii_digit())
        }
        _ => false,
    }
}

/// Classify a single tokenized term.
pub fn classify(term: &str) -> Term {
    if is_operator(term) {
        Term::Operator(term.to_string())
    } else if is_cell_reference(term) {
        // "A0" has reference shape but names the header band; carry it as an
        // opaque literal so evaluation reports the error.
        match Address::from_str(term) {
            Some(addr) => Term::Ref(addr),
            None => Term::Literal(term.to_string()),
        }
    } else if is_number(term) {
        Term::Number(term.to_string())
    } else {
        Term::Literal(term.to_string())
    }
}

/// Split formula text into terms on operator boundaries. Operators are kept
/// as their own terms, empty fragments are discarded, and every term is
/// trimmed and uppercased. A leading '=' becomes its own term.
pub fn tokenize(text: &str) -> Vec<String> {
    let re = Regex::new(r"[+\-*/=]").unwrap();
    let text = text.trim();
    let mut terms = Vec::new();
    let mut last = 0;
    for m in re.find_iter(text) {
        push_fragment(&mut terms, &text[last..m.start()]);
        terms.push(text[m.start()..m.end()].to_string());
        last = m.end();
    }
    push_fragment(&mut terms, &text[last..]);
    terms
}

fn push_fragment(terms: &mut Vec<String>, fragment: &str) {
    let fragment = fragment.trim();
    if !fragment.is_empty() {
        terms.push(fragment.to_ascii_uppercase());
    }
}

//! cellgraph - In-memory spreadsheet engine.
//!
//! A grid of addressable cells holding literal values or formulas that
//! reference other cells, with automatic recomputation of every transitive
//! dependent when a cell changes. [`core::Core`] is the sole mutation
//! entrypoint (the edit-session state machine); [`engine`] holds the address
//! codec, tokenizer, evaluator, dependency tracker, and propagator.

pub mod core;
pub mod engine;
pub mod error;

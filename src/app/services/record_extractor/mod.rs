//! Record extraction for tc-ds62 endmembers
//!
//! Every record occupies four consecutive rows after a three-row preamble:
//!
//! | offset | content                                                   |
//! |--------|-----------------------------------------------------------|
//! | 0      | name, site count, (component, atoms) pairs, trailing token |
//! | 1      | H, S, V                                                   |
//! | 2      | heat capacity c0..c3                                      |
//! | 3      | a0, K0, K0', K0'', flag, order/disorder parameters         |
//!
//! The components are:
//! - [`extractor`] - Name lookup and record materialization
//! - [`formula`] - Formula assembly from header pairs and formula parsing
//! - [`field_parsers`] - Typed, position-aware token access

pub mod extractor;
pub mod field_parsers;
pub mod formula;

#[cfg(test)]
pub mod tests;

pub use extractor::{build_endmember, extract, extract_all};
pub use field_parsers::RecordView;
pub use formula::{Formula, build_formula, formula_atom_count, parse_formula};

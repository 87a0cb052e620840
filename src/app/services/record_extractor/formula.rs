//! Chemical formula assembly and parsing
//!
//! Header rows list (component index, atom count) pairs. The formula
//! string concatenates `<symbol><count>` fragments, counts rounded to ten
//! decimals and written as Python floats (`Mg2.0Si1.0O4.0`).

use super::field_parsers::RecordView;
use crate::app::services::code_emitter::python_literal::{format_float, round_to};
use crate::constants::{COMPONENTS, ROUNDING_DIGITS, layout};
use crate::constants::layout::FieldPosition;
use crate::{Error, Result};

/// Formula string with its summed atom count
#[derive(Debug, Clone, PartialEq)]
pub struct Formula {
    pub text: String,
    pub atom_count: f64,
}

/// Look up a component symbol by 1-based index
pub fn component_symbol(index: i64) -> Option<&'static str> {
    usize::try_from(index)
        .ok()
        .and_then(|i| i.checked_sub(1))
        .and_then(|i| COMPONENTS.get(i).copied())
}

/// Build the formula from the (index, count) pairs of a header row
///
/// Pairs start at column 2; the header's trailing token is never part of
/// a pair.
pub fn build_formula(view: &RecordView<'_>) -> Result<Formula> {
    let header = view.row(layout::NAME.row);
    let end = header.len().saturating_sub(layout::HEADER_TRAILING_TOKENS);

    let mut text = String::new();
    let mut atom_count = 0.0;

    for column in (layout::FIRST_ATOM_COUNT.column..end).step_by(2) {
        let index = view.parse_i64(FieldPosition {
            row: layout::NAME.row,
            column: column - 1,
        })?;
        let count = view.parse_f64(FieldPosition {
            row: layout::NAME.row,
            column,
        })?;

        let symbol =
            component_symbol(index).ok_or_else(|| Error::unknown_component(view.name(), index))?;

        atom_count += count;
        text.push_str(symbol);
        text.push_str(&format_float(round_to(count, ROUNDING_DIGITS)));
    }

    Ok(Formula { text, atom_count })
}

/// Split a formula string into element/count pairs
///
/// Repeated elements are summed and keep their first position. A missing
/// count means one atom. Counts may use Python exponent notation
/// (`1e-05`); an exponent is only taken when it is not the start of an
/// `e-` component.
pub fn parse_formula(formula: &str) -> Result<Vec<(String, f64)>> {
    let bytes = formula.as_bytes();
    let mut elements: Vec<(String, f64)> = Vec::new();
    let mut pos = 0;

    while pos < bytes.len() {
        let symbol_start = pos;
        if formula[pos..].starts_with("e-") {
            pos += 2;
        } else if bytes[pos].is_ascii_uppercase() {
            pos += 1;
            if pos < bytes.len() && bytes[pos].is_ascii_lowercase() {
                let two_letter = &formula[symbol_start..pos + 1];
                if !formula[pos..].starts_with("e-") || COMPONENTS.contains(&two_letter) {
                    pos += 1;
                }
            }
        } else {
            return Err(unparsed(formula, pos));
        }
        let symbol = &formula[symbol_start..pos];

        let count_start = pos;
        if pos < bytes.len() && bytes[pos] == b'-' {
            pos += 1;
        }
        while pos < bytes.len() && (bytes[pos].is_ascii_digit() || bytes[pos] == b'.') {
            pos += 1;
        }
        if pos > count_start {
            pos = exponent_end(bytes, pos);
        }

        let count = if pos == count_start {
            1.0
        } else {
            formula[count_start..pos]
                .parse::<f64>()
                .map_err(|_| unparsed(formula, count_start))?
        };

        match elements.iter_mut().find(|(name, _)| name == symbol) {
            Some((_, total)) => *total += count,
            None => elements.push((symbol.to_string(), count)),
        }
    }

    Ok(elements)
}

/// End of an exponent suffix such as `e-05` starting at `pos`, or `pos`
///
/// `e-1.0` is an electron count, not an exponent, so digits followed by a
/// decimal point do not qualify.
fn exponent_end(bytes: &[u8], pos: usize) -> usize {
    if bytes.get(pos) != Some(&b'e') {
        return pos;
    }
    if !matches!(bytes.get(pos + 1), Some(b'-') | Some(b'+')) {
        return pos;
    }
    let mut end = pos + 2;
    while end < bytes.len() && bytes[end].is_ascii_digit() {
        end += 1;
    }
    if end == pos + 2 || bytes.get(end) == Some(&b'.') {
        return pos;
    }
    end
}

fn unparsed(formula: &str, column: usize) -> Error {
    Error::malformed_field(
        formula,
        0,
        column,
        format!("cannot parse formula fragment '{}'", &formula[column..]),
    )
}

/// Total atoms in a formula string
pub fn formula_atom_count(formula: &str) -> Result<f64> {
    Ok(parse_formula(formula)?.iter().map(|(_, n)| n).sum())
}

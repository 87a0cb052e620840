//! Endmember record extraction
//!
//! Locates a record's four-row block by name and turns its tokens into an
//! [`Endmember`] using the layout schema in [`crate::constants::layout`].

use tracing::{debug, info};

use super::field_parsers::RecordView;
use super::formula::build_formula;
use crate::app::models::{Dataset, Endmember, is_liquid_name};
use crate::constants::{correction_flags, layout};
use crate::{Error, Result};

/// Find the record called `name` and materialize it
///
/// Records are scanned in file order and the first header match wins.
pub fn extract(dataset: &Dataset, name: &str) -> Result<Endmember> {
    let count = dataset.record_count()?;

    for index in 0..count {
        if dataset.record_name(index)? == name {
            debug!("Found record '{}' at index {}", name, index);
            return build_endmember(RecordView::new(name, dataset.record_rows(index)?));
        }
    }

    Err(Error::record_not_found(name))
}

/// Extract every record in file order
pub fn extract_all(dataset: &Dataset) -> Result<Vec<Endmember>> {
    let names = dataset.record_names()?;
    info!("Extracting {} endmember records", names.len());

    names.iter().map(|name| extract(dataset, name)).collect()
}

/// Build an endmember from the four rows of its block
pub fn build_endmember(view: RecordView<'_>) -> Result<Endmember> {
    let name = view.token(layout::NAME)?.to_string();
    let formula = build_formula(&view)?;

    let header_len = view.row(layout::NAME.row).len();
    let composition = view.parse_f64_span(
        layout::COMPOSITION_START,
        header_len.saturating_sub(layout::HEADER_TRAILING_TOKENS),
    )?;

    let heat_capacity = view.parse_f64_run(layout::HEAT_CAPACITY_START, layout::HEAT_CAPACITY_TERMS)?;
    let bulk_modulus = view.parse_f64_run(layout::BULK_MODULUS_START, layout::BULK_MODULUS_TERMS)?;

    let (correction_flag, order_disorder_params) = if is_liquid_name(&name) {
        (correction_flags::LIQUID, vec![0.0])
    } else {
        let flag = view.parse_i64(layout::CORRECTION_FLAG)?;
        let flag = i32::try_from(flag).map_err(|_| {
            Error::malformed_field(
                &name,
                layout::CORRECTION_FLAG.row,
                layout::CORRECTION_FLAG.column,
                format!("correction flag {} out of range", flag),
            )
        })?;
        let row_len = view.row(layout::ORDER_DISORDER_START.row).len();
        (flag, view.parse_f64_span(layout::ORDER_DISORDER_START, row_len)?)
    };

    Ok(Endmember {
        formula: formula.text,
        atom_count: formula.atom_count,
        site_count: view.parse_i64(layout::SITE_COUNT)?,
        composition,
        enthalpy: view.parse_f64(layout::ENTHALPY)?,
        entropy: view.parse_f64(layout::ENTROPY)?,
        volume: view.parse_f64(layout::VOLUME)?,
        heat_capacity_coeffs: [
            heat_capacity[0],
            heat_capacity[1],
            heat_capacity[2],
            heat_capacity[3],
        ],
        thermal_expansion: view.parse_f64(layout::THERMAL_EXPANSION)?,
        bulk_modulus_params: [bulk_modulus[0], bulk_modulus[1], bulk_modulus[2]],
        correction_flag,
        order_disorder_params,
        name,
    })
}

//! Enthalpy covariance matrix reconstruction
//!
//! The dataset stores the upper triangle (diagonal included) of the
//! endmember enthalpy covariance matrix as a flat run of numbers after the
//! record blocks, preceded by a leading count.

use tracing::{debug, info};

use crate::app::models::{CovarianceMatrix, Dataset};
use crate::app::services::record_extractor::field_parsers::parse_float_token;
use crate::constants::{layout, units};
use crate::{Error, Result};

/// Fill an `n`×`n` symmetric matrix from its row-major upper triangle
pub fn flat_upper_triangle(values: &[f64], n: usize) -> Result<Vec<Vec<f64>>> {
    let expected = n * (n + 1) / 2;
    if values.len() != expected {
        return Err(Error::covariance_shape(expected, values.len()));
    }

    let mut matrix = vec![vec![0.0; n]; n];
    let mut next = values.iter();
    for i in 0..n {
        for j in i..n {
            // length checked above
            let value = next.next().copied().unwrap_or_default();
            matrix[i][j] = value;
            matrix[j][i] = value;
        }
    }

    Ok(matrix)
}

/// Flatten the covariance rows into numbers
fn covariance_values(dataset: &Dataset) -> Result<Vec<f64>> {
    let rows = dataset.covariance_rows()?;
    let first_row = Dataset::record_start(dataset.record_count()?) + layout::COVARIANCE_GAP_ROWS;

    let mut values = Vec::new();
    for (offset, row) in rows.iter().enumerate() {
        for (column, token) in row.iter().enumerate() {
            let value = parse_float_token(token).ok_or_else(|| {
                Error::malformed_field(
                    "<covariance>",
                    first_row + offset,
                    column,
                    format!("invalid number '{}'", token),
                )
            })?;
            values.push(value);
        }
    }
    Ok(values)
}

/// Build the scaled covariance structure for every record in the dataset
pub fn build_covariance(dataset: &Dataset) -> Result<CovarianceMatrix> {
    let endmember_names = dataset.record_names()?;
    let n = endmember_names.len();

    let values = covariance_values(dataset)?;
    debug!("Read {} covariance values", values.len());

    // First value is the leading count
    let triangle = values.get(1..).unwrap_or(&[]);
    let mut matrix = flat_upper_triangle(triangle, n)?;
    for row in &mut matrix {
        for value in row.iter_mut() {
            *value *= units::COVARIANCE;
        }
    }

    info!("Reconstructed {}x{} covariance matrix", n, n);

    Ok(CovarianceMatrix {
        endmember_names,
        matrix,
    })
}

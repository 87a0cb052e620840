//! Test utilities for module generation

use crate::app::models::{CovarianceMatrix, Dataset, Endmember};
use crate::app::services::covariance::build_covariance;
use crate::app::services::record_extractor::extract_all;
use crate::app::services::record_extractor::tests::{dataset_text, diagonal_covariance};


/// A record with values whose SI conversions are exact in binary
pub const EXACT: [&str; 4] = [
    "ab 2 1 1.0 10 2.0 1",
    "10.5 0.5 2.5",
    "0.1 0.002 -100.0 -1.5",
    "0 1.5 4.0 -2.5 0",
];

/// Extract every record and the covariance of a synthetic dataset
pub fn load(records: &[[&str; 4]]) -> (Vec<Endmember>, CovarianceMatrix) {
    let text = dataset_text(records, &diagonal_covariance(records.len()));
    let dataset = Dataset::parse(&text);
    (
        extract_all(&dataset).unwrap(),
        build_covariance(&dataset).unwrap(),
    )
}

/// The text of one generated class, from its header to the next class
pub fn class_block<'a>(text: &'a str, class: &str) -> &'a str {
    let header = format!("class {} (Mineral):", class);
    let start = text.find(&header).unwrap();
    let rest = &text[start + header.len()..];
    let end = rest
        .find("class ")
        .or_else(|| rest.find("# Variance-covariance"))
        .unwrap_or(rest.len());
    &text[start..start + header.len() + end]
}

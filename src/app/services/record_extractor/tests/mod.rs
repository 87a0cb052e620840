//! Test utilities for record extraction
//!
//! Builds small synthetic datasets with the tc-ds62 layout: three preamble
//! rows, four rows per record, one separator row, the flattened covariance
//! values and two trailer rows.

use crate::app::models::Dataset;

// Test modules
mod extractor_tests;

pub const FORSTERITE: [&str; 4] = [
    "fo 3 1 1.0 5 2.0 10 4.0 1",
    "-2172.59 0.0951 4.366",
    "0.2333 1.494e-6 -603.8 -1.8697",
    "2.85e-5 1285 3.84 -0.003 0",
];

pub const QUARTZ: [&str; 4] = [
    "q 2 1 1.0 10 2.0 1",
    "-910.71 0.0415 2.269",
    "0.0929 -6.42e-7 -714.9 -0.7161",
    "0 730 6.0 -0.0082 1 847 0.00495 0.1188",
];

pub const ANDALUSITE: [&str; 4] = [
    "and 3 1 1.0 3 2.0 10 5.0 1",
    "-2588.8 0.0922 5.153",
    "0.2773 -6.588e-6 -1914.1 -2.2656",
    "1.81e-5 1442 6.89 -0.0048 0",
];

pub const SPINEL: [&str; 4] = [
    "sp 3 5 1.0 3 2.0 10 4.0 1",
    "-2301.19 0.0821 3.978",
    "0.2229 6.127e-6 -1686.0 -1.5510",
    "1.93e-5 1922 4.04 -0.0021 2 8.0 0.0 1.2 0.0 2.0 1.0",
];

pub const QUARTZ_LIQUID: [&str; 4] = [
    "qL 2 1 1.0 10 2.0 1",
    "-921.1 0.016 2.73",
    "0.0825 0 0 0",
    "0 220 9.46 -0.043 0",
];

pub const EXCLUDED: [&str; 4] = [
    "xx 2 1 1.0 10 2.0 1",
    "-900.0 0.04 2.0",
    "0.09 0 0 0",
    "0 700 4.0 -0.006 -1",
];

pub const ZERO_MODULUS: [&str; 4] = [
    "gas 1 11 2.0 1",
    "0 0.1307 2.4789",
    "0.0401 8.656e-6 487.5 -0.2512",
    "0 0 0 0 0",
];

pub const NEGATIVE_MODULUS: [&str; 4] = [
    "vap 1 11 2.0 1",
    "-241.81 0.1888 2.4499",
    "0.0401 8.656e-6 487.5 -0.2512",
    "0 -5 4.0 0 0",
];

/// Render a dataset with the given records and upper-triangle covariance values
pub fn dataset_text(records: &[[&str; 4]], covariance: &[f64]) -> String {
    let mut lines = vec![
        format!("{} tc-ds62 synthetic", records.len()),
        "preamble line one".to_string(),
        "preamble line two".to_string(),
    ];
    for record in records {
        lines.extend(record.iter().map(|line| line.to_string()));
    }
    lines.push("separator".to_string());

    let mut values = vec![covariance.len().to_string()];
    values.extend(covariance.iter().map(|v| v.to_string()));
    for chunk in values.chunks(4) {
        lines.push(chunk.join(" "));
    }

    lines.push("trailer one".to_string());
    lines.push("trailer two".to_string());
    lines.join("\n")
}

/// Identity-like covariance values for `n` records (upper triangle)
pub fn diagonal_covariance(n: usize) -> Vec<f64> {
    let mut values = Vec::new();
    for i in 0..n {
        for j in i..n {
            values.push(if i == j { (i + 1) as f64 } else { 0.0 });
        }
    }
    values
}

/// Parse a synthetic dataset
pub fn create_test_dataset(records: &[[&str; 4]]) -> Dataset {
    Dataset::parse(&dataset_text(records, &diagonal_covariance(records.len())))
}

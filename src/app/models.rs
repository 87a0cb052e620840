//! Core data models for dataset conversion
//!
//! Defines the tokenized dataset, endmember records, the order/disorder
//! correction variants and the covariance structure written to the
//! generated module.

use crate::constants::{LIQUID_SUFFIX, correction_flags, layout};
use crate::{Error, Result};

/// One line of the dataset split on whitespace
pub type Row = Vec<String>;

/// Tokenized dataset file
///
/// Rows keep file order; blank lines are kept as empty rows so that every
/// fixed row offset still lines up with the file.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Dataset {
    rows: Vec<Row>,
}

impl Dataset {
    /// Tokenize dataset content
    pub fn parse(content: &str) -> Self {
        let rows = content
            .lines()
            .map(|line| line.split_whitespace().map(str::to_string).collect())
            .collect();
        Self { rows }
    }

    /// All rows in file order
    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    /// Total record count stored as the first token of row 0
    pub fn record_count(&self) -> Result<usize> {
        let token = self
            .rows
            .get(layout::COUNT_ROW)
            .and_then(|row| row.get(layout::COUNT_COLUMN))
            .ok_or_else(|| {
                Error::malformed_field(
                    "<preamble>",
                    layout::COUNT_ROW,
                    layout::COUNT_COLUMN,
                    "missing record count",
                )
            })?;

        token.parse::<usize>().map_err(|e| {
            Error::malformed_field(
                "<preamble>",
                layout::COUNT_ROW,
                layout::COUNT_COLUMN,
                format!("invalid record count '{}': {}", token, e),
            )
        })
    }

    /// Index of the header row of record `index`
    pub fn record_start(index: usize) -> usize {
        layout::PREAMBLE_ROWS + index * layout::RECORD_STRIDE
    }

    /// The four rows of record `index`
    pub fn record_rows(&self, index: usize) -> Result<&[Row]> {
        let start = Self::record_start(index);
        let end = start + layout::RECORD_STRIDE;
        self.rows.get(start..end).ok_or_else(|| {
            Error::malformed_field(
                format!("#{}", index),
                0,
                0,
                format!(
                    "record block needs rows {}..{} but the dataset has {} rows",
                    start,
                    end,
                    self.rows.len()
                ),
            )
        })
    }

    /// Name of record `index`
    pub fn record_name(&self, index: usize) -> Result<&str> {
        let rows = self.record_rows(index)?;
        rows[layout::NAME.row]
            .get(layout::NAME.column)
            .map(String::as_str)
            .ok_or_else(|| {
                Error::malformed_field(
                    format!("#{}", index),
                    layout::NAME.row,
                    layout::NAME.column,
                    "empty header row",
                )
            })
    }

    /// All record names in file order
    pub fn record_names(&self) -> Result<Vec<String>> {
        (0..self.record_count()?)
            .map(|index| self.record_name(index).map(str::to_string))
            .collect()
    }

    /// Rows holding the flattened covariance data
    ///
    /// Covariance rows follow the record blocks after one separator row and
    /// stop before the trailer rows. Returns an empty slice when the file is
    /// too short to contain any.
    pub fn covariance_rows(&self) -> Result<&[Row]> {
        let start = Self::record_start(self.record_count()?) + layout::COVARIANCE_GAP_ROWS;
        let end = self.rows.len().saturating_sub(layout::TRAILER_ROWS);
        if start >= end {
            return Ok(&[]);
        }
        Ok(&self.rows[start..end])
    }
}

/// One endmember record as stored in the dataset (native units)
#[derive(Debug, Clone, PartialEq)]
pub struct Endmember {
    /// Dataset abbreviation, e.g. "fo"
    pub name: String,

    /// Formula string, e.g. "Si1.0Mg2.0O4.0"
    pub formula: String,

    /// Atoms per formula unit
    pub atom_count: f64,

    /// Number of components listed in the header row
    pub site_count: i64,

    /// Raw header tokens between the site count and the trailing token
    pub composition: Vec<f64>,

    /// kJ/mol
    pub enthalpy: f64,

    /// kJ/K/mol
    pub entropy: f64,

    /// kJ/kbar/mol
    pub volume: f64,

    /// c0 + c1*T + c2/T^2 + c3/sqrt(T)
    pub heat_capacity_coeffs: [f64; 4],

    pub thermal_expansion: f64,

    /// K0 (kbar), K0', K0'' (1/kbar)
    pub bulk_modulus_params: [f64; 3],

    pub correction_flag: i32,

    pub order_disorder_params: Vec<f64>,
}

impl Endmember {
    /// Whether the name carries the liquid suffix
    pub fn is_liquid(&self) -> bool {
        is_liquid_name(&self.name)
    }

    /// Reference bulk modulus in dataset units
    pub fn k0(&self) -> f64 {
        self.bulk_modulus_params[0]
    }

    /// Whether this record produces a class in the generated module
    ///
    /// Excluded and liquid flags are skipped, and so is any record whose
    /// K0 is not positive.
    pub fn is_emittable(&self) -> bool {
        self.correction_flag != correction_flags::EXCLUDED
            && self.correction_flag != correction_flags::LIQUID
            && self.k0() > 0.0
    }

    /// Resolve the correction model selected by the flag
    pub fn correction(&self) -> Result<Correction> {
        Correction::resolve(&self.name, self.correction_flag, &self.order_disorder_params)
    }
}

/// Whether an endmember name marks a liquid
pub fn is_liquid_name(name: &str) -> bool {
    name.ends_with(LIQUID_SUFFIX)
}

/// Order/disorder correction attached to an endmember (native units)
#[derive(Debug, Clone, PartialEq)]
pub enum Correction {
    None,
    Landau {
        /// Critical temperature at the reference pressure (K)
        tc: f64,
        /// Maximum entropy of disordering (kJ/K/mol)
        s_d: f64,
        /// Maximum volume of disordering (kJ/kbar/mol)
        v_d: f64,
    },
    BraggWilliams {
        delta_h: f64,
        delta_v: f64,
        wh: f64,
        wv: f64,
        n: f64,
        factor: f64,
    },
}

impl Correction {
    /// Pick the correction variant for a flag and its positional parameters
    pub fn resolve(record: &str, flag: i32, params: &[f64]) -> Result<Self> {
        let param = |index: usize| -> Result<f64> {
            params.get(index).copied().ok_or_else(|| {
                Error::malformed_field(
                    record,
                    layout::ORDER_DISORDER_START.row,
                    layout::ORDER_DISORDER_START.column + index,
                    format!(
                        "correction flag {} needs parameter {} but only {} given",
                        flag,
                        index,
                        params.len()
                    ),
                )
            })
        };

        match flag {
            correction_flags::NONE => Ok(Correction::None),
            correction_flags::LANDAU => Ok(Correction::Landau {
                tc: param(0)?,
                s_d: param(1)?,
                v_d: param(2)?,
            }),
            correction_flags::BRAGG_WILLIAMS => Ok(Correction::BraggWilliams {
                delta_h: param(0)?,
                delta_v: param(1)?,
                wh: param(2)?,
                wv: param(3)?,
                n: param(4)?,
                factor: param(5)?,
            }),
            other => Err(Error::unsupported_correction(record, other)),
        }
    }

    /// BurnMan property modifier name, if any
    pub fn modifier_name(&self) -> Option<&'static str> {
        match self {
            Correction::None => None,
            Correction::Landau { .. } => Some("landau_hp"),
            Correction::BraggWilliams { .. } => Some("bragg_williams"),
        }
    }
}

/// Enthalpy variance-covariance structure, (J/mol)^2
#[derive(Debug, Clone, PartialEq)]
pub struct CovarianceMatrix {
    /// Every record name in file order, excluded records included
    pub endmember_names: Vec<String>,

    /// Square symmetric matrix indexed like `endmember_names`
    pub matrix: Vec<Vec<f64>>,
}

impl CovarianceMatrix {
    pub fn dimension(&self) -> usize {
        self.endmember_names.len()
    }

    /// Entry (i, j), if within bounds
    pub fn get(&self, i: usize, j: usize) -> Option<f64> {
        self.matrix.get(i).and_then(|row| row.get(j)).copied()
    }

    /// Check `M[i][j] == M[j][i]` for every pair
    pub fn is_symmetric(&self) -> bool {
        let n = self.matrix.len();
        self.matrix.iter().all(|row| row.len() == n)
            && (0..n).all(|i| (0..i).all(|j| self.matrix[i][j] == self.matrix[j][i]))
    }
}

//! Application constants for the ds62 code generator
//!
//! This module contains the dataset layout schema, the component table,
//! unit conversion factors and the fixed text used by the generated module.

// =============================================================================
// Input / Output Files
// =============================================================================

/// Default dataset file name, read from the working directory
pub const DEFAULT_INPUT_FILE: &str = "tc-ds62.txt";

/// Default generated module name
pub const DEFAULT_OUTPUT_FILE: &str = "HP_2011_ds62.py";

/// Package the dataset file is distributed with
pub const DATASET_PROVIDER: &str = "THERMOCALC";

/// Where the dataset file can be downloaded
pub const DATASET_URL: &str = "http://www.metamorph.geo.uni-mainz.de/thermocalc/dataset6/index.html";

// =============================================================================
// Dataset Layout
// =============================================================================

/// Fixed row/column positions inside the dataset file
///
/// Rows 0..3 form the preamble; row 0 starts with the record count.
/// Each record then spans exactly `RECORD_STRIDE` rows. Offsets below are
/// relative to the first (header) row of a record.
pub mod layout {
    /// Row holding the record count as its first token
    pub const COUNT_ROW: usize = 0;

    /// Token index of the record count in `COUNT_ROW`
    pub const COUNT_COLUMN: usize = 0;

    /// Number of preamble rows before the first record
    pub const PREAMBLE_ROWS: usize = 3;

    /// Rows per record
    pub const RECORD_STRIDE: usize = 4;

    /// Separator rows between the last record and the covariance data
    pub const COVARIANCE_GAP_ROWS: usize = 1;

    /// Trailer rows after the covariance data
    pub const TRAILER_ROWS: usize = 2;

    /// Location of one field within a record
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct FieldPosition {
        pub row: usize,
        pub column: usize,
    }

    const fn at(row: usize, column: usize) -> FieldPosition {
        FieldPosition { row, column }
    }

    // Header row
    pub const NAME: FieldPosition = at(0, 0);
    pub const SITE_COUNT: FieldPosition = at(0, 1);
    /// First composition token; composition runs up to the trailing token
    pub const COMPOSITION_START: FieldPosition = at(0, 2);
    /// First atom count of the (component index, atom count) pairs
    pub const FIRST_ATOM_COUNT: FieldPosition = at(0, 3);
    /// Tokens at the end of the header row that are not composition data
    pub const HEADER_TRAILING_TOKENS: usize = 1;

    // Thermo row 1
    pub const ENTHALPY: FieldPosition = at(1, 0);
    pub const ENTROPY: FieldPosition = at(1, 1);
    pub const VOLUME: FieldPosition = at(1, 2);

    // Thermo row 2
    pub const HEAT_CAPACITY_START: FieldPosition = at(2, 0);
    pub const HEAT_CAPACITY_TERMS: usize = 4;

    // Thermo row 3
    pub const THERMAL_EXPANSION: FieldPosition = at(3, 0);
    pub const BULK_MODULUS_START: FieldPosition = at(3, 1);
    pub const BULK_MODULUS_TERMS: usize = 3;
    pub const CORRECTION_FLAG: FieldPosition = at(3, 4);
    pub const ORDER_DISORDER_START: FieldPosition = at(3, 5);
}

/// Recognized components, addressed by 1-based index from the header row
pub const COMPONENTS: [&str; 19] = [
    "Si", "Ti", "Al", "Fe", "Mg", "Mn", "Ca", "Na", "K", "O", "H", "C", "Cl", "e-", "Ni", "Zr",
    "S", "Cu", "Cr",
];

/// Decimal places kept when rounding formula counts and heat capacity terms
pub const ROUNDING_DIGITS: usize = 10;

/// Suffix marking liquid endmembers
pub const LIQUID_SUFFIX: char = 'L';

// =============================================================================
// Correction Flags
// =============================================================================

/// Values of the dataset's order/disorder flag column
pub mod correction_flags {
    /// Forced for liquid endmembers, never emitted
    pub const LIQUID: i32 = -2;

    /// Excluded from emission
    pub const EXCLUDED: i32 = -1;

    /// No correction
    pub const NONE: i32 = 0;

    /// Landau-type order/disorder
    pub const LANDAU: i32 = 1;

    /// Bragg-Williams order/disorder
    pub const BRAGG_WILLIAMS: i32 = 2;
}

// =============================================================================
// Unit Conversion (dataset units -> SI)
// =============================================================================

pub mod units {
    /// kJ -> J
    pub const KILO: f64 = 1e3;

    /// kJ/kbar -> m^3
    pub const VOLUME: f64 = 1e-5;

    /// kbar -> Pa
    pub const PRESSURE: f64 = 1e8;

    /// 1/kbar -> 1/Pa
    pub const INVERSE_PRESSURE: f64 = 1e-8;

    /// (kJ/mol)^2 -> (J/mol)^2
    pub const COVARIANCE: f64 = 1e6;
}

/// Reference pressure of the Landau model (Pa)
pub const LANDAU_REFERENCE_PRESSURE: f64 = 100000.0;

/// Reference temperature of the Landau model (K)
pub const LANDAU_REFERENCE_TEMPERATURE: f64 = 298.15;

/// Equation of state written for every endmember
pub const EQUATION_OF_STATE: &str = "hp_tmt";

/// Class identifier overrides for abbreviations that clash with Python
pub const DEFAULT_RENAMES: &[(&str, &str)] = &[("and", "andalusite")];

// =============================================================================
// Generated Module Text
// =============================================================================

pub const MODULE_HEADER: &str = "\
# This file is part of BurnMan - a thermoelastic and thermodynamic toolkit for the Earth and Planetary Sciences
# Copyright (C) 2012 - 2018 by the BurnMan team, released under the GNU\x20
# GPL v2 or later.


\"\"\"
HP_2011 (ds-62)
Endmember minerals from Holland and Powell 2011 and references therein
Update to dataset version 6.2
The values in this document are all in S.I. units,
unlike those in the original tc-ds62.txt
File autogenerated using hp_ds62_codegen
\"\"\"

from ..mineral import Mineral
from ..processchemistry import dictionarize_formula, formula_mass

";

pub const ENDMEMBERS_BANNER: &str = "\"\"\"\nENDMEMBERS\n\"\"\"\n\n";

pub const COVARIANCE_BANNER: &str = "
# Variance-covariance matrix
# cov is a dictionary containing:
#     - names: a list of endmember names
#     - covariance_matrix: a 2D variance-covariance array for the endmember enthalpies of formation

from numpy import array
";

/// Maximum line width used when wrapping the covariance structure
pub const COVARIANCE_LINE_WIDTH: usize = 160;

//! BurnMan module generation
//!
//! Turns extracted endmembers and the covariance matrix into the text of a
//! Python module defining one `Mineral` subclass per solid endmember.
//!
//! ## Architecture
//!
//! - [`emitter`] - Module layout, skip policy and correction blocks
//! - [`conversion`] - Dataset units to SI
//! - [`python_literal`] - Python float/list/string literal rendering
//! - [`stats`] - Emission counts for the run summary
//!
//! ## Usage
//!
//! ```rust
//! use hp_ds62_codegen::app::services::code_emitter::CodeEmitter;
//! use hp_ds62_codegen::CovarianceMatrix;
//!
//! let covariance = CovarianceMatrix {
//!     endmember_names: vec![],
//!     matrix: vec![],
//! };
//! let (text, stats) = CodeEmitter::default()
//!     .emit_to_string(&[], &covariance)
//!     .unwrap();
//!
//! assert!(text.contains("ENDMEMBERS"));
//! assert_eq!(stats.classes_emitted, 0);
//! ```

pub mod conversion;
pub mod emitter;
pub mod python_literal;
pub mod stats;

#[cfg(test)]
pub mod tests;

pub use conversion::{SiParams, correction_to_si};
pub use emitter::CodeEmitter;
pub use stats::EmitStats;

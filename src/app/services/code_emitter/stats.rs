//! Emission statistics
//!
//! Counts what the emitter wrote and skipped, for the run summary.

/// Simple emission statistics
#[derive(Debug, Clone, Default, PartialEq)]
pub struct EmitStats {
    /// Records handed to the emitter
    pub records_seen: usize,

    /// Classes written to the module
    pub classes_emitted: usize,

    /// Records skipped by the exclusion policy
    pub records_skipped: usize,

    /// Classes carrying a Landau modifier
    pub landau_blocks: usize,

    /// Classes carrying a Bragg-Williams modifier
    pub bragg_williams_blocks: usize,

    /// Dimension of the covariance matrix
    pub covariance_dimension: usize,
}

impl EmitStats {
    /// Create new empty statistics
    pub fn new() -> Self {
        Self::default()
    }

    /// Share of records that produced a class, as a percentage
    pub fn emission_rate(&self) -> f64 {
        if self.records_seen == 0 {
            0.0
        } else {
            (self.classes_emitted as f64 / self.records_seen as f64) * 100.0
        }
    }

    /// Every record was either emitted or skipped
    pub fn is_consistent(&self) -> bool {
        self.classes_emitted + self.records_skipped == self.records_seen
    }
}

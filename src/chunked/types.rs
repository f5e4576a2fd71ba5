use crate::Symbol;
use thiserror::Error;

/// Default share of nonzero deltas a copy chunk tolerates before it ends.
pub const MAX_DIFFERENCE_PERCENT: f64 = 50.0;

/// Default minimum length a copy chunk must exceed before it may end early.
pub const MIN_CHUNK_LENGTH: usize = 0;

/// Alias for a vector of Op
/// Result of the chunked diff function
pub type EditScript = Vec<Op>;

/// Each operation owns a copy of the symbols it spans:
/// unchanged (Copy)
/// taken out of the source (Remove)
/// put in their place from the target (Add)
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Op {
    Copy(Vec<Symbol>),
    Remove(Vec<Symbol>),
    Add(Vec<Symbol>),
}

impl Op {
    pub fn symbols(&self) -> &[Symbol] {
        match self {
            Op::Copy(s) | Op::Remove(s) | Op::Add(s) => s,
        }
    }

    pub fn len(&self) -> usize {
        self.symbols().len()
    }

    pub fn is_empty(&self) -> bool {
        self.symbols().is_empty()
    }

    /// Number of source symbols this op consumes.
    pub fn source_len(&self) -> usize {
        match self {
            Op::Add(_) => 0,
            op => op.len(),
        }
    }

    /// Number of target symbols this op produces.
    pub fn target_len(&self) -> usize {
        match self {
            Op::Remove(_) => 0,
            op => op.len(),
        }
    }
}

/// Tunables for the chunk boundary heuristic.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DiffConfig {
    pub max_difference_percent: f64,
    pub min_chunk_length: usize,
}

impl Default for DiffConfig {
    fn default() -> Self {
        DiffConfig {
            max_difference_percent: MAX_DIFFERENCE_PERCENT,
            min_chunk_length: MIN_CHUNK_LENGTH,
        }
    }
}

impl DiffConfig {
    pub fn with_max_difference_percent(mut self, percent: f64) -> Self {
        self.max_difference_percent = percent;
        self
    }

    pub fn with_min_chunk_length(mut self, len: usize) -> Self {
        self.min_chunk_length = len;
        self
    }

    pub fn validate(&self) -> Result<(), DiffError> {
        if (0.0..=100.0).contains(&self.max_difference_percent) {
            Ok(())
        } else {
            Err(DiffError::InvalidThreshold(self.max_difference_percent))
        }
    }
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum DiffError {
    #[error("source and target differ in length: {source_len} vs {target_len}")]
    LengthMismatch { source_len: usize, target_len: usize },
    #[error("max difference percent must be within [0, 100], got {0}")]
    InvalidThreshold(f64),
}

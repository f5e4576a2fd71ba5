pub mod chunked;
pub mod classifier;
pub mod patch;
pub mod serialization;
pub mod stats;
pub mod text;

/// One integer code unit of a source or target sequence.
pub type Symbol = i64;

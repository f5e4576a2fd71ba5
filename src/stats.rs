use crate::chunked::Op;
use crate::serialization::ToPatch;
use std::fmt;

/// Size of a serialized edit script compared to the raw inputs it replaces.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Stats {
    pub encoded_bytes: usize,
    pub raw_len: usize,
}

impl Stats {
    /// `bit_length` is rounded down to whole bytes.
    pub fn from_bit_length(bit_length: usize, source_len: usize, target_len: usize) -> Self {
        Stats {
            encoded_bytes: bit_length / 8,
            raw_len: source_len + target_len,
        }
    }

    /// Measures the text form of `script`.
    pub fn measure(script: &[Op], source_len: usize, target_len: usize) -> Self {
        let bit_length = script.to_patch().len() * 8;
        Stats::from_bit_length(bit_length, source_len, target_len)
    }

    pub fn is_compact(&self) -> bool {
        self.encoded_bytes < self.raw_len
    }
}

impl fmt::Display for Stats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.is_compact())?;
        writeln!(f, "{}", self.encoded_bytes)?;
        write!(f, "{}", self.raw_len)
    }
}

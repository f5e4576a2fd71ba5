use crate::chunked::{self, DiffError, EditScript};
use crate::serialization::PatchError;
use crate::Symbol;

/// Maps each char of `s` to its unicode scalar value.
pub fn to_symbols(s: &str) -> Vec<Symbol> {
    s.chars().map(|c| Symbol::from(u32::from(c))).collect()
}

pub fn from_symbols(symbols: &[Symbol]) -> Result<String, PatchError> {
    symbols
        .iter()
        .map(|&s| {
            u32::try_from(s)
                .ok()
                .and_then(char::from_u32)
                .ok_or(PatchError::InvalidSymbol(s))
        })
        .collect()
}

/// Computes the chunked diff between two strings of equal char count.
///
/// # Examples
///
/// ```
/// use chunkdelta::chunked::Op;
/// use chunkdelta::text::{diff_text, to_symbols};
///
/// let result = diff_text("ab", "ac").unwrap();
/// assert_eq!(result, vec![
///     Op::Copy(to_symbols("a")),
///     Op::Remove(to_symbols("b")),
///     Op::Add(to_symbols("c")),
/// ]);
/// ```
pub fn diff_text(source: &str, target: &str) -> Result<EditScript, DiffError> {
    chunked::diff(&to_symbols(source), &to_symbols(target))
}

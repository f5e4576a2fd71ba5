pub mod types;
pub use types::*;

use crate::classifier::{Classifier, DifferenceRatio};
use crate::Symbol;
use tracing::{debug, trace, warn};

/// Computes the chunked diff between two equal-length sequences using the
/// default configuration and the difference ratio classifier.
///
/// # Examples
///
/// ```
/// use chunkdelta::chunked::{diff, Op};
///
/// let source = vec![1, 2, 3, 4];
/// let target = vec![1, 9, 3, 4];
/// let result = diff(&source, &target).unwrap();
/// assert_eq!(result, vec![
///     Op::Copy(vec![1]),
///     Op::Remove(vec![2, 3]),
///     Op::Add(vec![9, 3]),
///     Op::Copy(vec![4]),
/// ]);
/// ```
///
/// # Arguments
///
/// * `source` - The original sequence
/// * `target` - The sequence to reach, same length as `source`
pub fn diff(source: &[Symbol], target: &[Symbol]) -> Result<EditScript, DiffError> {
    diff_with(source, target, &DiffConfig::default(), &DifferenceRatio)
}

/// Computes the chunked diff with explicit tunables and chunk classifier.
///
/// Walks both sequences once. Where the heads agree a copy chunk is grown,
/// where they differ a remove/add pair is emitted. Fails before scanning if
/// the threshold is out of range or the lengths differ.
pub fn diff_with<C: Classifier + ?Sized>(
    source: &[Symbol],
    target: &[Symbol],
    config: &DiffConfig,
    classifier: &C,
) -> Result<EditScript, DiffError> {
    config.validate()?;
    if source.len() != target.len() {
        return Err(DiffError::LengthMismatch {
            source_len: source.len(),
            target_len: target.len(),
        });
    }

    let mut script = EditScript::new();
    let mut i = 0;
    while i < source.len() {
        if source[i] == target[i] {
            let consumed = extract_copy(
                &source[i..],
                &target[i..],
                classifier,
                config.max_difference_percent,
                config.min_chunk_length,
            )
            .len();
            if consumed > 0 {
                debug!(offset = i, len = consumed, "copy chunk");
                script.push(Op::Copy(source[i..i + consumed].to_vec()));
                i += consumed;
                continue;
            }
            warn!(offset = i, "classifier rejected an aligned head, emitting an edit pair");
        }

        let (removed, added) = extract_edit(&source[i..], &target[i..]);
        debug!(offset = i, len = added.len(), "edit chunk");
        i += added.len();
        script.push(Op::Remove(removed));
        script.push(Op::Add(added));
    }

    debug!(len = source.len(), ops = script.len(), "diff finished");
    Ok(script)
}

/// Grows a copy chunk from the head of both slices and returns the deltas it consumed.
///
/// Each position appends `source[i] - target[i]` to the run. The chunk ends
/// before the first mismatching position, or earlier when `classifier` reports
/// the run as significantly different once it is longer than
/// `min_chunk_length`. The delta that triggered the stop is not part of the chunk.
///
/// With [`DifferenceRatio`] every delta inside a copy chunk is zero, so the
/// classifier never ends a chunk early and the result is the maximal run of
/// equal positions. Other classifiers may cut it shorter.
///
/// `target` must be at least as long as `source`.
pub fn extract_copy<C: Classifier + ?Sized>(
    source: &[Symbol],
    target: &[Symbol],
    classifier: &C,
    max_difference_percent: f64,
    min_chunk_length: usize,
) -> Vec<Symbol> {
    let mut run = Vec::new();
    for (s, t) in source.iter().zip(target) {
        let delta = s.wrapping_sub(*t);
        run.push(delta);
        if delta != 0
            || (classifier.is_significantly_different(&run, max_difference_percent)
                && run.len() > min_chunk_length)
        {
            trace!(len = run.len() - 1, delta, "copy chunk boundary");
            run.pop();
            break;
        }
    }
    run
}

/// Grows an edit chunk from the head of both slices.
///
/// Symbols are taken in lockstep until the first position where the two
/// agree again. That position is included in both halves, so `removed` and
/// `added` always have the same length and end on a matching pair unless the
/// input ran out first.
///
/// `target` must be at least as long as `source`.
pub fn extract_edit(source: &[Symbol], target: &[Symbol]) -> (Vec<Symbol>, Vec<Symbol>) {
    let mut removed = Vec::new();
    let mut added = Vec::new();
    for (s, t) in source.iter().zip(target) {
        removed.push(*s);
        added.push(*t);
        if s == t {
            break;
        }
    }
    (removed, added)
}

use crate::Symbol;

/// Decides whether a run of per-position deltas still looks like a copy chunk.
///
/// The copy extractor asks the classifier after every delta it appends. Returning
/// `true` means the run is "significantly different" and the chunk should end
/// (subject to the minimum chunk length).
pub trait Classifier {
    fn is_significantly_different(&self, run: &[Symbol], percent: f64) -> bool;
}

/// Counts nonzero deltas and compares their share against `percent`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DifferenceRatio;

impl Classifier for DifferenceRatio {
    fn is_significantly_different(&self, run: &[Symbol], percent: f64) -> bool {
        is_significantly_different(run, percent)
    }
}

impl<F> Classifier for F
where
    F: Fn(&[Symbol], f64) -> bool,
{
    fn is_significantly_different(&self, run: &[Symbol], percent: f64) -> bool {
        self(run, percent)
    }
}

/// Returns `true` when more than `percent` percent of `run` is nonzero.
///
/// A `percent` of zero means any nonzero delta at all is significant.
/// The threshold is not rounded, so a run of 3 at 50% trips at 2 nonzero deltas.
///
/// # Examples
///
/// ```
/// use chunkdelta::classifier::is_significantly_different;
///
/// assert!(!is_significantly_different(&[], 50.0));
/// assert!(!is_significantly_different(&[0, 0, 0], 0.0));
/// assert!(is_significantly_different(&[1, 0, 0], 0.0));
/// assert!(is_significantly_different(&[1, 1, 0], 50.0));
/// ```
pub fn is_significantly_different(run: &[Symbol], percent: f64) -> bool {
    if percent == 0.0 {
        return !run.iter().all(|d| *d == 0);
    }
    let non_zero = run.iter().filter(|d| **d != 0).count();
    let threshold = run.len() as f64 * percent / 100.0;
    non_zero as f64 > threshold
}

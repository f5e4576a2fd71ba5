use crate::chunked::Op;
use crate::serialization::PatchError;
use crate::Symbol;

/// Replays `script` against `source` and returns the target it describes.
///
/// Copy and Remove spans must match the source at the position they are
/// replayed at, and the script must consume the whole source.
///
/// # Examples
///
/// ```
/// use chunkdelta::chunked::diff;
/// use chunkdelta::patch::apply;
///
/// let source = vec![1, 2, 3];
/// let target = vec![1, 5, 3];
/// let script = diff(&source, &target).unwrap();
/// assert_eq!(apply(&source, &script).unwrap(), target);
/// ```
pub fn apply(source: &[Symbol], script: &[Op]) -> Result<Vec<Symbol>, PatchError> {
    let mut result = Vec::with_capacity(source.len());
    let mut pos = 0;

    for op in script {
        match op {
            Op::Copy(span) => {
                consume(source, pos, span)?;
                result.extend_from_slice(span);
                pos += span.len();
            }
            Op::Remove(span) => {
                consume(source, pos, span)?;
                pos += span.len();
            }
            Op::Add(span) => result.extend_from_slice(span),
        }
    }

    if pos < source.len() {
        return Err(PatchError::TrailingInput(source.len() - pos));
    }
    Ok(result)
}

/// Replays `script` backwards: starting from `target`, rebuilds the source.
///
/// Add spans play the role Remove spans have in [`apply`].
pub fn revert(target: &[Symbol], script: &[Op]) -> Result<Vec<Symbol>, PatchError> {
    let inverted: Vec<Op> = script
        .iter()
        .map(|op| match op {
            Op::Copy(s) => Op::Copy(s.clone()),
            Op::Remove(s) => Op::Add(s.clone()),
            Op::Add(s) => Op::Remove(s.clone()),
        })
        .collect();
    apply(target, &inverted)
}

fn consume(input: &[Symbol], pos: usize, span: &[Symbol]) -> Result<(), PatchError> {
    let end = pos + span.len();
    if end > input.len() {
        return Err(PatchError::InputExhausted {
            needed: end,
            available: input.len(),
        });
    }
    if let Some(offset) = input[pos..end].iter().zip(span).position(|(a, b)| a != b) {
        return Err(PatchError::ContextMismatch {
            position: pos + offset,
            expected: span[offset],
            found: input[pos + offset],
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chunked::diff;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn test_apply_roundtrip(pairs in prop::collection::vec((0i64..3, 0i64..3), 0..30)) {
            let (source, target): (Vec<Symbol>, Vec<Symbol>) = pairs.into_iter().unzip();
            let script = diff(&source, &target).unwrap();
            prop_assert_eq!(apply(&source, &script), Ok(target.clone()));
            prop_assert_eq!(revert(&target, &script), Ok(source));
        }
    }

    #[test]
    fn test_apply_empty() {
        assert_eq!(apply(&[], &[]), Ok(vec![]));
        assert_eq!(apply(&[], &[Op::Add(vec![1, 2])]), Ok(vec![1, 2]));
    }

    #[test]
    fn test_apply_context_mismatch() {
        let script = vec![Op::Copy(vec![1, 2]), Op::Remove(vec![9]), Op::Add(vec![4])];
        assert_eq!(
            apply(&[1, 2, 3], &script),
            Err(PatchError::ContextMismatch {
                position: 2,
                expected: 9,
                found: 3
            })
        );
    }

    #[test]
    fn test_apply_exhausted() {
        let script = vec![Op::Copy(vec![1, 2, 3])];
        assert_eq!(
            apply(&[1, 2], &script),
            Err(PatchError::InputExhausted {
                needed: 3,
                available: 2
            })
        );
    }

    #[test]
    fn test_apply_trailing() {
        let script = vec![Op::Copy(vec![1])];
        assert_eq!(apply(&[1, 2, 3], &script), Err(PatchError::TrailingInput(2)));
    }

    #[test]
    fn test_revert() {
        let script = vec![Op::Copy(vec![1]), Op::Remove(vec![2]), Op::Add(vec![7])];
        assert_eq!(revert(&[1, 7], &script), Ok(vec![1, 2]));
    }
}

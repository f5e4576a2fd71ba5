use crate::chunked::{EditScript, Op};
use crate::Symbol;
use thiserror::Error;

pub const COPY_TAG: char = 'C';
pub const REMOVE_TAG: char = 'R';
pub const ADD_TAG: char = 'A';

pub trait ToPatch {
    fn to_patch(&self) -> String;
}

pub trait FromPatch: Sized {
    fn from_patch(s: &str) -> Result<Self, PatchError>;
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PatchError {
    #[error("invalid patch format: {0}")]
    InvalidFormat(String),
    #[error("unexpected token: {0}")]
    UnexpectedToken(String),
    #[error("context mismatch at position {position}: expected {expected}, found {found}")]
    ContextMismatch {
        position: usize,
        expected: Symbol,
        found: Symbol,
    },
    #[error("patch needs {needed} input symbols but only {available} are available")]
    InputExhausted { needed: usize, available: usize },
    #[error("patch leaves {0} input symbols unconsumed")]
    TrailingInput(usize),
    #[error("symbol {0} is not a unicode scalar value")]
    InvalidSymbol(Symbol),
}

/// Renders an op as its tag followed by its symbols in decimal, separated by spaces.
impl ToPatch for Op {
    fn to_patch(&self) -> String {
        let tag = match self {
            Op::Copy(_) => COPY_TAG,
            Op::Remove(_) => REMOVE_TAG,
            Op::Add(_) => ADD_TAG,
        };
        let body = self
            .symbols()
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<String>>();
        format!("{}{}", tag, body.join(" "))
    }
}

impl FromPatch for Op {
    fn from_patch(s: &str) -> Result<Self, PatchError> {
        let make = match s.chars().next() {
            Some(COPY_TAG) => Op::Copy,
            Some(REMOVE_TAG) => Op::Remove,
            Some(ADD_TAG) => Op::Add,
            _ => return Err(PatchError::UnexpectedToken(s.to_string())),
        };
        Ok(make(parse_symbols(&s[1..])?))
    }
}

/// Ops are concatenated with no separator, e.g. `C97R98A99`.
impl ToPatch for [Op] {
    fn to_patch(&self) -> String {
        self.iter().map(ToPatch::to_patch).collect()
    }
}

impl FromPatch for EditScript {
    fn from_patch(s: &str) -> Result<Self, PatchError> {
        let mut ops = vec![];
        let mut rest = s;
        while !rest.is_empty() {
            if !rest.starts_with(is_tag) {
                return Err(PatchError::UnexpectedToken(rest.to_string()));
            }
            // tags are ascii, so byte 1 is a char boundary
            let end = rest[1..].find(is_tag).map_or(rest.len(), |i| i + 1);
            ops.push(Op::from_patch(&rest[..end])?);
            rest = &rest[end..];
        }
        Ok(ops)
    }
}

fn is_tag(c: char) -> bool {
    matches!(c, COPY_TAG | REMOVE_TAG | ADD_TAG)
}

fn parse_symbols(body: &str) -> Result<Vec<Symbol>, PatchError> {
    if body.is_empty() {
        return Ok(vec![]);
    }
    body.split(' ')
        .map(|t| {
            t.parse::<Symbol>()
                .map_err(|_| PatchError::InvalidFormat(body.to_string()))
        })
        .collect()
}

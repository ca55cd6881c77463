use std::num::ParseIntError;

use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum InputError {
    #[error("unexpected end of input while reading {0}")]
    MissingToken(&'static str),
    #[error("invalid {field} {token:?}")]
    InvalidInteger {
        field: &'static str,
        token: String,
        #[source]
        source: ParseIntError,
    },
    #[error("unexpected trailing token {0:?}")]
    TrailingInput(String),
    #[error("array must hold at least one element")]
    EmptyArray,
    #[error("query {index}: unknown type {kind}, expected 1 or 2")]
    UnknownQueryKind { index: usize, kind: i64 },
    #[error("query {index}: range {start}..={end} is not within 1..={len}")]
    RangeOutOfBounds {
        index: usize,
        start: i64,
        end: i64,
        len: usize,
    },
}

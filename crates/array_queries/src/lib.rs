//! Array and simple queries: repeatedly move a subarray to the front or the
//! back of an array, then report the distance between the end values.

mod error;
mod input;
mod solve;

pub use error::InputError;
pub use input::{Problem, Query, QueryKind, parse_input};
pub use solve::{Solution, solve};

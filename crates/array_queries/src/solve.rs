use std::fmt;

use log::{debug, info};
use treap::{Pivot, Treap};

use crate::error::InputError;
use crate::input::{Problem, QueryKind};

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Solution {
    /// `|first - last|` of the final array.
    pub difference: u64,
    pub values: Vec<i64>,
}

impl fmt::Display for Solution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.difference)?;
        for (i, value) in self.values.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{value}")?;
        }
        Ok(())
    }
}

/// Applies every query in order. `seed` drives node priorities and has no
/// effect on the result.
pub fn solve(problem: &Problem, seed: u64) -> Result<Solution, InputError> {
    problem.validate()?;

    let mut tree = Treap::with_seed(seed);
    for (position, &value) in problem.values.iter().enumerate() {
        tree.insert(position as i64, value);
    }

    for (index, query) in problem.queries.iter().enumerate() {
        let start = query.start as i64 - 1;
        let end = query.end as i64 - 1;

        let (begin, rest) = tree.split(Pivot::Rank(start - 1));
        let (middle, tail) = rest.split(Pivot::Rank(end - start));
        let remainder = Treap::merge(begin, tail);
        tree = match query.kind {
            QueryKind::Front => Treap::merge(middle, remainder),
            QueryKind::Back => Treap::merge(remainder, middle),
        };
        debug!(
            "query {index}: moved {}..={} to the {:?}, height {}",
            query.start,
            query.end,
            query.kind,
            tree.height()
        );
    }

    let (first, last) = match (tree.first(), tree.last()) {
        (Some(first), Some(last)) => (*first.value(), *last.value()),
        _ => return Err(InputError::EmptyArray),
    };
    let values = tree.iter().copied().collect::<Vec<_>>();
    info!(
        "applied {} queries to {} values",
        problem.queries.len(),
        values.len()
    );

    Ok(Solution {
        difference: first.abs_diff(last),
        values,
    })
}

use std::str::{FromStr, SplitAsciiWhitespace};

use log::trace;

use crate::error::InputError;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum QueryKind {
    /// Type 1: the subarray moves before everything else.
    Front,
    /// Type 2: the subarray moves after everything else.
    Back,
}

/// Move `start..=end` (1-indexed) to the front or back of the array.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Query {
    pub kind: QueryKind,
    pub start: usize,
    pub end: usize,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Problem {
    pub values: Vec<i64>,
    pub queries: Vec<Query>,
}

impl Problem {
    pub fn new(values: Vec<i64>, queries: Vec<Query>) -> Result<Self, InputError> {
        let problem = Self { values, queries };
        problem.validate()?;
        Ok(problem)
    }

    pub fn validate(&self) -> Result<(), InputError> {
        if self.values.is_empty() {
            return Err(InputError::EmptyArray);
        }
        for (index, query) in self.queries.iter().enumerate() {
            check_range(index, query.start as i64, query.end as i64, self.values.len())?;
        }
        Ok(())
    }
}

fn check_range(index: usize, start: i64, end: i64, len: usize) -> Result<(), InputError> {
    if start < 1 || start > end || end > len as i64 {
        return Err(InputError::RangeOutOfBounds {
            index,
            start,
            end,
            len,
        });
    }
    Ok(())
}

struct Tokens<'a> {
    inner: SplitAsciiWhitespace<'a>,
}

impl<'a> Tokens<'a> {
    fn new(text: &'a str) -> Self {
        Self {
            inner: text.split_ascii_whitespace(),
        }
    }

    fn next<T: FromStr<Err = std::num::ParseIntError>>(
        &mut self,
        field: &'static str,
    ) -> Result<T, InputError> {
        let token = self.inner.next().ok_or(InputError::MissingToken(field))?;
        token
            .parse()
            .map_err(|source| InputError::InvalidInteger {
                field,
                token: token.to_owned(),
                source,
            })
    }

    fn finish(mut self) -> Result<(), InputError> {
        match self.inner.next() {
            Some(token) => Err(InputError::TrailingInput(token.to_owned())),
            None => Ok(()),
        }
    }
}

/// Parses `n m`, then `n` array values, then `m` lines of `type start end`.
///
/// Tokens are whitespace separated; line breaks carry no meaning.
pub fn parse_input(text: &str) -> Result<Problem, InputError> {
    let mut tokens = Tokens::new(text);
    let len: usize = tokens.next("array length")?;
    let query_count: usize = tokens.next("query count")?;
    if len == 0 {
        return Err(InputError::EmptyArray);
    }
    trace!("header: {len} values, {query_count} queries");

    let values = (0..len)
        .map(|_| tokens.next::<i64>("array value"))
        .collect::<Result<Vec<_>, _>>()?;

    // Sized by the queries actually read, not by the header count.
    let mut queries = Vec::new();
    for index in 0..query_count {
        let kind = match tokens.next::<i64>("query type")? {
            1 => QueryKind::Front,
            2 => QueryKind::Back,
            kind => return Err(InputError::UnknownQueryKind { index, kind }),
        };
        let start: i64 = tokens.next("query start")?;
        let end: i64 = tokens.next("query end")?;
        check_range(index, start, end, len)?;
        queries.push(Query {
            kind,
            start: start as usize,
            end: end as usize,
        });
    }
    tokens.finish()?;

    Ok(Problem { values, queries })
}

use crate::Statement;

use tagorm_core::{stmt::Value, Dialect, Error, MissingFilterReason, Result};

use std::collections::HashMap;

/// A caller supplied `WHERE` condition with its bound arguments.
///
/// Placeholders in the clause are written `$1`, `$2`, ... and refer to
/// `args` by position. The clause text is inserted verbatim; only the
/// arguments are treated as data.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct Filter {
    /// Replaces the generated statement text on select and delete
    pub query: Option<String>,

    pub clause: String,

    pub args: Vec<Value>,
}

impl Filter {
    pub fn new(clause: impl Into<String>) -> Filter {
        Filter {
            query: None,
            clause: clause.into(),
            args: vec![],
        }
    }

    /// A filter that replaces the whole generated statement.
    pub fn raw(query: impl Into<String>) -> Filter {
        Filter {
            query: Some(query.into()),
            ..Filter::default()
        }
    }

    /// Appends an argument for the next placeholder.
    pub fn arg(mut self, value: impl Into<Value>) -> Filter {
        self.args.push(value.into());
        self
    }

    pub fn args(mut self, values: impl IntoIterator<Item = Value>) -> Filter {
        self.args.extend(values);
        self
    }

    pub fn query(mut self, query: impl Into<String>) -> Filter {
        self.query = Some(query.into());
        self
    }

    /// A filter is usable for update, delete and single row lookups only
    /// with both a clause and arguments.
    pub fn validate(&self) -> Result<()> {
        if self.clause.is_empty() {
            return Err(Error::missing_filter(MissingFilterReason::EmptyWhere));
        }

        if self.args.is_empty() {
            return Err(Error::missing_filter(MissingFilterReason::EmptyArgs));
        }

        Ok(())
    }

    /// Validates an optional filter, treating `None` as missing.
    pub fn require(filter: Option<&Filter>) -> Result<&Filter> {
        let filter = filter.ok_or_else(|| Error::missing_filter(MissingFilterReason::Absent))?;
        filter.validate()?;
        Ok(filter)
    }

    fn is_complete(&self) -> bool {
        !self.clause.is_empty() && !self.args.is_empty()
    }

    /// Merges the filter into `stmt`.
    ///
    /// A raw query replaces the statement text. A complete filter then
    /// appends ` WHERE <clause>` and its arguments as they are.
    pub fn apply(&self, stmt: &mut Statement) {
        if let Some(query) = &self.query {
            stmt.sql.clone_from(query);
        }

        if self.is_complete() {
            stmt.sql.push_str(" WHERE ");
            stmt.sql.push_str(&self.clause);
            stmt.params.extend(self.args.iter().cloned());
        }
    }

    /// Merges the filter into a statement whose own parameters already take
    /// the first placeholders. The raw query, if any, is ignored.
    ///
    /// Every argument is appended, including arguments the clause never
    /// references.
    pub fn apply_renumbered(&self, stmt: &mut Statement, dialect: Dialect) {
        if !self.is_complete() {
            return;
        }

        let clause = renumber(&self.clause, self.args.len(), stmt.params.len(), dialect);

        stmt.sql.push_str(" WHERE ");
        stmt.sql.push_str(&clause);
        stmt.params.extend(self.args.iter().cloned());
    }
}

/// Shifts the `$1..=$args` tokens of `clause` past `start` existing
/// parameters.
///
/// Referenced argument positions are numbered consecutively in argument
/// order: the first referenced one becomes `start + 1`, the next `start + 2`
/// and so on. A token is `$` followed by its full digit run, so `$1` never
/// matches inside `$10`. All tokens are rewritten in a single pass over the
/// original clause. Tokens inside string literals are rewritten too.
pub fn renumber(clause: &str, args: usize, start: usize, dialect: Dialect) -> String {
    let present: Vec<usize> = tokens(clause).map(|(_, n)| n).collect();

    let mut mapping = HashMap::new();
    let mut next = start;

    for position in 1..=args {
        if present.contains(&position) {
            next += 1;
            mapping.insert(position, next);
        }
    }

    let mut ret = String::with_capacity(clause.len());
    let mut copied = 0;

    for (range, n) in tokens(clause) {
        if let Some(target) = mapping.get(&n) {
            ret.push_str(&clause[copied..range.start]);
            ret.push_str(&dialect.placeholder(*target));
            copied = range.end;
        }
    }

    ret.push_str(&clause[copied..]);
    ret
}

/// Finds `$<digits>` tokens, yielding their byte range and number. Numbers
/// with a leading zero or that overflow are not tokens.
fn tokens(clause: &str) -> impl Iterator<Item = (std::ops::Range<usize>, usize)> + '_ {
    let bytes = clause.as_bytes();

    clause.match_indices('$').filter_map(move |(start, _)| {
        let digits = bytes[start + 1..]
            .iter()
            .take_while(|b| b.is_ascii_digit())
            .count();

        let number = &clause[start + 1..start + 1 + digits];

        if digits == 0 || number.starts_with('0') {
            return None;
        }

        let n = number.parse().ok()?;
        Some((start..start + 1 + digits, n))
    })
}

//! Clause assembly.
//!
//! [`QueryBuilder`] walks a parameter record field by field and assembles
//!
//! ```text
//! " WHERE 1=1" {" AND " column operand " ?"}* {" AND " custom}* [" ORDER BY " ...] " LIMIT " offset ", " upper
//! ```
//!
//! together with the arguments, in placeholder order.
//!
//! # Example
//! ```ignore
//! use qbuilder::{QueryBuilder, QueryParams, with_extra_limit};
//!
//! #[derive(QueryParams)]
//! struct ProductParam {
//!     #[qb(param = "name", db = "name")]
//!     name: Option<String>,
//!     #[qb(param = "page")]
//!     page: i64,
//! }
//!
//! let clause = QueryBuilder::with_options([with_extra_limit()])
//!     .where_clause("deleted_at IS NULL", Vec::<qbuilder::Value>::new())
//!     .build(&param)?;
//! let sql = format!("SELECT id, name FROM product{}", clause.sql());
//! ```

mod order;
mod pagination;


pub use order::order_by_clause;
pub use pagination::{DEFAULT_LIMIT, DEFAULT_PAGE, Pagination, validate_page_and_limit};

use crate::cursor::{Cursor, SkipReason};
use crate::error::QbResult;
use crate::field::QueryParams;
use crate::value::Value;
use serde::Serialize;

/// Always-true anchor so every predicate can be appended with `AND`.
pub const BASE_WHERE: &str = " WHERE 1=1";

/// Construction-time options for [`QueryBuilder`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BuilderOption {
    /// Fetch one row past the page size.
    ExtraLimit,
}

/// Add one extra row to the computed limit.
///
/// The purpose is checking whether the next page still has data: with `page=1` and
/// `limit=10` the clause ends with `LIMIT 0, 11`.
pub fn with_extra_limit() -> BuilderOption {
    BuilderOption::ExtraLimit
}

/// A built clause and its arguments.
///
/// `sql` holds exactly one `?` per entry in `args`, in the same order.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Clause {
    sql: String,
    args: Vec<Value>,
}

impl Clause {
    pub fn sql(&self) -> &str {
        &self.sql
    }

    pub fn args(&self) -> &[Value] {
        &self.args
    }

    pub fn into_parts(self) -> (String, Vec<Value>) {
        (self.sql, self.args)
    }
}

/// Builds `WHERE` / `ORDER BY` / `LIMIT` fragments from parameter records.
///
/// The builder only holds configuration and custom clauses; each [`QueryBuilder::build`]
/// starts from the default page, limit and sort, so one builder can serve many builds.
#[derive(Debug, Clone, Default)]
#[must_use]
pub struct QueryBuilder {
    extra_limit: i64,
    custom_where: Vec<String>,
    custom_args: Vec<Value>,
}

/// Per-build accumulator.
struct BuildState {
    pagination: Pagination,
    sort_by: Vec<String>,
    where_clause: String,
    args: Vec<Value>,
}

impl QueryBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_options(opts: impl IntoIterator<Item = BuilderOption>) -> Self {
        opts.into_iter().fold(Self::new(), |qb, opt| qb.option(opt))
    }

    /// Apply one option.
    pub fn option(self, opt: BuilderOption) -> Self {
        match opt {
            BuilderOption::ExtraLimit => self.extra_limit(true),
        }
    }

    /// Enable or disable the extra row, see [`with_extra_limit`].
    pub fn extra_limit(mut self, enabled: bool) -> Self {
        self.extra_limit = i64::from(enabled);
        self
    }

    /// Add a custom WHERE clause.
    ///
    /// The fragment is appended as-is after every field-derived predicate; `args` bind to its
    /// placeholders in order. Neither is validated.
    pub fn add_where_clause<I, V>(&mut self, clause: impl Into<String>, args: I) -> &mut Self
    where
        I: IntoIterator<Item = V>,
        V: Into<Value>,
    {
        self.custom_where.push(clause.into());
        self.custom_args.extend(args.into_iter().map(Into::into));
        self
    }

    /// Add a custom WHERE clause (consuming version).
    pub fn where_clause<I, V>(mut self, clause: impl Into<String>, args: I) -> Self
    where
        I: IntoIterator<Item = V>,
        V: Into<Value>,
    {
        self.add_where_clause(clause, args);
        self
    }

    /// Translate a parameter record into a clause.
    ///
    /// Fails only when the record is absent ([`crate::QbError::InvalidArgument`]). Fields
    /// that cannot be translated are left out.
    pub fn build<P: QueryParams + ?Sized>(&self, params: &P) -> QbResult<Clause> {
        let fields = params.fields()?;

        let mut state = BuildState {
            pagination: Pagination {
                extra: self.extra_limit,
                ..Pagination::default()
            },
            sort_by: Vec::new(),
            where_clause: BASE_WHERE.to_string(),
            args: Vec::new(),
        };

        for field in &fields {
            let c = Cursor::from_field(field);

            if c.is_page() {
                state.pagination.page = pagination::positive_int(c.value(), DEFAULT_PAGE);
                continue;
            }

            if c.is_limit() {
                state.pagination.limit = pagination::positive_int(c.value(), DEFAULT_LIMIT);
                continue;
            }

            if c.is_sort_by() {
                state.sort_by = order::sort_specs(c.value());
                continue;
            }

            match c.try_make() {
                Ok(predicate) => {
                    state.where_clause.push_str(&predicate.clause);
                    state.args.extend(predicate.args);
                }
                Err(reason) => trace_skip(&c, reason),
            }
        }

        self.append_custom_where(&mut state);

        let mut sql = state.where_clause;
        sql.push_str(&order_by_clause(&state.sort_by));
        sql.push_str(&state.pagination.to_sql());

        tracing::debug!(
            target: "qbuilder",
            clause = %sql,
            args = ?state.args,
            arg_count = state.args.len(),
            "built query clause"
        );

        Ok(Clause {
            sql,
            args: state.args,
        })
    }

    fn append_custom_where(&self, state: &mut BuildState) {
        for wc in &self.custom_where {
            state.where_clause.push_str(" AND ");
            state.where_clause.push_str(wc);
        }
        state.args.extend(self.custom_args.iter().cloned());
    }
}

fn trace_skip(c: &Cursor<'_, '_>, reason: SkipReason) {
    tracing::trace!(
        target: "qbuilder",
        param = c.param(),
        db = c.db(),
        ?reason,
        "field skipped"
    );
}

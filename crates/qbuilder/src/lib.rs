//! # qbuilder
//!
//! Translate tagged query-parameter structs into parameterized SQL fragments.
//!
//! Each field of a parameter record carries a request name (`param`) and a destination
//! column (`db`). [`QueryBuilder::build`] turns the record into a `WHERE` / `ORDER BY` /
//! `LIMIT` fragment with `?` placeholders plus the matching argument list:
//!
//! - `page` / `limit` fields drive `LIMIT offset, count`
//! - a `short_by` field (list of column names, `-name` for descending) drives `ORDER BY`
//! - every other field tagged with both `param` and `db` becomes an `AND` predicate, with
//!   the operand taken from the name suffix (`__gt`, `__gte`, `__lt`, `__lte`, `__neq`,
//!   `__nin`)
//! - empty text, unset timestamps, `None` and empty lists add nothing
//!
//! ```ignore
//! use qbuilder::{QueryBuilder, QueryParams};
//!
//! #[derive(QueryParams)]
//! struct ProductParam {
//!     #[qb(param = "id", db = "id")]
//!     id: Option<i64>,
//!     #[qb(param = "status__nin", db = "status")]
//!     excluded: Vec<String>,
//!     #[qb(param = "page")]
//!     page: i64,
//!     #[qb(param = "limit")]
//!     limit: i64,
//! }
//!
//! let param = ProductParam { id: Some(1), excluded: vec!["DELETED".into()], page: 2, limit: 20 };
//! let clause = QueryBuilder::new().build(&param)?;
//! assert_eq!(clause.sql(), " WHERE 1=1 AND id = ? AND status NOT IN (?) LIMIT 20, 40");
//! ```

extern crate self as qbuilder;

pub mod builder;
pub mod cursor;
pub mod error;
pub mod field;
pub mod operand;
pub mod placeholder;
pub mod value;

pub use builder::{
    BASE_WHERE, BuilderOption, Clause, DEFAULT_LIMIT, DEFAULT_PAGE, Pagination, QueryBuilder,
    order_by_clause, validate_page_and_limit, with_extra_limit,
};
pub use cursor::{Cursor, LIMIT_PARAM, PAGE_PARAM, Predicate, SKIP_TAG, SORT_BY_PARAM, SkipReason};
pub use error::{QbError, QbResult};
pub use field::{Field, QueryParams, Record};
pub use operand::{Operand, ParamName, Suffix, parse_param};
pub use placeholder::{count_placeholders, in_list, placeholders};
pub use value::{FieldValue, ToFieldValue, ToValue, UNSET_TIMESTAMP, Value};

#[cfg(feature = "derive")]
pub use qbuilder_derive::QueryParams;

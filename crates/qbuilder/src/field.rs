//! Parameter records.
//!
//! A parameter record is any type implementing [`QueryParams`]: an ordered list of
//! [`Field`]s, each tagged with a request name (`param`) and a destination column (`db`).
//!
//! Records usually come from `#[derive(QueryParams)]`:
//!
//! ```ignore
//! use qbuilder::QueryParams;
//!
//! #[derive(QueryParams)]
//! struct ProductParam {
//!     #[qb(param = "id", db = "id")]
//!     id: Option<i64>,
//!     #[qb(param = "price__gte", db = "price")]
//!     min_price: Option<f64>,
//!     #[qb(param = "page")]
//!     page: i64,
//! }
//! ```
//!
//! [`Record`] builds the same thing at runtime.

use crate::error::{QbError, QbResult};
use crate::value::{FieldValue, ToFieldValue};

/// One tagged field of a parameter record.
#[derive(Debug, Clone, PartialEq)]
pub struct Field<'a> {
    /// Request parameter name, possibly with an operand suffix or a control token.
    pub param: &'a str,
    /// Destination column.
    pub db: &'a str,
    pub value: FieldValue,
}

impl<'a> Field<'a> {
    pub fn new(param: &'a str, db: &'a str, value: FieldValue) -> Self {
        Self { param, db, value }
    }
}

/// A parameter record: fields in declared order.
pub trait QueryParams {
    /// Returns every tagged field in declaration order.
    ///
    /// Fails with [`QbError::InvalidArgument`] when there is no record to read.
    fn fields(&self) -> QbResult<Vec<Field<'_>>>;
}

impl<T: QueryParams + ?Sized> QueryParams for &T {
    fn fields(&self) -> QbResult<Vec<Field<'_>>> {
        (**self).fields()
    }
}

impl<T: QueryParams + ?Sized> QueryParams for Box<T> {
    fn fields(&self) -> QbResult<Vec<Field<'_>>> {
        (**self).fields()
    }
}

impl<T: QueryParams> QueryParams for Option<T> {
    fn fields(&self) -> QbResult<Vec<Field<'_>>> {
        match self {
            Some(params) => params.fields(),
            None => Err(QbError::invalid_argument(
                "parameter record should be present and cannot be null",
            )),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
struct RecordField {
    param: String,
    db: String,
    value: FieldValue,
}

/// A parameter record assembled at runtime.
///
/// # Example
/// ```ignore
/// let record = Record::new()
///     .field("name", "name", "widget")
///     .field("price__lt", "price", 9.5_f64)
///     .field("limit", "-", 50_i64);
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Record {
    fields: Vec<RecordField>,
}

impl Record {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a field (consuming version).
    pub fn field(
        mut self,
        param: impl Into<String>,
        db: impl Into<String>,
        value: impl ToFieldValue,
    ) -> Self {
        self.push(param, db, value);
        self
    }

    /// Append a field.
    pub fn push(
        &mut self,
        param: impl Into<String>,
        db: impl Into<String>,
        value: impl ToFieldValue,
    ) -> &mut Self {
        self.fields.push(RecordField {
            param: param.into(),
            db: db.into(),
            value: value.to_field_value(),
        });
        self
    }
}

impl QueryParams for Record {
    fn fields(&self) -> QbResult<Vec<Field<'_>>> {
        Ok(self
            .fields
            .iter()
            .map(|f| Field::new(&f.param, &f.db, f.value.clone()))
            .collect())
    }
}

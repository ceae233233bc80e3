//! Per-field classification and value-to-clause conversion.

use crate::field::Field;
use crate::operand::{Operand, ParamName, parse_param};
use crate::placeholder::in_list;
use crate::value::{FieldValue, Value};

/// Request name of the page-number field.
pub const PAGE_PARAM: &str = "page";
/// Request name of the page-size field.
pub const LIMIT_PARAM: &str = "limit";
/// Request name of the sort field.
///
/// The token is `short_by`, kept as-is for compatibility with existing clients.
pub const SORT_BY_PARAM: &str = "short_by";
/// Tag value excluding a field.
pub const SKIP_TAG: &str = "-";

/// A filter predicate produced from one field: `" AND {db} {op} ?"` plus its arguments.
#[derive(Debug, Clone, PartialEq)]
pub struct Predicate {
    pub clause: String,
    pub args: Vec<Value>,
}

/// Why a field produced no predicate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkipReason {
    /// `param` or `db` is empty or `-`.
    Untagged,
    /// Empty text, unset timestamp, invalid nullable or empty list.
    NoValue,
    /// The field type has no clause translation.
    Unsupported,
}

/// A read-only view over one field during a build.
#[derive(Debug, Clone, Copy)]
pub struct Cursor<'f, 'a> {
    value: &'f FieldValue,
    param: &'a str,
    db: &'a str,
}

impl<'f, 'a> Cursor<'f, 'a> {
    pub fn new(value: &'f FieldValue, param: &'a str, db: &'a str) -> Self {
        Self { value, param, db }
    }

    pub fn from_field(field: &'f Field<'a>) -> Self {
        Self::new(&field.value, field.param, field.db)
    }

    pub fn value(&self) -> &'f FieldValue {
        self.value
    }

    pub fn param(&self) -> &'a str {
        self.param
    }

    pub fn db(&self) -> &'a str {
        self.db
    }

    pub fn is_page(&self) -> bool {
        self.param == PAGE_PARAM
    }

    pub fn is_limit(&self) -> bool {
        self.param == LIMIT_PARAM
    }

    pub fn is_sort_by(&self) -> bool {
        self.param == SORT_BY_PARAM
    }

    /// Whether the field is excluded by its tags, regardless of value.
    pub fn is_skipped(&self) -> bool {
        self.param.is_empty() || self.param == SKIP_TAG || self.db.is_empty() || self.db == SKIP_TAG
    }

    fn name(&self) -> ParamName<'a> {
        parse_param(self.param)
    }

    /// Operand for a single-value predicate.
    pub fn operand(&self) -> Operand {
        self.name().operand()
    }

    /// Operand for a membership predicate.
    pub fn operand_multi(&self) -> Operand {
        self.name().operand_multi()
    }

    /// Convert the field into a predicate, or `None` if the field contributes nothing.
    pub fn make(&self) -> Option<Predicate> {
        self.try_make().ok()
    }

    /// Like [`Cursor::make`], reporting why a field was left out.
    pub fn try_make(&self) -> Result<Predicate, SkipReason> {
        if self.is_skipped() {
            return Err(SkipReason::Untagged);
        }

        match self.value {
            FieldValue::Unsupported => Err(SkipReason::Unsupported),
            v if v.is_skipped() => Err(SkipReason::NoValue),
            FieldValue::Scalar(v) => Ok(self.make_single(v)),
            FieldValue::Nullable(Some(v)) => Ok(self.make_single(v)),
            FieldValue::List(vs) => Ok(self.make_multi(vs)),
            FieldValue::Nullable(None) => Err(SkipReason::NoValue),
        }
    }

    fn make_single(&self, val: &Value) -> Predicate {
        let mut operand = self.operand();
        if val.is_text() && operand == Operand::Eq {
            operand = Operand::Like;
        }

        Predicate {
            clause: format!(" AND {} {} ?", self.db, operand),
            args: vec![val.clone()],
        }
    }

    fn make_multi(&self, vals: &[Value]) -> Predicate {
        let (list, args) = in_list(vals.iter().cloned());
        Predicate {
            clause: format!(" AND {} {} {}", self.db, self.operand_multi(), list),
            args,
        }
    }
}

//! Operand inference from request parameter names.
//!
//! A filter's request name may end with an operand suffix:
//!
//! | name              | single value | collection |
//! |-------------------|--------------|------------|
//! | `price__gt`       | `>`          | `IN`       |
//! | `price__gte`      | `>=`         | `IN`       |
//! | `price__lt`       | `<`          | `IN`       |
//! | `price__lte`      | `<=`         | `IN`       |
//! | `status__neq`     | `!=`         | `IN`       |
//! | `status__nin`     | `=`          | `NOT IN`   |
//! | `status`          | `=`          | `IN`       |

use std::fmt;

const SUFFIX_SEPARATOR: &str = "__";

/// Comparison or membership operator of a filter predicate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operand {
    Eq,
    Neq,
    Gt,
    Gte,
    Lt,
    Lte,
    Like,
    In,
    NotIn,
}

impl Operand {
    pub fn as_str(self) -> &'static str {
        match self {
            Operand::Eq => "=",
            Operand::Neq => "!=",
            Operand::Gt => ">",
            Operand::Gte => ">=",
            Operand::Lt => "<",
            Operand::Lte => "<=",
            Operand::Like => "LIKE",
            Operand::In => "IN",
            Operand::NotIn => "NOT IN",
        }
    }
}

impl fmt::Display for Operand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A recognized operand suffix on a request name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Suffix {
    Gt,
    Gte,
    Lt,
    Lte,
    Neq,
    Nin,
}

impl Suffix {
    fn parse(s: &str) -> Option<Self> {
        match s {
            "gt" => Some(Suffix::Gt),
            "gte" => Some(Suffix::Gte),
            "lt" => Some(Suffix::Lt),
            "lte" => Some(Suffix::Lte),
            "neq" => Some(Suffix::Neq),
            "nin" => Some(Suffix::Nin),
            _ => None,
        }
    }
}

/// A request name split into its base name and operand suffix.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParamName<'a> {
    pub base: &'a str,
    pub suffix: Option<Suffix>,
}

impl ParamName<'_> {
    /// Operand used when the field holds a single value.
    pub fn operand(&self) -> Operand {
        match self.suffix {
            Some(Suffix::Gt) => Operand::Gt,
            Some(Suffix::Gte) => Operand::Gte,
            Some(Suffix::Lt) => Operand::Lt,
            Some(Suffix::Lte) => Operand::Lte,
            Some(Suffix::Neq) => Operand::Neq,
            Some(Suffix::Nin) | None => Operand::Eq,
        }
    }

    /// Operand used when the field holds a collection.
    pub fn operand_multi(&self) -> Operand {
        match self.suffix {
            Some(Suffix::Nin) => Operand::NotIn,
            _ => Operand::In,
        }
    }
}

/// Split a request name such as `created_at__gte` into `("created_at", Some(Gte))`.
///
/// Names without a recognized suffix are returned whole with `suffix: None`.
pub fn parse_param(name: &str) -> ParamName<'_> {
    let split = name
        .rsplit_once(SUFFIX_SEPARATOR)
        .and_then(|(base, suffix)| Suffix::parse(suffix).map(|suffix| (base, suffix)));

    match split {
        Some((base, suffix)) => ParamName {
            base,
            suffix: Some(suffix),
        },
        None => ParamName {
            base: name,
            suffix: None,
        },
    }
}

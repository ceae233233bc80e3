//! `?` placeholder helpers.

use crate::value::Value;

/// Placeholder token bound positionally to one argument.
pub const PLACEHOLDER: char = '?';

/// Render `n` placeholders as a parenthesized list: `(?, ?, ?)`.
///
/// `n == 0` renders `()`; callers are expected to omit empty lists.
pub fn placeholders(n: usize) -> String {
    let mut out = String::with_capacity(2 + n.saturating_mul(3));
    out.push('(');
    for i in 0..n {
        if i > 0 {
            out.push_str(", ");
        }
        out.push(PLACEHOLDER);
    }
    out.push(')');
    out
}

/// Expand a list of values into `(?, ..., ?)` and the flat argument list, in order.
pub fn in_list<I, V>(values: I) -> (String, Vec<Value>)
where
    I: IntoIterator<Item = V>,
    V: Into<Value>,
{
    let args: Vec<Value> = values.into_iter().map(Into::into).collect();
    (placeholders(args.len()), args)
}

/// Count `?` placeholders in a SQL fragment.
pub fn count_placeholders(sql: &str) -> usize {
    sql.chars().filter(|c| *c == PLACEHOLDER).count()
}

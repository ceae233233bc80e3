//! Sort specs and the `ORDER BY` clause.

use crate::value::FieldValue;

/// Read a sort field: a list of column names, `-name` meaning descending.
///
/// Any other field shape yields no sort.
pub(crate) fn sort_specs(value: &FieldValue) -> Vec<String> {
    let FieldValue::List(values) = value else {
        return Vec::new();
    };

    let specs: Option<Vec<String>> = values
        .iter()
        .map(|v| v.as_text().map(str::to_string))
        .collect();
    specs.unwrap_or_default()
}

/// `" ORDER BY created_at DESC, status ASC"`, or an empty string for no specs.
///
/// Entries with no column name (`""`, `"-"`) are ignored.
pub fn order_by_clause<S: AsRef<str>>(specs: &[S]) -> String {
    let mut terms: Vec<String> = Vec::with_capacity(specs.len());
    for spec in specs {
        let spec: &str = spec.as_ref();
        let (name, dir) = match spec.strip_prefix('-') {
            Some(name) => (name, "DESC"),
            None => (spec, "ASC"),
        };
        if name.is_empty() {
            continue;
        }
        terms.push(format!("{name} {dir}"));
    }

    if terms.is_empty() {
        return String::new();
    }
    format!(" ORDER BY {}", terms.join(", "))
}

//! Derive macros for qbuilder
//!
//! Provides `#[derive(QueryParams)]`.

use proc_macro::TokenStream;
use syn::{DeriveInput, parse_macro_input};

mod query_params;

/// Derive `QueryParams` for a struct with named fields.
///
/// # Example
///
/// ```ignore
/// use qbuilder::QueryParams;
///
/// #[derive(QueryParams)]
/// struct OrderParam {
///     #[qb(param = "created_at__gte", db = "created_at")]
///     since: Option<chrono::DateTime<chrono::Utc>>,
///     #[qb(param = "status__nin", db = "status")]
///     excluded: Vec<String>,
///     #[qb(param = "page")]
///     page: i64,
///     #[qb(param = "short_by")]
///     sort: Vec<String>,
///     // no #[qb]: not part of the query
///     trace_id: String,
/// }
/// ```
///
/// # Attributes
///
/// - `#[qb(param = "name", db = "column")]` - Request name (with optional operand suffix)
///   and destination column. `db` may be omitted for `page` / `limit` / `short_by`.
/// - `#[qb(skip)]` - Exclude the field
///
/// Every tagged field type must implement `qbuilder::ToFieldValue`.
#[proc_macro_derive(QueryParams, attributes(qb))]
pub fn derive_query_params(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    query_params::expand(input)
        .unwrap_or_else(|e| e.to_compile_error())
        .into()
}

//! Example: build the WHERE / LIMIT tail of a product listing query.
//!
//! Run with:
//!   cargo run --example product_search -p qbuilder

use qbuilder::{QbResult, QueryBuilder, QueryParams, with_extra_limit};

#[derive(Debug, Default, QueryParams)]
struct ProductParam {
    #[qb(param = "id", db = "id")]
    id: Option<i64>,
    #[qb(param = "name", db = "name")]
    name: Option<String>,
    #[qb(param = "price__gte", db = "price")]
    min_price: Option<f64>,
    #[qb(param = "category__nin", db = "category")]
    excluded_categories: Vec<String>,
    #[qb(param = "page")]
    page: i64,
    #[qb(param = "limit")]
    limit: i64,
    #[qb(param = "short_by")]
    short_by: Vec<String>,
}

fn main() -> QbResult<()> {
    let query = "SELECT id, name FROM product";

    let param = ProductParam {
        name: Some("%lamp%".to_string()),
        min_price: Some(10.0),
        excluded_categories: vec!["archived".to_string()],
        page: 2,
        limit: 20,
        short_by: vec!["-price".to_string(), "name".to_string()],
        ..Default::default()
    };

    let clause = QueryBuilder::with_options([with_extra_limit()])
        .where_clause("stock > ?", [0_i64])
        .build(&param)?;

    println!("sql:  {query}{}", clause.sql());
    println!("args: {:?}", clause.args());

    // The extra row tells whether a next page exists.
    let rows_fetched = 21_usize;
    let has_next = (rows_fetched as i64) > param.limit;
    println!("has next page: {has_next}");

    Ok(())
}

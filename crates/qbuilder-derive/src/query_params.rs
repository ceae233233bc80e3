//! QueryParams derive macro implementation.
//!
//! Generates a `qbuilder::QueryParams` impl listing every `#[qb(...)]`-tagged field, in
//! declaration order, with its `param` / `db` tags.

use proc_macro2::TokenStream;
use quote::quote;
use syn::{Data, DeriveInput, Fields, Result};

#[derive(Debug, Default, PartialEq, Eq)]
struct FieldTags {
    param: Option<String>,
    db: Option<String>,
    skip: bool,
}

fn lit_str(nv: &syn::MetaNameValue) -> Result<String> {
    let syn::Expr::Lit(expr_lit) = &nv.value else {
        return Err(syn::Error::new_spanned(
            nv,
            "qb(...) tags expect a string literal",
        ));
    };
    let syn::Lit::Str(lit) = &expr_lit.lit else {
        return Err(syn::Error::new_spanned(
            expr_lit,
            "qb(...) tags expect a string literal",
        ));
    };
    Ok(lit.value())
}

/// Parse the `#[qb(...)]` attributes of one field.
///
/// Returns `None` when the field carries no `qb` attribute.
fn parse_field_tags(field: &syn::Field) -> Result<Option<FieldTags>> {
    let mut tags: Option<FieldTags> = None;

    for attr in &field.attrs {
        if !attr.path().is_ident("qb") {
            continue;
        }
        let tags = tags.get_or_insert_with(FieldTags::default);

        let items = attr.parse_args_with(
            syn::punctuated::Punctuated::<syn::Meta, syn::Token![,]>::parse_terminated,
        )?;

        for meta in items {
            match meta {
                syn::Meta::Path(p) if p.is_ident("skip") => {
                    tags.skip = true;
                }
                syn::Meta::NameValue(nv) if nv.path.is_ident("param") => {
                    if tags.param.is_some() {
                        return Err(syn::Error::new_spanned(
                            nv,
                            "param can only be specified once",
                        ));
                    }
                    tags.param = Some(lit_str(&nv)?);
                }
                syn::Meta::NameValue(nv) if nv.path.is_ident("db") => {
                    if tags.db.is_some() {
                        return Err(syn::Error::new_spanned(
                            nv,
                            "db can only be specified once",
                        ));
                    }
                    tags.db = Some(lit_str(&nv)?);
                }
                other => {
                    return Err(syn::Error::new_spanned(
                        other,
                        "unknown qb(...) argument (supported: param = \"...\", db = \"...\", skip)",
                    ));
                }
            }
        }
    }

    let Some(tags) = tags else {
        return Ok(None);
    };

    if !tags.skip && tags.param.is_none() {
        return Err(syn::Error::new_spanned(
            field,
            "qb(...) requires a request name, e.g. #[qb(param = \"name\", db = \"name\")]",
        ));
    }

    Ok(Some(tags))
}

pub fn expand(input: DeriveInput) -> Result<TokenStream> {
    let name = &input.ident;
    let generics = &input.generics;
    let (impl_generics, ty_generics, where_clause) = generics.split_for_impl();

    let fields = match &input.data {
        Data::Struct(data) => match &data.fields {
            Fields::Named(fields) => &fields.named,
            _ => {
                return Err(syn::Error::new_spanned(
                    &input,
                    "QueryParams can only be derived for structs with named fields",
                ));
            }
        },
        _ => {
            return Err(syn::Error::new_spanned(
                &input,
                "QueryParams can only be derived for structs",
            ));
        }
    };

    let mut entries: Vec<TokenStream> = Vec::new();

    for field in fields {
        let Some(field_ident) = field.ident.clone() else {
            continue;
        };

        let Some(tags) = parse_field_tags(field)? else {
            continue;
        };
        if tags.skip {
            continue;
        }

        let param = tags.param.unwrap_or_default();
        let db = tags.db.unwrap_or_default();

        entries.push(quote! {
            ::qbuilder::Field::new(
                #param,
                #db,
                ::qbuilder::ToFieldValue::to_field_value(&self.#field_ident),
            )
        });
    }

    Ok(quote! {
        impl #impl_generics ::qbuilder::QueryParams for #name #ty_generics #where_clause {
            fn fields(&self) -> ::qbuilder::QbResult<::std::vec::Vec<::qbuilder::Field<'_>>> {
                ::std::result::Result::Ok(::std::vec![#(#entries),*])
            }
        }
    })
}

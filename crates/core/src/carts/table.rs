//! Cart Table

use std::io;

use tabled::{
    builder::Builder,
    settings::{
        Alignment, Color, Style,
        object::{Columns, Rows},
    },
};
use thiserror::Error;

use crate::{
    carts::{CartItem, MetadataValue},
    currency::eurilize,
};

/// Metadata key rendered as a euro amount.
const PRICE_KEY: &str = "price";

/// Errors that can occur when writing a cart table.
#[derive(Debug, Error)]
pub enum CartTableError {
    /// Writing to the output failed.
    #[error("failed to write cart table")]
    IO(#[from] io::Error),
}

/// Writes the cart as a table, one row per line item, sorted by product.
///
/// # Errors
///
/// Returns a [`CartTableError`] if the output cannot be written to.
pub fn write_cart_table(mut out: impl io::Write, items: &[CartItem]) -> Result<(), CartTableError> {
    let mut rows: Vec<&CartItem> = items.iter().collect();
    rows.sort_by(|a, b| a.product_id.cmp(&b.product_id));

    let mut builder = Builder::default();

    builder.push_record(["Product", "Quantity", "Details"]);

    for item in &rows {
        builder.push_record([
            item.product_id.clone(),
            item.quantity.to_string(),
            details(item),
        ]);
    }

    let mut table = builder.build();

    table.with(Style::rounded());
    table.modify(Rows::first(), Color::BOLD);
    table.modify(Columns::new(1..2), Alignment::right());

    let units = rows
        .iter()
        .fold(0_i64, |acc, item| acc.saturating_add(item.quantity));

    writeln!(out, "\n{table}")?;
    writeln!(out, " Lines: {}  Units: {units}", rows.len())?;

    Ok(())
}

/// Metadata as `key: value` pairs, sorted by key.
fn details(item: &CartItem) -> String {
    let mut fields: Vec<(&String, &MetadataValue)> = item.metadata.iter().collect();
    fields.sort_by(|a, b| a.0.cmp(b.0));

    fields
        .into_iter()
        .map(|(key, value)| match value {
            MetadataValue::Number(price) if key == PRICE_KEY => {
                format!("{key}: {}", eurilize(*price))
            }
            _ => format!("{key}: {value}"),
        })
        .collect::<Vec<_>>()
        .join(", ")
}

//! Comercify prelude.
//!
//! Convenience exports for common library consumers.

pub use crate::{
    carts::{
        CartItem, Metadata, MetadataValue, merge_carts,
        table::{CartTableError, write_cart_table},
    },
    currency::{CurrencyInput, ZERO_EUROS, eurilize},
    discounts::{DiscountKind, DiscountOutcome, SimpleDiscount, apply_discount, apply_discount_at},
    fixtures::{Fixture, FixtureError, load_cart_file},
    pricing::{Savings, calculate_savings},
    slugs::slugify,
};

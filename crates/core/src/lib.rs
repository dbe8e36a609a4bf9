//! Comercify
//!
//! Small storefront helpers: cart reconciliation, euro formatting, URL slugs,
//! savings and simple discount calculations.

pub mod carts;
pub mod currency;
pub mod discounts;
pub mod fixtures;
pub mod prelude;
pub mod pricing;
pub mod slugs;

//! Pricing

use rust_decimal::{Decimal, RoundingStrategy};

/// How much was saved going from an original price to a discounted one.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Savings {
    /// Absolute amount saved
    pub amount_saved: Decimal,

    /// Amount saved as percentage points of the original price, to 2 decimal places
    pub percent_saved: Decimal,
}

impl Savings {
    /// No savings at all.
    pub const NONE: Savings = Savings {
        amount_saved: Decimal::ZERO,
        percent_saved: Decimal::ZERO,
    };
}

/// Calculates the savings between an original and a discounted price.
///
/// Returns [`Savings::NONE`] when the original price is not positive or the
/// discounted price is not lower than the original.
pub fn calculate_savings(original_price: Decimal, discounted_price: Decimal) -> Savings {
    if original_price <= Decimal::ZERO || discounted_price >= original_price {
        return Savings::NONE;
    }

    let savings = original_price
        .checked_sub(discounted_price)
        .and_then(|amount_saved| {
            amount_saved
                .checked_div(original_price)
                .and_then(|ratio| ratio.checked_mul(Decimal::ONE_HUNDRED))
                .map(|percent| (amount_saved, round_cents(percent)))
        });

    match savings {
        Some((amount_saved, percent_saved)) => Savings {
            amount_saved,
            percent_saved,
        },
        None => Savings::NONE,
    }
}

/// Rounds to 2 decimal places, halves away from zero.
pub(crate) fn round_cents(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
}

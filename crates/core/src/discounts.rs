//! Discounts
//!
//! Simple cart-level discounts: a percentage or a fixed amount off the
//! subtotal, optionally gated by a minimum subtotal and an expiry time.

use jiff::Timestamp;
use rust_decimal::Decimal;

use crate::pricing::round_cents;

/// How the discount amount is interpreted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DiscountKind {
    /// `amount` is a percentage of the subtotal (e.g. `20` for 20% off)
    Percentage,

    /// `amount` is subtracted from the subtotal
    Fixed,
}

/// A percentage or fixed-amount discount on a subtotal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SimpleDiscount {
    /// Discount kind
    pub kind: DiscountKind,

    /// Percentage points or fixed amount, depending on `kind`
    pub amount: Decimal,

    /// Subtotal required for the discount to apply
    pub min_subtotal: Option<Decimal>,

    /// Instant after which the discount no longer applies
    pub expires_at: Option<Timestamp>,
}

impl SimpleDiscount {
    /// A percentage discount without conditions.
    #[must_use]
    pub const fn percentage(amount: Decimal) -> Self {
        Self {
            kind: DiscountKind::Percentage,
            amount,
            min_subtotal: None,
            expires_at: None,
        }
    }

    /// A fixed amount discount without conditions.
    #[must_use]
    pub const fn fixed(amount: Decimal) -> Self {
        Self {
            kind: DiscountKind::Fixed,
            amount,
            min_subtotal: None,
            expires_at: None,
        }
    }

    /// Only apply to subtotals of at least `min_subtotal`.
    #[must_use]
    pub const fn with_min_subtotal(mut self, min_subtotal: Decimal) -> Self {
        self.min_subtotal = Some(min_subtotal);
        self
    }

    /// Stop applying once `expires_at` has passed.
    #[must_use]
    pub const fn expiring_at(mut self, expires_at: Timestamp) -> Self {
        self.expires_at = Some(expires_at);
        self
    }

    /// Check whether the discount has expired at the given instant.
    pub fn is_expired_at(&self, now: Timestamp) -> bool {
        self.expires_at.is_some_and(|expires_at| expires_at < now)
    }

    /// Check whether the subtotal meets the minimum, if there is one.
    pub fn is_eligible(&self, subtotal: Decimal) -> bool {
        self.min_subtotal
            .is_none_or(|min_subtotal| subtotal >= min_subtotal)
    }

    /// Savings for the subtotal, rounded to cents. `None` on overflow.
    fn savings_on(&self, subtotal: Decimal) -> Option<Decimal> {
        match self.kind {
            DiscountKind::Percentage => subtotal
                .checked_mul(self.amount)
                .and_then(|value| value.checked_div(Decimal::ONE_HUNDRED))
                .map(round_cents),
            DiscountKind::Fixed => Some(round_cents(self.amount)),
        }
    }
}

/// Result of applying a discount to a subtotal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DiscountOutcome {
    /// Amount to pay, never negative
    pub total: Decimal,

    /// Discount granted; may exceed the subtotal for large fixed discounts
    pub savings: Decimal,
}

impl DiscountOutcome {
    /// The subtotal with no discount.
    pub const fn unchanged(subtotal: Decimal) -> Self {
        Self {
            total: subtotal,
            savings: Decimal::ZERO,
        }
    }
}

/// Applies a discount to a subtotal as of now.
///
/// See [`apply_discount_at`].
pub fn apply_discount(subtotal: Decimal, discount: &SimpleDiscount) -> DiscountOutcome {
    apply_discount_at(subtotal, discount, Timestamp::now())
}

/// Applies a discount to a subtotal as of the given instant.
///
/// The subtotal is returned unchanged when the discount has expired, the
/// subtotal is below the discount's minimum, or the discount would not save
/// anything. Otherwise the total is the subtotal minus the savings, floored
/// at zero and rounded to cents.
pub fn apply_discount_at(
    subtotal: Decimal,
    discount: &SimpleDiscount,
    now: Timestamp,
) -> DiscountOutcome {
    if discount.is_expired_at(now) || !discount.is_eligible(subtotal) {
        return DiscountOutcome::unchanged(subtotal);
    }

    let Some(savings) = discount.savings_on(subtotal) else {
        return DiscountOutcome::unchanged(subtotal);
    };

    if savings <= Decimal::ZERO {
        return DiscountOutcome::unchanged(subtotal);
    }

    let Some(remaining) = subtotal.checked_sub(savings) else {
        return DiscountOutcome::unchanged(subtotal);
    };

    DiscountOutcome {
        total: round_cents(remaining.max(Decimal::ZERO)),
        savings,
    }
}

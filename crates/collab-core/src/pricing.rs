//! Discount collaborators.
//!
//! Amounts are integer cents. Tiers extend a base discount by composition:
//! [`tiered`] wraps any discount in an [`Augmented`] that multiplies its
//! result, so a new tier never edits an existing one.

use crate::capability::{Augmented, Capability};
use crate::error::CapabilityResult;

/// Percentage granted by [`RegularDiscount`].
pub const REGULAR_RATE_PERCENT: u64 = 20;

/// Multiplier applied on top of the regular discount for VIP customers.
pub const VIP_MULTIPLIER: u64 = 2;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RegularDiscount {
    price_cents: u64,
}

impl RegularDiscount {
    pub fn new(price_cents: u64) -> Self {
        Self { price_cents }
    }

    pub fn price_cents(&self) -> u64 {
        self.price_cents
    }
}

impl Capability for RegularDiscount {
    type Output = u64;

    fn perform(&self) -> CapabilityResult<u64> {
        // Widen so the rate multiplication cannot overflow; the quotient always fits.
        let amount = u128::from(self.price_cents) * u128::from(REGULAR_RATE_PERCENT) / 100;
        Ok(u64::try_from(amount).unwrap_or(u64::MAX))
    }
}

/// A discount tier built on `base`, multiplying its amount.
pub fn tiered<B>(base: B, multiplier: u64) -> Augmented<B, impl Fn(u64) -> u64>
where
    B: Capability<Output = u64>,
{
    Augmented::new(base, move |amount: u64| amount.saturating_mul(multiplier))
}

/// The VIP tier: twice the regular discount.
pub fn vip(price_cents: u64) -> Augmented<RegularDiscount, impl Fn(u64) -> u64> {
    tiered(RegularDiscount::new(price_cents), VIP_MULTIPLIER)
}

//! Budget classification.

use crate::model::BudgetTier;

/// Lowest budget that counts as [`BudgetTier::Steady`].
pub const STEADY_THRESHOLD: u32 = 45;
/// Lowest budget that counts as [`BudgetTier::Aggressive`].
pub const AGGRESSIVE_THRESHOLD: u32 = 75;

/// Map a budget intensity to its tier. Boundary values belong to the higher
/// tier.
pub fn classify_budget(budget: u32) -> BudgetTier {
    if budget >= AGGRESSIVE_THRESHOLD {
        BudgetTier::Aggressive
    } else if budget >= STEADY_THRESHOLD {
        BudgetTier::Steady
    } else {
        BudgetTier::Lean
    }
}

use crate::models::MealOption;
use crate::swap::budget::BudgetEnvelope;
use crate::swap::constants::{
    BASE_SCORE, OVER_BUDGET_PENALTY_RATE, RATING_PIVOT, RATING_WEIGHT, TOP_TIER_BONUS,
    VARIETY_BONUS,
};

/// Soft score for an already-eligible candidate. Additive, starting from
/// the base value; budget violations penalize here rather than reject.
pub fn score_candidate(
    candidate: &MealOption,
    envelope: &BudgetEnvelope,
    prefers_top_tier: bool,
) -> f64 {
    let mut score = BASE_SCORE;

    if prefers_top_tier && candidate.is_top_tier() {
        score += TOP_TIER_BONUS;
    }

    if !envelope.cuisine_in_use(&candidate.cuisine) {
        score += VARIETY_BONUS;
    }

    let overage = candidate.price - envelope.remaining_for_slot;
    if overage > 0.0 {
        score -= OVER_BUDGET_PENALTY_RATE * overage;
    }

    score += (candidate.vendor.rating - RATING_PIVOT) * RATING_WEIGHT;

    score
}

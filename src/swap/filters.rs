use crate::models::{MealOption, UserProfile};
use crate::swap::budget::BudgetEnvelope;
use crate::swap::constants::{
    cuisine_label, DIET_GLUTEN_FREE, DIET_HALAL, DIET_VEGAN, DIET_VEGETARIAN,
};

/// Hard-filter pass: a candidate is rejected, short-circuit, if any rule
/// holds. This never scores; penalties live in the scoring pass so the
/// reject/penalize split stays auditable.
///
/// Rules, in order:
/// 1. wrong meal time for the slot
/// 2. allergen intersection with the user's allergies
/// 3. an unsatisfied diet flag (all held diets must be satisfied)
/// 4. cuisine preference selected and no cuisine/tag match
/// 5. identical to the meal currently in the slot
/// 6. price above the absolute cap
/// 7. vendor differs from the required restaurant
pub fn passes_hard_filters(
    candidate: &MealOption,
    slot: &str,
    profile: &UserProfile,
    envelope: &BudgetEnvelope,
    selected_cuisines: &[String],
    current_meal_id: Option<&str>,
    required_restaurant: Option<&str>,
) -> bool {
    if !candidate.serves(slot) {
        return false;
    }

    if profile.allergies.iter().any(|a| candidate.has_allergen(a)) {
        return false;
    }

    if profile.holds_diet(DIET_VEGAN) && !candidate.dietary.vegan {
        return false;
    }
    if profile.holds_diet(DIET_VEGETARIAN) && !candidate.dietary.vegetarian {
        return false;
    }
    if profile.holds_diet(DIET_HALAL) && !candidate.dietary.halal {
        return false;
    }
    if profile.holds_diet(DIET_GLUTEN_FREE) && !candidate.dietary.gluten_free {
        return false;
    }

    if !selected_cuisines.is_empty() {
        let matches_any = selected_cuisines
            .iter()
            .any(|id| candidate.matches_cuisine(cuisine_label(id)));
        if !matches_any {
            return false;
        }
    }

    if let Some(current_id) = current_meal_id {
        if candidate.id.eq_ignore_ascii_case(current_id) {
            return false;
        }
    }

    if candidate.price > envelope.absolute_max_price {
        return false;
    }

    if let Some(required) = required_restaurant {
        if !candidate.vendor.name.eq_ignore_ascii_case(required) {
            return false;
        }
    }

    true
}

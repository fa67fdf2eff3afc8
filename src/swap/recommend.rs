use crate::models::{
    DailySchedule, FinancialConfig, MealOption, ParticipantRole, SwapContext, UserProfile,
};
use crate::swap::budget::BudgetEnvelope;
use crate::swap::constants::MAX_RESULTS;
use crate::swap::filters::passes_hard_filters;
use crate::swap::scoring::score_candidate;

/// A catalog meal annotated with its swap score. The catalog entry itself
/// is never mutated; this is a copy.
#[derive(Debug, Clone)]
pub struct ScoredMeal {
    pub meal: MealOption,
    pub score: f64,
}

/// The vendor the substitute must come from, if any.
///
/// A guest in a shared order is pinned to the host's vendor (first
/// participant with the host role, else the first participant), overriding
/// any caller-supplied restriction.
pub fn resolve_required_restaurant(context: &SwapContext) -> Option<String> {
    if context.role == Some(ParticipantRole::Guest) && !context.participants.is_empty() {
        let host = context
            .participants
            .iter()
            .find(|p| p.role == ParticipantRole::Host)
            .unwrap_or(&context.participants[0]);
        return Some(host.vendor.clone());
    }
    context.required_restaurant.clone()
}

/// Find up to five legal substitutes for a slot, best first.
///
/// Two separate passes: the hard filter gates, then the soft score ranks.
/// The sort is stable, so exact ties keep catalog order. An empty result
/// means "no swap available", which is a normal outcome, not an error.
pub fn find_swap(
    catalog: &[MealOption],
    slot: &str,
    profile: &UserProfile,
    financial: &FinancialConfig,
    schedule: &DailySchedule,
    context: &SwapContext,
) -> Vec<ScoredMeal> {
    let required_restaurant = resolve_required_restaurant(context);
    let envelope = BudgetEnvelope::compute(slot, schedule, financial);
    let current_meal_id = schedule.get(slot).map(|m| m.id.clone());

    let mut candidates: Vec<ScoredMeal> = catalog
        .iter()
        .filter(|meal| {
            passes_hard_filters(
                meal,
                slot,
                profile,
                &envelope,
                &context.selected_cuisines,
                current_meal_id.as_deref(),
                required_restaurant.as_deref(),
            )
        })
        .map(|meal| ScoredMeal {
            meal: meal.clone(),
            score: score_candidate(meal, &envelope, context.prefers_top_tier),
        })
        .collect();

    candidates.sort_by(|a, b| {
        b.score
            .partial_cmp(&a.score)
            .unwrap_or(std::cmp::Ordering::Equal)
    });
    candidates.truncate(MAX_RESULTS);
    candidates
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{DietaryFlags, Participant, Vendor};

    fn meal(id: &str, cuisine: &str, vendor: &str, price: f64, rating: f64) -> MealOption {
        MealOption {
            id: id.to_string(),
            name: id.to_string(),
            meal_times: vec!["lunch".to_string()],
            price,
            allergens: vec![],
            dietary: DietaryFlags::default(),
            cuisine: cuisine.to_string(),
            tags: vec![],
            vendor: Vendor {
                name: vendor.to_string(),
                rating,
            },
        }
    }

    fn financial() -> FinancialConfig {
        FinancialConfig {
            monthly_budget: 1500.0,
        }
    }

    #[test]
    fn test_empty_catalog_yields_empty_result() {
        let result = find_swap(
            &[],
            "lunch",
            &UserProfile::default(),
            &financial(),
            &DailySchedule::new(),
            &SwapContext::default(),
        );
        assert!(result.is_empty());
    }

    #[test]
    fn test_result_capped_at_five() {
        let catalog: Vec<MealOption> = (0..12)
            .map(|i| meal(&format!("m-{:02}", i), "Thai", "Vendor", 10.0, 4.2))
            .collect();

        let result = find_swap(
            &catalog,
            "lunch",
            &UserProfile::default(),
            &financial(),
            &DailySchedule::new(),
            &SwapContext::default(),
        );
        assert_eq!(result.len(), 5);
    }

    #[test]
    fn test_ties_keep_catalog_order() {
        let catalog: Vec<MealOption> = (0..8)
            .map(|i| meal(&format!("m-{:02}", i), "Thai", "Vendor", 10.0, 4.2))
            .collect();

        let result = find_swap(
            &catalog,
            "lunch",
            &UserProfile::default(),
            &financial(),
            &DailySchedule::new(),
            &SwapContext::default(),
        );
        let ids: Vec<&str> = result.iter().map(|s| s.meal.id.as_str()).collect();
        assert_eq!(ids, vec!["m-00", "m-01", "m-02", "m-03", "m-04"]);
    }

    #[test]
    fn test_current_occupant_never_returned() {
        let catalog = vec![
            meal("m-01", "Thai", "Vendor", 10.0, 4.2),
            meal("m-02", "Thai", "Vendor", 10.0, 4.2),
        ];
        let mut schedule = DailySchedule::new();
        schedule.assign("lunch", catalog[0].clone());

        let result = find_swap(
            &catalog,
            "lunch",
            &UserProfile::default(),
            &financial(),
            &schedule,
            &SwapContext::default(),
        );
        assert_eq!(result.len(), 1);
        assert_eq!(result[0].meal.id, "m-02");
    }

    #[test]
    fn test_allergen_never_survives_regardless_of_score() {
        let mut allergic_meal = meal("m-01", "Thai", "Five Star", 5.0, 5.0);
        allergic_meal.allergens.push("Peanut".to_string());
        allergic_meal.tags.push("Top Tier".to_string());
        let catalog = vec![allergic_meal, meal("m-02", "Thai", "Vendor", 12.0, 3.5)];

        let profile = UserProfile {
            allergies: vec!["peanut".to_string()],
            ..Default::default()
        };
        let result = find_swap(
            &catalog,
            "lunch",
            &profile,
            &financial(),
            &DailySchedule::new(),
            &SwapContext {
                prefers_top_tier: true,
                ..Default::default()
            },
        );
        assert_eq!(result.len(), 1);
        assert_eq!(result[0].meal.id, "m-02");
    }

    #[test]
    fn test_guest_role_overrides_required_restaurant() {
        let context = SwapContext {
            role: Some(ParticipantRole::Guest),
            required_restaurant: Some("Pita Palace".to_string()),
            participants: vec![
                Participant {
                    name: "Dana".to_string(),
                    role: ParticipantRole::Guest,
                    vendor: "Burger Barn".to_string(),
                },
                Participant {
                    name: "Riley".to_string(),
                    role: ParticipantRole::Host,
                    vendor: "Sushi Go".to_string(),
                },
            ],
            ..Default::default()
        };

        assert_eq!(
            resolve_required_restaurant(&context),
            Some("Sushi Go".to_string())
        );

        let catalog = vec![
            meal("m-01", "Mediterranean", "Pita Palace", 10.0, 4.5),
            meal("m-02", "Japanese", "Sushi Go", 12.0, 4.1),
        ];
        let result = find_swap(
            &catalog,
            "lunch",
            &UserProfile::default(),
            &financial(),
            &DailySchedule::new(),
            &context,
        );
        assert_eq!(result.len(), 1);
        assert_eq!(result[0].meal.vendor.name, "Sushi Go");
    }

    #[test]
    fn test_first_participant_is_host_fallback() {
        let context = SwapContext {
            role: Some(ParticipantRole::Guest),
            participants: vec![
                Participant {
                    name: "Dana".to_string(),
                    role: ParticipantRole::Guest,
                    vendor: "Burger Barn".to_string(),
                },
                Participant {
                    name: "Sam".to_string(),
                    role: ParticipantRole::Guest,
                    vendor: "Taco Truck".to_string(),
                },
            ],
            ..Default::default()
        };
        assert_eq!(
            resolve_required_restaurant(&context),
            Some("Burger Barn".to_string())
        );
    }

    #[test]
    fn test_host_role_keeps_caller_restriction() {
        let context = SwapContext {
            role: Some(ParticipantRole::Host),
            required_restaurant: Some("Pita Palace".to_string()),
            participants: vec![Participant {
                name: "Riley".to_string(),
                role: ParticipantRole::Host,
                vendor: "Sushi Go".to_string(),
            }],
            ..Default::default()
        };
        assert_eq!(
            resolve_required_restaurant(&context),
            Some("Pita Palace".to_string())
        );
    }

    #[test]
    fn test_variety_bonus_ranks_fresh_cuisine_higher() {
        let catalog = vec![
            meal("m-01", "Japanese", "Vendor", 10.0, 4.2),
            meal("m-02", "Thai", "Vendor", 10.0, 4.2),
        ];
        let mut schedule = DailySchedule::new();
        schedule.assign("dinner", meal("m-99", "Japanese", "Other", 10.0, 4.0));

        let result = find_swap(
            &catalog,
            "lunch",
            &UserProfile::default(),
            &financial(),
            &schedule,
            &SwapContext::default(),
        );
        assert_eq!(result.len(), 2);
        assert_eq!(result[0].meal.id, "m-02");
        assert!((result[0].score - result[1].score - 8.0).abs() < 1e-9);
    }

    #[test]
    fn test_catalog_entries_not_mutated() {
        let catalog = vec![meal("m-01", "Thai", "Vendor", 10.0, 4.2)];
        let before = catalog[0].clone();
        let _ = find_swap(
            &catalog,
            "lunch",
            &UserProfile::default(),
            &financial(),
            &DailySchedule::new(),
            &SwapContext::default(),
        );
        assert_eq!(catalog[0].price, before.price);
        assert_eq!(catalog[0].tags, before.tags);
    }
}

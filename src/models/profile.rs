use std::collections::{HashMap, HashSet};

use serde::{Deserialize, Serialize};

use crate::models::MealOption;

/// How meals are steered nutritionally. `HealthSync` requires a connected
/// health account and falls back to `Balanced` without one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum NutritionalStrategy {
    Balanced,
    HighProtein,
    PlantForward,
    HealthSync,
}

/// Dietary and preference snapshot for the active user.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UserProfile {
    #[serde(rename = "Allergies", default)]
    pub allergies: Vec<String>,

    /// Diet labels such as "Vegan" or "Gluten-Free".
    #[serde(rename = "Diet", default)]
    pub diet: Vec<String>,

    #[serde(rename = "NutritionalStrategy", default)]
    pub nutritional_strategy: Option<NutritionalStrategy>,

    #[serde(rename = "HealthConnected", default)]
    pub health_connected: bool,
}

impl UserProfile {
    /// The strategy actually in effect. `HealthSync` is gated on a connected
    /// health account.
    pub fn effective_strategy(&self) -> NutritionalStrategy {
        match self.nutritional_strategy {
            Some(NutritionalStrategy::HealthSync) if !self.health_connected => {
                NutritionalStrategy::Balanced
            }
            Some(strategy) => strategy,
            None => NutritionalStrategy::Balanced,
        }
    }

    /// Whether the user holds a diet label (case-insensitive).
    pub fn holds_diet(&self, label: &str) -> bool {
        self.diet.iter().any(|d| d.eq_ignore_ascii_case(label))
    }
}

/// Monthly spending configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FinancialConfig {
    #[serde(rename = "MonthlyBudget")]
    pub monthly_budget: f64,
}

impl FinancialConfig {
    /// Post-tax daily spending target, on a flat 30-day month.
    pub fn target_daily(&self) -> f64 {
        self.monthly_budget / 30.0
    }
}

/// Named meal slots for one day, each either assigned or empty.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DailySchedule {
    #[serde(rename = "Slots", default)]
    slots: HashMap<String, MealOption>,
}

impl DailySchedule {
    pub fn new() -> Self {
        Self::default()
    }

    /// The meal currently assigned to a slot, if any. Slot names compare
    /// case-insensitively so externally authored state files work too.
    pub fn get(&self, slot: &str) -> Option<&MealOption> {
        self.slots
            .iter()
            .find(|(name, _)| name.eq_ignore_ascii_case(slot))
            .map(|(_, meal)| meal)
    }

    pub fn assign(&mut self, slot: &str, meal: MealOption) {
        self.clear(slot);
        self.slots.insert(slot.to_lowercase(), meal);
    }

    pub fn clear(&mut self, slot: &str) {
        self.slots.retain(|name, _| !name.eq_ignore_ascii_case(slot));
    }

    /// Meals assigned to every slot other than `slot`.
    pub fn other_meals(&self, slot: &str) -> Vec<&MealOption> {
        self.slots
            .iter()
            .filter(|(name, _)| !name.eq_ignore_ascii_case(slot))
            .map(|(_, meal)| meal)
            .collect()
    }

    /// Combined pre-tax cost of all non-target slots.
    pub fn other_cost(&self, slot: &str) -> f64 {
        self.other_meals(slot).iter().map(|m| m.price).sum()
    }

    /// Lowercased cuisines already present in non-target slots.
    pub fn used_cuisines(&self, slot: &str) -> HashSet<String> {
        self.other_meals(slot)
            .iter()
            .map(|m| m.cuisine.to_lowercase())
            .collect()
    }

    /// Slot names in sorted order (stable for prompts and rendering).
    pub fn slot_names(&self) -> Vec<String> {
        let mut names: Vec<String> = self.slots.keys().cloned().collect();
        names.sort();
        names
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }
}

/// Role of a participant in a shared group order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ParticipantRole {
    Host,
    Guest,
}

/// One member of a shared order, with the vendor their meal comes from.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Participant {
    #[serde(rename = "Name")]
    pub name: String,

    #[serde(rename = "Role")]
    pub role: ParticipantRole,

    #[serde(rename = "Vendor")]
    pub vendor: String,
}

/// Everything a single swap request carries besides the catalog, profile,
/// budget, and schedule.
#[derive(Debug, Clone, Default)]
pub struct SwapContext {
    /// Role of the meal being replaced, for shared orders.
    pub role: Option<ParticipantRole>,

    /// Selected cuisine ids (empty = no cuisine preference).
    pub selected_cuisines: Vec<String>,

    /// Whether top-tier restaurants should be boosted.
    pub prefers_top_tier: bool,

    /// Caller-supplied vendor restriction. Overridden for guest swaps.
    pub required_restaurant: Option<String>,

    /// Shared-order participants, host first by convention but not required.
    pub participants: Vec<Participant>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{DietaryFlags, Vendor};

    fn meal(id: &str, cuisine: &str, price: f64) -> MealOption {
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
                name: "Vendor".to_string(),
                rating: 4.0,
            },
        }
    }

    #[test]
    fn test_health_sync_gated_on_connection() {
        let mut profile = UserProfile {
            nutritional_strategy: Some(NutritionalStrategy::HealthSync),
            health_connected: false,
            ..Default::default()
        };
        assert_eq!(profile.effective_strategy(), NutritionalStrategy::Balanced);

        profile.health_connected = true;
        assert_eq!(
            profile.effective_strategy(),
            NutritionalStrategy::HealthSync
        );
    }

    #[test]
    fn test_effective_strategy_defaults_to_balanced() {
        let profile = UserProfile::default();
        assert_eq!(profile.effective_strategy(), NutritionalStrategy::Balanced);
    }

    #[test]
    fn test_target_daily() {
        let config = FinancialConfig {
            monthly_budget: 900.0,
        };
        assert!((config.target_daily() - 30.0).abs() < 1e-9);
    }

    #[test]
    fn test_schedule_other_slots() {
        let mut schedule = DailySchedule::new();
        schedule.assign("breakfast", meal("m1", "American", 8.0));
        schedule.assign("lunch", meal("m2", "Japanese", 12.0));
        schedule.assign("dinner", meal("m3", "Japanese", 15.0));

        assert!((schedule.other_cost("lunch") - 23.0).abs() < 1e-9);

        let used = schedule.used_cuisines("lunch");
        assert!(used.contains("american"));
        assert!(used.contains("japanese"));
        assert_eq!(used.len(), 2);

        // Target slot's own cuisine is excluded
        let used_dinner = schedule.used_cuisines("dinner");
        assert!(used_dinner.contains("japanese")); // still present via lunch
        schedule.clear("lunch");
        let used_dinner = schedule.used_cuisines("dinner");
        assert!(!used_dinner.contains("japanese"));
    }

    #[test]
    fn test_schedule_case_insensitive_slots() {
        let mut schedule = DailySchedule::new();
        schedule.assign("Lunch", meal("m1", "Thai", 10.0));
        assert!(schedule.get("lunch").is_some());
        assert!(schedule.get("LUNCH").is_some());
    }

    #[test]
    fn test_empty_slot_contributes_nothing() {
        let schedule = DailySchedule::new();
        assert_eq!(schedule.other_cost("lunch"), 0.0);
        assert!(schedule.used_cuisines("lunch").is_empty());
    }
}

use std::collections::HashSet;

use crate::models::{DailySchedule, FinancialConfig};
use crate::swap::constants::{QUALITY_OVERFLOW, TAX_RATE};

/// Budget state for one swap request, derived from the schedule's other
/// slots and the monthly budget.
#[derive(Debug, Clone)]
pub struct BudgetEnvelope {
    /// Lowercased cuisines already scheduled in non-target slots.
    pub used_cuisines: HashSet<String>,

    /// Combined pre-tax cost of the other scheduled meals.
    pub other_meals_cost: f64,

    /// Pre-tax ceiling for the whole day.
    pub max_day_budget_pre_tax: f64,

    /// What is left for the target slot. May be negative.
    pub remaining_for_slot: f64,

    /// Hard price cap: remaining budget plus the quality overflow allowance.
    pub absolute_max_price: f64,
}

impl BudgetEnvelope {
    /// Derive the envelope for a target slot.
    ///
    /// The daily target is post-tax; candidate prices are pre-tax, so the
    /// ceiling divides the tax back out before subtracting other meals.
    pub fn compute(slot: &str, schedule: &DailySchedule, financial: &FinancialConfig) -> Self {
        let used_cuisines = schedule.used_cuisines(slot);
        let other_meals_cost = schedule.other_cost(slot);

        let max_day_budget_pre_tax = financial.target_daily() / (1.0 + TAX_RATE);
        let remaining_for_slot = max_day_budget_pre_tax - other_meals_cost;
        let absolute_max_price = remaining_for_slot + QUALITY_OVERFLOW;

        Self {
            used_cuisines,
            other_meals_cost,
            max_day_budget_pre_tax,
            remaining_for_slot,
            absolute_max_price,
        }
    }

    /// Whether a cuisine label is already scheduled elsewhere today.
    pub fn cuisine_in_use(&self, cuisine: &str) -> bool {
        self.used_cuisines.contains(&cuisine.to_lowercase())
    }
}

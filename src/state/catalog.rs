use crate::models::MealOption;

/// The loaded meal catalog.
///
/// Keeps catalog order stable: the recommender's tie-break and the
/// density simulator's slot index both depend on iteration order.
/// Duplicate ids are deduplicated with the last occurrence winning,
/// in the first occurrence's position.
pub struct MealCatalog {
    meals: Vec<MealOption>,
}

impl MealCatalog {
    pub fn new(meals: Vec<MealOption>) -> Self {
        let mut deduped: Vec<MealOption> = Vec::with_capacity(meals.len());
        for meal in meals {
            match deduped.iter_mut().find(|m| m.key() == meal.key()) {
                Some(existing) => *existing = meal,
                None => deduped.push(meal),
            }
        }
        Self { meals: deduped }
    }

    /// Get a meal by id (case-insensitive).
    pub fn get(&self, id: &str) -> Option<&MealOption> {
        let key = id.to_lowercase();
        self.meals.iter().find(|m| m.key() == key)
    }

    /// Position of a meal among the options serving a slot, with the
    /// total count. Feeds the density simulator's rank policy.
    pub fn slot_rank(&self, id: &str, slot: &str) -> Option<(usize, usize)> {
        let serving = self.serving(slot);
        let index = serving.iter().position(|m| m.key() == id.to_lowercase())?;
        Some((index, serving.len()))
    }

    /// All meals in catalog order.
    pub fn all(&self) -> &[MealOption] {
        &self.meals
    }

    /// Meals valid for a slot, in catalog order.
    pub fn serving(&self, slot: &str) -> Vec<&MealOption> {
        self.meals.iter().filter(|m| m.serves(slot)).collect()
    }

    pub fn len(&self) -> usize {
        self.meals.len()
    }

    pub fn is_empty(&self) -> bool {
        self.meals.is_empty()
    }
}

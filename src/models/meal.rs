use serde::{Deserialize, Serialize};

/// Vendor rating at or above this counts as top tier even without the tag.
pub const TOP_TIER_RATING: f64 = 4.8;

/// The restaurant serving a meal.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Vendor {
    #[serde(rename = "Name")]
    pub name: String,

    /// Average rating on a 0-5 scale.
    #[serde(rename = "Rating")]
    pub rating: f64,
}

/// Dietary compliance flags for a meal.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DietaryFlags {
    #[serde(rename = "Vegan", default)]
    pub vegan: bool,

    #[serde(rename = "Vegetarian", default)]
    pub vegetarian: bool,

    #[serde(rename = "Halal", default)]
    pub halal: bool,

    #[serde(rename = "GlutenFree", default)]
    pub gluten_free: bool,
}

/// A catalog meal with pricing, dietary, and vendor data.
///
/// Read-only once loaded; the recommender annotates copies, never the
/// catalog entry itself.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MealOption {
    #[serde(rename = "Id")]
    pub id: String,

    #[serde(rename = "Name")]
    pub name: String,

    /// Slot tags the meal is valid for (e.g. "breakfast", "lunch", "dinner").
    #[serde(rename = "MealTimes", default)]
    pub meal_times: Vec<String>,

    /// Pre-tax price, non-negative.
    #[serde(rename = "Price")]
    pub price: f64,

    #[serde(rename = "Allergens", default)]
    pub allergens: Vec<String>,

    #[serde(rename = "Dietary", default)]
    pub dietary: DietaryFlags,

    #[serde(rename = "Cuisine")]
    pub cuisine: String,

    /// Free-form labels; may overlap cuisine names.
    #[serde(rename = "Tags", default)]
    pub tags: Vec<String>,

    #[serde(rename = "Vendor")]
    pub vendor: Vendor,
}

impl MealOption {
    /// Whether the meal is valid for a slot's meal-time tag (case-insensitive).
    pub fn serves(&self, slot: &str) -> bool {
        self.meal_times
            .iter()
            .any(|t| t.eq_ignore_ascii_case(slot))
    }

    /// Whether the meal contains an allergen tag (case-insensitive).
    pub fn has_allergen(&self, allergen: &str) -> bool {
        self.allergens
            .iter()
            .any(|a| a.eq_ignore_ascii_case(allergen))
    }

    /// Whether the meal's cuisine or any tag matches a cuisine label.
    pub fn matches_cuisine(&self, label: &str) -> bool {
        self.cuisine.eq_ignore_ascii_case(label)
            || self.tags.iter().any(|t| t.eq_ignore_ascii_case(label))
    }

    /// Top tier: tagged "Top Tier" or vendor rating at/above the cutoff.
    pub fn is_top_tier(&self) -> bool {
        self.tags.iter().any(|t| t.eq_ignore_ascii_case("Top Tier"))
            || self.vendor.rating >= TOP_TIER_RATING
    }

    /// Basic validation: non-negative price and an in-range vendor rating.
    pub fn is_valid(&self) -> bool {
        self.price >= 0.0 && (0.0..=5.0).contains(&self.vendor.rating)
    }

    /// Canonical key for lookups (lowercase id).
    pub fn key(&self) -> String {
        self.id.to_lowercase()
    }
}

impl PartialEq for MealOption {
    fn eq(&self, other: &Self) -> bool {
        self.id.to_lowercase() == other.id.to_lowercase()
    }
}

impl Eq for MealOption {}

impl std::hash::Hash for MealOption {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.id.to_lowercase().hash(state);
    }
}

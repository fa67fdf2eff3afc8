use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::models::{
    DailySchedule, DietaryFlags, FinancialConfig, MealOption, UserProfile, Vendor,
};
use crate::state::MealCatalog;

/// User profile, budget, and schedule bundled in one state file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppState {
    #[serde(rename = "Profile", default)]
    pub profile: UserProfile,

    #[serde(rename = "Financial")]
    pub financial: FinancialConfig,

    #[serde(rename = "Schedule", default)]
    pub schedule: DailySchedule,
}

/// Load a meal catalog from a JSON file.
pub fn load_catalog<P: AsRef<Path>>(path: P) -> Result<MealCatalog> {
    let content = fs::read_to_string(path)?;
    let meals: Vec<MealOption> = serde_json::from_str(&content)?;
    Ok(MealCatalog::new(meals))
}

/// Save a meal catalog to a JSON file.
pub fn save_catalog<P: AsRef<Path>>(path: P, catalog: &MealCatalog) -> Result<()> {
    let json = serde_json::to_string_pretty(catalog.all())?;
    fs::write(path, json)?;
    Ok(())
}

/// Flattened catalog row for spreadsheet import. Set-valued columns are
/// semicolon-joined.
#[derive(Debug, Deserialize)]
struct CsvMealRow {
    #[serde(rename = "Id")]
    id: String,
    #[serde(rename = "Name")]
    name: String,
    #[serde(rename = "MealTimes")]
    meal_times: String,
    #[serde(rename = "Price")]
    price: f64,
    #[serde(rename = "Allergens", default)]
    allergens: String,
    #[serde(rename = "Vegan", default)]
    vegan: bool,
    #[serde(rename = "Vegetarian", default)]
    vegetarian: bool,
    #[serde(rename = "Halal", default)]
    halal: bool,
    #[serde(rename = "GlutenFree", default)]
    gluten_free: bool,
    #[serde(rename = "Cuisine")]
    cuisine: String,
    #[serde(rename = "Tags", default)]
    tags: String,
    #[serde(rename = "VendorName")]
    vendor_name: String,
    #[serde(rename = "VendorRating")]
    vendor_rating: f64,
}

fn split_set(joined: &str) -> Vec<String> {
    joined
        .split(';')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}

impl From<CsvMealRow> for MealOption {
    fn from(row: CsvMealRow) -> Self {
        MealOption {
            id: row.id,
            name: row.name,
            meal_times: split_set(&row.meal_times),
            price: row.price,
            allergens: split_set(&row.allergens),
            dietary: DietaryFlags {
                vegan: row.vegan,
                vegetarian: row.vegetarian,
                halal: row.halal,
                gluten_free: row.gluten_free,
            },
            cuisine: row.cuisine,
            tags: split_set(&row.tags),
            vendor: Vendor {
                name: row.vendor_name,
                rating: row.vendor_rating,
            },
        }
    }
}

/// Load a meal catalog from a CSV export.
pub fn load_catalog_csv<P: AsRef<Path>>(path: P) -> Result<MealCatalog> {
    let mut reader = csv::Reader::from_path(path)?;
    let mut meals = Vec::new();
    for row in reader.deserialize::<CsvMealRow>() {
        meals.push(MealOption::from(row?));
    }
    Ok(MealCatalog::new(meals))
}

/// Load the bundled profile/budget/schedule state.
pub fn load_state<P: AsRef<Path>>(path: P) -> Result<AppState> {
    let content = fs::read_to_string(path)?;
    Ok(serde_json::from_str(&content)?)
}

/// Save the bundled profile/budget/schedule state.
pub fn save_state<P: AsRef<Path>>(path: P, state: &AppState) -> Result<()> {
    let json = serde_json::to_string_pretty(state)?;
    fs::write(path, json)?;
    Ok(())
}

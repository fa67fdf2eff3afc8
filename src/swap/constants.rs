use std::collections::HashMap;
use std::sync::LazyLock;

/// Sales tax applied on top of pre-tax meal prices.
pub const TAX_RATE: f64 = 0.08875;

/// Fixed allowance above the remaining slot budget before a candidate is
/// rejected outright rather than penalized.
pub const QUALITY_OVERFLOW: f64 = 5.0;

/// Every surviving candidate starts here.
pub const BASE_SCORE: f64 = 10.0;

/// Bonus when the user prefers top-tier restaurants and the candidate is one.
pub const TOP_TIER_BONUS: f64 = 5.0;

/// Bonus when the candidate's cuisine is not already scheduled today.
/// Intentionally the dominant weight, to bias against repetition.
pub const VARIETY_BONUS: f64 = 8.0;

/// Penalty per currency unit of overage past the remaining slot budget.
pub const OVER_BUDGET_PENALTY_RATE: f64 = 2.0;

/// Vendor rating pivot: ratings above add to the score, below subtract.
pub const RATING_PIVOT: f64 = 4.0;

/// Score points per rating point away from the pivot.
pub const RATING_WEIGHT: f64 = 5.0;

/// Maximum number of swap candidates returned.
pub const MAX_RESULTS: usize = 5;

/// Diet labels that map onto candidate dietary flags.
pub const DIET_VEGAN: &str = "Vegan";
pub const DIET_VEGETARIAN: &str = "Vegetarian";
pub const DIET_HALAL: &str = "Halal";
pub const DIET_GLUTEN_FREE: &str = "Gluten-Free";

/// Map from UI cuisine id to the label meals carry.
pub static CUISINE_LABELS: LazyLock<HashMap<&'static str, &'static str>> = LazyLock::new(|| {
    let mut m = HashMap::new();
    m.insert("italian", "Italian");
    m.insert("japanese", "Japanese");
    m.insert("mexican", "Mexican");
    m.insert("indian", "Indian");
    m.insert("chinese", "Chinese");
    m.insert("thai", "Thai");
    m.insert("american", "American");
    m.insert("mediterranean", "Mediterranean");
    m
});

/// Resolve a cuisine id to its label. Unknown ids pass through verbatim so
/// a stale selection degrades to matching nothing instead of failing.
pub fn cuisine_label(id: &str) -> &str {
    CUISINE_LABELS
        .get(id.to_lowercase().as_str())
        .copied()
        .unwrap_or(id)
}

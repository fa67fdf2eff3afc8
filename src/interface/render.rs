use crate::models::MealOption;
use crate::pricing::DensityReport;
use crate::swap::ScoredMeal;

/// Width of the name column, in characters rather than bytes so
/// multi-byte names stay aligned (format padding counts chars).
fn name_column_width(candidates: &[ScoredMeal]) -> usize {
    candidates
        .iter()
        .map(|c| c.meal.name.chars().count())
        .max()
        .unwrap_or(10)
}

/// Display ranked swap candidates with their delivery annotations.
///
/// `reports` pairs positionally with `candidates`; the annotation is
/// presentation-only and never influenced the ranking.
pub fn display_candidates(slot: &str, candidates: &[ScoredMeal], reports: &[DensityReport]) {
    if candidates.is_empty() {
        println!("No swap available for {} (nothing passed the filters).", slot);
        return;
    }

    println!();
    println!("=== Swap candidates for {} ===", slot);
    println!();

    let max_name_len = name_column_width(candidates);

    for (i, candidate) in candidates.iter().enumerate() {
        let meal = &candidate.meal;
        println!(
            "{:>3}. {:<width$} - ${:>6.2} | {} @ {} ({:.1}*) | score {:.2}",
            i + 1,
            meal.name,
            meal.price,
            meal.cuisine,
            meal.vendor.name,
            meal.vendor.rating,
            candidate.score,
            width = max_name_len
        );

        if let Some(report) = reports.get(i) {
            println!(
                "     {} | delivery ${:.2} | {}",
                report.density_label, report.delivery_fee, report.description
            );
        }
    }

    println!();
}

/// Display a single option's density/pricing report.
pub fn display_density(meal_name: &str, report: &DensityReport) {
    println!();
    println!("=== Delivery pricing: {} ===", meal_name);
    println!();
    println!("Tier: {:?} ({})", report.tier, report.density_label);
    println!("Neighbors: {}", report.neighbor_count);
    println!("Delivery fee: ${:.2}", report.delivery_fee);
    if report.is_anomaly {
        println!("Anomaly: too few nearby orders to batch.");
    }
    println!("{}", report.description);
    println!();
}

/// Display a simple list of meals with their details.
pub fn display_meal_list(meals: &[&MealOption], title: &str) {
    if meals.is_empty() {
        println!("{}: (none)", title);
        return;
    }

    println!();
    println!("=== {} ({} items) ===", title, meals.len());
    println!();

    for meal in meals {
        println!(
            "  {} [{}] - ${:.2}, {} @ {} ({:.1}*), serves: {}",
            meal.name,
            meal.id,
            meal.price,
            meal.cuisine,
            meal.vendor.name,
            meal.vendor.rating,
            meal.meal_times.join("/")
        );
    }

    println!();
}

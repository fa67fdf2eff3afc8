use dialoguer::{Confirm, Input, MultiSelect, Select};
use strsim::jaro_winkler;

use crate::error::{Result, SwapError};
use crate::swap::constants::{cuisine_label, CUISINE_LABELS};

/// Slots offered when the schedule has none assigned yet.
const DEFAULT_SLOTS: [&str; 3] = ["breakfast", "lunch", "dinner"];

/// Prompt for the slot to swap.
pub fn prompt_slot(scheduled_slots: &[String]) -> Result<String> {
    let options: Vec<String> = if scheduled_slots.is_empty() {
        DEFAULT_SLOTS.iter().map(|s| s.to_string()).collect()
    } else {
        scheduled_slots.to_vec()
    };

    let selection = Select::new()
        .with_prompt("Which slot do you want to swap?")
        .items(&options)
        .default(0)
        .interact()?;

    Ok(options[selection].clone())
}

/// Prompt for cuisine preferences. Empty selection means no preference.
pub fn prompt_cuisines() -> Result<Vec<String>> {
    let mut ids: Vec<&str> = CUISINE_LABELS.keys().copied().collect();
    ids.sort();

    let labels: Vec<&str> = ids.iter().map(|id| cuisine_label(id)).collect();

    let picked = MultiSelect::new()
        .with_prompt("Cuisine preferences (space to toggle, Enter to confirm)")
        .items(&labels)
        .interact()?;

    Ok(picked.into_iter().map(|i| ids[i].to_string()).collect())
}

/// Prompt for the top-tier restaurant preference.
pub fn prompt_top_tier() -> Result<bool> {
    Ok(Confirm::new()
        .with_prompt("Prefer top-tier restaurants?")
        .default(false)
        .interact()?)
}

/// Prompt for extra guests joining the order.
pub fn prompt_guests() -> Result<u32> {
    let input: String = Input::new()
        .with_prompt("How many guests are joining this order?")
        .default("0".to_string())
        .interact_text()?;

    input
        .parse()
        .map_err(|_| SwapError::InvalidInput("Invalid number".to_string()))
}

/// Minimum jaro_winkler similarity for a fuzzy vendor match.
const FUZZY_MATCH_THRESHOLD: f64 = 0.7;

/// Maximum fuzzy candidates offered for disambiguation.
const MAX_VENDOR_MATCHES: usize = 5;

/// Outcome of matching free-text input against the known vendor names.
#[derive(Debug, PartialEq)]
pub enum VendorMatch<'a> {
    /// Case-insensitive exact hit; no confirmation needed.
    Exact(&'a str),
    /// Fuzzy candidates above the threshold, best first, capped at five.
    /// Empty means nothing matched.
    Fuzzy(Vec<&'a str>),
}

/// Match input against vendor names: exact hit short-circuits, otherwise
/// rank by similarity.
pub fn match_vendor<'a>(input: &str, vendors: &'a [String]) -> VendorMatch<'a> {
    if let Some(vendor) = vendors.iter().find(|v| v.eq_ignore_ascii_case(input)) {
        return VendorMatch::Exact(vendor.as_str());
    }

    let mut candidates: Vec<(&String, f64)> = vendors
        .iter()
        .map(|v| (v, jaro_winkler(&v.to_lowercase(), &input.to_lowercase())))
        .filter(|(_, score)| *score > FUZZY_MATCH_THRESHOLD)
        .collect();

    candidates.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(std::cmp::Ordering::Equal));

    VendorMatch::Fuzzy(
        candidates
            .into_iter()
            .take(MAX_VENDOR_MATCHES)
            .map(|(v, _)| v.as_str())
            .collect(),
    )
}

/// Prompt for an optional required restaurant with fuzzy matching against
/// the known vendor names. Empty input means no restriction.
pub fn prompt_restaurant(vendors: &[String]) -> Result<Option<String>> {
    let input: String = Input::new()
        .with_prompt("Restrict to a restaurant? (Enter to skip)")
        .allow_empty(true)
        .interact_text()?;

    let input = input.trim();
    if input.is_empty() {
        return Ok(None);
    }

    let candidates = match match_vendor(input, vendors) {
        VendorMatch::Exact(vendor) => return Ok(Some(vendor.to_string())),
        VendorMatch::Fuzzy(candidates) => candidates,
    };

    if candidates.is_empty() {
        println!("No matching restaurant found for '{}'", input);
        return Ok(None);
    }

    if candidates.len() == 1 {
        let vendor = candidates[0];
        let confirm = Confirm::new()
            .with_prompt(format!("Did you mean '{}'?", vendor))
            .default(true)
            .interact()?;

        return Ok(confirm.then(|| vendor.to_string()));
    }

    // Multiple matches - let user select
    let mut selection_options: Vec<String> = candidates.iter().map(|v| v.to_string()).collect();
    selection_options.push("None of these".to_string());

    let selection = Select::new()
        .with_prompt("Which did you mean?")
        .items(&selection_options)
        .default(0)
        .interact()?;

    if selection < candidates.len() {
        Ok(Some(candidates[selection].to_string()))
    } else {
        Ok(None)
    }
}

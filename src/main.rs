use clap::Parser;
use std::path::Path;

use meal_swap_rs::cli::{Cli, Command};
use meal_swap_rs::error::{Result, SwapError};
use meal_swap_rs::interface::{
    display_candidates, display_density, display_meal_list, prompt_cuisines, prompt_guests,
    prompt_restaurant, prompt_slot, prompt_top_tier,
};
use meal_swap_rs::models::SwapContext;
use meal_swap_rs::pricing::simulate;
use meal_swap_rs::state::{load_catalog, load_catalog_csv, load_state, MealCatalog};
use meal_swap_rs::swap::find_swap;

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    let command = cli.command.unwrap_or_default();

    match command {
        Command::Swap { day } => cmd_swap(&cli.catalog, &cli.state, &day),
        Command::Price {
            meal_id,
            slot,
            day,
            guests,
        } => cmd_price(&cli.catalog, &meal_id, &slot, &day, guests),
        Command::Catalog => cmd_catalog(&cli.catalog),
    }
}

/// Load the catalog, dispatching on file extension.
fn open_catalog(path: &str) -> Result<Option<MealCatalog>> {
    if !Path::new(path).exists() {
        eprintln!("Catalog file not found: {}", path);
        return Ok(None);
    }

    let catalog = if path.to_lowercase().ends_with(".csv") {
        load_catalog_csv(path)?
    } else {
        load_catalog(path)?
    };
    Ok(Some(catalog))
}

/// Recommend swaps for a slot interactively.
fn cmd_swap(catalog_path: &str, state_path: &str, day: &str) -> Result<()> {
    let Some(catalog) = open_catalog(catalog_path)? else {
        return Ok(());
    };

    if !Path::new(state_path).exists() {
        eprintln!("State file not found: {}", state_path);
        eprintln!("Please ensure swap_state.json exists in the current directory.");
        return Ok(());
    }
    let state = load_state(state_path)?;

    println!("Loaded {} meals", catalog.len());
    if catalog.is_empty() {
        println!("Catalog is empty; nothing to recommend.");
        return Ok(());
    }
    println!();

    // Collect the swap request
    let slot = prompt_slot(&state.schedule.slot_names())?;
    let selected_cuisines = prompt_cuisines()?;
    let prefers_top_tier = prompt_top_tier()?;

    let mut vendors: Vec<String> = catalog
        .all()
        .iter()
        .map(|m| m.vendor.name.clone())
        .collect();
    vendors.sort();
    vendors.dedup();
    let required_restaurant = prompt_restaurant(&vendors)?;
    let guests = prompt_guests()?;

    let context = SwapContext {
        selected_cuisines,
        prefers_top_tier,
        required_restaurant,
        ..Default::default()
    };

    let candidates = find_swap(
        catalog.all(),
        &slot,
        &state.profile,
        &state.financial,
        &state.schedule,
        &context,
    );

    // Annotate each displayed option independently; the annotation never
    // feeds the ranking.
    let total = candidates.len();
    let reports: Vec<_> = candidates
        .iter()
        .enumerate()
        .map(|(i, c)| simulate(&c.meal.id, &c.meal.vendor.name, day, i, total, guests))
        .collect();

    display_candidates(&slot, &candidates, &reports);
    Ok(())
}

/// Show the delivery-density pricing report for one meal.
fn cmd_price(catalog_path: &str, meal_id: &str, slot: &str, day: &str, guests: u32) -> Result<()> {
    let Some(catalog) = open_catalog(catalog_path)? else {
        return Ok(());
    };

    let meal = catalog
        .get(meal_id)
        .ok_or_else(|| SwapError::MealNotFound(meal_id.to_string()))?;

    let (slot_index, total_options) = catalog.slot_rank(meal_id, slot).unwrap_or((0, 1));
    let report = simulate(
        &meal.id,
        &meal.vendor.name,
        day,
        slot_index,
        total_options,
        guests,
    );

    display_density(&meal.name, &report);
    Ok(())
}

/// List the loaded catalog.
fn cmd_catalog(catalog_path: &str) -> Result<()> {
    let Some(catalog) = open_catalog(catalog_path)? else {
        return Ok(());
    };

    let meals: Vec<_> = catalog.all().iter().collect();
    display_meal_list(&meals, "Meal catalog");
    Ok(())
}

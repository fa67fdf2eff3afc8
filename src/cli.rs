use clap::{Parser, Subcommand};

/// MealSwap: constraint-safe meal swaps and group-delivery pricing for a daily schedule.
#[derive(Parser, Debug)]
#[command(name = "meal_swap")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Path to the meal catalog file (.json or .csv).
    #[arg(short, long, default_value = "meals.json")]
    pub catalog: String,

    /// Path to the profile/budget/schedule state JSON file.
    #[arg(short, long, default_value = "swap_state.json")]
    pub state: String,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Recommend swaps for a schedule slot interactively.
    Swap {
        /// Day used for the delivery-density annotation.
        #[arg(long, default_value = "Monday")]
        day: String,
    },

    /// Show the delivery-density pricing report for one meal.
    Price {
        /// Catalog id of the meal.
        meal_id: String,

        /// Slot whose sibling options define the meal's display rank.
        #[arg(long, default_value = "lunch")]
        slot: String,

        #[arg(long, default_value = "Monday")]
        day: String,

        /// Extra guests joining the order.
        #[arg(long, default_value_t = 0)]
        guests: u32,
    },

    /// List the loaded meal catalog.
    Catalog,
}

impl Default for Command {
    fn default() -> Self {
        Command::Swap {
            day: "Monday".to_string(),
        }
    }
}

pub mod budget;
pub mod constants;
pub mod filters;
pub mod recommend;
pub mod scoring;

pub use budget::BudgetEnvelope;
pub use constants::*;
pub use filters::passes_hard_filters;
pub use recommend::{find_swap, resolve_required_restaurant, ScoredMeal};
pub use scoring::score_candidate;

pub mod cli;
pub mod error;
pub mod interface;
pub mod models;
pub mod pricing;
pub mod state;
pub mod swap;

pub use error::{Result, SwapError};
pub use models::{MealOption, SwapContext, UserProfile};
pub use pricing::{simulate, DensityReport, PricingTier};
pub use swap::{find_swap, ScoredMeal};

pub mod prompts;
pub mod render;

pub use prompts::{
    match_vendor, prompt_cuisines, prompt_guests, prompt_restaurant, prompt_slot,
    prompt_top_tier, VendorMatch,
};
pub use render::{display_candidates, display_density, display_meal_list};

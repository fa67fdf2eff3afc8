pub mod meal;
pub mod profile;

pub use meal::{DietaryFlags, MealOption, Vendor, TOP_TIER_RATING};
pub use profile::{
    DailySchedule, FinancialConfig, NutritionalStrategy, Participant, ParticipantRole,
    SwapContext, UserProfile,
};

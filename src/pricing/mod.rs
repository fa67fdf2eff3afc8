pub mod density;
pub mod stream;

pub use density::{simulate, DensityReport, PricingTier};
pub use stream::{density_stream, hash_key, seed_key};

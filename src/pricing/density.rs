use rand::Rng;

use crate::pricing::stream::density_stream;

/// Neighbor count at or above which group delivery is free.
pub const GREEN_THRESHOLD: u32 = 10;

/// Neighbor count at or above which the reduced fee applies.
pub const YELLOW_THRESHOLD: u32 = 4;

/// Delivery fee per tier.
pub const GREEN_FEE: f64 = 0.0;
pub const YELLOW_FEE: f64 = 1.99;
pub const RED_FEE: f64 = 7.99;

/// Baseline neighbor range for the first two displayed options.
pub const LEAD_RANGE: (u32, u32) = (10, 45);

/// Baseline neighbor range for the last two displayed options.
pub const TAIL_RANGE: (u32, u32) = (0, 3);

/// Baseline neighbor range for everything in between.
pub const MID_RANGE: (u32, u32) = (4, 9);

/// Density/pricing classification for a batched delivery.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PricingTier {
    Green,
    Yellow,
    Red,
}

impl PricingTier {
    /// Classify a final neighbor count (guests included).
    pub fn from_count(count: u32) -> Self {
        if count >= GREEN_THRESHOLD {
            PricingTier::Green
        } else if count >= YELLOW_THRESHOLD {
            PricingTier::Yellow
        } else {
            PricingTier::Red
        }
    }

    pub fn delivery_fee(&self) -> f64 {
        match self {
            PricingTier::Green => GREEN_FEE,
            PricingTier::Yellow => YELLOW_FEE,
            PricingTier::Red => RED_FEE,
        }
    }

    /// Red is the anomaly tier: too few neighbors to batch.
    pub fn is_anomaly(&self) -> bool {
        matches!(self, PricingTier::Red)
    }

    pub fn label(&self) -> &'static str {
        match self {
            PricingTier::Green => "High Density",
            PricingTier::Yellow => "Medium Density",
            PricingTier::Red => "Low Density (Anomaly)",
        }
    }

    /// Human-readable report of the live count and the unlock condition
    /// for the next tier up.
    pub fn describe(&self, count: u32) -> String {
        match self {
            PricingTier::Green => format!(
                "{} neighbors ordering nearby. Free group delivery unlocked.",
                count
            ),
            PricingTier::Yellow => format!(
                "{} neighbors ordering nearby. {} more unlock free delivery.",
                count,
                GREEN_THRESHOLD.saturating_sub(count)
            ),
            PricingTier::Red => format!(
                "Only {} neighbors ordering nearby. {} more drop the fee to ${:.2}.",
                count,
                YELLOW_THRESHOLD.saturating_sub(count),
                YELLOW_FEE
            ),
        }
    }
}

/// Annotation attached to one displayed option.
#[derive(Debug, Clone, PartialEq)]
pub struct DensityReport {
    pub tier: PricingTier,
    pub delivery_fee: f64,
    pub neighbor_count: u32,
    pub is_anomaly: bool,
    pub density_label: &'static str,
    pub description: String,
}

/// Baseline neighbor count before guests, by option rank.
///
/// The tail guard is kept literal (`slot_index >= total_options - 2 &&
/// slot_index >= 2`): with very small catalogs the first-two rule claims
/// every index, which is the intended behavior.
fn baseline_count(rng: &mut impl Rng, slot_index: usize, total_options: usize) -> u32 {
    let (lo, hi) = if slot_index < 2 {
        LEAD_RANGE
    } else if slot_index >= total_options.saturating_sub(2) && slot_index >= 2 {
        TAIL_RANGE
    } else {
        MID_RANGE
    };
    rng.gen_range(lo..=hi)
}

/// Simulate the neighborhood order density for one displayed option.
///
/// Pure with respect to its inputs: the same five identifying values
/// always yield the same baseline, and `extra_guests` only ever adds to
/// it. Guests therefore never degrade the tier.
pub fn simulate(
    meal_id: &str,
    vendor_name: &str,
    day: &str,
    slot_index: usize,
    total_options: usize,
    extra_guests: u32,
) -> DensityReport {
    let mut rng = density_stream(meal_id, vendor_name, day, slot_index);
    let baseline = baseline_count(&mut rng, slot_index, total_options);
    let count = baseline.saturating_add(extra_guests);

    let tier = PricingTier::from_count(count);
    DensityReport {
        tier,
        delivery_fee: tier.delivery_fee(),
        neighbor_count: count,
        is_anomaly: tier.is_anomaly(),
        density_label: tier.label(),
        description: tier.describe(count),
    }
}

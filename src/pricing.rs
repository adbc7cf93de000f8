use serde::{Deserialize, Serialize};

/// One rung of the discount ladder: orders at or above `min_order_total`
/// get `rate` off the delivery fee.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FeeTier {
    pub min_order_total: f64,
    pub rate: f64,
}

/// Delivery fee policy: fixed base fee, per-kilometer surcharge past a free
/// threshold, order-total discounts, and a clamp on the final fee.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FeePolicy {
    pub base_fee: f64,
    pub distance_threshold_km: f64,
    pub distance_rate_per_km: f64,
    pub min_fee: f64,
    pub max_fee: f64,
    /// Evaluated top-down; keep ordered highest threshold first.
    pub discount_tiers: Vec<FeeTier>,
}

impl Default for FeePolicy {
    fn default() -> Self {
        Self {
            base_fee: 1.99,
            distance_threshold_km: 1.0,
            distance_rate_per_km: 0.5,
            min_fee: 1.99,
            max_fee: 7.99,
            discount_tiers: vec![
                FeeTier { min_order_total: 50.0, rate: 0.20 },
                FeeTier { min_order_total: 30.0, rate: 0.10 },
            ],
        }
    }
}

/// Breakdown of a delivery fee, ready for the order summary.
///
/// `formula` describes the pre-clamp components (base, distance, discount);
/// `fee` is the clamped amount the customer actually pays.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FeeBreakdown {
    pub fee: f64,
    pub base_fee: f64,
    pub distance_fee: f64,
    pub discount: f64,
    pub formula: String,
}

/// Round to cents, half away from zero.
fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

impl FeePolicy {
    /// Calculate the delivery fee for an order.
    ///
    /// Never fails: non-finite inputs produce a fixed default breakdown and
    /// a warning instead of an error, so downstream totals stay numeric.
    pub fn calculate(&self, distance_km: f64, order_total: f64) -> FeeBreakdown {
        if !distance_km.is_finite() || !order_total.is_finite() {
            tracing::warn!(
                distance_km,
                order_total,
                "non-numeric fee input, falling back to default fee"
            );
            return FeeBreakdown {
                fee: 2.99,
                base_fee: 1.99,
                distance_fee: 1.00,
                discount: 0.0,
                formula: "Default fee (calculation failed)".to_string(),
            };
        }

        let base_fee = round2(self.base_fee);
        let raw_distance_fee =
            ((distance_km - self.distance_threshold_km) * self.distance_rate_per_km).max(0.0);
        let distance_fee = round2(raw_distance_fee);
        let mut total_fee = base_fee + distance_fee;

        // The tier is selected on the order subtotal, not on the fee.
        let discount_rate = self
            .discount_tiers
            .iter()
            .find(|tier| order_total >= tier.min_order_total)
            .map(|tier| tier.rate)
            .unwrap_or(0.0);
        let discount = round2(total_fee * discount_rate);

        total_fee -= discount;
        total_fee = total_fee.max(self.min_fee);
        total_fee = total_fee.min(self.max_fee);

        FeeBreakdown {
            fee: round2(total_fee),
            base_fee,
            distance_fee,
            discount,
            formula: format!(
                "${:.2} base + ${:.2} distance - ${:.2} discount",
                base_fee, distance_fee, discount
            ),
        }
    }
}

/// Calculate a delivery fee under the default policy.
pub fn calculate_fee(distance_km: f64, order_total: f64) -> FeeBreakdown {
    FeePolicy::default().calculate(distance_km, order_total)
}

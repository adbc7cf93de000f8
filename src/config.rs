use std::env;

use crate::pricing::{FeePolicy, FeeTier};

#[derive(Clone)]
pub struct Config {
    pub base_fee: f64,
    pub distance_threshold_km: f64,
    pub distance_rate_per_km: f64,
    pub min_fee: f64,
    pub max_fee: f64,
    pub delivery_radius_km: f64,
}

impl Config {
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        Self {
            base_fee: env::var("DELIVERY_BASE_FEE")
                .unwrap_or_else(|_| "1.99".to_string())
                .parse()
                .expect("DELIVERY_BASE_FEE must be a number"),
            distance_threshold_km: env::var("DELIVERY_DISTANCE_THRESHOLD_KM")
                .unwrap_or_else(|_| "1".to_string())
                .parse()
                .expect("DELIVERY_DISTANCE_THRESHOLD_KM must be a number"),
            distance_rate_per_km: env::var("DELIVERY_DISTANCE_RATE")
                .unwrap_or_else(|_| "0.5".to_string())
                .parse()
                .expect("DELIVERY_DISTANCE_RATE must be a number"),
            min_fee: env::var("DELIVERY_MIN_FEE")
                .unwrap_or_else(|_| "1.99".to_string())
                .parse()
                .expect("DELIVERY_MIN_FEE must be a number"),
            max_fee: env::var("DELIVERY_MAX_FEE")
                .unwrap_or_else(|_| "7.99".to_string())
                .parse()
                .expect("DELIVERY_MAX_FEE must be a number"),
            delivery_radius_km: env::var("DELIVERY_RADIUS_KM")
                .unwrap_or_else(|_| "15".to_string())
                .parse()
                .expect("DELIVERY_RADIUS_KM must be a number"),
        }
    }

    /// The fee policy under this configuration. The discount ladder is not
    /// environment-tunable; it keeps the stock rungs.
    pub fn fee_policy(&self) -> FeePolicy {
        FeePolicy {
            base_fee: self.base_fee,
            distance_threshold_km: self.distance_threshold_km,
            distance_rate_per_km: self.distance_rate_per_km,
            min_fee: self.min_fee,
            max_fee: self.max_fee,
            discount_tiers: vec![
                FeeTier { min_order_total: 50.0, rate: 0.20 },
                FeeTier { min_order_total: 30.0, rate: 0.10 },
            ],
        }
    }
}

use serde::{Deserialize, Serialize};

use crate::cart::Cart;
use crate::pricing::{FeeBreakdown, FeePolicy};
use crate::utils::geo::{estimate_distance, is_within_radius, Coordinate};

/// Everything the order summary needs to render a delivery estimate.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DeliveryQuote {
    pub distance_km: f64,
    pub subtotal: f64,
    pub deliverable: bool,
    pub breakdown: FeeBreakdown,
}

/// Build a delivery quote for a cart: distance estimate, radius check, and
/// fee breakdown over the cart subtotal.
///
/// Inherits the fail-soft behavior of the distance estimator and the fee
/// calculator: degenerate coordinates quote a zero-distance fee rather
/// than failing the checkout.
pub fn quote_delivery(
    policy: &FeePolicy,
    restaurant: Option<&Coordinate>,
    delivery_address: Option<&Coordinate>,
    max_radius_km: f64,
    cart: &Cart,
) -> DeliveryQuote {
    let distance_km = estimate_distance(restaurant, delivery_address);
    let subtotal = cart.subtotal();
    let deliverable = match (restaurant, delivery_address) {
        (Some(r), Some(a)) => is_within_radius(a, r, max_radius_km),
        _ => false,
    };

    DeliveryQuote {
        distance_km,
        subtotal,
        deliverable,
        breakdown: policy.calculate(distance_km, subtotal),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cart::CartItem;

    fn cart_with_subtotal(subtotal: f64) -> Cart {
        let mut cart = Cart::new();
        cart.add(CartItem {
            item_id: "combo".to_string(),
            name: "Combo".to_string(),
            unit_price: subtotal,
            quantity: 1,
        });
        cart
    }

    #[test]
    fn test_quote_composes_distance_and_fee() {
        // Roughly 5.2 km apart, well inside a 15 km radius.
        let restaurant = Coordinate::new(51.5074, -0.1278);
        let address = Coordinate::new(51.5407, -0.1430);
        let cart = cart_with_subtotal(60.0);

        let quote = quote_delivery(
            &FeePolicy::default(),
            Some(&restaurant),
            Some(&address),
            15.0,
            &cart,
        );

        assert!(quote.distance_km > 3.0 && quote.distance_km < 6.0);
        assert!(quote.deliverable);
        assert_eq!(quote.subtotal, 60.0);
        // Order over 50 gets the 20% rung.
        assert!(quote.breakdown.discount > 0.0);
        assert!((1.99..=7.99).contains(&quote.breakdown.fee));
    }

    #[test]
    fn test_missing_address_quotes_zero_distance() {
        let restaurant = Coordinate::new(51.5074, -0.1278);
        let cart = cart_with_subtotal(10.0);

        let quote = quote_delivery(&FeePolicy::default(), Some(&restaurant), None, 15.0, &cart);

        assert_eq!(quote.distance_km, 0.0);
        assert!(!quote.deliverable);
        // Zero distance means base fee only, clamped to the floor.
        assert_eq!(quote.breakdown.fee, 1.99);
    }

    #[test]
    fn test_out_of_range_address_still_quotes_a_fee() {
        let restaurant = Coordinate::new(51.5074, -0.1278);
        let address = Coordinate::new(48.8566, 2.3522); // Paris
        let cart = cart_with_subtotal(20.0);

        let quote = quote_delivery(
            &FeePolicy::default(),
            Some(&restaurant),
            Some(&address),
            15.0,
            &cart,
        );

        assert!(!quote.deliverable);
        assert_eq!(quote.breakdown.fee, 7.99);
    }

    #[test]
    fn test_subtotal_selects_discount_tier() {
        let restaurant = Coordinate::new(51.5074, -0.1278);
        let address = Coordinate::new(51.5407, -0.1430);

        let small = quote_delivery(
            &FeePolicy::default(),
            Some(&restaurant),
            Some(&address),
            15.0,
            &cart_with_subtotal(10.0),
        );
        let large = quote_delivery(
            &FeePolicy::default(),
            Some(&restaurant),
            Some(&address),
            15.0,
            &cart_with_subtotal(80.0),
        );

        assert_eq!(small.breakdown.discount, 0.0);
        assert!(large.breakdown.discount > 0.0);
        assert!(large.breakdown.fee < small.breakdown.fee);
    }
}

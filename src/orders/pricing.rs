use rust_decimal::Decimal;

use crate::{pizzas::repo::Pizza, restaurant_pizzas::repo::RestaurantPizza};

/// Price a pizza resolves to at a restaurant, with its availability.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResolvedPrice {
    pub price: Decimal,
    pub available: bool,
}

/// Resolves the effective price of a pizza at a restaurant.
///
/// A listing overrides the catalog: its price and availability flag are
/// taken verbatim. An unlisted pizza falls back to the base price and is
/// treated as available.
pub fn resolve_effective_price(pizza: &Pizza, listing: Option<&RestaurantPizza>) -> ResolvedPrice {
    match listing {
        Some(listing) => ResolvedPrice {
            price: listing.price,
            available: listing.is_available,
        },
        None => ResolvedPrice {
            price: pizza.base_price,
            available: true,
        },
    }
}

/// Exact decimal line subtotal. Quantity is validated upstream (>= 1).
pub fn line_subtotal(price_per_item: Decimal, quantity: i32) -> Decimal {
    price_per_item * Decimal::from(quantity)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;
    use time::macros::datetime;
    use uuid::Uuid;

    fn pizza(base_price: Decimal) -> Pizza {
        Pizza {
            id: Uuid::new_v4(),
            name: "Margherita".into(),
            description: None,
            image_url: None,
            base_price,
            category: "classic".into(),
            created_at: datetime!(2024-01-15 12:00 UTC),
            updated_at: datetime!(2024-01-15 12:00 UTC),
        }
    }

    fn listing(pizza_id: Uuid, price: Decimal, is_available: bool) -> RestaurantPizza {
        RestaurantPizza {
            id: Uuid::new_v4(),
            restaurant_id: Uuid::new_v4(),
            pizza_id,
            price,
            is_available,
            created_at: datetime!(2024-01-15 12:00 UTC),
            updated_at: datetime!(2024-01-15 12:00 UTC),
        }
    }

    #[test]
    fn unlisted_pizza_falls_back_to_base_price_and_is_available() {
        let p = pizza(dec!(10.00));
        let resolved = resolve_effective_price(&p, None);
        assert_eq!(resolved.price, dec!(10.00));
        assert!(resolved.available);
    }

    #[test]
    fn listing_price_overrides_base_price() {
        let p = pizza(dec!(10.00));
        let l = listing(p.id, dec!(8.50), true);
        let resolved = resolve_effective_price(&p, Some(&l));
        assert_eq!(resolved.price, dec!(8.50));
        assert!(resolved.available);
    }

    #[test]
    fn listing_unavailability_is_taken_verbatim() {
        let p = pizza(dec!(10.00));
        let l = listing(p.id, dec!(8.50), false);
        let resolved = resolve_effective_price(&p, Some(&l));
        assert_eq!(resolved.price, dec!(8.50));
        assert!(!resolved.available);
    }

    #[test]
    fn line_subtotal_is_exact_decimal_arithmetic() {
        assert_eq!(line_subtotal(dec!(12.00), 2), dec!(24.00));
        assert_eq!(line_subtotal(dec!(9.99), 3), dec!(29.97));
        // A classic binary-float trap: 0.1 * 3 stays exact in decimal
        assert_eq!(line_subtotal(dec!(0.10), 3), dec!(0.30));
    }

    #[test]
    fn totals_accumulate_without_drift() {
        let mut total = Decimal::ZERO;
        for _ in 0..100 {
            total += line_subtotal(dec!(0.01), 1);
        }
        assert_eq!(total, dec!(1.00));
    }
}

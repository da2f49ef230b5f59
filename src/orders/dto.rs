use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::{order_items::repo::OrderItem, orders::repo::Order};

pub const ORDER_STATUSES: &[&str] = &[
    "pending",
    "confirmed",
    "preparing",
    "ready",
    "delivered",
    "cancelled",
];

pub const PAYMENT_STATUSES: &[&str] = &["unpaid", "paid"];

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateOrderItemRequest {
    pub pizza_id: Uuid,
    pub quantity: i32,
    pub special_instructions: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateOrderRequest {
    pub user_id: Uuid,
    pub restaurant_id: Uuid,
    pub delivery_address: String,
    #[serde(default = "default_payment_method")]
    pub payment_method: String,
    pub notes: Option<String>,
    pub items: Vec<CreateOrderItemRequest>,
}

fn default_payment_method() -> String {
    "cash".into()
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateOrderRequest {
    pub status: Option<String>,
    pub payment_status: Option<String>,
    pub delivery_address: Option<String>,
    pub notes: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderFilter {
    pub user_id: Option<Uuid>,
    pub restaurant_id: Option<Uuid>,
    pub status: Option<String>,
}

/// Order together with its line items, as returned on creation and on
/// single-order reads.
#[derive(Debug, Serialize)]
pub struct OrderWithItems {
    #[serde(flatten)]
    pub order: Order,
    pub items: Vec<OrderItem>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn create_order_defaults_payment_method_to_cash() {
        let req: CreateOrderRequest = serde_json::from_str(
            r#"{
                "userId": "0f8f1c38-94f5-4f2e-9d21-1d2e39d4b9ae",
                "restaurantId": "6e0a2f7e-4a4c-4b43-b96c-9a07f9f807cc",
                "deliveryAddress": "1 Via Roma",
                "items": [{"pizzaId": "b0c9d7de-1021-4a3a-8f3f-40f0a59d7b1f", "quantity": 2}]
            }"#,
        )
        .unwrap();
        assert_eq!(req.payment_method, "cash");
        assert_eq!(req.items.len(), 1);
        assert_eq!(req.items[0].quantity, 2);
        assert!(req.items[0].special_instructions.is_none());
    }

    #[test]
    fn status_sets_match_the_order_lifecycle() {
        assert!(ORDER_STATUSES.contains(&"pending"));
        assert!(ORDER_STATUSES.contains(&"cancelled"));
        assert!(!ORDER_STATUSES.contains(&"refunded"));
        assert!(PAYMENT_STATUSES.contains(&"unpaid"));
        assert!(!PAYMENT_STATUSES.contains(&"refunded"));
    }
}

use rust_decimal::Decimal;
use serde::Deserialize;
use uuid::Uuid;

/// The server's uniform response envelope.
#[derive(Debug, Deserialize)]
pub struct Envelope<T> {
    pub success: bool,
    pub message: Option<String>,
    pub data: Option<T>,
    pub error: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: Uuid,
    pub username: String,
    pub email: String,
    pub role: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginResponse {
    pub token: String,
    pub user: User,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Pizza {
    pub id: Uuid,
    pub name: String,
    pub description: Option<String>,
    pub base_price: Decimal,
    pub category: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Restaurant {
    pub id: Uuid,
    pub name: String,
    pub address: String,
    pub owner_id: Uuid,
    pub rating: Decimal,
    pub is_active: bool,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RestaurantPizza {
    pub id: Uuid,
    pub restaurant_id: Uuid,
    pub pizza_id: Uuid,
    pub price: Decimal,
    pub is_available: bool,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    pub id: Uuid,
    pub user_id: Uuid,
    pub restaurant_id: Uuid,
    pub status: String,
    pub total_amount: Decimal,
    pub delivery_address: String,
    pub payment_method: String,
    pub payment_status: String,
    pub notes: Option<String>,
    pub created_at: String,
    #[serde(default)]
    pub items: Vec<OrderItem>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderItem {
    pub id: Uuid,
    pub pizza_id: Uuid,
    pub quantity: i32,
    pub price_per_item: Decimal,
    pub subtotal: Decimal,
    pub special_instructions: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn order_envelope_round_trips_from_server_json() {
        let json = r#"{
            "success": true,
            "message": "Order created successfully",
            "data": {
                "id": "0f8f1c38-94f5-4f2e-9d21-1d2e39d4b9ae",
                "userId": "6e0a2f7e-4a4c-4b43-b96c-9a07f9f807cc",
                "restaurantId": "b0c9d7de-1021-4a3a-8f3f-40f0a59d7b1f",
                "status": "pending",
                "totalAmount": "24.00",
                "deliveryAddress": "1 Via Roma",
                "paymentMethod": "cash",
                "paymentStatus": "unpaid",
                "notes": null,
                "createdAt": "2024-01-15T12:00:00Z",
                "updatedAt": "2024-01-15T12:00:00Z",
                "items": [{
                    "id": "7d9fd5d2-93a4-4a6f-9a4e-0a9a25c1ce3d",
                    "orderId": "0f8f1c38-94f5-4f2e-9d21-1d2e39d4b9ae",
                    "pizzaId": "f3f0a648-12f6-4e4d-8fd8-2b7ad383c7c8",
                    "quantity": 2,
                    "pricePerItem": "12.00",
                    "subtotal": "24.00",
                    "specialInstructions": null,
                    "createdAt": "2024-01-15T12:00:00Z"
                }]
            }
        }"#;
        let envelope: Envelope<Order> = serde_json::from_str(json).unwrap();
        assert!(envelope.success);
        let order = envelope.data.unwrap();
        assert_eq!(order.items.len(), 1);
        assert_eq!(order.total_amount, order.items[0].subtotal);
    }

    #[test]
    fn menu_listing_decodes_from_server_json() {
        let json = r#"{
            "id": "7d9fd5d2-93a4-4a6f-9a4e-0a9a25c1ce3d",
            "restaurantId": "6e0a2f7e-4a4c-4b43-b96c-9a07f9f807cc",
            "pizzaId": "b0c9d7de-1021-4a3a-8f3f-40f0a59d7b1f",
            "price": "8.50",
            "isAvailable": false,
            "createdAt": "2024-01-15T12:00:00Z",
            "updatedAt": "2024-01-15T12:00:00Z"
        }"#;
        let listing: RestaurantPizza = serde_json::from_str(json).unwrap();
        assert_eq!(listing.price.to_string(), "8.50");
        assert!(!listing.is_available);
    }
}

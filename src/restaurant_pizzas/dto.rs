use rust_decimal::Decimal;
use serde::Deserialize;
use uuid::Uuid;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateRestaurantPizzaRequest {
    pub restaurant_id: Uuid,
    pub pizza_id: Uuid,
    pub price: Decimal,
    #[serde(default = "default_available")]
    pub is_available: bool,
}

fn default_available() -> bool {
    true
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateRestaurantPizzaRequest {
    pub price: Option<Decimal>,
    pub is_available: Option<bool>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RestaurantPizzaFilter {
    pub restaurant_id: Option<Uuid>,
    pub pizza_id: Option<Uuid>,
}

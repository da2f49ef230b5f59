use rust_decimal::Decimal;
use serde::Deserialize;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreatePizzaRequest {
    pub name: String,
    pub description: Option<String>,
    pub image_url: Option<String>,
    pub base_price: Decimal,
    #[serde(default = "default_category")]
    pub category: String,
}

fn default_category() -> String {
    "classic".into()
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdatePizzaRequest {
    pub name: Option<String>,
    pub description: Option<String>,
    pub image_url: Option<String>,
    pub base_price: Option<Decimal>,
    pub category: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct PizzaFilter {
    pub category: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn create_request_parses_decimal_price_exactly() {
        let req: CreatePizzaRequest = serde_json::from_str(
            r#"{"name":"Margherita","basePrice":"10.99"}"#,
        )
        .unwrap();
        assert_eq!(req.base_price, dec!(10.99));
        assert_eq!(req.category, "classic");
    }

    #[test]
    fn create_request_accepts_numeric_price() {
        let req: CreatePizzaRequest =
            serde_json::from_str(r#"{"name":"Diavola","basePrice":12.5,"category":"specialty"}"#)
                .unwrap();
        assert_eq!(req.base_price, dec!(12.5));
    }
}

use bigdecimal::BigDecimal;
use serde::{Deserialize, Serialize};

use business::domain::errors::ServiceError;
use business::domain::product::model::Product;
use business::domain::product::value_objects::ProductCode;

/// Wire representation of a product in the catalogue API.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductDto {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    pub code: String,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default, with = "decimal")]
    pub price: BigDecimal,
    #[serde(default)]
    pub stock_count: u32,
    #[serde(default)]
    pub ordered_count: u32,
}

impl From<&Product> for ProductDto {
    fn from(product: &Product) -> Self {
        Self {
            id: product.id,
            code: product.code.to_string(),
            name: product.name.clone(),
            description: product.description.clone(),
            price: product.price.clone(),
            stock_count: product.stock_count,
            ordered_count: product.ordered_count,
        }
    }
}

impl TryFrom<ProductDto> for Product {
    type Error = ServiceError;

    fn try_from(dto: ProductDto) -> Result<Self, Self::Error> {
        let code = ProductCode::new(dto.code)
            .map_err(|_| ServiceError::invalid_response("product without code"))?;

        Ok(Product::from_remote(
            dto.id,
            code,
            dto.name,
            dto.description,
            dto.price,
            dto.stock_count,
            dto.ordered_count,
        ))
    }
}

/// Prices are written as decimal strings so no digits are lost, and read from
/// either strings or JSON numbers.
mod decimal {
    use std::str::FromStr;

    use bigdecimal::BigDecimal;
    use serde::{Deserialize, Deserializer, Serializer, de::Error};

    #[derive(Deserialize)]
    #[serde(untagged)]
    enum RawDecimal {
        Text(String),
        Number(serde_json::Number),
    }

    pub fn serialize<S: Serializer>(value: &BigDecimal, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&value.to_string())
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<BigDecimal, D::Error> {
        let text = match RawDecimal::deserialize(deserializer)? {
            RawDecimal::Text(text) => text,
            RawDecimal::Number(number) => number.to_string(),
        };
        BigDecimal::from_str(text.trim()).map_err(D::Error::custom)
    }
}

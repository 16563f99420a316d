use bigdecimal::BigDecimal;
use num_traits::Zero;

use super::value_objects::ProductCode;

#[derive(Debug, Clone, PartialEq)]
pub struct Product {
    pub id: Option<i64>,
    pub code: ProductCode,
    pub name: String,
    pub description: Option<String>,
    pub price: BigDecimal,
    pub stock_count: u32,
    pub ordered_count: u32,
}

impl Product {
    /// Placeholder record offered when a scanned code has no match.
    pub fn draft(code: ProductCode) -> Self {
        Self {
            id: None,
            name: placeholder_name(&code),
            code,
            description: None,
            price: BigDecimal::zero(),
            stock_count: 0,
            ordered_count: 0,
        }
    }

    /// Constructor for data already persisted by the remote service (no validation).
    #[allow(clippy::too_many_arguments)]
    pub fn from_remote(
        id: Option<i64>,
        code: ProductCode,
        name: String,
        description: Option<String>,
        price: BigDecimal,
        stock_count: u32,
        ordered_count: u32,
    ) -> Self {
        Self {
            id,
            code,
            name,
            description,
            price,
            stock_count,
            ordered_count,
        }
    }

    pub fn is_persisted(&self) -> bool {
        self.id.is_some()
    }
}

fn placeholder_name(code: &ProductCode) -> String {
    format!("Product {}", code)
}

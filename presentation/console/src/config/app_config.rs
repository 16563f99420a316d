use super::product_api_config::ProductApiConfig;

pub struct AppConfig {
    pub product_api: ProductApiConfig,
}

impl AppConfig {
    pub fn from_env() -> Self {
        Self {
            product_api: ProductApiConfig::from_env(),
        }
    }
}

pub mod app_config;
pub mod product_api_config;

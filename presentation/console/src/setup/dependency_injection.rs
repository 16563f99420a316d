use std::sync::Arc;

use business::application::product::create::CreateProductUseCaseImpl;
use business::application::product::lookup::LookupProductByCodeUseCaseImpl;
use business::domain::logger::Logger;
use business::domain::product::use_cases::create::CreateProductUseCase;
use business::domain::product::use_cases::lookup::LookupProductByCodeUseCase;
use business::domain::scan::services::Scanner;
use logger::TracingLogger;
use rest_client::client::ProductApiClient;
use rest_client::product_service::ProductServiceRest;

use crate::config::app_config::AppConfig;
use crate::ui::input::ConsoleInput;
use crate::ui::scanner::PromptScanner;

pub struct DependencyContainer {
    pub input: ConsoleInput,
    pub scanner: Arc<dyn Scanner>,
    pub lookup_use_case: Arc<dyn LookupProductByCodeUseCase>,
    pub create_use_case: Arc<dyn CreateProductUseCase>,
    pub logger: Arc<dyn Logger>,
}

impl DependencyContainer {
    pub fn new(config: &AppConfig) -> anyhow::Result<Self> {
        let logger: Arc<dyn Logger> = Arc::new(TracingLogger::new("workflow"));

        // Infrastructure adapters
        let api_client = ProductApiClient::new(
            &config.product_api.base_url,
            config.product_api.timeout(),
        )?;
        let product_service = Arc::new(ProductServiceRest::new(api_client));

        let input = ConsoleInput::stdin();
        let scanner = Arc::new(PromptScanner::new(input.clone()));

        // Product use cases
        let lookup_use_case = Arc::new(LookupProductByCodeUseCaseImpl {
            service: product_service.clone(),
            logger: logger.clone(),
        });
        let create_use_case = Arc::new(CreateProductUseCaseImpl {
            service: product_service,
            logger: logger.clone(),
        });

        Ok(Self {
            input,
            scanner,
            lookup_use_case,
            create_use_case,
            logger,
        })
    }
}

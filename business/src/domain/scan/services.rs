use async_trait::async_trait;

use super::model::ScanResult;

/// Service port for the scanning collaborator (camera, keyboard wedge, prompt).
#[async_trait]
pub trait Scanner: Send + Sync {
    async fn request_scan(&self) -> ScanResult;
}

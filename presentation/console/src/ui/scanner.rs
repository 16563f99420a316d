use async_trait::async_trait;

use business::domain::scan::model::ScanResult;
use business::domain::scan::services::Scanner;

use super::input::ConsoleInput;

/// Reads the decoded payload from the terminal, as a keyboard-wedge scanner would type it.
/// An empty line or end of input cancels the scan.
pub struct PromptScanner {
    input: ConsoleInput,
}

impl PromptScanner {
    pub fn new(input: ConsoleInput) -> Self {
        Self { input }
    }
}

#[async_trait]
impl Scanner for PromptScanner {
    async fn request_scan(&self) -> ScanResult {
        match self.input.read_line("scan (empty to cancel)> ").await {
            Ok(payload) => ScanResult::from_payload(payload),
            Err(e) => {
                tracing::warn!(error = %e, "Could not read scanned code");
                ScanResult::Cancelled
            }
        }
    }
}

/// Outcome of one request to the scanning collaborator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScanResult {
    Code(String),
    Cancelled,
}

impl ScanResult {
    /// Normalises the raw scanner output: an empty payload counts as a cancellation.
    pub fn from_payload(payload: Option<String>) -> Self {
        match payload {
            Some(text) if !text.is_empty() => ScanResult::Code(text),
            _ => ScanResult::Cancelled,
        }
    }

    pub fn is_cancelled(&self) -> bool {
        matches!(self, ScanResult::Cancelled)
    }
}

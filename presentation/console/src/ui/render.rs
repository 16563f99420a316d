use business::domain::workflow::state::{WorkflowPhase, WorkflowState};

/// Projects the workflow state into the text shown to the user.
pub fn render(state: &WorkflowState) -> String {
    let code = state
        .scanned_code()
        .map(|c| c.as_str())
        .unwrap_or_default();

    match state.phase() {
        WorkflowPhase::Idle => "Ready. Type `scan` to scan a QR code.".to_string(),
        WorkflowPhase::Resolving => format!("Looking up {}...", code),
        WorkflowPhase::Found => match state.product() {
            Some(product) => {
                let mut lines = vec![format!(
                    "{} (code {}, id {})",
                    product.name,
                    product.code,
                    product
                        .id
                        .map(|id| id.to_string())
                        .unwrap_or_else(|| "-".to_string())
                )];
                if let Some(description) = &product.description {
                    lines.push(format!("  {}", description));
                }
                lines.push(format!("  price:    {}", product.price));
                lines.push(format!("  in stock: {}", product.stock_count));
                lines.push(format!("  ordered:  {}", product.ordered_count));
                lines.join("\n")
            }
            None => format!("Found {}", code),
        },
        WorkflowPhase::NotFound => format!(
            "No product registered for {}. Type `create` to add it.",
            code
        ),
        WorkflowPhase::Creating => format!("Creating product for {}...", code),
        WorkflowPhase::Error => format!(
            "Error: {}\nType `retry` to try again, `scan` to rescan or `reset`.",
            state.last_error().unwrap_or("unknown error")
        ),
    }
}

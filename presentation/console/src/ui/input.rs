use std::sync::Arc;

use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader, Lines, Stdin};
use tokio::sync::Mutex;

/// Standard input shared by the command prompt and the prompt scanner.
#[derive(Clone)]
pub struct ConsoleInput {
    lines: Arc<Mutex<Lines<BufReader<Stdin>>>>,
}

impl ConsoleInput {
    pub fn stdin() -> Self {
        Self {
            lines: Arc::new(Mutex::new(BufReader::new(tokio::io::stdin()).lines())),
        }
    }

    /// Prints `prompt` and waits for one line. `None` at end of input.
    pub async fn read_line(&self, prompt: &str) -> std::io::Result<Option<String>> {
        let mut lines = self.lines.lock().await;
        let mut stdout = tokio::io::stdout();
        stdout.write_all(prompt.as_bytes()).await?;
        stdout.flush().await?;
        lines.next_line().await
    }
}

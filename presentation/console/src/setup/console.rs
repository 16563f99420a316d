use business::application::workflow::session::WorkflowSession;
use business::domain::workflow::errors::SessionError;

use crate::setup::dependency_injection::DependencyContainer;
use crate::ui::commands::{Command, CommandError, HELP};
use crate::ui::render::render;

pub struct Console;

impl Console {
    /// Runs one workflow session for the lifetime of the console "screen".
    pub async fn run(container: DependencyContainer) -> anyhow::Result<()> {
        let session = WorkflowSession::start(
            container.lookup_use_case.clone(),
            container.create_use_case.clone(),
            container.logger.clone(),
        );

        let mut states = session.subscribe();
        println!("{}", render(&states.borrow_and_update()));
        let display = tokio::spawn(async move {
            while states.changed().await.is_ok() {
                let text = render(&states.borrow_and_update());
                println!("{}", text);
            }
        });

        println!("{}", HELP);
        let outcome = Self::command_loop(&container, &session).await;

        session.dispose().await;
        let _ = display.await;
        outcome
    }

    async fn command_loop(
        container: &DependencyContainer,
        session: &WorkflowSession,
    ) -> anyhow::Result<()> {
        while let Some(line) = container.input.read_line("> ").await? {
            let command = match line.parse::<Command>() {
                Ok(command) => command,
                Err(CommandError::Empty) => continue,
                Err(e) => {
                    println!("{}", e);
                    continue;
                }
            };

            match command {
                Command::Scan(Some(code)) => session.scan_completed(code).await?,
                Command::Scan(None) => {
                    let result = container.scanner.request_scan().await;
                    if result.is_cancelled() {
                        println!("Scan cancelled.");
                    }
                    session.apply_scan(result).await?
                }
                Command::Create => {
                    if !Self::request_create(session).await? {
                        println!("Nothing to create: scan a missing code first.");
                    }
                }
                Command::Retry => session.retry().await?,
                Command::Reset => session.reset().await?,
                Command::Help => println!("{}", HELP),
                Command::Quit => break,
            }
        }
        Ok(())
    }

    /// Sends a create request only while the workflow offers one.
    async fn request_create(session: &WorkflowSession) -> Result<bool, SessionError> {
        if !session.state().show_create_option() {
            return Ok(false);
        }
        session.request_create().await?;
        Ok(true)
    }
}

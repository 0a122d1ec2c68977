use std::io;
use std::sync::Arc;

use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use tokio::sync::mpsc;

use super::app::DashboardApp;
use super::event::{Event, EventHandler};
use crate::cli_context::CliContext;
use crate::client::ApiClient;
use crate::constants::TICK_RATE_MS;
use crate::error::{OctofitError, OctofitResult};
use crate::models::Resource;
use crate::view::{spawn_fetch, FetchOutcome};

type DashboardTerminal = Terminal<CrosstermBackend<io::Stdout>>;

fn terminal_error(e: io::Error) -> OctofitError {
    OctofitError::TerminalError(e.to_string())
}

/// Run `setup`; if it fails, run `rollback` before returning the error.
fn or_rollback<T>(
    setup: impl FnOnce() -> io::Result<T>,
    rollback: impl FnOnce() -> io::Result<()>,
) -> io::Result<T> {
    setup().map_err(|e| {
        if let Err(rollback_err) = rollback() {
            tracing::error!(error = %rollback_err, "failed to undo terminal setup");
        }
        e
    })
}

fn setup_terminal() -> OctofitResult<DashboardTerminal> {
    enable_raw_mode().map_err(terminal_error)?;
    or_rollback(
        || {
            let mut stdout = io::stdout();
            execute!(stdout, EnterAlternateScreen)?;
            Terminal::new(CrosstermBackend::new(stdout))
        },
        disable_raw_mode,
    )
    .map_err(terminal_error)
}

fn restore_terminal() -> io::Result<()> {
    disable_raw_mode()?;
    execute!(io::stdout(), LeaveAlternateScreen, crossterm::cursor::Show)
}

/// Leave the alternate screen before the default hook prints the panic.
fn install_terminal_panic_hook() {
    let previous = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        let _ = restore_terminal();
        previous(info);
    }));
}

pub async fn run_dashboard(context: &mut CliContext, initial: Resource) -> OctofitResult<()> {
    tracing::info!(base_url = context.base_url(), tab = %initial, "starting dashboard");

    let client = context.client()?;
    install_terminal_panic_hook();
    let mut terminal = setup_terminal()?;

    let result = event_loop(&mut terminal, client, DashboardApp::new(context.base_url(), initial)).await;

    restore_terminal().map_err(terminal_error)?;
    terminal.show_cursor().map_err(terminal_error)?;
    tracing::info!("dashboard closed");

    result
}

async fn event_loop(
    terminal: &mut DashboardTerminal,
    client: Arc<ApiClient>,
    mut app: DashboardApp,
) -> OctofitResult<()> {
    let (tx, mut rx) = mpsc::unbounded_channel::<FetchOutcome>();
    let mut events = EventHandler::new(TICK_RATE_MS);

    spawn_fetch(client.clone(), app.start(), tx.clone());

    loop {
        terminal
            .draw(|f| super::ui::draw(f, &app))
            .map_err(terminal_error)?;

        tokio::select! {
            Some(outcome) = rx.recv() => {
                app.apply(outcome);
            }
            event = events.next() => match event {
                Some(Event::Key(key)) => {
                    tracing::debug!(key = ?key.code, tab = %app.active(), "key pressed");
                    if let Some(ticket) = app.handle_key(key.code) {
                        spawn_fetch(client.clone(), ticket, tx.clone());
                    }
                }
                Some(Event::Resize) | Some(Event::Tick) => {}
                None => {
                    tracing::warn!("terminal event stream closed");
                    break;
                }
            },
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    #[test]
    fn test_failed_setup_is_rolled_back() {
        let rolled_back = Cell::new(false);
        let result: io::Result<()> = or_rollback(
            || Err(io::Error::new(io::ErrorKind::Other, "no tty")),
            || {
                rolled_back.set(true);
                Ok(())
            },
        );

        assert_eq!(result.unwrap_err().to_string(), "no tty");
        assert!(rolled_back.get());
    }

    #[test]
    fn test_successful_setup_keeps_state() {
        let rolled_back = Cell::new(false);
        let result = or_rollback(
            || Ok(7),
            || {
                rolled_back.set(true);
                Ok(())
            },
        );

        assert_eq!(result.unwrap(), 7);
        assert!(!rolled_back.get());
    }
}

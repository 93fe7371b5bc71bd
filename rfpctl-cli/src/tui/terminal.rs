//! Terminal management and main run loop.
//!
//! Every user action schedules at most one network task; tasks run on the
//! tokio runtime and report back over an mpsc channel, so the UI keeps
//! rendering while requests are in flight. Nothing blocks on the network.

use std::io::{self, Stdout};
use std::time::Duration;

use anyhow::{Context, Result};
use crossterm::{
    event::Event,
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use rfpctl_core::{ApiClient, RfpctlConfig};
use tokio::sync::mpsc::{self, UnboundedReceiver, UnboundedSender};

use super::app::{Action, ApiEvent, App};
use super::event::{handle_key, poll_event, HandleResult};
use super::ui;

/// Initialize the terminal for TUI mode
fn init_terminal() -> Result<Terminal<CrosstermBackend<Stdout>>> {
    enable_raw_mode().context("Failed to enable raw mode")?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen).context("Failed to enter alternate screen")?;
    let backend = CrosstermBackend::new(stdout);
    let terminal = Terminal::new(backend).context("Failed to create terminal")?;
    Ok(terminal)
}

/// Restore the terminal to normal mode
fn restore_terminal(terminal: &mut Terminal<CrosstermBackend<Stdout>>) -> Result<()> {
    disable_raw_mode().context("Failed to disable raw mode")?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)
        .context("Failed to leave alternate screen")?;
    terminal.show_cursor().context("Failed to show cursor")?;
    Ok(())
}

/// Run the TUI application
pub async fn run(client: ApiClient, config: &RfpctlConfig) -> Result<()> {
    let mut terminal = init_terminal()?;

    let mut app = App::new(config.client.single_flight);
    let (tx, mut rx) = mpsc::unbounded_channel();

    // The roster loads itself when the page opens
    if let Some(action) = app.start_roster_load() {
        execute(action, &client, &tx);
    }

    let result = run_loop(&mut terminal, &mut app, &client, &tx, &mut rx).await;

    // Restore terminal (even if the loop failed)
    restore_terminal(&mut terminal)?;

    result
}

/// Main event loop
async fn run_loop(
    terminal: &mut Terminal<CrosstermBackend<Stdout>>,
    app: &mut App,
    client: &ApiClient,
    tx: &UnboundedSender<ApiEvent>,
    rx: &mut UnboundedReceiver<ApiEvent>,
) -> Result<()> {
    loop {
        terminal.draw(|frame| ui::render(frame, app))?;

        // Drain any completed network operations; a completion may queue a
        // follow-up action (roster reload after a vendor add)
        while let Ok(event) = rx.try_recv() {
            if let Some(action) = app.apply(event) {
                execute(action, client, tx);
            }
        }

        // Poll for input (with 100ms timeout for responsive UI)
        if let Some(event) = poll_event(Duration::from_millis(100))? {
            match event {
                Event::Key(key) => match handle_key(app, key) {
                    HandleResult::Quit => break,
                    HandleResult::Continue => {}
                    HandleResult::Run(action) => execute(action, client, tx),
                },
                Event::Resize(_, _) => {
                    // Terminal resized, handled on next draw
                }
                _ => {}
            }
        }
    }

    Ok(())
}

/// Spawn the network task for an action; its completion arrives on `tx`
fn execute(action: Action, client: &ApiClient, tx: &UnboundedSender<ApiEvent>) {
    let client = client.clone();
    let tx = tx.clone();
    tokio::spawn(async move {
        let event = match action {
            Action::CreateRfp { text, gen } => ApiEvent::RfpCreated {
                gen,
                result: client.create_rfp(&text).await.map_err(|e| e.to_string()),
            },
            Action::LoadVendors { gen } => ApiEvent::VendorsLoaded {
                gen,
                result: client.list_vendors().await.map_err(|e| e.to_string()),
            },
            Action::AddVendor { name, email, gen } => ApiEvent::VendorAdded {
                gen,
                result: client
                    .add_vendor(&name, &email)
                    .await
                    .map_err(|e| e.to_string()),
            },
            Action::SendRfp {
                vendor_ids,
                rfp_id,
                gen,
            } => ApiEvent::RfpSent {
                gen,
                result: client
                    .send_rfp(&vendor_ids, rfp_id)
                    .await
                    .map_err(|e| e.to_string()),
            },
            Action::Compare { rfp_id, gen } => ApiEvent::Compared {
                gen,
                result: client.compare(&rfp_id).await.map_err(|e| e.to_string()),
            },
        };
        // Receiver gone means the loop already exited
        let _ = tx.send(event);
    });
}

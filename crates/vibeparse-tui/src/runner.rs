//! Main TUI runner - entry point and event loop

use tokio::sync::mpsc;

use vibeparse_app::message::Message;
use vibeparse_app::process::{process_message, start};
use vibeparse_app::signals;
use vibeparse_app::{AppState, Route};
use vibeparse_client::ApiClient;
use vibeparse_core::prelude::*;

use super::{event, render, terminal};

/// Run the TUI starting at `route` until the user quits
pub async fn run(mut state: AppState, route: Route, client: ApiClient) -> Result<()> {
    terminal::install_panic_hook();

    info!("VibeParse starting at {} (backend {})", route, state.api_base_url);
    let mut term = ratatui::try_init().map_err(|e| Error::TerminalInit(e.to_string()))?;
    if let Err(e) = terminal::enable_mouse_capture() {
        // Keyboard still covers everything overlays offer
        warn!("{}", e);
    }

    let (msg_tx, msg_rx) = mpsc::channel::<Message>(256);

    // Sends Message::Quit on SIGINT/SIGTERM/SIGHUP
    let signal_task = signals::spawn_signal_handler(msg_tx.clone());

    start(&mut state, route, &msg_tx, &client);
    let result = run_loop(&mut term, &mut state, msg_rx, msg_tx, &client);

    signal_task.abort();
    terminal::disable_mouse_capture();
    ratatui::restore();

    info!("VibeParse exiting");
    result
}

/// Main event loop
fn run_loop(
    terminal: &mut ratatui::DefaultTerminal,
    state: &mut AppState,
    mut msg_rx: mpsc::Receiver<Message>,
    msg_tx: mpsc::Sender<Message>,
    client: &ApiClient,
) -> Result<()> {
    while !state.should_quit() {
        // Results from background tasks and the signal handler
        while let Ok(msg) = msg_rx.try_recv() {
            process_message(state, msg, &msg_tx, client);
        }

        terminal.draw(|frame| render::view(frame, state))?;

        if let Some(message) = event::poll()? {
            process_message(state, message, &msg_tx, client);
        }
    }
    Ok(())
}

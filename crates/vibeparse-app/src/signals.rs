//! OS signal handling for graceful shutdown
//!
//! SIGINT rarely arrives while the terminal is in raw mode (Ctrl+C is read as
//! a key), but SIGTERM and SIGHUP (terminal window closed) do, and both must
//! restore the terminal through the normal quit path.

use tokio::sync::mpsc;
use tokio::task::JoinHandle;

use vibeparse_core::prelude::*;

use crate::message::Message;

/// Signals that end the session
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShutdownSignal {
    Interrupt,
    Terminate,
    Hangup,
}

/// Spawn a task that turns the first shutdown signal into [`Message::Quit`]
pub fn spawn_signal_handler(tx: mpsc::Sender<Message>) -> JoinHandle<()> {
    tokio::spawn(async move {
        match wait_for_shutdown().await {
            Ok(signal) => {
                info!("Received {:?}, shutting down", signal);
                let _ = tx.send(Message::Quit).await;
            }
            Err(e) => error!("Signal handler error: {}", e),
        }
    })
}

#[cfg(unix)]
async fn wait_for_shutdown() -> Result<ShutdownSignal> {
    use tokio::signal::unix::{signal, SignalKind};

    let listen = |kind: SignalKind, name: &str| {
        signal(kind).map_err(|e| Error::terminal(format!("Failed to listen for {name}: {e}")))
    };
    let mut interrupt = listen(SignalKind::interrupt(), "SIGINT")?;
    let mut terminate = listen(SignalKind::terminate(), "SIGTERM")?;
    let mut hangup = listen(SignalKind::hangup(), "SIGHUP")?;

    Ok(tokio::select! {
        _ = interrupt.recv() => ShutdownSignal::Interrupt,
        _ = terminate.recv() => ShutdownSignal::Terminate,
        _ = hangup.recv() => ShutdownSignal::Hangup,
    })
}

#[cfg(not(unix))]
async fn wait_for_shutdown() -> Result<ShutdownSignal> {
    tokio::signal::ctrl_c()
        .await
        .map_err(|e| Error::terminal(format!("Failed to listen for Ctrl+C: {e}")))?;
    Ok(ShutdownSignal::Interrupt)
}

//! Action handlers: UpdateAction dispatch and background task spawning
//!
//! Every backend call runs in its own tokio task and reports back with a
//! single [`Message`]. No retries, no cancellation.

use std::path::PathBuf;

use tokio::sync::mpsc;

use vibeparse_client::ApiClient;
use vibeparse_core::prelude::*;

use crate::clipboard;
use crate::handler::UpdateAction;
use crate::message::Message;

/// Execute an action by spawning a background task
pub fn handle_action(action: UpdateAction, msg_tx: mpsc::Sender<Message>, client: &ApiClient) {
    match action {
        UpdateAction::FetchConfig => {
            let client = client.clone();
            tokio::spawn(async move {
                let outcome = client.fetch_config().await;
                send(&msg_tx, Message::ConfigFetched(outcome)).await;
            });
        }

        UpdateAction::GenerateScript(request) => {
            let client = client.clone();
            tokio::spawn(async move {
                let outcome = client.generate_script(&request).await;
                send(&msg_tx, Message::ScriptGenerated(outcome)).await;
            });
        }

        UpdateAction::FetchScript { script_id } => {
            let client = client.clone();
            tokio::spawn(async move {
                let outcome = client.fetch_script(&script_id).await;
                send(&msg_tx, Message::ScriptFetched { script_id, outcome }).await;
            });
        }

        UpdateAction::CopyToClipboard { text } => {
            if let Err(e) = clipboard::copy_to_clipboard(&text) {
                warn!("Clipboard write failed: {}", e);
            }
        }

        UpdateAction::ExportMarkdown { path, markdown } => {
            tokio::spawn(async move {
                let msg = match write_export(path.clone(), markdown).await {
                    Ok(()) => Message::ExportFinished(path),
                    Err(e) => Message::ExportFailed(e.to_string()),
                };
                send(&msg_tx, msg).await;
            });
        }
    }
}

/// Write a Markdown export, creating the parent directory if needed
pub async fn write_export(path: PathBuf, markdown: String) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        tokio::fs::create_dir_all(parent)
            .await
            .with_context(|| format!("Failed to create export directory {:?}", parent))?;
    }
    tokio::fs::write(&path, markdown)
        .await
        .with_context(|| format!("Failed to write export {:?}", path))?;
    Ok(())
}

async fn send(msg_tx: &mpsc::Sender<Message>, msg: Message) {
    if msg_tx.send(msg).await.is_err() {
        debug!("Message channel closed, dropping task result");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use tempfile::tempdir;
    use vibeparse_client::test_utils::{StubResponse, StubServer};
    use vibeparse_client::FetchOutcome;
    use vibeparse_core::ServerConfig;

    #[tokio::test]
    async fn test_fetch_config_reports_back() {
        let server = StubServer::start(vec![StubResponse::json(
            "GET",
            "/api/config",
            200,
            json!({"mock_llm_mode": true}),
        )])
        .await;
        let client = ApiClient::new(&server.base_url(), None).unwrap();
        let (tx, mut rx) = mpsc::channel(4);

        handle_action(UpdateAction::FetchConfig, tx, &client);

        match rx.recv().await {
            Some(Message::ConfigFetched(outcome)) => assert_eq!(
                outcome,
                FetchOutcome::Success(ServerConfig {
                    mock_llm_mode: true
                })
            ),
            other => panic!("unexpected message: {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_fetch_script_carries_id() {
        let server = StubServer::start(vec![]).await;
        let client = ApiClient::new(&server.base_url(), None).unwrap();
        let (tx, mut rx) = mpsc::channel(4);

        handle_action(
            UpdateAction::FetchScript {
                script_id: "missing".into(),
            },
            tx,
            &client,
        );

        match rx.recv().await {
            Some(Message::ScriptFetched { script_id, outcome }) => {
                assert_eq!(script_id, "missing");
                assert!(matches!(outcome, FetchOutcome::HttpError { status: 404, .. }));
            }
            other => panic!("unexpected message: {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_export_writes_file() {
        let temp = tempdir().unwrap();
        let path = temp.path().join("exports").join("abc.md");
        let client = ApiClient::new("http://localhost:8000", None).unwrap();
        let (tx, mut rx) = mpsc::channel(4);

        handle_action(
            UpdateAction::ExportMarkdown {
                path: path.clone(),
                markdown: "# Code Explanation Script\n".into(),
            },
            tx,
            &client,
        );

        match rx.recv().await {
            Some(Message::ExportFinished(written)) => assert_eq!(written, path),
            other => panic!("unexpected message: {other:?}"),
        }
        assert_eq!(
            std::fs::read_to_string(&path).unwrap(),
            "# Code Explanation Script\n"
        );
    }

    #[tokio::test]
    async fn test_export_into_file_parent_fails() {
        let temp = tempdir().unwrap();
        let blocker = temp.path().join("not-a-dir");
        std::fs::write(&blocker, "").unwrap();

        let err = write_export(blocker.join("abc.md"), "# x\n".into())
            .await
            .unwrap_err();
        assert!(matches!(err, Error::Io(_)));
    }
}

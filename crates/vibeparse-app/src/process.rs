//! Message processing
//!
//! Runs a message through the TEA update function, following any chained
//! messages, and hands actions to the background task spawner.

use tokio::sync::mpsc;

use vibeparse_client::ApiClient;

use crate::actions::handle_action;
use crate::handler;
use crate::message::Message;
use crate::state::AppState;

/// Process a message through the TEA update function
pub fn process_message(
    state: &mut AppState,
    message: Message,
    msg_tx: &mpsc::Sender<Message>,
    client: &ApiClient,
) {
    let mut msg = Some(message);
    while let Some(m) = msg {
        let result = handler::update(state, m);

        if let Some(action) = result.action {
            handle_action(action, msg_tx.clone(), client);
        }

        msg = result.message;
    }
}

/// Enter the initial route, starting its requests
pub fn start(
    state: &mut AppState,
    route: crate::router::Route,
    msg_tx: &mpsc::Sender<Message>,
    client: &ApiClient,
) {
    process_message(state, Message::Navigate(route), msg_tx, client);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Settings;
    use crate::router::Route;
    use serde_json::json;
    use vibeparse_client::test_utils::{StubResponse, StubServer};

    fn script_body() -> serde_json::Value {
        json!({"scenes": [
            {"title": "Welcome", "duration": 3, "content": "Hello", "code_highlights": []}
        ]})
    }

    #[tokio::test]
    async fn test_submit_then_load_player() {
        let server = StubServer::start(vec![
            StubResponse::json("GET", "/api/config", 200, json!({"mock_llm_mode": false})),
            StubResponse::json(
                "POST",
                "/api/generate-script",
                200,
                json!({"script_id": "abc123"}),
            ),
            StubResponse::json("GET", "/api/scripts/abc123", 200, script_body()),
        ])
        .await;
        let client = ApiClient::new(&server.base_url(), None).unwrap();
        let (tx, mut rx) = mpsc::channel(16);
        let mut state = AppState::new(Settings::default(), server.base_url());

        start(&mut state, Route::Index, &tx, &client);
        let msg = rx.recv().await.unwrap();
        assert!(matches!(msg, Message::ConfigFetched(_)));
        process_message(&mut state, msg, &tx, &client);

        state.form_mut().unwrap().github_url =
            crate::form::TextInput::with_value("https://github.com/x/y");
        process_message(&mut state, Message::SubmitForm, &tx, &client);
        assert!(state.form().unwrap().loading);

        let msg = rx.recv().await.unwrap();
        process_message(&mut state, msg, &tx, &client);
        assert_eq!(state.route, Route::player("abc123"));

        let msg = rx.recv().await.unwrap();
        process_message(&mut state, msg, &tx, &client);
        let loaded = state.player().unwrap().loaded().unwrap();
        assert_eq!(loaded.scene().title, "Welcome");

        assert_eq!(server.requests_to("/api/generate-script").len(), 1);
        assert_eq!(server.requests_to("/api/scripts/abc123").len(), 1);
    }
}

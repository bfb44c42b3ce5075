//! Fetch actor - runs HTTP fetches in the Tokio async runtime

use tokio::sync::mpsc;
use tokio::task::JoinSet;

use crate::messages::{FetchCommand, FetchUpdate};
use crate::network::client::{create_client, fetch_users};

/// Network actor that processes fetch commands.
///
/// Dropping the actor drops its `JoinSet`, which aborts any in-flight
/// request; no explicit cancellation protocol is needed.
pub struct FetchActor {
    client: reqwest::Client,
    endpoint: String,
    update_tx: mpsc::UnboundedSender<FetchUpdate>,
    active_fetches: JoinSet<()>,
}

impl FetchActor {
    pub fn new(endpoint: impl Into<String>, update_tx: mpsc::UnboundedSender<FetchUpdate>) -> Self {
        FetchActor {
            client: create_client(),
            endpoint: endpoint.into(),
            update_tx,
            active_fetches: JoinSet::new(),
        }
    }

    /// Run the fetch actor message loop
    pub async fn run(mut self, mut cmd_rx: mpsc::UnboundedReceiver<FetchCommand>) {
        loop {
            tokio::select! {
                biased;

                cmd = cmd_rx.recv() => {
                    match cmd {
                        Some(FetchCommand::Fetch { id }) => {
                            let update_tx = self.update_tx.clone();
                            let client = self.client.clone();
                            let endpoint = self.endpoint.clone();

                            self.active_fetches.spawn(async move {
                                tracing::info!(id, url = %endpoint, "fetching user list");
                                let update = match fetch_users(&client, &endpoint).await {
                                    Ok(users) => {
                                        tracing::info!(id, count = users.len(), "fetch completed");
                                        FetchUpdate::Loaded { id, users }
                                    }
                                    Err(error) => {
                                        tracing::warn!(id, %error, "fetch failed");
                                        FetchUpdate::Failed { id, error }
                                    }
                                };
                                let _ = update_tx.send(update);
                            });
                        }

                        Some(FetchCommand::Shutdown) | None => break,
                    }
                }

                // Clean up completed tasks
                Some(_result) = self.active_fetches.join_next() => {}
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use httpmock::prelude::*;

    #[tokio::test]
    async fn test_fetch_command_produces_loaded_update() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(GET).path("/users");
                then.status(200)
                    .body(r#"[{"id":1,"name":"Leanne Graham","email":"Sincere@april.biz"}]"#);
            })
            .await;

        let (update_tx, mut update_rx) = mpsc::unbounded_channel();
        let (cmd_tx, cmd_rx) = mpsc::unbounded_channel();
        let actor = FetchActor::new(server.url("/users"), update_tx);
        let handle = tokio::spawn(actor.run(cmd_rx));

        cmd_tx.send(FetchCommand::Fetch { id: 1 }).unwrap();
        let update = update_rx.recv().await.unwrap();
        match update {
            FetchUpdate::Loaded { id, users } => {
                assert_eq!(id, 1);
                assert_eq!(users.len(), 1);
                assert_eq!(users[0].initials(), "LG");
            }
            other => panic!("expected Loaded, got {:?}", other),
        }

        cmd_tx.send(FetchCommand::Shutdown).unwrap();
        handle.await.unwrap();
    }

    #[tokio::test]
    async fn test_fetch_failure_produces_failed_update() {
        let (update_tx, mut update_rx) = mpsc::unbounded_channel();
        let (cmd_tx, cmd_rx) = mpsc::unbounded_channel();
        let actor = FetchActor::new("http://127.0.0.1:9/users", update_tx);
        tokio::spawn(actor.run(cmd_rx));

        cmd_tx.send(FetchCommand::Fetch { id: 7 }).unwrap();
        let update = update_rx.recv().await.unwrap();
        assert!(matches!(update, FetchUpdate::Failed { id: 7, .. }));
    }

    #[tokio::test]
    async fn test_closing_command_channel_stops_actor() {
        let (update_tx, _update_rx) = mpsc::unbounded_channel();
        let (cmd_tx, cmd_rx) = mpsc::unbounded_channel::<FetchCommand>();
        let actor = FetchActor::new("http://127.0.0.1:9/users", update_tx);
        let handle = tokio::spawn(actor.run(cmd_rx));

        drop(cmd_tx);
        handle.await.unwrap();
    }
}

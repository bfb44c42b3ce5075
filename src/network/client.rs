//! HTTP client wrapper - fetches and decodes the user list

use crate::error::FetchError;
use crate::models::User;

/// Fetch the user list from `url` and decode it as a JSON array.
///
/// One plain GET, no headers, no query parameters, no auth. A non-2xx
/// status counts as a transport failure; the caller keeps its previous
/// list either way.
pub async fn fetch_users(client: &reqwest::Client, url: &str) -> Result<Vec<User>, FetchError> {
    let url = reqwest::Url::parse(url).map_err(|e| FetchError::InvalidEndpoint(e.to_string()))?;

    let response = client
        .get(url)
        .send()
        .await
        .map_err(|e| FetchError::Transport(transport_message(&e)))?;

    let status = response.status();
    if !status.is_success() {
        return Err(FetchError::Transport(format!(
            "unexpected status {}",
            status.as_u16()
        )));
    }

    let body = response
        .text()
        .await
        .map_err(|e| FetchError::Transport(format!("error reading body: {}", e)))?;

    serde_json::from_str::<Vec<User>>(&body).map_err(|e| FetchError::Decode(e.to_string()))
}

fn transport_message(e: &reqwest::Error) -> String {
    if e.is_timeout() {
        "request timed out (30s)".to_string()
    } else if e.is_connect() {
        format!("connection failed: {}", e)
    } else {
        format!("request failed: {}", e)
    }
}

/// Create an HTTP client with default configuration
pub fn create_client() -> reqwest::Client {
    use std::time::Duration;

    reqwest::Client::builder()
        .timeout(Duration::from_secs(30))
        .build()
        .unwrap_or_else(|_| reqwest::Client::new())
}

#[cfg(test)]
mod tests {
    use super::*;
    use httpmock::prelude::*;

    #[tokio::test]
    async fn test_fetch_decodes_array_in_server_order() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(GET).path("/users");
                then.status(200).header("content-type", "application/json").body(
                    r#"[{"id":1,"name":"Leanne Graham","email":"Sincere@april.biz"},
                        {"id":2,"name":"Ervin Howell","email":"Shanna@melissa.tv"}]"#,
                );
            })
            .await;

        let client = create_client();
        let users = fetch_users(&client, &server.url("/users")).await.unwrap();
        assert_eq!(users.len(), 2);
        assert_eq!(users[0].name, "Leanne Graham");
        assert_eq!(users[0].email, "Sincere@april.biz");
        assert_eq!(users[1].id, 2);
    }

    #[tokio::test]
    async fn test_fetch_empty_array() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(GET).path("/users");
                then.status(200).body("[]");
            })
            .await;

        let client = create_client();
        let users = fetch_users(&client, &server.url("/users")).await.unwrap();
        assert!(users.is_empty());
    }

    #[tokio::test]
    async fn test_fetch_malformed_payload_is_decode_failure() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(GET).path("/users");
                then.status(200).body(r#"{"not":"an array"}"#);
            })
            .await;

        let client = create_client();
        let err = fetch_users(&client, &server.url("/users")).await.unwrap_err();
        assert!(matches!(err, FetchError::Decode(_)));
    }

    #[tokio::test]
    async fn test_fetch_server_error_is_transport_failure() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(GET).path("/users");
                then.status(500);
            })
            .await;

        let client = create_client();
        let err = fetch_users(&client, &server.url("/users")).await.unwrap_err();
        match err {
            FetchError::Transport(msg) => assert!(msg.contains("500")),
            other => panic!("expected transport failure, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_fetch_invalid_url() {
        let client = create_client();
        let err = fetch_users(&client, "not a url").await.unwrap_err();
        assert!(matches!(err, FetchError::InvalidEndpoint(_)));
    }

    #[tokio::test]
    async fn test_fetch_connection_refused_is_transport_failure() {
        let client = create_client();
        // Port 9 (discard) is about as unlikely to be serving HTTP as it gets
        let err = fetch_users(&client, "http://127.0.0.1:9/users")
            .await
            .unwrap_err();
        assert!(matches!(err, FetchError::Transport(_)));
    }
}

#[cfg(test)]
mod test {

    use std::time::Duration;

    use httpmock::prelude::*;
    use serde_json::json;

    use crate::error::SetupError;
    use crate::sources::worker::WorkerSource;

    #[tokio::test]
    async fn success_response_yields_token() {
        let server = MockServer::start_async().await;
        let mock = server
            .mock_async(|when, then| {
                when.method(POST)
                    .path("/")
                    .json_body(json!({"username": "alice"}));
                then.status(200)
                    .json_body(json!({"success": true, "token": "abc123"}));
            })
            .await;

        let source = WorkerSource::with_url(server.url("/")).unwrap();
        let token = source.request_token("alice").await.unwrap();

        assert_eq!(token, "abc123");
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn success_false_is_unexpected_response() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(POST).path("/");
                then.status(200).json_body(json!({"success": false}));
            })
            .await;

        let source = WorkerSource::with_url(server.url("/")).unwrap();
        let err = source.request_token("alice").await.unwrap_err();

        match err {
            SetupError::UnexpectedResponse(payload) => {
                assert_eq!(payload, json!({"success": false}));
            }
            other => panic!("expected UnexpectedResponse, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn empty_object_is_unexpected_response() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(POST).path("/");
                then.status(200).json_body(json!({}));
            })
            .await;

        let source = WorkerSource::with_url(server.url("/")).unwrap();
        let err = source.request_token("alice").await.unwrap_err();

        assert!(matches!(err, SetupError::UnexpectedResponse(_)));
    }

    #[tokio::test]
    async fn empty_token_is_unexpected_response() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(POST).path("/");
                then.status(200)
                    .json_body(json!({"success": true, "token": ""}));
            })
            .await;

        let source = WorkerSource::with_url(server.url("/")).unwrap();
        let err = source.request_token("alice").await.unwrap_err();

        assert!(matches!(err, SetupError::UnexpectedResponse(_)));
    }

    #[tokio::test]
    async fn empty_body_is_no_response_data() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(POST).path("/");
                then.status(200).body("");
            })
            .await;

        let source = WorkerSource::with_url(server.url("/")).unwrap();
        let err = source.request_token("alice").await.unwrap_err();

        assert!(matches!(err, SetupError::EmptyResponse));
    }

    #[tokio::test]
    async fn non_json_body_is_transport_failure() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(POST).path("/");
                then.status(200).body("not json");
            })
            .await;

        let source = WorkerSource::with_url(server.url("/")).unwrap();
        let err = source.request_token("alice").await.unwrap_err();

        match err {
            SetupError::Transport(msg) => assert!(msg.contains("invalid JSON")),
            other => panic!("expected Transport, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn slow_response_is_timeout() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(POST).path("/");
                then.status(200)
                    .json_body(json!({"success": true, "token": "late"}))
                    .delay(Duration::from_secs(2));
            })
            .await;

        let source =
            WorkerSource::with_url_and_timeout(server.url("/"), Duration::from_millis(100))
                .unwrap();
        let err = source.request_token("alice").await.unwrap_err();

        assert!(matches!(err, SetupError::Timeout));
    }

    #[tokio::test]
    async fn server_error_is_transport_failure() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(POST).path("/");
                then.status(500).body("boom");
            })
            .await;

        let source = WorkerSource::with_url(server.url("/")).unwrap();
        let err = source.request_token("alice").await.unwrap_err();

        match err {
            SetupError::Transport(msg) => assert!(msg.contains("500")),
            other => panic!("expected Transport, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn refused_connection_is_connection_error() {
        // nothing listens on this port
        let source = WorkerSource::with_url("http://127.0.0.1:9/").unwrap();
        let err = source.request_token("alice").await.unwrap_err();

        assert!(matches!(err, SetupError::Connection));
    }
}

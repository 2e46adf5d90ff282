//! Integration tests for the resource clients using wiremock
//!
//! These tests drive the real reqwest transport against mocked invocation
//! endpoints, checking the wire format in both directions.

use resource_client::client::{
    BaseClientConfig, CustomApiOptions, CustomApiResourceClient, HubSpotOptions,
    HubSpotResourceClient, PostgresResourceClient, S3Options, S3ResourceClient,
};
use resource_client::schema::{ApiResultBody, HttpMethod, InvokeResponse, S3Command};
use serde_json::{json, Map, Value};
use wiremock::matchers::{body_json, header, method, path};
use wiremock::{Mock, MockServer, Request, ResponseTemplate};

const INVOKE_PATH: &str = "/internal/apps/v1/app-1/resource/res-1/invoke";

fn config(server: &MockServer) -> BaseClientConfig {
    BaseClientConfig::new(format!("{}/", server.uri()), "app-1", "res-1")
}

/// Test module for resource client integration tests
mod resource_client_tests {
    use super::*;

    /// Test the postgres envelope reaches the endpoint unchanged
    #[tokio::test]
    async fn test_postgres_invoke_posts_envelope() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path(INVOKE_PATH))
            .and(header("content-type", "application/json"))
            .and(header("x-major-jwt", "jwt-token"))
            .and(body_json(json!({
                "payload": {
                    "type": "database",
                    "subtype": "postgresql",
                    "sql": "select * from orders where id = $1",
                    "params": [17]
                },
                "invocationKey": "orders.by-id"
            })))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "ok": true,
                "requestId": "req-1",
                "result": {"kind": "database", "rows": [{"id": 17, "total": 99.5}]}
            })))
            .expect(1)
            .mount(&server)
            .await;

        let client = PostgresResourceClient::new(
            config(&server).with_jwt_token(Some("jwt-token".into())),
        );

        let response = client
            .invoke(
                "select * from orders where id = $1",
                Some(vec![17i64.into()]),
                "orders.by-id",
                None,
            )
            .await
            .expect("invoke should succeed");

        let success = response.success().expect("should be a success");
        assert_eq!(success.request_id, "req-1");
        assert_eq!(success.result.rows[0]["total"], 99.5);
    }

    /// Test a logical failure on a 4xx status comes back as data
    #[tokio::test]
    async fn test_failure_body_on_error_status_is_not_an_error() {
        let server = MockServer::start().await;

        let failure = json!({"ok": false, "requestId": "r1", "error": {"message": "boom"}});
        Mock::given(method("POST"))
            .and(path(INVOKE_PATH))
            .respond_with(ResponseTemplate::new(422).set_body_json(&failure))
            .mount(&server)
            .await;

        let client = PostgresResourceClient::new(config(&server));
        let response = client
            .invoke("select 1", None, "one", None)
            .await
            .expect("logical failure should not be an error");

        assert!(!response.is_ok());
        assert_eq!(serde_json::to_value(&response.widen()).unwrap(), failure);
    }

    /// Test a non-JSON body becomes a typed error with the HTTP status
    #[tokio::test]
    async fn test_non_json_response_is_invoke_error() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path(INVOKE_PATH))
            .respond_with(ResponseTemplate::new(503).set_body_string("Service Unavailable"))
            .mount(&server)
            .await;

        let client = S3ResourceClient::new(config(&server));
        let err = client
            .invoke(S3Command::ListBuckets, Map::new(), "buckets.list", S3Options::default())
            .await
            .expect_err("non-JSON body should fail");

        assert_eq!(err.http_status(), Some(503));
        assert!(err.message().starts_with("Failed to invoke resource"));
    }

    /// Test an unreachable endpoint becomes a typed error
    #[tokio::test]
    async fn test_unreachable_endpoint_is_invoke_error() {
        let server = MockServer::start().await;
        let uri = server.uri();
        drop(server);

        let client = PostgresResourceClient::new(BaseClientConfig::new(uri, "app-1", "res-1"));
        let err = client
            .invoke("select 1", None, "one", None)
            .await
            .expect_err("request should fail");

        assert!(err.message().contains("Failed to send request"));
        assert_eq!(err.http_status(), None);
    }

    /// Test custom API default timeout and response narrowing
    #[tokio::test]
    async fn test_custom_api_round_trip() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path(INVOKE_PATH))
            .respond_with(|request: &Request| {
                let envelope: Value = serde_json::from_slice(&request.body).unwrap();
                ResponseTemplate::new(200).set_body_json(json!({
                    "ok": true,
                    "requestId": "req-echo",
                    "result": {
                        "kind": "api",
                        "status": 200,
                        "body": {"kind": "json", "value": envelope["payload"]}
                    }
                }))
            })
            .mount(&server)
            .await;

        let client = CustomApiResourceClient::new(config(&server));
        let response = client
            .invoke(HttpMethod::Get, "/v1/payments", "payments.list", CustomApiOptions::default())
            .await
            .unwrap();

        let InvokeResponse::Success(success) = response else {
            panic!("expected success");
        };
        let ApiResultBody::Json { value: echoed } = success.result.body else {
            panic!("expected JSON body");
        };
        assert_eq!(
            echoed,
            json!({
                "type": "api",
                "subtype": "custom",
                "method": "GET",
                "path": "/v1/payments",
                "timeoutMs": 30000
            })
        );
    }

    /// Test no JWT header is sent when none is configured
    #[tokio::test]
    async fn test_no_jwt_header_without_token() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path(INVOKE_PATH))
            .respond_with(|request: &Request| {
                let status = if request.headers.contains_key("x-major-jwt") { 500 } else { 200 };
                ResponseTemplate::new(status).set_body_json(json!({
                    "ok": false,
                    "requestId": "r",
                    "error": {"message": "checked", "httpStatus": status}
                }))
            })
            .mount(&server)
            .await;

        let client = HubSpotResourceClient::new(config(&server));
        let response = client
            .invoke(
                HttpMethod::Get,
                "/crm/v3/objects/deals",
                "deals.list",
                HubSpotOptions::default(),
            )
            .await
            .unwrap();

        assert_eq!(response.failure().unwrap().error.http_status, Some(200));
    }

    /// Test concurrent invocations on one client are independent
    #[tokio::test]
    async fn test_concurrent_invocations() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path(INVOKE_PATH))
            .respond_with(|request: &Request| {
                let envelope: Value = serde_json::from_slice(&request.body).unwrap();
                ResponseTemplate::new(200).set_body_json(json!({
                    "ok": true,
                    "requestId": envelope["invocationKey"],
                    "result": {"kind": "database", "rows": []}
                }))
            })
            .expect(5)
            .mount(&server)
            .await;

        let client = PostgresResourceClient::new(config(&server));
        let keys: Vec<String> = (0..5).map(|i| format!("batch.item-{}", i)).collect();
        let responses = futures::future::join_all(
            keys.iter()
                .map(|key| client.invoke("select 1", None, key, None)),
        )
        .await;

        for (key, response) in keys.iter().zip(responses) {
            assert_eq!(response.unwrap().request_id(), key);
        }
    }
}

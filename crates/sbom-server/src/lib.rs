//! HTTP server for the SBOM registry.
//!
//! Serves a single resource, `/components`, multiplexed on the request
//! method. Every request is translated into at most one call on a shared
//! [`ComponentStore`](sbom_store::ComponentStore).

pub mod config;
pub mod error;
pub mod handler;
pub mod render;
pub mod router;
pub mod server;

pub use config::ServerConfig;
pub use error::{ApiError, ServerError, ServerResult};
pub use render::Renderer;
pub use router::{build_router, AppState};
pub use server::SbomServer;

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::{to_bytes, Body};
    use axum::http::{Method, Request, StatusCode};
    use axum::Router;
    use sbom_types::LicensePolicy;
    use serde_json::{json, Value};
    use std::collections::HashSet;
    use tower::util::ServiceExt;

    fn app() -> Router {
        SbomServer::new(ServerConfig::default()).router()
    }

    fn lib_a() -> Value {
        json!({
            "name": "lib-a",
            "version": "1.0",
            "checksum": "abc",
            "source": "github.com/x/lib-a",
            "license": "MIT",
        })
    }

    async fn send(app: &Router, method: Method, uri: &str, body: Option<&str>) -> (StatusCode, Value) {
        let body = body.map_or_else(Body::empty, |b| Body::from(b.to_string()));
        let response = app
            .clone()
            .oneshot(Request::builder().method(method).uri(uri).body(body).unwrap())
            .await
            .unwrap();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let value = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).unwrap()
        };
        (status, value)
    }

    async fn create(app: &Router, body: &Value) -> (StatusCode, Value) {
        send(app, Method::POST, "/components", Some(&body.to_string())).await
    }

    #[tokio::test]
    async fn health_endpoint() {
        let (status, body) = send(&app(), Method::GET, "/health", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["status"], "ok");
    }

    #[tokio::test]
    async fn create_get_delete_scenario() {
        let app = app();

        let (status, first) = create(&app, &lib_a()).await;
        assert_eq!(status, StatusCode::CREATED);
        assert_eq!(first["id"], 1);
        assert_eq!(first["name"], "lib-a");

        let (status, second) = create(&app, &lib_a()).await;
        assert_eq!(status, StatusCode::CREATED);
        assert_eq!(second["id"], 2);

        let (status, got) = send(&app, Method::GET, "/components?id=1", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(got, first);

        let (status, body) = send(&app, Method::DELETE, "/components?id=1", None).await;
        assert_eq!(status, StatusCode::NO_CONTENT);
        assert_eq!(body, Value::Null);

        let (status, _) = send(&app, Method::GET, "/components?id=1", None).await;
        assert_eq!(status, StatusCode::NOT_FOUND);

        let (status, _) = send(&app, Method::DELETE, "/components?id=1", None).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn list_returns_every_record() {
        let app = app();
        let (status, body) = send(&app, Method::GET, "/components", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, json!([]));

        for _ in 0..3 {
            create(&app, &lib_a()).await;
        }
        let (status, body) = send(&app, Method::GET, "/components?id=", None).await;
        assert_eq!(status, StatusCode::OK);
        let ids: HashSet<u64> = body
            .as_array()
            .unwrap()
            .iter()
            .map(|c| c["id"].as_u64().unwrap())
            .collect();
        assert_eq!(ids, HashSet::from([1, 2, 3]));
    }

    #[tokio::test]
    async fn create_ignores_client_id() {
        let app = app();
        let mut body = lib_a();
        body["id"] = json!(42);
        let (status, created) = create(&app, &body).await;
        assert_eq!(status, StatusCode::CREATED);
        assert_eq!(created["id"], 1);
    }

    #[tokio::test]
    async fn create_rejects_invalid_json_and_missing_fields() {
        let app = app();

        let (status, body) = send(&app, Method::POST, "/components", Some("{not json")).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"], "invalid JSON");

        let (status, body) = send(&app, Method::POST, "/components", None).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"], "invalid JSON");

        let mut missing = lib_a();
        missing["name"] = json!("  ");
        let (status, body) = create(&app, &missing).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"], "name is required");

        let (status, body) = create(&app, &json!({ "name": "x", "version": "1" })).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"], "checksum is required");

        let (_, all) = send(&app, Method::GET, "/components", None).await;
        assert_eq!(all, json!([]));
    }

    #[tokio::test]
    async fn required_license_policy() {
        let config = ServerConfig {
            license_policy: LicensePolicy::Required,
            ..ServerConfig::default()
        };
        let app = SbomServer::new(config).router();
        let mut body = lib_a();
        body["license"] = json!("");
        let (status, err) = create(&app, &body).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(err["error"], "license is required");
    }

    #[tokio::test]
    async fn bad_ids_are_rejected_before_the_store() {
        let app = app();
        create(&app, &lib_a()).await;

        for uri in [
            "/components?id=0",
            "/components?id=-1",
            "/components?id=abc",
            "/components?id=1.0",
        ] {
            let (status, body) = send(&app, Method::GET, uri, None).await;
            assert_eq!(status, StatusCode::BAD_REQUEST, "{uri}");
            assert_eq!(body["error"], "invalid id");
        }

        for method in [Method::PUT, Method::PATCH, Method::DELETE] {
            let (status, body) =
                send(&app, method.clone(), "/components", Some(&lib_a().to_string())).await;
            assert_eq!(status, StatusCode::BAD_REQUEST, "{method}");
            assert_eq!(body["error"], "invalid id");
        }

        let (_, all) = send(&app, Method::GET, "/components", None).await;
        assert_eq!(all.as_array().unwrap().len(), 1);
    }

    #[tokio::test]
    async fn put_replaces_existing_record() {
        let app = app();
        create(&app, &lib_a()).await;

        let replacement = json!({
            "id": 99,
            "name": "lib-a",
            "version": "2.0",
            "checksum": "def",
            "source": "github.com/x/lib-a",
        });
        let (status, body) =
            send(&app, Method::PUT, "/components?id=1", Some(&replacement.to_string())).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["id"], 1);
        assert_eq!(body["version"], "2.0");
        assert_eq!(body["license"], "");

        let (_, got) = send(&app, Method::GET, "/components?id=1", None).await;
        assert_eq!(got, body);
    }

    #[tokio::test]
    async fn put_missing_is_not_found_and_inserts_nothing() {
        let app = app();
        let (status, _) =
            send(&app, Method::PUT, "/components?id=999", Some(&lib_a().to_string())).await;
        assert_eq!(status, StatusCode::NOT_FOUND);

        let (_, all) = send(&app, Method::GET, "/components", None).await;
        assert_eq!(all, json!([]));
    }

    #[tokio::test]
    async fn put_validates_body() {
        let app = app();
        create(&app, &lib_a()).await;

        let (status, body) = send(&app, Method::PUT, "/components?id=1", Some("[1,2")).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"], "invalid JSON");

        let mut bad = lib_a();
        bad["source"] = json!("");
        let (status, body) =
            send(&app, Method::PUT, "/components?id=1", Some(&bad.to_string())).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"], "source is required");

        let (_, got) = send(&app, Method::GET, "/components?id=1", None).await;
        assert_eq!(got["source"], "github.com/x/lib-a");
    }

    #[tokio::test]
    async fn patch_is_partial() {
        let app = app();
        let (_, created) = create(&app, &lib_a()).await;

        let (status, patched) =
            send(&app, Method::PATCH, "/components?id=1", Some(r#"{"version":"2.0"}"#)).await;
        assert_eq!(status, StatusCode::OK);

        let mut expected = created.clone();
        expected["version"] = json!("2.0");
        assert_eq!(patched, expected);

        let (_, cleared) = send(
            &app,
            Method::PATCH,
            "/components?id=1",
            Some(r#"{"name":"","license":""}"#),
        )
        .await;
        assert_eq!(cleared["name"], "lib-a");
        assert_eq!(cleared["license"], "");
    }

    #[tokio::test]
    async fn patch_errors() {
        let app = app();
        let (status, _) =
            send(&app, Method::PATCH, "/components?id=3", Some(r#"{"version":"2"}"#)).await;
        assert_eq!(status, StatusCode::NOT_FOUND);

        create(&app, &lib_a()).await;
        let (status, body) =
            send(&app, Method::PATCH, "/components?id=1", Some(r#"{"version":"#)).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"], "invalid JSON");
    }

    #[tokio::test]
    async fn patch_skips_non_string_values() {
        let app = app();
        create(&app, &lib_a()).await;

        let (status, body) = send(
            &app,
            Method::PATCH,
            "/components?id=1",
            Some(r#"{"version":2,"license":"Apache-2.0"}"#),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["version"], "1.0");
        assert_eq!(body["license"], "Apache-2.0");

        let (_, stored) = send(&app, Method::GET, "/components?id=1", None).await;
        assert_eq!(stored, body);
    }

    #[tokio::test]
    async fn unsupported_methods_are_405() {
        let app = app();
        create(&app, &lib_a()).await;
        for method in [Method::HEAD, Method::OPTIONS, Method::TRACE] {
            for uri in ["/components", "/components?id=1"] {
                let (status, _) = send(&app, method.clone(), uri, None).await;
                assert_eq!(status, StatusCode::METHOD_NOT_ALLOWED, "{method} {uri}");
            }
        }
    }

    #[tokio::test]
    async fn pretty_output_and_export() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("artifact_pretty.json");
        let config = ServerConfig {
            pretty_json: true,
            export_path: Some(path.clone()),
            ..ServerConfig::default()
        };
        let app = SbomServer::new(config).router();

        let response = app
            .clone()
            .oneshot(
                Request::builder()
                    .method(Method::POST)
                    .uri("/components")
                    .body(Body::from(lib_a().to_string()))
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::CREATED);
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let text = String::from_utf8(bytes.to_vec()).unwrap();
        assert!(text.starts_with("{\n  \"id\": 1,"), "{text}");

        let exported: Value = serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(exported["name"], "lib-a");

        send(&app, Method::GET, "/components", None).await;
        let exported: Value = serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
        assert!(exported.is_array());

        send(&app, Method::GET, "/components?id=1", None).await;
        let exported: Value = serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(exported["id"], 1);
    }

    #[tokio::test]
    async fn updates_do_not_rewrite_export() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("artifact_pretty.json");
        let config = ServerConfig {
            export_path: Some(path.clone()),
            ..ServerConfig::default()
        };
        let app = SbomServer::new(config).router();
        create(&app, &lib_a()).await;
        let before = std::fs::read_to_string(&path).unwrap();

        let mut replacement = lib_a();
        replacement["name"] = json!("lib-b");
        let (status, _) = send(&app, Method::PUT, "/components?id=1", Some(&replacement.to_string())).await;
        assert_eq!(status, StatusCode::OK);
        let (status, _) =
            send(&app, Method::PATCH, "/components?id=1", Some(r#"{"version":"2.0"}"#)).await;
        assert_eq!(status, StatusCode::OK);

        assert_eq!(std::fs::read_to_string(&path).unwrap(), before);
    }

    #[tokio::test]
    async fn concurrent_posts_get_distinct_ids() {
        let app = app();
        let tasks: Vec<_> = (0..64)
            .map(|i| {
                let app = app.clone();
                tokio::spawn(async move {
                    let mut body = lib_a();
                    body["name"] = json!(format!("lib-{i}"));
                    let (status, created) = create(&app, &body).await;
                    assert_eq!(status, StatusCode::CREATED);
                    created["id"].as_u64().unwrap()
                })
            })
            .collect();

        let mut ids = HashSet::new();
        for task in tasks {
            assert!(ids.insert(task.await.unwrap()));
        }
        assert_eq!(ids.len(), 64);

        let (_, all) = send(&app, Method::GET, "/components", None).await;
        assert_eq!(all.as_array().unwrap().len(), 64);
    }
}

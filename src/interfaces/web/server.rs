use super::{
    AppState, control_light, create_member, delete_member, embedded_assets::WebAssets,
    error_response::ErrorResponse, get_health, list_members, update_member, video_feed,
};
use axum::{
    Router,
    extract::DefaultBodyLimit,
    http::{StatusCode, Uri, header},
    response::{IntoResponse, Response},
    routing::{get, post, put},
};
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::net::TcpListener;
use tower::ServiceBuilder;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing::info;

/// Build the application router with all endpoints
pub fn build_router(state: Arc<AppState>) -> Router {
    Router::new()
        // API endpoints
        .route("/api/health", get(get_health))
        .route("/video_feed", get(video_feed))
        .route("/light", post(control_light))
        // Member endpoints
        .route("/members", get(list_members).post(create_member))
        .route("/members/{id}", put(update_member).delete(delete_member))
        // Serve embedded static files as fallback
        .fallback(static_handler)
        .with_state(state)
        // Add tracing, CORS support and body size limit
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(DefaultBodyLimit::max(64 * 1024))
                .layer(CorsLayer::permissive()),
        )
}

pub async fn create_server(addr: SocketAddr, state: Arc<AppState>) -> anyhow::Result<()> {
    info!("Starting camera members web server...");

    let app = build_router(state);

    // Create TCP listener
    let listener = TcpListener::bind(&addr).await?;

    println!("🌐 Web server started successfully!");
    println!("   URL: http://{addr}");
    println!("   Press Ctrl+C to stop");

    // Run the server
    axum::serve(listener, app)
        .await
        .map_err(|e| anyhow::anyhow!("Server error: {}", e))?;

    Ok(())
}

/// 埋め込まれた静的ファイルを提供するハンドラ
async fn static_handler(uri: Uri) -> Response {
    match WebAssets::lookup(uri.path()) {
        Some(asset) => ([(header::CONTENT_TYPE, asset.content_type)], asset.body).into_response(),
        None => ErrorResponse::new(StatusCode::NOT_FOUND, format!("No such page: {}", uri.path()))
            .into_response(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::camera::{Frame, FrameSource};
    use crate::domain::light::{HardwareError, LightColor, LightDriver};
    use crate::domain::members::{
        Member, MemberDraft, MemberId, MemberRepository, RepositoryError,
    };
    use crate::infrastructure::light::PlaceholderLight;
    use crate::infrastructure::persistence::InMemoryMemberRepository;
    use async_trait::async_trait;
    use axum::body::Body;
    use axum::http::{Method, Request};
    use http_body_util::BodyExt;
    use serde_json::{Value, json};
    use std::time::Duration;
    use tower::ServiceExt;

    struct FixedSource;

    #[async_trait]
    impl FrameSource for FixedSource {
        async fn capture(&self) -> Option<Frame> {
            Some(Frame::new(b"JPEGDATA".to_vec()))
        }
    }

    struct BrokenLight;

    #[async_trait]
    impl LightDriver for BrokenLight {
        fn name(&self) -> &str {
            "broken"
        }

        async fn set_color(&self, _color: LightColor) -> Result<(), HardwareError> {
            Err(HardwareError::Unavailable("relay not responding".to_string()))
        }
    }

    struct UnreachableStore;

    #[async_trait]
    impl MemberRepository for UnreachableStore {
        async fn initialize_schema(&self) -> Result<(), RepositoryError> {
            Err(unreachable_error())
        }

        async fn list(&self) -> Result<Vec<Member>, RepositoryError> {
            Err(unreachable_error())
        }

        async fn create(&self, _draft: &MemberDraft) -> Result<Member, RepositoryError> {
            Err(unreachable_error())
        }

        async fn update(&self, _id: MemberId, _draft: &MemberDraft) -> Result<u64, RepositoryError> {
            Err(unreachable_error())
        }

        async fn delete(&self, _id: MemberId) -> Result<u64, RepositoryError> {
            Err(unreachable_error())
        }
    }

    fn unreachable_error() -> RepositoryError {
        RepositoryError::ConnectionError {
            message: "connection refused".to_string(),
        }
    }

    fn test_router() -> Router {
        router_with(
            Arc::new(InMemoryMemberRepository::new()),
            Arc::new(PlaceholderLight::new()),
        )
    }

    fn router_with(members: Arc<dyn MemberRepository>, light: Arc<dyn LightDriver>) -> Router {
        build_router(Arc::new(AppState::new(
            members,
            Arc::new(FixedSource),
            light,
            Duration::from_millis(500),
        )))
    }

    async fn send(app: &Router, method: Method, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
        let builder = Request::builder().method(method).uri(uri);
        let request = match body {
            Some(body) => builder
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(body.to_string()))
                .unwrap(),
            None => builder.body(Body::empty()).unwrap(),
        };

        let response = app.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        let json = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).unwrap()
        };
        (status, json)
    }

    #[tokio::test]
    async fn test_create_then_list_members() {
        let app = test_router();

        let (status, body) = send(
            &app,
            Method::POST,
            "/members",
            Some(json!({
                "name": "Ana",
                "email": "ana@example.com",
                "phone": "555-0101",
                "position": "Presidenta"
            })),
        )
        .await;
        assert_eq!(status, StatusCode::CREATED);
        assert_eq!(body["message"], "Member added successfully");

        let (status, body) = send(&app, Method::GET, "/members", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(
            body,
            json!([{
                "id": 1,
                "name": "Ana",
                "email": "ana@example.com",
                "phone": "555-0101",
                "position": "Presidenta"
            }])
        );
    }

    #[tokio::test]
    async fn test_created_members_get_unique_ids() {
        let app = test_router();
        for name in ["Ana", "Luis", "Eva"] {
            send(&app, Method::POST, "/members", Some(json!({ "name": name }))).await;
        }

        let (_, body) = send(&app, Method::GET, "/members", None).await;
        let ids: Vec<i64> = body
            .as_array()
            .unwrap()
            .iter()
            .map(|m| m["id"].as_i64().unwrap())
            .collect();
        assert_eq!(ids, vec![1, 2, 3]);
    }

    #[tokio::test]
    async fn test_member_name_is_stored_as_sent() {
        let app = test_router();

        let (status, _) =
            send(&app, Method::POST, "/members", Some(json!({ "name": " Ana " }))).await;
        assert_eq!(status, StatusCode::CREATED);

        let (_, body) = send(&app, Method::GET, "/members", None).await;
        assert_eq!(body[0]["name"], " Ana ");
    }

    #[tokio::test]
    async fn test_update_replaces_all_fields() {
        let app = test_router();
        send(
            &app,
            Method::POST,
            "/members",
            Some(json!({ "name": "Ana", "email": "ana@example.com", "phone": "1", "position": "Vocal" })),
        )
        .await;

        let (status, body) = send(
            &app,
            Method::PUT,
            "/members/1",
            Some(json!({ "name": "Ana María", "email": null, "phone": "2", "position": "Secretaria" })),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["message"], "Member updated successfully");

        let (_, body) = send(&app, Method::GET, "/members", None).await;
        assert_eq!(
            body,
            json!([{ "id": 1, "name": "Ana María", "email": null, "phone": "2", "position": "Secretaria" }])
        );
    }

    #[tokio::test]
    async fn test_delete_existing_and_missing_members() {
        let app = test_router();
        send(&app, Method::POST, "/members", Some(json!({ "name": "Ana" }))).await;

        let (status, body) = send(&app, Method::DELETE, "/members/1", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["message"], "Member deleted successfully");

        let (_, body) = send(&app, Method::GET, "/members", None).await;
        assert_eq!(body, json!([]));

        let (status, body) = send(&app, Method::DELETE, "/members/999", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["message"], "Member deleted successfully");
    }

    #[tokio::test]
    async fn test_invalid_member_bodies_are_rejected() {
        let app = test_router();

        let (status, body) =
            send(&app, Method::POST, "/members", Some(json!({ "name": "   " }))).await;
        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(body["message"], "name must not be empty");

        let (status, _) =
            send(&app, Method::POST, "/members", Some(json!({ "email": "x@example.com" }))).await;
        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);

        let (status, _) = send(
            &app,
            Method::PUT,
            "/members/1",
            Some(json!({ "name": "Ana", "phone": "0".repeat(21) })),
        )
        .await;
        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);

        let (_, body) = send(&app, Method::GET, "/members", None).await;
        assert_eq!(body, json!([]));
    }

    #[tokio::test]
    async fn test_non_integer_member_id_is_not_found() {
        let app = test_router();
        let (status, _) = send(&app, Method::DELETE, "/members/abc", None).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_store_failure_is_internal_error() {
        let app = router_with(Arc::new(UnreachableStore), Arc::new(PlaceholderLight::new()));

        let (status, body) = send(&app, Method::GET, "/members", None).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body["status_code"], 500);

        let (status, _) =
            send(&app, Method::POST, "/members", Some(json!({ "name": "Ana" }))).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[tokio::test]
    async fn test_light_colors() {
        let app = test_router();

        let (status, body) = send(&app, Method::POST, "/light", Some(json!({ "color": "green" }))).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["message"], "Foco cambiado a Verde");

        let (_, body) = send(&app, Method::POST, "/light", Some(json!({ "color": "red" }))).await;
        assert_eq!(body["message"], "Foco cambiado a Rojo");

        let (_, body) = send(&app, Method::POST, "/light", Some(json!({ "color": "blue" }))).await;
        assert_eq!(body["message"], "Color no reconocido");

        let (_, body) = send(&app, Method::POST, "/light", Some(json!({}))).await;
        assert_eq!(body["message"], "Color no reconocido");

        let (_, body) = send(&app, Method::POST, "/light", Some(json!({ "color": 7 }))).await;
        assert_eq!(body["message"], "Color no reconocido");
    }

    #[tokio::test]
    async fn test_light_driver_failure_is_service_unavailable() {
        let app = router_with(Arc::new(InMemoryMemberRepository::new()), Arc::new(BrokenLight));

        let (status, body) = send(&app, Method::POST, "/light", Some(json!({ "color": "red" }))).await;
        assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
        assert!(body["message"].as_str().unwrap().contains("relay not responding"));

        // 認識できない色はドライバーを呼ばない
        let (status, _) = send(&app, Method::POST, "/light", Some(json!({ "color": "blue" }))).await;
        assert_eq!(status, StatusCode::OK);
    }

    #[tokio::test]
    async fn test_video_feed_streams_multipart_chunks() {
        let app = test_router();
        let request = Request::builder()
            .uri("/video_feed")
            .body(Body::empty())
            .unwrap();

        let response = app.oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            response.headers()[header::CONTENT_TYPE],
            "multipart/x-mixed-replace; boundary=frame"
        );

        let mut body = response.into_body();
        for _ in 0..2 {
            let frame = body.frame().await.unwrap().unwrap();
            let data = frame.into_data().unwrap();
            assert_eq!(
                &data[..],
                b"--frame\r\nContent-Type: image/jpeg\r\n\r\nJPEGDATA\r\n"
            );
        }
    }

    #[tokio::test]
    async fn test_index_page_is_served() {
        let app = test_router();
        let request = Request::builder().uri("/").body(Body::empty()).unwrap();

        let response = app.oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        assert!(
            response.headers()[header::CONTENT_TYPE]
                .to_str()
                .unwrap()
                .starts_with("text/html")
        );
    }

    #[tokio::test]
    async fn test_unknown_path_is_not_found() {
        let app = test_router();
        let (status, body) = send(&app, Method::GET, "/nope.txt", None).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["status_code"], 404);
    }

    #[tokio::test]
    async fn test_health_reports_light_driver() {
        let app = test_router();
        let (status, body) = send(&app, Method::GET, "/api/health", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["status"], "ok");
        assert_eq!(body["light_driver"], "placeholder");
    }
}

use queryquill::query::EvaluationState;
use queryquill::web::dist::export;
use queryquill::web::page::{render_page, PageMode};
use queryquill::web::serve::{evaluate_handler, EvaluateRequest, EvaluateResponse};
use queryquill::web::DistOptions;
use std::fs;
use tempfile::TempDir;

#[tokio::test]
async fn test_api_matches_shared_core() {
    let document = r#"{"name":{"first":"Tom","last":"Anderson"}}"#;
    let request = EvaluateRequest {
        document: document.to_string(),
        query: "name.first".to_string(),
    };
    let axum::Json(response) = evaluate_handler(axum::Json(request)).await;

    let state = EvaluationState::new(document.to_string(), "name.first".to_string());
    assert_eq!(response, EvaluateResponse::from_state(&state));
    assert_eq!(response.value, "Tom");
}

#[test]
fn test_response_field_names() {
    let state = EvaluationState::new("{bad".to_string(), "a".to_string());
    let json = serde_json::to_value(EvaluateResponse::from_state(&state)).unwrap();
    let object = json.as_object().unwrap();

    for field in [
        "value",
        "found",
        "documentError",
        "outcome",
        "documentInvalid",
        "showNotFound",
    ] {
        assert!(object.contains_key(field), "missing {}", field);
    }
    assert_eq!(json["outcome"], "invalid");
}

#[test]
fn test_dist_writes_same_page_as_server() {
    let tmp = TempDir::new().unwrap();
    let assets = tmp.path().join("web");
    fs::create_dir_all(assets.join("img")).unwrap();
    fs::write(assets.join("icon.svg"), "<svg/>").unwrap();
    fs::write(assets.join("img/logo.png"), [0x89, b'P', b'N', b'G']).unwrap();

    let out = tmp.path().join("dist");
    export(&DistOptions {
        out_dir: out.clone(),
        assets_dir: assets,
    })
    .unwrap();

    let index = fs::read_to_string(out.join("index.html")).unwrap();
    assert_eq!(index, render_page(&EvaluationState::example(), "web", PageMode::Static));
    assert!(out.join("web/icon.svg").is_file());
    assert_eq!(fs::read(out.join("web/img/logo.png")).unwrap(), [0x89, b'P', b'N', b'G']);
}

mod routing {
    use axum::body::Body;
    use axum::http::{header, Request, StatusCode};
    use axum::response::Response;
    use axum::Router;
    use queryquill::web::serve::{router, AppState};
    use std::path::Path;
    use std::sync::Arc;
    use tempfile::TempDir;
    use tower::ServiceExt;

    fn app(assets: &Path) -> Router {
        router(Arc::new(AppState::new(assets.to_path_buf())))
    }

    fn assets_fixture() -> TempDir {
        let tmp = TempDir::new().unwrap();
        let web = tmp.path().join("web");
        std::fs::create_dir_all(&web).unwrap();
        std::fs::write(web.join("icon.svg"), "<svg/>").unwrap();
        tmp
    }

    async fn send(app: Router, request: Request<Body>) -> Response {
        app.oneshot(request).await.unwrap()
    }

    async fn body_text(response: Response) -> String {
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        String::from_utf8(bytes.to_vec()).unwrap()
    }

    fn post_json(body: String) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri("/api/evaluate")
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body))
            .unwrap()
    }

    fn get(uri: &str) -> Request<Body> {
        Request::builder().uri(uri).body(Body::empty()).unwrap()
    }

    #[tokio::test]
    async fn test_index_serves_live_page() {
        let tmp = assets_fixture();
        let response = send(app(&tmp.path().join("web")), get("/")).await;

        assert_eq!(response.status(), StatusCode::OK);
        let content_type = response.headers()[header::CONTENT_TYPE].to_str().unwrap().to_string();
        assert!(content_type.starts_with("text/html"));
        let html = body_text(response).await;
        assert!(html.contains("<title>GJSON Online</title>"));
        assert!(html.contains("var live = true;"));
    }

    #[tokio::test]
    async fn test_evaluate_route() {
        let tmp = assets_fixture();
        let body = serde_json::json!({"document": r#"{"key":"value"}"#, "query": "key"}).to_string();
        let response = send(app(&tmp.path().join("web")), post_json(body)).await;

        assert_eq!(response.status(), StatusCode::OK);
        let json: serde_json::Value = serde_json::from_str(&body_text(response).await).unwrap();
        assert_eq!(json["value"], "value");
        assert_eq!(json["outcome"], "found");
    }

    #[tokio::test]
    async fn test_malformed_evaluate_body_is_rejected() {
        let tmp = assets_fixture();
        let response = send(app(&tmp.path().join("web")), post_json("{not json".to_string())).await;
        assert!(response.status().is_client_error());

        let no_content_type = Request::builder()
            .method("POST")
            .uri("/api/evaluate")
            .body(Body::from(r#"{"document":"{}","query":""}"#))
            .unwrap();
        let response = send(app(&tmp.path().join("web")), no_content_type).await;
        assert!(response.status().is_client_error());
    }

    #[tokio::test]
    async fn test_deeply_nested_document_keeps_server_alive() {
        let tmp = assets_fixture();
        let app = app(&tmp.path().join("web"));
        let body = serde_json::json!({"document": "[".repeat(200_000), "query": "a"}).to_string();

        let response = send(app.clone(), post_json(body)).await;
        assert_eq!(response.status(), StatusCode::OK);
        let json: serde_json::Value = serde_json::from_str(&body_text(response).await).unwrap();
        assert_eq!(json["documentInvalid"], true);
        assert!(json["documentError"].as_str().unwrap().contains("nesting too deep"));

        let body = serde_json::json!({"document": "[1]", "query": "0"}).to_string();
        let response = send(app, post_json(body)).await;
        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn test_asset_route_statuses() {
        let tmp = assets_fixture();
        let assets = tmp.path().join("web");

        let response = send(app(&assets), get("/web/icon.svg")).await;
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(response.headers()[header::CONTENT_TYPE], "image/svg+xml");
        assert_eq!(body_text(response).await, "<svg/>");

        let response = send(app(&assets), get("/web/missing.png")).await;
        assert_eq!(response.status(), StatusCode::NOT_FOUND);

        let response = send(app(&assets), get("/web/..%2FCargo.toml")).await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let response = send(app(&assets), get("/elsewhere/icon.svg")).await;
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }
}

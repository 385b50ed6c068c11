mod common;

use std::time::Duration;

use axum::http::{Method, StatusCode};
use axum::routing::get;
use axum::Router;
use common::{serve, MockApi};
use portal_client::session::{SESSION_ARTIFACTS, SESSION_KEY, USER_ID_KEY, USER_KEY};
use portal_client::types::AgendaItem;
use portal_client::{
    ApiError, FetchState, HttpClient, NetworkFailure, RequestBody, RequestOptions, Session,
};
use reqwest::header::{HeaderName, HeaderValue};
use serde_json::{json, Value};

fn empty_list() -> (StatusCode, Value) {
    (StatusCode::OK, json!({ "success": true, "data": [] }))
}

#[tokio::test]
async fn bearer_token_is_attached_only_when_stored() {
    let api = MockApi::start(|_| empty_list()).await;
    let session = Session::in_memory();
    let client = api.client(session.clone());

    client
        .get::<Vec<AgendaItem>>("/api/agenda", RequestOptions::default())
        .await
        .unwrap();
    assert_eq!(api.last_request().header("authorization"), None);

    session.set_token("jwt-123");
    client
        .get::<Vec<AgendaItem>>("/api/agenda", RequestOptions::default())
        .await
        .unwrap();
    assert_eq!(
        api.last_request().header("authorization"),
        Some("Bearer jwt-123")
    );
}

#[tokio::test]
async fn caller_cors_headers_are_stripped() {
    let api = MockApi::start(|_| empty_list()).await;
    let client = api.client(Session::in_memory());

    let options = RequestOptions::default()
        .with_header(
            HeaderName::from_static("access-control-allow-origin"),
            HeaderValue::from_static("*"),
        )
        .with_header(
            HeaderName::from_static("x-client"),
            HeaderValue::from_static("portal"),
        );
    client
        .get::<Vec<AgendaItem>>("/api/agenda", options)
        .await
        .unwrap();

    let request = api.last_request();
    assert_eq!(request.header("access-control-allow-origin"), None);
    assert_eq!(request.header("x-client"), Some("portal"));
}

#[tokio::test]
async fn mutating_verbs_force_json_unless_binary() {
    let api = MockApi::start(|_| (StatusCode::OK, json!({ "success": true }))).await;
    let client = api.client(Session::in_memory());

    let text_plain = RequestOptions::default().with_header(
        HeaderName::from_static("content-type"),
        HeaderValue::from_static("text/plain"),
    );
    client
        .post::<Value>(
            "/api/faqs",
            Some(RequestBody::Json(json!({ "pergunta": "?" }))),
            text_plain,
        )
        .await
        .unwrap();
    let request = api.last_request();
    assert_eq!(request.header("content-type"), Some("application/json"));
    assert_eq!(request.json(), json!({ "pergunta": "?" }));

    client
        .patch::<Value>(
            "/api/faqs/4",
            Some(RequestBody::Json(json!({ "ativo": false }))),
            RequestOptions::default(),
        )
        .await
        .unwrap();
    let request = api.last_request();
    assert_eq!(request.method, Method::PATCH);
    assert_eq!(request.uri.path(), "/api/faqs/4");
    assert_eq!(request.header("content-type"), Some("application/json"));
    assert_eq!(request.json(), json!({ "ativo": false }));

    client
        .put::<Value>(
            "/api/squads/1/logo",
            Some(RequestBody::Binary(vec![0x89, 0x50, 0x4e, 0x47])),
            RequestOptions::default(),
        )
        .await
        .unwrap();
    let request = api.last_request();
    assert_eq!(request.header("content-type"), None);
    assert_eq!(request.body.as_ref(), &[0x89, 0x50, 0x4e, 0x47]);

    let form = reqwest::multipart::Form::new().text("titulo", "Logo");
    client
        .post::<Value>(
            "/api/squads/1/logo",
            Some(RequestBody::Multipart(form)),
            RequestOptions::default(),
        )
        .await
        .unwrap();
    assert!(api
        .last_request()
        .header("content-type")
        .unwrap()
        .starts_with("multipart/form-data"));

    client
        .get::<Value>("/api/faqs", RequestOptions::default())
        .await
        .unwrap();
    assert_eq!(api.last_request().header("content-type"), None);
}

#[tokio::test]
async fn unauthorized_clears_session_and_resolves() {
    let api = MockApi::start(|_| {
        (
            StatusCode::UNAUTHORIZED,
            json!({ "success": false, "message": "Token expirado" }),
        )
    })
    .await;
    let session = Session::in_memory();
    session.set_token("stale");
    session.set(USER_ID_KEY, "42");
    session.set(USER_KEY, r#"{"id":42}"#);
    session.set(SESSION_KEY, "abc");
    let client = api.client(session.clone());

    let response = client
        .get::<Vec<AgendaItem>>("/api/agenda/all", RequestOptions::authenticated())
        .await
        .expect("4xx resolves");
    assert_eq!(response.status, 401);
    assert!(!response.envelope.success);

    for key in SESSION_ARTIFACTS {
        assert_eq!(session.get(key), None, "{key} should be cleared");
    }

    // the next call goes out without a token
    let err = client.agenda().list_all().await.unwrap_err();
    assert!(matches!(err, ApiError::Rejected { status: 401, .. }));
    assert_eq!(api.last_request().header("authorization"), None);
}

#[tokio::test]
async fn client_errors_resolve_with_envelope() {
    let api = MockApi::start(|_| {
        (
            StatusCode::NOT_FOUND,
            json!({ "success": false, "message": "Notícia não encontrada" }),
        )
    })
    .await;
    let client = api.client(Session::in_memory());

    let response = client
        .get::<Value>("/api/noticias/99", RequestOptions::default())
        .await
        .unwrap();
    assert_eq!(response.status, 404);
    assert_eq!(
        response.envelope.message.as_deref(),
        Some("Notícia não encontrada")
    );
}

#[tokio::test]
async fn server_errors_reject() {
    let api = MockApi::start(|_| {
        (
            StatusCode::SERVICE_UNAVAILABLE,
            json!({ "success": false, "message": "Banco indisponível" }),
        )
    })
    .await;
    let client = api.client(Session::in_memory());

    let err = client.squads().list().await.unwrap_err();
    match err {
        ApiError::Server { status, message } => {
            assert_eq!(status, 503);
            assert_eq!(message.as_deref(), Some("Banco indisponível"));
        }
        other => panic!("unexpected {other:?}"),
    }
}

#[tokio::test]
async fn unreachable_host_is_a_network_error() {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let client = HttpClient::new(format!("http://{addr}"), Session::in_memory()).unwrap();
    let err = client.agenda().list().await.unwrap_err();

    assert!(err.is_network());
    assert!(matches!(
        err,
        ApiError::Network {
            kind: NetworkFailure::Connect,
            ..
        }
    ));
    assert_eq!(err.status(), None);
}

#[tokio::test]
async fn hanging_request_fails_within_timeout() {
    let app = Router::new().route(
        "/api/agenda",
        get(|| async {
            tokio::time::sleep(Duration::from_secs(60)).await;
            "never"
        }),
    );
    let base_url = serve(app).await;
    let client =
        HttpClient::with_timeout(base_url, Session::in_memory(), Duration::from_millis(200))
            .unwrap();

    let mut state = FetchState::<Vec<AgendaItem>>::default();
    state.begin();
    assert!(state.is_loading());

    let result = tokio::time::timeout(Duration::from_secs(5), client.agenda().list())
        .await
        .expect("client timeout fires first");
    let err = result.as_ref().unwrap_err();
    assert!(matches!(
        err,
        ApiError::Network {
            kind: NetworkFailure::Timeout,
            ..
        }
    ));

    state.resolve(result.map_err(|e| e.user_message()));
    assert!(!state.is_loading());
    assert!(state.error().is_some());
}

#[tokio::test]
async fn non_json_body_is_a_decode_error() {
    let app = Router::new().route("/api/faqs", get(|| async { "<html>oops</html>" }));
    let client = HttpClient::new(serve(app).await, Session::in_memory()).unwrap();

    let err = client.faqs().list(&Default::default()).await.unwrap_err();
    assert!(matches!(err, ApiError::Decode { status: 200, .. }));
}

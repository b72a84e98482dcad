use std::net::SocketAddr;

use axum::body::{to_bytes, Body};
use axum::http::{Request, StatusCode};
use serde_json::{json, Value};
use tokio::net::TcpListener;
use tower::ServiceExt;

use server::startup;

fn sqlite_config() -> configs::AppConfig {
    let mut cfg = configs::parse("[database]\nurl = \"sqlite::memory:\"").expect("valid toml");
    cfg.normalize_and_validate().expect("valid config");
    cfg
}

async fn call(app: &axum::Router, method: &str, uri: &str, body: Option<Value>) -> anyhow::Result<(StatusCode, Value)> {
    let mut req = Request::builder().method(method).uri(uri);
    let body = match body {
        Some(v) => {
            req = req.header("content-type", "application/json");
            Body::from(serde_json::to_vec(&v)?)
        }
        None => Body::empty(),
    };
    let resp = app.clone().oneshot(req.body(body)?).await?;
    let status = resp.status();
    let bytes = to_bytes(resp.into_body(), usize::MAX).await?;
    let value = if bytes.is_empty() { Value::Null } else { serde_json::from_slice(&bytes)? };
    Ok((status, value))
}

/// The five reference scenarios against the SeaORM repository on sqlite.
#[tokio::test]
async fn directory_scenarios_on_sqlite() -> anyhow::Result<()> {
    let state = startup::build_state(&sqlite_config()).await?;
    let app = startup::build_app(state);

    let (status, body) = call(&app, "GET", "/users", None).await?;
    assert_eq!((status, body), (StatusCode::OK, json!([])));

    let (status, created) = call(&app, "POST", "/users", Some(json!({"username": "alice", "email": "a@x.com", "role": "student"}))).await?;
    assert_eq!(status, StatusCode::OK);
    let id = created["id"].as_i64().expect("assigned id");
    assert_eq!(id, 1);

    let (status, fetched) = call(&app, "GET", &format!("/users/{id}"), None).await?;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(fetched, created);

    let (status, updated) = call(&app, "PUT", &format!("/users/{id}"), Some(json!({"username": "alice2", "email": "a2@x.com", "role": "admin"}))).await?;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(updated, json!({"id": id, "username": "alice2", "email": "a2@x.com", "role": "admin"}));

    let (status, body) = call(&app, "PUT", "/users/999", Some(json!({"username": "x", "email": "x", "role": "x"}))).await?;
    assert_eq!((status, body), (StatusCode::NOT_FOUND, Value::Null));

    let (status, _) = call(&app, "DELETE", &format!("/users/{id}"), None).await?;
    assert_eq!(status, StatusCode::NO_CONTENT);
    let (status, _) = call(&app, "GET", &format!("/users/{id}"), None).await?;
    assert_eq!(status, StatusCode::NOT_FOUND);
    Ok(())
}

#[tokio::test]
async fn serves_over_tcp() -> anyhow::Result<()> {
    let state = startup::build_state(&sqlite_config()).await?;
    let app = startup::build_app(state);
    let listener = TcpListener::bind((std::net::Ipv4Addr::LOCALHOST, 0)).await?;
    let addr: SocketAddr = listener.local_addr()?;
    tokio::spawn(async move {
        if let Err(e) = axum::serve(listener, app).await { eprintln!("server error: {}", e); }
    });

    let mut stream = tokio::net::TcpStream::connect(addr).await?;
    use tokio::io::{AsyncReadExt, AsyncWriteExt};
    stream
        .write_all(b"GET /health HTTP/1.1\r\nHost: localhost\r\nConnection: close\r\n\r\n")
        .await?;
    let mut raw = Vec::new();
    stream.read_to_end(&mut raw).await?;
    let text = String::from_utf8_lossy(&raw);
    assert!(text.starts_with("HTTP/1.1 200"), "unexpected response: {text}");
    assert!(text.contains(r#"{"status":"ok"}"#));
    Ok(())
}

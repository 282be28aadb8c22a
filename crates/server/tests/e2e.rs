use std::net::SocketAddr;
use std::path::PathBuf;

use axum::Router;
use configs::{CorsConfig, DatabaseConfig};
use reqwest::StatusCode as HttpStatusCode;
use serde_json::json;
use tokio::net::TcpListener;
use uuid::Uuid;

use server::{routes, startup::build_cors, state::ServerState};

struct TestApp {
    base_url: String,
    data_dir: PathBuf,
}

impl TestApp {
    async fn cleanup(self) -> anyhow::Result<()> {
        tokio::fs::remove_dir_all(&self.data_dir).await?;
        Ok(())
    }
}

async fn start_server(origins: Vec<String>) -> anyhow::Result<TestApp> {
    // Use an isolated SQLite file per test, removed by `cleanup`
    let data_dir = std::env::temp_dir().join(format!("dict-e2e-{}", Uuid::new_v4()));
    let cfg = DatabaseConfig::with_url(format!("sqlite://{}?mode=rwc", data_dir.join("words.db").display()));
    common::env::ensure_db_dir(cfg.sqlite_file_path().as_deref()).await?;
    let db = models::db::connect_and_migrate(&cfg).await?;

    let cors = build_cors(&CorsConfig { allowed_origins: origins })?;
    let app: Router = routes::build_router(ServerState::new(db), cors);
    let listener = TcpListener::bind((std::net::Ipv4Addr::LOCALHOST, 0)).await?;
    let addr: SocketAddr = listener.local_addr()?;
    let base_url = format!("http://{}:{}", addr.ip(), addr.port());

    tokio::spawn(async move {
        if let Err(e) = axum::serve(listener, app).await { eprintln!("server error: {}", e); }
    });

    Ok(TestApp { base_url, data_dir })
}

#[tokio::test]
async fn e2e_crud_over_http() -> anyhow::Result<()> {
    let app = start_server(vec![]).await?;
    let c = reqwest::Client::new();

    let res = c.get(format!("{}/", app.base_url)).send().await?;
    assert_eq!(res.status(), HttpStatusCode::OK);

    let res = c.post(format!("{}/words/", app.base_url))
        .json(&json!({"word": "ziman", "english": "language", "kurmanji": "ziman"}))
        .send().await?;
    assert_eq!(res.status(), HttpStatusCode::CREATED);
    let created = res.json::<serde_json::Value>().await?;
    let id = created["id"].as_i64().unwrap_or_default();
    assert!(id > 0);

    let res = c.put(format!("{}/words/{}", app.base_url, id))
        .json(&json!({"word": "ziman", "english": "tongue"}))
        .send().await?;
    assert_eq!(res.status(), HttpStatusCode::OK);

    let list = c.get(format!("{}/words/", app.base_url)).send().await?.json::<serde_json::Value>().await?;
    assert_eq!(list[0]["english"], "tongue");
    assert_eq!(list[0]["kurmanji"], "");

    let res = c.delete(format!("{}/words/{}", app.base_url, id)).send().await?;
    assert_eq!(res.status(), HttpStatusCode::OK);
    let res = c.delete(format!("{}/words/{}", app.base_url, id)).send().await?;
    assert_eq!(res.status(), HttpStatusCode::NOT_FOUND);
    app.cleanup().await
}

#[tokio::test]
async fn e2e_cors_allows_only_configured_origin() -> anyhow::Result<()> {
    let app = start_server(vec!["http://localhost:3000".into()]).await?;
    let c = reqwest::Client::new();

    let res = c.get(format!("{}/words/", app.base_url))
        .header("Origin", "http://localhost:3000")
        .send().await?;
    assert_eq!(
        res.headers().get("access-control-allow-origin").and_then(|v| v.to_str().ok()),
        Some("http://localhost:3000")
    );

    let res = c.get(format!("{}/words/", app.base_url))
        .header("Origin", "http://evil.example")
        .send().await?;
    assert!(res.headers().get("access-control-allow-origin").is_none());
    app.cleanup().await
}

#![allow(dead_code)]

use chrono::NaiveDate;
use pmsafety_dashboard::{build_dashboard_router, DashboardState};
use pmsafety_server::{build_router, with_request_tracing, AppState, RequestIds, ServerConfig};
use pmsafety_store::{FixedClock, StaticStore};
use std::path::PathBuf;
use std::sync::Arc;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;

pub fn fixed_today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 3, 1).expect("valid date")
}

/// Config pointing the SPA at a directory that does not exist.
pub fn api_only_config() -> ServerConfig {
    ServerConfig {
        static_dir: PathBuf::from("/nonexistent/pmsafety-static"),
        ..ServerConfig::default()
    }
}

pub async fn spawn_app(config: ServerConfig) -> std::net::SocketAddr {
    let state = AppState::with_config(
        Arc::new(StaticStore::new()),
        Arc::new(FixedClock(fixed_today())),
        config,
    );
    let app = build_router(state);
    let listener = TcpListener::bind("127.0.0.1:0").await.expect("bind listener");
    let addr = listener.local_addr().expect("local addr");
    tokio::spawn(async move {
        axum::serve(listener, app).await.expect("serve app");
    });
    addr
}

pub async fn spawn_api() -> std::net::SocketAddr {
    spawn_app(api_only_config()).await
}

/// The dashboard router wrapped the way its binary wraps it.
pub async fn spawn_dashboard() -> std::net::SocketAddr {
    let app = with_request_tracing(
        build_dashboard_router(DashboardState::new(Arc::new(StaticStore::new()))),
        RequestIds::default(),
    );
    let listener = TcpListener::bind("127.0.0.1:0").await.expect("bind listener");
    let addr = listener.local_addr().expect("local addr");
    tokio::spawn(async move {
        axum::serve(listener, app).await.expect("serve dashboard");
    });
    addr
}

pub async fn send_raw(
    addr: std::net::SocketAddr,
    path: &str,
    headers: &[(&str, &str)],
) -> (u16, String, String) {
    send_raw_with_method(addr, "GET", path, headers).await
}

pub async fn send_raw_with_method(
    addr: std::net::SocketAddr,
    method: &str,
    path: &str,
    headers: &[(&str, &str)],
) -> (u16, String, String) {
    let mut stream = tokio::net::TcpStream::connect(addr)
        .await
        .expect("connect server");
    let mut req = format!("{method} {path} HTTP/1.1\r\nHost: {addr}\r\nConnection: close\r\n");
    for (k, v) in headers {
        req.push_str(&format!("{k}: {v}\r\n"));
    }
    req.push_str("\r\n");
    stream
        .write_all(req.as_bytes())
        .await
        .expect("write request");
    let mut response = String::new();
    stream
        .read_to_string(&mut response)
        .await
        .expect("read response");
    let (head, body) = response
        .split_once("\r\n\r\n")
        .expect("http response must have separator");
    let status = head
        .lines()
        .next()
        .and_then(|line| line.split_whitespace().nth(1))
        .and_then(|s| s.parse::<u16>().ok())
        .expect("http status");
    (status, head.to_string(), body.to_string())
}

pub fn header_value(head: &str, name: &str) -> Option<String> {
    head.lines().skip(1).find_map(|line| {
        let (k, v) = line.split_once(':')?;
        k.trim()
            .eq_ignore_ascii_case(name)
            .then(|| v.trim().to_string())
    })
}

pub fn json(body: &str) -> serde_json::Value {
    serde_json::from_str(body).expect("json body")
}

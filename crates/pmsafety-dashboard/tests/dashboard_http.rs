use pmsafety_dashboard::{build_dashboard_router, DashboardState};
use pmsafety_store::StaticStore;
use std::sync::Arc;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;

async fn spawn_dashboard() -> std::net::SocketAddr {
    let app = build_dashboard_router(DashboardState::new(Arc::new(StaticStore::new())));
    let listener = TcpListener::bind("127.0.0.1:0").await.expect("bind listener");
    let addr = listener.local_addr().expect("local addr");
    tokio::spawn(async move {
        axum::serve(listener, app).await.expect("serve dashboard");
    });
    addr
}

async fn send_raw(addr: std::net::SocketAddr, path: &str) -> (u16, String, String) {
    let mut stream = tokio::net::TcpStream::connect(addr)
        .await
        .expect("connect server");
    let req = format!("GET {path} HTTP/1.1\r\nHost: {addr}\r\nConnection: close\r\n\r\n");
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

#[tokio::test]
async fn pages_are_served_as_html() {
    let addr = spawn_dashboard().await;
    let (status, head, body) = send_raw(addr, "/drug-safety").await;
    assert_eq!(status, 200);
    assert!(head.to_ascii_lowercase().contains("content-type: text/html"));
    assert!(body.contains("Drug Safety Summary"));
}

#[tokio::test]
async fn unknown_paths_render_overview() {
    let addr = spawn_dashboard().await;
    let (_, _, overview) = send_raw(addr, "/overview").await;
    for path in ["/", "/nowhere", "/drug-safety/extra"] {
        let (status, _, body) = send_raw(addr, path).await;
        assert_eq!(status, 200, "{path}");
        assert_eq!(body, overview, "{path}");
    }
}

#[tokio::test]
async fn dashboard_query_parameter_drives_selection() {
    let addr = spawn_dashboard().await;
    let (_, _, body) = send_raw(addr, "/aibi-dashboards?dashboard=executive-kpis").await;
    assert!(body.contains("Dashboard URL Not Configured"));
    let (_, _, body) = send_raw(addr, "/aibi-dashboards?dashboard=").await;
    assert!(body.contains("Select a Dashboard"));
}

#[tokio::test]
async fn health_endpoint_answers_ok() {
    let addr = spawn_dashboard().await;
    let (status, _, body) = send_raw(addr, "/health").await;
    assert_eq!(status, 200);
    assert_eq!(body, "ok");
}

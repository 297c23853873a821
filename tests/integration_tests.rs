use std::sync::Arc;

use bizedge::error::BizEdgeError;
use bizedge::insights::{fallback_summary, InsightsClient, InsightsResolver, FALLBACK_WARNING};
use bizedge::preferences::PreferenceStore;
use bizedge::theme::{Theme, ThemeController};
use bizedge::util::database::Database;
use tempfile::TempDir;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;
use tokio::sync::oneshot;

const LIVE_BODY: &str = r#"{
    "top_products": [
        {"name": "Receipt Printer", "qty": 12, "revenue": 96000},
        {"name": "Cash Drawer", "qty": 5, "revenue": 25000}
    ],
    "low_stock": [
        {"id": "7", "name": "Ink Ribbon", "low_stock_threshold": 4}
    ],
    "totals": {"sales": 200000, "purchase": 150000, "profit": 50000}
}"#;

/// Serves exactly one HTTP response and reports the request line it saw.
async fn serve_once(status: &'static str, body: &'static str) -> (String, oneshot::Receiver<String>) {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let (tx, rx) = oneshot::channel();

    tokio::spawn(async move {
        let (mut socket, _) = listener.accept().await.unwrap();

        let mut request = Vec::new();
        let mut chunk = [0u8; 1024];
        while !request.windows(4).any(|w| w == b"\r\n\r\n") {
            let n = socket.read(&mut chunk).await.unwrap();
            if n == 0 {
                break;
            }
            request.extend_from_slice(&chunk[..n]);
        }
        let request_line = String::from_utf8_lossy(&request)
            .lines()
            .next()
            .unwrap_or_default()
            .to_string();
        let _ = tx.send(request_line);

        let response = format!(
            "HTTP/1.1 {}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
            status,
            body.len(),
            body
        );
        socket.write_all(response.as_bytes()).await.unwrap();
        let _ = socket.shutdown().await;
    });

    (format!("http://{}", addr), rx)
}

fn direct_client() -> InsightsClient {
    InsightsClient::with_client(reqwest::Client::builder().no_proxy().build().unwrap())
}

#[tokio::test]
async fn test_live_insights_are_returned_as_is() {
    let (base, request) = serve_once("200 OK", LIVE_BODY).await;
    let resolver = InsightsResolver::new(direct_client(), Some(base.clone()));

    let resolution = resolver.resolve(None).await;

    assert_eq!(request.await.unwrap(), "GET /api/insights HTTP/1.1");
    assert!(resolution.is_live());
    assert_eq!(resolution.warning, None);
    assert_eq!(resolution.base_url, base);

    let summary = &resolution.summary;
    assert_eq!(summary.top_products.len(), 2);
    assert_eq!(summary.top_products[0].name, "Receipt Printer");
    assert_eq!(summary.top_products[1].quantity_sold, 5);
    assert_eq!(summary.low_stock_items[0].stock_quantity, None);
    assert_eq!(summary.totals.sales, 200000.0);

    let metrics = resolution.metrics();
    assert_eq!(metrics.profit_margin_pct, 25);
    assert_eq!(metrics.sales_achievement_pct, 100);
}

#[tokio::test]
async fn test_explicit_base_overrides_configured() {
    let (base, request) = serve_once("200 OK", LIVE_BODY).await;
    let resolver = InsightsResolver::new(direct_client(), Some("http://127.0.0.1:9".to_string()));

    let resolution = resolver.resolve(Some(&format!("{}/", base))).await;

    assert_eq!(request.await.unwrap(), "GET /api/insights HTTP/1.1");
    assert!(resolution.is_live());
}

#[tokio::test]
async fn test_server_error_falls_back() {
    let (base, _request) = serve_once("500 Internal Server Error", r#"{"detail": "boom"}"#).await;
    let resolver = InsightsResolver::new(direct_client(), None);

    let resolution = resolver.resolve(Some(&base)).await;

    assert_eq!(resolution.summary, fallback_summary());
    assert_eq!(resolution.warning.as_deref(), Some(FALLBACK_WARNING));
}

#[tokio::test]
async fn test_malformed_body_falls_back() {
    let (base, _request) = serve_once("200 OK", r#"{"totals": "soon"}"#).await;
    let resolver = InsightsResolver::new(direct_client(), None);

    let resolution = resolver.resolve(Some(&base)).await;

    assert!(!resolution.is_live());
    assert_eq!(resolution.summary, fallback_summary());
    assert_eq!(resolution.metrics().profit_margin_pct, 34);
}

#[tokio::test]
async fn test_client_reports_failure_kinds() {
    let (base, _request) = serve_once("404 Not Found", "{}").await;
    let result = direct_client().fetch(&base).await;
    assert!(matches!(result, Err(BizEdgeError::Status(status)) if status.as_u16() == 404));

    let (base, _request) = serve_once("200 OK", "not json").await;
    let result = direct_client().fetch(&base).await;
    assert!(matches!(result, Err(BizEdgeError::Parse(_))));
}

#[test]
fn test_theme_survives_restart() {
    let temp_dir = TempDir::new().unwrap();
    let db_path = temp_dir.path().join("db").join("bizedge.db");

    {
        let store: Arc<dyn PreferenceStore> = Arc::new(Database::open(&db_path).unwrap());
        let mut theme = ThemeController::load(store);
        assert_eq!(theme.theme(), Theme::Light);
        theme.toggle();
    }

    let store: Arc<dyn PreferenceStore> = Arc::new(Database::open(&db_path).unwrap());
    assert_eq!(store.get("theme").unwrap().as_deref(), Some("dark"));
    assert_eq!(ThemeController::load(store).theme(), Theme::Dark);
}

mod common;

use common::{MockHttpServer, closed_port_url};
use crypto_liquidity::domain::errors::{DirectoryError, PredictionError};
use crypto_liquidity::domain::form::PredictionRequest;
use crypto_liquidity::domain::ports::{CoinDirectoryProvider, PredictionService};
use crypto_liquidity::infrastructure::coingecko::CoinGeckoDirectory;
use crypto_liquidity::infrastructure::http_client_factory::HttpClientFactory;
use crypto_liquidity::infrastructure::prediction_api::HttpPredictionService;
use std::time::Duration;
use tokio_test::{assert_err, assert_ok};

fn client() -> reqwest::Client {
    HttpClientFactory::create_client(Duration::from_secs(5), Duration::from_secs(2))
}

fn sample_request() -> PredictionRequest {
    PredictionRequest {
        price: 100.0,
        price_1h: 101.0,
        price_24h: 95.0,
        price_7d: 90.0,
        volume_24h: 5_000_000.0,
        market_cap: 2_000_000_000.0,
    }
}

async fn predict_against(status: u16, body: &str) -> Result<serde_json::Value, PredictionError> {
    let server = MockHttpServer::start(status, body).await;
    let service = HttpPredictionService::new(client(), &server.base_url());
    service
        .predict(&sample_request())
        .await
        .map(|result| serde_json::to_value(result).unwrap())
}

#[tokio::test]
async fn test_posts_six_numeric_fields_to_predict() {
    let server = MockHttpServer::start(
        200,
        r#"{"liquidity_level":"High","confidence_score":87,"investment_advice":"Buy"}"#,
    )
    .await;
    let service = HttpPredictionService::new(client(), &server.base_url());

    let result = assert_ok!(service.predict(&sample_request()).await);
    assert_eq!(result.liquidity_level.as_deref(), Some("High"));
    assert_eq!(result.confidence_score, Some(87.0));
    assert_eq!(result.investment_advice.as_deref(), Some("Buy"));

    let requests = server.requests();
    assert_eq!(requests.len(), 1);
    assert_eq!(requests[0].method, "POST");
    assert_eq!(requests[0].path, "/predict");

    let body = requests[0].json();
    let object = body.as_object().unwrap();
    assert_eq!(object.len(), 6);
    assert_eq!(object["price"].as_f64(), Some(100.0));
    assert_eq!(object["price_1h"].as_f64(), Some(101.0));
    assert_eq!(object["price_24h"].as_f64(), Some(95.0));
    assert_eq!(object["price_7d"].as_f64(), Some(90.0));
    assert_eq!(object["volume_24h"].as_f64(), Some(5_000_000.0));
    assert_eq!(object["market_cap"].as_f64(), Some(2_000_000_000.0));
}

#[tokio::test]
async fn test_http_500_is_server_fault() {
    let err = assert_err!(predict_against(500, r#"{"error":"model crashed"}"#).await);
    assert_eq!(err, PredictionError::ServerFault);
}

#[tokio::test]
async fn test_http_405_is_method_not_allowed() {
    let err = assert_err!(predict_against(405, "").await);
    assert_eq!(err, PredictionError::MethodNotAllowed);
}

#[tokio::test]
async fn test_http_400_passes_server_message_through() {
    let err = assert_err!(predict_against(400, r#"{"error":"market_cap must be positive"}"#).await);
    assert_eq!(err.to_string(), "market_cap must be positive");
}

#[tokio::test]
async fn test_http_400_without_error_field_is_generic() {
    let err = assert_err!(predict_against(400, r#"{"detail":"bad"}"#).await);
    assert_eq!(err, PredictionError::Status { code: 400 });
}

#[tokio::test]
async fn test_other_status_is_generic() {
    let err = assert_err!(predict_against(503, "").await);
    assert_eq!(err, PredictionError::Status { code: 503 });
    assert!(err.to_string().contains("503"));
}

#[tokio::test]
async fn test_non_json_success_is_malformed() {
    let err = assert_err!(predict_against(200, "<html>ok</html>").await);
    assert!(matches!(err, PredictionError::MalformedResponse { .. }));
}

#[tokio::test]
async fn test_no_backend_is_unreachable() {
    let service = HttpPredictionService::new(client(), &closed_port_url().await);
    let err = assert_err!(service.predict(&sample_request()).await);
    assert!(matches!(err, PredictionError::Unreachable { .. }));
    assert!(err.to_string().contains("backend"));
}

#[tokio::test]
async fn test_bad_url_is_request_setup_error() {
    let service = HttpPredictionService::new(client(), "not a url");
    let err = assert_err!(service.predict(&sample_request()).await);
    assert!(matches!(err, PredictionError::RequestSetup { .. }));
}

#[tokio::test]
async fn test_trending_directory_over_http() {
    let server = MockHttpServer::start(
        200,
        r#"{"coins":[{"item":{"id":"bitcoin","name":"Bitcoin","symbol":"BTC"}},{"item":{"id":"sui","name":"Sui","symbol":"SUI","score":3}}]}"#,
    )
    .await;
    let directory = CoinGeckoDirectory::new(client(), format!("{}/search/trending", server.base_url()));

    let coins = assert_ok!(directory.fetch_trending().await);
    assert_eq!(coins.len(), 2);
    assert_eq!(coins[1].id, "sui");
    assert_eq!(server.requests()[0].method, "GET");
    assert_eq!(server.requests()[0].path, "/search/trending");
}

#[tokio::test]
async fn test_trending_directory_failures() {
    let server = MockHttpServer::start(429, r#"{"status":{"error_code":429}}"#).await;
    let directory = CoinGeckoDirectory::new(client(), server.base_url());
    let err = assert_err!(directory.fetch_trending().await);
    assert_eq!(err, DirectoryError::Status { code: 429 });

    let garbage = MockHttpServer::start(200, r#"{"nfts":[]}"#).await;
    let directory = CoinGeckoDirectory::new(client(), garbage.base_url());
    let err = assert_err!(directory.fetch_trending().await);
    assert!(matches!(err, DirectoryError::Malformed { .. }));

    let directory = CoinGeckoDirectory::new(client(), closed_port_url().await);
    let err = assert_err!(directory.fetch_trending().await);
    assert!(matches!(err, DirectoryError::Unreachable { .. }));
}

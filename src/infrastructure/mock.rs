use crate::domain::coin::Coin;
use crate::domain::errors::{DirectoryError, PredictionError};
use crate::domain::form::PredictionRequest;
use crate::domain::ports::{CoinDirectoryProvider, PredictionService};
use crate::domain::prediction::PredictionResult;
use async_trait::async_trait;
use std::sync::{Arc, Mutex};
use std::time::Duration;
use tracing::info;

#[derive(Clone)]
pub struct MockCoinDirectory {
    outcome: Result<Vec<Coin>, DirectoryError>,
    latency: Duration,
}

impl MockCoinDirectory {
    pub fn new(coins: Vec<Coin>) -> Self {
        Self {
            outcome: Ok(coins),
            latency: Duration::ZERO,
        }
    }

    pub fn failing(error: DirectoryError) -> Self {
        Self {
            outcome: Err(error),
            latency: Duration::ZERO,
        }
    }

    pub fn with_latency(mut self, latency: Duration) -> Self {
        self.latency = latency;
        self
    }
}

impl Default for MockCoinDirectory {
    fn default() -> Self {
        Self::new(vec![
            Coin::new("bitcoin", "Bitcoin", "btc"),
            Coin::new("ethereum", "Ethereum", "eth"),
            Coin::new("solana", "Solana", "sol"),
            Coin::new("pepe", "Pepe", "pepe"),
            Coin::new("dogwifcoin", "dogwifhat", "wif"),
        ])
    }
}

#[async_trait]
impl CoinDirectoryProvider for MockCoinDirectory {
    async fn fetch_trending(&self) -> Result<Vec<Coin>, DirectoryError> {
        if !self.latency.is_zero() {
            tokio::time::sleep(self.latency).await;
        }
        self.outcome.clone()
    }
}

#[derive(Clone)]
enum Script {
    Fixed(Result<PredictionResult, PredictionError>),
    Heuristic,
}

/// Offline prediction backend. Records every request it receives.
#[derive(Clone)]
pub struct MockPredictionService {
    script: Script,
    latency: Duration,
    requests: Arc<Mutex<Vec<PredictionRequest>>>,
}

impl MockPredictionService {
    pub fn new(outcome: Result<PredictionResult, PredictionError>) -> Self {
        Self {
            script: Script::Fixed(outcome),
            latency: Duration::ZERO,
            requests: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Answers from a turnover/momentum rule of thumb so the UI is usable
    /// without a backend.
    pub fn heuristic() -> Self {
        Self {
            script: Script::Heuristic,
            latency: Duration::from_millis(400),
            requests: Arc::new(Mutex::new(Vec::new())),
        }
    }

    pub fn with_latency(mut self, latency: Duration) -> Self {
        self.latency = latency;
        self
    }

    pub fn requests(&self) -> Vec<PredictionRequest> {
        self.requests
            .lock()
            .map(|requests| requests.clone())
            .unwrap_or_default()
    }
}

#[async_trait]
impl PredictionService for MockPredictionService {
    async fn predict(
        &self,
        request: &PredictionRequest,
    ) -> Result<PredictionResult, PredictionError> {
        if let Ok(mut requests) = self.requests.lock() {
            requests.push(*request);
        }
        if !self.latency.is_zero() {
            tokio::time::sleep(self.latency).await;
        }

        match &self.script {
            Script::Fixed(outcome) => outcome.clone(),
            Script::Heuristic => heuristic_prediction(request),
        }
    }
}

fn heuristic_prediction(request: &PredictionRequest) -> Result<PredictionResult, PredictionError> {
    if request.market_cap <= 0.0 || request.price_24h <= 0.0 {
        return Err(PredictionError::Rejected {
            message: "market_cap and price_24h must be positive".to_string(),
        });
    }

    let turnover = request.volume_24h / request.market_cap;
    let momentum = (request.price - request.price_24h) / request.price_24h;

    let level = if turnover >= 0.10 {
        "High"
    } else if turnover >= 0.02 {
        "Medium"
    } else {
        "Low"
    };
    let advice = match level {
        "High" if momentum >= 0.0 => "Buy",
        "Low" => "Avoid",
        _ => "Hold",
    };
    let confidence = (55.0 + (turnover * 300.0).min(40.0)).round();

    info!(
        "Mock prediction: turnover {:.4}, momentum {:.4} -> {} / {}",
        turnover, momentum, level, advice
    );

    Ok(PredictionResult {
        liquidity_level: Some(level.to_string()),
        confidence_score: Some(confidence),
        investment_advice: Some(advice.to_string()),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(volume_24h: f64, market_cap: f64, price: f64, price_24h: f64) -> PredictionRequest {
        PredictionRequest {
            price,
            price_1h: price,
            price_24h,
            price_7d: price,
            volume_24h,
            market_cap,
        }
    }

    #[tokio::test]
    async fn test_heuristic_levels() {
        let service = MockPredictionService::heuristic().with_latency(Duration::ZERO);

        let high = service.predict(&request(300.0, 1000.0, 105.0, 100.0)).await.unwrap();
        assert_eq!(high.liquidity_level.as_deref(), Some("High"));
        assert_eq!(high.investment_advice.as_deref(), Some("Buy"));
        assert_eq!(high.confidence_score, Some(95.0));

        let medium = service.predict(&request(50.0, 1000.0, 95.0, 100.0)).await.unwrap();
        assert_eq!(medium.liquidity_level.as_deref(), Some("Medium"));
        assert_eq!(medium.investment_advice.as_deref(), Some("Hold"));

        let low = service.predict(&request(1.0, 1000.0, 95.0, 100.0)).await.unwrap();
        assert_eq!(low.investment_advice.as_deref(), Some("Avoid"));

        assert_eq!(service.requests().len(), 3);
    }

    #[tokio::test]
    async fn test_heuristic_rejects_zero_market_cap() {
        let service = MockPredictionService::heuristic().with_latency(Duration::ZERO);
        let err = service.predict(&request(1.0, 0.0, 1.0, 1.0)).await.unwrap_err();
        assert!(matches!(err, PredictionError::Rejected { .. }));
    }
}

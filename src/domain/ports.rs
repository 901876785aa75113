use crate::domain::coin::Coin;
use crate::domain::errors::{DirectoryError, PredictionError};
use crate::domain::form::PredictionRequest;
use crate::domain::prediction::PredictionResult;
use async_trait::async_trait;

#[async_trait]
pub trait CoinDirectoryProvider: Send + Sync {
    /// Fetch the currently trending coins.
    async fn fetch_trending(&self) -> Result<Vec<Coin>, DirectoryError>;
}

#[async_trait]
pub trait PredictionService: Send + Sync {
    /// Submit one feature payload. A single attempt; never retried.
    async fn predict(&self, request: &PredictionRequest) -> Result<PredictionResult, PredictionError>;
}

use crate::domain::coin::Coin;
use crate::domain::errors::DirectoryError;
use crate::domain::ports::CoinDirectoryProvider;
use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use tracing::info;

pub const DEFAULT_TRENDING_URL: &str = "https://api.coingecko.com/api/v3/search/trending";

#[derive(Debug, Deserialize)]
struct TrendingResponse {
    coins: Vec<TrendingEntry>,
}

#[derive(Debug, Deserialize)]
struct TrendingEntry {
    item: TrendingItem,
}

#[derive(Debug, Deserialize)]
struct TrendingItem {
    id: String,
    name: String,
    symbol: String,
}

impl From<TrendingItem> for Coin {
    fn from(item: TrendingItem) -> Self {
        Coin::new(item.id, item.name, item.symbol)
    }
}

/// Trending coins from CoinGecko's public search endpoint. No authentication.
pub struct CoinGeckoDirectory {
    client: Client,
    url: String,
}

impl CoinGeckoDirectory {
    pub fn new(client: Client, url: impl Into<String>) -> Self {
        Self {
            client,
            url: url.into(),
        }
    }
}

#[async_trait]
impl CoinDirectoryProvider for CoinGeckoDirectory {
    async fn fetch_trending(&self) -> Result<Vec<Coin>, DirectoryError> {
        info!("Fetching trending coins from {}", self.url);

        let response = self
            .client
            .get(&self.url)
            .header("Accept", "application/json")
            .send()
            .await
            .map_err(|e| DirectoryError::Unreachable {
                reason: e.to_string(),
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(DirectoryError::Status {
                code: status.as_u16(),
            });
        }

        let body: TrendingResponse =
            response
                .json()
                .await
                .map_err(|e| DirectoryError::Malformed {
                    reason: e.to_string(),
                })?;

        Ok(body.coins.into_iter().map(|entry| entry.item.into()).collect())
    }
}

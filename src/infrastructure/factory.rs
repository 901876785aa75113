use crate::config::{Config, Mode};
use crate::domain::ports::{CoinDirectoryProvider, PredictionService};
use crate::infrastructure::coingecko::CoinGeckoDirectory;
use crate::infrastructure::http_client_factory::HttpClientFactory;
use crate::infrastructure::mock::{MockCoinDirectory, MockPredictionService};
use crate::infrastructure::prediction_api::HttpPredictionService;
use std::sync::Arc;
use tracing::info;

pub struct ServiceFactory;

impl ServiceFactory {
    pub fn create_services(
        config: &Config,
    ) -> (Arc<dyn CoinDirectoryProvider>, Arc<dyn PredictionService>) {
        match config.mode {
            Mode::Mock => {
                info!("MODE=mock: using offline coin directory and prediction heuristic");
                (
                    Arc::new(MockCoinDirectory::default()),
                    Arc::new(MockPredictionService::heuristic()),
                )
            }
            Mode::Live => {
                let client =
                    HttpClientFactory::create_client(config.http_timeout, config.http_connect_timeout);
                let prediction = HttpPredictionService::new(client.clone(), &config.api_base_url);
                info!(
                    "Prediction endpoint: {}, coin directory: {}",
                    prediction.predict_url(),
                    config.coin_directory_url
                );

                (
                    Arc::new(CoinGeckoDirectory::new(client, config.coin_directory_url.clone())),
                    Arc::new(prediction),
                )
            }
        }
    }
}

use crate::domain::coin::{Coin, find_coin};
use crate::domain::errors::{DirectoryError, FormError, PredictionError};
use crate::domain::form::{FormField, FormState, PredictionRequest};
use crate::domain::prediction::PredictionResult;
use tracing::{debug, info, warn};

/// Which result region the UI shows. Exactly one at a time.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum RequestState {
    #[default]
    Idle,
    Loading,
    Success(PredictionResult),
    Failed(String),
}

impl RequestState {
    pub fn is_loading(&self) -> bool {
        matches!(self, RequestState::Loading)
    }
}

/// Issued by `begin_submit`; the completion must carry the same generation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SubmitTicket {
    pub generation: u64,
    pub request: PredictionRequest,
}

/// Form state, coin list and request state of the prediction page.
///
/// Every user edit bumps `generation`, so a completion for a request issued
/// before the edit no longer matches and is dropped.
#[derive(Debug, Default)]
pub struct PredictionWorkflow {
    form: FormState,
    coins: Vec<Coin>,
    state: RequestState,
    generation: u64,
    directory_requested: bool,
}

impl PredictionWorkflow {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn form(&self) -> &FormState {
        &self.form
    }

    pub fn coins(&self) -> &[Coin] {
        &self.coins
    }

    pub fn state(&self) -> &RequestState {
        &self.state
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn selected_coin(&self) -> Option<&Coin> {
        self.form
            .coin_id()
            .and_then(|id| find_coin(&self.coins, id))
    }

    /// Returns `true` only on the first call of the session.
    pub fn begin_directory_load(&mut self) -> bool {
        if self.directory_requested {
            debug!("Coin directory already requested this session, skipping");
            return false;
        }
        self.directory_requested = true;
        true
    }

    pub fn complete_directory_load(&mut self, outcome: Result<Vec<Coin>, DirectoryError>) {
        match outcome {
            Ok(coins) => {
                info!("Loaded {} trending coins", coins.len());
                self.coins = coins;
            }
            Err(e) => {
                warn!("Coin directory unavailable: {:?}", e);
                self.coins.clear();
                if self.state.is_loading() {
                    debug!("Prediction in flight, not replacing its state with the directory error");
                } else {
                    self.state = RequestState::Failed(e.to_string());
                }
            }
        }
    }

    /// Unknown ids clear the coin and its symbol.
    pub fn select_coin(&mut self, id: &str) {
        let coin = find_coin(&self.coins, id).cloned();
        if coin.is_none() {
            debug!("Coin '{}' is not in the directory, clearing selection", id);
        }
        self.form.set_coin(coin.as_ref());
        self.reset_request();
    }

    pub fn update_field(&mut self, field: FormField, value: impl Into<String>) {
        self.form.set(field, value.into());
        self.reset_request();
    }

    /// Required fields filled in and nothing in flight.
    pub fn can_submit(&self) -> bool {
        !self.state.is_loading() && self.form.is_complete()
    }

    pub fn begin_submit(&mut self) -> Result<SubmitTicket, FormError> {
        let request = match self.form.to_request() {
            Ok(request) => request,
            Err(e) => {
                warn!("Prediction not submitted: {}", e);
                self.state = RequestState::Failed(e.to_string());
                return Err(e);
            }
        };

        self.generation += 1;
        self.state = RequestState::Loading;
        info!(
            "Submitting prediction #{} for {} (price {}, market cap {})",
            self.generation,
            self.form.symbol(),
            request.price,
            request.market_cap
        );

        Ok(SubmitTicket {
            generation: self.generation,
            request,
        })
    }

    /// Returns whether the outcome was applied.
    pub fn complete_submit(
        &mut self,
        generation: u64,
        outcome: Result<PredictionResult, PredictionError>,
    ) -> bool {
        if generation != self.generation || !self.state.is_loading() {
            debug!(
                "Discarding stale prediction #{} (current #{}, state {:?})",
                generation, self.generation, self.state
            );
            return false;
        }

        self.state = match outcome {
            Ok(result) => {
                info!(
                    "Prediction #{}: liquidity {} ({}), advice {}",
                    generation,
                    result.liquidity_label(),
                    result.confidence_label(),
                    result.advice()
                );
                RequestState::Success(result)
            }
            Err(e) => {
                warn!("Prediction #{} failed: {:?}", generation, e);
                RequestState::Failed(e.to_string())
            }
        };
        true
    }

    /// Closes the error banner.
    pub fn dismiss_error(&mut self) {
        if matches!(self.state, RequestState::Failed(_)) {
            self.state = RequestState::Idle;
        }
    }

    fn reset_request(&mut self) {
        self.generation += 1;
        self.state = RequestState::Idle;
    }
}

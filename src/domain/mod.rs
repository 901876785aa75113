// Trending coins
pub mod coin;

pub mod errors;

// Form state and request payload
pub mod form;

// Port interfaces
pub mod ports;

// Prediction result and presentation mapping
pub mod prediction;

// Form/request state machine
pub mod workflow;

// Async driver used by the UI
pub mod controller;

pub mod prediction_view_model;

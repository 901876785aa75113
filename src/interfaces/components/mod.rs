pub mod banner;
pub mod card;
pub mod form_panel;
pub mod result_panel;

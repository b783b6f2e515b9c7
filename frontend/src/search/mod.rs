pub mod api;
pub mod components;
pub mod filter_panel;
pub mod filters;
pub mod ratio;
pub mod state;

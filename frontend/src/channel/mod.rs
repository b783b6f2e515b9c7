pub mod api;
pub mod components;

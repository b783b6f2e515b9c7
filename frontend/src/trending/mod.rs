pub mod api;
pub mod cascade;
pub mod components;

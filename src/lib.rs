pub mod api;
pub mod app;
pub mod error;
pub mod models;
pub mod scrape;
pub mod services;

mod test;

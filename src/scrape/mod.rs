pub mod browser;
pub mod table;

pub use browser::BrowserSession;
pub use table::extract_rate;

//! Text sample input and series export

pub mod loader;
pub mod export;

pub use loader::{load_samples, parse_samples, parse_str};
pub use export::{format_series, save_series, write_series};

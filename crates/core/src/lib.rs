pub mod config;
pub mod error;
pub mod types;

pub use config::{load_page_metadata, parse_site_toml};
pub use error::{Error, Result};
pub use types::*;

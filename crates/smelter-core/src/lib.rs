pub mod config;
pub mod error;
pub mod types;

pub use config::SmelterConfig;
pub use error::{Result, SmelterError};
pub use types::*;

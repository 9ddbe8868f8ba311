pub mod config;
pub mod handlers;
pub mod models;
pub mod relay;
pub mod state;

pub use config::{RelayMode, Settings};
pub use relay::{ChatRelay, RelayError};

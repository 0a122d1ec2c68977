// Module declarations
pub mod cli_context;
pub mod client;
pub mod commands;
pub mod config;
pub mod constants;
pub mod error;
pub mod formatting;
pub mod interactive;
pub mod logging;
pub mod models;
pub mod resources;
pub mod view;

#[cfg(test)]
mod tests;

// Re-export commonly used items
pub use cli_context::{CliContext, CliContextBuilder};
pub use client::ApiClient;
pub use config::{load_config, resolve_base_url, save_config, Config};
pub use error::{FetchError, OctofitError, OctofitResult};
pub use models::*;
pub use resources::view_config;
pub use view::{ResourceView, ViewConfig, ViewModel, ViewState};

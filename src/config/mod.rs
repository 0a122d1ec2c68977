#[allow(clippy::module_inception)]
pub mod config;

pub use config::{
    config_path, load_config, load_config_from, resolve_base_url, resolve_base_url_with,
    save_config, save_config_to, Config,
};

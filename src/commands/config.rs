use clap::ArgMatches;
use colored::*;

use crate::cli_context::CliContext;
use crate::config::{config_path, load_config, save_config, Config};
use crate::error::OctofitResult;
use crate::octofit_error;
use crate::logging::get_log_file_path;

/// Apply `--base-url` / `--timeout` to `config`. Returns whether anything
/// changed.
pub fn apply_settings(config: &mut Config, matches: &ArgMatches) -> OctofitResult<bool> {
    let mut changed = false;

    if let Some(url) = matches.get_one::<String>("set-base-url") {
        let url = url.trim().trim_end_matches('/');
        if !(url.starts_with("http://") || url.starts_with("https://")) {
            return Err(octofit_error!(
                InvalidInput,
                "base URL must start with http:// or https://, got '{}'",
                url
            ));
        }
        config.api_base_url = Some(url.to_string());
        changed = true;
    }

    if let Some(secs) = matches.get_one::<u64>("timeout") {
        // 0 clears the timeout
        config.request_timeout_secs = if *secs == 0 { None } else { Some(*secs) };
        changed = true;
    }

    Ok(changed)
}

pub fn handle_config(matches: &ArgMatches, base_url_flag: Option<&str>) -> OctofitResult<()> {
    let mut config = load_config();

    let changed = apply_settings(&mut config, matches)?;
    if changed {
        save_config(&config)?;
        println!("{}", "Configuration saved.".green());
    }

    if matches.get_flag("show") || !changed {
        let context = CliContext::from_config(base_url_flag, &config);
        println!("{:<16} {}", "API base URL:".bold(), context.base_url());
        println!(
            "{:<16} {}",
            "Timeout:".bold(),
            context
                .timeout()
                .map(|t| format!("{}s", t.as_secs()))
                .unwrap_or_else(|| "none".dimmed().to_string())
        );
        println!("{:<16} {}", "Config file:".bold(), config_path()?.display());
        if let Some(path) = get_log_file_path() {
            println!("{:<16} {}", "Log file:".bold(), path.display());
        }
    }

    Ok(())
}

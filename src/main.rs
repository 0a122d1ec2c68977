use std::process;

use clap::{value_parser, Arg, ArgAction, ArgMatches, Command};

use octofit_cli::cli_context::CliContext;
use octofit_cli::commands::config::handle_config;
use octofit_cli::commands::dashboard::handle_dashboard;
use octofit_cli::commands::list::handle_list;
use octofit_cli::config::load_config;
use octofit_cli::error::OctofitResult;
use octofit_cli::logging::{init_logging, install_panic_hook};
use octofit_cli::models::Resource;

fn list_command(resource: Resource, default_format: &'static str) -> Command {
    Command::new(resource.path())
        .about(format!("List {}", resource.path()))
        .arg(
            Arg::new("format")
                .long("format")
                .short('f')
                .value_name("FORMAT")
                .help("Output format: table or json")
                .value_parser(["table", "json"])
                .default_value(default_format),
        )
}

fn build_cli(default_format: &'static str) -> Command {
    let mut app = Command::new("octofit")
        .about("OctoFit Tracker - Browse fitness records from the terminal")
        .version(env!("CARGO_PKG_VERSION"))
        .subcommand_required(true)
        .arg_required_else_help(true)
        .arg(
            Arg::new("base-url")
                .long("base-url")
                .value_name("URL")
                .help("API base URL for this invocation")
                .global(true),
        );

    for resource in Resource::ALL {
        app = app.subcommand(list_command(resource, default_format));
    }

    app.subcommand(
        Command::new("dashboard")
            .about("Open the interactive dashboard")
            .arg(
                Arg::new("tab")
                    .long("tab")
                    .short('t')
                    .value_name("RESOURCE")
                    .help("Resource to open first (users, teams, activities, leaderboard, workouts)"),
            ),
    )
    .subcommand(
        Command::new("config")
            .about("Show or change settings")
            .arg(
                Arg::new("show")
                    .long("show")
                    .help("Show the effective configuration")
                    .action(ArgAction::SetTrue),
            )
            .arg(
                Arg::new("set-base-url")
                    .long("set-base-url")
                    .value_name("URL")
                    .help("Persist the API base URL"),
            )
            .arg(
                Arg::new("timeout")
                    .long("timeout")
                    .value_name("SECS")
                    .help("Persist a request timeout in seconds (0 clears it)")
                    .value_parser(value_parser!(u64)),
            ),
    )
}

fn base_url_flag(matches: &ArgMatches) -> Option<&str> {
    matches.get_one::<String>("base-url").map(String::as_str)
}

async fn dispatch(matches: &ArgMatches) -> OctofitResult<bool> {
    match matches.subcommand() {
        Some(("config", sub_matches)) => {
            let base_url_flag = base_url_flag(sub_matches);
            handle_config(sub_matches, base_url_flag)?;
            Ok(true)
        }
        Some(("dashboard", sub_matches)) => {
            let mut context = CliContext::load(base_url_flag(sub_matches))?;
            handle_dashboard(sub_matches, &mut context).await?;
            Ok(true)
        }
        Some((name, sub_matches)) => {
            let resource: Resource = name.parse()?;
            let mut context = CliContext::load(base_url_flag(sub_matches))?;
            handle_list(resource, sub_matches, &mut context).await
        }
        None => {
            eprintln!("Unknown command. Use 'octofit --help' for available commands.");
            Ok(false)
        }
    }
}

#[tokio::main]
async fn main() {
    if let Err(e) = init_logging() {
        eprintln!("Warning: logging disabled: {}", e);
    }
    install_panic_hook();

    let default_format = match load_config().default_format.as_deref() {
        Some("json") => "json",
        _ => "table",
    };

    let matches = build_cli(default_format).get_matches();

    match dispatch(&matches).await {
        Ok(true) => {}
        Ok(false) => process::exit(1),
        Err(e) => {
            tracing::error!(error = %e, "command failed");
            eprintln!("Error: {}", e);
            process::exit(1);
        }
    }
}

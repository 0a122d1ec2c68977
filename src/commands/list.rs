use clap::ArgMatches;

use crate::cli_context::CliContext;
use crate::error::{ErrorContext, OctofitResult};
use crate::formatting::{format_records_json, print_view};
use crate::models::Resource;
use crate::octofit_error;
use crate::resources::view_config;
use crate::view::{ResourceView, ViewState};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Table,
    Json,
}

impl OutputFormat {
    pub fn parse(value: &str) -> OctofitResult<Self> {
        match value.to_lowercase().as_str() {
            "table" => Ok(OutputFormat::Table),
            "json" => Ok(OutputFormat::Json),
            other => Err(octofit_error!(
                InvalidInput,
                "unknown format '{}', expected table or json",
                other
            )),
        }
    }
}

/// Run one fetch cycle for `resource` and print the outcome. Returns
/// `false` when the view ended in its error state.
pub async fn handle_list(
    resource: Resource,
    matches: &ArgMatches,
    context: &mut CliContext,
) -> OctofitResult<bool> {
    let format = match matches.get_one::<String>("format") {
        Some(value) => OutputFormat::parse(value)?,
        None => OutputFormat::Table,
    };

    let client = context.client().context("Failed to create HTTP client")?;
    let mut view = ResourceView::new(view_config(resource), context.endpoint(resource));

    if format == OutputFormat::Table {
        print_view(&view.render());
    }

    view.load(&client).await;

    let succeeded = match (format, view.state()) {
        (OutputFormat::Json, ViewState::Ready(records)) => {
            println!("{}", format_records_json(records)?);
            true
        }
        (OutputFormat::Json, ViewState::Error(message)) => {
            eprintln!("Error: {}", message);
            false
        }
        (_, state) => {
            let failed = state.error_message().is_some();
            print_view(&view.render());
            !failed
        }
    };

    Ok(succeeded)
}

use clap::ArgMatches;

use crate::cli_context::CliContext;
use crate::error::OctofitResult;
use crate::interactive::handlers::run_dashboard;
use crate::models::Resource;

/// The tab to open with, from `--tab`. Defaults to the first resource.
pub fn initial_tab(matches: &ArgMatches) -> OctofitResult<Resource> {
    match matches.get_one::<String>("tab") {
        Some(value) => value.parse(),
        None => Ok(Resource::ALL[0]),
    }
}

pub async fn handle_dashboard(matches: &ArgMatches, context: &mut CliContext) -> OctofitResult<()> {
    let initial = initial_tab(matches)?;
    run_dashboard(context, initial).await
}

use anyhow::Result;
use clap::Args;
use edmtrain_api::Client;

use crate::output::{
    print_json, print_locations_csv, print_locations_markdown, print_locations_table,
    OutputFormat,
};
use crate::validation;

#[derive(Args)]
pub struct LocationsArgs {
    /// State or province (required by the API when --city is given)
    #[arg(long)]
    pub state: Option<String>,

    /// City or town
    #[arg(long)]
    pub city: Option<String>,
}

pub async fn run(args: &LocationsArgs, client: &Client, format: &OutputFormat) -> Result<()> {
    let mut query = client.query_for_locations();

    if let Some(state) = &args.state {
        query = query.with_state(&validation::validate_text("state", state)?);
    }
    if let Some(city) = &args.city {
        if args.state.is_none() {
            tracing::warn!("--city without --state is usually rejected by the API");
        }
        query = query.with_city(&validation::validate_text("city", city)?);
    }

    let locations = query.execute().await?;
    eprintln!("{} locations", locations.len());

    match format {
        OutputFormat::Table => print_locations_table(&locations),
        OutputFormat::Json => print_json(&locations),
        OutputFormat::Csv => print_locations_csv(&locations)?,
        OutputFormat::Markdown => print_locations_markdown(&locations),
    }

    Ok(())
}

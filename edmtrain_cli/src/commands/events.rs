use anyhow::Result;
use clap::Args;
use edmtrain_api::Client;

use crate::output::{
    print_events_csv, print_events_markdown, print_events_table, print_json, OutputFormat,
};
use crate::validation;

#[derive(Args)]
pub struct EventsArgs {
    /// Filter by event name
    #[arg(long)]
    pub name: Option<String>,

    /// Comma-separated artist IDs (e.g. 12,40)
    #[arg(long)]
    pub artist_ids: Option<String>,

    /// Comma-separated venue IDs
    #[arg(long)]
    pub venue_ids: Option<String>,

    /// Comma-separated location IDs (see the `locations` command)
    #[arg(long)]
    pub location_ids: Option<String>,

    /// Events on or after this date (YYYY-MM-DD)
    #[arg(long)]
    pub start_date: Option<String>,

    /// Events on or before this date (YYYY-MM-DD)
    #[arg(long)]
    pub end_date: Option<String>,

    /// Events added to EDMTrain on or after this date (YYYY-MM-DD)
    #[arg(long)]
    pub created_start: Option<String>,

    /// Events added to EDMTrain on or before this date (YYYY-MM-DD)
    #[arg(long)]
    pub created_end: Option<String>,

    /// Only festivals (true) or only non-festivals (false)
    #[arg(long)]
    pub festival: Option<bool>,

    /// Include electronic shows
    #[arg(long)]
    pub electronic: Option<bool>,

    /// Include non-electronic shows
    #[arg(long)]
    pub other_genre: Option<bool>,
}

pub async fn run(args: &EventsArgs, client: &Client, format: &OutputFormat) -> Result<()> {
    let mut query = client.query_for_events();

    if let Some(name) = &args.name {
        query = query.with_event_name(&validation::validate_text("name", name)?);
    }
    if let Some(ids) = &args.artist_ids {
        query = query.with_artist_ids(&validation::parse_id_list("artist-ids", ids)?);
    }
    if let Some(ids) = &args.venue_ids {
        query = query.with_venue_ids(&validation::parse_id_list("venue-ids", ids)?);
    }
    if let Some(ids) = &args.location_ids {
        query = query.with_location_ids(&validation::parse_id_list("location-ids", ids)?);
    }
    if let Some(date) = &args.start_date {
        query = query.with_start_date(validation::parse_date("start-date", date)?);
    }
    if let Some(date) = &args.end_date {
        query = query.with_end_date(validation::parse_date("end-date", date)?);
    }
    if let Some(date) = &args.created_start {
        query = query.with_created_start_date(validation::parse_date("created-start", date)?);
    }
    if let Some(date) = &args.created_end {
        query = query.with_created_end_date(validation::parse_date("created-end", date)?);
    }
    if let Some(festival) = args.festival {
        query = query.with_festival(festival);
    }
    if let Some(electronic) = args.electronic {
        query = query.with_electronic_genre(electronic);
    }
    if let Some(other) = args.other_genre {
        query = query.with_other_genre(other);
    }

    let events = query.execute().await?;
    eprintln!("{} events", events.len());

    match format {
        OutputFormat::Table => print_events_table(&events),
        OutputFormat::Json => print_json(&events),
        OutputFormat::Csv => print_events_csv(&events)?,
        OutputFormat::Markdown => print_events_markdown(&events),
    }

    Ok(())
}

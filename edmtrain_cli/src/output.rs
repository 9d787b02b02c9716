use anyhow::Result;
use edmtrain_api::types::{Event, Location};
use serde::Serialize;
use tabled::settings::Style;
use tabled::{Table, Tabled};

#[derive(Clone, Debug)]
pub enum OutputFormat {
    Table,
    Json,
    Csv,
    Markdown,
}

#[derive(Tabled, Serialize)]
struct EventRow {
    #[tabled(rename = "Date")]
    #[serde(rename = "Date")]
    date: String,
    #[tabled(rename = "Event")]
    #[serde(rename = "Event")]
    name: String,
    #[tabled(rename = "Venue")]
    #[serde(rename = "Venue")]
    venue: String,
    #[tabled(rename = "Location")]
    #[serde(rename = "Location")]
    location: String,
    #[tabled(rename = "Ages")]
    #[serde(rename = "Ages")]
    ages: String,
    #[tabled(rename = "Festival")]
    #[serde(rename = "Festival")]
    festival: String,
    #[tabled(rename = "Link")]
    #[serde(rename = "Link")]
    link: String,
}

#[derive(Tabled, Serialize)]
struct LocationRow {
    #[tabled(rename = "ID")]
    #[serde(rename = "ID")]
    id: i64,
    #[tabled(rename = "City")]
    #[serde(rename = "City")]
    city: String,
    #[tabled(rename = "State")]
    #[serde(rename = "State")]
    state: String,
    #[tabled(rename = "Coordinates")]
    #[serde(rename = "Coordinates")]
    coordinates: String,
}

// -- Row builders --

fn build_event_rows(events: &[Event]) -> Vec<EventRow> {
    events
        .iter()
        .map(|e| EventRow {
            date: e.date.to_string(),
            name: e.display_name(),
            venue: e.venue.name.clone(),
            location: e.venue.location.clone(),
            ages: e.ages.clone().unwrap_or_default(),
            festival: if e.is_festival { "yes" } else { "no" }.to_string(),
            link: e.link.clone(),
        })
        .collect()
}

fn build_location_rows(locations: &[Location]) -> Vec<LocationRow> {
    locations
        .iter()
        .map(|l| LocationRow {
            id: l.id,
            city: l.city.clone().unwrap_or_default(),
            state: l
                .state_code
                .clone()
                .or_else(|| l.state.clone())
                .unwrap_or_default(),
            coordinates: format!("{:.4}, {:.4}", l.latitude, l.longitude),
        })
        .collect()
}

// -- Table output --

pub fn print_events_table(events: &[Event]) {
    let mut table = Table::new(build_event_rows(events));
    table.with(Style::rounded());
    println!("{}", table);
}

pub fn print_locations_table(locations: &[Location]) {
    let mut table = Table::new(build_location_rows(locations));
    table.with(Style::rounded());
    println!("{}", table);
}

// -- Markdown output --

pub fn print_events_markdown(events: &[Event]) {
    let mut table = Table::new(build_event_rows(events));
    table.with(Style::markdown());
    println!("{}", table);
}

pub fn print_locations_markdown(locations: &[Location]) {
    let mut table = Table::new(build_location_rows(locations));
    table.with(Style::markdown());
    println!("{}", table);
}

// -- CSV output --

pub fn print_events_csv(events: &[Event]) -> Result<()> {
    let mut wtr = csv::Writer::from_writer(std::io::stdout());
    for row in build_event_rows(events) {
        wtr.serialize(row)?;
    }
    wtr.flush()?;
    Ok(())
}

pub fn print_locations_csv(locations: &[Location]) -> Result<()> {
    let mut wtr = csv::Writer::from_writer(std::io::stdout());
    for row in build_location_rows(locations) {
        wtr.serialize(row)?;
    }
    wtr.flush()?;
    Ok(())
}

// -- JSON output --

pub fn print_json<T: serde::Serialize>(data: &T) {
    match serde_json::to_string_pretty(data) {
        Ok(json) => println!("{}", json),
        Err(e) => eprintln!("Failed to serialize to JSON: {}", e),
    }
}

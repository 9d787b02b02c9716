mod commands;
mod output;
mod validation;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use edmtrain_api::Client;

use crate::output::OutputFormat;

#[derive(Parser)]
#[command(name = "edmtrain")]
#[command(about = "Query electronic music events and locations from EDMTrain")]
struct Cli {
    /// Output format: table, json, csv, or markdown
    #[arg(long, default_value = "table", global = true)]
    output: String,

    /// EDMTrain client token. Defaults to the EDMTRAIN_TOKEN environment variable
    #[arg(long, global = true)]
    token: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List events
    Events(commands::events::EventsArgs),
    /// List locations
    Locations(commands::locations::LocationsArgs),
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("edmtrain=info".parse()?),
        )
        .with_target(false)
        .init();

    let cli = Cli::parse();

    let format = match cli.output.as_str() {
        "json" => OutputFormat::Json,
        "csv" => OutputFormat::Csv,
        "markdown" | "md" => OutputFormat::Markdown,
        _ => OutputFormat::Table,
    };

    let client = build_client(cli.token)?;

    match &cli.command {
        Commands::Events(args) => commands::events::run(args, &client, &format).await?,
        Commands::Locations(args) => commands::locations::run(args, &client, &format).await?,
    }

    Ok(())
}

fn build_client(token: Option<String>) -> Result<Client> {
    let token = token
        .or_else(|| std::env::var("EDMTRAIN_TOKEN").ok())
        .context("no client token: pass --token or set EDMTRAIN_TOKEN")?;

    let mut builder = Client::builder().token(&token);
    if let Ok(base_url) = std::env::var("EDMTRAIN_BASE_URL") {
        builder = builder.base_url(&base_url);
    }
    Ok(builder.build()?)
}

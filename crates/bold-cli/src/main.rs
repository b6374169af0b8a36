//! `bold` - command line driver for the BOLD Systems APIs

mod args;
mod error;

use crate::args::{Cli, Command};
use crate::error::Result;
use bold_api::{BoldClient, ClientConfig, SummaryStats, TaxonIdQuery, TaxonNameQuery};
use clap::Parser;
use std::io::Write;
use std::path::Path;
use tracing::info;
use tracing_subscriber::{prelude::*, EnvFilter};

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let env_filter = EnvFilter::from_default_env()
        .add_directive("bold_cli=info".parse()?)
        .add_directive("bold_api=info".parse()?);

    tracing_subscriber::registry()
        .with(env_filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    // Load configuration from environment
    let mut config = ClientConfig::from_env();
    if let Some(base_url) = cli.base_url.as_deref() {
        config = config.with_base_url(base_url);
    }
    info!("Base URL: {}", config.base_url);

    let client = BoldClient::with_config(config);
    run(&client, cli.command).await
}

async fn run(client: &BoldClient, command: Command) -> Result<()> {
    match command {
        Command::Identify { sequence, db } => {
            let body = client.identify(&sequence, db).await?;
            write_stdout(&body)
        }
        Command::Summary {
            filters,
            format,
            data_type,
        } => {
            let query = filters.into_query()?;
            match client.summary_stats(&query, format, data_type).await? {
                SummaryStats::Json(value) => print_json(&value),
                SummaryStats::Xml(body) => write_stdout(&body),
            }
        }
        Command::Specimen {
            filters,
            format,
            output,
        } => {
            let query = filters.into_query()?;
            let body = client.specimens(&query, format).await?;
            match output {
                Some(path) => {
                    tokio::fs::write(&path, &body).await?;
                    report_written(&path, body.len() as u64);
                    Ok(())
                }
                None => write_stdout(&body),
            }
        }
        Command::Sequence {
            filters,
            marker,
            output,
        } => {
            let query = filters.into_query()?;
            let written = client.download_sequences(&query, &marker, &output).await?;
            report_written(&output, written);
            Ok(())
        }
        Command::Combined {
            filters,
            marker,
            format,
            output,
        } => {
            let query = filters.into_query()?;
            let written = client
                .download_combined(&query, &marker, format, &output)
                .await?;
            report_written(&output, written);
            Ok(())
        }
        Command::Trace {
            filters,
            marker,
            output,
        } => {
            let query = filters.into_query()?;
            let written = client.download_traces(&query, &marker, &output).await?;
            report_written(&output, written);
            Ok(())
        }
        Command::TaxonId {
            ids,
            data_type,
            include_tree,
        } => {
            let mut query = TaxonIdQuery::new(ids).include_tree(include_tree);
            if !data_type.is_empty() {
                query = query.data_types(data_type);
            }
            print_json(&client.taxon_by_id(&query).await?)
        }
        Command::TaxonName { names, fuzzy } => {
            let mut query = TaxonNameQuery::new(names);
            if fuzzy {
                query = query.fuzzy(true);
            }
            print_json(&client.taxon_by_name(&query).await?)
        }
    }
}

fn report_written(path: &Path, bytes: u64) {
    info!(path = %path.display(), bytes, "Download complete");
}

fn write_stdout(body: &[u8]) -> Result<()> {
    let mut stdout = std::io::stdout().lock();
    stdout.write_all(body)?;
    stdout.flush()?;
    Ok(())
}

fn print_json(value: &serde_json::Value) -> Result<()> {
    let text = serde_json::to_string_pretty(value)?;
    writeln!(std::io::stdout(), "{}", text)?;
    Ok(())
}

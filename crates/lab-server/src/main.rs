mod config;
mod observations;
mod wiring;

use std::error::Error;
use std::fs::{self, File};
use std::path::Path;

use runtime::journal::JournalCsvWriter;
use runtime::logging::InMemoryRunLogWriter;
use runtime::replay::{run_replay, Observation};
use tokio::net::TcpListener;
use trade_core::PortfolioLog;

use crate::config::{Config, RunMode};

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    let config = Config::from_env()?;
    initialize_journal_output(&config)?;
    let listener = TcpListener::bind(config.listen_addr).await?;

    axum::serve(listener, wiring::build_app(config.mode)).await?;
    Ok(())
}

/// Creates the journal artifact at startup. In replay mode with a configured
/// observation log, the replay runs first and its rows seed the journal;
/// otherwise the artifact starts as a bare header.
fn initialize_journal_output(config: &Config) -> Result<(), Box<dyn Error>> {
    let journal_path = Path::new(&config.journal_output_path);

    if let Some(parent) = journal_path
        .parent()
        .filter(|parent| !parent.as_os_str().is_empty())
    {
        fs::create_dir_all(parent)?;
    }

    let journal_file = File::create(journal_path)?;
    let mut journal_writer = JournalCsvWriter::new(journal_file);
    journal_writer.write_header()?;

    if config.mode != RunMode::Replay {
        return Ok(());
    }
    let Some(observations_path) = &config.observations_input_path else {
        return Ok(());
    };

    let raw = fs::read_to_string(observations_path)?;
    let timed = observations::parse_observation_log(&raw)?;
    let observations: Vec<Observation> = timed
        .iter()
        .map(|observation| observation.observation)
        .collect();

    let bootstrap = PortfolioLog::bootstrap(config.initial_cash)?;
    let mut run_log = InMemoryRunLogWriter::new();
    let report = run_replay(bootstrap, &observations, &mut run_log)?;
    for (index, log) in report.logs.iter().enumerate() {
        journal_writer.append_log(index as u64 + 1, observations[index].price, log)?;
    }

    Ok(())
}

//! CLI module - argument parsing and the report pipeline

pub mod output;

use clap::Parser;
use miette::Result;

use crate::client::{ClientError, HubClient};
use crate::config::{Config, ConfigError, DEFAULT_TIMEOUT_SECS};
use crate::entity;

/// List entity states from a Home Assistant instance
#[derive(Parser, Debug)]
#[command(name = "hafind", version)]
pub struct Cli {
    /// Only list entities in this domain (e.g. light, sensor)
    pub domain: Option<String>,

    /// Base URL of the Home Assistant instance [env: HA_URL]
    #[arg(long, value_name = "URL")]
    pub url: Option<String>,

    /// Long-lived access token [env: HA_TOKEN]
    #[arg(long, value_name = "TOKEN")]
    pub token: Option<String>,

    /// Request timeout in seconds
    #[arg(long, value_name = "SECONDS", default_value_t = DEFAULT_TIMEOUT_SECS)]
    pub timeout: u64,
}

/// Run the fetch/filter/render pipeline once.
///
/// All failures come back as diagnostics; the exit code and message
/// formatting are decided here and in `main`, not deeper down.
pub fn run(cli: Cli) -> Result<()> {
    let config = Config::resolve(cli.url.as_deref(), cli.token.as_deref(), cli.timeout)
        .map_err(config_diagnostic)?;

    match &cli.domain {
        Some(domain) => println!("Fetching {domain} entities from {}...", config.base_url),
        None => println!("Fetching all entities from {}...", config.base_url),
    }

    let entities = HubClient::new(&config)
        .and_then(|client| client.fetch_states())
        .map_err(|e| connection_diagnostic(&config, e))?;

    let entities = entity::filter_by_domain(entities, cli.domain.as_deref());
    output::print_report(&entities);

    Ok(())
}

fn config_diagnostic(err: ConfigError) -> miette::Report {
    match &err {
        ConfigError::MissingToken => miette::miette!(
            help = "Create a long-lived access token in Home Assistant:\n  \
                    Profile → Security → Long-Lived Access Tokens\n\
                    and export it as HA_TOKEN (or pass --token).",
            "{err}"
        ),
        _ => miette::miette!("{err}"),
    }
}

fn connection_diagnostic(config: &Config, err: ClientError) -> miette::Report {
    miette::miette!(
        help = "Check that:\n  \
                1. Home Assistant is running\n  \
                2. HA_URL is correct\n  \
                3. HA_TOKEN is valid",
        "Error connecting to Home Assistant at {}: {err}",
        config.base_url
    )
}

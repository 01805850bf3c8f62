//! Race command implementation

use std::time::Duration;

use kata_race::{RaceConfig, Racer};
use miette::{IntoDiagnostic, Result, WrapErr};
use tracing::debug;
use url::Url;

use crate::cli::Cli;
use crate::utils::block_on;

pub fn run_race(cli: &Cli, a: &str, b: &str, timeout_ms: Option<u64>) -> Result<()> {
    for target in [a, b] {
        Url::parse(target)
            .into_diagnostic()
            .wrap_err_with(|| format!("Invalid URL: {target}"))?;
    }

    let config = match &cli.config {
        Some(path) => RaceConfig::from_file(path)
            .into_diagnostic()
            .wrap_err_with(|| format!("Failed to load {}", path.display()))?,
        None => RaceConfig::default(),
    };

    let mut racer = Racer::new().with_config(&config);
    if let Some(ms) = timeout_ms {
        racer = racer.timeout(Duration::from_millis(ms));
    }

    debug!("Racing {} against {} (timeout: {:?})", a, b, racer.timeout_limit());

    let winner = block_on(racer.race(a, b))?.into_diagnostic()?;
    println!("{winner}");

    Ok(())
}

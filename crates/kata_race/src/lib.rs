//! Two-way endpoint racer.
//!
//! Probes two targets concurrently and reports whichever completes first.
//! A probe completes when the target answers or when the probe fails, so a
//! fast failure wins just like a fast success.
//!
//! ```rust,no_run
//! # async fn run() {
//! let winner = kata_race::race("https://www.example.com", "https://www.example.org").await;
//! println!("{winner} was faster");
//! # }
//! ```

pub mod config;
pub mod error;
pub mod probe;
pub mod racer;

#[cfg(test)]
pub(crate) mod test_utils;

pub use config::RaceConfig;
pub use error::{ConfigError, ProbeError, RaceError};
pub use probe::{HttpProbe, HttpProbeBuilder, Probe};
pub use racer::{Racer, configurable_race, race};

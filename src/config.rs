//! Settings for a single run, built once from the command line.

use std::path::PathBuf;

use chrono::{DateTime, Duration, Local, NaiveDate, TimeZone};
use thiserror::Error;

/// Describes why the command-line settings were rejected.
#[derive(Clone, Debug, Eq, Error, PartialEq)]
pub enum Error {
    #[error("invalid date `{0}`: dates should be in ISO format (YYYY-MM-DD)")]
    InvalidDate(String),

    #[error("end date {end} must be after start date {start}")]
    EmptyRange { start: NaiveDate, end: NaiveDate },
}

/// Everything a run needs to know, passed explicitly to each step.
#[derive(Clone, Debug)]
pub struct Config {
    /// Repository whose history is copied.
    pub source: PathBuf,

    /// Where the new repository is created. Anything already there is lost.
    pub target: PathBuf,

    /// Local midnight at the start of the first allowed day.
    pub start: DateTime<Local>,

    /// Local midnight at the start of the end date.
    pub end: DateTime<Local>,

    /// Seed for the timestamp generator. `None` draws from entropy.
    pub seed: Option<u64>,
}

impl Config {
    /// Validates the date range and builds a configuration.
    pub fn new<P, Q>(source: P, target: Q, start: &str, end: &str) -> Result<Config, Error>
    where
        P: Into<PathBuf>,
        Q: Into<PathBuf>,
    {
        let start = parse_date(start)?;
        let end = parse_date(end)?;

        if end <= start {
            return Err(Error::EmptyRange {
                start: start.date_naive(),
                end: end.date_naive(),
            });
        }

        Ok(Config {
            source: source.into(),
            target: target.into(),
            start,
            end,
            seed: None,
        })
    }

    pub fn with_seed(mut self, seed: Option<u64>) -> Config {
        self.seed = seed;
        self
    }

    /// A fresh random source for this run.
    pub fn rng(&self) -> fastrand::Rng {
        match self.seed {
            Some(seed) => fastrand::Rng::with_seed(seed),
            None => fastrand::Rng::new(),
        }
    }
}

/// Parses a `YYYY-MM-DD` date as local midnight.
pub fn parse_date(input: &str) -> Result<DateTime<Local>, Error> {
    parse_date_in(&Local, input)
}

/// Parses a `YYYY-MM-DD` date as midnight in `tz`.
///
/// When midnight falls in a daylight-saving gap, the first valid hour of the
/// day is used instead.
pub fn parse_date_in<Tz: TimeZone>(tz: &Tz, input: &str) -> Result<DateTime<Tz>, Error> {
    let invalid = || Error::InvalidDate(input.to_string());

    let date = NaiveDate::parse_from_str(input.trim(), "%Y-%m-%d").map_err(|_| invalid())?;
    let midnight = date.and_hms_opt(0, 0, 0).ok_or_else(invalid)?;

    (0..3)
        .find_map(|h| {
            tz.from_local_datetime(&(midnight + Duration::hours(h)))
                .earliest()
        })
        .ok_or_else(invalid)
}

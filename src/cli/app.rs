use std::io::Write;

#[cfg(test)]
use std::ffi::OsString;

use crate::Result;

use clap::{crate_version, Arg, ArgMatches};
use redate::{
    config::{self, Config},
    driver::Driver,
    git::Git,
    logger,
};

pub(crate) fn clap_app<'a, 'b>() -> clap::App<'a, 'b> {
    clap::App::new("redate")
        .version(crate_version!())
        .about("Copy a git history into a new repository with randomized commit dates")
        .arg(
            Arg::with_name("source")
                .value_name("SOURCE")
                .required(true)
                .help("The repository to copy commits from"),
        )
        .arg(
            Arg::with_name("target")
                .value_name("TARGET")
                .required(true)
                .help("The directory to create the new repository in (erased if it exists)"),
        )
        .arg(
            Arg::with_name("start-date")
                .value_name("START")
                .required(true)
                .validator(validate_date)
                .help("The earliest date a commit may get, as YYYY-MM-DD"),
        )
        .arg(
            Arg::with_name("end-date")
                .value_name("END")
                .required(true)
                .validator(validate_date)
                .help("The end of the date range (exclusive), as YYYY-MM-DD"),
        )
        .arg(
            Arg::with_name("seed")
                .long("seed")
                .value_name("N")
                .takes_value(true)
                .validator(validate_seed)
                .help("Seed the date generator to get the same dates on every run"),
        )
        .arg(
            Arg::with_name("verbose")
                .short("v")
                .long("verbose")
                .multiple(true)
                .help("Log more details to stderr (repeat for more)"),
        )
}

fn validate_date(value: String) -> std::result::Result<(), String> {
    config::parse_date(&value)
        .map(|_| ())
        .map_err(|err| err.to_string())
}

fn validate_seed(value: String) -> std::result::Result<(), String> {
    value
        .parse::<u64>()
        .map(|_| ())
        .map_err(|_| format!("seed must be a non-negative integer, got `{}`", value))
}

pub(crate) struct App<'a> {
    pub arg_matches: ArgMatches<'a>,
    pub stdout: &'a mut dyn Write,
}

impl<'a> App<'a> {
    pub fn run(&mut self) -> Result<()> {
        let config = self.config()?;
        let git = Git::default();

        Driver::new(&config, &git, &mut *self.stdout).run()?;

        Ok(())
    }

    pub fn config(&self) -> Result<Config> {
        let matches = &self.arg_matches;

        // unwrap: clap rejects the command line if any of these are missing.
        let config = Config::new(
            matches.value_of_os("source").unwrap(),
            matches.value_of_os("target").unwrap(),
            matches.value_of("start-date").unwrap(),
            matches.value_of("end-date").unwrap(),
        )?;

        let seed = match matches.value_of("seed") {
            Some(seed) => Some(seed.parse::<u64>()?),
            None => None,
        };

        Ok(config.with_seed(seed))
    }

    pub fn log_level(&self) -> log::Level {
        logger::env_level()
            .unwrap_or_else(|| logger::verbosity_level(self.arg_matches.occurrences_of("verbose")))
    }

    #[cfg(test)]
    pub fn run_with_args<I, T>(args: I) -> Result<Vec<u8>>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString> + Clone,
    {
        let mut args: Vec<OsString> = args.into_iter().map(|x| x.into()).collect();
        args.insert(0, OsString::from("redate"));

        let mut stdout = Vec::new();

        App {
            arg_matches: clap_app().get_matches_from_safe(args)?,
            stdout: &mut stdout,
        }
        .run()?;

        Ok(stdout)
    }
}

impl<'a> Write for App<'a> {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        self.stdout.write(buf)
    }

    fn flush(&mut self) -> std::io::Result<()> {
        self.stdout.flush()
    }
}

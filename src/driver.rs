//! Runs a whole copy, one explicit state at a time.

use std::io::Write;

use chrono::{DateTime, Local};

use crate::config::Config;
use crate::git::{CommitId, Vcs};
use crate::{dates, replay, Error, Result};

/// Where a run currently stands.
///
/// A run moves `Init -> ReadHistory -> GenerateDates -> ReplayAll -> Done`.
/// `ReplayAll` repeats once per commit. Any failure jumps to `Failed`.
#[derive(Debug)]
pub enum State {
    Init,
    ReadHistory,
    GenerateDates {
        commits: Vec<CommitId>,
    },
    ReplayAll {
        commits: Vec<CommitId>,
        dates: Vec<DateTime<Local>>,
        next: usize,
    },
    Done {
        replayed: usize,
    },
    Failed(Error),
}

impl State {
    pub fn is_terminal(&self) -> bool {
        matches!(self, State::Done { .. } | State::Failed(_))
    }
}

/// Copies the history described by a `Config`, reporting progress to `out`.
pub struct Driver<'a, V: Vcs> {
    config: &'a Config,
    vcs: &'a V,
    rng: fastrand::Rng,
    out: &'a mut dyn Write,
}

impl<'a, V: Vcs> Driver<'a, V> {
    pub fn new(config: &'a Config, vcs: &'a V, out: &'a mut dyn Write) -> Driver<'a, V> {
        Driver {
            config,
            vcs,
            rng: config.rng(),
            out,
        }
    }

    /// Runs every step to completion. Returns the number of commits replayed.
    pub fn run(mut self) -> Result<usize> {
        let mut state = State::Init;

        while !state.is_terminal() {
            state = self.step(state);
        }

        match state {
            State::Done { replayed } => {
                writeln!(self.out, "Complete! Repository copied with sequential dates.")?;
                Ok(replayed)
            }
            State::Failed(err) => Err(err),
            _ => unreachable!(),
            // unreachable: the loop above only exits on a terminal state.
        }
    }

    /// Performs the work of `state` and returns the state that follows it.
    /// Terminal states are returned unchanged.
    pub fn step(&mut self, state: State) -> State {
        if state.is_terminal() {
            return state;
        }

        log::trace!("entering {:?}", state);

        self.try_step(state).unwrap_or_else(State::Failed)
    }

    fn try_step(&mut self, state: State) -> Result<State> {
        let config = self.config;

        match state {
            State::Init => {
                writeln!(self.out, "Initializing target repository...")?;
                replay::initialize(self.vcs, &config.target).map_err(|source| Error::Init {
                    path: config.target.clone(),
                    source,
                })?;
                log::info!("initialized {}", config.target.display());

                Ok(State::ReadHistory)
            }

            State::ReadHistory => {
                writeln!(self.out, "Getting commit history...")?;
                let commits =
                    replay::list_commits(self.vcs, &config.source).map_err(Error::History)?;
                writeln!(self.out, "Found {} commits", commits.len())?;

                Ok(State::GenerateDates { commits })
            }

            State::GenerateDates { commits } => {
                writeln!(self.out, "Generating sequential dates...")?;
                let dates =
                    dates::generate(&config.start, &config.end, commits.len(), &mut self.rng)?;
                log::info!(
                    "dates range from {} to {}",
                    dates[0].to_rfc3339(),
                    dates[dates.len() - 1].to_rfc3339()
                );

                writeln!(self.out, "Applying commits with sequential dates...")?;
                Ok(State::ReplayAll {
                    commits,
                    dates,
                    next: 0,
                })
            }

            State::ReplayAll {
                commits,
                dates,
                next,
            } => {
                let total = commits.len();

                if next == total {
                    return Ok(State::Done { replayed: total });
                }

                replay::replay(
                    self.vcs,
                    &config.source,
                    &config.target,
                    &commits[next],
                    &dates[next],
                )?;
                writeln!(self.out, "Processed commit {}/{}", next + 1, total)?;

                Ok(State::ReplayAll {
                    commits,
                    dates,
                    next: next + 1,
                })
            }

            State::Done { .. } | State::Failed(_) => Ok(state),
        }
    }
}

//! Random, ordered commit timestamps within a date range.

use chrono::{DateTime, Duration, NaiveTime, TimeZone};
use thiserror::Error;

/// First hour (inclusive) a generated timestamp may fall in.
pub const FIRST_HOUR: u32 = 5;

/// Last hour (exclusive) a generated timestamp may fall in.
pub const END_HOUR: u32 = 23;

/// Describes why a set of timestamps could not be generated.
#[derive(Clone, Debug, Eq, Error, PartialEq)]
pub enum Error {
    #[error("count must be an integer >= 2, got {0}")]
    CountTooSmall(usize),

    #[error("end date must be after start date")]
    EmptyRange,

    #[error("no valid local time exists on {0}")]
    NoLocalTime(chrono::NaiveDate),
}

/// Generates `count` timestamps between `start` and `end`, in ascending order.
///
/// Each timestamp is drawn in two stages. First an instant is picked uniformly
/// in `[start, end)`; then its time of day is replaced by a uniformly random
/// time between 05:00:00.000 and 22:59:59.999, keeping the calendar date of
/// the first draw. The result is sorted; duplicates are kept.
///
/// All randomness comes from `rng`, so a seeded generator yields the same
/// sequence every time.
pub fn generate<Tz: TimeZone>(
    start: &DateTime<Tz>,
    end: &DateTime<Tz>,
    count: usize,
    rng: &mut fastrand::Rng,
) -> Result<Vec<DateTime<Tz>>, Error> {
    if count < 2 {
        return Err(Error::CountTooSmall(count));
    }

    if end <= start {
        return Err(Error::EmptyRange);
    }

    let span_ms = end
        .clone()
        .signed_duration_since(start.clone())
        .num_milliseconds();

    let mut dates = (0..count)
        .map(|_| {
            let offset_ms = (rng.f64() * span_ms as f64) as i64;
            let instant = start.clone() + Duration::milliseconds(offset_ms);
            with_daytime(&instant, rng)
        })
        .collect::<Result<Vec<_>, Error>>()?;

    dates.sort();
    Ok(dates)
}

// Keep the date of `instant` but pick a fresh time of day within working hours.
fn with_daytime<Tz: TimeZone>(
    instant: &DateTime<Tz>,
    rng: &mut fastrand::Rng,
) -> Result<DateTime<Tz>, Error> {
    let date = instant.date_naive();

    let hour = rng.u32(FIRST_HOUR..END_HOUR);
    let minute = rng.u32(0..60);
    let second = rng.u32(0..60);
    let milli = rng.u32(0..1000);

    let time = NaiveTime::from_hms_milli_opt(hour, minute, second, milli)
        .ok_or(Error::NoLocalTime(date))?;
    let naive = date.and_time(time);

    let tz = instant.timezone();

    // A daylight-saving gap swallows the wall-clock time; step past it.
    tz.from_local_datetime(&naive)
        .earliest()
        .or_else(|| tz.from_local_datetime(&(naive + Duration::hours(1))).earliest())
        .ok_or(Error::NoLocalTime(date))
}

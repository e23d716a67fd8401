//! Dispatch of one invocation: pick the conversion for the mode and argument
//! count, parse the arguments and render the result line.

use std::str::FromStr;

use anyhow::{Context, Result, bail};
use tracing::{debug, info};

use julian_day::{
    Clock, DateTimeFields, DayBoundary, days_to_ymd, fields_to_fracdays, fields_to_seconds,
    fracdays_to_fields, now_days, now_fracdays, now_seconds, seconds_to_fields, ymd_to_days,
};

use crate::cli::{Cli, Mode};

/// Runs the conversion selected by `cli` and returns the line to print.
pub fn run(cli: &Cli, clock: &impl Clock) -> Result<String> {
    let mode = cli.mode();
    let boundary = DayBoundary::from_astro(cli.astro);
    let values: Vec<&str> = cli.values.iter().map(String::as_str).collect();
    info!(%mode, ?boundary, args = values.len(), "converting");

    if mode == Mode::Days && cli.astro {
        debug!("day boundary has no effect on whole Julian days");
    }

    let line = match (mode, values.as_slice()) {
        (Mode::Days, []) => now_days(clock)?.to_string(),
        (Mode::Days, [julian_day]) => {
            let (year, month, day) = days_to_ymd(parse(julian_day, "julian day")?)?;
            format!("{year} {month} {day}")
        }
        (Mode::Days, [year, month, day]) => ymd_to_days(
            parse(year, "year")?,
            parse(month, "month")?,
            parse(day, "day")?,
        )?
        .to_string(),

        (Mode::FracDays, []) => now_fracdays(clock, boundary)?.to_string(),
        (Mode::FracDays, [julian_day]) => {
            fracdays_to_fields(parse(julian_day, "fractional julian day")?, boundary)?.to_string()
        }
        (Mode::FracDays, fields @ [_, _, _, _, _, _]) => {
            fields_to_fracdays(&parse_fields::<f64>(fields)?, boundary)?.to_string()
        }

        (Mode::Seconds, []) => now_seconds(clock, boundary)?.to_string(),
        (Mode::Seconds, [seconds]) => {
            seconds_to_fields(parse(seconds, "julian seconds")?, boundary)?.to_string()
        }
        (Mode::Seconds, fields @ [_, _, _, _, _, _]) => {
            fields_to_seconds(&parse_fields::<i64>(fields)?, boundary)?.to_string()
        }

        (mode, values) => {
            let [now, scalar, calendar] = mode.arities();
            bail!(
                "{mode} mode takes {now}, {scalar} or {calendar} arguments, got {}",
                values.len()
            )
        }
    };

    debug!(%line, "converted");
    Ok(line)
}

fn parse<T>(value: &str, what: &str) -> Result<T>
where
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    value
        .parse()
        .with_context(|| format!("invalid {what}: {value:?}"))
}

/// `fields` holds exactly six values: year month day hour minute second.
fn parse_fields<S>(fields: &[&str]) -> Result<DateTimeFields<S>>
where
    S: FromStr,
    S::Err: std::error::Error + Send + Sync + 'static,
{
    let [year, month, day, hour, minute, second] = fields else {
        bail!("expected 6 calendar fields, got {}", fields.len());
    };
    Ok(DateTimeFields::new(
        parse(year, "year")?,
        parse(month, "month")?,
        parse(day, "day")?,
        parse(hour, "hour")?,
        parse(minute, "minute")?,
        parse(second, "second")?,
    ))
}

use std::env;
use std::io;

use lunar_ephem::ephemeris::{ephemeris_series, EphemerisSpan};
use lunar_ephem::lunar_errors::LunarError;
use lunar_ephem::report::{
    ephemeris_summary, ephemeris_table, write_ephemeris_csv, ConsoleReporter, LogReporter,
    PositionReporter,
};
use lunar_ephem::time::parse_jde;

/// Build the span requested on the command line.
///
/// Arguments
/// -----------------
/// * `args`: positional arguments `<start> [end] [step]`; `start` and `end` are JDE values
///   or ISO 8601 dates, `step` is in days.
///
/// Return
/// ----------
/// * The validated span; with no argument, the Meeus example epoch (1992 April 12, 0h TD).
fn span_from_args(args: &[String]) -> Result<EphemerisSpan, LunarError> {
    let start = match args.first() {
        Some(s) => parse_jde(s)?,
        None => 2448724.5,
    };
    let end = match args.get(1) {
        Some(s) => parse_jde(s)?,
        None => start,
    };
    let step = match args.get(2) {
        Some(s) => s.trim().parse::<f64>().map_err(|e| {
            LunarError::InvalidSpanParameter(format!("step '{s}': {e}"))
        })?,
        None => 1.0,
    };

    EphemerisSpan::builder()
        .start_jde(start)
        .end_jde(end)
        .step_days(step)
        .build()
}

fn take_flag(args: &mut Vec<String>, flag: &str) -> bool {
    if let Some(pos) = args.iter().position(|a| a == flag) {
        args.remove(pos);
        true
    } else {
        false
    }
}

/// Moon position driver.
/// Usage:
///   moon_position [<start> [end] [step]] [--csv] [--verbose]
/// Examples:
///   moon_position 2448724.5
///   moon_position "2024-01-01T00:00:00 UTC" "2024-01-31T00:00:00 UTC" 1 --csv
///
/// Log output is controlled with `RUST_LOG` (e.g. `RUST_LOG=debug`).
fn main() -> Result<(), LunarError> {
    env_logger::init();

    let mut args = env::args().skip(1).collect::<Vec<_>>();
    let verbose = take_flag(&mut args, "--verbose");
    let csv = take_flag(&mut args, "--csv");

    let span = span_from_args(&args)?;
    let positions = ephemeris_series(&span);

    if csv {
        write_ephemeris_csv(io::stdout().lock(), &positions)?;
    } else if positions.len() == 1 {
        ConsoleReporter::stdout().report_all(&positions)?;
    } else {
        println!("{}", ephemeris_table(&positions));
    }

    if verbose {
        eprintln!("[moon_position] span = {span:?}");
        eprintln!("[moon_position] {}", ephemeris_summary(&positions));
        LogReporter::default().report_all(&positions)?;
    }

    Ok(())
}

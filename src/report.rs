//! # Reporting of lunar positions
//!
//! The lunar core returns plain values and performs no I/O. Everything that writes
//! positions somewhere lives here and is called **after** the computation has completed:
//!
//! - [`PositionReporter`] – hook receiving one finished position with its calendar epoch.
//!   - [`ConsoleReporter`] – human readable banner, written to any [`std::io::Write`].
//!   - [`LogReporter`] – one `log` record per position.
//! - [`ephemeris_table`] – tabulated ephemeris rendered with [`comfy-table`].
//! - [`write_ephemeris_csv`] – CSV export through `csv` and `serde`.
//!
//! ## Example
//!
//! ```rust
//! use lunar_ephem::moon_position::MoonPosition;
//! use lunar_ephem::report::{ConsoleReporter, PositionReporter};
//!
//! let mut out = Vec::new();
//! let mut reporter = ConsoleReporter::new(&mut out);
//! reporter.report_position(&MoonPosition::at_jde(2448724.5)).unwrap();
//!
//! let text = String::from_utf8(out).unwrap();
//! assert!(text.contains("Moon Position"));
//! ```
//!
//! [`comfy-table`]: https://crates.io/crates/comfy-table

use std::io::Write;

use comfy_table::{presets::UTF8_FULL, Cell, CellAlignment, ContentArrangement, Row, Table};
use itertools::{Itertools, MinMaxResult};
use log::{info, log, Level};

use crate::lunar_errors::LunarError;
use crate::moon_position::MoonPosition;
use crate::time::{jde_to_calendar_date, CalendarDate};

const BANNER_RULE: &str = "=============================================";

/// Collaborator receiving each finished lunar position.
pub trait PositionReporter {
    /// Report one position together with the calendar date of its epoch.
    fn report(&mut self, date: &CalendarDate, position: &MoonPosition) -> Result<(), LunarError>;

    /// Report a position, deriving the calendar date from its JDE.
    fn report_position(&mut self, position: &MoonPosition) -> Result<(), LunarError> {
        self.report(&jde_to_calendar_date(position.jde), position)
    }

    /// Report every position of a sequence, stopping at the first failure.
    fn report_all<'a, I>(&mut self, positions: I) -> Result<(), LunarError>
    where
        I: IntoIterator<Item = &'a MoonPosition>,
        Self: Sized,
    {
        positions
            .into_iter()
            .try_for_each(|p| self.report_position(p))
    }
}

/// Writes the calendar epoch followed by a banner with the Cartesian coordinates.
///
/// ```text
/// Year: 1992
/// Month: 4
/// Day: 12.000000
///
/// =============================================
///                 Moon Position
///                X = -251619.697297
///                Y = 268297.992270
///                Z = -20722.237874
/// =============================================
/// ```
pub struct ConsoleReporter<W: Write> {
    out: W,
}

impl<W: Write> ConsoleReporter<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    /// Give back the underlying writer.
    pub fn into_inner(self) -> W {
        self.out
    }
}

impl ConsoleReporter<std::io::Stdout> {
    /// Reporter printing on the standard output.
    pub fn stdout() -> Self {
        Self::new(std::io::stdout())
    }
}

impl<W: Write> PositionReporter for ConsoleReporter<W> {
    fn report(&mut self, date: &CalendarDate, position: &MoonPosition) -> Result<(), LunarError> {
        let out = &mut self.out;

        writeln!(out, "Year: {}", date.year)?;
        writeln!(out, "Month: {}", date.month)?;
        writeln!(out, "Day: {:.6}", date.day)?;

        writeln!(out)?;
        writeln!(out, "{BANNER_RULE}")?;
        writeln!(out, "                Moon Position")?;
        writeln!(out, "               X = {:.6}", position.cartesian.x)?;
        writeln!(out, "               Y = {:.6}", position.cartesian.y)?;
        writeln!(out, "               Z = {:.6}", position.cartesian.z)?;
        writeln!(out, "{BANNER_RULE}")?;
        writeln!(out)?;

        out.flush()?;
        Ok(())
    }
}

/// Emits each position as a single `log` record.
#[derive(Debug, Clone, Copy)]
pub struct LogReporter {
    level: Level,
}

impl LogReporter {
    pub fn new(level: Level) -> Self {
        Self { level }
    }

    pub fn level(&self) -> Level {
        self.level
    }
}

impl Default for LogReporter {
    fn default() -> Self {
        Self::new(Level::Info)
    }
}

impl PositionReporter for LogReporter {
    fn report(&mut self, date: &CalendarDate, position: &MoonPosition) -> Result<(), LunarError> {
        log!(
            self.level,
            "Moon at {date} (JDE {:.6}): λ = {:.6}°, β = {:.6}°, Δ = {:.3} km, xyz = [{:.3}, {:.3}, {:.3}] km",
            position.jde,
            position.longitude,
            position.latitude,
            position.distance,
            position.cartesian.x,
            position.cartesian.y,
            position.cartesian.z
        );
        Ok(())
    }
}

/// Render positions as a table.
///
/// Columns: `# | Date (TD) | JDE | λ [deg] | β [deg] | Δ [km] | X [km] | Y [km] | Z [km]`.
/// When the table holds at least one finite distance, a closing row gives the
/// smallest and largest Earth–Moon distance of the set.
///
/// Arguments
/// -----------------
/// * `positions`: the positions to render, in the order given.
///
/// Return
/// ----------
/// * The rendered table.
pub fn ephemeris_table(positions: &[MoonPosition]) -> String {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_content_arrangement(ContentArrangement::Disabled);

    table.set_header(vec![
        Cell::new("#"),
        Cell::new("Date (TD)"),
        Cell::new("JDE"),
        Cell::new("λ [deg]"),
        Cell::new("β [deg]"),
        Cell::new("Δ [km]"),
        Cell::new("X [km]"),
        Cell::new("Y [km]"),
        Cell::new("Z [km]"),
    ]);

    for (i, p) in positions.iter().enumerate() {
        let right = |text: String| Cell::new(text).set_alignment(CellAlignment::Right);

        table.add_row(Row::from(vec![
            right(i.to_string()),
            right(jde_to_calendar_date(p.jde).to_string()),
            right(format!("{:.6}", p.jde)),
            right(format!("{:.6}", p.longitude)),
            right(format!("{:.6}", p.latitude)),
            right(format!("{:.3}", p.distance)),
            right(format!("{:.3}", p.cartesian.x)),
            right(format!("{:.3}", p.cartesian.y)),
            right(format!("{:.3}", p.cartesian.z)),
        ]));
    }

    let range = positions
        .iter()
        .map(|p| p.distance)
        .filter(|d| d.is_finite())
        .minmax_by(|a, b| a.total_cmp(b));

    let extremes = match range {
        MinMaxResult::NoElements => None,
        MinMaxResult::OneElement(d) => Some((d, d)),
        MinMaxResult::MinMax(lo, hi) => Some((lo, hi)),
    };

    if let Some((lo, hi)) = extremes {
        table.add_row(vec![
            Cell::new(""),
            Cell::new("Δ min / max"),
            Cell::new(""),
            Cell::new(""),
            Cell::new(""),
            Cell::new(format!("{lo:.3} / {hi:.3}")).set_alignment(CellAlignment::Right),
        ]);
    }

    table.to_string()
}

/// Short one-line summary of a set of positions, e.g. for log records.
pub fn ephemeris_summary(positions: &[MoonPosition]) -> String {
    positions
        .iter()
        .map(|p| format!("{:.1}:{:.2}", p.jde, p.longitude))
        .join(", ")
}

/// Write positions as CSV, one row per position, with a header line.
///
/// Columns are the fields of [`MoonPositionRecord`](crate::moon_position::MoonPositionRecord):
/// `jde,longitude_deg,latitude_deg,distance_km,x_km,y_km,z_km`.
///
/// Errors
/// ------
/// * [`LunarError::CsvError`] if a record cannot be serialized or written.
/// * [`LunarError::IoError`] if the final flush fails.
pub fn write_ephemeris_csv<W: Write>(
    writer: W,
    positions: &[MoonPosition],
) -> Result<(), LunarError> {
    let mut wtr = csv::Writer::from_writer(writer);

    for p in positions {
        wtr.serialize(p.record())?;
    }
    wtr.flush()?;

    info!("Wrote {} lunar positions as CSV", positions.len());
    Ok(())
}

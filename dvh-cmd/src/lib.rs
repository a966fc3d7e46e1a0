//! Command implementations for DVH CLI.
//!
//! Each subcommand reads JSON produced by the observations or statistics
//! services and writes the chart-ready form as JSON or CSV.

use clap::{Subcommand, ValueEnum};

pub mod cursor;
pub mod output;
pub mod segments;
pub mod statistics;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Json,
    Csv,
}

#[derive(Subcommand)]
pub enum Command {
    /// Split a daily-value series into line segments
    Segments {
        /// Path to the daily-value series JSON
        #[arg(short = 's', long)]
        series: String,

        #[arg(short = 'f', long, value_enum, default_value_t = OutputFormat::Json)]
        format: OutputFormat,

        /// Write here instead of stdout
        #[arg(short = 'o', long)]
        output: Option<String>,
    },

    /// Pin a cyclical statistical series to a display window
    Statistics {
        /// Path to a JSON array of {month, day, value} points
        #[arg(short = 't', long)]
        stats: String,

        /// Window end, ISO-8601 (read as UTC unless it carries an offset)
        #[arg(short = 'e', long)]
        end_time: String,

        /// Window length as an ISO-8601 duration
        #[arg(short = 'p', long, default_value = "P1Y")]
        period: String,

        /// IANA time zone the calendar days are resolved in
        #[arg(short = 'z', long, default_value = "UTC")]
        time_zone: String,

        #[arg(short = 'f', long, value_enum, default_value_t = OutputFormat::Json)]
        format: OutputFormat,

        #[arg(short = 'o', long)]
        output: Option<String>,
    },

    /// Find the observation under the cursor and its screen position
    Cursor {
        #[arg(short = 's', long)]
        series: String,

        /// Milliseconds from the window start; the window end when omitted
        #[arg(long, allow_negative_numbers = true)]
        offset: Option<i64>,

        /// Chart width in pixels
        #[arg(long, default_value_t = 800.0)]
        width: f64,

        /// Chart height in pixels
        #[arg(long, default_value_t = 400.0)]
        height: f64,
    },
}

pub fn run(command: Command) -> anyhow::Result<()> {
    match command {
        Command::Segments {
            series,
            format,
            output,
        } => segments::run_segments(&series, format, output.as_deref()),
        Command::Statistics {
            stats,
            end_time,
            period,
            time_zone,
            format,
            output,
        } => statistics::run_statistics(
            &stats,
            &end_time,
            &period,
            &time_zone,
            format,
            output.as_deref(),
        ),
        Command::Cursor {
            series,
            offset,
            width,
            height,
        } => cursor::run_cursor(&series, offset, width, height),
    }
}

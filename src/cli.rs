use clap::Parser;
use monthcal::MonthYear;

/// Print one month of the Gregorian calendar.
#[derive(Parser, Debug)]
#[command(
    name = "monthcal",
    version,
    about = "Print one month of the Gregorian calendar",
    allow_negative_numbers = true
)]
pub struct Cli {
    /// Month number (1-12). Prompted for when omitted.
    pub month: Option<i32>,

    /// Full year, e.g. 2006. Prompted for when omitted.
    pub year: Option<i32>,

    /// Month and year in one value, `MM/YYYY` or `YYYY-MM`.
    #[arg(long, value_name = "MM/YYYY", conflicts_with_all = ["month", "year"])]
    pub date: Option<MonthYear>,

    /// Emit the month as JSON instead of a text grid.
    #[arg(long)]
    pub json: bool,

    /// Increase verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

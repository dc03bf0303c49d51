mod cli;
mod logging;

use std::collections::VecDeque;
use std::io::{self, BufRead, Write};
use std::process;

use anyhow::{Context, Result};
use clap::Parser;
use monthcal::{CalendarError, MonthYear, parse_int};
use tracing::info;

use crate::cli::Cli;

const MONTH_PROMPT: &str = "Enter a month: (1-12)";
const YEAR_PROMPT: &str = "Enter a year (e.g. 2006): ";

fn main() {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    let stdin = io::stdin();
    // JSON on stdout must stay parseable, so prompts go to stderr
    let result = if cli.json {
        run(&cli, stdin.lock(), io::stderr(), io::stdout())
    } else {
        run(&cli, stdin.lock(), io::stdout(), io::stdout())
    };

    if let Err(e) = result {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}

/// Resolves the month to print, prompting on `prompts` for missing values,
/// and writes the text grid or JSON to `out`.
fn run(cli: &Cli, input: impl BufRead, prompts: impl Write, mut out: impl Write) -> Result<()> {
    let month_year = match cli.date {
        Some(month_year) => month_year,
        None => {
            let mut prompter = Prompter::new(input, prompts);
            let month = match cli.month {
                Some(month) => month,
                None => prompter.next_int(MONTH_PROMPT).context("reading month")?,
            };
            let year = match cli.year {
                Some(year) => year,
                None => prompter.next_int(YEAR_PROMPT).context("reading year")?,
            };
            MonthYear::new(month, year)?
        }
    };
    info!(%month_year, json = cli.json, "printing month");

    if cli.json {
        serde_json::to_writer_pretty(&mut out, &month_year.view())
            .context("writing JSON output")?;
        writeln!(out)?;
    } else {
        write!(out, "{}", month_year.render())?;
    }
    out.flush()?;
    Ok(())
}

/// Reads whitespace separated integers, one per prompt, from a line source.
struct Prompter<R, W> {
    input: R,
    output: W,
    pending: VecDeque<String>,
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    const fn new(input: R, output: W) -> Self {
        Self {
            input,
            output,
            pending: VecDeque::new(),
        }
    }

    fn next_int(&mut self, prompt: &str) -> Result<i32> {
        write!(self.output, "{prompt}")?;
        self.output.flush()?;
        let token = self.next_token()?;
        Ok(parse_int(&token)?)
    }

    fn next_token(&mut self) -> Result<String> {
        loop {
            if let Some(token) = self.pending.pop_front() {
                return Ok(token);
            }
            let mut line = String::new();
            if self.input.read_line(&mut line)? == 0 {
                let err = CalendarError::InvalidInput("unexpected end of input".to_owned());
                return Err(err.into());
            }
            self.pending.extend(line.split_whitespace().map(str::to_owned));
        }
    }
}

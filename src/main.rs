use crate::flight::{Cabin, CabinError};
use crate::graph::RouteGraph;
use crate::report::ComparisonRow;
use crate::time::Time;
use clap::{Parser, Subcommand};
use colored::Colorize;
use std::path::{Path, PathBuf};
use std::str::FromStr;

mod flight;
mod graph;
mod itinerary;
mod report;
mod schedule;
mod search;
mod time;

#[derive(Parser)]
#[command(
    name = "skyfare",
    about = "Compare flight itineraries by arrival time and fare",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Compare the fastest and cheapest itineraries between two airports
    Compare {
        /// Schedule file; .csv selects the header-row format, anything
        /// else the whitespace-delimited line format
        schedule: PathBuf,
        /// Origin airport code
        origin: String,
        /// Destination airport code
        dest: String,
        /// Earliest acceptable departure time (HH:MM)
        departure_time: String,
        /// Restrict the cheapest-fare rows to these cabins (repeatable;
        /// defaults to economy, business and first)
        #[arg(long, value_parser = parse_cabin)]
        cabin: Vec<Cabin>,
    },
}

fn parse_cabin(s: &str) -> Result<Cabin, CabinError> {
    Cabin::from_str(s)
}

fn main() {
    let cli = Cli::parse();
    let result = match cli.command {
        Command::Compare {
            schedule,
            origin,
            dest,
            departure_time,
            cabin,
        } => run_compare(&schedule, &origin, &dest, &departure_time, &cabin),
    };

    if let Err(err) = result {
        eprintln!("{} {}", "error:".red().bold(), err);
        std::process::exit(1);
    }
}

fn run_compare(
    schedule_path: &Path,
    origin: &str,
    dest: &str,
    departure_time: &str,
    cabins: &[Cabin],
) -> Result<(), Box<dyn std::error::Error>> {
    let earliest = Time::parse_hhmm(departure_time)?;
    let flights = schedule::load_flights(schedule_path)?;
    let graph = RouteGraph::new(flights);

    let cabins = if cabins.is_empty() {
        &Cabin::ALL[..]
    } else {
        cabins
    };

    let mut rows = Vec::with_capacity(1 + cabins.len());
    rows.push(ComparisonRow::new(
        "Earliest arrival",
        None,
        search::find_earliest_itinerary(&graph, origin, dest, earliest),
    ));
    for &cabin in cabins {
        rows.push(ComparisonRow::new(
            format!("Cheapest ({cabin})"),
            Some(cabin),
            search::find_cheapest_itinerary(&graph, origin, dest, earliest, cabin),
        ));
    }

    println!("{}", report::format_comparison(origin, dest, &rows));
    Ok(())
}

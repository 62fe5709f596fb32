//! Interactive console for route queries
use std::path::PathBuf;

use rail_core::prelude::*;
use reedline_repl_rs::clap::{Arg, ArgMatches, Command};
use reedline_repl_rs::{Repl, Result};

/// Print network info
fn info(_args: ArgMatches, context: &mut Context) -> Result<Option<String>> {
    Ok(Some(format!(
        "Network has {} stations and {} connections",
        context.network.station_count(),
        context.network.edge_count()
    )))
}

/// List all stations alphabetically
fn stations(_args: ArgMatches, context: &mut Context) -> Result<Option<String>> {
    let mut names: Vec<&str> = context.network.stations().map(Station::as_str).collect();
    names.sort_unstable();
    Ok(Some(names.join("\n")))
}

/// Resolves a typed name, or explains why it could not be resolved.
fn resolve_station(
    network: &Network,
    input: &str,
    notes: &mut String,
) -> std::result::Result<Station, String> {
    match StationResolver::new(network).resolve(input) {
        Resolution::Exact(station) => Ok(station.clone()),
        Resolution::CaseInsensitive(station) => {
            notes.push_str(&format!(" Assuming you meant: '{}'\n", station));
            Ok(station.clone())
        }
        Resolution::Suggestions(suggestions) => {
            let mut msg = format!(
                " Station '{}' not found in network.\n\n Did you mean one of these stations?",
                input
            );
            for (i, station) in suggestions.iter().enumerate() {
                msg.push_str(&format!("\n {}. {}", i + 1, station));
            }
            Err(msg)
        }
        Resolution::NotFound => Err(format!(
            " Station '{}' not found in network. No close matches found.",
            input
        )),
        Resolution::Empty => Err(" Station name cannot be empty!".to_string()),
    }
}

fn route(args: ArgMatches, context: &mut Context) -> Result<Option<String>> {
    let from = args.get_one::<String>("from").map(String::as_str).unwrap_or_default();
    let to = args.get_one::<String>("to").map(String::as_str).unwrap_or_default();
    let criterion = args
        .get_one::<String>("criterion")
        .map(String::as_str)
        .unwrap_or("cost");

    let mut out = String::new();
    let departure = match resolve_station(&context.network, from, &mut out) {
        Ok(station) => station,
        Err(msg) => return Ok(Some(msg)),
    };
    let destination = match resolve_station(&context.network, to, &mut out) {
        Ok(station) => station,
        Err(msg) => return Ok(Some(msg)),
    };

    if departure == destination {
        out.push_str(" Departure and destination are the same!");
        return Ok(Some(out));
    }

    match find_route_by_key(
        &context.network,
        departure.as_str(),
        destination.as_str(),
        criterion,
    ) {
        Ok(route) => {
            out.push_str(&RouteReport::new(&route).to_string());
            context.last_route = Some(route);
        }
        Err(RouteError::Unreachable { edges_examined, .. }) => {
            out.push_str(&format!(
                " No route found between these stations! ({} connections explored)",
                edges_examined
            ));
        }
        Err(err) => out.push_str(&format!(" {}", err)),
    }

    Ok(Some(out))
}

fn save(args: ArgMatches, context: &mut Context) -> Result<Option<String>> {
    let Some(route) = &context.last_route else {
        return Ok(Some(" No route to save yet, run `route` first".to_string()));
    };

    let path = args
        .get_one::<String>("file")
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(DEFAULT_REPORT_FILE));

    match RouteReport::new(route).save(&path) {
        Ok(()) => Ok(Some(format!(
            " Route successfully saved to '{}'",
            path.display()
        ))),
        Err(err) => Ok(Some(format!(" {:#}", err))),
    }
}

struct Context {
    network: Network,
    last_route: Option<Route>,
}

impl Context {
    fn new(network: Network) -> Self {
        Self {
            network,
            last_route: None,
        }
    }
}

const HISTORY_FILE: &str = "history";

/// Network file passed as the first argument after the program name.
fn network_path(mut args: impl Iterator<Item = String>) -> Option<PathBuf> {
    args.nth(1).map(PathBuf::from)
}

fn main() -> Result<()> {
    env_logger::init();

    let Some(path_to_csv) = network_path(std::env::args()) else {
        eprintln!("Usage: repl <network.csv>");
        std::process::exit(1);
    };
    let network = match Network::from_csv(&path_to_csv) {
        Ok(network) => network,
        Err(err) => {
            eprintln!("Error loading network: {:#}", err);
            std::process::exit(1);
        }
    };
    println!(
        " Network loaded: {} stations, {} connections",
        network.station_count(),
        network.edge_count()
    );
    let context = Context::new(network);

    let mut repl = Repl::new(context)
        .with_name("Railway")
        .with_version("v0.1.0")
        .with_description("Find the cheapest or fastest train route between two stations")
        .with_banner("TRAIN TICKET SEARCH SYSTEM")
        .with_history(PathBuf::from(HISTORY_FILE), 100)
        .with_command(Command::new("info").about("Print network info"), info)
        .with_command(
            Command::new("stations").about("List all stations"),
            stations,
        )
        .with_command(
            Command::new("route")
                .arg(
                    Arg::new("from")
                        .required(true)
                        .help("Departure station"),
                )
                .arg(
                    Arg::new("to")
                        .required(true)
                        .help("Destination station"),
                )
                .arg(
                    Arg::new("criterion")
                        .required(false)
                        .help("Optimize for `cost` (default) or `time`"),
                )
                .about("Find the best route between two stations"),
            route,
        )
        .with_command(
            Command::new("save")
                .arg(
                    Arg::new("file")
                        .required(false)
                        .help("File to write, defaults to route_details.txt"),
                )
                .about("Save the last route found to a file"),
            save,
        );

    repl.run()
}

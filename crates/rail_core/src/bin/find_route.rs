use anyhow::{bail, Context};
use log::info;
use rail_core::prelude::*;

fn resolve<'a>(resolver: &StationResolver<'a>, input: &str) -> anyhow::Result<&'a Station> {
    match resolver.resolve(input) {
        Resolution::Exact(station) => Ok(station),
        Resolution::CaseInsensitive(station) => {
            println!(" Assuming you meant: '{}'", station);
            Ok(station)
        }
        Resolution::Suggestions(suggestions) => {
            let names: Vec<String> = suggestions.iter().map(|s| format!("'{}'", s)).collect();
            bail!(
                "Station '{}' not found in network. Did you mean one of these stations? {}",
                input,
                names.join(", ")
            )
        }
        Resolution::NotFound => bail!("Station '{}' not found in network", input),
        Resolution::Empty => bail!("Station name cannot be empty"),
    }
}

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let cfg = util::cli::parse();

    let network = Network::from_csv(&cfg.network_file)?;
    info!("{}", network);

    let resolver = StationResolver::new(&network);
    let departure = resolve(&resolver, &cfg.from)?;
    let destination = resolve(&resolver, &cfg.to)?;

    if departure == destination {
        bail!("Departure and destination are the same");
    }

    let route = match find_route(
        &network,
        departure.as_str(),
        destination.as_str(),
        cfg.criterion,
    ) {
        Ok(route) => route,
        Err(err @ RouteError::Unreachable { .. }) => {
            println!(" No route found between these stations!");
            return Err(err.into());
        }
        Err(err) => return Err(err.into()),
    };

    let report = RouteReport::new(&route);
    println!("{}", report);

    if let Some(path) = &cfg.save_to {
        report
            .save(path)
            .context("Route was found but could not be saved")?;
        println!("\n Route successfully saved to '{}'", path.display());
    }

    Ok(())
}

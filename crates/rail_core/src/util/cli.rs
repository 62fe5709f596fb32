use std::path::PathBuf;

use clap::Parser;

use crate::criterion::Criterion;

#[derive(Parser)]
#[command(author = "Daniel Holzner", version, about, long_about = None)]
struct Cli {
    /// Path to the railway network .csv file (station1,station2,cost,time)
    network_file: PathBuf,

    /// Departure station
    #[arg(short, long)]
    from: String,

    /// Destination station
    #[arg(short, long)]
    to: String,

    /// Optimize for the cheapest or the fastest route
    #[arg(short, long, value_enum, default_value_t = Criterion::Cost)]
    optimize: Criterion,

    /// Save the route details to this file
    #[arg(short, long, value_name = "file")]
    save: Option<PathBuf>,
}

#[derive(Debug, Clone)]
pub struct Cfg {
    pub network_file: PathBuf,
    pub from: String,
    pub to: String,
    pub criterion: Criterion,
    pub save_to: Option<PathBuf>,
}

impl From<Cli> for Cfg {
    fn from(cli: Cli) -> Self {
        Cfg {
            network_file: cli.network_file,
            from: cli.from,
            to: cli.to,
            criterion: cli.optimize,
            save_to: cli.save,
        }
    }
}

pub fn parse() -> Cfg {
    Cli::parse().into()
}

pub fn try_parse_from<I, T>(args: I) -> Result<Cfg, clap::Error>
where
    I: IntoIterator<Item = T>,
    T: Into<std::ffi::OsString> + Clone,
{
    Cli::try_parse_from(args).map(Cfg::from)
}

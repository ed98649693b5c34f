//! Wayfarer — a route finder for named geographic locations.

mod cli;
mod load;
mod logging;
mod map;

use clap::Parser;
use georoute_paths::{RouteReport, Router, Strategy, search};

use cli::Cli;
use map::RouteMap;

fn main() {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    if let Err(err) = run(&cli) {
        eprintln!("error: {err}");
        std::process::exit(1);
    }
}

fn run(cli: &Cli) -> Result<(), Box<dyn std::error::Error>> {
    let map = RouteMap::load(&cli.coordinates, &cli.adjacencies)?;
    log::info!(
        "loaded {} locations, {} edges",
        map.table.len(),
        map.graph.edge_entries() / 2
    );

    let from = map.resolve(&cli.start)?;
    let to = map.resolve(&cli.goal)?;
    let mut router = Router::new(map.table.len());

    if cli.all {
        for strategy in Strategy::ALL {
            let result = search(&mut router, &map, strategy, from, to);
            println!("[{strategy}]");
            println!("{}", RouteReport::new(&map.table, &result));
        }
    } else {
        let strategy: Strategy = cli.strategy.parse()?;
        let result = search(&mut router, &map, strategy, from, to);
        println!("{}", RouteReport::new(&map.table, &result));
    }

    Ok(())
}

// DvrSim: Distance-Vector Routing Simulator
// Copyright (C) 2021  Tibor Schneider
//
// This program is free software; you can redistribute it and/or modify
// it under the terms of the GNU General Public License as published by
// the Free Software Foundation; either version 2 of the License, or
// (at your option) any later version.
//
// This program is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
// GNU General Public License for more details.
//
// You should have received a copy of the GNU General Public License along
// with this program; if not, write to the Free Software Foundation, Inc.,
// 51 Franklin Street, Fifth Floor, Boston, MA 02110-1301 USA.

use dvrsim::input::{parse_events_file, parse_topology_file};
use dvrsim::netsim::{printer, NetworkError, Policy, Simulation};

use clap::Parser;
use log::*;
use std::error::Error;
use std::fs;
use std::path::PathBuf;
use std::str::FromStr;

fn main() -> Result<(), Box<dyn Error>> {
    // run clap
    let args = CommandLineArguments::parse();

    // initialize the env logger
    pretty_env_logger::init();

    // read the input once, every policy gets its own copy
    let net = parse_topology_file(&args.topology_file)?;
    let events = parse_events_file(&args.event_file)?;
    info!("Topology has {} routers and {} events", net.num_routers(), events.len());
    let detailed = args.verbose == Verbosity::EveryRound;

    for policy in Policy::ALL.iter() {
        info!("Simulating the {} policy", policy);
        let mut sim = Simulation::new(net.clone(), events.clone(), *policy)?;
        if detailed {
            sim = sim.with_trace();
        }

        let result = match sim.run() {
            Ok(result) => result,
            Err(e @ NetworkError::CountToInfinity { .. }) => {
                error!("Encountered a count-to-infinity instability.");
                return Err(e.into());
            }
            Err(e) => return Err(e.into()),
        };

        let filename = args.output_dir.join(printer::output_file_name(*policy, detailed));
        fs::write(&filename, printer::report(&result))?;
        info!(
            "{}: {}, written to {}",
            policy,
            printer::convergence_delay(result.delay()),
            filename.display()
        );
    }

    Ok(())
}

/// Simulate distance-vector routing with the basic algorithm, split horizon, and split horizon
/// with poison reverse. For every policy, the final routing tables and the convergence delay are
/// written to a separate file.
#[derive(Parser, Debug)]
#[clap(name = "dvrsim", author = "Tibor Schneider")]
struct CommandLineArguments {
    /// Topology file: the number of routers on the first line, then one `router router cost`
    /// link per line.
    topology_file: PathBuf,
    /// Event file: one `round router router cost` event per line, negative costs remove the link.
    event_file: PathBuf,
    /// Write the routing tables after every round (1), or only the final tables (0).
    verbose: Verbosity,
    /// Directory in which the output files are created
    #[clap(short = 'o', long, default_value = ".")]
    output_dir: PathBuf,
}

/// Level of detail of the output files
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Verbosity {
    FinalTable,
    EveryRound,
}

impl FromStr for Verbosity {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "0" => Ok(Self::FinalTable),
            "1" => Ok(Self::EveryRound),
            _ => Err(format!("verbose must be either 0 or 1, got {}", s)),
        }
    }
}

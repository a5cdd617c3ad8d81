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

use crate::example_networks::*;
use crate::netsim::{printer, EventSchedule, Policy, Simulation};

#[test]
fn test_pretty_table() {
    let result =
        Simulation::new(LineNet::net(3), EventSchedule::new(), Policy::Basic).unwrap().run().unwrap();
    assert_eq!(
        printer::pretty_table(&result.table),
        "1  1,0    2,1    2,2\n2  1,1    2,0    3,1\n3  2,2    2,1    3,0\n"
    );
}

#[test]
fn test_pretty_table_padding() {
    let result = Simulation::new(
        CountToInfinityNet::net(0),
        CountToInfinityNet::events(1),
        Policy::SplitHorizon,
    )
    .unwrap()
    .run()
    .unwrap();
    assert_eq!(
        printer::pretty_table(&result.table),
        "1  1,0    -1,-1    -1,-1    -1,-1\n\
         2  3,4    2,0      3,1      4,1  \n\
         3  4,3    2,1      3,0      4,1  \n\
         4  3,3    2,1      3,1      4,0  \n"
    );
}

#[test]
fn test_convergence_delay() {
    assert_eq!(printer::convergence_delay(0), "Convergence Delay: 0 rounds");
    assert_eq!(printer::convergence_delay(1), "Convergence Delay: 1 round");
    assert_eq!(printer::convergence_delay(3), "Convergence Delay: 3 rounds");
}

#[test]
fn test_report() {
    let result = Simulation::new(LineNet::net(3), EventSchedule::new(), Policy::SplitHorizon)
        .unwrap()
        .run()
        .unwrap();
    assert_eq!(
        printer::report(&result),
        "1  1,0    2,1    2,2\n2  1,1    2,0    3,1\n3  2,2    2,1    3,0\n\nConvergence Delay: 2 rounds"
    );

    let result = Simulation::new(LineNet::net(3), EventSchedule::new(), Policy::SplitHorizon)
        .unwrap()
        .with_trace()
        .run()
        .unwrap();
    let report = printer::report(&result);
    assert!(report.starts_with("Round 1\n1  1,0      2,1    -1,-1\n"));
    assert!(report.contains("Round 2\n1  1,0    2,1    2,2\n"));
    assert!(!report.contains("Round 3"));
    assert!(report.ends_with("\n\nConvergence Delay: 2 rounds"));
}

#[test]
fn test_output_file_name() {
    assert_eq!(printer::output_file_name(Policy::Basic, false), "output-basic.txt");
    assert_eq!(
        printer::output_file_name(Policy::SplitHorizon, true),
        "output-split-horizon-detailed.txt"
    );
    assert_eq!(
        printer::output_file_name(Policy::SplitHorizonPoisonReverse, false),
        "output-split-horizon-with-poison-reverse.txt"
    );
}

#[test]
fn test_routing_table_dump() {
    let mut net = LineNet::net(3);
    net.seed_routing_tables();
    let table = net.get_routing_table(2).unwrap();
    assert_eq!(printer::routing_table(table), "1, X, X\nX, X, X\nX, X, 1");
    assert_eq!(printer::coordinates(table), "[(1, 1), None, (3, 3)]");
    assert!(printer::network(&net).starts_with("Router 1:\n"));
}

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

use crate::input::*;
use crate::netsim::{NetworkError, Policy, Simulation};
use maplit::btreemap;

#[test]
fn test_parse_topology() {
    let net = parse_topology_str("4\n1 2 1\n2 3 4\n\n  3 4 2  \n").unwrap();
    assert_eq!(net.num_routers(), 4);
    assert_eq!(net.get_routers(), vec![1, 2, 3, 4]);
    assert_eq!(net.get_neighbors(3), btreemap! {2 => 4, 4 => 2});
    assert_eq!(net.get_link_weight(1, 3), None);
}

#[test]
fn test_parse_isolated_routers() {
    let net = parse_topology_str("5\n1 2 1\n").unwrap();
    assert_eq!(net.get_routers(), vec![1, 2, 3, 4, 5]);
    assert!(net.get_neighbors(5).is_empty());

    // isolated routers are unreachable
    let result =
        Simulation::new(net, parse_events_str("").unwrap(), Policy::Basic).unwrap().run().unwrap();
    assert_eq!(result.table.get_next_hop(1, 2), Some(2));
    assert_eq!(result.table.get_next_hop(1, 5), None);
    assert_eq!(result.table.get(5, 1).unwrap().hop_count(), -1);
}

#[test]
fn test_parse_topology_errors() {
    assert!(matches!(parse_topology_str(""), Err(InputError::MissingRouterCount)));
    assert!(matches!(parse_topology_str("\n\n"), Err(InputError::MissingRouterCount)));
    assert!(matches!(
        parse_topology_str("\nthree\n"),
        Err(InputError::InvalidRouterCount { line: 2, .. })
    ));
    assert!(matches!(parse_topology_str("0\n"), Err(InputError::InvalidRouterCount { .. })));
    assert!(matches!(
        parse_topology_str("3\n1 2 1\n2 3\n"),
        Err(InputError::MalformedLine { line: 3, .. })
    ));
    assert!(matches!(
        parse_topology_str("3\n1 2 1 1\n"),
        Err(InputError::MalformedLine { line: 2, .. })
    ));
    assert!(matches!(
        parse_topology_str("3\n1 2 0\n"),
        Err(InputError::MalformedLine { line: 2, .. })
    ));
    assert!(matches!(
        parse_topology_str("3\n1 2 -1\n"),
        Err(InputError::MalformedLine { line: 2, .. })
    ));
    assert!(matches!(
        parse_topology_str("3\n1 4 1\n"),
        Err(InputError::NetworkError(NetworkError::InvalidRouterId { router: 4, num_routers: 3 }))
    ));
    assert!(matches!(
        parse_topology_str("3\n2 2 1\n"),
        Err(InputError::NetworkError(NetworkError::SelfLoop(2)))
    ));
}

#[test]
fn test_parse_events() {
    let schedule = parse_events_str("4 1 3 -1\n\n6 1 3 2\n4 2 3 7\n").unwrap();
    assert_eq!(schedule.len(), 3);
    assert_eq!(schedule.last_round(), Some(6));
    let events: Vec<_> = schedule.iter().collect();
    assert!(events[0].is_removal());
    assert_eq!((events[0].source, events[0].target), (1, 3));
    assert_eq!(events[1].change.weight(), Some(7));
    assert_eq!(events[2].round, 6);

    assert!(parse_events_str("").unwrap().is_empty());
}

#[test]
fn test_parse_events_errors() {
    assert!(matches!(
        parse_events_str("1 1 2 3\n"),
        Err(InputError::NetworkError(NetworkError::EventTooEarly(_)))
    ));
    assert!(matches!(parse_events_str("4 1 3\n"), Err(InputError::MalformedLine { line: 1, .. })));
    assert!(matches!(
        parse_events_str("4 1 3 -1\nfoo 1 3 2\n"),
        Err(InputError::MalformedLine { line: 2, .. })
    ));
    assert!(matches!(
        parse_events_str("4 1 3 99999999999\n"),
        Err(InputError::MalformedLine { line: 1, .. })
    ));
}

#[test]
fn test_missing_file() {
    assert!(matches!(
        parse_topology_file("this/file/does/not/exist.txt"),
        Err(InputError::IoError(_))
    ));
    assert!(matches!(
        parse_events_file("this/file/does/not/exist.txt"),
        Err(InputError::IoError(_))
    ));
}

#[test]
fn test_error_conversion() {
    let err: crate::Error = parse_topology_str("").unwrap_err().into();
    assert!(!err.is_count_to_infinity());
    let err: crate::Error =
        NetworkError::CountToInfinity { round: 3, router: 1, destination: 2, hop_count: 100 }.into();
    assert!(err.is_count_to_infinity());
}

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

use crate::netsim::router::*;
use crate::netsim::Cost::{self, Finite, Infinite};

#[test]
fn test_empty_table() {
    let t = RoutingTable::new(1, 4);
    assert_eq!(t.router_id(), 1);
    assert_eq!(t.num_routers(), 4);
    for to in 1..=4 {
        assert_eq!(t.get_next_hop(to), None);
        for via in 1..=4 {
            assert_eq!(t.get_cost(to, via), None);
        }
    }
}

#[test]
fn test_set_cost_accept_rules() {
    let mut t = RoutingTable::new(1, 4);

    // nothing stored yet
    assert!(t.set_cost(3, 2, Finite(5)));
    assert_eq!(t.get_cost(3, 2), Some(Finite(5)));

    // same value is accepted, but nothing changes
    assert!(!t.set_cost(3, 2, Finite(5)));

    // better value
    assert!(t.set_cost(3, 2, Finite(4)));
    assert_eq!(t.get_cost(3, 2), Some(Finite(4)));

    // worse value over a next hop which is not selected
    assert!(!t.set_cost(3, 2, Finite(7)));
    assert_eq!(t.get_cost(3, 2), Some(Finite(4)));

    // worse value over the selected next hop
    assert!(t.update_coordinates());
    assert_eq!(t.get_next_hop(3), Some(2));
    assert!(t.set_cost(3, 2, Finite(7)));
    assert_eq!(t.get_cost(3, 2), Some(Finite(7)));
    assert!(t.set_cost(3, 2, Infinite));
    assert_eq!(t.get_cost(3, 2), Some(Infinite));
}

#[test]
fn test_set_cost_rejects_self() {
    let mut t = RoutingTable::new(2, 3);
    assert!(!t.set_cost(2, 1, Finite(1)));
    assert!(!t.set_cost(3, 2, Finite(1)));
    assert_eq!(t.get_cost(2, 1), None);
    assert_eq!(t.get_cost(3, 2), None);
}

#[test]
fn test_hop_count_untouched_by_set_cost() {
    let mut t = RoutingTable::new(1, 3);
    t.set_hop_count(3, 2, 4);
    assert!(t.set_cost(3, 2, Finite(2)));
    assert_eq!(t.get_hop_count(3, 2), 4);
}

#[test]
fn test_update_coordinates_min_cost() {
    let mut t = RoutingTable::new(1, 4);
    t.set_cost(2, 2, Finite(5));
    t.set_cost(2, 3, Finite(2));
    t.set_cost(2, 4, Finite(3));
    t.set_hop_count(2, 3, 2);

    assert!(t.update_coordinates());
    assert_eq!(t.get_next_hop(2), Some(3));
    assert_eq!(t.get_selected_cost(2), Some(Finite(2)));
    assert_eq!(t.get_selected_hop_count(2), Some(2));

    // nothing changed, second call reports no change
    assert!(!t.update_coordinates());
}

#[test]
fn test_update_coordinates_tie_break() {
    let mut t = RoutingTable::new(1, 4);
    t.set_cost(3, 4, Finite(2));
    t.set_cost(3, 2, Finite(2));
    assert!(t.update_coordinates());
    assert_eq!(t.get_next_hop(3), Some(2));

    // a finite cost always wins against infinity
    let mut t = RoutingTable::new(1, 4);
    t.set_cost(3, 2, Infinite);
    t.set_cost(3, 4, Finite(100));
    t.update_coordinates();
    assert_eq!(t.get_next_hop(3), Some(4));
}

#[test]
fn test_update_coordinates_unreachable() {
    let mut t = RoutingTable::new(1, 3);
    t.set_cost(3, 2, Finite(2));
    assert!(t.update_coordinates());

    t.set_cost_from_event(3, 2, None);
    assert!(t.update_coordinates());
    assert_eq!(t.get_next_hop(3), None);
    assert_eq!(t.get_selected_cost(3), None);
    assert_eq!(t.get_selected_hop_count(3), None);
}

#[test]
fn test_freeze() {
    let mut t = RoutingTable::new(1, 3);
    t.set_cost(2, 2, Finite(1));
    t.update_coordinates();

    let frozen = t.freeze();
    t.set_cost(3, 2, Finite(2));
    t.set_cost(2, 2, Finite(7));
    t.update_coordinates();

    assert_eq!(frozen.get_cost(3, 2), None);
    assert_eq!(frozen.get_cost(2, 2), Some(Finite(1)));
    assert_eq!(frozen.get_next_hop(3), None);
    assert_eq!(t.get_cost(2, 2), Some(Finite(7)));
    assert_eq!(t.get_next_hop(3), Some(2));
}

#[test]
fn test_cost_arithmetic() {
    assert!(Finite(5) < Infinite);
    assert!(Finite(0) < Finite(1));
    assert_eq!(Finite(2) + 3, Finite(5));
    assert_eq!(Infinite + 3, Infinite);
    assert_eq!(Finite(u32::MAX) + 1, Infinite);
    assert_eq!(Cost::from(4), Finite(4));
    assert_eq!(Infinite.finite(), None);
    assert!(Infinite.is_infinite());
    assert_eq!(Infinite.to_string(), "inf");
    assert_eq!(Finite(12).to_string(), "12");
}

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
use crate::netsim::Cost::{Finite, Infinite};
use crate::netsim::{Network, Policy, SimulationContext};

/// Seed the line `1 -- 2 -- 3`, and perform `rounds` rounds of propagation.
fn line_after(policy: Policy, rounds: usize) -> (Network, SimulationContext) {
    let mut net = LineNet::net(3);
    let mut ctx = SimulationContext::new(&net);
    net.seed_routing_tables();
    for _ in 0..rounds {
        policy.propagate(&mut net, &mut ctx).unwrap();
        net.update_coordinates(&mut ctx);
    }
    (net, ctx)
}

#[test]
fn test_advertisement() {
    for policy in Policy::ALL.iter() {
        assert_eq!(policy.advertisement(Finite(3), 2, false), Some(Finite(5)));
        assert_eq!(policy.advertisement(Infinite, 2, false), Some(Infinite));
    }
    assert_eq!(Policy::Basic.advertisement(Finite(3), 2, true), Some(Finite(5)));
    assert_eq!(Policy::SplitHorizon.advertisement(Finite(3), 2, true), None);
    assert_eq!(Policy::SplitHorizonPoisonReverse.advertisement(Finite(3), 2, true), Some(Infinite));
}

#[test]
fn test_policy_names() {
    assert_eq!(Policy::Basic.name(), "basic");
    assert_eq!(Policy::SplitHorizon.to_string(), "split-horizon");
    assert_eq!(Policy::SplitHorizonPoisonReverse.name(), "split-horizon-with-poison-reverse");
}

#[test]
fn test_first_round() {
    for policy in Policy::ALL.iter() {
        let (net, ctx) = line_after(*policy, 1);

        let t1 = net.get_routing_table(1).unwrap();
        assert_eq!(t1.get_cost(3, 2), Some(Finite(2)));
        assert_eq!(t1.get_hop_count(3, 2), 2);
        assert_eq!(t1.get_next_hop(3), Some(2));
        let t3 = net.get_routing_table(3).unwrap();
        assert_eq!(t3.get_cost(1, 2), Some(Finite(2)));
        assert_eq!(t3.get_next_hop(1), Some(2));

        // router 2 has nothing new to learn
        let t2 = net.get_routing_table(2).unwrap();
        assert_eq!(t2.get_cost(3, 1), None);
        assert_eq!(t2.get_cost(1, 3), None);

        assert!(ctx.is_dirty(1));
        assert!(!ctx.is_dirty(2));
        assert!(ctx.is_dirty(3));
    }
}

#[test]
fn test_advertise_from_frozen_table() {
    let mut net = LineNet::net(4);
    let mut ctx = SimulationContext::new(&net);
    net.seed_routing_tables();

    assert!(Policy::Basic.propagate(&mut net, &mut ctx).unwrap());

    // router 2 learns about 4 in this round, but router 1 only sees the previous state of 2
    assert_eq!(net.get_routing_table(2).unwrap().get_cost(4, 3), Some(Finite(2)));
    let t1 = net.get_routing_table(1).unwrap();
    for via in 1..=4 {
        assert_eq!(t1.get_cost(4, via), None);
    }
    let t4 = net.get_routing_table(4).unwrap();
    for via in 1..=4 {
        assert_eq!(t4.get_cost(1, via), None);
    }
}

#[test]
fn test_route_back_to_neighbor() {
    // in the second round, router 1 advertises its route towards 3 back to 2.
    let (net, _) = line_after(Policy::Basic, 2);
    let t2 = net.get_routing_table(2).unwrap();
    assert_eq!(t2.get_cost(3, 1), Some(Finite(3)));
    assert_eq!(t2.get_hop_count(3, 1), 3);
    assert_eq!(t2.get_next_hop(3), Some(3));

    let (net, _) = line_after(Policy::SplitHorizon, 2);
    assert_eq!(net.get_routing_table(2).unwrap().get_cost(3, 1), None);

    let (net, _) = line_after(Policy::SplitHorizonPoisonReverse, 2);
    let t2 = net.get_routing_table(2).unwrap();
    assert_eq!(t2.get_cost(3, 1), Some(Infinite));
    assert_eq!(t2.get_hop_count(3, 1), 3);
    assert_eq!(t2.get_next_hop(3), Some(3));
}

#[test]
fn test_clean_routers_stay_silent() {
    let mut net = LineNet::net(3);
    let mut ctx = SimulationContext::new(&net);
    net.seed_routing_tables();
    for r in 1..=3 {
        ctx.set_dirty(r, false);
    }
    assert!(!Policy::Basic.propagate(&mut net, &mut ctx).unwrap());
    assert_eq!(net.get_routing_table(1).unwrap().get_cost(3, 2), None);
    assert!(ctx.dirty_routers().is_empty());
}

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

//! # Random Networks

use crate::netsim::{Event, EventSchedule, LinkWeight, Network, RouterId, FIRST_EVENT_ROUND};
use rand::prelude::*;

/// Maximum weight of a randomly generated link
const MAX_RANDOM_WEIGHT: LinkWeight = 10;

/// Generate a random connected network with `num_routers` routers. First, a random spanning tree
/// is generated, where every router `r > 1` is connected to a random router `< r`. Then,
/// `extra_links` additional links are added between random pairs of routers (pairs which are
/// already connected are skipped). The result only depends on the seed.
pub fn random_net(num_routers: usize, extra_links: usize, seed: u64) -> Network {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut net = Network::new(num_routers);
    let n = num_routers as RouterId;

    for r in 1..=n {
        net.add_router(r).unwrap();
    }
    for r in 2..=n {
        let parent = rng.gen_range(1, r);
        net.add_link(r, parent, rng.gen_range(1, MAX_RANDOM_WEIGHT + 1)).unwrap();
    }
    if n >= 2 {
        for _ in 0..extra_links {
            let a = rng.gen_range(1, n + 1);
            let b = rng.gen_range(1, n + 1);
            if a != b && net.get_link_weight(a, b).is_none() {
                net.add_link(a, b, rng.gen_range(1, MAX_RANDOM_WEIGHT + 1)).unwrap();
            }
        }
    }

    net
}

/// Generate `num_events` random events on a network with `num_routers` routers. Every event is
/// scheduled two rounds after the previous one, and either removes the link (with probability
/// 1/4) or sets it to a random weight. The result only depends on the seed.
pub fn random_events(num_routers: usize, num_events: usize, seed: u64) -> EventSchedule {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut schedule = EventSchedule::new();
    let n = num_routers as RouterId;
    if n < 2 {
        return schedule;
    }

    for i in 0..num_events {
        let a = rng.gen_range(1, n + 1);
        let mut b = rng.gen_range(1, n);
        if b >= a {
            b += 1;
        }
        let cost: i64 = if rng.gen_range(0, 4) == 0 {
            -1
        } else {
            rng.gen_range(1, MAX_RANDOM_WEIGHT as i64 + 1)
        };
        let round = FIRST_EVENT_ROUND + 1 + 2 * i;
        schedule.add_event(Event::new(round, a, b, cost).unwrap()).unwrap();
    }

    schedule
}

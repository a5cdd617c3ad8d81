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

//! # Propagation Policies
//!
//! A propagation policy decides what a router advertises to a neighbor, if the route it
//! advertises was learned from that same neighbor. All policies share the same propagation
//! algorithm, see [`Policy::propagate`].

use crate::netsim::{Cost, LinkWeight, Network, NetworkError, SimulationContext};
use log::*;
use std::fmt;

/// Advertisement policy of the distance-vector protocol
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Policy {
    /// Advertise every route to every neighbor.
    Basic,
    /// Never advertise a route back to the neighbor it was learned from.
    SplitHorizon,
    /// Advertise an infinite cost back to the neighbor a route was learned from.
    SplitHorizonPoisonReverse,
}

impl Policy {
    /// All policies, in the order in which they are usually compared.
    pub const ALL: [Policy; 3] =
        [Policy::Basic, Policy::SplitHorizon, Policy::SplitHorizonPoisonReverse];

    /// Returns the name of the policy, as used in file names.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Basic => "basic",
            Self::SplitHorizon => "split-horizon",
            Self::SplitHorizonPoisonReverse => "split-horizon-with-poison-reverse",
        }
    }

    /// Compute the cost advertised to a neighbor, given the cost of the sender's selected route,
    /// and the weight of the link towards the neighbor. `via_neighbor` is true if the sender's
    /// selected route goes through that neighbor. Returns `None` if nothing is advertised.
    pub fn advertisement(&self, cost: Cost, weight: LinkWeight, via_neighbor: bool) -> Option<Cost> {
        match (self, via_neighbor) {
            (_, false) | (Self::Basic, true) => Some(cost + weight),
            (Self::SplitHorizon, true) => None,
            (Self::SplitHorizonPoisonReverse, true) => Some(Cost::Infinite),
        }
    }

    /// # Propagate one round of advertisements
    ///
    /// All routing tables are frozen before anything is modified. Then, every router which is
    /// dirty at the start of the round sends its selected routes (taken from its frozen table) to
    /// all of its neighbors. For a destination `d` with selected next hop `via` in the frozen
    /// table of the sender `r`, the neighbor `m` receives the cost `cost(d, via) + w(m, r)`,
    /// altered by [`Policy::advertisement`]. If the neighbor accepts the route (see
    /// [`RoutingTable::set_cost`](crate::netsim::router::RoutingTable::set_cost)), its hop count
    /// is set to one more than the sender's hop count, and the neighbor is marked as dirty.
    ///
    /// Returns true if any routing table was changed during this round.
    pub fn propagate(
        &self,
        net: &mut Network,
        ctx: &mut SimulationContext,
    ) -> Result<bool, NetworkError> {
        let frozen = net.freeze();
        let senders = ctx.dirty_routers();
        let destinations = net.get_routers();
        let mut changed = false;

        for router in senders {
            let table = frozen.get(&router).ok_or(NetworkError::RouterNotFound(router))?;
            for (neighbor, weight) in net.get_neighbors(router) {
                for destination in destinations.iter().copied().filter(|d| *d != router) {
                    let via = match table.get_next_hop(destination) {
                        Some(via) => via,
                        None => continue,
                    };
                    let cost = match table.get_cost(destination, via) {
                        Some(cost) => cost,
                        None => continue,
                    };
                    let advertised = match self.advertisement(cost, weight, via == neighbor) {
                        Some(advertised) => advertised,
                        None => continue,
                    };
                    let receiver = net.get_routing_table_mut(neighbor)?;
                    if receiver.set_cost(destination, router, advertised) {
                        receiver.set_hop_count(
                            destination,
                            router,
                            1 + table.get_hop_count(destination, via),
                        );
                        trace!(
                            "{} -> {}: route towards {} with cost {} accepted",
                            router,
                            neighbor,
                            destination,
                            advertised
                        );
                        ctx.mark_dirty(neighbor);
                        changed = true;
                    }
                }
            }
        }

        Ok(changed)
    }
}

impl fmt::Display for Policy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}


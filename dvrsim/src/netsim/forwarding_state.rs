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

//! # This module contains the implementation of the global forwarding state. This is the
//! observable result of a round: for every router and every destination, the selected next hop
//! together with the cost and hop count of the selected route.

use crate::netsim::{Cost, HopCount, Network, NetworkError, RouterId};

/// Single cell of the forwarding state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TableEntry {
    /// The destination is the router itself.
    SelfRoute,
    /// The router knows no route towards the destination.
    Unreachable,
    /// The router forwards towards the destination over `next_hop`.
    Route {
        /// Selected next hop
        next_hop: RouterId,
        /// Cost of the selected route
        cost: Cost,
        /// Hop count of the selected route
        hop_count: HopCount,
    },
}

impl TableEntry {
    /// Returns the hop count as shown in the output. The self route has zero hops, unreachable
    /// destinations have `-1` hops.
    pub fn hop_count(&self) -> HopCount {
        match self {
            Self::SelfRoute => 0,
            Self::Unreachable => -1,
            Self::Route { hop_count, .. } => *hop_count,
        }
    }

    /// Returns the next hop as shown in the output. For the self route, this is the destination
    /// itself, and for unreachable destinations, it is `-1`.
    pub fn next_hop_label(&self, destination: RouterId) -> i64 {
        match self {
            Self::SelfRoute => destination as i64,
            Self::Unreachable => -1,
            Self::Route { next_hop, .. } => *next_hop as i64,
        }
    }

    /// Returns the cost as shown in the output: `0` for the self route and `-1` for unreachable
    /// destinations.
    pub fn cost_label(&self) -> String {
        match self {
            Self::SelfRoute => String::from("0"),
            Self::Unreachable => String::from("-1"),
            Self::Route { cost, .. } => cost.to_string(),
        }
    }
}

/// # Forwarding State
///
/// `N x N` table, where the cell `(router, destination)` contains the [`TableEntry`] of `router`
/// towards `destination`. The table is stored as a flattened vector.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ForwardingState {
    num_routers: usize,
    state: Vec<TableEntry>,
}

impl ForwardingState {
    /// Extracts the forwarding state from the network.
    pub fn from_net(net: &Network) -> Self {
        let num_routers = net.num_routers();
        let mut state = Vec::with_capacity(num_routers * num_routers);
        for router in 1..=num_routers as RouterId {
            let table = net.get_routing_table(router).ok();
            for destination in 1..=num_routers as RouterId {
                let entry = if router == destination {
                    TableEntry::SelfRoute
                } else {
                    table
                        .and_then(|t| {
                            let next_hop = t.get_next_hop(destination)?;
                            let cost = t.get_cost(destination, next_hop)?;
                            let hop_count = t.get_hop_count(destination, next_hop);
                            Some(TableEntry::Route { next_hop, cost, hop_count })
                        })
                        .unwrap_or(TableEntry::Unreachable)
                };
                state.push(entry);
            }
        }
        Self { num_routers, state }
    }

    /// Returns the number of routers (rows) in the table
    pub fn num_routers(&self) -> usize {
        self.num_routers
    }

    /// Returns the entry of `router` towards `destination`, or `None` if either of them is out of
    /// range.
    pub fn get(&self, router: RouterId, destination: RouterId) -> Option<&TableEntry> {
        if router == 0 || destination == 0 {
            return None;
        }
        let (r, d) = ((router - 1) as usize, (destination - 1) as usize);
        if r >= self.num_routers || d >= self.num_routers {
            return None;
        }
        self.state.get(r * self.num_routers + d)
    }

    /// Returns the selected next hop of `router` towards `destination`.
    pub fn get_next_hop(&self, router: RouterId, destination: RouterId) -> Option<RouterId> {
        match self.get(router, destination)? {
            TableEntry::Route { next_hop, .. } => Some(*next_hop),
            _ => None,
        }
    }

    /// Iterate over all rows of the table, in the order of the router ID.
    pub fn rows(&self) -> impl Iterator<Item = &[TableEntry]> {
        self.state.chunks(self.num_routers.max(1))
    }

    /// Returns the first route (ordered by router and destination) whose hop count is at least
    /// `limit`, as a tuple `(router, destination, hop_count)`.
    pub fn find_hop_count_at_least(
        &self,
        limit: HopCount,
    ) -> Option<(RouterId, RouterId, HopCount)> {
        self.state.iter().enumerate().find(|(_, e)| e.hop_count() >= limit).map(|(i, e)| {
            (
                (i / self.num_routers + 1) as RouterId,
                (i % self.num_routers + 1) as RouterId,
                e.hop_count(),
            )
        })
    }

    /// Follow the selected next hops from `router` towards `destination`, and return the path
    /// (including both endpoints). If some router on the path has no route, a
    /// [`NetworkError::ForwardingBlackHole`] is returned. If the path visits a router twice, a
    /// [`NetworkError::ForwardingLoop`] is returned.
    pub fn get_route(
        &self,
        router: RouterId,
        destination: RouterId,
    ) -> Result<Vec<RouterId>, NetworkError> {
        let mut path = vec![router];
        let mut current = router;
        while current != destination {
            match self.get_next_hop(current, destination) {
                Some(next) if path.contains(&next) => {
                    path.push(next);
                    return Err(NetworkError::ForwardingLoop(path));
                }
                Some(next) => {
                    path.push(next);
                    current = next;
                }
                None => return Err(NetworkError::ForwardingBlackHole(path)),
            }
        }
        Ok(path)
    }
}

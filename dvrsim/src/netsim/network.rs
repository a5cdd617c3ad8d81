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

//! # Top-level Network module
//!
//! This module represents the network topology together with the routing table of every router,
//! and applies topology events to both of them.

use crate::netsim::router::{FrozenTable, RoutingTable};
use crate::netsim::types::IgpNetwork;
use crate::netsim::{
    Cost, Event, ForwardingState, LinkWeight, NetworkError, RouterId, SimulationContext,
    UNKNOWN_HOP_COUNT,
};

use log::*;
use std::collections::{BTreeMap, HashMap};

/// # Network struct
///
/// The struct contains the undirected, weighted topology graph, and the routing table of every
/// router. Routers are numbered from `1` to `num_routers`.
///
/// Cloning the network performs a deep copy of both the topology and all routing tables. This is
/// used to run several simulations on the same input, without them observing each other.
#[derive(Debug, Clone)]
pub struct Network {
    net: IgpNetwork,
    num_routers: usize,
    routers: HashMap<RouterId, RoutingTable>,
}

impl Network {
    /// Generate an empty network which may contain up to `num_routers` routers.
    pub fn new(num_routers: usize) -> Self {
        Self { net: IgpNetwork::new(), num_routers, routers: HashMap::new() }
    }

    /// Returns the maximum number of routers in the network.
    pub fn num_routers(&self) -> usize {
        self.num_routers
    }

    /// Add a router to the topology. Adding the same router twice has no effect. The ID must be
    /// in the range `1..=num_routers`.
    pub fn add_router(&mut self, router: RouterId) -> Result<RouterId, NetworkError> {
        self.check_router_id(router)?;
        if !self.routers.contains_key(&router) {
            self.net.add_node(router);
            self.routers.insert(router, RoutingTable::new(router, self.num_routers));
        }
        Ok(router)
    }

    /// Add a link between `source` and `target` with the given weight. Both routers are added to
    /// the topology if they are not yet part of it. If the link already exists, its weight is
    /// overwritten.
    ///
    /// ```rust
    /// # use dvrsim::netsim::{Network, NetworkError};
    /// # fn main() -> Result<(), NetworkError> {
    /// let mut net = Network::new(3);
    /// net.add_link(1, 2, 5)?;
    /// net.add_link(2, 3, 1)?;
    /// assert_eq!(net.get_link_weight(2, 1), Some(5));
    /// assert_eq!(net.get_link_weight(1, 3), None);
    /// # Ok(())
    /// # }
    /// ```
    pub fn add_link(
        &mut self,
        source: RouterId,
        target: RouterId,
        weight: LinkWeight,
    ) -> Result<(), NetworkError> {
        if source == target {
            return Err(NetworkError::SelfLoop(source));
        }
        self.add_router(source)?;
        self.add_router(target)?;
        if let Some(old) = self.net.add_edge(source, target, weight) {
            warn!("Overwriting link {} -- {} (weight {} -> {})", source, target, old, weight);
        }
        Ok(())
    }

    /// Returns a vector of all routers in the topology, ordered by their ID.
    pub fn get_routers(&self) -> Vec<RouterId> {
        let mut routers: Vec<RouterId> = self.routers.keys().copied().collect();
        routers.sort_unstable();
        routers
    }

    /// Returns all neighbors of a router, mapped to the weight of the link towards them. If the
    /// router does not exist, the map is empty.
    pub fn get_neighbors(&self, router: RouterId) -> BTreeMap<RouterId, LinkWeight> {
        if !self.net.contains_node(router) {
            return BTreeMap::new();
        }
        self.net.edges(router).map(|(_, neighbor, weight)| (neighbor, *weight)).collect()
    }

    /// Returns the weight of the link between `a` and `b`, or `None` if there is no such link.
    pub fn get_link_weight(&self, a: RouterId, b: RouterId) -> Option<LinkWeight> {
        self.net.edge_weight(a, b).copied()
    }

    /// Returns the routing table of a router
    pub fn get_routing_table(&self, router: RouterId) -> Result<&RoutingTable, NetworkError> {
        self.routers.get(&router).ok_or(NetworkError::RouterNotFound(router))
    }

    /// Returns a mutable reference to the routing table of a router
    pub(crate) fn get_routing_table_mut(
        &mut self,
        router: RouterId,
    ) -> Result<&mut RoutingTable, NetworkError> {
        self.routers.get_mut(&router).ok_or(NetworkError::RouterNotFound(router))
    }

    /// Returns the current forwarding state of the network.
    pub fn get_forwarding_state(&self) -> ForwardingState {
        ForwardingState::from_net(self)
    }

    /// Take a snapshot of every routing table. This is the round barrier: advertisements must only
    /// be computed from the returned tables.
    pub fn freeze(&self) -> HashMap<RouterId, FrozenTable> {
        self.routers.iter().map(|(r, t)| (*r, t.freeze())).collect()
    }

    /// Checks that an event only references routers of the topology.
    pub fn check_event(&self, event: &Event) -> Result<(), NetworkError> {
        if event.source == event.target
            || !self.routers.contains_key(&event.source)
            || !self.routers.contains_key(&event.target)
        {
            return Err(NetworkError::InvalidEvent(*event));
        }
        Ok(())
    }

    /// Seed the routing tables with the directly connected neighbors. Every router learns the
    /// cost to each neighbor (with hop count 1), and selects that neighbor as the next hop.
    pub(crate) fn seed_routing_tables(&mut self) {
        for router in self.get_routers() {
            let neighbors = self.get_neighbors(router);
            if let Some(table) = self.routers.get_mut(&router) {
                for (neighbor, weight) in neighbors {
                    table.set_cost(neighbor, neighbor, weight.into());
                    table.select(neighbor, neighbor);
                    table.set_hop_count(neighbor, neighbor, 1);
                }
            }
        }
    }

    /// Recompute the coordinates of every routing table. The dirty flag of each router is
    /// overwritten by whether its coordinates changed. Returns true if any router changed.
    pub(crate) fn update_coordinates(&mut self, ctx: &mut SimulationContext) -> bool {
        let mut changed = false;
        for (router, table) in self.routers.iter_mut() {
            let router_changed = table.update_coordinates();
            ctx.set_dirty(*router, router_changed);
            changed |= router_changed;
        }
        changed
    }

    /// # Apply topology events
    ///
    /// First, the topology graph is updated with all events. Then, the routing tables of both
    /// endpoints are modified for every event:
    ///
    /// - *Removal*: Every cost learned over the removed link is deleted, and the corresponding
    ///   hop count is set to [`UNKNOWN_HOP_COUNT`].
    /// - *Insertion or update*: The direct route over the link is set to the new weight, with hop
    ///   count 1.
    ///
    /// Afterwards, the routers adjacent to either endpoint update their routes through the changed
    /// link (see [`Network::fix_adjacent_routes`]). Both endpoints and all such adjacent routers
    /// are marked as dirty.
    pub fn apply_events(
        &mut self,
        events: &[Event],
        ctx: &mut SimulationContext,
    ) -> Result<(), NetworkError> {
        for event in events {
            self.check_event(event)?;
        }

        // update the graph
        for event in events {
            match event.change.weight() {
                Some(weight) => {
                    self.net.add_edge(event.source, event.target, weight);
                }
                None => {
                    self.net.remove_edge(event.source, event.target);
                }
            }
        }

        // update the routing tables
        for event in events {
            debug!("Round {}: applying event {:?}", event.round, event);
            let (a, b) = (event.source, event.target);
            match event.change.weight() {
                Some(weight) => {
                    let table = self.get_routing_table_mut(a)?;
                    table.set_cost_from_event(b, b, Some(weight.into()));
                    table.set_hop_count(b, b, 1);
                    let table = self.get_routing_table_mut(b)?;
                    table.set_cost_from_event(a, a, Some(weight.into()));
                    table.set_hop_count(a, a, 1);
                }
                None => {
                    for to in 1..=self.num_routers as RouterId {
                        let table = self.get_routing_table_mut(a)?;
                        table.set_cost_from_event(to, b, None);
                        table.set_hop_count(to, b, UNKNOWN_HOP_COUNT);
                        let table = self.get_routing_table_mut(b)?;
                        table.set_cost_from_event(to, a, None);
                        table.set_hop_count(to, a, UNKNOWN_HOP_COUNT);
                    }
                }
            }
            ctx.mark_dirty(a);
            ctx.mark_dirty(b);

            self.fix_adjacent_routes(a, b, event.change.weight(), ctx)?;
        }

        Ok(())
    }

    /// Update the routes of the routers adjacent to `a` or `b` which go over the link `a -- b`.
    /// For every neighbor `k` of either endpoint (except the endpoints themselves), if `k` is
    /// connected to `b`, its route towards `a` via `b` is set to `weight + w(k, b)`, and if `k`
    /// is connected to `a`, its route towards `b` via `a` is set to `weight + w(k, a)`. If the
    /// link was removed, these routes are deleted instead. Hop counts remain untouched.
    ///
    /// Only the first ring around the link is updated. Everything further away is left to the
    /// following propagation rounds.
    fn fix_adjacent_routes(
        &mut self,
        a: RouterId,
        b: RouterId,
        weight: Option<LinkWeight>,
        ctx: &mut SimulationContext,
    ) -> Result<(), NetworkError> {
        for (endpoint, partner) in [(a, b), (b, a)].iter() {
            for k in self.get_neighbors(*endpoint).into_keys() {
                if k == *partner {
                    continue;
                }
                if let Some(w_kb) = self.get_link_weight(k, b) {
                    let cost = weight.map(|w| Cost::from(w) + w_kb);
                    self.get_routing_table_mut(k)?.set_cost_from_event(a, b, cost);
                    ctx.mark_dirty(k);
                }
                if let Some(w_ka) = self.get_link_weight(k, a) {
                    let cost = weight.map(|w| Cost::from(w) + w_ka);
                    self.get_routing_table_mut(k)?.set_cost_from_event(b, a, cost);
                    ctx.mark_dirty(k);
                }
            }
        }
        Ok(())
    }

    fn check_router_id(&self, router: RouterId) -> Result<(), NetworkError> {
        if router == 0 || router as usize > self.num_routers {
            Err(NetworkError::InvalidRouterId { router, num_routers: self.num_routers })
        } else {
            Ok(())
        }
    }
}

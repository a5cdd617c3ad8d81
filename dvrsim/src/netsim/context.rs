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

//! Per-run simulation state shared between the round driver, the topology and the propagation
//! policies.

use crate::netsim::{Network, RouterId};
use std::collections::{BTreeSet, HashMap};

/// # Simulation Context
///
/// Owns the dirty flag of every router for a single simulation run. A router is dirty if it has
/// information worth advertising in the next round. Every run owns its own context, such that
/// simulations never observe each other.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SimulationContext {
    dirty: HashMap<RouterId, bool>,
}

impl SimulationContext {
    /// Create the initial context for a network. Routers which are attached to some link start
    /// dirty, isolated routers start clean.
    pub fn new(net: &Network) -> Self {
        Self {
            dirty: net
                .get_routers()
                .into_iter()
                .map(|r| (r, !net.get_neighbors(r).is_empty()))
                .collect(),
        }
    }

    /// Returns true if the router is dirty
    pub fn is_dirty(&self, router: RouterId) -> bool {
        self.dirty.get(&router).copied().unwrap_or(false)
    }

    /// Mark the router as dirty
    pub fn mark_dirty(&mut self, router: RouterId) {
        self.dirty.insert(router, true);
    }

    /// Overwrite the dirty flag of a router
    pub fn set_dirty(&mut self, router: RouterId, dirty: bool) {
        self.dirty.insert(router, dirty);
    }

    /// Returns the set of all dirty routers, ordered by their ID.
    pub fn dirty_routers(&self) -> BTreeSet<RouterId> {
        self.dirty.iter().filter(|(_, d)| **d).map(|(r, _)| *r).collect()
    }
}

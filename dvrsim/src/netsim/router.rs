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

//! Module defining the distance-vector routing table of a single router.

use crate::netsim::{Cost, HopCount, RouterId};
use log::*;
use std::ops::Deref;

/// # Routing Table
///
/// Every router owns exactly one routing table. The table stores, for every destination `to` and
/// every possible next hop `via`, the cost and the hop count of the route to `to` over `via`.
/// Entries for a `via` which is not a current neighbor are unused. In addition, the table stores
/// the selected next hop for every destination (the *coordinate* of the destination).
///
/// Router IDs are numbered from `1` to `N`. Internally, all matrices are indexed from `0` to
/// `N - 1`. The conversion happens at the boundary of this structure. Accessing a router ID which
/// is out of range **panics**; the network validates all IDs before they reach the table.
#[derive(Debug, Clone, PartialEq)]
pub struct RoutingTable {
    /// ID of the router owning the table
    router_id: RouterId,
    /// Number of routers in the network
    num_routers: usize,
    /// Cost matrix `costs[to][via]`
    costs: Vec<Vec<Option<Cost>>>,
    /// Hop count matrix `hop_counts[to][via]`
    hop_counts: Vec<Vec<HopCount>>,
    /// Selected next hop for every destination
    selected: Vec<Option<RouterId>>,
}

impl RoutingTable {
    /// Create an empty routing table for `router_id` in a network with `num_routers` routers.
    pub fn new(router_id: RouterId, num_routers: usize) -> Self {
        Self {
            router_id,
            num_routers,
            costs: vec![vec![None; num_routers]; num_routers],
            hop_counts: vec![vec![0; num_routers]; num_routers],
            selected: vec![None; num_routers],
        }
    }

    /// Return the ID of the router owning the table
    pub fn router_id(&self) -> RouterId {
        self.router_id
    }

    /// Return the number of routers this table knows about
    pub fn num_routers(&self) -> usize {
        self.num_routers
    }

    /// Returns the cost for reaching `to` over `via`, or `None` if no such route is known.
    pub fn get_cost(&self, to: RouterId, via: RouterId) -> Option<Cost> {
        self.costs[idx(to)][idx(via)]
    }

    /// Returns the hop count for reaching `to` over `via`.
    pub fn get_hop_count(&self, to: RouterId, via: RouterId) -> HopCount {
        self.hop_counts[idx(to)][idx(via)]
    }

    /// Overwrite the hop count for reaching `to` over `via`.
    pub fn set_hop_count(&mut self, to: RouterId, via: RouterId, hop_count: HopCount) {
        self.hop_counts[idx(to)][idx(via)] = hop_count;
    }

    /// Returns the currently selected next hop towards `to`.
    pub fn get_next_hop(&self, to: RouterId) -> Option<RouterId> {
        self.selected[idx(to)]
    }

    /// Returns the cost of the currently selected route towards `to`.
    pub fn get_selected_cost(&self, to: RouterId) -> Option<Cost> {
        self.get_next_hop(to).and_then(|via| self.get_cost(to, via))
    }

    /// Returns the hop count of the currently selected route towards `to`.
    pub fn get_selected_hop_count(&self, to: RouterId) -> Option<HopCount> {
        self.get_next_hop(to).map(|via| self.get_hop_count(to, via))
    }

    /// # Update a route from an advertisement
    ///
    /// This is the only way in which advertisements modify the table. Routes to the router
    /// itself, or through the router itself, are always rejected. Otherwise, the new cost is
    /// accepted if one of the following holds:
    ///
    /// 1. No cost is stored yet for `to` over `via`,
    /// 2. the stored cost is greater or equal to the new cost, or
    /// 3. `via` is the currently selected next hop towards `to`.
    ///
    /// The third rule allows a route to become worse when the router it was learned from
    /// advertises a higher cost. Without it, link failures and poisoned routes would never reach
    /// the routers using them.
    ///
    /// Returns true if the stored value actually changed. The hop count is left untouched.
    pub fn set_cost(&mut self, to: RouterId, via: RouterId, cost: Cost) -> bool {
        if to == self.router_id || via == self.router_id {
            return false;
        }
        let is_selected = self.get_next_hop(to) == Some(via);
        let entry = &mut self.costs[idx(to)][idx(via)];
        let accept = match entry {
            None => true,
            Some(old) => *old >= cost || is_selected,
        };
        if accept && *entry != Some(cost) {
            *entry = Some(cost);
            true
        } else {
            false
        }
    }

    /// Overwrite a cost unconditionally. This is used when applying topology events, which are
    /// not subject to the acceptance rules of [`RoutingTable::set_cost`].
    pub(crate) fn set_cost_from_event(&mut self, to: RouterId, via: RouterId, cost: Option<Cost>) {
        self.costs[idx(to)][idx(via)] = cost;
    }

    /// Pin the selected next hop towards `to`, without checking that it is the best one.
    pub(crate) fn select(&mut self, to: RouterId, via: RouterId) {
        self.selected[idx(to)] = Some(via);
    }

    /// # Recompute the coordinates
    ///
    /// For every destination, select the next hop with minimal cost. Ties are broken by the lowest
    /// router ID. If no cost is known for any next hop, the destination becomes unreachable.
    /// Returns true if the selection changed for any destination.
    pub fn update_coordinates(&mut self) -> bool {
        let mut changed = false;
        for (to, row) in self.costs.iter().enumerate() {
            let best = row
                .iter()
                .enumerate()
                .filter_map(|(via, cost)| cost.map(|c| (via, c)))
                .fold(None, |best: Option<(usize, Cost)>, (via, c)| match best {
                    Some((_, b)) if b <= c => best,
                    _ => Some((via, c)),
                })
                .map(|(via, _)| id(via));
            if self.selected[to] != best {
                trace!(
                    "router {}: next hop towards {} changed from {:?} to {:?}",
                    self.router_id,
                    id(to),
                    self.selected[to],
                    best
                );
                self.selected[to] = best;
                changed = true;
            }
        }
        changed
    }

    /// Take an immutable snapshot of the current table.
    pub fn freeze(&self) -> FrozenTable {
        FrozenTable { table: self.clone() }
    }
}

/// # Frozen Routing Table
///
/// Immutable copy of a [`RoutingTable`], taken at the round barrier. Advertisements are always
/// computed from the frozen table of the sender, such that modifications during the round are
/// never observed by other routers in the same round. The frozen table only exposes the
/// read-only part of the routing table (via `Deref`).
#[derive(Debug, Clone, PartialEq)]
pub struct FrozenTable {
    table: RoutingTable,
}

impl Deref for FrozenTable {
    type Target = RoutingTable;

    fn deref(&self) -> &RoutingTable {
        &self.table
    }
}

#[inline(always)]
fn idx(router: RouterId) -> usize {
    debug_assert!(router >= 1, "Router IDs start at 1");
    (router - 1) as usize
}

#[inline(always)]
fn id(index: usize) -> RouterId {
    (index + 1) as RouterId
}

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

//! # Line Network

use super::ExampleNetwork;
use crate::netsim::{Event, EventSchedule, Network, RouterId};

/// # Line Network
///
/// Routers `1` to `N` connected in a line, all links have weight 1.
///
/// ```text
/// 1 ---- 2 ---- 3 ---- ... ---- N
/// ```
pub struct LineNet {}

impl ExampleNetwork for LineNet {
    fn net(size: usize) -> Network {
        let mut net = Network::new(size);
        for r in 1..=size as RouterId {
            net.add_router(r).unwrap();
        }
        for r in 1..size as RouterId {
            net.add_link(r, r + 1, 1).unwrap();
        }
        net
    }

    /// # Variant 0
    /// No events
    ///
    /// # Variant 1
    /// The link `2 -- 3` is removed in round 4.
    ///
    /// # Variant 2
    /// The link `1 -- 2` changes its weight to 5 in round 4.
    fn events(variant: usize) -> EventSchedule {
        let mut schedule = EventSchedule::new();
        match variant {
            1 => schedule.add_event(Event::new(4, 2, 3, -1).unwrap()).unwrap(),
            2 => schedule.add_event(Event::new(4, 1, 2, 5).unwrap()).unwrap(),
            _ => {}
        }
        schedule
    }
}

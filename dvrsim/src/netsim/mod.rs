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

#![deny(missing_docs, missing_debug_implementations)]

//! # NetSim
//!
//! This is a library for simulating distance-vector routing on a static topology, which is
//! modified by a schedule of link events.
//!
//! ## Example usage
//!
//! The following example generates a triangle of routers, where the link between `1` and `3` is
//! removed in round 4. The network is simulated with split horizon.
//!
//! ```rust
//! use dvrsim::netsim::{Event, EventSchedule, Network, Policy, Simulation};
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!
//!     let mut net = Network::new(3);
//!     net.add_link(1, 2, 1)?;
//!     net.add_link(2, 3, 1)?;
//!     net.add_link(1, 3, 1)?;
//!
//!     let mut schedule = EventSchedule::new();
//!     schedule.add_event(Event::new(4, 1, 3, -1).unwrap())?;
//!
//!     let result = Simulation::new(net, schedule, Policy::SplitHorizon)?.run()?;
//!
//!     // router 1 now reaches 3 over 2
//!     assert_eq!(result.table.get_route(1, 3)?, vec![1, 2, 3]);
//!     assert_eq!(result.delay(), 0);
//!
//!     Ok(())
//! }
//! ```

pub(crate) mod context;
pub(crate) mod event;
pub(crate) mod forwarding_state;
pub(crate) mod network;
pub mod policy;
pub mod printer;
pub mod router;
pub mod simulation;
pub(crate) mod types;

pub use context::SimulationContext;
pub use event::{Event, EventSchedule, LinkChange, FIRST_EVENT_ROUND};
pub use forwarding_state::{ForwardingState, TableEntry};
pub use network::Network;
pub use policy::Policy;
pub use router::{FrozenTable, RoutingTable};
pub use simulation::{Convergence, Simulation, SimulationState, DEFAULT_HOP_LIMIT};
pub use types::{Cost, HopCount, IgpNetwork, LinkWeight, NetworkError, RouterId, UNKNOWN_HOP_COUNT};

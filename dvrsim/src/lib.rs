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

#![deny(missing_docs)]

//! # DvrSim: Distance-Vector Routing Simulator
//! This is a library for simulating distance-vector routing on a static topology, which is changed
//! by a schedule of link events, and for comparing different advertisement policies:
//!
//! - **Basic**: every router advertises all of its routes to all of its neighbors.
//! - **Split Horizon**: a route is never advertised back to the neighbor it was learned from.
//! - **Split Horizon with Poison Reverse**: a route is advertised back to the neighbor it was
//!   learned from with infinite cost.
//!
//! ## Structure
//!
//! This library is structured in the following way:
//!
//! - **[`NetSim`](netsim)**: The simulator itself. See the main structures
//!   [`Network`](netsim::Network), [`RoutingTable`](netsim::RoutingTable), and
//!   [`Simulation`](netsim::Simulation).
//!
//! - **[`Input`](input)**: Functions to read the topology and the event schedule from files.
//!
//! - **[`ExampleNetworks`](example_networks)**: Collection of prepared networks and event
//!   schedules. Some of these networks can be scaled to arbitrary size, or generated randomly.
//!
//! ## Simulation Model
//!
//! The simulation proceeds in synchronous rounds. All routers act in parallel within a round: they
//! only read the state of the previous round, and only write the state of the next round. This is
//! implemented by freezing every routing table before any table is modified in that round. The
//! simulation stops once no routing table changes anymore and all events are processed, or once
//! the hop count of some route reaches the limit (count-to-infinity).
//!
//! ## Usage
//!
//! ```
//! use dvrsim::input::{parse_events_str, parse_topology_str};
//! use dvrsim::netsim::{printer, Policy, Simulation};
//! use dvrsim::Error;
//!
//! fn main() -> Result<(), Error> {
//!     let net = parse_topology_str("3\n1 2 1\n2 3 1\n")?;
//!     let events = parse_events_str("")?;
//!
//!     for policy in Policy::ALL.iter() {
//!         let result = Simulation::new(net.clone(), events.clone(), *policy)?.run()?;
//!         println!("{}:\n{}", policy, printer::report(&result));
//!     }
//!
//!     Ok(())
//! }
//! ```

pub mod example_networks;
mod test;

mod error;
pub mod input;
pub mod netsim;

pub use error::Error;

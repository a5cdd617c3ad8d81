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

//! # Input Files
//!
//! This module reads the topology and the event schedule from their textual representation.
//!
//! The topology file starts with the number of routers `N`. Every following line describes one
//! undirected link as `router1 router2 cost`:
//!
//! ```text
//! 3
//! 1 2 1
//! 2 3 1
//! ```
//!
//! Every line of the event file describes one event as `round router1 router2 cost`. A negative
//! cost removes the link:
//!
//! ```text
//! 4 1 2 -1
//! 6 1 2 3
//! ```
//!
//! Empty lines are ignored in both files.

mod error;
mod parser;

pub use error::InputError;
pub use parser::{parse_events_file, parse_events_str, parse_topology_file, parse_topology_str};

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

//! Networks for testing

use crate::netsim::{EventSchedule, Network};

mod linenet;
pub use linenet::LineNet;

mod ringnet;
pub use ringnet::RingNet;

mod trianglenet;
pub use trianglenet::TriangleNet;

mod count_to_infinity_net;
pub use count_to_infinity_net::CountToInfinityNet;

mod random_net;
pub use random_net::{random_events, random_net};

/// Trait for easier access to example networks.
pub trait ExampleNetwork {
    /// Get the network with the chosen size. Networks with a fixed size ignore the argument.
    fn net(size: usize) -> Network;
    /// Get the event schedule of the chosen variant. Variant 0 never contains any event.
    fn events(variant: usize) -> EventSchedule;
}

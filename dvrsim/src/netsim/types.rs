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

//! Module containing all type definitions

use crate::netsim::event::Event;
use petgraph::graphmap::UnGraphMap;
use std::fmt;
use std::ops::Add;
use thiserror::Error;

/// Router Identification. Routers are numbered from `1` to `N`.
pub type RouterId = u32;
/// Link Weight of a single (undirected) link
pub type LinkWeight = u32;
/// Number of hops a route takes. A negative value means that the hop count is unknown.
pub type HopCount = i32;
/// Hop count written into the table when the link a route was learned over disappears.
pub const UNKNOWN_HOP_COUNT: HopCount = -1;
/// IGP Network graph. The graph is undirected, hence every link weight is symmetric.
pub type IgpNetwork = UnGraphMap<RouterId, LinkWeight>;

/// # Route Cost
///
/// The cost of a route is either a finite number, or infinite. Infinite costs are only produced
/// by poison reverse. Any finite cost is smaller than `Cost::Infinite`. A missing cost (no route
/// known through some next hop) is represented as `Option::<Cost>::None`, and never as zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Cost {
    /// Finite cost
    Finite(LinkWeight),
    /// Infinite cost, the destination is not reachable on this path.
    Infinite,
}

impl Cost {
    /// Returns true if the cost is infinite
    pub fn is_infinite(&self) -> bool {
        matches!(self, Self::Infinite)
    }

    /// Returns the finite value, or `None` if the cost is infinite.
    pub fn finite(&self) -> Option<LinkWeight> {
        match self {
            Self::Finite(c) => Some(*c),
            Self::Infinite => None,
        }
    }
}

impl From<LinkWeight> for Cost {
    fn from(weight: LinkWeight) -> Self {
        Self::Finite(weight)
    }
}

impl Add<LinkWeight> for Cost {
    type Output = Cost;

    /// Adding a link weight to an infinite cost keeps it infinite. Overflows saturate to
    /// infinity.
    fn add(self, rhs: LinkWeight) -> Cost {
        match self {
            Self::Finite(c) => c.checked_add(rhs).map(Self::Finite).unwrap_or(Self::Infinite),
            Self::Infinite => Self::Infinite,
        }
    }
}

impl fmt::Display for Cost {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Finite(c) => write!(f, "{}", c),
            Self::Infinite => write!(f, "inf"),
        }
    }
}

/// Network Errors
#[derive(Error, Debug, PartialEq)]
pub enum NetworkError {
    /// Router is not present in the topology
    #[error("Router was not found in topology: {0}")]
    RouterNotFound(RouterId),
    /// Router ID is not in the range `1..=N`
    #[error("Router {router} is out of range, the network has {num_routers} routers")]
    InvalidRouterId {
        /// The offending router ID
        router: RouterId,
        /// Number of routers in the network
        num_routers: usize,
    },
    /// A router cannot be connected to itself
    #[error("Cannot add a link from router {0} to itself")]
    SelfLoop(RouterId),
    /// Events are only processed from the second round onwards
    #[error("Event is scheduled before round 2: {0:?}")]
    EventTooEarly(Event),
    /// Event references routers that are not part of the topology
    #[error("Cannot handle the event: {0:?}")]
    InvalidEvent(Event),
    /// Forwarding loop detected
    #[error("Forwarding Loop occurred! path: {0:?}")]
    ForwardingLoop(Vec<RouterId>),
    /// Black hole detected
    #[error("Black hole occurred! path: {0:?}")]
    ForwardingBlackHole(Vec<RouterId>),
    /// The hop count of some route reached the limit; the routers are counting to infinity.
    #[error(
        "Count-to-infinity in round {round}: router {router} reaches {destination} in {hop_count} hops"
    )]
    CountToInfinity {
        /// Round in which the limit was reached
        round: usize,
        /// Router whose table contains the route
        router: RouterId,
        /// Destination of the route
        destination: RouterId,
        /// Hop count of the route
        hop_count: HopCount,
    },
}

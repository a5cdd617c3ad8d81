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

//! # Round Driver
//!
//! This module drives a single simulation run with a single [`Policy`]. The simulation proceeds
//! in synchronous rounds. Round 1 seeds the routing tables with the direct neighbors. In every
//! following round, the driver
//!
//! 1. applies all events scheduled for this round,
//! 2. lets the policy propagate one round of advertisements,
//! 3. recomputes the coordinates of every router (which also computes the dirty flags for the next
//!    round), and
//! 4. checks if the network has converged, or if the routers are counting to infinity.

use crate::netsim::{
    EventSchedule, ForwardingState, HopCount, Network, NetworkError, Policy, SimulationContext,
};
use log::*;

/// Default hop count at which the simulation is aborted, because the routers are counting to
/// infinity.
pub const DEFAULT_HOP_LIMIT: HopCount = 100;

/// State of the round driver
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SimulationState {
    /// Routing tables are not yet seeded
    Setup,
    /// Routers are exchanging advertisements
    Advertising,
    /// No router changed anymore, and no events are left. This state is final.
    Converged,
    /// The hop count limit was reached. This state is final.
    Aborted,
}

impl SimulationState {
    /// Returns true if the state is final
    pub fn is_final(&self) -> bool {
        matches!(self, Self::Converged | Self::Aborted)
    }
}

/// Result of a converged simulation run
#[derive(Debug, Clone, PartialEq)]
pub struct Convergence {
    /// Policy used during the run
    pub policy: Policy,
    /// Round in which no router changed anymore
    pub final_round: usize,
    /// Round of the last applied event, or `0` if no event was applied.
    pub last_event_round: usize,
    /// Forwarding state after convergence
    pub table: ForwardingState,
    /// Forwarding state after every round except the final one, if the trace was recorded.
    pub trace: Option<Vec<(usize, ForwardingState)>>,
}

impl Convergence {
    /// Number of rounds between the last event and the convergence of the network.
    pub fn delay(&self) -> usize {
        self.final_round.saturating_sub(1 + self.last_event_round)
    }
}

/// # Simulation
///
/// A simulation owns its network, its event schedule, and its [`SimulationContext`]. In order to
/// compare different policies on the same input, clone the network and the schedule for every
/// run.
///
/// ```rust
/// # use dvrsim::netsim::{EventSchedule, Network, Policy, Simulation};
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let mut net = Network::new(3);
/// net.add_link(1, 2, 1)?;
/// net.add_link(2, 3, 1)?;
///
/// let result = Simulation::new(net, EventSchedule::new(), Policy::SplitHorizon)?.run()?;
/// assert_eq!(result.table.get_route(1, 3)?, vec![1, 2, 3]);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct Simulation {
    net: Network,
    schedule: EventSchedule,
    policy: Policy,
    ctx: SimulationContext,
    hop_limit: HopCount,
    round: usize,
    last_event_round: usize,
    state: SimulationState,
    trace: Option<Vec<(usize, ForwardingState)>>,
}

impl Simulation {
    /// Create a new simulation. All events in the schedule must reference routers of the network.
    pub fn new(
        net: Network,
        schedule: EventSchedule,
        policy: Policy,
    ) -> Result<Self, NetworkError> {
        for event in schedule.iter() {
            net.check_event(event)?;
        }
        let ctx = SimulationContext::new(&net);
        Ok(Self {
            net,
            schedule,
            policy,
            ctx,
            hop_limit: DEFAULT_HOP_LIMIT,
            round: 1,
            last_event_round: 0,
            state: SimulationState::Setup,
            trace: None,
        })
    }

    /// Set the hop count at which the simulation is aborted.
    pub fn with_hop_limit(mut self, hop_limit: HopCount) -> Self {
        self.hop_limit = hop_limit;
        self
    }

    /// Record the forwarding state after each round.
    pub fn with_trace(mut self) -> Self {
        self.trace = Some(Vec::new());
        self
    }

    /// Returns the current state of the simulation
    pub fn state(&self) -> SimulationState {
        self.state
    }

    /// Returns the current round. Round 1 is the setup round.
    pub fn round(&self) -> usize {
        self.round
    }

    /// Returns the policy of this simulation
    pub fn policy(&self) -> Policy {
        self.policy
    }

    /// Returns a reference to the simulated network
    pub fn network(&self) -> &Network {
        &self.net
    }

    /// Returns the dirty flags of the routers
    pub fn context(&self) -> &SimulationContext {
        &self.ctx
    }

    /// Seed the routing tables with the direct neighbors (round 1). Calling this function a
    /// second time has no effect.
    pub fn setup(&mut self) {
        if self.state != SimulationState::Setup {
            return;
        }
        self.net.seed_routing_tables();
        self.state = SimulationState::Advertising;
        self.round = 1;
        if let Some(trace) = self.trace.as_mut() {
            trace.push((1, self.net.get_forwarding_state()));
        }
        debug!("[{}] routing tables seeded", self.policy);
    }

    /// Perform a single round. If the tables are not yet seeded, this performs the setup round.
    /// If the simulation is already in a final state, nothing happens.
    ///
    /// When the hop limit is reached, the simulation enters [`SimulationState::Aborted`], and
    /// [`NetworkError::CountToInfinity`] is returned.
    pub fn step(&mut self) -> Result<SimulationState, NetworkError> {
        match self.state {
            SimulationState::Setup => {
                self.setup();
                return Ok(self.state);
            }
            SimulationState::Converged | SimulationState::Aborted => return Ok(self.state),
            SimulationState::Advertising => {}
        }

        let round = self.round + 1;

        let events = self.schedule.take_events(round);
        if !events.is_empty() {
            self.net.apply_events(&events, &mut self.ctx)?;
            self.last_event_round = round;
        }

        let changed = self.policy.propagate(&mut self.net, &mut self.ctx)?;
        let coordinates_changed = self.net.update_coordinates(&mut self.ctx);
        self.round = round;

        if !changed && !coordinates_changed && !self.schedule.has_pending_events() {
            info!("[{}] converged in round {}", self.policy, round);
            self.state = SimulationState::Converged;
            return Ok(self.state);
        }

        let table = self.net.get_forwarding_state();
        debug!("[{}] round {} finished", self.policy, round);

        if let Some((router, destination, hop_count)) = table.find_hop_count_at_least(self.hop_limit)
        {
            warn!(
                "[{}] count-to-infinity in round {}: router {} reaches {} in {} hops",
                self.policy, round, router, destination, hop_count
            );
            self.state = SimulationState::Aborted;
            return Err(NetworkError::CountToInfinity { round, router, destination, hop_count });
        }

        if let Some(trace) = self.trace.as_mut() {
            trace.push((round, table));
        }

        Ok(self.state)
    }

    /// Run the simulation until it converges. Returns the final forwarding state together with
    /// the convergence delay, or [`NetworkError::CountToInfinity`] if the routers count to
    /// infinity.
    pub fn run(mut self) -> Result<Convergence, NetworkError> {
        while !self.step()?.is_final() {}
        Ok(Convergence {
            policy: self.policy,
            final_round: self.round,
            last_event_round: self.last_event_round,
            table: self.net.get_forwarding_state(),
            trace: self.trace,
        })
    }
}

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

//! Module for defining topology events and the schedule in which they occur.

use crate::netsim::{LinkWeight, NetworkError, RouterId};
use std::collections::BTreeMap;

/// First round in which events are processed. Round 1 is used to set up the routing tables.
pub const FIRST_EVENT_ROUND: usize = 2;

/// Change of a single link
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LinkChange {
    /// The link is inserted, or its weight is updated.
    Set(LinkWeight),
    /// The link is removed.
    Remove,
}

impl LinkChange {
    /// Returns the new link weight, or `None` if the link is removed.
    pub fn weight(&self) -> Option<LinkWeight> {
        match self {
            Self::Set(w) => Some(*w),
            Self::Remove => None,
        }
    }
}

/// Topology event, changing the link between `source` and `target` at the beginning of `round`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Event {
    /// Round in which the event happens
    pub round: usize,
    /// First endpoint of the link
    pub source: RouterId,
    /// Second endpoint of the link
    pub target: RouterId,
    /// What happens with the link
    pub change: LinkChange,
}

impl Event {
    /// Create a new event. Negative costs mean that the link is removed. Returns `None` if the
    /// cost does not fit into a `LinkWeight`.
    pub fn new(round: usize, source: RouterId, target: RouterId, cost: i64) -> Option<Self> {
        if cost > LinkWeight::MAX as i64 {
            return None;
        }
        let change = if cost < 0 { LinkChange::Remove } else { LinkChange::Set(cost as LinkWeight) };
        Some(Self { round, source, target, change })
    }

    /// Returns true if the event removes the link
    pub fn is_removal(&self) -> bool {
        matches!(self.change, LinkChange::Remove)
    }
}

/// # Event Schedule
///
/// Ordered collection of events, keyed by the round in which they happen. Events are never
/// removed from the schedule. Instead, the schedule keeps a cursor pointing to the last round
/// that was taken out, such that it can tell if there are still events pending.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct EventSchedule {
    events: BTreeMap<usize, Vec<Event>>,
    cursor: usize,
}

impl EventSchedule {
    /// Create an empty schedule
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an event to the schedule. Events of the same round are applied in the order in which
    /// they were added.
    pub fn add_event(&mut self, event: Event) -> Result<(), NetworkError> {
        if event.round < FIRST_EVENT_ROUND {
            return Err(NetworkError::EventTooEarly(event));
        }
        self.events.entry(event.round).or_insert_with(Vec::new).push(event);
        Ok(())
    }

    /// Returns all events of the given round, and marks every round up to `round` as consumed.
    pub fn take_events(&mut self, round: usize) -> Vec<Event> {
        self.cursor = self.cursor.max(round);
        self.events.get(&round).cloned().unwrap_or_default()
    }

    /// Returns true if there exist any events scheduled after the last consumed round.
    pub fn has_pending_events(&self) -> bool {
        self.events.range(self.cursor + 1..).next().is_some()
    }

    /// Iterate over all events in the schedule (consumed or not), ordered by their round.
    pub fn iter(&self) -> impl Iterator<Item = &Event> {
        self.events.values().flatten()
    }

    /// Returns the round of the last scheduled event
    pub fn last_round(&self) -> Option<usize> {
        self.events.keys().next_back().copied()
    }

    /// Total number of scheduled events
    pub fn len(&self) -> usize {
        self.events.values().map(Vec::len).sum()
    }

    /// Returns true if no event is scheduled
    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }
}

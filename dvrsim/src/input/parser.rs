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

//! Parses topology and event files

use super::InputError;
use crate::netsim::{Event, EventSchedule, LinkWeight, Network, RouterId};

use log::*;
use std::fs::read_to_string;
use std::path::Path;
use std::str::FromStr;

/// Reads the topology file and returns the network. See [`parse_topology_str`].
pub fn parse_topology_file(filename: impl AsRef<Path>) -> Result<Network, InputError> {
    parse_topology_str(&read_to_string(filename.as_ref())?)
}

/// Parses the topology and returns the network. All routers from `1` to `N` are part of the
/// network, even if they are not connected to any link. Link costs must be positive.
pub fn parse_topology_str(topology: &str) -> Result<Network, InputError> {
    let mut lines = non_empty_lines(topology);

    let (line, content) = lines.next().ok_or(InputError::MissingRouterCount)?;
    let num_routers: usize = match content.parse() {
        Ok(n) if n > 0 => n,
        _ => return Err(InputError::InvalidRouterCount { line, content: content.to_string() }),
    };

    let mut net = Network::new(num_routers);
    for router in 1..=num_routers as RouterId {
        net.add_router(router)?;
    }

    for (line, content) in lines {
        let malformed = || InputError::MalformedLine { line, content: content.to_string() };
        let fields = split_fields(content, 3).ok_or_else(malformed)?;
        let source: RouterId = parse_field(fields[0]).ok_or_else(malformed)?;
        let target: RouterId = parse_field(fields[1]).ok_or_else(malformed)?;
        let weight: LinkWeight = parse_field(fields[2]).ok_or_else(malformed)?;
        if weight == 0 {
            return Err(malformed());
        }
        net.add_link(source, target, weight)?;
    }

    debug!("Parsed topology with {} routers", num_routers);
    Ok(net)
}

/// Reads the event file and returns the event schedule. See [`parse_events_str`].
pub fn parse_events_file(filename: impl AsRef<Path>) -> Result<EventSchedule, InputError> {
    parse_events_str(&read_to_string(filename.as_ref())?)
}

/// Parses the events and returns the event schedule. Events must be scheduled at round 2 or
/// later.
pub fn parse_events_str(events: &str) -> Result<EventSchedule, InputError> {
    let mut schedule = EventSchedule::new();

    for (line, content) in non_empty_lines(events) {
        let malformed = || InputError::MalformedLine { line, content: content.to_string() };
        let fields = split_fields(content, 4).ok_or_else(malformed)?;
        let round: usize = parse_field(fields[0]).ok_or_else(malformed)?;
        let source: RouterId = parse_field(fields[1]).ok_or_else(malformed)?;
        let target: RouterId = parse_field(fields[2]).ok_or_else(malformed)?;
        let cost: i64 = parse_field(fields[3]).ok_or_else(malformed)?;
        let event = Event::new(round, source, target, cost).ok_or_else(malformed)?;
        schedule.add_event(event)?;
    }

    debug!("Parsed {} events", schedule.len());
    Ok(schedule)
}

/// Iterate over all non-empty lines, together with their line number (starting at 1).
fn non_empty_lines(s: &str) -> impl Iterator<Item = (usize, &str)> {
    s.lines().enumerate().map(|(i, l)| (i + 1, l.trim())).filter(|(_, l)| !l.is_empty())
}

/// Split the line into exactly `n` whitespace-separated fields.
fn split_fields(line: &str, n: usize) -> Option<Vec<&str>> {
    let fields: Vec<&str> = line.split_whitespace().collect();
    if fields.len() == n {
        Some(fields)
    } else {
        None
    }
}

fn parse_field<T: FromStr>(field: &str) -> Option<T> {
    field.parse().ok()
}

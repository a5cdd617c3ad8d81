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

//! # Helper (printer) functions for the Network
//! Module containing helper functions to get formatted strings and print information about the
//! network and the simulation results.

use crate::netsim::{Convergence, ForwardingState, Network, Policy, RouterId, RoutingTable};
use itertools::Itertools;

/// Returns the formatted forwarding state. Every line represents one router, starting with the
/// router ID, followed by one cell `next_hop,hop_count` per destination. Every column is padded to
/// the width of its widest cell, and columns are separated by four spaces.
///
/// ```text
/// 1  1,0    2,1    2,2
/// 2  1,1    2,0    3,1
/// 3  2,2    2,1    3,0
/// ```
pub fn pretty_table(table: &ForwardingState) -> String {
    let cells: Vec<Vec<String>> = table
        .rows()
        .map(|row| {
            row.iter()
                .enumerate()
                .map(|(d, e)| format!("{},{}", e.next_hop_label((d + 1) as RouterId), e.hop_count()))
                .collect()
        })
        .collect();

    let widths: Vec<usize> = (0..table.num_routers())
        .map(|d| cells.iter().map(|row| row[d].len()).max().unwrap_or(0))
        .collect();

    cells
        .iter()
        .enumerate()
        .map(|(r, row)| {
            format!(
                "{}  {}\n",
                r + 1,
                row.iter().zip(widths.iter()).map(|(c, w)| format!("{:<w$}", c, w = *w)).join("    ")
            )
        })
        .collect()
}

/// Returns the line reporting the convergence delay.
pub fn convergence_delay(delay: usize) -> String {
    format!("Convergence Delay: {} round{}", delay, if delay == 1 { "" } else { "s" })
}

/// Returns the complete report of a simulation run. If the trace was recorded, the report
/// contains the forwarding state after every round (except the final one, which did not change
/// anything). Otherwise, it only contains the final forwarding state. In both cases, the report
/// ends with the convergence delay.
pub fn report(result: &Convergence) -> String {
    let mut buf = String::new();
    match result.trace.as_ref() {
        Some(trace) => {
            for (round, table) in trace {
                buf.push_str(&format!("Round {}\n", round));
                buf.push_str(&pretty_table(table));
            }
        }
        None => buf.push_str(&pretty_table(&result.table)),
    }
    buf.push('\n');
    buf.push_str(&convergence_delay(result.delay()));
    buf
}

/// Returns the name of the output file for the given policy.
pub fn output_file_name(policy: Policy, verbose: bool) -> String {
    format!("output-{}{}.txt", policy.name(), if verbose { "-detailed" } else { "" })
}

/// Returns the raw cost matrix of a routing table. Every line represents one destination, and
/// every column one next hop. Missing costs are shown as `X`.
pub fn routing_table(table: &RoutingTable) -> String {
    let n = table.num_routers() as RouterId;
    (1..=n)
        .map(|to| {
            (1..=n)
                .map(|via| match table.get_cost(to, via) {
                    Some(c) => c.to_string(),
                    None => String::from("X"),
                })
                .join(", ")
        })
        .join("\n")
}

/// Returns the selected next hop for every destination of a routing table, formatted as a list of
/// `(to, via)` pairs.
pub fn coordinates(table: &RoutingTable) -> String {
    let n = table.num_routers() as RouterId;
    format!(
        "[{}]",
        (1..=n)
            .map(|to| match table.get_next_hop(to) {
                Some(via) => format!("({}, {})", to, via),
                None => String::from("None"),
            })
            .join(", ")
    )
}

/// Returns the internal state of every router in the network (for debugging).
pub fn network(net: &Network) -> String {
    net.get_routers()
        .into_iter()
        .filter_map(|r| net.get_routing_table(r).ok())
        .map(|t| {
            format!("Router {}:\n{}\n{}\n", t.router_id(), routing_table(t), coordinates(t))
        })
        .join("\n")
}

/// Print the internal state of every router in the network.
pub fn print_network(net: &Network) {
    println!("{}", network(net));
}

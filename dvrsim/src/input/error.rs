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

//! Module that contains the error type for reading topology and event files

use crate::netsim::NetworkError;
use thiserror::Error;

/// Error while reading a topology or an event file
#[derive(Debug, Error)]
pub enum InputError {
    /// File cannot be read
    #[error("IO Error: {0}")]
    IoError(#[from] std::io::Error),
    /// The topology does not start with the number of routers
    #[error("Missing number of routers")]
    MissingRouterCount,
    /// The number of routers is not a positive integer
    #[error("Invalid number of routers on line {line}: {content}")]
    InvalidRouterCount {
        /// Line number (starting at 1)
        line: usize,
        /// Content of the line
        content: String,
    },
    /// A line does not match the expected format
    #[error("Malformed line {line}: {content}")]
    MalformedLine {
        /// Line number (starting at 1)
        line: usize,
        /// Content of the line
        content: String,
    },
    /// The topology or the event is not valid
    #[error("Network Error: {0}")]
    NetworkError(#[from] NetworkError),
}

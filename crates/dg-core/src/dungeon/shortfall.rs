//! Soft degradations recorded during a run
//!
//! A run that cannot meet every target still produces a playable level. Each
//! compromise is logged at `warn` and kept on the result so callers can react
//! without scraping logs.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::EntityKind;

/// One constraint a run could not fully satisfy
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Shortfall {
    /// Room attempts ran out before the target count was reached
    FewerRooms { requested: u32, generated: usize },
    /// The connector's frontier emptied with rooms still unreached
    RoomsUnreachable { unreached: usize },
    /// No usable perimeter cell; the corridor was anchored at the room center
    NoPerimeterAnchor { room: usize },
    /// Too few wall-clear cells; start/end were chosen from all floor cells
    WallClearanceRelaxed { clear: usize, total: usize },
    /// No candidate end was far enough from the start
    StartEndTooClose { distance: f64, required: f64 },
    /// Fewer entities were placed than were drawn for the quota
    EntityQuota {
        kind: EntityKind,
        requested: usize,
        placed: usize,
    },
}

impl fmt::Display for Shortfall {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Shortfall::FewerRooms {
                requested,
                generated,
            } => write!(
                f,
                "generated {generated} of {requested} rooms; try smaller rooms or more attempts"
            ),
            Shortfall::RoomsUnreachable { unreached } => {
                write!(f, "{unreached} rooms were left without a corridor")
            }
            Shortfall::NoPerimeterAnchor { room } => {
                write!(f, "room {room} has no perimeter anchor; using its center")
            }
            Shortfall::WallClearanceRelaxed { clear, total } => write!(
                f,
                "only {clear} of {total} floor cells are clear of walls; using all floor cells"
            ),
            Shortfall::StartEndTooClose { distance, required } => write!(
                f,
                "start and end are {distance:.2} apart, below the requested {required:.2}"
            ),
            Shortfall::EntityQuota {
                kind,
                requested,
                placed,
            } => write!(f, "placed {placed} of {requested} {kind} entities"),
        }
    }
}

/// Shortfalls collected over one run
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Shortfalls(Vec<Shortfall>);

impl Shortfalls {
    pub fn new() -> Self {
        Self::default()
    }

    /// Log and keep a shortfall
    pub fn record(&mut self, shortfall: Shortfall) {
        log::warn!("{shortfall}");
        self.0.push(shortfall);
    }

    pub fn as_slice(&self) -> &[Shortfall] {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn into_vec(self) -> Vec<Shortfall> {
        self.0
    }
}

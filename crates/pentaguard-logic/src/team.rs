//! Team slots, fingerprints, and the accept gate.
//!
//! A team is five direction-keyed slots, each empty or holding a guardian.
//! Team identity is the slot-to-name assignment, captured by
//! [`fingerprint`]: two separately assembled teams with the same names in
//! the same slots are the same team, whatever their skill lists say.
//!
//! Duplicate tracking is the caller's job. The library never stores
//! history; [`is_duplicate`] and [`is_valid`] take the already-accepted
//! teams as a slice and leave retention policy to whoever drives assembly.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::catalog::{Direction, Guardian};

/// Width of one fingerprint column before the separator.
const FINGERPRINT_COLUMN: usize = 15;

/// Five direction-keyed slots, each possibly empty.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Team {
    pub knight: Option<Guardian>,
    pub queen: Option<Guardian>,
    pub king: Option<Guardian>,
    pub rook: Option<Guardian>,
    pub bishop: Option<Guardian>,
}

impl Team {
    /// The guardian occupying `direction`, if any.
    pub fn slot(&self, direction: Direction) -> Option<&Guardian> {
        match direction {
            Direction::Knight => self.knight.as_ref(),
            Direction::Queen => self.queen.as_ref(),
            Direction::King => self.king.as_ref(),
            Direction::Rook => self.rook.as_ref(),
            Direction::Bishop => self.bishop.as_ref(),
        }
    }

    /// Place a guardian in its home direction slot.
    pub fn set(&mut self, guardian: Guardian) {
        let slot = match guardian.direction {
            Direction::Knight => &mut self.knight,
            Direction::Queen => &mut self.queen,
            Direction::King => &mut self.king,
            Direction::Rook => &mut self.rook,
            Direction::Bishop => &mut self.bishop,
        };
        *slot = Some(guardian);
    }

    /// Empty the slot for `direction`.
    pub fn clear(&mut self, direction: Direction) {
        match direction {
            Direction::Knight => self.knight = None,
            Direction::Queen => self.queen = None,
            Direction::King => self.king = None,
            Direction::Rook => self.rook = None,
            Direction::Bishop => self.bishop = None,
        }
    }

    /// Filled slots in canonical direction order.
    pub fn members(&self) -> impl Iterator<Item = &Guardian> + '_ {
        Direction::ALL.iter().filter_map(|direction| self.slot(*direction))
    }

    /// True iff every slot is filled.
    pub fn is_complete(&self) -> bool {
        Direction::ALL.iter().all(|direction| self.slot(*direction).is_some())
    }
}

/// Renders as the fingerprint, one padded column per slot.
impl fmt::Display for Team {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&fingerprint(self))
    }
}

/// Canonical encoding of the slot-to-name assignment.
///
/// One column per direction in canonical order: `"<direction> <name>"`
/// padded to at least 15 characters (never truncated), joined by `" | "`.
/// An empty slot renders as the direction name alone. Equal fingerprints
/// mean the same team for deduplication purposes.
pub fn fingerprint(team: &Team) -> String {
    Direction::ALL
        .iter()
        .map(|direction| {
            let name = team.slot(*direction).map_or("", |g| g.name.as_str());
            format!(
                "{:<width$}",
                format!("{} {}", direction.name(), name),
                width = FINGERPRINT_COLUMN
            )
        })
        .collect::<Vec<_>>()
        .join(" | ")
}

/// True iff some team in `history` has the same fingerprint.
pub fn is_duplicate(team: &Team, history: &[Team]) -> bool {
    let print = fingerprint(team);
    history.iter().any(|seen| fingerprint(seen) == print)
}

/// The accept gate: keep a candidate iff it is not already in `history`
/// and every slot is filled.
pub fn is_valid(team: &Team, history: &[Team]) -> bool {
    !is_duplicate(team, history) && team.is_complete()
}

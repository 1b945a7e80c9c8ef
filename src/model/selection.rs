// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Liaison-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Liaison Sankey and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Filter state driving every aggregation.
//!
//! The viewer owns the only mutable `SelectionState`; builders and queries take it by reference
//! and recompute from scratch.

use std::fmt;
use std::str::FromStr;

use super::edge::Direction;
use super::ids::MeetingId;

/// Which panels are shown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum DirectionFilter {
    #[default]
    All,
    In,
    Out,
}

impl DirectionFilter {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::All => "all",
            Self::In => "in",
            Self::Out => "out",
        }
    }

    /// Panel directions in display order (inbound left, outbound right).
    pub fn directions(self) -> &'static [Direction] {
        match self {
            Self::All => &[Direction::In, Direction::Out],
            Self::In => &[Direction::In],
            Self::Out => &[Direction::Out],
        }
    }
}

impl From<Direction> for DirectionFilter {
    fn from(value: Direction) -> Self {
        match value {
            Direction::In => Self::In,
            Direction::Out => Self::Out,
        }
    }
}

impl fmt::Display for DirectionFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseDirectionFilterError {
    raw: String,
}

impl fmt::Display for ParseDirectionFilterError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid direction filter {:?} (expected all|in|out)", self.raw)
    }
}

impl std::error::Error for ParseDirectionFilterError {}

impl FromStr for DirectionFilter {
    type Err = ParseDirectionFilterError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "all" => Ok(Self::All),
            "in" => Ok(Self::In),
            "out" => Ok(Self::Out),
            _ => Err(ParseDirectionFilterError { raw: s.to_owned() }),
        }
    }
}

/// `all` or a single meeting.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub enum MeetingFilter {
    #[default]
    All,
    Meeting(MeetingId),
}

impl MeetingFilter {
    /// Parses the selector value used by the meeting radio group (`all` or a meeting id).
    pub fn parse(raw: &str) -> Option<Self> {
        if raw == "all" {
            return Some(Self::All);
        }
        MeetingId::new(raw).ok().map(Self::Meeting)
    }

    /// Whether a record's meeting passes the filter. Records without a meeting only pass `all`.
    pub fn matches(&self, meeting: Option<&MeetingId>) -> bool {
        match self {
            Self::All => true,
            Self::Meeting(wanted) => meeting == Some(wanted),
        }
    }
}

impl fmt::Display for MeetingFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::All => f.write_str("all"),
            Self::Meeting(meeting) => write!(f, "{meeting}"),
        }
    }
}

/// A single filter-control event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FilterChange {
    Direction(DirectionFilter),
    Meeting(MeetingFilter),
    SplitWeighting(bool),
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SelectionState {
    rev: u64,
    direction: DirectionFilter,
    meeting: MeetingFilter,
    split_weighting: bool,
}

impl SelectionState {
    pub fn new(direction: DirectionFilter, meeting: MeetingFilter, split_weighting: bool) -> Self {
        Self {
            rev: 0,
            direction,
            meeting,
            split_weighting,
        }
    }

    pub fn rev(&self) -> u64 {
        self.rev
    }

    pub fn direction(&self) -> DirectionFilter {
        self.direction
    }

    pub fn meeting(&self) -> &MeetingFilter {
        &self.meeting
    }

    pub fn split_weighting(&self) -> bool {
        self.split_weighting
    }

    /// Applies a filter change. Returns `false` (and leaves the revision alone) when the change
    /// does not alter the state.
    pub fn apply(&mut self, change: FilterChange) -> bool {
        let changed = match change {
            FilterChange::Direction(direction) => {
                std::mem::replace(&mut self.direction, direction) != direction
            }
            FilterChange::Meeting(meeting) => {
                if self.meeting == meeting {
                    false
                } else {
                    self.meeting = meeting;
                    true
                }
            }
            FilterChange::SplitWeighting(split) => {
                std::mem::replace(&mut self.split_weighting, split) != split
            }
        };

        if changed {
            self.rev = self.rev.wrapping_add(1);
        }
        changed
    }
}

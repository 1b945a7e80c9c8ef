// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Liaison-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Liaison Sankey and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize};

use super::ids::{EdgeKey, MeetingId, NodeId};

/// Which way liaison traffic flows relative to the root organization.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    In,
    Out,
}

impl Direction {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::In => "in",
            Self::Out => "out",
        }
    }

    /// Human-readable panel name.
    pub fn title(self) -> &'static str {
        match self {
            Self::In => "Inbound",
            Self::Out => "Outbound",
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseDirectionError {
    raw: String,
}

impl fmt::Display for ParseDirectionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid direction {:?} (expected in|out)", self.raw)
    }
}

impl std::error::Error for ParseDirectionError {}

impl FromStr for Direction {
    type Err = ParseDirectionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "in" => Ok(Self::In),
            "out" => Ok(Self::Out),
            _ => Err(ParseDirectionError { raw: s.to_owned() }),
        }
    }
}

/// One weighted liaison edge, either for a single meeting or pre-summed over all of them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EdgeRecord {
    pub from: NodeId,
    pub to: NodeId,
    pub dir: Direction,
    /// `None` on pre-summed total records.
    #[serde(
        default,
        deserialize_with = "deserialize_optional_meeting",
        skip_serializing_if = "Option::is_none"
    )]
    pub meeting: Option<MeetingId>,
    pub edge_key: EdgeKey,
    /// Whole-number floats such as `3.0` are accepted on input.
    #[serde(deserialize_with = "deserialize_raw_count")]
    pub raw_count: u64,
    pub weight_raw: f64,
    pub weight_split: f64,
}

impl EdgeRecord {
    pub fn new(from: NodeId, to: NodeId, dir: Direction, edge_key: EdgeKey) -> Self {
        Self {
            from,
            to,
            dir,
            meeting: None,
            edge_key,
            raw_count: 0,
            weight_raw: 0.0,
            weight_split: 0.0,
        }
    }

    pub fn with_meeting(mut self, meeting: MeetingId) -> Self {
        self.meeting = Some(meeting);
        self
    }

    pub fn with_weights(mut self, raw_count: u64, weight_raw: f64, weight_split: f64) -> Self {
        self.raw_count = raw_count;
        self.weight_raw = weight_raw;
        self.weight_split = weight_split;
        self
    }
}

/// The magnitude a record contributes to a panel of the given direction.
///
/// Split weighting only ever applies to outbound flows; every other combination uses the raw
/// weight. Aggregation and detail both go through here so the two views cannot disagree.
pub fn displayed_weight(record: &EdgeRecord, direction: Direction, split_weighting: bool) -> f64 {
    if direction == Direction::Out && split_weighting {
        record.weight_split
    } else {
        record.weight_raw
    }
}

fn deserialize_raw_count<'de, D>(deserializer: D) -> Result<u64, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Number::deserialize(deserializer)?;
    if let Some(count) = value.as_u64() {
        return Ok(count);
    }
    match value.as_f64() {
        Some(count) if count >= 0.0 && count.fract() == 0.0 && count < u64::MAX as f64 => {
            Ok(count as u64)
        }
        _ => Err(serde::de::Error::custom(format!(
            "raw_count must be a non-negative whole number, got {value}"
        ))),
    }
}

// Total records are exported with the meeting column blanked to "".
fn deserialize_optional_meeting<'de, D>(deserializer: D) -> Result<Option<MeetingId>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<String>::deserialize(deserializer)?;
    match raw.as_deref() {
        None | Some("") => Ok(None),
        Some(value) => MeetingId::new(value).map(Some).map_err(serde::de::Error::custom),
    }
}

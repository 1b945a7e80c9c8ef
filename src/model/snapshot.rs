// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Liaison-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Liaison Sankey and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

use super::edge::{Direction, EdgeRecord};
use super::ids::{EdgeKey, MeetingId};
use super::selection::MeetingFilter;

/// Tolerance used when comparing per-meeting sums against the pre-summed totals.
pub const TOTALS_TOLERANCE: f64 = 1e-9;

/// The immutable edge data the viewer is started with.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EdgeSnapshot {
    #[serde(default)]
    pub meetings: Vec<MeetingId>,
    #[serde(default)]
    pub edges_by_meeting: Vec<EdgeRecord>,
    #[serde(default)]
    pub edges_total: Vec<EdgeRecord>,
}

impl EdgeSnapshot {
    pub fn new(
        meetings: Vec<MeetingId>,
        edges_by_meeting: Vec<EdgeRecord>,
        edges_total: Vec<EdgeRecord>,
    ) -> Self {
        Self {
            meetings,
            edges_by_meeting,
            edges_total,
        }
    }

    /// Records a diagram is aggregated from: the pre-summed totals for `all`, otherwise the
    /// per-meeting records of the chosen meeting.
    pub fn source_edges<'a>(
        &'a self,
        filter: &'a MeetingFilter,
    ) -> Box<dyn Iterator<Item = &'a EdgeRecord> + 'a> {
        match filter {
            MeetingFilter::All => Box::new(self.edges_total.iter()),
            MeetingFilter::Meeting(_) => Box::new(self.meeting_records(filter)),
        }
    }

    /// Per-meeting records restricted to `filter` (every meeting for `all`), in snapshot order.
    pub fn meeting_records<'a>(
        &'a self,
        filter: &'a MeetingFilter,
    ) -> impl Iterator<Item = &'a EdgeRecord> + 'a {
        self.edges_by_meeting
            .iter()
            .filter(move |record| filter.matches(record.meeting.as_ref()))
    }

    pub fn has_meeting(&self, meeting: &MeetingId) -> bool {
        self.meetings.contains(meeting)
    }

    /// Cross-checks that per-meeting records add up to the pre-summed totals for every
    /// `edge_key`, within [`TOTALS_TOLERANCE`].
    pub fn check_totals(&self) -> Vec<TotalsMismatch> {
        let mut by_meeting: BTreeMap<&EdgeKey, WeightSums> = BTreeMap::new();
        for record in &self.edges_by_meeting {
            by_meeting.entry(&record.edge_key).or_default().add(record);
        }

        let mut totals: BTreeMap<&EdgeKey, WeightSums> = BTreeMap::new();
        for record in &self.edges_total {
            totals.entry(&record.edge_key).or_default().add(record);
        }

        let mut mismatches = Vec::new();
        for (edge_key, total) in &totals {
            let summed = by_meeting.get(edge_key).copied().unwrap_or_default();
            if !summed.matches(total) {
                mismatches.push(TotalsMismatch {
                    edge_key: (*edge_key).clone(),
                    summed,
                    total: *total,
                });
            }
        }
        for (edge_key, summed) in &by_meeting {
            if !totals.contains_key(edge_key) {
                mismatches.push(TotalsMismatch {
                    edge_key: (*edge_key).clone(),
                    summed: *summed,
                    total: WeightSums::default(),
                });
            }
        }

        mismatches.sort_by(|a, b| a.edge_key.cmp(&b.edge_key));
        mismatches
    }

    /// Per-direction sums of the per-meeting records matching `filter`. Directions without
    /// records are absent.
    pub fn direction_totals(&self, filter: &MeetingFilter) -> BTreeMap<Direction, WeightSums> {
        let mut out: BTreeMap<Direction, WeightSums> = BTreeMap::new();
        for record in self.meeting_records(filter) {
            out.entry(record.dir).or_default().add(record);
        }
        out
    }
}

/// Additive weights of a group of records.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct WeightSums {
    pub raw_count: u64,
    pub weight_raw: f64,
    pub weight_split: f64,
}

impl WeightSums {
    fn add(&mut self, record: &EdgeRecord) {
        self.raw_count = self.raw_count.saturating_add(record.raw_count);
        self.weight_raw += record.weight_raw;
        self.weight_split += record.weight_split;
    }

    fn matches(&self, other: &Self) -> bool {
        (self.weight_raw - other.weight_raw).abs() <= TOTALS_TOLERANCE
            && (self.weight_split - other.weight_split).abs() <= TOTALS_TOLERANCE
    }
}

/// An `edge_key` whose per-meeting sums disagree with its pre-summed total.
#[derive(Debug, Clone, PartialEq)]
pub struct TotalsMismatch {
    pub edge_key: EdgeKey,
    pub summed: WeightSums,
    pub total: WeightSums,
}

impl fmt::Display for TotalsMismatch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}: per-meeting raw={} split={} vs total raw={} split={}",
            self.edge_key,
            self.summed.weight_raw,
            self.summed.weight_split,
            self.total.weight_raw,
            self.total.weight_split
        )
    }
}

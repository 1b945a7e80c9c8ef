// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Liaison-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Liaison Sankey and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

#![allow(dead_code)]

// Deterministic generated snapshots (no RNG).

use std::collections::BTreeMap;

use liaison_sankey::model::{Direction, EdgeKey, EdgeRecord, EdgeSnapshot, MeetingId, NodeId};

#[derive(Debug, Clone, Copy)]
pub enum Case {
    /// A handful of meetings and groups.
    Small,
    /// Many meetings with a mid-sized group roster.
    ManyMeetings,
    /// Few meetings, many groups per meeting.
    WideFanout,
}

#[derive(Debug, Clone, Copy)]
pub struct Params {
    pub meetings: usize,
    pub groups: usize,
    /// Destination groups per outbound liaison statement.
    pub fanout: usize,
}

impl Case {
    pub fn params(self) -> Params {
        match self {
            Self::Small => Params {
                meetings: 4,
                groups: 8,
                fanout: 2,
            },
            Self::ManyMeetings => Params {
                meetings: 120,
                groups: 40,
                fanout: 3,
            },
            Self::WideFanout => Params {
                meetings: 12,
                groups: 400,
                fanout: 12,
            },
        }
    }
}

pub fn meeting_id(idx: usize) -> MeetingId {
    MeetingId::new(format!("RAN#{}", 100 + idx)).expect("meeting id")
}

fn group(idx: usize) -> String {
    format!("WG{idx:03}")
}

fn edge_key(dir: Direction, from: &str, to: &str) -> String {
    format!("{dir}|||{from}|||{to}")
}

fn mix(seed: usize) -> usize {
    seed.wrapping_mul(2_654_435_761).rotate_left(7) ^ seed
}

pub fn snapshot(case: Case) -> EdgeSnapshot {
    snapshot_with(case.params())
}

pub fn snapshot_with(params: Params) -> EdgeSnapshot {
    let root = NodeId::root();
    let mut by_meeting = Vec::new();
    let mut totals: BTreeMap<(Direction, String, String), (u64, f64)> = BTreeMap::new();

    for meeting_idx in 0..params.meetings {
        let meeting = meeting_id(meeting_idx);

        for slot in 0..params.groups {
            let seed = mix(meeting_idx * 7_919 + slot);
            if seed % 3 == 0 {
                continue;
            }

            let from = format!("{} (src)", group(slot));
            let raw = (seed % 5 + 1) as u64;
            by_meeting.push(record(&meeting, Direction::In, &from, root.as_str(), raw, raw as f64));
            let entry = totals
                .entry((Direction::In, from, root.as_str().to_owned()))
                .or_default();
            entry.0 += raw;
            entry.1 += raw as f64;
        }

        let fanout = params.fanout.max(1);
        for statement in 0..params.groups / 2 {
            let split = 1.0 / fanout as f64;
            for target in 0..fanout {
                let slot = mix(meeting_idx * 31 + statement * fanout + target) % params.groups;
                let to = format!("{} (dst)", group(slot));
                by_meeting.push(record(&meeting, Direction::Out, root.as_str(), &to, 1, split));
                let entry = totals
                    .entry((Direction::Out, root.as_str().to_owned(), to))
                    .or_default();
                entry.0 += 1;
                entry.1 += split;
            }
        }
    }

    let edges_total = totals
        .into_iter()
        .map(|((dir, from, to), (raw, split))| {
            EdgeRecord::new(
                NodeId::new(&from).expect("node id"),
                NodeId::new(&to).expect("node id"),
                dir,
                EdgeKey::new(edge_key(dir, &from, &to)).expect("edge key"),
            )
            .with_weights(raw, raw as f64, split)
        })
        .collect();

    EdgeSnapshot::new(
        (0..params.meetings).map(meeting_id).collect(),
        by_meeting,
        edges_total,
    )
}

fn record(
    meeting: &MeetingId,
    dir: Direction,
    from: &str,
    to: &str,
    raw: u64,
    split: f64,
) -> EdgeRecord {
    EdgeRecord::new(
        NodeId::new(from).expect("node id"),
        NodeId::new(to).expect("node id"),
        dir,
        EdgeKey::new(edge_key(dir, from, to)).expect("edge key"),
    )
    .with_meeting(meeting.clone())
    .with_weights(raw, raw as f64, split)
}

// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Liaison-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Liaison Sankey and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::collections::BTreeMap;

use super::edge::{Direction, EdgeRecord};
use super::ids::{EdgeKey, MeetingId, NodeId};
use super::snapshot::EdgeSnapshot;

fn node(value: &str) -> NodeId {
    NodeId::new(value).expect("node id")
}

fn meeting(value: &str) -> MeetingId {
    MeetingId::new(value).expect("meeting id")
}

pub(crate) fn edge_key(dir: Direction, from: &str, to: &str) -> EdgeKey {
    EdgeKey::new(format!("{dir}|||{from}|||{to}")).expect("edge key")
}

pub(crate) fn record(
    meeting_id: &str,
    dir: Direction,
    from: &str,
    to: &str,
    raw_count: u64,
    weight_split: f64,
) -> EdgeRecord {
    EdgeRecord::new(node(from), node(to), dir, edge_key(dir, from, to))
        .with_meeting(meeting(meeting_id))
        .with_weights(raw_count, raw_count as f64, weight_split)
}

/// Pre-sums per-meeting records by `(dir, from, to)`, in key order.
pub(crate) fn totals_of(records: &[EdgeRecord]) -> Vec<EdgeRecord> {
    let mut groups: BTreeMap<(Direction, NodeId, NodeId), EdgeRecord> = BTreeMap::new();
    for record in records {
        let key = (record.dir, record.from.clone(), record.to.clone());
        let total = groups.entry(key).or_insert_with(|| {
            EdgeRecord::new(
                record.from.clone(),
                record.to.clone(),
                record.dir,
                record.edge_key.clone(),
            )
        });
        total.raw_count += record.raw_count;
        total.weight_raw += record.weight_raw;
        total.weight_split += record.weight_split;
    }
    groups.into_values().collect()
}

/// Two meetings of inbound and outbound liaison traffic. Outbound statements addressed to
/// several groups carry fractional split weights.
pub(crate) fn liaison_snapshot() -> EdgeSnapshot {
    let third = 1.0 / 3.0;
    let by_meeting = vec![
        record("RAN#110", Direction::In, "SA2 (src)", "RAN", 3, 3.0),
        record("RAN#110", Direction::In, "CT1 (src)", "RAN", 1, 1.0),
        record("RAN#110", Direction::Out, "RAN", "SA2 (dst)", 2, 1.0),
        record("RAN#110", Direction::Out, "RAN", "SA3 (dst)", 2, 1.0),
        record("RAN#111", Direction::In, "SA2 (src)", "RAN", 2, 2.0),
        record("RAN#111", Direction::Out, "RAN", "SA2 (dst)", 1, third),
        record("RAN#111", Direction::Out, "RAN", "SA3 (dst)", 1, third),
        record("RAN#111", Direction::Out, "RAN", "CT1 (dst)", 1, third),
    ];
    let totals = totals_of(&by_meeting);

    EdgeSnapshot::new(vec![meeting("RAN#110"), meeting("RAN#111")], by_meeting, totals)
}

/// The two-meeting inbound scenario: `A -> RAN` with 3 and 2 statements.
#[cfg(test)]
pub(crate) fn single_link_snapshot() -> EdgeSnapshot {
    let key = EdgeKey::new("e1").expect("edge key");
    let by_meeting = vec![
        EdgeRecord::new(node("A"), node("RAN"), Direction::In, key.clone())
            .with_meeting(meeting("m1"))
            .with_weights(3, 3.0, 3.0),
        EdgeRecord::new(node("A"), node("RAN"), Direction::In, key)
            .with_meeting(meeting("m2"))
            .with_weights(2, 2.0, 2.0),
    ];
    let totals = totals_of(&by_meeting);

    EdgeSnapshot::new(vec![meeting("m1"), meeting("m2")], by_meeting, totals)
}

// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Liaison-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Liaison Sankey and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use crate::model::{
    displayed_weight, Direction, EdgeKey, EdgeSnapshot, MeetingId, NodeId, SelectionState,
};

/// The identity recovered from a click on a rendered link.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ResolvedClick {
    pub edge_key: EdgeKey,
    pub direction: Direction,
}

impl ResolvedClick {
    pub fn new(edge_key: EdgeKey, direction: Direction) -> Self {
        Self {
            edge_key,
            direction,
        }
    }
}

/// One per-meeting line of the detail table.
#[derive(Debug, Clone, PartialEq)]
pub struct DetailRow {
    /// `None` only if the snapshot carried a per-meeting record without a meeting.
    pub meeting: Option<MeetingId>,
    pub raw_count: u64,
    pub displayed: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub enum DetailContent {
    /// Nothing in the current filter matches the clicked link (stale click, or the empty
    /// placeholder diagram). The view must say so instead of showing an empty table.
    NoData,
    Records {
        from: NodeId,
        to: NodeId,
        raw_total: u64,
        displayed_total: f64,
        rows: Vec<DetailRow>,
    },
}

#[derive(Debug, Clone, PartialEq)]
pub struct DetailSummary {
    direction: Direction,
    edge_key: EdgeKey,
    content: DetailContent,
}

impl DetailSummary {
    pub fn direction(&self) -> Direction {
        self.direction
    }

    pub fn edge_key(&self) -> &EdgeKey {
        &self.edge_key
    }

    pub fn content(&self) -> &DetailContent {
        &self.content
    }

    pub fn is_no_data(&self) -> bool {
        matches!(self.content, DetailContent::NoData)
    }

    pub fn rows(&self) -> &[DetailRow] {
        match &self.content {
            DetailContent::NoData => &[],
            DetailContent::Records { rows, .. } => rows,
        }
    }

    pub fn raw_total(&self) -> Option<u64> {
        match &self.content {
            DetailContent::NoData => None,
            DetailContent::Records { raw_total, .. } => Some(*raw_total),
        }
    }

    pub fn displayed_total(&self) -> Option<f64> {
        match &self.content {
            DetailContent::NoData => None,
            DetailContent::Records {
                displayed_total, ..
            } => Some(*displayed_total),
        }
    }
}

/// Re-aggregates the per-meeting records behind a clicked link.
///
/// Records are restricted to the active meeting filter and then to the clicked `edge_key`; rows
/// keep snapshot order. Raw totals always come from `raw_count`, displayed totals follow the
/// active weighting for the clicked panel's direction.
pub fn detail(
    resolved: &ResolvedClick,
    selection: &SelectionState,
    snapshot: &EdgeSnapshot,
) -> DetailSummary {
    let split = selection.split_weighting();
    let mut matches = snapshot
        .meeting_records(selection.meeting())
        .filter(|record| record.edge_key == resolved.edge_key)
        .peekable();

    let endpoints = matches
        .peek()
        .map(|first| (first.from.clone(), first.to.clone()));

    let content = match endpoints {
        None => DetailContent::NoData,
        Some((from, to)) => {
            let mut raw_total = 0u64;
            let mut displayed_total = 0.0;
            let mut rows = Vec::new();

            for record in matches {
                let displayed = displayed_weight(record, resolved.direction, split);
                raw_total = raw_total.saturating_add(record.raw_count);
                displayed_total += displayed;
                rows.push(DetailRow {
                    meeting: record.meeting.clone(),
                    raw_count: record.raw_count,
                    displayed,
                });
            }

            DetailContent::Records {
                from,
                to,
                raw_total,
                displayed_total,
                rows,
            }
        }
    };

    DetailSummary {
        direction: resolved.direction,
        edge_key: resolved.edge_key.clone(),
        content,
    }
}

#[cfg(test)]
mod tests {
    use rstest::{fixture, rstest};

    use super::{detail, DetailContent, ResolvedClick};
    use crate::model::fixtures::{self, edge_key};
    use crate::model::{
        Direction, DirectionFilter, EdgeKey, EdgeSnapshot, MeetingFilter, MeetingId,
        SelectionState,
    };

    #[fixture]
    fn snapshot() -> EdgeSnapshot {
        fixtures::liaison_snapshot()
    }

    fn meetings(summary: &super::DetailSummary) -> Vec<&str> {
        summary
            .rows()
            .iter()
            .filter_map(|row| row.meeting.as_ref().map(|m| m.as_str()))
            .collect()
    }

    #[test]
    fn detail_sums_all_meetings_for_an_inbound_link() {
        let snapshot = fixtures::single_link_snapshot();
        let resolved = ResolvedClick::new(EdgeKey::new("e1").expect("edge key"), Direction::In);

        let summary = detail(&resolved, &SelectionState::default(), &snapshot);

        assert!(!summary.is_no_data());
        assert_eq!(summary.raw_total(), Some(5));
        assert_eq!(summary.displayed_total(), Some(5.0));
        let raws = summary.rows().iter().map(|row| row.raw_count).collect::<Vec<_>>();
        assert_eq!(raws, vec![3, 2]);
        assert_eq!(meetings(&summary), vec!["m1", "m2"]);
        match summary.content() {
            DetailContent::Records { from, to, .. } => {
                assert_eq!(from.as_str(), "A");
                assert_eq!(to.as_str(), "RAN");
            }
            DetailContent::NoData => panic!("expected records"),
        }
    }

    #[rstest]
    fn detail_respects_meeting_filter(snapshot: EdgeSnapshot) {
        let meeting = MeetingId::new("RAN#111").expect("meeting");
        let selection =
            SelectionState::new(DirectionFilter::All, MeetingFilter::Meeting(meeting), false);
        let resolved =
            ResolvedClick::new(edge_key(Direction::In, "SA2 (src)", "RAN"), Direction::In);

        let summary = detail(&resolved, &selection, &snapshot);

        assert_eq!(meetings(&summary), vec!["RAN#111"]);
        assert_eq!(summary.raw_total(), Some(2));
    }

    #[rstest]
    fn split_mode_changes_displayed_but_not_raw_totals(snapshot: EdgeSnapshot) {
        let resolved =
            ResolvedClick::new(edge_key(Direction::Out, "RAN", "SA2 (dst)"), Direction::Out);

        let unsplit = detail(&resolved, &SelectionState::default(), &snapshot);
        let split = detail(
            &resolved,
            &SelectionState::new(DirectionFilter::Out, MeetingFilter::All, true),
            &snapshot,
        );

        assert_eq!(unsplit.raw_total(), Some(3));
        assert_eq!(split.raw_total(), Some(3));
        assert_eq!(unsplit.displayed_total(), Some(3.0));
        let split_total = split.displayed_total().expect("displayed total");
        assert!((split_total - (1.0 + 1.0 / 3.0)).abs() < 1e-9);
        let displayed = split.rows().iter().map(|row| row.displayed).collect::<Vec<_>>();
        assert_eq!(displayed, vec![1.0, 1.0 / 3.0]);
    }

    #[rstest]
    fn split_mode_leaves_inbound_detail_raw(snapshot: EdgeSnapshot) {
        let resolved =
            ResolvedClick::new(edge_key(Direction::In, "SA2 (src)", "RAN"), Direction::In);
        let selection = SelectionState::new(DirectionFilter::All, MeetingFilter::All, true);

        let summary = detail(&resolved, &selection, &snapshot);
        assert_eq!(summary.displayed_total(), Some(5.0));
    }

    #[rstest]
    #[case::unknown_key("in|||Nobody (src)|||RAN", None)]
    #[case::filtered_out("in|||CT1 (src)|||RAN", Some("RAN#111"))]
    fn detail_without_matches_is_flagged_no_data(
        snapshot: EdgeSnapshot,
        #[case] key: &str,
        #[case] meeting: Option<&str>,
    ) {
        let filter = meeting
            .map(|m| MeetingFilter::Meeting(MeetingId::new(m).expect("meeting")))
            .unwrap_or_default();
        let selection = SelectionState::new(DirectionFilter::All, filter, false);
        let resolved = ResolvedClick::new(EdgeKey::new(key).expect("edge key"), Direction::In);

        let summary = detail(&resolved, &selection, &snapshot);

        assert!(summary.is_no_data());
        assert!(summary.rows().is_empty());
        assert_eq!(summary.raw_total(), None);
        assert_eq!(summary.edge_key().as_str(), key);
    }
}

// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Liaison-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Liaison Sankey and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use smallvec::SmallVec;

use crate::model::{Direction, DirectionFilter, EdgeKey, EdgeSnapshot, NodeId, SelectionState};
use crate::query::{aggregate_with_root, SankeyFlow};

use super::format::ValueFormat;
use super::palette;

pub const NODE_PAD: u32 = 20;
pub const NODE_THICKNESS: u32 = 18;

/// At most two panels are ever shown (inbound and outbound).
pub type Panels = SmallVec<[DiagramSpec; 2]>;

/// Fractional placement of a panel on the drawing surface.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PanelDomain {
    pub x: [f64; 2],
    pub y: [f64; 2],
}

impl PanelDomain {
    /// Side-by-side placement: inbound on the left, outbound on the right.
    pub fn side_by_side(direction: Direction) -> Self {
        match direction {
            Direction::In => Self {
                x: [0.0, 0.48],
                y: [0.0, 1.0],
            },
            Direction::Out => Self {
                x: [0.52, 1.0],
                y: [0.0, 1.0],
            },
        }
    }
}

/// One renderable Sankey panel, tagged with the direction it shows.
#[derive(Debug, Clone, PartialEq)]
pub struct DiagramSpec {
    direction: Direction,
    domain: Option<PanelDomain>,
    value_format: ValueFormat,
    flow: SankeyFlow,
}

impl DiagramSpec {
    pub fn direction(&self) -> Direction {
        self.direction
    }

    pub fn name(&self) -> &'static str {
        self.direction.title()
    }

    pub fn domain(&self) -> Option<PanelDomain> {
        self.domain
    }

    pub fn value_format(&self) -> ValueFormat {
        self.value_format
    }

    pub fn hover_template(&self) -> &'static str {
        self.value_format.hover_template()
    }

    pub fn flow(&self) -> &SankeyFlow {
        &self.flow
    }

    pub fn link_count(&self) -> usize {
        self.flow.links().len()
    }

    /// The `edge_key` of each link, parallel to the link arrays handed to the renderer.
    pub fn edge_keys(&self) -> impl ExactSizeIterator<Item = &EdgeKey> + '_ {
        self.flow.links().iter().map(|link| &link.edge_key)
    }

    pub fn edge_key_at(&self, link_index: usize) -> Option<&EdgeKey> {
        self.flow.links().get(link_index).map(|link| &link.edge_key)
    }

    pub fn node_colors(&self) -> impl Iterator<Item = &'static str> + '_ {
        let nodes = self.flow.nodes();
        nodes.labels().iter().map(move |label| palette::node_color(nodes.role(label)))
    }

    pub fn link_color(&self) -> &'static str {
        palette::link_color(self.direction)
    }
}

/// Builds the panels for the current selection, anchored on the default root.
pub fn build(snapshot: &EdgeSnapshot, selection: &SelectionState) -> Panels {
    build_with_root(snapshot, selection, &NodeId::root())
}

/// Builds one panel per shown direction.
///
/// Edges come from the pre-summed totals for `all` meetings, otherwise from the chosen
/// meeting's records. Split weighting only ever reaches the outbound panel. Panels are always
/// produced, falling back to the root-only placeholder when nothing qualifies.
pub fn build_with_root(
    snapshot: &EdgeSnapshot,
    selection: &SelectionState,
    root: &NodeId,
) -> Panels {
    let shown = selection.direction();
    let side_by_side = shown == DirectionFilter::All;

    shown
        .directions()
        .iter()
        .map(|&direction| {
            let split = direction == Direction::Out && selection.split_weighting();
            let edges = snapshot
                .source_edges(selection.meeting())
                .filter(|record| record.dir == direction);

            DiagramSpec {
                direction,
                domain: side_by_side.then(|| PanelDomain::side_by_side(direction)),
                value_format: ValueFormat::for_split(split),
                flow: aggregate_with_root(edges, direction, split, root),
            }
        })
        .collect()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Margin {
    pub left: u32,
    pub right: u32,
    pub top: u32,
    pub bottom: u32,
}

/// Surface-level layout shared by all panels.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiagramLayout {
    pub title: String,
    pub title_font_size: u32,
    pub font_size: u32,
    pub margin: Margin,
    pub background: &'static str,
    pub show_legend: bool,
}

pub fn layout_for(selection: &SelectionState) -> DiagramLayout {
    let title = match selection.direction() {
        DirectionFilter::All => "Inbound (left) | Outbound (right)",
        DirectionFilter::In => Direction::In.title(),
        DirectionFilter::Out => Direction::Out.title(),
    };

    DiagramLayout {
        title: title.to_owned(),
        title_font_size: 16,
        font_size: 11,
        margin: Margin {
            left: 20,
            right: 20,
            top: 50,
            bottom: 20,
        },
        background: palette::PAPER_BACKGROUND,
        show_legend: false,
    }
}

#[cfg(test)]
mod tests {
    use rstest::{fixture, rstest};

    use super::{build, layout_for, PanelDomain};
    use crate::model::fixtures;
    use crate::model::{
        Direction, DirectionFilter, EdgeSnapshot, MeetingFilter, MeetingId, SelectionState,
    };
    use crate::render::format::ValueFormat;
    use crate::render::palette;

    #[fixture]
    fn snapshot() -> EdgeSnapshot {
        fixtures::liaison_snapshot()
    }

    fn selection(direction: DirectionFilter, meeting: Option<&str>, split: bool) -> SelectionState {
        let meeting = meeting
            .map(|m| MeetingFilter::Meeting(MeetingId::new(m).expect("meeting")))
            .unwrap_or_default();
        SelectionState::new(direction, meeting, split)
    }

    #[rstest]
    fn all_directions_yield_two_side_by_side_panels(snapshot: EdgeSnapshot) {
        let panels = build(&snapshot, &selection(DirectionFilter::All, None, true));

        assert_eq!(panels.len(), 2);
        assert_eq!(panels[0].direction(), Direction::In);
        assert_eq!(panels[1].direction(), Direction::Out);
        assert_eq!(panels[0].domain(), Some(PanelDomain::side_by_side(Direction::In)));
        assert_eq!(panels[1].domain().map(|d| d.x), Some([0.52, 1.0]));

        // Inbound never splits, even with the toggle on.
        assert_eq!(panels[0].value_format(), ValueFormat::Whole);
        assert_eq!(panels[0].flow().total_weight(), 6.0);
        assert_eq!(panels[1].value_format(), ValueFormat::Fractional);
        assert!((panels[1].flow().total_weight() - 3.0).abs() < 1e-9);
    }

    #[rstest]
    #[case(DirectionFilter::In, Direction::In)]
    #[case(DirectionFilter::Out, Direction::Out)]
    fn single_direction_yields_one_undomained_panel(
        snapshot: EdgeSnapshot,
        #[case] filter: DirectionFilter,
        #[case] expected: Direction,
    ) {
        let panels = build(&snapshot, &selection(filter, None, false));
        assert_eq!(panels.len(), 1);
        assert_eq!(panels[0].direction(), expected);
        assert_eq!(panels[0].domain(), None);
        assert_eq!(panels[0].hover_template(), "Displayed: %{value:.0f}");
        assert!(panels[0]
            .flow()
            .links()
            .iter()
            .all(|link| link.direction == expected));
    }

    #[rstest]
    fn meeting_filter_uses_that_meetings_records(snapshot: EdgeSnapshot) {
        let panels = build(&snapshot, &selection(DirectionFilter::In, Some("RAN#111"), false));
        let flow = panels[0].flow();
        assert_eq!(flow.links().len(), 1);
        assert_eq!(flow.links()[0].from.as_str(), "SA2 (src)");
        assert_eq!(flow.links()[0].weight, 2.0);
    }

    #[rstest]
    fn unknown_meeting_yields_placeholder_panels(snapshot: EdgeSnapshot) {
        let panels = build(&snapshot, &selection(DirectionFilter::All, Some("RAN#999"), false));
        assert_eq!(panels.len(), 2);
        for panel in &panels {
            assert!(panel.flow().is_empty());
            let labels = panel.flow().nodes().labels();
            assert_eq!(labels.len(), 1);
            assert_eq!(labels[0].as_str(), "RAN");
            assert_eq!(panel.edge_keys().len(), 0);
        }
    }

    #[rstest]
    fn edge_keys_and_colors_follow_links(snapshot: EdgeSnapshot) {
        let panels = build(&snapshot, &selection(DirectionFilter::Out, None, false));
        let panel = &panels[0];

        let keys = panel.edge_keys().map(|k| k.as_str()).collect::<Vec<_>>();
        let expected = panel
            .flow()
            .links()
            .iter()
            .map(|link| link.edge_key.as_str())
            .collect::<Vec<_>>();
        assert_eq!(keys, expected);
        assert_eq!(panel.edge_key_at(keys.len()), None);
        assert_eq!(panel.link_color(), palette::LINK_OUT);

        let colors = panel.node_colors().collect::<Vec<_>>();
        assert_eq!(colors[0], palette::NODE_ROOT);
        assert!(colors[1..].iter().all(|c| *c == palette::NODE_DESTINATION));
    }

    #[rstest]
    #[case(DirectionFilter::All, "Inbound (left) | Outbound (right)")]
    #[case(DirectionFilter::In, "Inbound")]
    #[case(DirectionFilter::Out, "Outbound")]
    fn layout_title_tracks_direction(#[case] filter: DirectionFilter, #[case] title: &str) {
        let layout = layout_for(&selection(filter, None, false));
        assert_eq!(layout.title, title);
        assert!(!layout.show_legend);
        assert_eq!(layout.margin.top, 50);
    }
}

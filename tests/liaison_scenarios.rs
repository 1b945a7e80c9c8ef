// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Liaison-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Liaison Sankey and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::path::{Path, PathBuf};

use rstest::rstest;
use serde_json::json;

use liaison_sankey::model::{
    Direction, DirectionFilter, EdgeSnapshot, FilterChange, MeetingFilter, MeetingId,
    SelectionState,
};
use liaison_sankey::query::{aggregate, DetailContent};
use liaison_sankey::render::{build, figure, layout_for};
use liaison_sankey::store::SnapshotFile;
use liaison_sankey::ui::{
    ClickEvent, ClickOutcome, DismissAction, FigureSurface, TextSurface, Viewer,
};

fn fixture_path(name: &str) -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join("liaison")
        .join(name)
}

fn load(name: &str) -> EdgeSnapshot {
    let path = fixture_path(name);
    SnapshotFile::new(&path)
        .load()
        .unwrap_or_else(|err| panic!("failed to load {path:?}: {err}"))
}

fn shown(outcome: ClickOutcome) -> liaison_sankey::query::DetailSummary {
    match outcome {
        ClickOutcome::Shown(summary) => summary,
        other => panic!("expected a detail view, got {other:?}"),
    }
}

#[test]
fn inbound_link_aggregates_across_meetings_and_drills_down() {
    let snapshot = load("inbound_two_meetings.js");
    assert!(snapshot.check_totals().is_empty());

    let flow = aggregate(
        snapshot.meeting_records(&MeetingFilter::All),
        Direction::In,
        false,
    );
    assert_eq!(flow.links().len(), 1);
    assert_eq!(flow.links()[0].from.as_str(), "A");
    assert_eq!(flow.links()[0].to.as_str(), "RAN");
    assert_eq!(flow.links()[0].weight, 5.0);

    let mut viewer = Viewer::new(snapshot);
    assert!(viewer.apply(FilterChange::Direction(DirectionFilter::In)));
    let mut surface = TextSurface::default();
    let ticket = viewer.render(&mut surface);
    assert!(viewer.draw_completed(ticket));

    let summary = shown(viewer.handle_click(&ClickEvent::link(0, 0)));
    assert_eq!(summary.edge_key().as_str(), "e1");
    assert_eq!(summary.raw_total(), Some(5));
    assert_eq!(summary.displayed_total(), Some(5.0));
    let rows = summary
        .rows()
        .iter()
        .map(|row| (row.meeting.as_ref().map(|m| m.as_str().to_owned()), row.raw_count))
        .collect::<Vec<_>>();
    assert_eq!(rows, vec![(Some("m1".to_owned()), 3), (Some("m2".to_owned()), 2)]);

    let body = viewer.detail_view().body_text().expect("detail visible");
    assert!(body.contains("From: A → To: RAN"));
    assert!(body.contains("Raw: 5, Displayed: 5"));
}

#[rstest]
#[case(false, 5.0)]
#[case(true, 2.0)]
fn outbound_split_changes_displayed_but_not_raw(#[case] split: bool, #[case] displayed: f64) {
    let snapshot = load("outbound_split.json");
    let selection = SelectionState::new(DirectionFilter::Out, MeetingFilter::All, split);
    let mut viewer = Viewer::with_selection(snapshot, Default::default(), selection);

    let mut surface = TextSurface::default();
    let ticket = viewer.render(&mut surface);
    viewer.draw_completed(ticket);
    assert_eq!(viewer.panels()[0].flow().total_weight(), displayed);

    let summary = shown(viewer.handle_click(&ClickEvent::from_value(
        json!({"points": [{"pointNumber": 0}]}),
    )));
    assert_eq!(summary.direction(), Direction::Out);
    assert_eq!(summary.raw_total(), Some(5));
    assert_eq!(summary.displayed_total(), Some(displayed));
}

#[test]
fn inbound_panel_ignores_split_toggle() {
    let snapshot = load("outbound_split.json");
    let plain = build(&snapshot, &SelectionState::default());
    let split = build(
        &snapshot,
        &SelectionState::new(DirectionFilter::All, MeetingFilter::All, true),
    );

    assert_eq!(plain[0].flow(), split[0].flow());
    assert_ne!(plain[1].flow(), split[1].flow());
}

#[test]
fn meeting_without_records_shows_root_only_panels_and_no_clicks() {
    let snapshot = load("inbound_two_meetings.js");
    let mut viewer = Viewer::new(snapshot);
    viewer.apply(FilterChange::Meeting(MeetingFilter::Meeting(
        MeetingId::new("m9").expect("meeting"),
    )));

    let mut surface = FigureSurface::default();
    let ticket = viewer.render(&mut surface);
    viewer.draw_completed(ticket);

    let figure = surface.figure().expect("figure drawn");
    assert_eq!(figure.data.len(), 2);
    for trace in &figure.data {
        assert_eq!(trace.node.label, vec!["RAN".to_owned()]);
        assert!(trace.link.value.is_empty());
    }
    assert_eq!(
        viewer.handle_click(&ClickEvent::link(0, 0)),
        ClickOutcome::Unresolved
    );
}

#[test]
fn detail_follows_active_meeting_filter() {
    let snapshot = load("inbound_two_meetings.js");
    let mut viewer = Viewer::new(snapshot);
    viewer.apply(FilterChange::Direction(DirectionFilter::In));
    viewer.apply(FilterChange::Meeting(MeetingFilter::Meeting(
        MeetingId::new("m2").expect("meeting"),
    )));

    let mut surface = TextSurface::default();
    let ticket = viewer.render(&mut surface);
    viewer.draw_completed(ticket);
    assert!(surface.text().contains("A ─▶ RAN  2"));

    let summary = shown(viewer.handle_click(&ClickEvent::link(0, 0)));
    assert_eq!(summary.raw_total(), Some(2));
    assert!(matches!(summary.content(), DetailContent::Records { rows, .. } if rows.len() == 1));

    assert!(viewer.dismiss(DismissAction::OverlayClick { on_background: true }));
    assert!(!viewer.detail_view().is_visible());
}

#[test]
fn renderer_figure_round_trips_click_customdata() {
    let snapshot = load("outbound_split.json");
    let selection = SelectionState::default();
    let panels = build(&snapshot, &selection);
    let figure = figure(&panels, &layout_for(&selection));

    let outbound = &figure.data[1];
    assert_eq!(outbound.meta.dir, "out");
    assert_eq!(outbound.link.customdata, vec!["e2".to_owned()]);

    let event = json!({
        "points": [{"curveNumber": 1, "pointNumber": 0, "customdata": outbound.link.customdata[0]}]
    });
    let resolved = liaison_sankey::ui::resolve(&panels, &ClickEvent::from_value(event))
        .expect("resolved");
    assert_eq!(resolved.edge_key.as_str(), "e2");
    assert_eq!(resolved.direction, Direction::Out);
}

#[test]
fn filter_change_waits_for_redraw_before_detail() {
    let snapshot = load("outbound_split.json");
    let selection = SelectionState::new(DirectionFilter::Out, MeetingFilter::All, false);
    let mut viewer = Viewer::with_selection(snapshot, Default::default(), selection);

    let mut surface = TextSurface::default();
    let ticket = viewer.render(&mut surface);
    assert!(viewer.draw_completed(ticket));

    viewer.apply(FilterChange::SplitWeighting(true));
    viewer.apply(FilterChange::Meeting(MeetingFilter::Meeting(
        MeetingId::new("m2").expect("meeting"),
    )));
    assert_eq!(viewer.handle_click(&ClickEvent::link(0, 0)), ClickOutcome::Ignored);
    assert!(!viewer.detail_view().is_visible());

    let ticket = viewer.render(&mut surface);
    assert!(viewer.draw_completed(ticket));
    assert_eq!(viewer.panels()[0].flow().total_weight(), 0.5);

    let summary = shown(viewer.handle_click(&ClickEvent::link(0, 0)));
    assert_eq!(summary.edge_key().as_str(), "e2");
    assert_eq!(summary.raw_total(), Some(2));
    assert_eq!(summary.displayed_total(), Some(0.5));
}

// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Liaison-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Liaison Sankey and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Resolution of renderer click events back to aggregated links.
//!
//! Renderers do not agree on where a clicked link's index lives, so the index is probed through
//! an ordered list of strategies. Nothing here fails loudly: anything that cannot be traced back
//! to a link resolves to `None`.

use serde::Deserialize;
use serde_json::Value;

use crate::model::EdgeKey;
use crate::query::ResolvedClick;
use crate::render::DiagramSpec;

/// A click event as emitted by the diagram surface.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct ClickEvent {
    #[serde(default)]
    pub points: Vec<ClickPoint>,
}

impl ClickEvent {
    /// Parses a raw event. Events that do not have the expected shape become an event without
    /// points, which resolves to nothing.
    pub fn from_value(value: Value) -> Self {
        serde_json::from_value(value).unwrap_or_default()
    }

    pub fn link(curve_number: usize, point_number: usize) -> Self {
        Self {
            points: vec![ClickPoint {
                curve_number: Some(Value::from(curve_number)),
                point_number: Some(Value::from(point_number)),
                ..ClickPoint::default()
            }],
        }
    }
}

/// One clicked element. Index fields are kept as raw JSON since renderers fill them with
/// anything from integers to `null`.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClickPoint {
    /// Index of the clicked panel.
    #[serde(default)]
    pub curve_number: Option<Value>,
    #[serde(default)]
    pub point_number: Option<Value>,
    #[serde(default)]
    pub point_index: Option<Value>,
    /// Older renderer builds report the link here.
    #[serde(default)]
    pub link_index: Option<Value>,
    /// Per-point edge key override.
    #[serde(default)]
    pub customdata: Option<Value>,
    #[serde(default)]
    pub source_links: Option<Value>,
    #[serde(default)]
    pub target_links: Option<Value>,
}

impl ClickPoint {
    /// Node elements list their attached links; link elements do not.
    pub fn is_node(&self) -> bool {
        self.source_links.is_some() || self.target_links.is_some()
    }

    fn edge_key_override(&self) -> Option<EdgeKey> {
        match self.customdata.as_ref()? {
            Value::String(raw) => EdgeKey::new(raw).ok(),
            _ => None,
        }
    }
}

/// A pure link-index probe over a click point.
pub type IndexStrategy = fn(&ClickPoint) -> Option<usize>;

/// Index probes in priority order.
pub const LINK_INDEX_STRATEGIES: [(&str, IndexStrategy); 3] = [
    ("pointNumber", by_point_number),
    ("pointIndex", by_point_index),
    ("linkIndex", by_link_index),
];

fn as_index(value: Option<&Value>) -> Option<usize> {
    let value = value?;
    if let Some(idx) = value.as_u64() {
        return usize::try_from(idx).ok();
    }
    let idx = value.as_f64()?;
    (idx >= 0.0 && idx.fract() == 0.0 && idx <= usize::MAX as f64).then_some(idx as usize)
}

fn by_point_number(point: &ClickPoint) -> Option<usize> {
    as_index(point.point_number.as_ref())
}

fn by_point_index(point: &ClickPoint) -> Option<usize> {
    as_index(point.point_index.as_ref())
}

fn by_link_index(point: &ClickPoint) -> Option<usize> {
    as_index(point.link_index.as_ref())
}

/// First index any strategy yields that addresses one of `link_count` links.
pub fn extract_link_index(point: &ClickPoint, link_count: usize) -> Option<usize> {
    LINK_INDEX_STRATEGIES
        .iter()
        .filter_map(|(_, strategy)| strategy(point))
        .find(|&idx| idx < link_count)
}

fn clicked_panel<'a>(panels: &'a [DiagramSpec], point: &ClickPoint) -> Option<&'a DiagramSpec> {
    match as_index(point.curve_number.as_ref()) {
        Some(curve) => panels.get(curve),
        None if panels.len() == 1 => panels.first(),
        None => None,
    }
}

/// Recovers the clicked link's `edge_key` and its panel's direction.
pub fn resolve(panels: &[DiagramSpec], event: &ClickEvent) -> Option<ResolvedClick> {
    let point = event.points.first()?;
    if point.is_node() {
        return None;
    }

    let panel = clicked_panel(panels, point)?;
    let link_index = extract_link_index(point, panel.link_count())?;
    let edge_key = point
        .edge_key_override()
        .or_else(|| panel.edge_key_at(link_index).cloned())?;

    Some(ResolvedClick::new(edge_key, panel.direction()))
}

/// Hook run after every resolution. It sees the outcome but cannot change it.
pub trait ClickObserver {
    fn observe(&self, event: &ClickEvent, resolved: Option<&ResolvedClick>);
}

/// Logs click shapes and outcomes at debug level.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingClickObserver;

impl ClickObserver for TracingClickObserver {
    fn observe(&self, event: &ClickEvent, resolved: Option<&ResolvedClick>) {
        match event.points.first() {
            Some(point) => tracing::debug!(
                points = event.points.len(),
                curve_number = ?point.curve_number,
                point_number = ?point.point_number,
                point_index = ?point.point_index,
                link_index = ?point.link_index,
                has_customdata = point.customdata.is_some(),
                is_node = point.is_node(),
                "sankey click"
            ),
            None => tracing::debug!("sankey click without points"),
        }

        match resolved {
            Some(resolved) => tracing::debug!(
                edge_key = %resolved.edge_key,
                direction = %resolved.direction,
                "click resolved"
            ),
            None => tracing::debug!("click did not resolve to a link"),
        }
    }
}

pub fn resolve_observed(
    panels: &[DiagramSpec],
    event: &ClickEvent,
    observer: Option<&dyn ClickObserver>,
) -> Option<ResolvedClick> {
    let resolved = resolve(panels, event);
    if let Some(observer) = observer {
        observer.observe(event, resolved.as_ref());
    }
    resolved
}

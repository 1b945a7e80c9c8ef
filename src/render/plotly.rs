// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Liaison-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Liaison Sankey and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Renderer-facing figure types.
//!
//! These mirror the JSON a browser Sankey renderer consumes (`data` traces plus `layout`), so the
//! built panels can be handed over as-is and click events can be resolved against them.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use super::diagram::{DiagramLayout, DiagramSpec, NODE_PAD, NODE_THICKNESS};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct Figure {
    pub data: Vec<SankeyTrace>,
    pub layout: FigureLayout,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct SankeyTrace {
    #[serde(rename = "type")]
    pub kind: String,
    pub orientation: String,
    pub name: String,
    pub node: TraceNodes,
    pub link: TraceLinks,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub domain: Option<TraceDomain>,
    pub meta: TraceMeta,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct TraceNodes {
    pub label: Vec<String>,
    pub color: Vec<String>,
    pub pad: u32,
    pub thickness: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct TraceLinks {
    pub source: Vec<usize>,
    pub target: Vec<usize>,
    pub value: Vec<f64>,
    pub color: Vec<String>,
    /// Edge keys, parallel to `source`/`target`/`value`.
    pub customdata: Vec<String>,
    pub hovertemplate: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct TraceDomain {
    pub x: [f64; 2],
    pub y: [f64; 2],
}

/// Direction tag read back when a click on this trace is resolved.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct TraceMeta {
    pub dir: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct FigureLayout {
    pub title: LayoutTitle,
    pub font: LayoutFont,
    pub margin: LayoutMargin,
    pub paper_bgcolor: String,
    pub showlegend: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct LayoutTitle {
    pub text: String,
    pub font: LayoutFont,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct LayoutFont {
    pub size: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct LayoutMargin {
    pub l: u32,
    pub r: u32,
    pub t: u32,
    pub b: u32,
}

pub fn trace(panel: &DiagramSpec) -> SankeyTrace {
    let flow = panel.flow();
    let links = flow.links();
    let link_color = panel.link_color();

    SankeyTrace {
        kind: "sankey".to_owned(),
        orientation: "h".to_owned(),
        name: panel.name().to_owned(),
        node: TraceNodes {
            label: flow
                .nodes()
                .labels()
                .iter()
                .map(|label| label.as_str().to_owned())
                .collect(),
            color: panel.node_colors().map(str::to_owned).collect(),
            pad: NODE_PAD,
            thickness: NODE_THICKNESS,
        },
        link: TraceLinks {
            source: links.iter().map(|link| link.source).collect(),
            target: links.iter().map(|link| link.target).collect(),
            value: links.iter().map(|link| link.weight).collect(),
            color: links.iter().map(|_| link_color.to_owned()).collect(),
            customdata: panel.edge_keys().map(|key| key.as_str().to_owned()).collect(),
            hovertemplate: panel.hover_template().to_owned(),
        },
        domain: panel.domain().map(|domain| TraceDomain {
            x: domain.x,
            y: domain.y,
        }),
        meta: TraceMeta {
            dir: panel.direction().as_str().to_owned(),
        },
    }
}

pub fn figure_layout(layout: &DiagramLayout) -> FigureLayout {
    FigureLayout {
        title: LayoutTitle {
            text: layout.title.clone(),
            font: LayoutFont {
                size: layout.title_font_size,
            },
        },
        font: LayoutFont {
            size: layout.font_size,
        },
        margin: LayoutMargin {
            l: layout.margin.left,
            r: layout.margin.right,
            t: layout.margin.top,
            b: layout.margin.bottom,
        },
        paper_bgcolor: layout.background.to_owned(),
        showlegend: layout.show_legend,
    }
}

pub fn figure(panels: &[DiagramSpec], layout: &DiagramLayout) -> Figure {
    Figure {
        data: panels.iter().map(trace).collect(),
        layout: figure_layout(layout),
    }
}

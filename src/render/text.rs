// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Liaison-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Liaison Sankey and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::fmt::Write as _;

use crate::model::{Direction, EdgeSnapshot, MeetingFilter};
use crate::query::{DetailContent, DetailSummary};

use super::diagram::{DiagramLayout, DiagramSpec};
use super::format::{format_displayed, format_raw};

const MAX_LABEL_LEN: usize = 28;
const ARROW: &str = " ─▶ ";
pub const NO_DATA: &str = "No matching data";

pub(crate) fn truncate_with_ellipsis(text: &str, max_len: usize) -> String {
    if max_len == 0 {
        return String::new();
    }

    let len = text_len(text);
    if len <= max_len {
        return text.to_owned();
    }

    if max_len == 1 {
        return "…".to_owned();
    }

    let mut out: String = text.chars().take(max_len - 1).collect();
    out.push('…');
    out
}

pub(crate) fn text_len(text: &str) -> usize {
    text.chars().count()
}

fn pad_to(text: &str, width: usize) -> String {
    let mut out = text.to_owned();
    for _ in text_len(text)..width {
        out.push(' ');
    }
    out
}

/// Plain-text rendering of the built panels, one line per link prefixed with its link index
/// (the index a click on that link reports).
pub fn render_panels_text(panels: &[DiagramSpec], layout: &DiagramLayout) -> String {
    let mut out = String::new();
    out.push_str(&layout.title);
    out.push('\n');

    for panel in panels {
        let flow = panel.flow();
        let format = panel.value_format();
        out.push('\n');
        let _ = writeln!(
            out,
            "[{}] {} links, total {}",
            panel.name(),
            flow.links().len(),
            format.format(flow.total_weight())
        );

        if flow.is_empty() {
            let _ = writeln!(out, "  (no flows; {} only)", flow.nodes().root());
            continue;
        }

        let from_width = flow
            .links()
            .iter()
            .map(|link| text_len(&truncate_with_ellipsis(link.from.as_str(), MAX_LABEL_LEN)))
            .max()
            .unwrap_or(0);
        let to_width = flow
            .links()
            .iter()
            .map(|link| text_len(&truncate_with_ellipsis(link.to.as_str(), MAX_LABEL_LEN)))
            .max()
            .unwrap_or(0);

        for (idx, link) in flow.links().iter().enumerate() {
            let from = truncate_with_ellipsis(link.from.as_str(), MAX_LABEL_LEN);
            let to = truncate_with_ellipsis(link.to.as_str(), MAX_LABEL_LEN);
            let _ = writeln!(
                out,
                "  #{idx:<3}{}{ARROW}{}  {}",
                pad_to(&from, from_width),
                pad_to(&to, to_width),
                format.format(link.weight)
            );
        }
    }

    trim_trailing_lines(out)
}

/// Body of the detail view: title, endpoints, totals and the per-meeting table. A summary
/// without matching records renders an explicit no-data row.
pub fn render_detail_text(summary: &DetailSummary) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{} flow detail", summary.direction().title());

    match summary.content() {
        DetailContent::NoData => {
            let _ = writeln!(out, "edge_key: {}", summary.edge_key());
            let _ = writeln!(out, "{NO_DATA}");
            out.push('\n');
            let _ = writeln!(out, "meeting  raw  displayed");
            let _ = writeln!(out, "{NO_DATA}");
        }
        DetailContent::Records {
            from,
            to,
            raw_total,
            displayed_total,
            rows,
        } => {
            let _ = writeln!(out, "From: {from} → To: {to}");
            let _ = writeln!(
                out,
                "Raw: {}, Displayed: {}",
                format_raw(*raw_total),
                format_displayed(*displayed_total)
            );
            out.push('\n');

            let cells = rows
                .iter()
                .map(|row| {
                    (
                        row.meeting
                            .as_ref()
                            .map(|m| m.as_str().to_owned())
                            .unwrap_or_else(|| "-".to_owned()),
                        format_raw(row.raw_count),
                        format_displayed(row.displayed),
                    )
                })
                .collect::<Vec<_>>();

            let meeting_width = cells
                .iter()
                .map(|(meeting, _, _)| text_len(meeting))
                .chain([text_len("meeting")])
                .max()
                .unwrap_or(0);
            let raw_width = cells
                .iter()
                .map(|(_, raw, _)| text_len(raw))
                .chain([text_len("raw")])
                .max()
                .unwrap_or(0);

            let _ = writeln!(
                out,
                "{}  {}  displayed",
                pad_to("meeting", meeting_width),
                pad_to("raw", raw_width)
            );
            for (meeting, raw, displayed) in &cells {
                let _ = writeln!(
                    out,
                    "{}  {}  {}",
                    pad_to(meeting, meeting_width),
                    pad_to(raw, raw_width),
                    displayed
                );
            }
        }
    }

    trim_trailing_lines(out)
}

/// One line per meeting plus a final `all` line: inbound raw sum, outbound raw sum and outbound
/// split sum of the per-meeting records.
pub fn render_direction_totals(snapshot: &EdgeSnapshot) -> String {
    let filters = snapshot
        .meetings
        .iter()
        .cloned()
        .map(MeetingFilter::Meeting)
        .chain([MeetingFilter::All])
        .collect::<Vec<_>>();

    let mut out = String::new();
    for filter in &filters {
        let sums = snapshot.direction_totals(filter);
        let inbound = sums.get(&Direction::In).copied().unwrap_or_default();
        let outbound = sums.get(&Direction::Out).copied().unwrap_or_default();
        let _ = writeln!(
            out,
            "{filter}: sum_in={} sum_raw={} sum_split={:.2}",
            format_displayed(inbound.weight_raw.round()),
            format_displayed(outbound.weight_raw.round()),
            outbound.weight_split
        );
    }

    trim_trailing_lines(out)
}

fn trim_trailing_lines(text: String) -> String {
    let mut lines = text
        .split('\n')
        .map(|line| line.trim_end_matches(' ').to_owned())
        .collect::<Vec<_>>();

    while matches!(lines.last(), Some(line) if line.is_empty()) {
        lines.pop();
    }

    lines.join("\n")
}

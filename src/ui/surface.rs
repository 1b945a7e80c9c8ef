// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Liaison-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Liaison Sankey and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use crate::render::plotly::{figure, Figure};
use crate::render::{render_panels_text, DiagramLayout, DiagramSpec};

/// Identifies one draw request. Only the ticket of the latest request can bind the click
/// handler.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct RenderTicket(u64);

impl RenderTicket {
    pub(crate) fn new(generation: u64) -> Self {
        Self(generation)
    }

    pub fn generation(self) -> u64 {
        self.0
    }
}

/// Where the viewer draws its panels.
///
/// Drawing may finish later than the request; the surface owner reports completion back through
/// `Viewer::draw_completed` with the ticket it was handed.
pub trait DiagramSurface {
    fn draw(&mut self, ticket: RenderTicket, panels: &[DiagramSpec], layout: &DiagramLayout);
}

/// Renders panels as plain text.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TextSurface {
    text: String,
    last_ticket: Option<RenderTicket>,
}

impl TextSurface {
    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn last_ticket(&self) -> Option<RenderTicket> {
        self.last_ticket
    }
}

impl DiagramSurface for TextSurface {
    fn draw(&mut self, ticket: RenderTicket, panels: &[DiagramSpec], layout: &DiagramLayout) {
        self.text = render_panels_text(panels, layout);
        self.last_ticket = Some(ticket);
    }
}

/// Collects the renderer figure for the last draw.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FigureSurface {
    figure: Option<Figure>,
    last_ticket: Option<RenderTicket>,
}

impl FigureSurface {
    pub fn figure(&self) -> Option<&Figure> {
        self.figure.as_ref()
    }

    pub fn last_ticket(&self) -> Option<RenderTicket> {
        self.last_ticket
    }
}

impl DiagramSurface for FigureSurface {
    fn draw(&mut self, ticket: RenderTicket, panels: &[DiagramSpec], layout: &DiagramLayout) {
        self.figure = Some(figure(panels, layout));
        self.last_ticket = Some(ticket);
    }
}

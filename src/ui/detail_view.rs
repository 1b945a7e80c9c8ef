// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Liaison-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Liaison Sankey and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use crate::query::DetailSummary;
use crate::render::render_detail_text;

/// Ways a user can dismiss the detail view.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DismissAction {
    CloseButton,
    /// A click on the overlay. Only clicks on the overlay background itself dismiss, not clicks
    /// that land on the content panel.
    OverlayClick { on_background: bool },
    Escape,
}

/// Modal detail view for the last resolved click.
///
/// The summary stays around after the view is hidden; showing a new one replaces it.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DetailView {
    visible: bool,
    summary: Option<DetailSummary>,
}

impl DetailView {
    pub fn is_visible(&self) -> bool {
        self.visible
    }

    pub fn summary(&self) -> Option<&DetailSummary> {
        self.summary.as_ref()
    }

    pub fn show(&mut self, summary: DetailSummary) {
        self.summary = Some(summary);
        self.visible = true;
    }

    /// Text body of the visible view.
    pub fn body_text(&self) -> Option<String> {
        if !self.visible {
            return None;
        }
        self.summary.as_ref().map(render_detail_text)
    }

    /// Applies a dismiss action. Returns `true` when the view was visible and is now hidden.
    pub fn dismiss(&mut self, action: DismissAction) -> bool {
        if !self.visible {
            return false;
        }

        let hides = match action {
            DismissAction::CloseButton | DismissAction::Escape => true,
            DismissAction::OverlayClick { on_background } => on_background,
        };
        if hides {
            self.visible = false;
        }
        hides
    }
}

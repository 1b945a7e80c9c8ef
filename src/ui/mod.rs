// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Liaison-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Liaison Sankey and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Interactive viewer state.
//!
//! [`Viewer`] owns the selection, the built panels and the detail view, and is the only place
//! they change. Every filter change rebuilds the whole diagram from the immutable snapshot; clicks
//! are resolved against the panels of the latest completed draw.

pub mod click;
pub mod detail_view;
pub mod surface;

pub use click::{
    extract_link_index, resolve, resolve_observed, ClickEvent, ClickObserver, ClickPoint,
    TracingClickObserver,
};
pub use detail_view::{DetailView, DismissAction};
pub use surface::{DiagramSurface, FigureSurface, RenderTicket, TextSurface};

use crate::model::{EdgeSnapshot, FilterChange, NodeId, SelectionState};
use crate::query::{detail, DetailSummary};
use crate::render::{build_with_root, layout_for, DiagramLayout, DiagramSpec, Panels};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewerOptions {
    /// Label of the node every flow enters or leaves.
    pub root: NodeId,
}

impl Default for ViewerOptions {
    fn default() -> Self {
        Self {
            root: NodeId::root(),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum ClickOutcome {
    /// No click handler is bound to the current draw.
    Ignored,
    /// The click did not map to a link.
    Unresolved,
    Shown(DetailSummary),
}

pub struct Viewer {
    snapshot: EdgeSnapshot,
    options: ViewerOptions,
    selection: SelectionState,
    panels: Panels,
    layout: DiagramLayout,
    generation: u64,
    click_binding: Option<RenderTicket>,
    detail_view: DetailView,
    observer: Option<Box<dyn ClickObserver>>,
}

impl std::fmt::Debug for Viewer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Viewer")
            .field("options", &self.options)
            .field("selection", &self.selection)
            .field("generation", &self.generation)
            .field("click_binding", &self.click_binding)
            .field("detail_view", &self.detail_view)
            .field("has_observer", &self.observer.is_some())
            .finish_non_exhaustive()
    }
}

impl Viewer {
    pub fn new(snapshot: EdgeSnapshot) -> Self {
        Self::with_options(snapshot, ViewerOptions::default())
    }

    pub fn with_options(snapshot: EdgeSnapshot, options: ViewerOptions) -> Self {
        Self::with_selection(snapshot, options, SelectionState::default())
    }

    pub fn with_selection(
        snapshot: EdgeSnapshot,
        options: ViewerOptions,
        selection: SelectionState,
    ) -> Self {
        let panels = build_with_root(&snapshot, &selection, &options.root);
        let layout = layout_for(&selection);
        Self {
            snapshot,
            options,
            selection,
            panels,
            layout,
            generation: 0,
            click_binding: None,
            detail_view: DetailView::default(),
            observer: None,
        }
    }

    pub fn with_observer(mut self, observer: Box<dyn ClickObserver>) -> Self {
        self.observer = Some(observer);
        self
    }

    pub fn snapshot(&self) -> &EdgeSnapshot {
        &self.snapshot
    }

    pub fn options(&self) -> &ViewerOptions {
        &self.options
    }

    pub fn selection(&self) -> &SelectionState {
        &self.selection
    }

    pub fn panels(&self) -> &[DiagramSpec] {
        &self.panels
    }

    pub fn layout(&self) -> &DiagramLayout {
        &self.layout
    }

    pub fn detail_view(&self) -> &DetailView {
        &self.detail_view
    }

    pub fn has_click_handler(&self) -> bool {
        self.click_binding.is_some()
    }

    /// Applies a filter change. Returns `false` when nothing changed; the caller re-renders
    /// otherwise.
    ///
    /// An effective change detaches the click handler until the next draw completes, so clicks
    /// never resolve against panels built for an older selection.
    pub fn apply(&mut self, change: FilterChange) -> bool {
        let changed = self.selection.apply(change);
        if changed {
            if let Some(previous) = self.click_binding.take() {
                tracing::trace!(
                    ticket = previous.generation(),
                    rev = self.selection.rev(),
                    "click handler detached after filter change"
                );
            }
        }
        changed
    }

    /// Rebuilds all panels for the current selection and hands them to `surface`.
    ///
    /// The returned ticket supersedes every earlier one.
    pub fn render(&mut self, surface: &mut dyn DiagramSurface) -> RenderTicket {
        self.panels = build_with_root(&self.snapshot, &self.selection, &self.options.root);
        self.layout = layout_for(&self.selection);
        self.generation = self.generation.wrapping_add(1);

        let ticket = RenderTicket::new(self.generation);
        surface.draw(ticket, &self.panels, &self.layout);
        ticket
    }

    /// Binds the click handler to a finished draw. Returns `false` for superseded tickets.
    pub fn draw_completed(&mut self, ticket: RenderTicket) -> bool {
        if ticket.generation() != self.generation {
            tracing::trace!(
                ticket = ticket.generation(),
                current = self.generation,
                "ignoring stale draw completion"
            );
            return false;
        }

        if let Some(previous) = self.click_binding.take() {
            tracing::trace!(ticket = previous.generation(), "click handler detached");
        }
        self.click_binding = Some(ticket);
        tracing::trace!(ticket = ticket.generation(), "click handler attached");
        true
    }

    pub fn handle_click(&mut self, event: &ClickEvent) -> ClickOutcome {
        let Some(binding) = self.click_binding else {
            return ClickOutcome::Ignored;
        };
        if binding.generation() != self.generation {
            // A newer render is still in flight.
            return ClickOutcome::Ignored;
        }

        let Some(resolved) = resolve_observed(&self.panels, event, self.observer.as_deref())
        else {
            return ClickOutcome::Unresolved;
        };

        let summary = detail(&resolved, &self.selection, &self.snapshot);
        self.detail_view.show(summary.clone());
        ClickOutcome::Shown(summary)
    }

    pub fn dismiss(&mut self, action: DismissAction) -> bool {
        self.detail_view.dismiss(action)
    }
}

/// Two meetings of liaison traffic, enough to exercise every panel and the split toggle.
pub fn demo_snapshot() -> EdgeSnapshot {
    crate::model::fixtures::liaison_snapshot()
}

// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Liaison-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Liaison Sankey and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Diagram building and presentation.
//!
//! [`build`] turns the snapshot and the current selection into one or two Sankey panels; the
//! `plotly` module converts them into the figure JSON a browser renderer draws, and `text`
//! renders panels and link details for the terminal.

pub mod diagram;
pub mod format;
pub mod palette;
pub mod plotly;
pub mod text;

pub use diagram::{
    build, build_with_root, layout_for, DiagramLayout, DiagramSpec, Margin, PanelDomain, Panels,
};
pub use format::{format_displayed, format_raw, ValueFormat};
pub use plotly::{figure, Figure};
pub use text::{render_detail_text, render_direction_totals, render_panels_text};

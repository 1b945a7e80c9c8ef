// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Liaison-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Liaison Sankey and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use crate::model::Direction;
use crate::query::NodeRole;

pub const LINK_IN: &str = "rgba(31,119,180,0.55)";
pub const LINK_OUT: &str = "rgba(255,127,14,0.55)";

pub const NODE_ROOT: &str = "#555";
pub const NODE_SOURCE: &str = "rgba(31,119,180,0.8)";
pub const NODE_DESTINATION: &str = "rgba(255,127,14,0.8)";

pub const PAPER_BACKGROUND: &str = "#f5f6fa";

pub fn link_color(direction: Direction) -> &'static str {
    match direction {
        Direction::In => LINK_IN,
        Direction::Out => LINK_OUT,
    }
}

pub fn node_color(role: NodeRole) -> &'static str {
    match role {
        NodeRole::Root => NODE_ROOT,
        NodeRole::Source => NODE_SOURCE,
        NodeRole::Destination => NODE_DESTINATION,
    }
}

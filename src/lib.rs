// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Liaison-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Liaison Sankey and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Liaison Sankey: interactive inbound/outbound flow diagrams over liaison edge snapshots.
//!
//! A snapshot of weighted edges (per meeting and pre-summed) is filtered by direction and
//! meeting, aggregated into Sankey panels around a root node, and drawn on a surface. Clicking a
//! link resolves it back to its `edge_key` and opens a per-meeting breakdown.

pub mod model;
pub mod query;
pub mod render;
pub mod store;
pub mod ui;

// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Liaison-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Liaison Sankey and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Read-only queries over the edge snapshot.
//!
//! `flow` aggregates edges into Sankey links; `detail` re-aggregates the records behind a single
//! clicked link.

pub mod detail;
pub mod flow;

pub use detail::{detail, DetailContent, DetailRow, DetailSummary, ResolvedClick};
pub use flow::{aggregate, aggregate_with_root, AggregatedLink, LinkKey, NodeRole, NodeSet, SankeyFlow};

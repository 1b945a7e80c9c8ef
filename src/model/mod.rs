// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Liaison-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Liaison Sankey and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Core data model.
//!
//! An immutable [`EdgeSnapshot`] of weighted liaison edges plus the transient
//! [`SelectionState`] that every aggregation reads.

pub mod edge;
pub(crate) mod fixtures;
pub mod ids;
pub mod selection;
pub mod snapshot;

pub use edge::{displayed_weight, Direction, EdgeRecord, ParseDirectionError};
pub use ids::{EdgeKey, Id, IdError, MeetingId, NodeId, ROOT_NODE_LABEL, SOURCE_SUFFIX};
pub use selection::{
    DirectionFilter, FilterChange, MeetingFilter, ParseDirectionFilterError, SelectionState,
};
pub use snapshot::{EdgeSnapshot, TotalsMismatch, WeightSums, TOTALS_TOLERANCE};

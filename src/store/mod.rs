// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Liaison-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Liaison Sankey and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Loading edge snapshots from disk.
//!
//! Snapshots are produced offline, either as plain JSON or as the browser data script
//! (`window.LIAISON_DATA = {...};`). Both forms load into the same [`EdgeSnapshot`].
//!
//! [`EdgeSnapshot`]: crate::model::EdgeSnapshot

pub mod snapshot_file;

pub use snapshot_file::{parse_snapshot, script_payload, SnapshotFile, StoreError};

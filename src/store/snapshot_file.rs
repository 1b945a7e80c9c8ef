// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Liaison-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Liaison Sankey and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::fmt;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use crate::model::EdgeSnapshot;

const SCRIPT_PREFIX: &str = "window.";

#[derive(Debug)]
pub enum StoreError {
    /// The snapshot file does not exist. The viewer cannot start without one.
    Missing {
        path: PathBuf,
    },
    Io {
        path: PathBuf,
        source: io::Error,
    },
    Parse {
        path: PathBuf,
        source: serde_json::Error,
    },
    /// A data script without an assigned object.
    MissingPayload {
        path: PathBuf,
    },
}

impl fmt::Display for StoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Missing { path } => write!(f, "snapshot not found at {path:?}"),
            Self::Io { path, source } => write!(f, "io error at {path:?}: {source}"),
            Self::Parse { path, source } => {
                write!(f, "cannot parse snapshot from {path:?}: {source}")
            }
            Self::MissingPayload { path } => {
                write!(f, "snapshot script at {path:?} assigns no data")
            }
        }
    }
}

impl std::error::Error for StoreError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io { source, .. } => Some(source),
            Self::Parse { source, .. } => Some(source),
            Self::Missing { .. } | Self::MissingPayload { .. } => None,
        }
    }
}

/// Returns the JSON text of a snapshot file.
///
/// Data scripts (`window.NAME = {...};`) yield the assigned expression; anything else is
/// returned trimmed. `None` means a script that assigns nothing.
pub fn script_payload(text: &str) -> Option<&str> {
    let text = text.trim_start_matches('\u{feff}').trim();
    if !text.starts_with(SCRIPT_PREFIX) {
        return Some(text);
    }

    let (_, assigned) = text.split_once('=')?;
    let payload = assigned.trim().trim_end_matches(';').trim_end();
    (!payload.is_empty()).then_some(payload)
}

/// Parses snapshot text in either accepted form. `path` only labels errors.
pub fn parse_snapshot(path: &Path, text: &str) -> Result<EdgeSnapshot, StoreError> {
    let payload = script_payload(text).ok_or_else(|| StoreError::MissingPayload {
        path: path.to_path_buf(),
    })?;
    serde_json::from_str(payload).map_err(|source| StoreError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

/// A snapshot file on disk.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SnapshotFile {
    path: PathBuf,
}

impl SnapshotFile {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Reads and parses the snapshot, then cross-checks its totals.
    ///
    /// Totals mismatches are logged, not returned: the per-meeting and total views are read
    /// independently and the viewer works with whatever the snapshot holds.
    pub fn load(&self) -> Result<EdgeSnapshot, StoreError> {
        let text = match fs::read_to_string(&self.path) {
            Ok(text) => text,
            Err(err) if err.kind() == io::ErrorKind::NotFound => {
                return Err(StoreError::Missing {
                    path: self.path.clone(),
                });
            }
            Err(source) => {
                return Err(StoreError::Io {
                    path: self.path.clone(),
                    source,
                });
            }
        };

        let snapshot = parse_snapshot(&self.path, &text)?;
        tracing::info!(
            path = ?self.path,
            meetings = snapshot.meetings.len(),
            edges_by_meeting = snapshot.edges_by_meeting.len(),
            edges_total = snapshot.edges_total.len(),
            "snapshot loaded"
        );

        for mismatch in snapshot.check_totals() {
            tracing::warn!(
                edge_key = %mismatch.edge_key,
                summed_raw = mismatch.summed.raw_count,
                total_raw = mismatch.total.raw_count,
                summed_split = mismatch.summed.weight_split,
                total_split = mismatch.total.weight_split,
                "per-meeting edges do not add up to totals"
            );
        }

        Ok(snapshot)
    }
}

// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Liaison-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Liaison Sankey and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

// Sums of thirds land a few ulps off whole numbers; those still print as integers.
const WHOLE_TOLERANCE: f64 = 1e-9;

/// How a panel's values are presented: integer totals, or fractional split totals.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ValueFormat {
    Whole,
    Fractional,
}

impl ValueFormat {
    pub fn for_split(split_weighting: bool) -> Self {
        if split_weighting {
            Self::Fractional
        } else {
            Self::Whole
        }
    }

    /// Renderer hover template for link values.
    pub fn hover_template(self) -> &'static str {
        match self {
            Self::Whole => "Displayed: %{value:.0f}",
            Self::Fractional => "Displayed: %{value:.2f}",
        }
    }

    pub fn format(self, value: f64) -> String {
        match self {
            Self::Whole => format_displayed(value.round()),
            Self::Fractional => format_displayed(value),
        }
    }
}

/// Raw counts are always integers.
pub fn format_raw(value: u64) -> String {
    itoa::Buffer::new().format(value).to_owned()
}

/// Whole values print without decimals, anything else with exactly two.
pub fn format_displayed(value: f64) -> String {
    if !value.is_finite() {
        return value.to_string();
    }

    let rounded = value.round();
    if (value - rounded).abs() <= WHOLE_TOLERANCE && rounded.abs() < i64::MAX as f64 {
        return itoa::Buffer::new().format(rounded as i64).to_owned();
    }

    format!("{value:.2}")
}

//! Behaviour labels, analysis axes and cell conventions

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::{Error, Result};

/// Cell spellings treated as missing values
pub const MISSING_MARKERS: &[&str] = &["", "nan", "na", "n/a", "null", "none", "-nan"];

/// Check whether a raw cell denotes a missing value
pub fn is_missing(cell: &str) -> bool {
    let trimmed = cell.trim();
    MISSING_MARKERS
        .iter()
        .any(|marker| trimmed.eq_ignore_ascii_case(marker))
}

/// Canonical form of a catchment or year identifier
///
/// Numeric identifiers are compared as numbers, so `"1.0"`, `"1"` and
/// `"1.00"` all normalise to `"1"`. Anything else is only trimmed.
pub fn normalize_identifier(raw: &str) -> String {
    let trimmed = raw.trim();
    match trimmed.parse::<f64>() {
        Ok(value) if value.is_finite() => format!("{value}"),
        _ => trimmed.to_string(),
    }
}

/// Hydrological behaviour of a catchment-year
///
/// The derived ordering is the canonical category order: `Simple` sorts
/// before `Complex`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BehaviorLabel {
    /// Behaviour captured by a simple model
    Simple,
    /// Behaviour needing a complex model
    Complex,
}

impl BehaviorLabel {
    /// All labels in canonical order
    pub const ALL: [BehaviorLabel; 2] = [BehaviorLabel::Simple, BehaviorLabel::Complex];

    /// Name used for group keys, titles and legends
    pub fn name(&self) -> &'static str {
        match self {
            Self::Simple => "simple",
            Self::Complex => "complex",
        }
    }

    /// Numeric code used in rating files
    pub fn code(&self) -> f64 {
        match self {
            Self::Simple => 1.0,
            Self::Complex => 2.0,
        }
    }

    /// Parse a rating cell; missing markers yield `Ok(None)`
    pub fn parse_cell(cell: &str) -> Result<Option<Self>> {
        if is_missing(cell) {
            return Ok(None);
        }
        cell.parse().map(Some)
    }
}

impl FromStr for BehaviorLabel {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let trimmed = s.trim();
        if trimmed.eq_ignore_ascii_case("simple") {
            return Ok(Self::Simple);
        }
        if trimmed.eq_ignore_ascii_case("complex") {
            return Ok(Self::Complex);
        }
        match trimmed.parse::<f64>() {
            Ok(code) if code == 1.0 => Ok(Self::Simple),
            Ok(code) if code == 2.0 => Ok(Self::Complex),
            _ => Err(Error::InvalidInput(format!(
                "'{trimmed}' is not a behaviour label (expected 1, 2, simple or complex)"
            ))),
        }
    }
}

impl fmt::Display for BehaviorLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Unit along which identifiers are grouped
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Axis {
    /// One identifier per catchment
    Catchment,
    /// One identifier per hydrological year
    Year,
}

impl Axis {
    /// Short name used in figure titles and file names
    pub fn short_name(&self) -> &'static str {
        match self {
            Self::Catchment => "catch",
            Self::Year => "year",
        }
    }

    /// The orthogonal axis of a catchment x year table
    pub fn other(&self) -> Self {
        match self {
            Self::Catchment => Self::Year,
            Self::Year => Self::Catchment,
        }
    }
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.short_name())
    }
}

// SPDX-License-Identifier: GPL-3.0-only

//! Extracted ID record
//!
//! The station never reads real image data: the OCR step always yields the
//! same canned record.

use crate::constants::{CANNED_CONFIDENCE, text::PLACEHOLDER};
use serde::Serialize;
use std::fmt;

/// OCR confidence percentage, always within `0..=100`
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default, Serialize)]
#[serde(transparent)]
pub struct Confidence(u8);

impl Confidence {
    pub const ZERO: Confidence = Confidence(0);

    /// Clamp `percent` into range
    pub fn new(percent: u8) -> Self {
        Self(percent.min(100))
    }

    pub fn percent(self) -> u8 {
        self.0
    }
}

impl fmt::Display for Confidence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}%", self.0)
    }
}

/// Fields read off an ID card
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ExtractedRecord {
    pub name: String,
    pub id_number: String,
    pub date_of_birth: String,
    pub sex: String,
    pub confidence: Confidence,
}

impl ExtractedRecord {
    /// The simulated OCR output
    pub fn canned() -> Self {
        Self {
            name: "DELA CRUZ, JUAN P.".to_string(),
            id_number: "12-345678901-2".to_string(),
            date_of_birth: "1985-05-20".to_string(),
            sex: "MALE".to_string(),
            confidence: Confidence::new(CANNED_CONFIDENCE),
        }
    }

    /// What the result card shows before a scan completes
    pub fn placeholder() -> Self {
        Self {
            name: PLACEHOLDER.to_string(),
            id_number: PLACEHOLDER.to_string(),
            date_of_birth: PLACEHOLDER.to_string(),
            sex: PLACEHOLDER.to_string(),
            confidence: Confidence::ZERO,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_confidence_clamps() {
        assert_eq!(Confidence::new(250).percent(), 100);
        assert_eq!(Confidence::new(92).to_string(), "92%");
        assert_eq!(Confidence::ZERO.to_string(), "0%");
    }

    #[test]
    fn test_canned_record() {
        let record = ExtractedRecord::canned();
        assert_eq!(record.name, "DELA CRUZ, JUAN P.");
        assert_eq!(record.confidence.percent(), 92);
    }
}

//! Presentation projections derived from raw service results.

/// Qualitative tier used purely to pick an emphasis colour.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ScoreBand {
    High,
    Medium,
    Low,
}

pub const NEUTRAL_COLOR: &str = "#718096";
pub const NEUTRAL_RGB: [u8; 3] = [0x71, 0x80, 0x96];

impl ScoreBand {
    /// Bands a score on the 0–1 scale (placement confidence, mentor match).
    pub fn from_unit_score(score: f64) -> Self {
        Self::banded(score, 0.8, 0.6)
    }

    /// Bands a score on the 0–100 scale (skill match).
    pub fn from_percent_score(score: f64) -> Self {
        Self::banded(score, 80.0, 60.0)
    }

    fn banded(score: f64, high: f64, medium: f64) -> Self {
        if score >= high {
            ScoreBand::High
        } else if score >= medium {
            ScoreBand::Medium
        } else {
            ScoreBand::Low
        }
    }

    pub fn hex_color(self) -> &'static str {
        match self {
            ScoreBand::High => "#48bb78",
            ScoreBand::Medium => "#ed8936",
            ScoreBand::Low => "#e53e3e",
        }
    }

    pub fn rgb(self) -> [u8; 3] {
        match self {
            ScoreBand::High => [0x48, 0xbb, 0x78],
            ScoreBand::Medium => [0xed, 0x89, 0x36],
            ScoreBand::Low => [0xe5, 0x3e, 0x3e],
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            ScoreBand::High => "high",
            ScoreBand::Medium => "medium",
            ScoreBand::Low => "low",
        }
    }
}

/// Band for a named placement tier; unknown tiers get no band.
pub fn tier_band(tier: &str) -> Option<ScoreBand> {
    match tier {
        "Tier 1" => Some(ScoreBand::High),
        "Tier 2" => Some(ScoreBand::Medium),
        "Tier 3" => Some(ScoreBand::Low),
        _ => None,
    }
}

/// `0.92` -> `"92.0%"`.
pub fn format_percent(unit_score: f64) -> String {
    format!("{:.1}%", unit_score * 100.0)
}

/// Formats a number that is already on the 0–100 scale, e.g. `40` -> `"40%"`.
pub fn format_points(score: f64) -> String {
    format!("{score}%")
}

#[cfg(test)]
#[path = "tests/display_tests.rs"]
mod tests;

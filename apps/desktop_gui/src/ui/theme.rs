//! Colours shared by the workflow panels.

use client_core::display::{ScoreBand, NEUTRAL_RGB};
use egui::Color32;

pub const ERROR_COLOR: Color32 = Color32::from_rgb(0xe5, 0x3e, 0x3e);
pub const MUTED_COLOR: Color32 = Color32::from_rgb(NEUTRAL_RGB[0], NEUTRAL_RGB[1], NEUTRAL_RGB[2]);

pub fn rgb(color: [u8; 3]) -> Color32 {
    let [r, g, b] = color;
    Color32::from_rgb(r, g, b)
}

pub fn band_color(band: ScoreBand) -> Color32 {
    rgb(band.rgb())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn band_colors_follow_score_bands() {
        assert_eq!(band_color(ScoreBand::High), Color32::from_rgb(0x48, 0xbb, 0x78));
        assert_eq!(band_color(ScoreBand::Medium), Color32::from_rgb(0xed, 0x89, 0x36));
        assert_eq!(band_color(ScoreBand::Low), ERROR_COLOR);
    }

    #[test]
    fn muted_color_is_the_neutral_tier_color() {
        assert_eq!(MUTED_COLOR, rgb(NEUTRAL_RGB));
    }
}

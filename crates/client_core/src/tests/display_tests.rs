use super::*;

#[test]
fn unit_scores_band_with_inclusive_lower_bounds() {
    assert_eq!(ScoreBand::from_unit_score(0.81), ScoreBand::High);
    assert_eq!(ScoreBand::from_unit_score(0.8), ScoreBand::High);
    assert_eq!(ScoreBand::from_unit_score(0.65), ScoreBand::Medium);
    assert_eq!(ScoreBand::from_unit_score(0.6), ScoreBand::Medium);
    assert_eq!(ScoreBand::from_unit_score(0.59), ScoreBand::Low);
}

#[test]
fn percent_scores_use_their_own_thresholds() {
    assert_eq!(ScoreBand::from_percent_score(80.0), ScoreBand::High);
    assert_eq!(ScoreBand::from_percent_score(79.9), ScoreBand::Medium);
    assert_eq!(ScoreBand::from_percent_score(60.0), ScoreBand::Medium);
    assert_eq!(ScoreBand::from_percent_score(40.0), ScoreBand::Low);
    // a unit-scale value must not be read as a percentage
    assert_eq!(ScoreBand::from_percent_score(0.95), ScoreBand::Low);
}

#[test]
fn percent_formatting_rounds_to_one_decimal() {
    assert_eq!(format_percent(0.92), "92.0%");
    assert_eq!(format_percent(0.81), "81.0%");
    assert_eq!(format_percent(0.77), "77.0%");
    assert_eq!(format_percent(0.12345), "12.3%");
    assert_eq!(format_points(40.0), "40%");
}

#[test]
fn named_tiers_map_to_bands_and_unknown_tiers_stay_neutral() {
    assert_eq!(tier_band("Tier 1"), Some(ScoreBand::High));
    assert_eq!(tier_band("Tier 2"), Some(ScoreBand::Medium));
    assert_eq!(tier_band("Tier 3"), Some(ScoreBand::Low));
    assert_eq!(tier_band("Tier 4"), None);
}

#[test]
fn band_colours_match_hex_and_rgb() {
    for band in [ScoreBand::High, ScoreBand::Medium, ScoreBand::Low] {
        let [r, g, b] = band.rgb();
        assert_eq!(band.hex_color(), format!("#{r:02x}{g:02x}{b:02x}"));
    }
    let [r, g, b] = NEUTRAL_RGB;
    assert_eq!(NEUTRAL_COLOR, format!("#{r:02x}{g:02x}{b:02x}"));
}

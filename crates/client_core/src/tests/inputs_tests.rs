use super::*;

#[test]
fn parse_skills_trims_and_keeps_order_and_duplicates() {
    assert_eq!(
        parse_skills("Python, React, SQL, React"),
        ["Python", "React", "SQL", "React"]
    );
}

#[test]
fn parse_skills_drops_empty_tokens() {
    assert_eq!(parse_skills(" Rust ,, Go,  ,"), ["Rust", "Go"]);
    assert!(parse_skills("").is_empty());
    assert!(parse_skills(" , ,").is_empty());
}

#[test]
fn constrain_clamps_to_inclusive_bounds() {
    let range = NumericRange::new(1000.0, 2050.0, 1.0);
    assert_eq!(range.constrain(900.0), Some(1000.0));
    assert_eq!(range.constrain(2050.0), Some(2050.0));
    assert_eq!(range.constrain(3000.0), Some(2050.0));
}

#[test]
fn constrain_snaps_to_step_without_float_noise() {
    let range = NumericRange::new(0.0, 10.0, 0.1);
    assert_eq!(range.constrain(8.1), Some(8.1));
    assert_eq!(range.constrain(8.14), Some(8.1));
    assert_eq!(range.constrain(7.46), Some(7.5));
}

#[test]
fn numeric_input_rejects_non_numbers_and_keeps_previous_value() {
    let mut input = NumericInput::new(85.0, NumericRange::new(0.0, 100.0, 1.0));
    assert!(!input.set(f64::NAN));
    assert!(!input.set(f64::INFINITY));
    assert_eq!(input.value(), 85.0);
    assert!(input.set(92.4));
    assert_eq!(input.value(), 92.0);
}

#[test]
fn counts_truncate_to_integers() {
    let input = NumericInput::new(2.0, NumericRange::new(0.0, 5.0, 0.0));
    assert_eq!(input.as_count(), 2);
    let fractional = NumericInput::new(2.9, NumericRange::new(0.0, 5.0, 0.0));
    assert_eq!(fractional.as_count(), 2);
}

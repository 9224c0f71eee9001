use easel_rs::api::{BorderEngine, BorderEngineConfig, CalculatorSettings};
use easel_rs::core::{
    DEFAULT_MIN_BORDER_IN, Dimensions, PaperSizeSelector, is_usable_min_border,
    validate_min_border,
};

#[test]
fn acceptance_window_is_zero_to_half_the_short_side() {
    let paper = Dimensions::new(8.0, 10.0);
    assert!(is_usable_min_border(0.0, paper));
    assert!(is_usable_min_border(3.99, paper));
    assert!(!is_usable_min_border(4.0, paper));
    assert!(!is_usable_min_border(-0.01, paper));
    assert!(!is_usable_min_border(f64::NAN, paper));
    assert!(!is_usable_min_border(f64::INFINITY, paper));
}

#[test]
fn accepted_requests_advance_the_fallback() {
    let checked = validate_min_border(2.0, Dimensions::new(8.0, 10.0), 0.5);
    assert_eq!(checked.min_border, 2.0);
    assert_eq!(checked.last_valid, 2.0);
    assert!(checked.warning.is_none());
    assert!(checked.is_valid());
}

#[test]
fn rejected_requests_fall_back_to_the_last_accepted_value() {
    let checked = validate_min_border(6.0, Dimensions::new(8.0, 10.0), 1.25);
    assert_eq!(checked.min_border, 1.25);
    assert_eq!(checked.last_valid, 1.25);
    assert!(!checked.is_valid());
    let warning = checked.warning.as_deref().unwrap_or("");
    assert!(warning.contains("under 4.00 in"), "warning was: {warning}");
    assert!(warning.contains("keeping 1.25 in"), "warning was: {warning}");
}

#[test]
fn engine_reuses_the_fallback_geometry_for_bad_requests() {
    let mut engine = BorderEngine::new(BorderEngineConfig::new());
    let accepted = engine.compute(&CalculatorSettings::default().with_min_border(2.0), 0.5);
    assert!((accepted.print.width - 6.0).abs() <= 1e-9);
    assert!((accepted.print.height - 4.0).abs() <= 1e-9);
    assert_eq!(accepted.last_valid_min_border, 2.0);
    assert!(accepted.min_border_warning.is_none());

    let rejected = engine.compute(
        &CalculatorSettings::default().with_min_border(5.0),
        accepted.last_valid_min_border,
    );
    assert_eq!(rejected.print, accepted.print);
    assert_eq!(rejected.borders, accepted.borders);
    assert_eq!(rejected.last_valid_min_border, 2.0);
    assert!(rejected.min_border_warning.is_some());
}

#[test]
fn negative_request_warns_and_keeps_the_default() {
    let mut engine = BorderEngine::new(BorderEngineConfig::new());
    let result = engine.compute(
        &CalculatorSettings::default().with_min_border(-1.0),
        DEFAULT_MIN_BORDER_IN,
    );
    assert!((result.print.width - 9.0).abs() <= 1e-9);
    assert!((result.print.height - 6.0).abs() <= 1e-9);
    let warning = result.min_border_warning.as_deref().unwrap_or("");
    assert!(warning.contains("keeping 0.50 in"), "warning was: {warning}");
}

#[test]
fn degenerate_custom_sheet_warns_and_yields_no_print() {
    let mut engine = BorderEngine::new(BorderEngineConfig::new());
    let settings = CalculatorSettings::default()
        .with_paper_size(PaperSizeSelector::Custom)
        .with_custom_paper(0.0, 10.0);
    let result = engine.compute(&settings, DEFAULT_MIN_BORDER_IN);
    assert!(result.print.is_degenerate());
    assert!(result.min_border_warning.is_some());
}

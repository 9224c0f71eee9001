use easel_rs::api::{BorderEngine, BorderEngineConfig, CacheBehavior, CalculatorSettings};

fn small_cache_engine(calculation_entries: usize) -> BorderEngine {
    let behavior = CacheBehavior {
        calculation_entries,
        preview_entries: 64,
    };
    BorderEngine::new(BorderEngineConfig::new().with_cache_behavior(behavior))
}

#[test]
fn identical_snapshots_share_one_entry() {
    let mut engine = BorderEngine::new(BorderEngineConfig::new());
    let settings = CalculatorSettings::default();
    let first = engine.compute(&settings, 0.5);
    let second = engine.compute(&settings, 0.5);
    assert_eq!(first, second);

    let stats = engine.calculation_cache_stats();
    assert_eq!(stats.hits, 1);
    assert_eq!(stats.misses, 1);
    assert_eq!(stats.size, 1);
}

#[test]
fn oldest_entries_are_evicted_first() {
    let mut engine = small_cache_engine(2);
    let a = CalculatorSettings::default();
    let b = CalculatorSettings::default().with_min_border(1.0);
    let c = CalculatorSettings::default().with_min_border(1.5);

    engine.compute(&a, 0.5);
    engine.compute(&b, 0.5);
    engine.compute(&c, 0.5);
    engine.compute(&c, 0.5);
    engine.compute(&a, 0.5);
    engine.compute(&c, 0.5);

    let stats = engine.calculation_cache_stats();
    assert_eq!(stats.hits, 2);
    assert_eq!(stats.misses, 4);
    assert_eq!(stats.size, 2);
}

#[test]
fn preview_layouts_outlive_border_edits() {
    let mut engine = BorderEngine::new(BorderEngineConfig::new());
    engine.compute(&CalculatorSettings::default(), 0.5);
    engine.compute(&CalculatorSettings::default().with_min_border(1.0), 0.5);
    engine.compute(&CalculatorSettings::default().with_min_border(1.5), 0.5);

    // Same sheet throughout, so one preview layout serves every compute.
    let stats = engine.preview_cache_stats();
    assert_eq!(stats.misses, 1);
    assert_eq!(stats.hits, 2);
    assert_eq!(stats.size, 1);
}

#[test]
fn blade_visibility_does_not_split_the_cache() {
    let mut engine = BorderEngine::new(BorderEngineConfig::new());
    let hidden = engine.compute(&CalculatorSettings::default(), 0.5);
    let shown = engine.compute(&CalculatorSettings::default().with_show_blades(true), 0.5);
    assert_eq!(hidden, shown);

    let stats = engine.calculation_cache_stats();
    assert_eq!(stats.hits, 1);
    assert_eq!(stats.misses, 1);
}

#[test]
fn fallback_border_history_splits_the_cache() {
    let mut engine = BorderEngine::new(BorderEngineConfig::new());
    let settings = CalculatorSettings::default().with_min_border(5.0);
    let from_default = engine.compute(&settings, 0.5);
    let from_one_inch = engine.compute(&settings, 1.0);

    assert!((from_default.print.width - 9.0).abs() <= 1e-9);
    assert!((from_one_inch.print.width - 8.0).abs() <= 1e-9);
    let stats = engine.calculation_cache_stats();
    assert_eq!(stats.hits, 0);
    assert_eq!(stats.misses, 2);
}

#[test]
fn engines_agree_without_shared_state() {
    let mut left = BorderEngine::new(BorderEngineConfig::new());
    let mut right = BorderEngine::new(BorderEngineConfig::new());
    for settings in [
        CalculatorSettings::default(),
        CalculatorSettings::default().with_min_border(1.0),
        CalculatorSettings::default().with_offsets(0.25, -0.5),
        CalculatorSettings::default().with_landscape(false),
    ] {
        assert_eq!(left.compute(&settings, 0.5), right.compute(&settings, 0.5));
    }
}

#[test]
fn clearing_drops_entries_but_keeps_working() {
    let mut engine = BorderEngine::new(BorderEngineConfig::new());
    let settings = CalculatorSettings::default();
    engine.compute(&settings, 0.5);
    engine.clear_caches();
    assert_eq!(engine.calculation_cache_stats().size, 0);
    assert_eq!(engine.preview_cache_stats().size, 0);

    engine.compute(&settings, 0.5);
    assert_eq!(engine.calculation_cache_stats().misses, 2);
    assert_eq!(engine.calculation_cache_stats().size, 1);
}

#[test]
fn zero_capacity_still_holds_the_latest_entry() {
    let mut engine = small_cache_engine(0);
    let settings = CalculatorSettings::default();
    engine.compute(&settings, 0.5);
    engine.compute(&settings, 0.5);

    let stats = engine.calculation_cache_stats();
    assert_eq!(stats.hits, 1);
    assert_eq!(stats.size, 1);
}

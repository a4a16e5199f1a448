use reckon_core::converter::{
    apply, ActiveInput, ConversionCategory, ConverterAction, ConverterState, KeypadKey,
    UnitInfo,
};

fn press(state: ConverterState, key: KeypadKey) -> ConverterState {
    apply(state, ConverterAction::Key(key))
}

// ===== INITIALIZATION TESTS =====

#[test]
fn test_init_uses_first_two_units() {
    let state = ConverterState::for_category(ConversionCategory::Mass);
    assert_eq!(state.from_unit.symbol, "g");
    assert_eq!(state.to_unit.symbol, "kg");
    assert_eq!(state.from_value, "1");
    assert_eq!(state.to_value, "0.001");
}

#[test]
fn test_set_category_resets_to_defaults() {
    let state = ConverterState::for_category(ConversionCategory::Length);
    let state = press(state, KeypadKey::Digit(7));
    let state = apply(state, ConverterAction::SetCategory(ConversionCategory::Speed));
    assert_eq!(state, ConverterState::for_category(ConversionCategory::Speed));
}

// ===== KEYPAD TESTS =====

#[test]
fn test_keypad_edits_recompute_to_value() {
    let state = ConverterState::for_category(ConversionCategory::Length);
    let state = press(state, KeypadKey::Digit(0));
    let state = press(state, KeypadKey::Digit(0));
    let state = press(state, KeypadKey::Digit(0));
    assert_eq!(state.from_value, "1000");
    assert_eq!(state.to_value, "1");
}

#[test]
fn test_keypad_clear_leaves_placeholder() {
    let state = ConverterState::for_category(ConversionCategory::Length);
    let state = press(state, KeypadKey::Clear);
    assert_eq!(state.from_value, "0");
    assert_eq!(state.to_value, "0");
}

#[test]
fn test_keypad_refused_when_to_side_active() {
    let state = ConverterState::for_category(ConversionCategory::Length);
    let state = apply(state, ConverterAction::SetActiveInput(ActiveInput::To));
    let before = state.clone();
    let state = press(state, KeypadKey::Digit(5));
    assert_eq!(state, before);
}

// ===== UNIT SELECTION TESTS =====

#[test]
fn test_set_units_recomputes() {
    let state = ConverterState::for_category(ConversionCategory::Length);
    let mi = ConversionCategory::Length.unit("mi").unwrap();
    let ft = ConversionCategory::Length.unit("ft").unwrap();
    let state = apply(state, ConverterAction::SetFromUnit(mi));
    let state = apply(state, ConverterAction::SetToUnit(ft));
    // 1 mile in feet
    let feet: f64 = state.to_value.parse().unwrap();
    assert!((feet - 5280.0).abs() < 0.1);
}

#[test]
fn test_cross_category_unit_is_rejected() {
    let state = ConverterState::for_category(ConversionCategory::Length);
    let before = state.clone();
    let kg = ConversionCategory::Mass.unit("kg").unwrap();
    let state = apply(state, ConverterAction::SetFromUnit(kg));
    assert_eq!(state, before);
}

#[test]
fn test_fabricated_unit_is_rejected() {
    let state = ConverterState::for_category(ConversionCategory::Length);
    let before = state.clone();
    let bogus = UnitInfo::new("Cubit", "cb", 0.4572);
    let state = apply(state, ConverterAction::SetToUnit(bogus));
    assert_eq!(state, before);
}

// ===== SWAP TESTS =====

#[test]
fn test_swap_exchanges_units_and_carries_value() {
    let state = ConverterState::for_category(ConversionCategory::Length);
    // 1 m -> 0.001 km, swapped: 0.001 km -> 0.001 * 1000... units flip
    let state = apply(state, ConverterAction::SwapUnits);
    assert_eq!(state.from_unit.symbol, "km");
    assert_eq!(state.to_unit.symbol, "m");
    assert_eq!(state.from_value, "0.001");
    assert_eq!(state.to_value, "1");
}

// ===== ROUND-TRIP AND TEMPERATURE SCENARIOS =====

#[test]
fn test_length_round_trip() {
    let m = ConversionCategory::Length.unit("m").unwrap();
    let km = ConversionCategory::Length.unit("km").unwrap();

    let forward = reckon_core::converter::convert(ConversionCategory::Length, &m, &km, "1000");
    assert_eq!(forward, "1");
    let back = reckon_core::converter::convert(ConversionCategory::Length, &km, &m, &forward);
    assert_eq!(back, "1000");
}

#[test]
fn test_temperature_scenarios() {
    let state = ConverterState::for_category(ConversionCategory::Temperature);
    assert_eq!(state.from_unit.symbol, "°C");
    assert_eq!(state.to_unit.symbol, "°F");

    let state = press(state, KeypadKey::Clear); // "0"
    assert_eq!(state.to_value, "32.00");

    let k = ConversionCategory::Temperature.unit("K").unwrap();
    let state = apply(state, ConverterAction::SetToUnit(k));
    assert_eq!(state.to_value, "273.15");
}

#[test]
fn test_boiling_point_fahrenheit() {
    let c = ConversionCategory::Temperature.unit("°C").unwrap();
    let f = ConversionCategory::Temperature.unit("°F").unwrap();
    let result = reckon_core::converter::convert(ConversionCategory::Temperature, &c, &f, "100");
    assert_eq!(result, "212.00");
}

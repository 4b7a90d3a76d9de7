use calculate::{CalculatorConfig, LengthUnit, MemoryStorage, validate};

use super::*;

fn session() -> Calculator<MemoryStorage> {
    let storage = MemoryStorage::new()
        .with_item("w", r#"{"value":"10","unit":"ft"}"#)
        .with_item("h", r#"{"value":"30","unit":"in"}"#)
        .with_item("details", r#"{"qty":"2","sqft":"5"}"#);
    Calculator::open(storage, CalculatorConfig::default())
}

// =============================================================
// Snapshot
// =============================================================

#[test]
fn default_view_is_empty() {
    let view = CalculatorView::default();
    assert_eq!(view.total, 0);
    assert!(!view.recompute_pending);
    assert_eq!(view.value(Field::Width), "");
}

#[test]
fn snapshot_copies_session_fields() {
    let calc = session();
    let view = CalculatorView::from_session(&calc);
    assert_eq!(view.value(Field::Width), "10");
    assert_eq!(view.value(Field::Height), "30");
    assert_eq!(view.value(Field::Quantity), "2");
    assert_eq!(view.value(Field::PricePerSqft), "5");
    assert_eq!(view.dimension(Axis::Height).unit, LengthUnit::Inches);
    // 10 ft x 2.5 ft x 2 x $5
    assert_eq!(view.total, 250);
    assert_eq!(view.quote.area_sqft, 25.0);
}

#[test]
fn snapshot_reports_pending_recompute() {
    let mut calc = session();
    calc.set_value(Field::Width, validate("20").expect("valid"), 0);
    let view = CalculatorView::from_session(&calc);
    assert!(view.recompute_pending);
    assert_eq!(view.total, 250);
    assert_eq!(view.quote.total, 500);
}

#[test]
fn length_field_maps_axes() {
    assert_eq!(length_field(Axis::Width), Field::Width);
    assert_eq!(length_field(Axis::Height), Field::Height);
}

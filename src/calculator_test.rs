use std::rc::Rc;
use std::time::Duration;

use super::*;
use crate::numeric::validate;
use crate::store::MemoryStorage;

fn text(raw: &str) -> NumericText {
    validate(raw).expect("valid numeric text")
}

fn open(backend: &Rc<MemoryStorage>) -> Calculator<Rc<MemoryStorage>> {
    Calculator::open(Rc::clone(backend), CalculatorConfig::default())
}

// =============================================================
// Opening a session
// =============================================================

#[test]
fn fresh_session_uses_defaults_and_writes_nothing() {
    let backend = Rc::new(MemoryStorage::new());
    let calc = open(&backend);
    assert_eq!(calc.width(), &Dimension::default());
    assert_eq!(calc.height(), &Dimension::default());
    assert_eq!(calc.details(), &PricingDetails::default());
    assert_eq!(calc.total(), 0);
    assert!(backend.is_empty());
}

#[test]
fn session_restores_persisted_fields() {
    let backend = Rc::new(
        MemoryStorage::new()
            .with_item("w", r#"{"value":"10","unit":"ft"}"#)
            .with_item("h", r#"{"value":"12","unit":"ft"}"#)
            .with_item("details", r#"{"qty":"2","sqft":"5"}"#)
            .with_item("total", "1200"),
    );
    let calc = open(&backend);
    assert_eq!(calc.value(Field::Width).as_str(), "10");
    assert_eq!(calc.value(Field::Height).as_str(), "12");
    assert_eq!(calc.value(Field::Quantity).as_str(), "2");
    assert_eq!(calc.value(Field::PricePerSqft).as_str(), "5");
    assert_eq!(calc.total(), 1200);
}

#[test]
fn stale_stored_total_is_recomputed_on_open() {
    let backend = Rc::new(
        MemoryStorage::new()
            .with_item("w", r#"{"value":"10","unit":"ft"}"#)
            .with_item("h", r#"{"value":"12","unit":"ft"}"#)
            .with_item("details", r#"{"qty":"2","sqft":"5"}"#)
            .with_item("total", "3"),
    );
    let calc = open(&backend);
    assert_eq!(calc.total(), 1200);
    assert_eq!(backend.raw("total").as_deref(), Some("1200"));
}

#[test]
fn corrupt_fields_fall_back_to_defaults() {
    let backend = Rc::new(
        MemoryStorage::new()
            .with_item("w", "][")
            .with_item("h", r#"{"value":"x","unit":"ft"}"#)
            .with_item("details", "null"),
    );
    let calc = open(&backend);
    assert_eq!(calc.width(), &Dimension::default());
    assert_eq!(calc.height(), &Dimension::default());
    assert_eq!(calc.details(), &PricingDetails::default());
    assert_eq!(backend.raw("w").as_deref(), Some("]["));
}

// =============================================================
// Edits
// =============================================================

#[test]
fn edits_persist_immediately_but_total_waits() {
    let backend = Rc::new(MemoryStorage::new());
    let mut calc = open(&backend);

    calc.set_value(Field::Width, text("10"), 0);
    calc.set_value(Field::Height, text("12"), 10);

    assert_eq!(backend.raw("w").as_deref(), Some(r#"{"value":"10","unit":"ft"}"#));
    assert_eq!(backend.raw("h").as_deref(), Some(r#"{"value":"12","unit":"ft"}"#));
    assert!(calc.is_recompute_pending());
    assert_eq!(calc.total(), 0);
    assert_eq!(backend.raw("total"), None);
}

#[test]
fn detail_edits_persist_both_details() {
    let backend = Rc::new(MemoryStorage::new());
    let mut calc = open(&backend);
    calc.set_value(Field::Quantity, text("3"), 0);
    assert_eq!(backend.raw("details").as_deref(), Some(r#"{"qty":"3","sqft":"20"}"#));
    calc.set_value(Field::PricePerSqft, text("7.5"), 0);
    assert_eq!(backend.raw("details").as_deref(), Some(r#"{"qty":"3","sqft":"7.5"}"#));
}

#[test]
fn fire_commits_and_persists_total() {
    let backend = Rc::new(MemoryStorage::new());
    let mut calc = open(&backend);
    calc.set_value(Field::Width, text("10"), 0);
    calc.set_value(Field::Height, text("12"), 0);
    calc.set_value(Field::Quantity, text("2"), 0);
    let last = calc.set_value(Field::PricePerSqft, text("5"), 0);

    assert_eq!(calc.fire(last.ticket), Some(1200));
    assert_eq!(calc.total(), 1200);
    assert_eq!(calc.clipboard_text(), "1200");
    assert_eq!(backend.raw("total").as_deref(), Some("1200"));
    assert!(!calc.is_recompute_pending());
}

#[test]
fn burst_of_edits_commits_once_with_last_values() {
    let backend = Rc::new(MemoryStorage::new());
    let mut calc = open(&backend);
    calc.set_value(Field::Height, text("1"), 0);

    let a = calc.set_value(Field::Width, text("1"), 0);
    let b = calc.set_value(Field::Width, text("10"), 100);
    let c = calc.set_value(Field::Width, text("100"), 200);

    // Timers for superseded edits are ignored.
    assert_eq!(calc.fire(a.ticket), None);
    assert_eq!(calc.fire(b.ticket), None);
    assert_eq!(backend.raw("total"), None);

    // 100 ft x 1 ft x qty 1 x $20
    assert_eq!(calc.fire(c.ticket), Some(2000));
    assert_eq!(calc.fire(c.ticket), None);
}

#[test]
fn poll_respects_quiescence_window() {
    let backend = Rc::new(MemoryStorage::new());
    let mut calc = Calculator::open(
        Rc::clone(&backend),
        CalculatorConfig::default().with_debounce(Duration::from_millis(300)),
    );
    calc.set_value(Field::Width, text("2"), 0);
    calc.set_value(Field::Height, text("3"), 200);

    assert_eq!(calc.poll(300), None);
    assert_eq!(calc.poll(499), None);
    assert_eq!(calc.poll(500), Some(120));
    assert_eq!(calc.poll(900), None);
}

// =============================================================
// Units
// =============================================================

#[test]
fn unit_change_is_persisted_and_recomputed() {
    let backend = Rc::new(MemoryStorage::new());
    let mut calc = open(&backend);
    calc.set_value(Field::Width, text("100"), 0);
    calc.set_value(Field::Height, text("100"), 0);
    calc.set_value(Field::Quantity, text("1"), 0);
    calc.set_value(Field::PricePerSqft, text("1"), 0);
    calc.set_unit(Axis::Width, "cm", 0).expect("cm is valid");
    let last = calc.set_unit(Axis::Height, "cm", 0).expect("cm is valid");

    assert_eq!(calc.width().unit, LengthUnit::Centimeters);
    assert_eq!(backend.raw("h").as_deref(), Some(r#"{"value":"100","unit":"cm"}"#));
    assert_eq!(calc.fire(last.ticket), Some(10));
}

#[test]
fn unknown_unit_is_rejected_without_side_effects() {
    let backend = Rc::new(MemoryStorage::new());
    let mut calc = open(&backend);
    let err = calc.set_unit(Axis::Height, "yards", 0).expect_err("yards is not a unit");
    assert_eq!(err, UnitError::Unknown("yards".to_owned()));
    assert_eq!(calc.height().unit, LengthUnit::Feet);
    assert!(!calc.is_recompute_pending());
    assert!(backend.is_empty());
}

// =============================================================
// Reads
// =============================================================

#[test]
fn quote_tracks_current_inputs_ahead_of_total() {
    let backend = Rc::new(MemoryStorage::new());
    let mut calc = open(&backend);
    calc.set_value(Field::Width, text("2"), 0);
    calc.set_value(Field::Height, text("3"), 0);
    let q = calc.quote();
    assert_eq!(q.area_sqft, 6.0);
    assert_eq!(q.total, 120);
    assert_eq!(calc.total(), 0);
}

#[test]
fn reopened_session_sees_previous_edits() {
    let backend = Rc::new(MemoryStorage::new());
    {
        let mut calc = open(&backend);
        calc.set_value(Field::Width, text("4"), 0);
        let last = calc.set_value(Field::Height, text("5"), 0);
        calc.fire(last.ticket);
    }
    let calc = open(&backend);
    assert_eq!(calc.value(Field::Width).as_str(), "4");
    assert_eq!(calc.total(), 400);
}

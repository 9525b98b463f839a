// File: crates/scatter-core/tests/scale.rs
// Purpose: Validate scale computation, boundary mapping and degenerate inputs.

use scatter_core::{compute_scale, obesity_scale, AxisField, ChartError, Dataset, LinearScale, Record};

fn two_states() -> Dataset {
    Dataset::new(vec![
        Record::new("A", 10.0, 30.0, 20.0),
        Record::new("B", 20.0, 50.0, 40.0),
    ])
}

fn approx(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-9
}

#[test]
fn poverty_scale_matches_worked_example() {
    let s = compute_scale(&two_states(), AxisField::Poverty, 0.0, 900.0).expect("scale");
    assert!(approx(s.domain_min, 8.0));
    assert!(approx(s.domain_max, 20.0));
    assert!(approx(s.apply(10.0), 150.0));
    assert!(approx(s.apply(20.0), 900.0));
}

#[test]
fn age_scale_pads_only_the_minimum() {
    let s = compute_scale(&two_states(), AxisField::Age, 0.0, 900.0).expect("scale");
    assert!(approx(s.domain_min, 24.0));
    assert!(approx(s.domain_max, 50.0));
    assert!(approx(s.apply(30.0), 6.0 / 26.0 * 900.0));
}

#[test]
fn boundaries_map_to_range_ends_for_both_fields() {
    let data = Dataset::new(vec![
        Record::new("A", 13.2, 38.1, 31.0),
        Record::new("B", 9.7, 41.4, 27.3),
        Record::new("C", 21.5, 35.0, 35.6),
    ]);
    for field in AxisField::ALL {
        for (r0, r1) in [(0.0, 900.0), (900.0, 0.0), (-50.0, 125.5)] {
            let s = compute_scale(&data, field, r0, r1).expect("scale");
            assert!(approx(s.apply(s.domain_min), r0), "{field} min");
            assert!(approx(s.apply(s.domain_max), r1), "{field} max");
        }
    }
}

#[test]
fn scale_is_deterministic() {
    let data = two_states();
    let a = compute_scale(&data, AxisField::Poverty, 0.0, 900.0).unwrap();
    let b = compute_scale(&data, AxisField::Poverty, 0.0, 900.0).unwrap();
    assert_eq!(a, b);
}

#[test]
fn empty_dataset_is_rejected() {
    let err = compute_scale(&Dataset::default(), AxisField::Poverty, 0.0, 900.0).unwrap_err();
    assert!(matches!(err, ChartError::EmptyDataset));
    let err = obesity_scale(&Dataset::default(), 350.0).unwrap_err();
    assert!(matches!(err, ChartError::EmptyDataset));
}

#[test]
fn all_zero_field_is_degenerate() {
    let data = Dataset::new(vec![Record::new("A", 0.0, 30.0, 20.0), Record::new("B", 0.0, 40.0, 25.0)]);
    let err = compute_scale(&data, AxisField::Poverty, 0.0, 900.0).unwrap_err();
    assert!(matches!(err, ChartError::DegenerateDomain { .. }));
}

#[test]
fn single_record_still_has_a_domain() {
    let data = Dataset::new(vec![Record::new("A", 10.0, 30.0, 20.0)]);
    let s = compute_scale(&data, AxisField::Poverty, 0.0, 900.0).expect("scale");
    assert!(approx(s.domain_min, 8.0));
    assert!(approx(s.apply(10.0), 900.0));
}

#[test]
fn equal_range_bounds_are_rejected() {
    let err = compute_scale(&two_states(), AxisField::Age, 100.0, 100.0).unwrap_err();
    assert!(matches!(err, ChartError::DegenerateRange { .. }));
}

#[test]
fn empty_domain_falls_back_to_range_min() {
    let s = LinearScale::new((5.0, 5.0), (10.0, 900.0));
    assert_eq!(s.apply(5.0), 10.0);
    assert_eq!(s.apply(123.0), 10.0);
}

#[test]
fn invert_undoes_apply() {
    let s = LinearScale::new((8.0, 20.0), (0.0, 900.0));
    assert!(approx(s.invert(s.apply(13.7)), 13.7));
}

#[test]
fn obesity_scale_is_flipped_and_starts_at_zero() {
    let s = obesity_scale(&two_states(), 350.0).expect("scale");
    assert_eq!(s.domain(), (0.0, 40.0));
    assert!(approx(s.apply(0.0), 350.0));
    assert!(approx(s.apply(40.0), 0.0));
    assert!(approx(s.apply(20.0), 175.0));
}

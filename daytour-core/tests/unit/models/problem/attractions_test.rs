use super::*;
use crate::helpers::models::create_curve;

#[test]
fn can_return_exact_sample_at_whole_hour() {
    let curve = create_curve(9, &[10., 20., 30.]);

    assert_eq!(curve.predict(9. * 60.), 10.);
    assert_eq!(curve.predict(10. * 60.), 20.);
    assert_eq!(curve.predict(11. * 60.), 30.);
}

#[test]
fn can_interpolate_between_hours() {
    let curve = create_curve(9, &[10., 20., 30.]);

    assert_eq!(curve.predict(9. * 60. + 30.), 15.);
    assert_eq!(curve.predict(10. * 60. + 15.), 22.5);
}

#[test]
fn can_penalize_hours_before_opening() {
    let curve = create_curve(9, &[10., 20.]);

    assert_eq!(curve.predict(8. * 60.), CLOSED_WAIT);
    assert_eq!(curve.predict(8. * 60. + 30.), CLOSED_WAIT + 0.5 * (10. - CLOSED_WAIT));
}

#[test]
fn can_penalize_hours_after_closing() {
    let curve = create_curve(9, &[10., 20.]);

    assert_eq!(curve.predict(10. * 60. + 30.), 20. + 0.5 * (CLOSED_WAIT - 20.));
    assert_eq!(curve.predict(11. * 60.), CLOSED_WAIT);
    assert_eq!(curve.predict(27. * 60.), CLOSED_WAIT);
}

#[test]
fn can_expose_open_hours() {
    let curve = create_curve(10, &[1., 2., 3., 4.]);

    assert_eq!(curve.open_hour(), 10);
    assert_eq!(curve.close_hour(), 13);
}

parameterized_test! {can_reject_invalid_curve, samples, {
    assert!(WaitCurve::new(&samples).is_err());
}}

can_reject_invalid_curve! {
    case_01_empty: Vec::<(u32, Duration)>::default(),
    case_02_hour_gap: vec![(9, 10.), (11, 20.)],
    case_03_negative_wait: vec![(9, -1.)],
    case_04_not_finite_wait: vec![(9, Duration::NAN)],
}

#[test]
fn can_reject_invalid_attraction() {
    let curve = create_curve(9, &[10.]);

    assert!(Attraction::new("", 10., curve.clone()).is_err());
    assert!(Attraction::new("carousel", -1., curve.clone()).is_err());
    assert!(Attraction::new("carousel", Duration::INFINITY, curve).is_err());
}

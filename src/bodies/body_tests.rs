use std::f64::consts::PI;

use crate::assert_float_eq;
use crate::bodies::Body;
use crate::utils::{SimConstants, SimulationError};

#[test]
fn test_mass_is_derived_from_radius() {
    let body = Body::new(0.0, 0.0, 0.0, 0.0, 2.0).unwrap();
    assert_float_eq(body.mass(), PI * 4.0, 1e-12, None);

    let heavy = Body::new(0.0, 0.0, 0.0, 0.0, 10.0).unwrap();
    assert_float_eq(heavy.mass(), PI * 100.0, 1e-12, None);
}

#[test]
fn test_new_rejects_non_finite_input() {
    assert_eq!(
        Body::new(f64::NAN, 0.0, 0.0, 0.0, 1.0),
        Err(SimulationError::NonFiniteInput)
    );
    assert_eq!(
        Body::new(0.0, f64::INFINITY, 0.0, 0.0, 1.0),
        Err(SimulationError::NonFiniteInput)
    );
    assert_eq!(
        Body::new(0.0, 0.0, f64::NEG_INFINITY, 0.0, 1.0),
        Err(SimulationError::NonFiniteInput)
    );
    assert_eq!(
        Body::new(0.0, 0.0, 0.0, 0.0, f64::NAN),
        Err(SimulationError::NonFiniteInput)
    );
}

#[test]
fn test_new_rejects_nonpositive_radius() {
    assert_eq!(
        Body::new(0.0, 0.0, 0.0, 0.0, 0.0),
        Err(SimulationError::InvalidRadius)
    );
    assert_eq!(
        Body::new(0.0, 0.0, 0.0, 0.0, -3.0),
        Err(SimulationError::InvalidRadius)
    );
}

#[test]
fn test_combine_sums_mass_at_weighted_centroid() {
    let a = Body::new(0.0, 0.0, 1.0, 2.0, 1.0).unwrap();
    let b = Body::new(30.0, 60.0, -5.0, 0.5, 3.0).unwrap();
    let a_before = a;
    let b_before = b;

    let merged = a.combine(&b);

    assert_float_eq(merged.mass(), a.mass() + b.mass(), 1e-12, None);

    let expected_x = (a.x * a.mass() + b.x * b.mass()) / (a.mass() + b.mass());
    let expected_y = (a.y * a.mass() + b.y * b.mass()) / (a.mass() + b.mass());
    assert_float_eq(merged.x, expected_x, 1e-12, None);
    assert_float_eq(merged.y, expected_y, 1e-12, None);

    // Aggregates are never moved directly; their velocity is zero.
    assert_eq!(merged.vx, 0.0);
    assert_eq!(merged.vy, 0.0);

    // Neither operand changed.
    assert_eq!(a, a_before);
    assert_eq!(b, b_before);
}

#[test]
fn test_combine_preserves_mass_area_invariant() {
    let a = Body::new(0.0, 0.0, 0.0, 0.0, 2.0).unwrap();
    let b = Body::new(10.0, 0.0, 0.0, 0.0, 5.0).unwrap();
    let merged = a.combine(&b);

    // radius = sqrt(mass / PI) keeps mass == PI * radius^2 for aggregates too.
    assert_float_eq(merged.mass(), PI * merged.radius() * merged.radius(), 1e-9, None);
}

#[test]
fn test_advance_position_is_pure_kinematics() {
    let mut body = Body::new(10.0, 20.0, 3.0, -4.0, 1.0).unwrap();
    body.advance_position(0.5);

    assert_float_eq(body.x, 11.5, 1e-12, None);
    assert_float_eq(body.y, 18.0, 1e-12, None);
    // Velocity is untouched.
    assert_eq!(body.vx, 3.0);
    assert_eq!(body.vy, -4.0);
}

#[test]
fn test_apply_force_attracts_along_the_separation() {
    let constants = SimConstants::default();
    let left = Body::new(100.0, 100.0, 0.0, 0.0, 1.0).unwrap();
    let right = Body::new(200.0, 100.0, 0.0, 0.0, 1.0).unwrap();

    let mut pulled_left = left;
    pulled_left.apply_force_from(0.01, &right, &constants);
    let mut pulled_right = right;
    pulled_right.apply_force_from(0.01, &left, &constants);

    // Equal masses, equal softening: equal and opposite velocity changes,
    // purely along the x-axis.
    assert!(pulled_left.vx > 0.0);
    assert!(pulled_right.vx < 0.0);
    assert_float_eq(pulled_left.vx + pulled_right.vx, 0.0, 1e-12, None);
    assert_float_eq(pulled_left.vy, 0.0, 1e-12, None);
    assert_float_eq(pulled_right.vy, 0.0, 1e-12, None);
}

#[test]
fn test_apply_force_softening_keeps_coincident_bodies_finite() {
    let constants = SimConstants::default();
    let a = Body::new(50.0, 50.0, 0.0, 0.0, 2.0).unwrap();
    let b = Body::new(50.0, 50.0, 0.0, 0.0, 2.0).unwrap();

    let mut pulled = a;
    pulled.apply_force_from(0.01, &b, &constants);

    // r = 0, but eps = damping * radius keeps the denominator positive.
    assert!(pulled.vx.is_finite());
    assert!(pulled.vy.is_finite());
}

#[test]
fn test_softening_scales_with_source_radius() {
    let constants = SimConstants::default();
    let target = Body::new(0.0, 0.0, 0.0, 0.0, 1.0).unwrap();
    let small_source = Body::new(100.0, 0.0, 0.0, 0.0, 1.0).unwrap();
    // A wide aggregate of the same position exerts a softer pull per unit of
    // source mass than a compact body would.
    let wide_source = Body::new(100.0, 0.0, 0.0, 0.0, 8.0).unwrap();

    let mut pulled_by_small = target;
    pulled_by_small.apply_force_from(0.01, &small_source, &constants);
    let mut pulled_by_wide = target;
    pulled_by_wide.apply_force_from(0.01, &wide_source, &constants);

    let small_dv = pulled_by_small.vx.abs() / small_source.mass();
    let wide_dv = pulled_by_wide.vx.abs() / wide_source.mass();
    assert!(wide_dv < small_dv);
}

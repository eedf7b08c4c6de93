use std::f64::consts::PI;

use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::assert_float_eq;
use crate::bodies::rotating_disk;
use crate::utils::SimConstants;

#[test]
fn test_rotating_disk_places_bodies_inside_the_margin() {
    let constants = SimConstants::default();
    let mut rng = StdRng::seed_from_u64(7);
    let bodies = rotating_disk(&mut rng, 200, 3.0, 1.0, &constants).unwrap();

    assert_eq!(bodies.len(), 200);
    let low = 0.2 * constants.universe_size;
    let high = 0.8 * constants.universe_size;
    for body in &bodies {
        assert!(body.x >= low && body.x <= high);
        assert!(body.y >= low && body.y <= high);
        assert_float_eq(body.mass(), PI * 9.0, 1e-9, None);
    }
}

#[test]
fn test_rotating_disk_velocity_field_circles_the_center() {
    let constants = SimConstants::default();
    let (cx, cy) = constants.universe_center();
    let mut rng = StdRng::seed_from_u64(11);
    let spin = 0.5;
    let bodies = rotating_disk(&mut rng, 50, 3.0, spin, &constants).unwrap();

    for body in &bodies {
        assert_eq!(body.vx, spin * (body.y - cy));
        assert_eq!(body.vy, -spin * (body.x - cx));
    }
}

#[test]
fn test_rotating_disk_rejects_bad_radius() {
    let constants = SimConstants::default();
    let mut rng = StdRng::seed_from_u64(3);
    assert!(rotating_disk(&mut rng, 10, 0.0, 1.0, &constants).is_err());
}

#[test]
fn test_rotating_disk_is_deterministic_for_a_seed() {
    let constants = SimConstants::default();
    let first = rotating_disk(&mut StdRng::seed_from_u64(99), 20, 3.0, 1.0, &constants).unwrap();
    let second = rotating_disk(&mut StdRng::seed_from_u64(99), 20, 3.0, 1.0, &constants).unwrap();
    assert_eq!(first, second);
}

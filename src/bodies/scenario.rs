use rand::Rng;

use crate::bodies::Body;
use crate::utils::{SimConstants, SimulationError};

/// Fraction of the universe left empty around the edges when placing bodies.
const PLACEMENT_MARGIN: f64 = 0.2;

/// Generates `count` bodies placed uniformly at random inside the universe
/// square, inset by a margin, with a circular velocity field around the
/// universe center: `vx = spin * (y - cy)`, `vy = -spin * (x - cx)`. Every
/// body gets the same radius.
///
/// The rng is a parameter so callers can seed it for reproducible runs.
///
/// # Errors
///
/// Returns an error if `body_radius` fails body validation.
///
/// # Examples
///
/// ```
/// use rand::SeedableRng;
/// use rand::rngs::StdRng;
/// use rs_nbody::bodies::rotating_disk;
/// use rs_nbody::utils::SimConstants;
///
/// let constants = SimConstants::default();
/// let mut rng = StdRng::seed_from_u64(42);
/// let bodies = rotating_disk(&mut rng, 100, 3.0, 1.0, &constants).unwrap();
///
/// assert_eq!(bodies.len(), 100);
/// ```
pub fn rotating_disk<R: Rng + ?Sized>(
    rng: &mut R,
    count: usize,
    body_radius: f64,
    spin: f64,
    constants: &SimConstants,
) -> Result<Vec<Body>, SimulationError> {
    let size = constants.universe_size;
    let (cx, cy) = constants.universe_center();

    let mut bodies = Vec::with_capacity(count);
    for _ in 0..count {
        let x = size * (PLACEMENT_MARGIN + (1.0 - 2.0 * PLACEMENT_MARGIN) * rng.gen::<f64>());
        let y = size * (PLACEMENT_MARGIN + (1.0 - 2.0 * PLACEMENT_MARGIN) * rng.gen::<f64>());
        let vx = spin * (y - cy);
        let vy = -spin * (x - cx);
        bodies.push(Body::new(x, y, vx, vy, body_radius)?);
    }
    Ok(bodies)
}

/// [`rotating_disk`] with the thread rng and the stock radius and spin.
pub fn default_rotating_disk(
    count: usize,
    constants: &SimConstants,
) -> Result<Vec<Body>, SimulationError> {
    rotating_disk(&mut rand::thread_rng(), count, 3.0, 1.0, constants)
}

use std::f64::consts::PI;

use crate::utils::{SimConstants, SimulationError};

/// A point mass moving in a 2D plane.
///
/// The radius is the only free physical parameter: mass is always derived as
/// `PI * radius * radius` (mass proportional to area) and cannot be set
/// independently. Position and velocity are public and are mutated in place
/// by the simulation each tick.
///
/// # Examples
///
/// ```
/// use rs_nbody::bodies::Body;
///
/// let body = Body::new(0.0, 0.0, 1.0, -1.0, 2.0).expect("finite input");
/// assert!((body.mass() - std::f64::consts::PI * 4.0).abs() < 1e-12);
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Body {
    pub x: f64,
    pub y: f64,
    pub vx: f64,
    pub vy: f64,
    radius: f64,
    mass: f64,
}

impl Body {
    /// Creates a new body at `(x, y)` with velocity `(vx, vy)`.
    ///
    /// # Errors
    ///
    /// Returns an error if any input is non-finite, or if `radius` is zero or
    /// negative. Non-finite input is rejected rather than clamped; mass is
    /// derived from the radius, so a degenerate radius would poison every
    /// force calculation.
    ///
    /// # Examples
    ///
    /// ```
    /// use rs_nbody::bodies::Body;
    /// use rs_nbody::utils::SimulationError;
    ///
    /// assert!(Body::new(100.0, 100.0, 0.0, 0.0, 3.0).is_ok());
    /// assert_eq!(Body::new(f64::NAN, 0.0, 0.0, 0.0, 3.0), Err(SimulationError::NonFiniteInput));
    /// assert_eq!(Body::new(0.0, 0.0, 0.0, 0.0, -1.0), Err(SimulationError::InvalidRadius));
    /// ```
    pub fn new(x: f64, y: f64, vx: f64, vy: f64, radius: f64) -> Result<Self, SimulationError> {
        if !(x.is_finite() && y.is_finite() && vx.is_finite() && vy.is_finite() && radius.is_finite()) {
            return Err(SimulationError::NonFiniteInput);
        }
        if radius <= 0.0 {
            return Err(SimulationError::InvalidRadius);
        }
        Ok(Body {
            x,
            y,
            vx,
            vy,
            radius,
            mass: PI * radius * radius,
        })
    }

    pub fn radius(&self) -> f64 {
        self.radius
    }

    pub fn mass(&self) -> f64 {
        self.mass
    }

    /// Combines this body with another body and returns the aggregate body.
    ///
    /// The aggregate has the summed mass, sits at the mass-weighted centroid,
    /// and gets the radius that keeps mass proportional to area. Its velocity
    /// is zero: aggregates are never moved directly, their constituents are
    /// updated individually on the next tick. Neither operand is mutated.
    ///
    /// # Examples
    ///
    /// ```
    /// use rs_nbody::bodies::Body;
    ///
    /// let a = Body::new(0.0, 0.0, 5.0, 0.0, 1.0).unwrap();
    /// let b = Body::new(10.0, 0.0, 0.0, 5.0, 1.0).unwrap();
    /// let merged = a.combine(&b);
    ///
    /// assert!((merged.mass() - (a.mass() + b.mass())).abs() < 1e-12);
    /// assert!((merged.x - 5.0).abs() < 1e-12); // equal masses: midpoint
    /// assert_eq!(merged.vx, 0.0);
    /// assert_eq!(merged.vy, 0.0);
    /// ```
    pub fn combine(&self, other: &Body) -> Body {
        let mass = self.mass + other.mass;
        let radius = (mass / PI).sqrt();
        let x = (self.x * self.mass + other.x * other.mass) / mass;
        let y = (self.y * self.mass + other.y * other.mass) / mass;
        Body {
            x,
            y,
            vx: 0.0,
            vy: 0.0,
            radius,
            mass,
        }
    }

    /// Advances the position by the current velocity over `dt`.
    ///
    /// Pure kinematics, no force evaluation.
    pub fn advance_position(&mut self, dt: f64) {
        self.x += dt * self.vx;
        self.y += dt * self.vy;
    }

    /// Updates this body's velocity from the softened gravitational pull of
    /// `other`. Only `self` changes; the attraction is evaluated again from
    /// the other side when the other body takes its turn.
    ///
    /// The softening term scales with the radius of the *attracting* body, so
    /// large aggregates pull softly and diffusely instead of blowing up the
    /// force as distant clusters collapse to points.
    pub fn apply_force_from(&mut self, dt: f64, other: &Body, constants: &SimConstants) {
        let eps = constants.softening(other.radius);

        let dx = self.x - other.x;
        let dy = self.y - other.y;
        let r = (dx * dx + dy * dy).sqrt();

        // Softened Newtonian attraction; (r^2 + eps^2) stays strictly
        // positive even for coincident bodies.
        let force = -constants.gravity * self.mass * other.mass / (r * r + eps * eps);
        let angle = dy.atan2(dx);
        let fx = force * angle.cos();
        let fy = force * angle.sin();

        self.vx += dt * fx / self.mass;
        self.vy += dt * fy / self.mass;
    }
}

// src/utils/constants_config.rs

/// Tunable constants for a gravitational n-body simulation.
///
/// These knobs affect only the computed results, never the shape of the API.
/// Any positive values are valid configuration.
#[derive(Debug, Clone, Copy)]
pub struct SimConstants {
    /// Gravitational strength G used in the force law.
    pub gravity: f64,
    /// Softening strength. The softening term for a force is
    /// `damping * radius` of the attracting body, which keeps the force
    /// denominator strictly positive even for coincident bodies and makes
    /// large aggregates exert a softer, more diffuse pull.
    pub damping: f64,
    /// Barnes-Hut opening angle. An internal tree node whose side `s` and
    /// distance `d` satisfy `s / d < theta` is treated as a single aggregate
    /// body. `theta = 0.0` forces full recursion to every leaf, reproducing
    /// exact pairwise summation; larger values trade accuracy for speed.
    pub theta: f64,
    /// Depth at which tree nodes stop subdividing. Bodies routed into a leaf
    /// at this depth are merged into a single representative point, which
    /// bounds the recursion for arbitrarily close or coincident bodies.
    pub max_depth: u32,
    /// Side length of the square universe. The tree root is centered on the
    /// universe center at `(universe_size / 2, universe_size / 2)`.
    pub universe_size: f64,
}

impl Default for SimConstants {
    fn default() -> Self {
        Self {
            gravity: 1.0e5,
            damping: 100.0,
            theta: 0.2,
            max_depth: 50,
            universe_size: 800.0,
        }
    }
}

impl SimConstants {
    /// Creates a new set of simulation constants, falling back to the default
    /// for every knob passed as `None`.
    ///
    /// # Examples
    ///
    /// ```
    /// use rs_nbody::utils::SimConstants;
    ///
    /// let constants = SimConstants::new(None, None, Some(0.5), None, Some(1600.0));
    /// assert_eq!(constants.theta, 0.5);
    /// assert_eq!(constants.universe_size, 1600.0);
    /// assert_eq!(constants.gravity, rs_nbody::DEFAULT_SIM_CONSTANTS.gravity);
    /// ```
    pub fn new(
        gravity: Option<f64>,
        damping: Option<f64>,
        theta: Option<f64>,
        max_depth: Option<u32>,
        universe_size: Option<f64>,
    ) -> Self {
        let default = SimConstants::default();
        Self {
            gravity: gravity.unwrap_or(default.gravity),
            damping: damping.unwrap_or(default.damping),
            theta: theta.unwrap_or(default.theta),
            max_depth: max_depth.unwrap_or(default.max_depth),
            universe_size: universe_size.unwrap_or(default.universe_size),
        }
    }

    /// Softening term for a force exerted by a body of the given radius.
    pub fn softening(&self, source_radius: f64) -> f64 {
        self.damping * source_radius
    }

    /// Center of the square universe.
    pub fn universe_center(&self) -> (f64, f64) {
        (self.universe_size / 2.0, self.universe_size / 2.0)
    }
}

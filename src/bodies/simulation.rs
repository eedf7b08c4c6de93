//! Per-tick orchestration of a Barnes-Hut n-body simulation.
//!
//! Each tick runs three strictly ordered phases:
//!
//! 1. every body's position advances by the velocity it ended the previous
//!    tick with,
//! 2. the quadrant tree is rebuilt from scratch over the updated positions,
//! 3. every body's velocity is updated by traversing the freshly built tree.
//!
//! All positions advance before any tree node exists, and the tree is
//! complete and immutable before the first force is evaluated, so every
//! body's force sees the same snapshot. Reordering these phases changes the
//! physics.
//!
//! # Example
//!
//! ```
//! use rs_nbody::bodies::Simulation;
//! use rs_nbody::utils::SimConstants;
//!
//! let mut sim = Simulation::new(SimConstants::default());
//! sim.initialize(vec![
//!     (100.0, 100.0, 0.0, 0.0, 3.0),
//!     (200.0, 100.0, 0.0, 0.0, 3.0),
//! ])
//! .expect("finite initial conditions");
//!
//! sim.step(0.01);
//!
//! // The two bodies attract each other along the x-axis.
//! assert!(sim.bodies()[0].vx > 0.0);
//! assert!(sim.bodies()[1].vx < 0.0);
//! ```
use log::debug;
use rayon::prelude::*;

use crate::bodies::{Body, Quad, QuadTree};
use crate::utils::{SimConstants, SimulationError};

/// A gravitational n-body simulation over a square universe.
///
/// Owns the body list and a quadrant tree that is rebuilt every tick. The
/// tree indexes copies of the body data, so force evaluation is a read-only
/// traversal and independent bodies are updated in parallel with results
/// identical to a sequential pass.
pub struct Simulation {
    bodies: Vec<Body>,
    tree: QuadTree,
    constants: SimConstants,
}

impl Simulation {
    /// Creates a simulation with no bodies.
    pub fn new(constants: SimConstants) -> Self {
        Simulation {
            bodies: Vec::new(),
            tree: QuadTree::new(constants.max_depth),
            constants,
        }
    }

    /// Sets up the initial body set from `(x, y, vx, vy, radius)` tuples and
    /// builds the initial tree.
    ///
    /// # Errors
    ///
    /// Returns an error if any tuple fails body validation; see
    /// [`Body::new`]. The existing body set is left untouched on failure.
    pub fn initialize<I>(&mut self, bodies: I) -> Result<(), SimulationError>
    where
        I: IntoIterator<Item = (f64, f64, f64, f64, f64)>,
    {
        let bodies = bodies
            .into_iter()
            .map(|(x, y, vx, vy, radius)| Body::new(x, y, vx, vy, radius))
            .collect::<Result<Vec<_>, _>>()?;
        self.set_bodies(bodies);
        Ok(())
    }

    /// Replaces the body set with already-constructed bodies (for example
    /// from a scenario generator) and builds the initial tree.
    pub fn set_bodies(&mut self, bodies: Vec<Body>) {
        self.bodies = bodies;
        let bounds = self.root_bounds();
        self.tree.rebuild(&self.bodies, bounds);
    }

    /// Executes one tick with timestep `dt`, mutating body positions and
    /// velocities in place.
    pub fn step(&mut self, dt: f64) {
        // Phase 1: advance every position using last tick's velocity.
        for body in self.bodies.iter_mut() {
            body.advance_position(dt);
        }

        // Phase 2: rebuild the tree over the updated positions.
        let bounds = self.root_bounds();
        self.tree.rebuild(&self.bodies, bounds);

        // Phase 3: update every velocity against the finished tree. Each
        // body reads the shared snapshot and writes only itself, so the
        // parallel pass computes exactly what a sequential one would.
        let tree = &self.tree;
        let constants = self.constants;
        self.bodies
            .par_iter_mut()
            .enumerate()
            .for_each(|(index, body)| {
                tree.evaluate_force_on(body, Some(index), dt, &constants);
            });
    }

    /// The current body set, for visualization or inspection.
    pub fn bodies(&self) -> &[Body] {
        &self.bodies
    }

    /// The tree built by the most recent tick (or initialization), for debug
    /// visualization of quadrant boundaries.
    pub fn tree(&self) -> &QuadTree {
        &self.tree
    }

    pub fn constants(&self) -> &SimConstants {
        &self.constants
    }

    /// Total momentum `(px, py)` of the body set. For a closed system this
    /// stays near its initial value; it is the standard drift diagnostic.
    pub fn total_momentum(&self) -> (f64, f64) {
        self.bodies.iter().fold((0.0, 0.0), |(px, py), body| {
            (px + body.mass() * body.vx, py + body.mass() * body.vy)
        })
    }

    /// Root bounds for the next rebuild: the configured universe square,
    /// grown (never shrunk) until it also contains every current body, so a
    /// body that wanders out of the universe keeps participating instead of
    /// silently dropping out of the tree for the tick.
    fn root_bounds(&self) -> Quad {
        let (cx, cy) = self.constants.universe_center();
        let mut half_size = self.constants.universe_size / 2.0;
        for body in &self.bodies {
            half_size = half_size.max((body.x - cx).abs()).max((body.y - cy).abs());
        }
        if half_size > self.constants.universe_size / 2.0 {
            debug!(
                "root quadrant grown to half-size {half_size} to cover bodies outside the universe"
            );
        }
        Quad {
            cx,
            cy,
            half_size,
        }
    }
}

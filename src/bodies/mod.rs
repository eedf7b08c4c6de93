mod body;
mod quadtree;
mod scenario;
mod simulation;

pub use body::*;
pub use quadtree::*;
pub use scenario::*;
pub use simulation::*;

#[cfg(test)]
mod body_tests;
#[cfg(test)]
mod scenario_tests;

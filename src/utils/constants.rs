use crate::utils;

pub const DEFAULT_SIM_CONSTANTS: utils::SimConstants = utils::SimConstants {
    gravity: 1.0e5,
    damping: 100.0,
    theta: 0.2,
    max_depth: 50,
    universe_size: 800.0,
};

/// Linear Congruential Generator
pub mod generator;

/// Seed and parameter recovery attacks against the LCG
pub mod attack;

pub use attack::{recover, walk_back, Recovered};
pub use generator::{generate, Lcg, Params};

mod base;
mod aco;
mod brute;
mod colony;
mod algorithm;

pub use algorithm::{Algorithm, AlgorithmEnum};
pub use aco::ACO;
pub use base::ants::{roulette, Ant, Trail, MAX_VISIBILITY};
pub use base::pheromone::PheromoneMatrix;
pub use brute::{BruteForce, MAX_BRUTE_FORCE_LOCATIONS};
pub use colony::Colony;

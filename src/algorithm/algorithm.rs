use enum_dispatch::enum_dispatch;
use super::aco::ACO;
use super::brute::BruteForce;
use crate::component::BestTour;
use crate::geometry::DistanceTable;
use crate::utils::error::Error;


#[enum_dispatch]
pub enum AlgorithmEnum {
    ACO,
    BruteForce,
}

#[enum_dispatch(AlgorithmEnum)]
pub trait Algorithm {
    /// Checks the instance can be handled before any work starts.
    fn prepare(&mut self, distances: &DistanceTable) -> Result<(), Error>;
    fn solve(&mut self, distances: &DistanceTable) -> BestTour;
}

use crate::algorithm::{ACO, Algorithm, AlgorithmEnum, BruteForce, PheromoneMatrix};
use crate::component::BestTour;
use crate::geometry::{DistanceTable, Location};
use crate::utils::config::Config;
use crate::utils::error::Error;
use crate::utils::telemetry::InfoLogger;
use itertools::Itertools;
use ordered_float::OrderedFloat;
use std::fmt::Write;
use std::time::Instant;

/// Strongest pheromone edges listed after an ACO run.
const SHOWN_EDGES: usize = 5;


pub struct Planner {
    pub algorithm: AlgorithmEnum,
    pub distances: DistanceTable,
    pub config: Config,
    logger: InfoLogger,
}

impl Planner {
    pub fn new(locations: &[Location], config: Config, logger: InfoLogger) -> Result<Self, Error> {
        let distances = DistanceTable::new(locations)?;
        let mut algorithm: AlgorithmEnum = match config.algorithm.as_str() {
            "aco" => ACO::new(config.parameters.clone(), config.seed)?
                .with_parallel(config.parallel)
                .with_logger(logger.clone(), config.report_every)
                .into(),
            "brute" => BruteForce::new().into(),
            other => return Err(Error::UnknownAlgorithm(other.to_owned())),
        };
        algorithm.prepare(&distances)?;
        Ok(Planner { algorithm, distances, config, logger })
    }
    /// Runs the chosen algorithm, reports the tour and returns it with the
    /// computing time in microseconds.
    pub fn plan(&mut self) -> (BestTour, u128) {
        let start = Instant::now();
        let best = self.algorithm.solve(&self.distances);
        let elapsed = start.elapsed().as_micros();
        self.show_results(&best);
        (best, elapsed)
    }
    pub fn pheromone(&self) -> Option<&PheromoneMatrix> {
        match &self.algorithm {
            AlgorithmEnum::ACO(aco) => Some(aco.pheromone()),
            AlgorithmEnum::BruteForce(_) => None,
        }
    }
    fn show_results(&self, best: &BestTour) {
        let mut msg = String::new();
        let method = match self.algorithm {
            AlgorithmEnum::ACO(_) => "Ant Colony Optimization",
            AlgorithmEnum::BruteForce(_) => "Brute-Force",
        };
        writeln!(msg, "method: {} ({})", method, self.config.name).unwrap();
        writeln!(msg, "shortest distance: {}", best.length()).unwrap();
        // locations are numbered from 1 in reports
        let path = best.path().unwrap_or(&[]).iter()
            .map(|node| node + 1)
            .join(", ");
        writeln!(msg, "shortest path: [{}]", path).unwrap();
        if let Some(pheromone) = self.pheromone() {
            let size = pheromone.len();
            let strongest = (0..size)
                .tuple_combinations()
                .sorted_by_key(|&(i, j)| OrderedFloat(-pheromone.level(i, j)))
                .take(SHOWN_EDGES);
            for (i, j) in strongest {
                writeln!(msg, "- edge {:>3} - {:<3} pheromone {:.6}",
                         i + 1, j + 1, pheromone.level(i, j)).unwrap();
            }
        }
        (self.logger)(msg.trim_end());
    }
}

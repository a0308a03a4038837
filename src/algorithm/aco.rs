use crate::component::{BestTour, Tour};
use crate::geometry::DistanceTable;
use crate::utils::config::Parameters;
use crate::utils::error::Error;
use crate::utils::telemetry::{silent_logger, InfoLogger};
use rand::SeedableRng;
use rand_chacha::ChaChaRng;
use super::Algorithm;
use super::base::pheromone::PheromoneMatrix;
use super::colony::Colony;


/// Ant colony optimizer: repeats the colony cycle on one evolving pheromone
/// matrix and remembers the shortest tour ever built.
pub struct ACO {
    params: Parameters,
    seed: u64,
    parallel: bool,
    report_every: usize,
    logger: InfoLogger,
    pheromone: PheromoneMatrix,
    best: BestTour,
    history: Vec<f64>,
}


impl ACO {
    pub fn new(params: Parameters, seed: u64) -> Result<Self, Error> {
        params.validate()?;
        let pheromone = PheromoneMatrix::new(0, params.initial_pheromone);
        Ok(ACO {
            params,
            seed,
            parallel: false,
            report_every: 0,
            logger: silent_logger(),
            pheromone,
            best: BestTour::new(),
            history: vec![],
        })
    }
    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }
    /// Reports progress every `report_every` generations, never if zero.
    pub fn with_logger(mut self, logger: InfoLogger, report_every: usize) -> Self {
        self.logger = logger;
        self.report_every = report_every;
        self
    }
    pub fn run(&mut self, distances: &DistanceTable) -> &BestTour {
        let size = distances.len();
        self.pheromone = PheromoneMatrix::new(size, self.params.initial_pheromone);
        self.best = BestTour::new();
        self.history.clear();
        if size == 1 {
            self.best.offer(&Tour::depot_only());
            return &self.best;
        }

        let colony = Colony::new(&self.params, self.parallel);
        let mut rng = ChaChaRng::seed_from_u64(self.seed);
        for epoch in 1..=self.params.iterations {
            colony.generation(distances, &mut self.pheromone, &mut self.best, &mut rng);
            self.history.push(self.best.length());
            if self.report_every > 0 && epoch % self.report_every == 0 {
                (self.logger)(&format!("generation {:>4}: best length {:.4}",
                                       epoch, self.best.length()));
            }
        }
        (self.logger)(&format!("ACO finished {} generations, best length {:.4}",
                               self.history.len(), self.best.length()));
        &self.best
    }
    pub fn best_tour(&self) -> Option<&[usize]> {
        self.best.path()
    }
    pub fn best_length(&self) -> f64 {
        self.best.length()
    }
    /// `None` before the first run or for an index outside the instance.
    pub fn pheromone_level(&self, from: usize, to: usize) -> Option<f64> {
        let size = self.pheromone.len();
        if from < size && to < size {
            Some(self.pheromone.level(from, to))
        } else {
            None
        }
    }
    pub fn pheromone(&self) -> &PheromoneMatrix {
        &self.pheromone
    }
    /// Best length known after each generation.
    pub fn history(&self) -> &[f64] {
        &self.history
    }
}

impl Algorithm for ACO {
    fn prepare(&mut self, _distances: &DistanceTable) -> Result<(), Error> {
        Ok(())
    }
    fn solve(&mut self, distances: &DistanceTable) -> BestTour {
        self.run(distances).clone()
    }
}

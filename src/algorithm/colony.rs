use rand::{Rng, SeedableRng};
use rand_chacha::ChaChaRng;
use rayon::prelude::*;
use crate::component::{BestTour, Tour};
use crate::geometry::DistanceTable;
use crate::utils::config::Parameters;
use super::base::ants::{Ant, Trail};
use super::base::pheromone::PheromoneMatrix;


/// Runs one generation: traverse, deposit, evaporate, track the best.
pub struct Colony {
    pub m: usize,
    pub q: f64,
    pub rho: f64,
    pub alpha: f64,
    pub beta: f64,
    pub parallel: bool,
}

impl Colony {
    pub fn new(params: &Parameters, parallel: bool) -> Self {
        Colony {
            m: params.ants,
            q: params.deposit,
            rho: params.degradation,
            alpha: params.alpha,
            beta: params.beta,
            parallel,
        }
    }
    /// Every ant draws its own seed from `rng` up front, so the generation
    /// comes out the same whether ants run in parallel or one by one.
    pub fn generation(&self, distances: &DistanceTable, pheromone: &mut PheromoneMatrix,
                      best: &mut BestTour, rng: &mut ChaChaRng) -> Vec<Tour> {
        let seeds: Vec<u64> = (0..self.m).map(|_| rng.gen()).collect();
        let tours = {
            let trail = Trail::pack(distances, pheromone, self.alpha, self.beta);
            let size = distances.len();
            let walk = |&seed: &u64| {
                let mut rng = ChaChaRng::seed_from_u64(seed);
                Ant::new(size).traverse(&trail, &mut rng)
            };
            if self.parallel {
                seeds.par_iter().map(walk).collect::<Vec<_>>()
            } else {
                seeds.iter().map(walk).collect::<Vec<_>>()
            }
        };
        // all deposits land before the single evaporation
        for tour in tours.iter() {
            self.deposit_pheromone(pheromone, tour);
        }
        pheromone.evaporate(self.rho);
        for tour in tours.iter() {
            best.offer(tour);
        }
        tours
    }
    pub fn deposit_pheromone(&self, pheromone: &mut PheromoneMatrix, tour: &Tour) {
        // coinciding locations only
        if tour.length() <= 0.0 {
            return;
        }
        let delta = self.q / tour.length();
        for (from, to) in tour.edges() {
            pheromone.deposit(from, to, delta);
        }
    }
}


#[cfg(test)]
mod test {
    use super::*;
    use crate::geometry::Location;
    fn params() -> Parameters {
        Parameters {
            iterations: 1,
            ants: 8,
            degradation: 0.5,
            alpha: 1.0,
            beta: 2.0,
            initial_pheromone: 1.0,
            deposit: 1.0,
        }
    }
    fn square() -> DistanceTable {
        DistanceTable::new(&[
            Location::new(0.0, 0.0),
            Location::new(1.0, 0.0),
            Location::new(1.0, 1.0),
            Location::new(0.0, 1.0),
        ]).unwrap()
    }
    #[test]
    fn test_deposit_then_evaporate() {
        let distances = square();
        let colony = Colony::new(&params(), false);
        let mut pheromone = PheromoneMatrix::new(4, 1.0);
        let mut best = BestTour::new();
        let mut rng = ChaChaRng::seed_from_u64(1);
        let tours = colony.generation(&distances, &mut pheromone, &mut best, &mut rng);
        assert_eq!(tours.len(), 8);

        let mut expected = PheromoneMatrix::new(4, 1.0);
        for tour in tours.iter() {
            colony.deposit_pheromone(&mut expected, tour);
        }
        expected.evaporate(0.5);
        assert_eq!(pheromone, expected);
        assert!(pheromone.is_symmetric());
        // untouched diagonal only evaporates
        assert_eq!(pheromone.level(2, 2), 0.5);
    }
    #[test]
    fn test_best_is_shortest_of_generation() {
        let distances = square();
        let colony = Colony::new(&params(), false);
        let mut pheromone = PheromoneMatrix::new(4, 1.0);
        let mut best = BestTour::new();
        let mut rng = ChaChaRng::seed_from_u64(2);
        let tours = colony.generation(&distances, &mut pheromone, &mut best, &mut rng);
        let shortest = tours.iter().map(|t| t.length()).fold(f64::INFINITY, f64::min);
        assert_eq!(best.length(), shortest);
        let first = tours.iter().find(|t| t.length() == shortest).unwrap();
        assert_eq!(best.tour(), Some(first));
    }
    #[test]
    fn test_tour_lengths_match_table() {
        let distances = square();
        let colony = Colony::new(&params(), false);
        let mut pheromone = PheromoneMatrix::new(4, 1.0);
        let mut best = BestTour::new();
        let mut rng = ChaChaRng::seed_from_u64(3);
        for tour in colony.generation(&distances, &mut pheromone, &mut best, &mut rng) {
            let path = tour.path();
            let mut length = 0.0;
            for i in 0..path.len() - 1 {
                length += distances.distance(path[i], path[i + 1]);
            }
            assert_eq!(tour.length(), length);
        }
    }
    #[test]
    fn test_parallel_matches_sequential() {
        let distances = square();
        let sequential = Colony::new(&params(), false);
        let parallel = Colony::new(&params(), true);
        let (mut ph1, mut ph2) = (PheromoneMatrix::new(4, 1.0), PheromoneMatrix::new(4, 1.0));
        let (mut best1, mut best2) = (BestTour::new(), BestTour::new());
        let (mut rng1, mut rng2) = (ChaChaRng::seed_from_u64(9), ChaChaRng::seed_from_u64(9));
        for _ in 0..5 {
            let tours1 = sequential.generation(&distances, &mut ph1, &mut best1, &mut rng1);
            let tours2 = parallel.generation(&distances, &mut ph2, &mut best2, &mut rng2);
            assert_eq!(tours1, tours2);
        }
        assert_eq!(ph1, ph2);
        assert_eq!(best1.tour(), best2.tour());
    }
    #[test]
    fn test_zero_length_tour_deposits_nothing() {
        let distances = DistanceTable::new(&[
            Location::new(1.0, 1.0),
            Location::new(1.0, 1.0),
        ]).unwrap();
        let colony = Colony::new(&params(), false);
        let mut pheromone = PheromoneMatrix::new(2, 1.0);
        let mut best = BestTour::new();
        let mut rng = ChaChaRng::seed_from_u64(4);
        colony.generation(&distances, &mut pheromone, &mut best, &mut rng);
        assert_eq!(pheromone.level(0, 1), 0.5);
        assert_eq!(best.length(), 0.0);
        assert_eq!(best.path(), Some(&[0, 1, 0][..]));
    }
}

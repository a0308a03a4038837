use itertools::Itertools;
use ordered_float::OrderedFloat;
use std::iter;
use crate::component::{BestTour, Tour};
use crate::geometry::{DistanceTable, DEPOT};
use crate::utils::error::Error;
use super::Algorithm;

/// Largest instance the exhaustive search accepts, depot included.
pub const MAX_BRUTE_FORCE_LOCATIONS: usize = 11;


/// Exact search over every ordering of the destinations.
#[derive(Default)]
pub struct BruteForce {}

impl BruteForce {
    pub fn new() -> Self {
        BruteForce {}
    }
    fn order_length(distances: &DistanceTable, order: &[usize]) -> f64 {
        let inner: f64 = order.windows(2)
            .map(|edge| distances.distance(edge[0], edge[1]))
            .sum();
        distances.distance(DEPOT, order[0]) + inner
            + distances.distance(order[order.len() - 1], DEPOT)
    }
}

impl Algorithm for BruteForce {
    fn prepare(&mut self, distances: &DistanceTable) -> Result<(), Error> {
        if distances.len() > MAX_BRUTE_FORCE_LOCATIONS {
            return Err(Error::TooManyLocations(distances.len(), MAX_BRUTE_FORCE_LOCATIONS));
        }
        Ok(())
    }
    fn solve(&mut self, distances: &DistanceTable) -> BestTour {
        let size = distances.len();
        let mut best = BestTour::new();
        if size == 1 {
            best.offer(&Tour::depot_only());
            return best;
        }
        // min_by_key keeps the first of equally short orders
        let shortest = (1..size).permutations(size - 1)
            .min_by_key(|order| OrderedFloat(Self::order_length(distances, order)));
        if let Some(order) = shortest {
            let path = iter::once(DEPOT)
                .chain(order)
                .chain(iter::once(DEPOT))
                .collect();
            best.offer(&Tour::new(path, distances));
        }
        best
    }
}

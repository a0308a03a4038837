use super::Location;
use crate::utils::error::Error;


/// Euclidean distances between every pair of locations, computed once per run.
#[derive(Clone, Debug)]
pub struct DistanceTable {
    size: usize,
    distances: Vec<f64>,
}

impl DistanceTable {
    pub fn new(locations: &[Location]) -> Result<Self, Error> {
        if locations.is_empty() {
            return Err(Error::NoLocations);
        }
        if let Some(nth) = locations.iter().position(|l| !l.is_finite()) {
            return Err(Error::NonFiniteLocation(nth));
        }
        let size = locations.len();
        let mut distances = vec![0.0; size * size];
        for i in 0..size {
            for j in i + 1..size {
                let distance = locations[i].distance(&locations[j]);
                distances[i * size + j] = distance;
                distances[j * size + i] = distance;
            }
        }
        Ok(DistanceTable { size, distances })
    }
    /// Number of locations, depot included.
    pub fn len(&self) -> usize {
        self.size
    }
    pub fn is_empty(&self) -> bool {
        self.size == 0
    }
    pub fn distance(&self, from: usize, to: usize) -> f64 {
        debug_assert!(from < self.size && to < self.size);
        self.distances[from * self.size + to]
    }
    /// Sum of consecutive edges along `path`, the closing edge included when
    /// the path returns to its start.
    pub fn path_length(&self, path: &[usize]) -> f64 {
        path.windows(2)
            .map(|edge| self.distance(edge[0], edge[1]))
            .sum()
    }
}

use crate::geometry::{DistanceTable, DEPOT};


/// A closed path leaving the depot, visiting every destination once and
/// returning to the depot, along with its total length.
#[derive(Clone, Debug, PartialEq)]
pub struct Tour {
    path: Vec<usize>,
    length: f64,
}

impl Tour {
    pub fn new(path: Vec<usize>, distances: &DistanceTable) -> Self {
        debug_assert!(Tour::is_closed_tour(&path, distances.len()));
        let length = distances.path_length(&path);
        Tour { path, length }
    }
    /// The trivial tour of a depot without destinations.
    pub fn depot_only() -> Self {
        Tour { path: vec![DEPOT, DEPOT], length: 0.0 }
    }
    pub fn path(&self) -> &[usize] {
        &self.path
    }
    pub fn length(&self) -> f64 {
        self.length
    }
    /// Every edge of the tour in travelling order, the closing one included.
    pub fn edges(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.path.windows(2).map(|edge| (edge[0], edge[1]))
    }
    /// Checks `path` has `size + 1` entries, starts and ends at the depot and
    /// holds every index below `size` exactly once before the return.
    pub fn is_closed_tour(path: &[usize], size: usize) -> bool {
        if path.len() != size + 1 || path[0] != DEPOT || path[size] != DEPOT {
            return false;
        }
        let mut seen = vec![false; size];
        for &node in &path[..size] {
            if node >= size || seen[node] {
                return false;
            }
            seen[node] = true;
        }
        true
    }
}

/// The shortest tour seen over a whole run.
#[derive(Clone, Debug, Default)]
pub struct BestTour {
    tour: Option<Tour>,
}

impl BestTour {
    pub fn new() -> Self {
        BestTour { tour: None }
    }
    pub fn tour(&self) -> Option<&Tour> {
        self.tour.as_ref()
    }
    pub fn path(&self) -> Option<&[usize]> {
        self.tour.as_ref().map(|tour| tour.path())
    }
    /// Infinite until a tour was offered.
    pub fn length(&self) -> f64 {
        self.tour.as_ref().map_or(f64::INFINITY, |tour| tour.length())
    }
    /// Keeps `candidate` only if it is strictly shorter, so the first of
    /// equally long tours stays.
    pub fn offer(&mut self, candidate: &Tour) -> bool {
        if candidate.length() < self.length() {
            self.tour = Some(candidate.clone());
            true
        } else {
            false
        }
    }
}


#[cfg(test)]
mod test {
    use super::*;
    use crate::geometry::Location;
    fn square() -> DistanceTable {
        DistanceTable::new(&[
            Location::new(0.0, 0.0),
            Location::new(1.0, 0.0),
            Location::new(1.0, 1.0),
            Location::new(0.0, 1.0),
        ]).unwrap()
    }
    #[test]
    fn test_closed_tour_check() {
        assert!(Tour::is_closed_tour(&[0, 1, 2, 3, 0], 4));
        assert!(Tour::is_closed_tour(&[0, 0], 1));
        assert!(!Tour::is_closed_tour(&[0, 1, 1, 3, 0], 4));
        assert!(!Tour::is_closed_tour(&[1, 0, 2, 3, 1], 4));
        assert!(!Tour::is_closed_tour(&[0, 1, 2, 0], 4));
        assert!(!Tour::is_closed_tour(&[0, 1, 2, 4, 0], 4));
    }
    #[test]
    fn test_tour_length_and_edges() {
        let tour = Tour::new(vec![0, 1, 2, 3, 0], &square());
        assert_eq!(tour.length(), 4.0);
        let edges: Vec<_> = tour.edges().collect();
        assert_eq!(edges, vec![(0, 1), (1, 2), (2, 3), (3, 0)]);
        assert_eq!(Tour::depot_only().length(), 0.0);
    }
    #[test]
    fn test_best_tour_keeps_first_of_ties() {
        let table = square();
        let mut best = BestTour::new();
        assert_eq!(best.length(), f64::INFINITY);
        assert!(best.path().is_none());

        let crossing = Tour::new(vec![0, 2, 1, 3, 0], &table);
        let perimeter = Tour::new(vec![0, 1, 2, 3, 0], &table);
        let reversed = Tour::new(vec![0, 3, 2, 1, 0], &table);
        assert!(best.offer(&crossing));
        assert!(best.offer(&perimeter));
        assert!(!best.offer(&reversed));
        assert!(!best.offer(&crossing));
        assert_eq!(best.path(), Some(&[0, 1, 2, 3, 0][..]));
        assert_eq!(best.length(), 4.0);
    }
}

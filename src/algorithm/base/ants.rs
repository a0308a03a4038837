use rand::Rng;
use crate::component::Tour;
use crate::geometry::{DistanceTable, DEPOT};
use super::pheromone::PheromoneMatrix;

/// Upper bound of inverse distance; coinciding locations get this instead of
/// an infinite visibility.
pub const MAX_VISIBILITY: f64 = 1e9;


/// Read-only view an ant walks on during one generation.
#[derive(Clone, Copy)]
pub struct Trail<'a> {
    pub distances: &'a DistanceTable,
    pub pheromone: &'a PheromoneMatrix,
    pub alpha: f64,
    pub beta: f64,
}

impl<'a> Trail<'a> {
    pub fn pack(distances: &'a DistanceTable, pheromone: &'a PheromoneMatrix,
                alpha: f64, beta: f64) -> Self {
        debug_assert_eq!(distances.len(), pheromone.len());
        Trail { distances, pheromone, alpha, beta }
    }
    pub fn visibility(&self, from: usize, to: usize) -> f64 {
        let distance = self.distances.distance(from, to);
        if distance > 0.0 {
            f64::min(1.0 / distance, MAX_VISIBILITY)
        } else {
            MAX_VISIBILITY
        }
    }
    /// `pheromone^alpha * visibility^beta`, finite and non-negative. Both
    /// factors are capped at `f64::MAX` before the product, so a pheromone
    /// term that underflowed to zero scores zero even against an overflowed
    /// visibility term.
    pub fn desirability(&self, from: usize, to: usize) -> f64 {
        let pheromone = f64::min(self.pheromone.level(from, to).powf(self.alpha), f64::MAX);
        let visibility = f64::min(self.visibility(from, to).powf(self.beta), f64::MAX);
        f64::min(pheromone * visibility, f64::MAX)
    }
}

/// One agent building a single closed tour from the depot.
pub struct Ant {
    visited: Vec<bool>,
    path: Vec<usize>,
    candidates: Vec<(usize, f64)>,
}

impl Ant {
    pub fn new(size: usize) -> Self {
        Ant {
            visited: vec![false; size],
            path: Vec::with_capacity(size + 1),
            candidates: Vec::with_capacity(size),
        }
    }
    pub fn traverse<R: Rng>(mut self, trail: &Trail, rng: &mut R) -> Tour {
        let size = self.visited.len();
        debug_assert!(size >= 1);
        self.path.push(DEPOT);
        self.visited[DEPOT] = true;
        let mut current = DEPOT;
        for _ in 1..size {
            let next = self.select_next(trail, current, rng);
            self.visited[next] = true;
            self.path.push(next);
            current = next;
        }
        self.path.push(DEPOT);
        Tour::new(self.path, trail.distances)
    }
    fn select_next<R: Rng>(&mut self, trail: &Trail, current: usize, rng: &mut R) -> usize {
        let visited = &self.visited;
        self.candidates.clear();
        self.candidates.extend((0..visited.len())
            .filter(|&node| !visited[node])
            .map(|node| (node, trail.desirability(current, node))));
        let rand_f = rng.gen_range(0.0..1.0);
        roulette(&self.candidates, rand_f)
    }
}

/// Roulette-wheel pick among `(node, score)` candidates in the given order:
/// the first node whose cumulative probability reaches `rand_f` wins, and the
/// last candidate is taken if rounding keeps the sweep below it.
pub fn roulette(candidates: &[(usize, f64)], rand_f: f64) -> usize {
    debug_assert!(!candidates.is_empty());
    // scale by the largest score first so the sum can not overflow
    let max = candidates.iter().map(|&(_, score)| score).fold(0.0, f64::max);
    let weight = |score: f64| if max > 0.0 { score / max } else { 1.0 };
    let sum: f64 = candidates.iter().map(|&(_, score)| weight(score)).sum();
    let mut accumulation = 0.0;
    for &(node, score) in candidates {
        let probability = weight(score) / sum;
        accumulation += probability;
        if probability > 0.0 && accumulation >= rand_f {
            return node;
        }
    }
    candidates[candidates.len() - 1].0
}

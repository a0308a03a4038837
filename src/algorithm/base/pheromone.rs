/// Entries never decay below the smallest normal double, so evaporation
/// alone does not zero an edge nor leave it subnormal.
const MIN_PH: f64 = f64::MIN_POSITIVE;


/// Symmetric table of pheromone intensity per edge.
#[derive(Clone, Debug, PartialEq)]
pub struct PheromoneMatrix {
    size: usize,
    levels: Vec<f64>,
}

impl PheromoneMatrix {
    pub fn new(size: usize, tao0: f64) -> Self {
        debug_assert!(tao0 > 0.0);
        PheromoneMatrix { size, levels: vec![tao0; size * size] }
    }
    pub fn len(&self) -> usize {
        self.size
    }
    pub fn is_empty(&self) -> bool {
        self.size == 0
    }
    pub fn level(&self, from: usize, to: usize) -> f64 {
        debug_assert!(from < self.size && to < self.size);
        self.levels[from * self.size + to]
    }
    pub fn deposit(&mut self, from: usize, to: usize, amount: f64) {
        debug_assert!(amount.is_sign_positive());
        self.levels[from * self.size + to] += amount;
        if from != to {
            self.levels[to * self.size + from] += amount;
        }
    }
    pub fn evaporate(&mut self, factor: f64) {
        debug_assert!(factor > 0.0 && factor <= 1.0);
        for level in self.levels.iter_mut() {
            *level = f64::max(*level * factor, MIN_PH);
        }
    }
    pub fn is_symmetric(&self) -> bool {
        (0..self.size).all(|i| {
            (i + 1..self.size).all(|j| self.level(i, j) == self.level(j, i))
        })
    }
}

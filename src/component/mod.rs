mod tour;

pub use tour::{BestTour, Tour};

mod location;
mod distance;

pub use location::Location;
pub use distance::DistanceTable;

/// Index of the depot every tour starts from and returns to.
pub const DEPOT: usize = 0;

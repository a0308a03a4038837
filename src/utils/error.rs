use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("no location given, the depot is required")]
    NoLocations,
    #[error("location #{0:02} has non-finite coordinates")]
    NonFiniteLocation(usize),
    #[error("iteration count must be positive")]
    NoIterations,
    #[error("ant count must be positive")]
    NoAnts,
    #[error("degradation factor {0} is outside (0, 1]")]
    DegradationOutOfRange(f64),
    #[error("exponents must be non-negative, got alpha {0} and beta {1}")]
    NegativeExponent(f64, f64),
    #[error("initial pheromone {0} must be positive")]
    NonPositivePheromone(f64),
    #[error("deposit scale {0} must be positive")]
    NonPositiveDeposit(f64),
    #[error("brute force handles at most {1} locations, got {0}")]
    TooManyLocations(usize, usize),
    #[error("unknown algorithm `{0}`")]
    UnknownAlgorithm(String),
    #[error("line {0}: malformed coordinate `{1}`")]
    MalformedCoordinate(usize, String),
    #[error("failed to read {0}")]
    Io(String, #[source] std::io::Error),
    #[error("failed to parse {0}")]
    Yaml(String, #[source] serde_yaml::Error),
}

use serde::Deserialize;
use argh::FromArgs;
use super::error::Error;

/// Find a short closed delivery tour from a depot through every destination
#[derive(FromArgs)]
pub struct Arguments {
    /// path to locations file, depot first
    #[argh(positional)]
    pub locations: String,
    /// path to configuration file
    #[argh(option, short='c', default="String::from(\"data/config/default.yaml\")")]
    pub config: String,
    /// override algorithm used to calculate the tour (aco or brute)
    #[argh(option, short='a')]
    pub algorithm: Option<String>,
    /// override random seed for ACO algorithm
    #[argh(option, short='s')]
    pub seed: Option<u64>,
    /// override iteration count for ACO algorithm
    #[argh(option, short='n')]
    pub iterations: Option<usize>,
    /// override ants per iteration for ACO algorithm
    #[argh(option, short='m')]
    pub ants: Option<usize>,
}

#[derive(Deserialize, Debug)]
pub struct Config {
    pub name: String,
    pub algorithm: String,
    pub seed: u64,
    #[serde(default)]
    pub parallel: bool,
    #[serde(default)]
    pub report_every: usize,
    pub parameters: Parameters,
}

#[derive(Deserialize, Clone, Debug, PartialEq)]
pub struct Parameters {
    pub iterations: usize,
    pub ants: usize,
    pub degradation: f64,
    pub alpha: f64,
    pub beta: f64,
    pub initial_pheromone: f64,
    pub deposit: f64,
}

impl Config {
    pub fn override_from_args(&mut self, args: Arguments) {
        if let Some(algorithm) = args.algorithm {
            self.algorithm = algorithm;
        }
        if let Some(seed) = args.seed {
            self.seed = seed;
        }
        if let Some(iterations) = args.iterations {
            self.parameters.iterations = iterations;
        }
        if let Some(ants) = args.ants {
            self.parameters.ants = ants;
        }
    }
}

impl Default for Parameters {
    fn default() -> Self {
        Parameters {
            iterations: 300,
            ants: 200,
            degradation: 0.9,
            alpha: 0.8,
            beta: 1.5,
            initial_pheromone: 0.1,
            deposit: 0.0001,
        }
    }
}

impl Parameters {
    /// Rejects a parameter set before any run state is built.
    pub fn validate(&self) -> Result<(), Error> {
        if self.iterations < 1 {
            return Err(Error::NoIterations);
        }
        if self.ants < 1 {
            return Err(Error::NoAnts);
        }
        if !(self.degradation > 0.0 && self.degradation <= 1.0) {
            return Err(Error::DegradationOutOfRange(self.degradation));
        }
        if !(self.alpha >= 0.0 && self.beta >= 0.0) {
            return Err(Error::NegativeExponent(self.alpha, self.beta));
        }
        if !(self.initial_pheromone > 0.0 && self.initial_pheromone.is_finite()) {
            return Err(Error::NonPositivePheromone(self.initial_pheromone));
        }
        if !(self.deposit > 0.0 && self.deposit.is_finite()) {
            return Err(Error::NonPositiveDeposit(self.deposit));
        }
        Ok(())
    }
}


#[cfg(test)]
mod test {
    use super::*;
    #[test]
    fn test_default_parameters_are_valid() {
        assert!(Parameters::default().validate().is_ok());
    }
    #[test]
    fn test_rejects_bad_parameters() {
        let base = Parameters::default();
        let cases = vec![
            Parameters { iterations: 0, ..base.clone() },
            Parameters { ants: 0, ..base.clone() },
            Parameters { degradation: 0.0, ..base.clone() },
            Parameters { degradation: 1.5, ..base.clone() },
            Parameters { degradation: f64::NAN, ..base.clone() },
            Parameters { alpha: -1.0, ..base.clone() },
            Parameters { beta: -0.1, ..base.clone() },
            Parameters { initial_pheromone: 0.0, ..base.clone() },
            Parameters { deposit: -1.0, ..base.clone() },
        ];
        for params in cases {
            assert!(params.validate().is_err(), "{:?} should be rejected", params);
        }
        let edge = Parameters { degradation: 1.0, alpha: 0.0, beta: 0.0, ..base };
        assert!(edge.validate().is_ok());
    }
    #[test]
    fn test_override_from_args() {
        let mut config = Config {
            name: String::from("test"),
            algorithm: String::from("aco"),
            seed: 420,
            parallel: false,
            report_every: 0,
            parameters: Parameters::default(),
        };
        let args = Arguments {
            locations: String::from("unused.txt"),
            config: String::from("unused.yaml"),
            algorithm: Some(String::from("brute")),
            seed: Some(7),
            iterations: None,
            ants: Some(12),
        };
        config.override_from_args(args);
        assert_eq!(config.algorithm, "brute");
        assert_eq!(config.seed, 7);
        assert_eq!(config.parameters.iterations, 300);
        assert_eq!(config.parameters.ants, 12);
    }
}

use std::fs;

use serde::Deserialize;

use super::config::Config;
use super::error::Error;
use crate::geometry::Location;

/// `locations: [[x, y], ...]`, the depot first.
#[derive(Deserialize)]
struct LocationsYaml {
    locations: Vec<Location>,
}

pub fn load_locations(path: &str) -> Result<Vec<Location>, Error> {
    let text = read(path)?;
    parse_locations(&text)
        .map_err(|err| Error::Yaml(path.to_owned(), err))
}

fn parse_locations(text: &str) -> Result<Vec<Location>, serde_yaml::Error> {
    let yaml: LocationsYaml = serde_yaml::from_str(text)?;
    Ok(yaml.locations)
}

pub fn load_config(path: &str) -> Result<Config, Error> {
    let text = read(path)?;
    serde_yaml::from_str(&text)
        .map_err(|err| Error::Yaml(path.to_owned(), err))
}

fn read(path: &str) -> Result<String, Error> {
    fs::read_to_string(path)
        .map_err(|err| Error::Io(path.to_owned(), err))
}

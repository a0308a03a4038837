pub mod algorithm;
pub mod component;
pub mod geometry;
pub mod planner;
pub mod utils;

use geometry::Location;
use std::path::Path;
use utils::error::Error;

/// Loads locations from a YAML file (`.yaml`, `.yml`) or from plain `x,y` lines.
pub fn read_locations_from_file(file_name: &str) -> Result<Vec<Location>, Error> {
    let extension = Path::new(file_name).extension().and_then(|ext| ext.to_str());
    match extension {
        Some("yaml") | Some("yml") => utils::yaml::load_locations(file_name),
        _ => utils::coords::load_locations(file_name),
    }
}

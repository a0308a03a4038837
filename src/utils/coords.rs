use std::fs;
use itertools::Itertools;
use crate::geometry::Location;
use super::error::Error;


/// Reads one `x,y` pair per line, the depot on the first line.
pub fn load_locations(path: &str) -> Result<Vec<Location>, Error> {
    let text = fs::read_to_string(path)
        .map_err(|err| Error::Io(path.to_owned(), err))?;
    parse_locations(&text)
}

pub fn parse_locations(text: &str) -> Result<Vec<Location>, Error> {
    text.lines()
        .enumerate()
        .filter(|(_, line)| !line.trim().is_empty())
        .map(|(nth, line)| parse_line(nth + 1, line))
        .collect()
}

fn parse_line(lineno: usize, line: &str) -> Result<Location, Error> {
    let malformed = || Error::MalformedCoordinate(lineno, line.trim().to_owned());
    let (x, y) = line.split(',')
        .map(|part| part.trim().parse::<f64>())
        .collect_tuple()
        .ok_or_else(malformed)?;
    match (x, y) {
        (Ok(x), Ok(y)) => Ok(Location::new(x, y)),
        _ => Err(malformed()),
    }
}

use ant_tour::planner::Planner;
use ant_tour::read_locations_from_file;
use ant_tour::utils::config::Arguments;
use ant_tour::utils::error::Error;
use ant_tour::utils::{telemetry, yaml};

fn main() -> Result<(), Error> {
    let args: Arguments = argh::from_env();
    let mut config = yaml::load_config(&args.config)?;
    let locations = read_locations_from_file(&args.locations)?;
    config.override_from_args(args);

    let mut planner = Planner::new(&locations, config, telemetry::stdout_logger())?;
    let (_, time) = planner.plan();
    println!("--- computing time: {} μs ---", time);
    Ok(())
}

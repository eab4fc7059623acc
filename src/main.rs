use coffee_steam::{Simulation, SimulationError};

fn main() -> Result<(), SimulationError> {
    use env_logger::Env;
    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();

    Simulation::new().run()
}

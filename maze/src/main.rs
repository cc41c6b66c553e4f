//! Prints the shortest route through the maze from the fixed start room to
//! the fixed goal room.

use maze_lib::{SearchConfig, report, rooms, solve};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let doors = rooms::build()?;
    let cfg = SearchConfig::default();
    log::info!("searching {} -> {}", cfg.start, cfg.goal);

    let path = solve(&doors, &cfg);
    println!("{}", report::render_path(&path));
    Ok(())
}

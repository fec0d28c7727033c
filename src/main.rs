// main.rs
use raycaster::window::WindowPlatform;
use raycaster::{Config, Maze, Platform, Session};
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

// Player spawn in map pixels: inside the top-left open cell
const SPAWN_X: f32 = 75.0;
const SPAWN_Y: f32 = 75.0;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(EnvFilter::from_default_env().add_directive("raycaster=info".parse()?))
        .init();

    let config = Config::default();
    let mut session = Session::new(config.clone(), Maze::reference())?;

    // no window, no loop
    let mut platform = WindowPlatform::init(&config.title, config.width, config.height)?;

    session.spawn_player(SPAWN_X, SPAWN_Y);
    session.run(&mut platform)?;
    session.shutdown();

    Ok(())
}

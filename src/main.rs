use std::env;
use std::io;
use std::path::PathBuf;

use anyhow::{Context, Result};
use log::info;

use campus_walk::{Game, load_bundled_world, load_world_from_file};

fn main() -> Result<()> {
    env_logger::init();

    let world = match env::args().nth(1).map(PathBuf::from) {
        Some(path) => load_world_from_file(&path)
            .with_context(|| format!("failed to load room map '{}'", path.display()))?,
        None => load_bundled_world().context("bundled room map is broken")?,
    };
    info!("room map: {}", world.name);

    let mut game = Game::new(world)?;

    let stdin = io::stdin();
    let stdout = io::stdout();
    game.run(&mut stdin.lock(), &mut stdout.lock())?;

    // Input closed mid-prompt; finish the "> " line.
    println!();
    Ok(())
}

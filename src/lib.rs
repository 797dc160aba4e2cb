pub mod engine;
pub mod error;
pub mod world;

use std::io::{BufRead, Write};

use log::info;

use engine::{Output, move_player, prompt_for_exit, render_room};
use world::{Room, World};

pub use error::{GameError, LookupError};
pub use world::{load_bundled_world, load_world_from_file, load_world_from_str};

/// The room map plus where the player currently stands.
pub struct Game {
    world: World,
    current_room_id: String,
}

impl Game {
    /// Places the player in the map's start room.
    pub fn new(world: World) -> Result<Self, LookupError> {
        if world.start().is_none() {
            return Err(LookupError::UnknownStart(world.start_room.clone()));
        }
        let current_room_id = world.start_room.clone();
        Ok(Game {
            world,
            current_room_id,
        })
    }

    pub fn world(&self) -> &World {
        &self.world
    }

    pub fn current_room(&self) -> &Room {
        // current_room_id only ever holds ids taken from the map itself.
        &self.world.rooms[&self.current_room_id]
    }

    pub fn render_current(&self) -> Output {
        let mut out = Output::new();
        render_room(&mut out, self.current_room());
        out
    }

    /// Follows an exit from the current room.
    pub fn go(&mut self, direction: &str) -> Result<&Room, LookupError> {
        let next_id = move_player(&self.world, &self.current_room().exits, direction)?
            .id
            .clone();
        self.current_room_id = next_id;
        Ok(self.current_room())
    }

    /// Display, prompt, move, forever. Returns once `input` runs dry.
    pub fn run<R: BufRead, W: Write>(
        &mut self,
        input: &mut R,
        term: &mut W,
    ) -> Result<(), GameError> {
        loop {
            self.render_current().write_to(term)?;

            let choice = prompt_for_exit(input, term, &self.world, &self.current_room().exits)?;
            let Some(direction) = choice else {
                info!("input closed in '{}'", self.current_room_id);
                return Ok(());
            };

            self.go(&direction)?;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const START_AND_HALL: &str = r#"
        [world]
        start_room = "Start"

        [[room]]
        id = "Start"
        name = "Start"
        description = "A bare room."

        [[room.exit]]
        direction = "north"
        target = "Hall"

        [[room]]
        id = "Hall"
        name = "Hall"
        description = "A long hall."
    "#;

    #[test]
    fn starts_in_start_room() {
        let game = Game::new(load_world_from_str(START_AND_HALL).unwrap()).unwrap();
        assert_eq!(game.current_room().id, "Start");
    }

    #[test]
    fn rejects_world_without_start_room() {
        let mut world = load_world_from_str(START_AND_HALL).unwrap();
        world.start_room = "Lobby".into();
        assert!(matches!(
            Game::new(world),
            Err(LookupError::UnknownStart(id)) if id == "Lobby"
        ));
    }

    #[test]
    fn go_updates_position() {
        let mut game = Game::new(load_world_from_str(START_AND_HALL).unwrap()).unwrap();
        assert_eq!(game.go("north").unwrap().id, "Hall");
        assert_eq!(game.current_room().id, "Hall");
    }

    #[test]
    fn failed_go_keeps_position() {
        let mut game = Game::new(load_world_from_str(START_AND_HALL).unwrap()).unwrap();
        assert!(game.go("south").is_err());
        assert_eq!(game.current_room().id, "Start");
    }

    #[test]
    fn run_walks_until_input_ends() {
        let mut game = Game::new(load_world_from_str(START_AND_HALL).unwrap()).unwrap();
        let mut input = std::io::Cursor::new("  NORTH!! \n");
        let mut term = Vec::new();
        game.run(&mut input, &mut term).unwrap();

        assert_eq!(game.current_room().id, "Hall");
        assert_eq!(
            String::from_utf8(term).unwrap(),
            "\nSTART\n\nA bare room.\n\n\
             You can:\nGo NORTH to Hall.\nWhere do you want to go?\n> \
             \nHALL\n\nA long hall.\n\n\
             You can:\nWhere do you want to go?\n> "
        );
    }
}

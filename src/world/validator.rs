use std::fmt;

use super::model::World;
use crate::engine::normalize;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    pub message: String,
}

impl ValidationError {
    fn new(msg: impl Into<String>) -> Self {
        ValidationError {
            message: msg.into(),
        }
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

/// Collects every data-integrity problem in the room map. An empty result means
/// every exit resolves and the start room exists.
pub fn validate_world(world: &World) -> Vec<ValidationError> {
    let mut errors: Vec<ValidationError> = Vec::new();

    if world.rooms.is_empty() {
        errors.push(ValidationError::new("room map has no rooms"));
    }

    if !world.rooms.contains_key(&world.start_room) {
        errors.push(ValidationError::new(format!(
            "start_room '{}' not found among rooms",
            world.start_room
        )));
    }

    // Sorted so reports are stable across runs.
    let mut room_ids: Vec<&String> = world.rooms.keys().collect();
    room_ids.sort();

    for room_id in room_ids {
        let room = &world.rooms[room_id];

        if room.name.trim().is_empty() {
            errors.push(ValidationError::new(format!(
                "room '{}' has an empty name",
                room_id
            )));
        }

        for exit in room.exits.iter() {
            if exit.direction.trim().is_empty() {
                errors.push(ValidationError::new(format!(
                    "room '{}' has an exit with an empty direction",
                    room_id
                )));
            } else if normalize(&exit.direction) != exit.direction {
                // Input is normalized before it is matched against exits.
                errors.push(ValidationError::new(format!(
                    "room '{}' exit '{}' can never be typed; write it as '{}'",
                    room_id,
                    exit.direction,
                    normalize(&exit.direction)
                )));
            }
            if !world.rooms.contains_key(&exit.target) {
                errors.push(ValidationError::new(format!(
                    "room '{}' exit '{}' targets missing room '{}'",
                    room_id, exit.direction, exit.target
                )));
            }
        }
    }

    errors
}

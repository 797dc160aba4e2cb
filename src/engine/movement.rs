use log::info;

use crate::error::LookupError;
use crate::world;

/// The room an exit leads into.
///
/// `direction` is expected to have come through the menu already; anything else
/// is reported as a lookup fault instead of being trusted.
pub fn move_player<'w>(
    world: &'w world::World,
    exits: &world::Exits,
    direction: &str,
) -> Result<&'w world::Room, LookupError> {
    let target = exits
        .get(direction)
        .ok_or_else(|| LookupError::UnknownExit {
            direction: direction.to_string(),
        })?;

    let room = world
        .room(target)
        .ok_or_else(|| LookupError::UnknownRoom {
            direction: direction.to_string(),
            room_id: target.to_string(),
        })?;

    info!("moving {} to '{}'", direction, room.id);
    Ok(room)
}

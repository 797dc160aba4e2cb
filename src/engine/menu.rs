use std::io::{BufRead, Write};

use log::debug;

use crate::engine::output::Output;
use crate::engine::text::normalize;
use crate::error::{GameError, LookupError};
use crate::world;

/// Name of the room an exit leads into.
pub fn exit_leads_to<'w>(
    world: &'w world::World,
    exits: &world::Exits,
    direction: &str,
) -> Result<&'w str, LookupError> {
    let room_id = exits
        .get(direction)
        .ok_or_else(|| LookupError::UnknownExit {
            direction: direction.to_string(),
        })?;
    world
        .room(room_id)
        .map(|room| room.name.as_str())
        .ok_or_else(|| LookupError::UnknownRoom {
            direction: direction.to_string(),
            room_id: room_id.to_string(),
        })
}

pub fn format_exit_line(direction: &str, leads_to: &str) -> String {
    format!("Go {} to {}.", direction.to_uppercase(), leads_to)
}

/// "You can:", one line per exit in authored order, then the question.
pub fn render_menu(
    out: &mut Output,
    world: &world::World,
    exits: &world::Exits,
) -> Result<(), LookupError> {
    out.say("You can:");
    for exit in exits.iter() {
        let leads_to = exit_leads_to(world, exits, &exit.direction)?;
        out.say(format_exit_line(&exit.direction, leads_to));
    }
    out.say("Where do you want to go?");
    Ok(())
}

/// Exact key match; the caller normalizes first.
pub fn is_valid_exit(exits: &world::Exits, choice: &str) -> bool {
    exits.contains(choice)
}

/// Shows the menu and reads lines until one names an exit.
///
/// Returns `Ok(None)` once the input is exhausted, which is the only way out
/// of the loop other than an error.
pub fn prompt_for_exit<R: BufRead, W: Write>(
    input: &mut R,
    term: &mut W,
    world: &world::World,
    exits: &world::Exits,
) -> Result<Option<String>, GameError> {
    loop {
        let mut out = Output::new();
        render_menu(&mut out, world, exits)?;
        out.write_to(term)?;

        write!(term, "> ")?;
        term.flush()?;

        // Raw bytes: a line that is not UTF-8 is just another unknown direction.
        let mut raw = Vec::new();
        if input.read_until(b'\n', &mut raw)? == 0 {
            return Ok(None);
        }

        let choice = normalize(&String::from_utf8_lossy(&raw));
        if is_valid_exit(exits, &choice) {
            return Ok(Some(choice));
        }
        debug!("no exit matches {:?}", choice);
    }
}

use crate::engine::output::Output;
use crate::world;

/// Blank line, upper-cased name, blank line, description, blank line.
pub fn render_room(out: &mut Output, room: &world::Room) {
    out.blank();
    out.say(room.name.to_uppercase());
    out.blank();
    out.say(room.description.as_str());
    out.blank();
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::world::{Exits, Room};

    #[test]
    fn renders_name_and_description_with_spacing() {
        let room = Room {
            id: "Office".into(),
            name: "The General Office".into(),
            description: "You are standing next to the cashier's till at\n30-36 Newport Road."
                .into(),
            exits: Exits::new(),
        };
        let mut out = Output::new();
        render_room(&mut out, &room);
        assert_eq!(
            out.to_text(),
            "\nTHE GENERAL OFFICE\n\nYou are standing next to the cashier's till at\n30-36 Newport Road.\n\n"
        );
    }

    #[test]
    fn queues_five_blocks() {
        use crate::engine::output::OutputBlock::{Blank, Text};

        let room = Room {
            id: "Tutor".into(),
            name: "your tutor's office".into(),
            description: "Quiet.".into(),
            exits: Exits::new(),
        };
        let mut out = Output::new();
        render_room(&mut out, &room);
        assert_eq!(
            out.blocks,
            vec![
                Blank,
                Text("YOUR TUTOR'S OFFICE".into()),
                Blank,
                Text("Quiet.".into()),
                Blank
            ]
        );
    }

    #[test]
    fn empty_description_still_gets_its_line() {
        let room = Room {
            id: "Hall".into(),
            name: "hall".into(),
            description: String::new(),
            exits: Exits::new(),
        };
        let mut out = Output::new();
        render_room(&mut out, &room);
        assert_eq!(out.to_text(), "\nHALL\n\n\n\n");
    }
}

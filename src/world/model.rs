use std::collections::HashMap;

////////////////////////
/// ROOM MAP STRUCTS ///
////////////////////////

/// Runtime room map used by the game loop.
#[derive(Debug, Clone, PartialEq)]
pub struct World {
    pub name: String,
    pub start_room: String,
    pub rooms: HashMap<String, Room>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Room {
    pub id: String,
    pub name: String,
    pub description: String,
    pub exits: Exits,
}

/// Direction -> target room id, kept in authored order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Exits {
    entries: Vec<Exit>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Exit {
    pub direction: String,
    pub target: String,
}

impl Exits {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends an exit. A repeated direction replaces the earlier target in place.
    pub fn insert(&mut self, direction: impl Into<String>, target: impl Into<String>) {
        let direction = direction.into();
        let target = target.into();
        match self.entries.iter_mut().find(|e| e.direction == direction) {
            Some(existing) => existing.target = target,
            None => self.entries.push(Exit { direction, target }),
        }
    }

    /// Target room id for an exact direction key.
    pub fn get(&self, direction: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|e| e.direction == direction)
            .map(|e| e.target.as_str())
    }

    pub fn contains(&self, direction: &str) -> bool {
        self.get(direction).is_some()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Exit> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<D, T> FromIterator<(D, T)> for Exits
where
    D: Into<String>,
    T: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (D, T)>>(iter: I) -> Self {
        let mut exits = Exits::new();
        for (direction, target) in iter {
            exits.insert(direction, target);
        }
        exits
    }
}

impl World {
    pub fn room(&self, id: &str) -> Option<&Room> {
        self.rooms.get(id)
    }

    pub fn start(&self) -> Option<&Room> {
        self.rooms.get(&self.start_room)
    }
}

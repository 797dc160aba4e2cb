use serde::Deserialize;
use std::collections::HashMap;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use log::{info, warn};
use thiserror::Error;

use super::model::{Exits, Room, World};
use super::validator::{ValidationError, validate_world};

/// The campus map shipped with the binary.
pub const BUNDLED_MAP: &str = include_str!("../../data/rooms.toml");

////////////////////
/// TOML STRUCTS ///
////////////////////

#[derive(Deserialize)]
struct MapFile {
    world: MapHeader,
    #[serde(default)]
    room: Vec<RoomConfig>, // [[room]] blocks
}

#[derive(Deserialize)]
struct MapHeader {
    #[serde(default)]
    name: String,
    start_room: String,
}

#[derive(Deserialize)]
struct RoomConfig {
    id: String,
    name: String,
    #[serde(default)]
    description: String,

    #[serde(default)]
    exit: Vec<ExitConfig>, // [[room.exit]]
}

#[derive(Deserialize)]
struct ExitConfig {
    direction: String,
    target: String,
}

#[derive(Debug, Error)]
pub enum LoadError {
    #[error("could not read map file '{}'", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("map is not valid TOML: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("world.start_room may not be empty")]
    EmptyStartRoom,
    #[error("duplicate room id: {0}")]
    DuplicateRoom(String),
    #[error("room '{room}' declares exit '{direction}' more than once")]
    DuplicateExit { room: String, direction: String },
    #[error("map failed validation: {}", join_messages(.0))]
    Invalid(Vec<ValidationError>),
}

fn join_messages(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(|e| e.message.as_str())
        .collect::<Vec<_>>()
        .join("; ")
}

/////////////////////////////
/// TOML LOADER FUNCTIONS ///
/////////////////////////////

/// Load a room map from a .toml file on disk.
pub fn load_world_from_file(path: &Path) -> Result<World, LoadError> {
    let contents = fs::read_to_string(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    info!("read room map from {}", path.display());
    load_world_from_str(&contents)
}

/// Load the map compiled into the binary.
pub fn load_bundled_world() -> Result<World, LoadError> {
    load_world_from_str(BUNDLED_MAP)
}

/// Parse, build and validate a room map from TOML text.
pub fn load_world_from_str(contents: &str) -> Result<World, LoadError> {
    let map_file: MapFile = toml::from_str(contents)?;

    if map_file.world.start_room.trim().is_empty() {
        return Err(LoadError::EmptyStartRoom);
    }

    let mut rooms_map: HashMap<String, Room> = HashMap::new();

    for room_cfg in map_file.room {
        if rooms_map.contains_key(&room_cfg.id) {
            return Err(LoadError::DuplicateRoom(room_cfg.id));
        }

        let mut exits = Exits::new();
        for e in room_cfg.exit {
            if exits.contains(&e.direction) {
                return Err(LoadError::DuplicateExit {
                    room: room_cfg.id,
                    direction: e.direction,
                });
            }
            exits.insert(e.direction, e.target);
        }

        rooms_map.insert(
            room_cfg.id.clone(),
            Room {
                id: room_cfg.id,
                name: room_cfg.name,
                description: normalize_multiline_desc(&room_cfg.description),
                exits,
            },
        );
    }

    let world = World {
        name: map_file.world.name,
        start_room: map_file.world.start_room,
        rooms: rooms_map,
    };

    let errors = validate_world(&world);
    if !errors.is_empty() {
        for e in &errors {
            warn!("room map: {}", e);
        }
        return Err(LoadError::Invalid(errors));
    }

    info!(
        "loaded {} rooms, starting in '{}'",
        world.rooms.len(),
        world.start_room
    );
    Ok(world)
}

/// Removes the indentation shared by every non-blank line and drops blank lines at
/// either end. Everything else, including deeper indentation and blank runs, is kept.
fn normalize_multiline_desc(raw: &str) -> String {
    let lines: Vec<&str> = raw.lines().collect();
    let is_blank = |line: &&str| line.trim().is_empty();

    let (Some(first), Some(last)) = (
        lines.iter().position(|l| !is_blank(l)),
        lines.iter().rposition(|l| !is_blank(l)),
    ) else {
        return String::new();
    };
    let body = &lines[first..=last];

    let indent = body
        .iter()
        .filter(|l| !is_blank(l))
        .map(|l| l.len() - l.trim_start().len())
        .min()
        .unwrap_or(0);

    body.iter()
        .map(|&l| {
            if l.trim().is_empty() {
                ""
            } else {
                l.get(indent..).unwrap_or(l).trim_end()
            }
        })
        .collect::<Vec<_>>()
        .join("\n")
}

mod loader;
mod model;
mod validator;

pub use loader::{
    BUNDLED_MAP, LoadError, load_bundled_world, load_world_from_file, load_world_from_str,
};

// Only what the engine and the binary use.
pub use model::{Exit, Exits, Room, World};
pub use validator::{ValidationError, validate_world};

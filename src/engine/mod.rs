mod menu;
mod movement;
mod output;
mod render;
mod text;

pub use menu::{exit_leads_to, format_exit_line, is_valid_exit, prompt_for_exit, render_menu};
pub use movement::move_player;
pub use output::{Output, OutputBlock};
pub use render::render_room;
pub use text::{normalize, remove_punctuation, trim};

pub mod command;
pub mod input;
pub mod render;

pub use command::{parse_command, Command};
pub use input::read_commands;
pub use render::{render_json, render_text};
